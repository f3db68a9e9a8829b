use std::cmp::Ordering;

use semver_tools::{Build, Identifier, ParseErrorKind, PreRelease, SemanticVersion};

fn v(s: &str) -> SemanticVersion {
    SemanticVersion::parse(s).unwrap_or_else(|e| panic!("{s}: {e}"))
}

const CORPUS: &[&str] = &[
    "0.0.0",
    "0.0.1",
    "0.0.1+00",
    "0.0.1+1-1",
    "0.0.1+a-b",
    "0.1.0",
    "1.0.0-0",
    "1.0.0-0.3.7",
    "1.0.0-alpha",
    "1.0.0-alpha+001",
    "1.0.0-alpha.1",
    "1.0.0-alpha.beta",
    "1.0.0-alpha-a.b-c-somethinglong+build.1-aef.1-its-okay",
    "1.0.0-beta",
    "1.0.0-beta.2",
    "1.0.0-beta.11",
    "1.0.0-rc.1",
    "1.0.0-rc.1+build.1",
    "1.0.0-x.7.z.92",
    "1.0.0-x-y-z.--",
    "1.0.0",
    "1.0.0+20130313144700",
    "1.0.0+exp.sha.5114f85",
    "1.0.0+21AF26D3----117B344092BD",
    "1.2.3----RC-SNAPSHOT.12.9.1--.12+788",
    "2.0.0",
    "2.1.0",
    "2.1.1",
    "10.20.30",
    "18446744073709551615.0.0",
];

#[test]
fn test_parse_pre_release_identifiers() {
    let version = v("1.0.0-alpha.1");
    assert_eq!(
        (version.major(), version.minor(), version.patch()),
        (1, 0, 0)
    );

    let identifiers = version.pre_release().unwrap().identifiers();
    assert_eq!(identifiers.len(), 2);
    assert_eq!(identifiers[0].as_alphanumeric(), Some("alpha"));
    assert_eq!(identifiers[1].as_numeric(), Some(1));
    assert!(version.build().is_none());
}

#[test]
fn test_sort_reproduces_semver_order() {
    let expected = [
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-alpha.beta",
        "1.0.0-beta",
        "1.0.0-beta.2",
        "1.0.0-beta.11",
        "1.0.0-rc.1",
        "1.0.0",
    ];

    let mut versions: Vec<SemanticVersion> = expected.iter().rev().map(|s| v(s)).collect();
    versions.sort_by(SemanticVersion::compare_to);

    let sorted: Vec<String> = versions.iter().map(SemanticVersion::as_string).collect();
    assert_eq!(sorted, expected);

    let mut versions: Vec<SemanticVersion> = expected.iter().rev().map(|s| v(s)).collect();
    versions.sort();
    let sorted: Vec<String> = versions.iter().map(ToString::to_string).collect();
    assert_eq!(sorted, expected);
}

#[test]
fn test_core_order() {
    let expected = ["1.0.0", "2.0.0", "2.1.0", "2.1.1"];
    let mut versions: Vec<SemanticVersion> = expected.iter().rev().map(|s| v(s)).collect();
    versions.sort_by(SemanticVersion::compare_to);
    let sorted: Vec<String> = versions.iter().map(ToString::to_string).collect();
    assert_eq!(sorted, expected);
}

#[test]
fn test_round_trip() {
    for input in CORPUS {
        let version = v(input);
        assert_eq!(version.as_string(), *input);
        assert_eq!(v(&version.as_string()), version);
    }
}

#[test]
fn test_round_trip_constructed_versions() {
    let constructed = [
        SemanticVersion::new(3, 2, 1),
        SemanticVersion::new(0, 0, 0)
            .with_pre_release(Some(PreRelease::new([Identifier::numeric(0)]).unwrap())),
        SemanticVersion::new(1, 2, 3)
            .with_pre_release(Some("alpha.007a.9".parse().unwrap()))
            .with_build(Some("007.build-1".parse().unwrap())),
        SemanticVersion::new(u64::MAX, u64::MAX, u64::MAX)
            .with_build(Some(Build::new([Identifier::numeric(u64::MAX)]).unwrap())),
    ];

    for version in constructed {
        assert_eq!(v(&version.as_string()), version);
    }
}

#[test]
fn test_order_is_total_and_transitive() {
    let versions: Vec<SemanticVersion> = CORPUS.iter().map(|s| v(s)).collect();

    for a in &versions {
        assert_eq!(a.compare_to(a), Ordering::Equal);
        for b in &versions {
            let ab = a.compare_to(b);
            assert_eq!(ab, b.compare_to(a).reverse(), "{a} vs {b}");
            assert_eq!(a.precedes(b), ab == Ordering::Less);
            assert_eq!(a.succeeds(b), ab == Ordering::Greater);

            for c in &versions {
                if a.precedes(b) && b.precedes(c) {
                    assert!(a.precedes(c), "{a} < {b} < {c}");
                }
            }
        }
    }
}

#[test]
fn test_ord_agrees_with_eq() {
    let versions: Vec<SemanticVersion> = CORPUS.iter().map(|s| v(s)).collect();
    for a in &versions {
        for b in &versions {
            assert_eq!(a.cmp(b) == Ordering::Equal, a == b, "{a} vs {b}");
            if a.compare_to(b) != Ordering::Equal {
                assert_eq!(a.cmp(b), a.compare_to(b));
            }
        }
    }
}

#[test]
fn test_build_is_irrelevant_to_precedence() {
    for base in ["1.0.0", "1.0.0-alpha.1", "0.0.1-0"] {
        let left = v(&format!("{base}+build.1"));
        let right = v(&format!("{base}+build.2"));
        assert_eq!(left.compare_to(&right), Ordering::Equal);
        assert_ne!(left, right);

        let bare = v(base);
        assert_eq!(bare.compare_to(&left), Ordering::Equal);
        assert_ne!(bare, left);
    }
}

#[test]
fn test_pre_release_precedes_release() {
    let pre_releases = ["alpha", "0", "rc.1", "x-y-z.--", "999"];
    for core in ["0.0.0", "1.2.3", "10.20.30"] {
        let release = v(core);
        for pre in pre_releases {
            let pre_release = release.with_pre_release(Some(pre.parse().unwrap()));
            assert_eq!(pre_release.compare_to(&release), Ordering::Less);
            assert_eq!(release.compare_to(&pre_release), Ordering::Greater);
        }
    }
}

#[test]
fn test_leading_zeroes_are_rejected() {
    for input in ["01.1.0", "1.01.0", "0.0.01", "1.0.0-001"] {
        let err = SemanticVersion::parse(input).unwrap_err();
        assert!(
            matches!(err.kind(), ParseErrorKind::LeadingZero { .. }),
            "{input}: {err:?}"
        );
    }

    let version = v("0.0.1+00");
    assert_eq!(version.build().unwrap().to_string(), "00");
}

#[test]
fn test_malformed_versions_fail() {
    for input in ["1.1.1.1", "1.a.1", "", "1.0.0++", "  ", "1", "1.2", "v1.2.3", "1.2.3-", "1.2.3+", "1.2.3-a..b", " 1.2.3"] {
        assert!(SemanticVersion::parse(input).is_err(), "{input:?} should fail");
    }

    assert_eq!(
        SemanticVersion::parse("").unwrap_err().kind(),
        &ParseErrorKind::EmptyInput
    );
}

#[test]
fn test_hyphen_after_plus_is_content() {
    let version = v("0.0.1+1-1");
    assert!(version.pre_release().is_none());
    assert_eq!(version.build().unwrap().to_string(), "1-1");

    let version = v("0.0.1+a-b");
    assert!(version.pre_release().is_none());
    assert_eq!(
        version.build().unwrap().identifiers()[0].as_alphanumeric(),
        Some("a-b")
    );

    let version = v("1.0.0-a-b+c-d");
    assert_eq!(version.pre_release().unwrap().to_string(), "a-b");
    assert_eq!(version.build().unwrap().to_string(), "c-d");
}

#[test]
fn test_numeric_identifiers_precede_alphanumeric() {
    assert!(v("1.0.0-999").precedes(&v("1.0.0-a")));
    assert!(v("1.0.0-alpha.1").precedes(&v("1.0.0-alpha.a")));
    assert!(v("1.0.0-1").precedes(&v("1.0.0-1a")));
}
