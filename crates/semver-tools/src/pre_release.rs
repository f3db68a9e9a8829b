//! Pre-release and build metadata identifier sequences

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ConstructionError;
use crate::identifier::Identifier;

/// The dot-separated identifiers following `-` in a version
///
/// A pre-release lowers the precedence of a version relative to the same core.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreRelease {
    identifiers: Vec<Identifier>,
}

/// The dot-separated identifiers following `+` in a version
///
/// Build metadata never takes part in precedence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Build {
    identifiers: Vec<Identifier>,
}

impl PreRelease {
    /// Create a pre-release from at least one identifier.
    ///
    /// Digit-only alphanumeric identifiers (`"007"`, numbers beyond `u64`) are
    /// refused since they could not be parsed back from the version string.
    pub fn new<I>(identifiers: I) -> Result<Self, ConstructionError>
    where
        I: IntoIterator<Item = Identifier>,
    {
        let identifiers: Vec<Identifier> = identifiers.into_iter().collect();
        if identifiers.is_empty() {
            return Err(ConstructionError::InvalidArgument(
                "a pre-release needs at least one identifier".to_string(),
            ));
        }
        if let Some(identifier) = identifiers.iter().find(|id| id.is_non_canonical_number()) {
            return Err(ConstructionError::InvalidArgument(format!(
                "pre-release identifier \"{}\" is not a valid numeric identifier",
                identifier
            )));
        }
        Ok(Self { identifiers })
    }

    pub(crate) fn from_parsed(identifiers: Vec<Identifier>) -> Self {
        debug_assert!(!identifiers.is_empty());
        Self { identifiers }
    }

    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    /// Dot-joined text of all identifiers
    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl Build {
    /// Create build metadata from at least one identifier.
    pub fn new<I>(identifiers: I) -> Result<Self, ConstructionError>
    where
        I: IntoIterator<Item = Identifier>,
    {
        let identifiers: Vec<Identifier> = identifiers.into_iter().collect();
        if identifiers.is_empty() {
            return Err(ConstructionError::InvalidArgument(
                "build metadata needs at least one identifier".to_string(),
            ));
        }
        Ok(Self { identifiers })
    }

    pub(crate) fn from_parsed(identifiers: Vec<Identifier>) -> Self {
        debug_assert!(!identifiers.is_empty());
        Self { identifiers }
    }

    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    /// Dot-joined text of all identifiers
    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

/// Pairwise by identifier precedence; when one list is a prefix of the other,
/// the shorter list is lower.
impl Ord for PreRelease {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identifiers.iter().cmp(other.identifiers.iter())
    }
}

impl PartialOrd for PreRelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn write_dotted(f: &mut fmt::Formatter<'_>, identifiers: &[Identifier]) -> fmt::Result {
    for (i, identifier) in identifiers.iter().enumerate() {
        if i > 0 {
            f.write_str(".")?;
        }
        write!(f, "{}", identifier)?;
    }
    Ok(())
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dotted(f, &self.identifiers)
    }
}

impl fmt::Display for Build {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dotted(f, &self.identifiers)
    }
}

fn split_identifiers(s: &str) -> Result<Vec<Identifier>, ConstructionError> {
    s.split('.').map(Identifier::new).collect()
}

impl FromStr for PreRelease {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PreRelease::new(split_identifiers(s)?)
    }
}

impl FromStr for Build {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Build::new(split_identifiers(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pre(text: &str) -> PreRelease {
        text.parse().unwrap()
    }

    #[test]
    fn test_empty_sequences_are_rejected() {
        assert!(matches!(
            PreRelease::new(Vec::new()),
            Err(ConstructionError::InvalidArgument(_))
        ));
        assert!(matches!(
            Build::new(Vec::new()),
            Err(ConstructionError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_as_string_joins_with_dots() {
        let pre_release = PreRelease::new([
            Identifier::new("alpha").unwrap(),
            Identifier::numeric(1),
        ])
        .unwrap();
        assert_eq!(pre_release.as_string(), "alpha.1");

        let build: Build = "exp.sha.5114f85".parse().unwrap();
        assert_eq!(build.to_string(), "exp.sha.5114f85");
        assert_eq!(build.identifiers().len(), 3);
    }

    #[test]
    fn test_pre_release_refuses_leading_zeroes() {
        assert!(matches!(
            "alpha.01".parse::<PreRelease>(),
            Err(ConstructionError::InvalidArgument(_))
        ));
        assert!(matches!(
            PreRelease::new([Identifier::new("18446744073709551616").unwrap()]),
            Err(ConstructionError::InvalidArgument(_))
        ));
        assert!("0a".parse::<PreRelease>().is_ok());
    }

    #[test]
    fn test_build_keeps_leading_zeroes() {
        let build: Build = "00.001".parse().unwrap();
        assert_eq!(build.to_string(), "00.001");
    }

    #[test]
    fn test_from_str_rejects_empty_identifiers() {
        for text in ["", "a..b", ".a", "a.", "a_b"] {
            assert!(matches!(
                text.parse::<PreRelease>(),
                Err(ConstructionError::InvalidIdentifier(_))
            ), "{text:?}");
            assert!(text.parse::<Build>().is_err(), "{text:?}");
        }
    }

    #[test]
    fn test_pre_release_order() {
        assert!(pre("alpha") < pre("alpha.1"));
        assert!(pre("alpha.1") < pre("alpha.beta"));
        assert!(pre("alpha.beta") < pre("beta"));
        assert!(pre("beta.2") < pre("beta.11"));
        assert!(pre("beta.11") < pre("rc.1"));
        assert_eq!(pre("rc.1").cmp(&pre("rc.1")), Ordering::Equal);
    }

    #[test]
    fn test_shorter_pre_release_is_lower() {
        assert!(pre("1.2") < pre("1.2.0"));
        assert!(pre("a.b.c") > pre("a.b"));
    }
}
