//! The semantic version value and its precedence order

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::pre_release::{Build, PreRelease};

/// An immutable Semantic Versioning 2.0.0 version
///
/// Equality is structural and includes build metadata, while precedence
/// ([`SemanticVersion::compare_to`]) ignores it. `1.0.0+a` and `1.0.0+b` have
/// equal precedence but are not equal.
///
/// The [`Ord`] implementation orders by precedence and only falls back to
/// build metadata to break ties between otherwise equal-precedence versions
/// (no build first, then identifier-wise). This keeps `Ord` consistent with
/// `Eq`, so a sorted collection may still hold several structurally distinct
/// versions of equal precedence next to each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<PreRelease>,
    build: Option<Build>,
}

impl SemanticVersion {
    /// A bare version core without pre-release and build
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: None,
            build: None,
        }
    }

    /// Parse a version string such as `1.0.0-alpha.1+build.5`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        crate::parser::parse(input)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre_release(&self) -> Option<&PreRelease> {
        self.pre_release.as_ref()
    }

    pub fn build(&self) -> Option<&Build> {
        self.build.as_ref()
    }

    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    pub fn has_build(&self) -> bool {
        self.build.is_some()
    }

    /// The version core alone, dropping pre-release and build
    pub fn core(&self) -> Self {
        Self::new(self.major, self.minor, self.patch)
    }

    pub fn with_major(&self, major: u64) -> Self {
        Self {
            major,
            ..self.clone()
        }
    }

    pub fn with_minor(&self, minor: u64) -> Self {
        Self {
            minor,
            ..self.clone()
        }
    }

    pub fn with_patch(&self, patch: u64) -> Self {
        Self {
            patch,
            ..self.clone()
        }
    }

    /// Replace the pre-release, `None` drops it. The build is kept.
    pub fn with_pre_release(&self, pre_release: Option<PreRelease>) -> Self {
        Self {
            pre_release,
            ..self.clone()
        }
    }

    /// Replace the build metadata, `None` drops it. The pre-release is kept.
    pub fn with_build(&self, build: Option<Build>) -> Self {
        Self {
            build,
            ..self.clone()
        }
    }

    /// Same as `with_major(major + 1)`.
    ///
    /// At `u64::MAX` the major field stays unchanged, so the result is equal
    /// to `self`. Use [`SemanticVersion::checked_increase_major`] to detect that.
    pub fn increase_major(&self) -> Self {
        self.with_major(self.major.saturating_add(1))
    }

    /// Same as `with_minor(minor + 1)`, unchanged at `u64::MAX`.
    pub fn increase_minor(&self) -> Self {
        self.with_minor(self.minor.saturating_add(1))
    }

    /// Same as `with_patch(patch + 1)`, unchanged at `u64::MAX`.
    pub fn increase_patch(&self) -> Self {
        self.with_patch(self.patch.saturating_add(1))
    }

    /// `None` when the major field is already `u64::MAX`
    pub fn checked_increase_major(&self) -> Option<Self> {
        self.major.checked_add(1).map(|major| self.with_major(major))
    }

    pub fn checked_increase_minor(&self) -> Option<Self> {
        self.minor.checked_add(1).map(|minor| self.with_minor(minor))
    }

    pub fn checked_increase_patch(&self) -> Option<Self> {
        self.patch.checked_add(1).map(|patch| self.with_patch(patch))
    }

    /// Compare by precedence: major, minor, patch, then pre-release.
    ///
    /// A version without pre-release succeeds every pre-release of the same
    /// core. Build metadata is ignored.
    pub fn compare_to(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| match (&self.pre_release, &other.pre_release) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(left), Some(right)) => left.cmp(right),
            })
    }

    /// Whether this version has lower precedence than `other`
    pub fn precedes(&self, other: &Self) -> bool {
        self.compare_to(other) == Ordering::Less
    }

    /// Whether this version has higher precedence than `other`
    pub fn succeeds(&self, other: &Self) -> bool {
        self.compare_to(other) == Ordering::Greater
    }

    /// Canonical text, `major.minor.patch[-pre-release][+build]`
    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

fn cmp_build(left: Option<&Build>, right: Option<&Build>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => left.identifiers().iter().cmp(right.identifiers().iter()),
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
            .then_with(|| cmp_build(self.build(), other.build()))
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre_release) = &self.pre_release {
            write!(f, "-{}", pre_release)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for SemanticVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SemanticVersion::parse(s)
    }
}
