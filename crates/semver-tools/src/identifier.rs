//! Dot-separated identifiers of a pre-release or build

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ConstructionError;
use crate::integers::parse_non_negative;

/// A single identifier of a pre-release or build
///
/// Numeric identifiers always have lower precedence than alphanumeric ones.
/// Two numeric identifiers compare by value, two alphanumeric identifiers
/// compare lexically by their ASCII text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// A non-negative integer, written without leading zeroes
    Numeric(u64),
    /// Any other non-empty text made of `[0-9A-Za-z-]`
    Alphanumeric(AlphanumericIdentifier),
}

/// Validated text of an alphanumeric identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlphanumericIdentifier(String);

impl AlphanumericIdentifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AlphanumericIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlphanumericIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

impl Identifier {
    pub fn numeric(value: u64) -> Self {
        Identifier::Numeric(value)
    }

    /// Interpret text as an identifier.
    ///
    /// Text that reads as a non-negative integer without leading zeroes becomes
    /// [`Identifier::Numeric`]. Anything else made of `[0-9A-Za-z-]` is kept
    /// verbatim as [`Identifier::Alphanumeric`], so `"007"` stays `"007"`.
    pub fn new(text: &str) -> Result<Self, ConstructionError> {
        match parse_non_negative(text) {
            Ok(value) => Ok(Identifier::Numeric(value)),
            Err(_) => Self::alphanumeric(text),
        }
    }

    pub(crate) fn alphanumeric(text: &str) -> Result<Self, ConstructionError> {
        if text.is_empty() || !text.chars().all(is_identifier_char) {
            return Err(ConstructionError::InvalidIdentifier(text.to_string()));
        }
        Ok(Identifier::Alphanumeric(AlphanumericIdentifier(text.to_string())))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }

    pub fn as_numeric(&self) -> Option<u64> {
        match self {
            Identifier::Numeric(value) => Some(*value),
            Identifier::Alphanumeric(_) => None,
        }
    }

    pub fn as_alphanumeric(&self) -> Option<&str> {
        match self {
            Identifier::Numeric(_) => None,
            Identifier::Alphanumeric(text) => Some(text.as_str()),
        }
    }

    /// Canonical text of the identifier
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// Alphanumeric text made only of digits, e.g. `"007"` or a number beyond `u64`
    pub(crate) fn is_non_canonical_number(&self) -> bool {
        match self {
            Identifier::Numeric(_) => false,
            Identifier::Alphanumeric(text) => text.as_str().bytes().all(|b| b.is_ascii_digit()),
        }
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(left), Identifier::Numeric(right)) => left.cmp(right),
            (Identifier::Alphanumeric(left), Identifier::Alphanumeric(right)) => {
                left.as_str().cmp(right.as_str())
            }
            (Identifier::Numeric(_), Identifier::Alphanumeric(_)) => Ordering::Less,
            (Identifier::Alphanumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(value) => write!(f, "{}", value),
            Identifier::Alphanumeric(text) => f.write_str(text.as_str()),
        }
    }
}

impl FromStr for Identifier {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Identifier::new(s)
    }
}

impl From<u64> for Identifier {
    fn from(value: u64) -> Self {
        Identifier::Numeric(value)
    }
}

impl TryFrom<i64> for Identifier {
    type Error = ConstructionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Identifier::Numeric)
            .map_err(|_| {
                ConstructionError::InvalidArgument(format!(
                    "numeric identifier must be non-negative, got {}",
                    value
                ))
            })
    }
}
