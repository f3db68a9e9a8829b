//! Error types for parsing and constructing versions

use thiserror::Error;

use crate::parser::TokenKind;

/// The reason a version string was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("version string must not be blank")]
    EmptyInput,
    #[error("numeric value \"{text}\" must not include leading zeroes")]
    LeadingZero { text: String },
    #[error("unexpected token {found} at position {position}, expected any of {}", display_kinds(.expected))]
    UnexpectedToken {
        found: TokenKind,
        position: usize,
        expected: &'static [TokenKind],
    },
    #[error("unexpected end of input, expected any of {}", display_kinds(.expected))]
    UnexpectedEnd { expected: &'static [TokenKind] },
    #[error("numeric value \"{text}\" exceeds {max}", max = u64::MAX)]
    NumericOverflow { text: String },
    #[error("\"{text}\" is not a numeric value")]
    NotNumeric { text: String },
    #[error("invalid identifier \"{text}\"")]
    InvalidIdentifier { text: String },
    #[error("segment \"{segment}\" is neither alphabetic nor numeric")]
    InternalLexError { segment: String },
}

fn display_kinds(kinds: &[TokenKind]) -> String {
    let names: Vec<&str> = kinds.iter().map(|kind| kind.as_str()).collect();
    format!("[{}]", names.join(", "))
}

/// A version string could not be parsed
///
/// The rejected input is kept for diagnostics, the underlying reason is
/// available through [`ParseError::kind`] and the error source chain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("could not parse version string \"{input}\"")]
pub struct ParseError {
    input: String,
    #[source]
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(input: &str, kind: ParseErrorKind) -> Self {
        Self {
            input: input.to_string(),
            kind,
        }
    }

    /// The rejected input, verbatim
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

/// A value could not be constructed from the given arguments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("invalid identifier \"{0}\"")]
    InvalidIdentifier(String),
    #[error("{0}")]
    InvalidArgument(String),
}
