//! Tokens produced by the lexer

use std::fmt;

/// Classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Only digits
    Numeric,
    /// Only letters and absorbed hyphens
    Alphabetic,
    /// Digits mixed with letters or hyphens
    Alphanumeric,
    /// `.`
    Dot,
    /// The pre-release delimiter `-`
    Hyphen,
    /// The build delimiter `+`
    Plus,
}

impl TokenKind {
    /// Whether tokens of this kind carry the text they cover
    pub fn is_content(self) -> bool {
        matches!(
            self,
            TokenKind::Numeric | TokenKind::Alphabetic | TokenKind::Alphanumeric
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Numeric => "NUMERIC",
            TokenKind::Alphabetic => "ALPHABETIC",
            TokenKind::Alphanumeric => "ALPHANUMERIC",
            TokenKind::Dot => "DOT",
            TokenKind::Hyphen => "HYPHEN",
            TokenKind::Plus => "PLUS",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token borrowing its text from the lexed input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    kind: TokenKind,
    text: Option<&'a str>,
    offset: usize,
}

impl<'a> Token<'a> {
    /// A numeric, alphabetic or alphanumeric token covering `text`
    pub fn content(kind: TokenKind, text: &'a str, offset: usize) -> Self {
        debug_assert!(kind.is_content());
        Self {
            kind,
            text: Some(text),
            offset,
        }
    }

    /// A structural `.`, `-` or `+` token
    pub fn delimiter(kind: TokenKind, offset: usize) -> Self {
        debug_assert!(!kind.is_content());
        Self {
            kind,
            text: None,
            offset,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The covered text, `None` for delimiters
    pub fn text(&self) -> Option<&'a str> {
        self.text
    }

    /// Byte offset of the token in the input
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text {
            Some(text) => write!(f, "({}, {})", self.kind, text),
            None => write!(f, "({})", self.kind),
        }
    }
}
