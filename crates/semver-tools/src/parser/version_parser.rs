//! Recursive-descent parser over the lexer's tokens
//!
//! ```text
//! version      := core ( '-' preRelease )? ( '+' build )?
//! core         := numericField '.' numericField '.' numericField
//! preRelease   := identifier ( '.' identifier )*
//! build        := identifier ( '.' identifier )*
//! identifier   := NUMERIC | ALPHABETIC | ALPHANUMERIC
//! ```

use crate::error::{ParseError, ParseErrorKind};
use crate::identifier::Identifier;
use crate::integers::{parse_non_negative, NumericError};
use crate::parser::lexer::Lexer;
use crate::parser::token::{Token, TokenKind};
use crate::pre_release::{Build, PreRelease};
use crate::version::SemanticVersion;

const IDENTIFIER: &[TokenKind] = &[
    TokenKind::Numeric,
    TokenKind::Alphabetic,
    TokenKind::Alphanumeric,
];

/// Builds a [`SemanticVersion`] from a token stream
///
/// Any grammar violation aborts the whole parse, there is no partial result.
pub struct VersionParser<I> {
    tokens: I,
}

impl<'a, I> VersionParser<I>
where
    I: Iterator<Item = Result<Token<'a>, ParseErrorKind>>,
{
    pub fn new(tokens: I) -> Self {
        Self { tokens }
    }

    pub fn parse(mut self) -> Result<SemanticVersion, ParseErrorKind> {
        let core = self.parse_core()?;
        match self.next_token()? {
            None => Ok(core),
            Some(token) => match token.kind() {
                TokenKind::Hyphen => self.parse_pre_release(core),
                TokenKind::Plus => self.parse_build(core),
                _ => Err(unexpected(token, &[TokenKind::Hyphen, TokenKind::Plus])),
            },
        }
    }

    fn next_token(&mut self) -> Result<Option<Token<'a>>, ParseErrorKind> {
        self.tokens.next().transpose()
    }

    fn expect(&mut self, expected: &'static [TokenKind]) -> Result<Token<'a>, ParseErrorKind> {
        match self.next_token()? {
            Some(token) if expected.contains(&token.kind()) => Ok(token),
            Some(token) => Err(unexpected(token, expected)),
            None => Err(ParseErrorKind::UnexpectedEnd { expected }),
        }
    }

    fn parse_core(&mut self) -> Result<SemanticVersion, ParseErrorKind> {
        let major = self.parse_numeric_field()?;
        self.expect(&[TokenKind::Dot])?;
        let minor = self.parse_numeric_field()?;
        self.expect(&[TokenKind::Dot])?;
        let patch = self.parse_numeric_field()?;
        Ok(SemanticVersion::new(major, minor, patch))
    }

    fn parse_numeric_field(&mut self) -> Result<u64, ParseErrorKind> {
        let text = token_text(self.expect(&[TokenKind::Numeric])?);
        parse_non_negative(text).map_err(|err| match err {
            NumericError::LeadingZero => ParseErrorKind::LeadingZero { text: text.to_string() },
            NumericError::Overflow => ParseErrorKind::NumericOverflow { text: text.to_string() },
            NumericError::Empty | NumericError::NotADigit => {
                ParseErrorKind::NotNumeric { text: text.to_string() }
            }
        })
    }

    fn parse_pre_release(
        &mut self,
        version: SemanticVersion,
    ) -> Result<SemanticVersion, ParseErrorKind> {
        let mut identifiers = Vec::new();
        loop {
            let token = self.expect(IDENTIFIER)?;
            identifiers.push(pre_release_identifier(token)?);

            match self.next_token()? {
                Some(token) if token.kind() == TokenKind::Dot => continue,
                None => {
                    let pre_release = PreRelease::from_parsed(identifiers);
                    return Ok(version.with_pre_release(Some(pre_release)));
                }
                Some(token) if token.kind() == TokenKind::Plus => {
                    let pre_release = PreRelease::from_parsed(identifiers);
                    return self.parse_build(version.with_pre_release(Some(pre_release)));
                }
                Some(token) => return Err(unexpected(token, &[TokenKind::Dot, TokenKind::Plus])),
            }
        }
    }

    fn parse_build(
        &mut self,
        version: SemanticVersion,
    ) -> Result<SemanticVersion, ParseErrorKind> {
        let mut identifiers = Vec::new();
        loop {
            let token = self.expect(IDENTIFIER)?;
            let text = token_text(token);
            let identifier = Identifier::new(text)
                .map_err(|_| ParseErrorKind::InvalidIdentifier { text: text.to_string() })?;
            identifiers.push(identifier);

            match self.next_token()? {
                None => return Ok(version.with_build(Some(Build::from_parsed(identifiers)))),
                Some(token) if token.kind() == TokenKind::Dot => continue,
                Some(token) => return Err(unexpected(token, &[TokenKind::Dot])),
            }
        }
    }
}

fn unexpected(token: Token<'_>, expected: &'static [TokenKind]) -> ParseErrorKind {
    ParseErrorKind::UnexpectedToken {
        found: token.kind(),
        position: token.offset(),
        expected,
    }
}

fn token_text(token: Token<'_>) -> &str {
    token.text().unwrap_or_default()
}

/// Numeric pre-release identifiers must not carry leading zeroes, unlike build ones.
fn pre_release_identifier(token: Token<'_>) -> Result<Identifier, ParseErrorKind> {
    let text = token_text(token);
    if token.kind() != TokenKind::Numeric {
        return Identifier::alphanumeric(text)
            .map_err(|_| ParseErrorKind::InvalidIdentifier { text: text.to_string() });
    }
    parse_non_negative(text)
        .map(Identifier::Numeric)
        .map_err(|err| match err {
            NumericError::LeadingZero => ParseErrorKind::LeadingZero { text: text.to_string() },
            NumericError::Overflow => ParseErrorKind::NumericOverflow { text: text.to_string() },
            NumericError::Empty | NumericError::NotADigit => {
                ParseErrorKind::InvalidIdentifier { text: text.to_string() }
            }
        })
}

/// Lex and parse a version string, wrapping any failure with the input.
pub(crate) fn parse(input: &str) -> Result<SemanticVersion, ParseError> {
    log::trace!("Parsing version string {:?}", input);
    Lexer::new(input)
        .and_then(|lexer| VersionParser::new(lexer).parse())
        .map_err(|kind| {
            log::debug!("Rejected version string {:?}: {}", input, kind);
            ParseError::new(input, kind)
        })
}
