//! Single-pass lexer turning a version string into tokens

use std::str::CharIndices;

use crate::error::{ParseError, ParseErrorKind};
use crate::parser::token::{Token, TokenKind};

/// Scans a version string left to right, yielding tokens
///
/// `.` and `+` are always structural. Only the first `-` seen before any `+`
/// is the pre-release delimiter; every other `-` is part of the surrounding
/// identifier, so `1.0.0-a-b+c-d` yields a single `a-b` and `c-d` segment.
/// The lexer does no grammar validation beyond classifying segments.
///
/// After the first error the lexer yields nothing further.
pub struct Lexer<'a> {
    input: &'a str,
    chars: CharIndices<'a>,
    mark: usize,
    saw_digit: bool,
    saw_letter: bool,
    prerelease_delimiter_consumed: bool,
    build_window_open: bool,
    pending: Option<Token<'a>>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Fails with [`ParseErrorKind::EmptyInput`] for an empty or blank input.
    pub fn new(input: &'a str) -> Result<Self, ParseErrorKind> {
        if input.trim().is_empty() {
            return Err(ParseErrorKind::EmptyInput);
        }
        Ok(Self {
            input,
            chars: input.char_indices(),
            mark: 0,
            saw_digit: false,
            saw_letter: false,
            prerelease_delimiter_consumed: false,
            build_window_open: false,
            pending: None,
            finished: false,
        })
    }

    fn delimiter_kind(&mut self, c: char) -> Option<TokenKind> {
        match c {
            '.' => Some(TokenKind::Dot),
            '+' => {
                self.build_window_open = true;
                Some(TokenKind::Plus)
            }
            '-' if !self.prerelease_delimiter_consumed && !self.build_window_open => {
                self.prerelease_delimiter_consumed = true;
                Some(TokenKind::Hyphen)
            }
            _ => None,
        }
    }

    /// Classify the segment between the mark and `end`, then reset segment state.
    fn close_segment(&mut self, end: usize) -> Option<Result<Token<'a>, ParseErrorKind>> {
        let start = self.mark;
        let (saw_digit, saw_letter) = (self.saw_digit, self.saw_letter);
        self.saw_digit = false;
        self.saw_letter = false;

        if start >= end {
            return None;
        }
        let segment = &self.input[start..end];
        let kind = match (saw_digit, saw_letter) {
            (true, true) => TokenKind::Alphanumeric,
            (false, true) => TokenKind::Alphabetic,
            (true, false) => TokenKind::Numeric,
            (false, false) => {
                return Some(Err(ParseErrorKind::InternalLexError {
                    segment: segment.to_string(),
                }))
            }
        };
        Some(Ok(Token::content(kind, segment, start)))
    }

    fn fail(&mut self, kind: ParseErrorKind) -> Option<Result<Token<'a>, ParseErrorKind>> {
        self.finished = true;
        self.pending = None;
        Some(Err(kind))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, ParseErrorKind>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.take() {
            return Some(Ok(token));
        }
        if self.finished {
            return None;
        }

        while let Some((idx, c)) = self.chars.next() {
            let Some(kind) = self.delimiter_kind(c) else {
                self.saw_digit |= c.is_ascii_digit();
                self.saw_letter |= c.is_ascii_alphabetic() || c == '-';
                continue;
            };

            let delimiter = Token::delimiter(kind, idx);
            let segment = self.close_segment(idx);
            self.mark = idx + c.len_utf8();

            return match segment {
                None => Some(Ok(delimiter)),
                Some(Ok(token)) => {
                    self.pending = Some(delimiter);
                    Some(Ok(token))
                }
                Some(Err(err)) => self.fail(err),
            };
        }

        self.finished = true;
        match self.close_segment(self.input.len()) {
            Some(Err(err)) => self.fail(err),
            other => other,
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Lex a whole version string into a token list.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, ParseError> {
    Lexer::new(input)
        .and_then(|lexer| lexer.collect::<Result<Vec<_>, _>>())
        .map_err(|kind| ParseError::new(input, kind))
}
