//! Lexer and recursive-descent parser for version strings

mod lexer;
mod token;
mod version_parser;

pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
pub use version_parser::VersionParser;

pub(crate) use version_parser::parse;
