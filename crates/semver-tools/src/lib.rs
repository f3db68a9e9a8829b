//! Semantic Versioning 2.0.0 library
//!
//! This crate provides a lexer and recursive-descent parser for version
//! strings such as `1.0.0-alpha.1+build.5`, an immutable version value with
//! derived-copy modifiers, and the precedence order defined by SemVer 2.0.0.
//!
//! ```
//! use semver_tools::SemanticVersion;
//!
//! let rc = SemanticVersion::parse("1.0.0-rc.1").unwrap();
//! let release = SemanticVersion::parse("1.0.0").unwrap();
//! assert!(rc.precedes(&release));
//! ```

mod error;
mod identifier;
mod integers;
pub mod parser;
mod pre_release;
#[cfg(feature = "serde")]
mod serde_impl;
mod version;

pub use error::{ConstructionError, ParseError, ParseErrorKind};
pub use identifier::{AlphanumericIdentifier, Identifier};
pub use parser::{tokenize, Lexer, Token, TokenKind, VersionParser};
pub use pre_release::{Build, PreRelease};
pub use version::SemanticVersion;
