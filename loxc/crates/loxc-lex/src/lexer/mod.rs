//! Lexer module.
//!
//! The lexer is split into one file per kind of lexeme:
//! - `core` - Main Lexer struct, dispatch and error reporting
//! - `comment` - Whitespace and line comment skipping
//! - `operator` - One- and two-character operators
//! - `string` - String literals
//! - `number` - Number literals
//! - `identifier` - Identifiers and keywords

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
