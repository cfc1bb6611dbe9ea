//! Go source tokenizer and operand parser.
//!
//! Converts Go source text into classified tokens with line/column spans,
//! decoding number, string, and rune literals and applying Go's automatic
//! semicolon insertion. A thin parser builds identifier, qualified
//! identifier, and literal nodes on top of the token stream.
//!
//! # Quick start
//!
//! ## Tokenize a source unit
//!
//! ```
//! use golex_rs::{TokenKind, TokenValue, tokenize};
//!
//! let tokens = tokenize("x := 0x1A\n").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Identifier,
//!         TokenKind::Define,
//!         TokenKind::IntLit,
//!         TokenKind::Semicolon,
//!         TokenKind::Eof,
//!     ]
//! );
//! assert_eq!(tokens[2].value, Some(TokenValue::Int(26)));
//! ```
//!
//! ## Parse a qualified identifier
//!
//! ```
//! use golex_rs::{OperandName, parse_operand_name};
//!
//! let name = parse_operand_name("fmt.Println").unwrap().unwrap();
//! let OperandName::Qualified(q) = name else { unreachable!() };
//! assert_eq!(q.package, "fmt");
//! assert_eq!(q.name, "Println");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{BasicLiteral, Identifier, LiteralKind, OperandName, QualifiedIdentifier};
pub use formatter::{format_literal, format_token, format_tokens};
pub use lexer::{
    ErrorPosition, EscapeError, LexError, LexErrorKind, NumericError, Tokenizer, TokenizerOptions,
    Unterminated, tokenize,
};
pub use parser::{ParseError, ParseErrorKind, Parser};
pub use token::{Keyword, Location, Span, Token, TokenKind, TokenValue};

/// Unified error type covering both lexing and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
    /// A parser error.
    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// Parse the operand name at the start of `input` in one step.
pub fn parse_operand_name(input: &str) -> Result<Option<OperandName>, Error> {
    Parser::new(input)?.parse_operand_name()
}

/// Parse the basic literal at the start of `input` in one step.
pub fn parse_basic_lit(input: &str) -> Result<Option<BasicLiteral>, Error> {
    Parser::new(input)?.parse_basic_lit()
}
