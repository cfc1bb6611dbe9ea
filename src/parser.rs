use std::fmt;

use crate::Error;
use crate::ast::{BasicLiteral, Identifier, LiteralKind, OperandName, QualifiedIdentifier};
use crate::lexer::{LexError, Tokenizer, TokenizerOptions};
use crate::token::{Span, Token, TokenKind, TokenValue};

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Expected an identifier, found another token or EOF.
    ExpectedIdentifier { found: Option<String> },
    /// Expected the `.` of a qualified identifier.
    ExpectedDot { found: Option<String> },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (expected, found) = match self {
            Self::ExpectedIdentifier { found } => ("identifier", found),
            Self::ExpectedDot { found } => ("'.'", found),
        };
        match found {
            Some(t) => write!(f, "expected {expected}, got '{t}'"),
            None => write!(f, "expected {expected}"),
        }
    }
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {}", span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// One-token-lookahead cursor over a [`Tokenizer`].
///
/// Builds identifier, qualified-identifier, and literal nodes. Tokenizer
/// errors are passed through unchanged.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a parser and read the first token.
    ///
    /// # Errors
    ///
    /// Returns `LexError` if the first token cannot be read.
    pub fn new(source: &'a str) -> Result<Self, LexError> {
        Self::with_options(source, TokenizerOptions::default())
    }

    /// Create a parser with explicit tokenizer options.
    pub fn with_options(source: &'a str, options: TokenizerOptions) -> Result<Self, LexError> {
        let mut tokenizer = Tokenizer::with_options(source, options);
        let current = tokenizer.read_token()?;
        Ok(Self { tokenizer, current })
    }

    /// The buffered token that has not been consumed yet.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// Unconditionally advance, returning the token that was current.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Token, LexError> {
        let following = self.tokenizer.read_token()?;
        Ok(std::mem::replace(&mut self.current, following))
    }

    /// Consume and return the current token if it has the given kind.
    pub fn accept(&mut self, kind: TokenKind) -> Result<Option<Token>, LexError> {
        if self.current.kind == kind {
            self.next().map(Some)
        } else {
            Ok(None)
        }
    }

    /// `int_lit | float_lit | imaginary_lit | rune_lit | string_lit`.
    pub fn parse_basic_lit(&mut self) -> Result<Option<BasicLiteral>, Error> {
        let Some(kind) = LiteralKind::from_token_kind(self.current.kind) else {
            return Ok(None);
        };
        if self.current.value.is_none() {
            return Ok(None);
        }

        let token = self.next()?;
        Ok(token.value.map(|value| BasicLiteral {
            kind,
            value,
            span: token.span,
        }))
    }

    pub fn parse_identifier(&mut self) -> Result<Option<Identifier>, Error> {
        Ok(self.accept(TokenKind::Identifier)?.map(into_identifier))
    }

    /// `identifier [ "." identifier ]`.
    ///
    /// A `.` that is not followed by an identifier is an error; the dot
    /// has already been consumed at that point.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn parse_operand_name(&mut self) -> Result<Option<OperandName>, Error> {
        let Some(first) = self.parse_identifier()? else {
            return Ok(None);
        };

        if self.accept(TokenKind::Dot)?.is_none() {
            return Ok(Some(OperandName::Identifier(first)));
        }

        self.qualify(first).map(|q| Some(OperandName::Qualified(q)))
    }

    /// `identifier "." identifier`.
    ///
    /// Returns `None` when the current token is not an identifier. Once
    /// the package name is consumed, a missing `.` or second identifier
    /// is an error.
    pub fn parse_qualified_identifier(&mut self) -> Result<Option<QualifiedIdentifier>, Error> {
        let Some(package) = self.parse_identifier()? else {
            return Ok(None);
        };

        if self.accept(TokenKind::Dot)?.is_none() {
            let found = self.found();
            return Err(self.error(ParseErrorKind::ExpectedDot { found }).into());
        }

        self.qualify(package).map(Some)
    }

    /// Finish a qualified identifier after its `.` has been consumed.
    fn qualify(&mut self, package: Identifier) -> Result<QualifiedIdentifier, Error> {
        let Some(name) = self.parse_identifier()? else {
            let found = self.found();
            return Err(self.error(ParseErrorKind::ExpectedIdentifier { found }).into());
        };

        Ok(QualifiedIdentifier {
            package: package.name,
            name: name.name,
            span: package.span.merge(name.span),
        })
    }

    fn found(&self) -> Option<String> {
        match self.current.kind {
            TokenKind::Eof => None,
            kind => Some(kind.to_string()),
        }
    }

    const fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            span: self.current.span,
        }
    }
}

fn into_identifier(token: Token) -> Identifier {
    let name = match token.value {
        Some(TokenValue::Ident(name)) => name,
        _ => String::new(),
    };
    Identifier {
        name,
        span: token.span,
    }
}
