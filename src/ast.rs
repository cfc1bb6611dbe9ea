use crate::token::{Span, TokenKind, TokenValue};

/// Unqualified identifier: `x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

/// Package-qualified identifier: `fmt.Println`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedIdentifier {
    pub package: String,
    pub name: String,
    pub span: Span,
}

/// Operand name, plain or qualified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperandName {
    Identifier(Identifier),
    Qualified(QualifiedIdentifier),
}

impl OperandName {
    /// The final name component (`Println` in `fmt.Println`).
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Identifier(ident) => &ident.name,
            Self::Qualified(qualified) => &qualified.name,
        }
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Identifier(ident) => ident.span,
            Self::Qualified(qualified) => qualified.span,
        }
    }
}

/// Category of a basic literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Int,
    Float,
    Imaginary,
    Rune,
    String,
}

impl LiteralKind {
    /// Literal category for a token kind, if it is a literal kind.
    #[must_use]
    pub const fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::IntLit => Some(Self::Int),
            TokenKind::FloatLit => Some(Self::Float),
            TokenKind::ImaginaryLit => Some(Self::Imaginary),
            TokenKind::RuneLit => Some(Self::Rune),
            TokenKind::StringLit => Some(Self::String),
            _ => None,
        }
    }

    #[must_use]
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Int => TokenKind::IntLit,
            Self::Float => TokenKind::FloatLit,
            Self::Imaginary => TokenKind::ImaginaryLit,
            Self::Rune => TokenKind::RuneLit,
            Self::String => TokenKind::StringLit,
        }
    }
}

/// Int, float, imaginary, rune, or string literal with its decoded value.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicLiteral {
    pub kind: LiteralKind,
    pub value: TokenValue,
    pub span: Span,
}
