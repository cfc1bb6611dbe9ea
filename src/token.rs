use std::fmt;

/// A position in the source: 1-based line, 0-based column counted in
/// code points from the start of the line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Source extent of a token or AST node.
///
/// Zero-filled when the tokenizer runs without location tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Location,
    pub end: Location,
}

impl Span {
    #[must_use]
    pub const fn new(start: Location, end: Location) -> Self {
        Self { start, end }
    }

    /// Span running from the start of `self` to the end of `other`.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            start: self.start,
            end: other.end,
        }
    }
}

/// Go's reserved words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Break,
    Case,
    Chan,
    Const,
    Continue,
    Default,
    Defer,
    Else,
    Fallthrough,
    For,
    Func,
    Go,
    Goto,
    If,
    Import,
    Interface,
    Map,
    Package,
    Range,
    Return,
    Select,
    Struct,
    Switch,
    Type,
    Var,
}

impl Keyword {
    /// Every keyword, in lexical order.
    pub const ALL: [Self; 25] = [
        Self::Break,
        Self::Case,
        Self::Chan,
        Self::Const,
        Self::Continue,
        Self::Default,
        Self::Defer,
        Self::Else,
        Self::Fallthrough,
        Self::For,
        Self::Func,
        Self::Go,
        Self::Goto,
        Self::If,
        Self::Import,
        Self::Interface,
        Self::Map,
        Self::Package,
        Self::Range,
        Self::Return,
        Self::Select,
        Self::Struct,
        Self::Switch,
        Self::Type,
        Self::Var,
    ];

    /// Look up an identifier-shaped word in the keyword set.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        let kw = match word {
            "break" => Self::Break,
            "case" => Self::Case,
            "chan" => Self::Chan,
            "const" => Self::Const,
            "continue" => Self::Continue,
            "default" => Self::Default,
            "defer" => Self::Defer,
            "else" => Self::Else,
            "fallthrough" => Self::Fallthrough,
            "for" => Self::For,
            "func" => Self::Func,
            "go" => Self::Go,
            "goto" => Self::Goto,
            "if" => Self::If,
            "import" => Self::Import,
            "interface" => Self::Interface,
            "map" => Self::Map,
            "package" => Self::Package,
            "range" => Self::Range,
            "return" => Self::Return,
            "select" => Self::Select,
            "struct" => Self::Struct,
            "switch" => Self::Switch,
            "type" => Self::Type,
            "var" => Self::Var,
            _ => return None,
        };
        Some(kw)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Break => "break",
            Self::Case => "case",
            Self::Chan => "chan",
            Self::Const => "const",
            Self::Continue => "continue",
            Self::Default => "default",
            Self::Defer => "defer",
            Self::Else => "else",
            Self::Fallthrough => "fallthrough",
            Self::For => "for",
            Self::Func => "func",
            Self::Go => "go",
            Self::Goto => "goto",
            Self::If => "if",
            Self::Import => "import",
            Self::Interface => "interface",
            Self::Map => "map",
            Self::Package => "package",
            Self::Range => "range",
            Self::Return => "return",
            Self::Select => "select",
            Self::Struct => "struct",
            Self::Switch => "switch",
            Self::Type => "type",
            Self::Var => "var",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token kinds produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifier (`foo`, `_x`, `π`).
    Identifier,
    /// Reserved word.
    Keyword(Keyword),
    /// Integer literal (`42`, `0x1A`, `017`).
    IntLit,
    /// Floating-point literal (`3.14`, `1e10`, `.5`).
    FloatLit,
    /// Imaginary literal (`2i`, `1.5i`).
    ImaginaryLit,
    /// Rune literal (`'a'`, `'\n'`).
    RuneLit,
    /// Interpreted or raw string literal.
    StringLit,

    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `&`
    Amp,
    /// `|`
    Pipe,
    /// `^`
    Caret,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `&^`
    AmpCaret,
    /// `+=`
    PlusAssign,
    /// `-=`
    MinusAssign,
    /// `*=`
    StarAssign,
    /// `/=`
    SlashAssign,
    /// `%=`
    PercentAssign,
    /// `&=`
    AmpAssign,
    /// `|=`
    PipeAssign,
    /// `^=`
    CaretAssign,
    /// `<<=`
    ShlAssign,
    /// `>>=`
    ShrAssign,
    /// `&^=`
    AmpCaretAssign,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `<-`
    Arrow,
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// `==`
    EqEq,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `=`
    Assign,
    /// `!`
    Not,
    /// `~`
    Tilde,
    /// `!=`
    NotEq,
    /// `<=`
    LessEq,
    /// `>=`
    GreaterEq,
    /// `:=`
    Define,
    /// `...`
    Ellipsis,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `;`, written or automatically inserted.
    Semicolon,
    /// `:`
    Colon,

    /// End of input.
    Eof,
}

impl TokenKind {
    /// Source symbol for keyword and punctuation kinds, `None` for the
    /// kinds whose text depends on the token value.
    #[must_use]
    pub const fn symbol(self) -> Option<&'static str> {
        let s = match self {
            Self::Keyword(kw) => kw.as_str(),
            Self::Identifier
            | Self::IntLit
            | Self::FloatLit
            | Self::ImaginaryLit
            | Self::RuneLit
            | Self::StringLit
            | Self::Eof => return None,
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Amp => "&",
            Self::Pipe => "|",
            Self::Caret => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::AmpCaret => "&^",
            Self::PlusAssign => "+=",
            Self::MinusAssign => "-=",
            Self::StarAssign => "*=",
            Self::SlashAssign => "/=",
            Self::PercentAssign => "%=",
            Self::AmpAssign => "&=",
            Self::PipeAssign => "|=",
            Self::CaretAssign => "^=",
            Self::ShlAssign => "<<=",
            Self::ShrAssign => ">>=",
            Self::AmpCaretAssign => "&^=",
            Self::AndAnd => "&&",
            Self::OrOr => "||",
            Self::Arrow => "<-",
            Self::Increment => "++",
            Self::Decrement => "--",
            Self::EqEq => "==",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Assign => "=",
            Self::Not => "!",
            Self::Tilde => "~",
            Self::NotEq => "!=",
            Self::LessEq => "<=",
            Self::GreaterEq => ">=",
            Self::Define => ":=",
            Self::Ellipsis => "...",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Semicolon => ";",
            Self::Colon => ":",
        };
        Some(s)
    }

    /// Literal kinds accepted by the basic-literal rule.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::IntLit | Self::FloatLit | Self::ImaginaryLit | Self::RuneLit | Self::StringLit
        )
    }

    /// Whether a line break after this kind becomes a semicolon.
    #[must_use]
    pub const fn triggers_semicolon(self) -> bool {
        matches!(
            self,
            Self::Identifier
                | Self::IntLit
                | Self::FloatLit
                | Self::ImaginaryLit
                | Self::RuneLit
                | Self::StringLit
                | Self::Keyword(
                    Keyword::Break | Keyword::Continue | Keyword::Fallthrough | Keyword::Return
                )
                | Self::RParen
                | Self::RBracket
                | Self::RBrace
                | Self::Increment
                | Self::Decrement
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(s) => f.write_str(s),
            None => f.write_str(match self {
                Self::Identifier => "identifier",
                Self::IntLit => "int_lit",
                Self::FloatLit => "float_lit",
                Self::ImaginaryLit => "imaginary_lit",
                Self::RuneLit => "rune_lit",
                Self::StringLit => "string_lit",
                _ => "eof",
            }),
        }
    }
}

/// Decoded payload of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// Identifier name.
    Ident(String),
    /// Integer literal value.
    Int(u64),
    /// Floating-point literal value.
    Float(f64),
    /// Magnitude of an imaginary literal.
    Imaginary(f64),
    /// Decoded rune literal.
    Rune(char),
    /// Decoded string literal bytes. `\x` and octal escapes may produce
    /// bytes that are not valid UTF-8.
    Str(Vec<u8>),
    /// Raw lexeme text (`"\n"` for an inserted semicolon).
    Text(String),
}

impl TokenValue {
    /// UTF-8 view of a textual payload.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Ident(s) | Self::Text(s) => Some(s),
            Self::Str(bytes) => std::str::from_utf8(bytes).ok(),
            Self::Int(_) | Self::Float(_) | Self::Imaginary(_) | Self::Rune(_) => None,
        }
    }
}

/// A single token with its kind, decoded value, and source extent.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<TokenValue>,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, value: Option<TokenValue>, span: Span) -> Self {
        Self { kind, value, span }
    }

    /// Whether this is a semicolon the tokenizer inserted at a line break.
    #[must_use]
    pub fn is_implicit_semicolon(&self) -> bool {
        self.kind == TokenKind::Semicolon && matches!(&self.value, Some(TokenValue::Text(t)) if t == "\n")
    }

    /// Identifier name, if this is an identifier.
    #[must_use]
    pub fn ident(&self) -> Option<&str> {
        match &self.value {
            Some(TokenValue::Ident(name)) => Some(name),
            _ => None,
        }
    }
}
