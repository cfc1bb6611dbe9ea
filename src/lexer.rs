use std::fmt;
use std::iter::FusedIterator;

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::token::{Keyword, Location, Span, Token, TokenKind, TokenValue};

/// Why a numeric literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// `0x` with no hex digits after it.
    MissingHexDigits,
    /// `e`/`E` (and optional sign) with no digits after it.
    MissingExponentDigits,
    /// `8` or `9` inside an octal literal.
    InvalidOctalDigit(char),
    /// Integer value does not fit in 64 bits.
    Overflow,
    /// Lexeme could not be read as a floating-point value.
    InvalidFloat,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHexDigits => write!(f, "expected hex digits after 0x"),
            Self::MissingExponentDigits => write!(f, "expected exponent digits"),
            Self::InvalidOctalDigit(ch) => {
                write!(f, "invalid digit '{ch}' in octal literal")
            }
            Self::Overflow => write!(f, "integer literal overflows 64 bits"),
            Self::InvalidFloat => write!(f, "invalid floating-point literal"),
        }
    }
}

/// Delimited construct that ran into end of input (or a line break,
/// for single-line literals).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unterminated {
    String,
    RawString,
    Rune,
    BlockComment,
}

impl fmt::Display for Unterminated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::String => "string literal",
            Self::RawString => "raw string literal",
            Self::Rune => "rune literal",
            Self::BlockComment => "block comment",
        })
    }
}

/// Why an escape sequence was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeError {
    /// Backslash followed by a character that starts no escape.
    Unknown(char),
    /// `\x`, `\u` or `\U` with fewer hex digits than required.
    MissingHexDigits { escape: char, expected: usize },
    /// Octal escape with fewer than three octal digits.
    MissingOctalDigits,
    /// Octal escape above 255, or a surrogate / out-of-range code point.
    OutOfRange(u32),
}

impl fmt::Display for EscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(ch) => write!(f, "unknown escape sequence: \\{}", ch.escape_default()),
            Self::MissingHexDigits { escape, expected } => {
                write!(f, "escape \\{escape} requires {expected} hex digits")
            }
            Self::MissingOctalDigits => {
                write!(f, "octal escape requires 3 octal digits")
            }
            Self::OutOfRange(value) => {
                write!(f, "escape value {value:#x} is out of range")
            }
        }
    }
}

/// Classifies a lexer error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Character that cannot start any token.
    UnexpectedCharacter(char),
    /// Incomplete or invalid digit run in a numeric literal.
    MalformedNumericLiteral(NumericError),
    /// String, rune, or block comment without its closing delimiter.
    UnterminatedLiteral(Unterminated),
    /// Unknown escape, wrong digit count, or out-of-range value.
    InvalidEscapeSequence(EscapeError),
    /// Rune literal that does not hold exactly one character.
    InvalidRuneWidth { count: usize },
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(ch) => {
                write!(f, "unexpected character: {}", ch.escape_debug())
            }
            Self::MalformedNumericLiteral(err) => {
                write!(f, "malformed numeric literal: {err}")
            }
            Self::UnterminatedLiteral(what) => write!(f, "unterminated {what}"),
            Self::InvalidEscapeSequence(err) => {
                write!(f, "invalid escape sequence: {err}")
            }
            Self::InvalidRuneWidth { count } => {
                write!(
                    f,
                    "rune literal must contain exactly one character, \
                     found {count}"
                )
            }
        }
    }
}

/// Where a lexer error was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPosition {
    /// Line and column, when locations are tracked.
    LineColumn(Location),
    /// Byte offset into the source, when they are not.
    Offset(usize),
}

impl fmt::Display for ErrorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LineColumn(loc) => write!(f, "{loc}"),
            Self::Offset(offset) => write!(f, "offset {offset}"),
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {position}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: ErrorPosition,
}

/// Options recognized by [`Tokenizer::with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Compute line/column spans for every token. When off, spans are
    /// zero-filled and errors report byte offsets.
    pub track_locations: bool,
}

impl TokenizerOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            track_locations: true,
        }
    }

    /// Enable or disable location tracking.
    #[must_use]
    pub const fn track_locations(mut self, enabled: bool) -> Self {
        self.track_locations = enabled;
        self
    }
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenize a whole Go source unit.
///
/// The returned vector ends with the `Eof` token.
///
/// # Errors
///
/// Returns the first `LexError` encountered; no tokens are returned
/// in that case.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(input).collect()
}

#[derive(Debug, Clone, Copy)]
struct Mark {
    offset: usize,
    location: Location,
}

enum Decoded {
    Char(char),
    Byte(u8),
}

/// Pull-based Go tokenizer over an in-memory source.
///
/// Each call to [`read_token`](Self::read_token) skips whitespace and
/// comments, applies automatic semicolon insertion, and returns a freshly
/// built token with its literal value decoded.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    options: TokenizerOptions,
    last_kind: Option<TokenKind>,
    exhausted: bool,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer with default options.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, TokenizerOptions::default())
    }

    /// Create a tokenizer with explicit options.
    #[must_use]
    pub fn with_options(source: &'a str, options: TokenizerOptions) -> Self {
        let start = if source.starts_with('\u{FEFF}') {
            '\u{FEFF}'.len_utf8()
        } else {
            0
        };
        Self {
            source,
            pos: start,
            line: 1,
            column: 0,
            options,
            last_kind: None,
            exhausted: false,
        }
    }

    /// The options this tokenizer was created with.
    #[must_use]
    pub const fn options(&self) -> TokenizerOptions {
        self.options
    }

    /// Produce the next token.
    ///
    /// Once the source is exhausted, every further call returns an `Eof`
    /// token.
    ///
    /// # Errors
    ///
    /// Returns `LexError` for any character sequence that is not a valid
    /// Go lexeme. The tokenizer does not recover; the scan should be
    /// abandoned.
    pub fn read_token(&mut self) -> Result<Token, LexError> {
        let token = self
            .scan()
            .inspect_err(|err| tracing::debug!(%err, "lexical error"))?;
        tracing::trace!(
            kind = ?token.kind,
            line = token.span.start.line,
            column = token.span.start.column,
            "token"
        );
        self.last_kind = Some(token.kind);
        Ok(token)
    }

    fn scan(&mut self) -> Result<Token, LexError> {
        if let Some(semicolon) = self.skip_trivia()? {
            return Ok(semicolon);
        }

        let start = self.mark();
        let Some(ch) = self.peek() else {
            if self.needs_semicolon() {
                return Ok(self.implicit_semicolon(start));
            }
            return Ok(self.finish(TokenKind::Eof, None, start));
        };

        if is_letter(ch) {
            return Ok(self.read_word(start));
        }
        if ch.is_ascii_digit() || (ch == '.' && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()))
        {
            return self.read_number(start);
        }

        match ch {
            '"' => self.read_string(start),
            '`' => self.read_raw_string(start),
            '\'' => self.read_rune(start),
            _ => self.read_operator(start, ch),
        }
    }

    // -- cursor --

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.source[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if self.options.track_locations {
            if ch == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
        Some(ch)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn either(&mut self, next: char, matched: TokenKind, otherwise: TokenKind) -> TokenKind {
        if self.eat(next) { matched } else { otherwise }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let source = self.source;
        let begin = self.pos;
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
        &source[begin..self.pos]
    }

    const fn location(&self) -> Location {
        if self.options.track_locations {
            Location::new(self.line, self.column)
        } else {
            Location::new(0, 0)
        }
    }

    const fn mark(&self) -> Mark {
        Mark {
            offset: self.pos,
            location: self.location(),
        }
    }

    fn finish(&self, kind: TokenKind, value: Option<TokenValue>, start: Mark) -> Token {
        Token::new(kind, value, Span::new(start.location, self.location()))
    }

    const fn error_at(&self, kind: LexErrorKind, mark: Mark) -> LexError {
        let position = if self.options.track_locations {
            ErrorPosition::LineColumn(mark.location)
        } else {
            ErrorPosition::Offset(mark.offset)
        };
        LexError { kind, position }
    }

    fn error(&self, kind: LexErrorKind) -> LexError {
        self.error_at(kind, self.mark())
    }

    // -- trivia and semicolon insertion --

    fn needs_semicolon(&self) -> bool {
        self.last_kind.is_some_and(TokenKind::triggers_semicolon)
    }

    fn implicit_semicolon(&self, at: Mark) -> Token {
        tracing::debug!(line = at.location.line, "inserting semicolon");
        Token::new(
            TokenKind::Semicolon,
            Some(TokenValue::Text("\n".to_string())),
            Span::new(at.location, at.location),
        )
    }

    /// Skip whitespace and comments. Returns a semicolon token when a
    /// line break follows a token that can end a statement.
    fn skip_trivia(&mut self) -> Result<Option<Token>, LexError> {
        loop {
            match self.peek() {
                Some(' ' | '\t' | '\r') => {
                    self.advance();
                }
                Some('\n') => {
                    let at = self.mark();
                    self.advance();
                    if self.needs_semicolon() {
                        return Ok(Some(self.implicit_semicolon(at)));
                    }
                }
                Some('/') => match self.peek_at(1) {
                    Some('/') => self.skip_line_comment(),
                    Some('*') => {
                        let at = self.mark();
                        if self.skip_block_comment(at)? && self.needs_semicolon() {
                            return Ok(Some(self.implicit_semicolon(at)));
                        }
                    }
                    _ => return Ok(None),
                },
                _ => return Ok(None),
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    /// Returns whether the comment contained a line break.
    fn skip_block_comment(&mut self, start: Mark) -> Result<bool, LexError> {
        self.advance(); // /
        self.advance(); // *

        let mut newline = false;
        loop {
            match self.advance() {
                None => {
                    return Err(self.error_at(
                        LexErrorKind::UnterminatedLiteral(Unterminated::BlockComment),
                        start,
                    ));
                }
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    return Ok(newline);
                }
                Some('\n') => newline = true,
                Some(_) => {}
            }
        }
    }

    // -- words --

    fn read_word(&mut self, start: Mark) -> Token {
        let word = self.take_while(is_ident_char);
        match Keyword::from_word(word) {
            Some(kw) => self.finish(TokenKind::Keyword(kw), None, start),
            None => self.finish(
                TokenKind::Identifier,
                Some(TokenValue::Ident(word.to_string())),
                start,
            ),
        }
    }

    // -- numbers --

    fn read_number(&mut self, start: Mark) -> Result<Token, LexError> {
        if self.peek() == Some('0') && matches!(self.peek_at(1), Some('x' | 'X')) {
            return self.read_hex_number(start);
        }

        let decimals = self.take_while(|c| c.is_ascii_digit());

        let mut is_float = false;
        if self.eat('.') {
            self.take_while(|c| c.is_ascii_digit());
            is_float = true;
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            self.read_exponent()?;
            is_float = true;
        }

        let source = self.source;
        let text = &source[start.offset..self.pos];

        if self.eat('i') {
            let magnitude = self.parse_float(text)?;
            return Ok(self.finish(
                TokenKind::ImaginaryLit,
                Some(TokenValue::Imaginary(magnitude)),
                start,
            ));
        }

        if is_float {
            let value = self.parse_float(text)?;
            return Ok(self.finish(TokenKind::FloatLit, Some(TokenValue::Float(value)), start));
        }

        let value = self.parse_int(decimals)?;
        Ok(self.finish(TokenKind::IntLit, Some(TokenValue::Int(value)), start))
    }

    fn read_hex_number(&mut self, start: Mark) -> Result<Token, LexError> {
        self.advance(); // 0
        self.advance(); // x

        let digits = self.take_while(|c| c.is_ascii_hexdigit());
        if digits.is_empty() {
            return Err(self.error(LexErrorKind::MalformedNumericLiteral(
                NumericError::MissingHexDigits,
            )));
        }

        let value = u64::from_str_radix(digits, 16).map_err(|_| {
            self.error_at(
                LexErrorKind::MalformedNumericLiteral(NumericError::Overflow),
                start,
            )
        })?;
        Ok(self.finish(TokenKind::IntLit, Some(TokenValue::Int(value)), start))
    }

    fn read_exponent(&mut self) -> Result<(), LexError> {
        self.advance(); // e or E
        if matches!(self.peek(), Some('+' | '-')) {
            self.advance();
        }
        if self.take_while(|c| c.is_ascii_digit()).is_empty() {
            return Err(self.error(LexErrorKind::MalformedNumericLiteral(
                NumericError::MissingExponentDigits,
            )));
        }
        Ok(())
    }

    fn parse_float(&self, text: &str) -> Result<f64, LexError> {
        text.parse::<f64>().map_err(|_| {
            self.error(LexErrorKind::MalformedNumericLiteral(
                NumericError::InvalidFloat,
            ))
        })
    }

    /// A run with a leading `0` and more than one digit is octal; a lone
    /// `0` is decimal zero.
    fn parse_int(&self, decimals: &str) -> Result<u64, LexError> {
        let malformed = |err| self.error(LexErrorKind::MalformedNumericLiteral(err));

        let radix = if decimals.len() > 1 && decimals.starts_with('0') {
            if let Some(bad) = decimals.chars().find(|c| !matches!(c, '0'..='7')) {
                return Err(malformed(NumericError::InvalidOctalDigit(bad)));
            }
            8
        } else {
            10
        };

        u64::from_str_radix(decimals, radix).map_err(|_| malformed(NumericError::Overflow))
    }

    // -- strings and runes --

    fn read_string(&mut self, start: Mark) -> Result<Token, LexError> {
        self.advance(); // opening quote

        let mut value = Vec::new();
        loop {
            match self.peek() {
                None | Some('\n') => {
                    return Err(self.error_at(
                        LexErrorKind::UnterminatedLiteral(Unterminated::String),
                        start,
                    ));
                }
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => match self.read_escape(Unterminated::String, start)? {
                    Decoded::Char(c) => push_char(&mut value, c),
                    Decoded::Byte(b) => value.push(b),
                },
                Some(c) => {
                    self.advance();
                    push_char(&mut value, c);
                }
            }
        }

        Ok(self.finish(TokenKind::StringLit, Some(TokenValue::Str(value)), start))
    }

    fn read_raw_string(&mut self, start: Mark) -> Result<Token, LexError> {
        self.advance(); // opening backquote

        let mut value = String::new();
        loop {
            match self.advance() {
                None => {
                    return Err(self.error_at(
                        LexErrorKind::UnterminatedLiteral(Unterminated::RawString),
                        start,
                    ));
                }
                Some('`') => break,
                Some('\r') => {}
                Some(c) => value.push(c),
            }
        }

        Ok(self.finish(
            TokenKind::StringLit,
            Some(TokenValue::Str(value.into_bytes())),
            start,
        ))
    }

    fn read_rune(&mut self, start: Mark) -> Result<Token, LexError> {
        self.advance(); // opening quote

        let mut first = None;
        let mut count = 0;
        loop {
            let ch = match self.peek() {
                None | Some('\n') => {
                    return Err(self.error_at(
                        LexErrorKind::UnterminatedLiteral(Unterminated::Rune),
                        start,
                    ));
                }
                Some('\'') => {
                    self.advance();
                    break;
                }
                Some('\\') => match self.read_escape(Unterminated::Rune, start)? {
                    Decoded::Char(c) => c,
                    Decoded::Byte(b) => char::from(b),
                },
                Some(c) => {
                    self.advance();
                    c
                }
            };
            count += 1;
            first.get_or_insert(ch);
        }

        match first {
            Some(ch) if count == 1 => {
                Ok(self.finish(TokenKind::RuneLit, Some(TokenValue::Rune(ch)), start))
            }
            _ => Err(self.error_at(LexErrorKind::InvalidRuneWidth { count }, start)),
        }
    }

    /// Decode one escape sequence; the cursor is on the backslash.
    fn read_escape(&mut self, literal: Unterminated, start: Mark) -> Result<Decoded, LexError> {
        let at = self.mark();
        self.advance(); // backslash

        let Some(ch) = self.advance() else {
            return Err(self.error_at(LexErrorKind::UnterminatedLiteral(literal), start));
        };

        let decoded = match ch {
            'a' => Decoded::Char('\u{07}'),
            'b' => Decoded::Char('\u{08}'),
            'f' => Decoded::Char('\u{0C}'),
            'n' => Decoded::Char('\n'),
            'r' => Decoded::Char('\r'),
            't' => Decoded::Char('\t'),
            'v' => Decoded::Char('\u{0B}'),
            '\\' => Decoded::Char('\\'),
            '\'' => Decoded::Char('\''),
            '"' => Decoded::Char('"'),
            'x' => {
                let value = self.read_hex_escape(ch, 2, at)?;
                Decoded::Byte(self.escape_byte(value, at)?)
            }
            'u' | 'U' => {
                let width = if ch == 'u' { 4 } else { 8 };
                let value = self.read_hex_escape(ch, width, at)?;
                let decoded = char::from_u32(value).ok_or_else(|| {
                    self.error_at(
                        LexErrorKind::InvalidEscapeSequence(EscapeError::OutOfRange(value)),
                        at,
                    )
                })?;
                Decoded::Char(decoded)
            }
            '0'..='7' => {
                let value = self.read_octal_escape(ch, at)?;
                Decoded::Byte(self.escape_byte(value, at)?)
            }
            other => {
                return Err(self.error_at(
                    LexErrorKind::InvalidEscapeSequence(EscapeError::Unknown(other)),
                    at,
                ));
            }
        };
        Ok(decoded)
    }

    fn escape_byte(&self, value: u32, at: Mark) -> Result<u8, LexError> {
        u8::try_from(value).map_err(|_| {
            self.error_at(
                LexErrorKind::InvalidEscapeSequence(EscapeError::OutOfRange(value)),
                at,
            )
        })
    }

    /// Exactly three octal digits; `first` has already been consumed.
    fn read_octal_escape(&mut self, first: char, at: Mark) -> Result<u32, LexError> {
        let mut value = first.to_digit(8).unwrap_or_default();
        for _ in 0..2 {
            let Some(digit) = self.peek().and_then(|c| c.to_digit(8)) else {
                return Err(self.error_at(
                    LexErrorKind::InvalidEscapeSequence(EscapeError::MissingOctalDigits),
                    at,
                ));
            };
            self.advance();
            value = value * 8 + digit;
        }
        Ok(value)
    }

    fn read_hex_escape(&mut self, escape: char, width: usize, at: Mark) -> Result<u32, LexError> {
        let mut value: u32 = 0;
        for _ in 0..width {
            let Some(digit) = self.peek().and_then(|c| c.to_digit(16)) else {
                return Err(self.error_at(
                    LexErrorKind::InvalidEscapeSequence(EscapeError::MissingHexDigits {
                        escape,
                        expected: width,
                    }),
                    at,
                ));
            };
            self.advance();
            value = (value << 4) | digit;
        }
        Ok(value)
    }

    // -- operators and punctuation --

    fn read_operator(&mut self, start: Mark, ch: char) -> Result<Token, LexError> {
        self.advance();

        let kind = match ch {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '~' => TokenKind::Tilde,
            '.' => {
                if self.peek() == Some('.') && self.peek_at(1) == Some('.') {
                    self.advance();
                    self.advance();
                    TokenKind::Ellipsis
                } else {
                    TokenKind::Dot
                }
            }
            ':' => self.either('=', TokenKind::Define, TokenKind::Colon),
            '+' => {
                if self.eat('+') {
                    TokenKind::Increment
                } else {
                    self.either('=', TokenKind::PlusAssign, TokenKind::Plus)
                }
            }
            '-' => {
                if self.eat('-') {
                    TokenKind::Decrement
                } else {
                    self.either('=', TokenKind::MinusAssign, TokenKind::Minus)
                }
            }
            '*' => self.either('=', TokenKind::StarAssign, TokenKind::Star),
            '/' => self.either('=', TokenKind::SlashAssign, TokenKind::Slash),
            '%' => self.either('=', TokenKind::PercentAssign, TokenKind::Percent),
            '^' => self.either('=', TokenKind::CaretAssign, TokenKind::Caret),
            '=' => self.either('=', TokenKind::EqEq, TokenKind::Assign),
            '!' => self.either('=', TokenKind::NotEq, TokenKind::Not),
            '&' => {
                if self.eat('&') {
                    TokenKind::AndAnd
                } else if self.eat('^') {
                    self.either('=', TokenKind::AmpCaretAssign, TokenKind::AmpCaret)
                } else {
                    self.either('=', TokenKind::AmpAssign, TokenKind::Amp)
                }
            }
            '|' => {
                if self.eat('|') {
                    TokenKind::OrOr
                } else {
                    self.either('=', TokenKind::PipeAssign, TokenKind::Pipe)
                }
            }
            '<' => {
                if self.eat('-') {
                    TokenKind::Arrow
                } else if self.eat('<') {
                    self.either('=', TokenKind::ShlAssign, TokenKind::Shl)
                } else {
                    self.either('=', TokenKind::LessEq, TokenKind::Less)
                }
            }
            '>' => {
                if self.eat('>') {
                    self.either('=', TokenKind::ShrAssign, TokenKind::Shr)
                } else {
                    self.either('=', TokenKind::GreaterEq, TokenKind::Greater)
                }
            }
            other => {
                return Err(self.error_at(LexErrorKind::UnexpectedCharacter(other), start));
            }
        };

        Ok(self.finish(kind, None, start))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;

    /// Yields tokens up to and including `Eof`, or up to the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.read_token();
        self.exhausted = match &result {
            Ok(token) => token.kind == TokenKind::Eof,
            Err(_) => true,
        };
        Some(result)
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// `_` or a character in Lu, Ll, Lt, Lm or Lo.
fn is_letter(ch: char) -> bool {
    if ch.is_ascii() {
        return ch == '_' || ch.is_ascii_alphabetic();
    }
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// A letter or a decimal digit (Nd).
fn is_ident_char(ch: char) -> bool {
    if ch.is_ascii() {
        return ch == '_' || ch.is_ascii_alphanumeric();
    }
    is_letter(ch) || get_general_category(ch) == GeneralCategory::DecimalNumber
}

fn push_char(buf: &mut Vec<u8>, ch: char) {
    let mut utf8 = [0; 4];
    buf.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
}
