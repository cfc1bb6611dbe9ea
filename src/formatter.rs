//! Serializes tokens and decoded literals back into canonical Go source.
//!
//! Integers come out in decimal, floats always carry a `.` or an exponent,
//! and strings/runes are re-quoted with Go escapes, so re-tokenizing the
//! output yields the same kinds and values.

use std::fmt::Write as _;

use crate::ast::BasicLiteral;
use crate::token::{Token, TokenKind, TokenValue};

/// Format a literal node as Go source text.
#[must_use]
pub fn format_literal(literal: &BasicLiteral) -> String {
    format_value(&literal.value)
}

/// Format a single token as Go source text.
///
/// Implicit semicolons become a line break and `Eof` the empty string.
#[must_use]
pub fn format_token(token: &Token) -> String {
    if token.is_implicit_semicolon() {
        return "\n".to_string();
    }
    if let Some(symbol) = token.kind.symbol() {
        return symbol.to_string();
    }
    token.value.as_ref().map(format_value).unwrap_or_default()
}

/// Format a token stream, one space between tokens and a line break
/// wherever a semicolon was inserted.
#[must_use]
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();

    for token in tokens {
        if token.kind == TokenKind::Eof {
            break;
        }
        if token.is_implicit_semicolon() {
            out.push('\n');
            continue;
        }
        if !out.is_empty() && !out.ends_with('\n') {
            out.push(' ');
        }
        out.push_str(&format_token(token));
    }

    out
}

fn format_value(value: &TokenValue) -> String {
    match value {
        TokenValue::Ident(text) | TokenValue::Text(text) => text.clone(),
        TokenValue::Int(v) => v.to_string(),
        TokenValue::Float(v) => format_float(*v),
        TokenValue::Imaginary(v) => {
            let mut out = format_float(*v);
            out.push('i');
            out
        }
        TokenValue::Rune(ch) => {
            let mut out = String::from('\'');
            push_escaped(&mut out, *ch, '\'');
            out.push('\'');
            out
        }
        TokenValue::Str(bytes) => quote_bytes(bytes),
    }
}

/// Shortest representation that reads back to the same value; `Debug`
/// always includes a `.` or an exponent.
fn format_float(value: f64) -> String {
    if value.is_infinite() {
        // Only reachable through an overflowing exponent such as `1e999`.
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return format!("{sign}1e999");
    }
    format!("{value:?}")
}

fn quote_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    for chunk in bytes.utf8_chunks() {
        for ch in chunk.valid().chars() {
            push_escaped(&mut out, ch, '"');
        }
        for byte in chunk.invalid() {
            let _ = write!(out, "\\x{byte:02x}");
        }
    }
    out.push('"');
    out
}

fn push_escaped(out: &mut String, ch: char, quote: char) {
    match ch {
        '\u{07}' => out.push_str("\\a"),
        '\u{08}' => out.push_str("\\b"),
        '\u{0C}' => out.push_str("\\f"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\u{0B}' => out.push_str("\\v"),
        '\\' => out.push_str("\\\\"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        c if c.is_control() => {
            let code = u32::from(c);
            if code < 0x80 {
                let _ = write!(out, "\\x{code:02x}");
            } else if code <= 0xFFFF {
                let _ = write!(out, "\\u{code:04x}");
            } else {
                let _ = write!(out, "\\U{code:08x}");
            }
        }
        c => out.push(c),
    }
}
