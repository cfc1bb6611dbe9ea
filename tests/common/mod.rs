#![allow(dead_code)]

use golex_rs::{Token, TokenKind, TokenValue, format_token, tokenize};

pub fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input)
        .expect("tokenize failed")
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

/// Value of the first token in `input`.
pub fn first_value(input: &str) -> TokenValue {
    tokenize(input)
        .expect("tokenize failed")
        .into_iter()
        .next()
        .and_then(|t| t.value)
        .unwrap_or_else(|| panic!("no value for first token of {input:?}"))
}

/// Re-serialize a literal token, tokenize the result, and assert the
/// same kind and value come back.
pub fn assert_token_roundtrip(token: &Token) {
    let text = format_token(token);
    let reparsed = tokenize(&text).unwrap_or_else(|e| {
        panic!(
            "failed to re-tokenize formatted token: {e}\n\
             --- formatted ---\n{text}"
        )
    });
    assert_eq!(
        reparsed[0].kind, token.kind,
        "kind mismatch\n--- formatted ---\n{text}"
    );
    assert_eq!(
        reparsed[0].value, token.value,
        "value mismatch\n--- formatted ---\n{text}"
    );
}
