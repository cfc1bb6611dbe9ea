//! Parser cursor and AST fragment tests.

use golex_rs::{
    Error, Keyword, LexErrorKind, LiteralKind, Location, OperandName, ParseErrorKind, Parser,
    TokenKind, TokenValue, Unterminated, parse_basic_lit, parse_operand_name,
};

// -----------------------------------------------------------
// Operand names.
// -----------------------------------------------------------

#[test]
fn parse_qualified_identifier_span() {
    let name = parse_operand_name("fmt.Println").unwrap().unwrap();
    let OperandName::Qualified(q) = name else {
        panic!("expected qualified identifier, got {name:?}");
    };
    assert_eq!(q.package, "fmt");
    assert_eq!(q.name, "Println");
    assert_eq!(q.span.start, Location::new(1, 0));
    assert_eq!(q.span.end, Location::new(1, 11));
}

#[test]
fn parse_qualified_identifier_with_spaces() {
    let name = parse_operand_name("os . Args").unwrap().unwrap();
    assert!(matches!(
        &name,
        OperandName::Qualified(q) if q.package == "os" && q.name == "Args"
    ));
    assert_eq!(name.span().end, Location::new(1, 9));
}

#[test]
fn parse_plain_identifier() {
    let name = parse_operand_name("count + 1").unwrap().unwrap();
    assert!(matches!(&name, OperandName::Identifier(id) if id.name == "count"));
    assert_eq!(name.name(), "count");
}

#[test]
fn parse_operand_name_absent() {
    assert!(parse_operand_name("42").unwrap().is_none());
    assert!(parse_operand_name("").unwrap().is_none());
}

#[test]
fn parse_dot_at_end_of_input() {
    let err = parse_operand_name("fmt.").unwrap_err();
    assert!(matches!(
        err,
        Error::Parse(ref e) if e.kind == ParseErrorKind::ExpectedIdentifier { found: None }
    ));
}

#[test]
fn parse_dot_followed_by_keyword() {
    let err = parse_operand_name("x.type").unwrap_err();
    assert!(matches!(
        err,
        Error::Parse(ref e) if e.kind == ParseErrorKind::ExpectedIdentifier {
            found: Some("type".to_string())
        }
    ));
    assert!(err.to_string().contains("expected identifier, got 'type'"));
}

#[test]
fn parse_successive_operand_names() {
    let mut parser = Parser::new("a.B c").unwrap();
    let first = parser.parse_operand_name().unwrap().unwrap();
    let second = parser.parse_operand_name().unwrap().unwrap();
    assert!(matches!(first, OperandName::Qualified(_)));
    assert!(matches!(second, OperandName::Identifier(_)));
    assert_eq!(parser.current().kind, TokenKind::Semicolon);
}

// -----------------------------------------------------------
// Basic literals.
// -----------------------------------------------------------

#[test]
fn parse_each_literal_kind() {
    let cases = [
        ("42", LiteralKind::Int, TokenValue::Int(42)),
        ("2.5", LiteralKind::Float, TokenValue::Float(2.5)),
        ("4i", LiteralKind::Imaginary, TokenValue::Imaginary(4.0)),
        ("'x'", LiteralKind::Rune, TokenValue::Rune('x')),
        ("\"hi\"", LiteralKind::String, TokenValue::Str(b"hi".to_vec())),
        ("`raw`", LiteralKind::String, TokenValue::Str(b"raw".to_vec())),
    ];
    for (input, kind, value) in cases {
        let lit = parse_basic_lit(input).unwrap().unwrap();
        assert_eq!(lit.kind, kind, "{input}");
        assert_eq!(lit.value, value, "{input}");
        assert_eq!(lit.kind.token_kind(), golex_rs::tokenize(input).unwrap()[0].kind);
    }
}

#[test]
fn parse_basic_lit_leaves_non_literal() {
    let mut parser = Parser::new("if").unwrap();
    assert!(parser.parse_basic_lit().unwrap().is_none());
    assert_eq!(parser.current().kind, TokenKind::Keyword(Keyword::If));
}

#[test]
fn parse_literal_span() {
    let lit = parse_basic_lit("  \"abc\"").unwrap().unwrap();
    assert_eq!(lit.span.start, Location::new(1, 2));
    assert_eq!(lit.span.end, Location::new(1, 7));
}

// -----------------------------------------------------------
// Cursor.
// -----------------------------------------------------------

#[test]
fn next_returns_consumed_token() {
    let mut parser = Parser::new("a b").unwrap();
    let consumed = parser.next().unwrap();
    assert_eq!(consumed.ident(), Some("a"));
    assert_eq!(parser.current().ident(), Some("b"));
}

#[test]
fn cursor_stays_on_eof() {
    let mut parser = Parser::new("").unwrap();
    for _ in 0..3 {
        assert_eq!(parser.next().unwrap().kind, TokenKind::Eof);
    }
    assert_eq!(parser.current().kind, TokenKind::Eof);
}

// -----------------------------------------------------------
// Lex errors pass through unchanged.
// -----------------------------------------------------------

#[test]
fn lex_error_on_first_token() {
    let err = Parser::new("'ab'").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::InvalidRuneWidth { count: 2 });
}

#[test]
fn lex_error_while_parsing() {
    let err = parse_operand_name("fmt.Println(\"oops").unwrap_err();
    let Error::Lex(err) = err else {
        panic!("expected lex error");
    };
    assert_eq!(
        err.kind,
        LexErrorKind::UnterminatedLiteral(Unterminated::String)
    );
}
