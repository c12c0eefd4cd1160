//! Tests for literal value parsing.
//!
//! These tests verify that numeric literals are routed to the right
//! scanner (hexadecimal and scientific notation before decimal), and that
//! strings, booleans, containers, and symbolic references parse as
//! written.

use crate::ast::ConstValue;
use crate::ThriftParseErrorKind;
use crate::ThriftParser;

/// Parses a single value and checks that all input was consumed.
fn parse_value(source: &str) -> ConstValue {
    let mut parser = ThriftParser::new(source);
    let value = parser.parse_const_value().unwrap();
    assert!(
        parser.cursor().is_at_end(),
        "`{source}` left unconsumed input at byte {}",
        parser.cursor().offset(),
    );
    value
}

fn reference(segments: &[&str]) -> ConstValue {
    ConstValue::Reference(segments.iter().map(|s| s.to_string()).collect())
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn hexadecimal_literals() {
    assert_eq!(parse_value("0x1A"), ConstValue::Int(26));
    assert_eq!(parse_value("0XfF"), ConstValue::Int(255));
    assert_eq!(parse_value("-0x1A"), ConstValue::Int(-26));
}

/// Hex literals wider than 63 bits wrap into `i64`.
#[test]
fn hexadecimal_literal_wraps_at_64_bits() {
    assert_eq!(parse_value("0xFFFFFFFFFFFFFFFF"), ConstValue::Int(-1));
    assert_eq!(
        parse_value("0x8000000000000000"),
        ConstValue::Int(i64::MIN),
    );
}

#[test]
fn hexadecimal_literal_over_64_bits_is_not_a_number() {
    let mut parser = ThriftParser::new("0x10000000000000000");
    assert!(parser.scan_hex_integer().is_err());
}

#[test]
fn scientific_literals() {
    assert_eq!(parse_value("1.5e3"), ConstValue::Double(1500.0));
    assert_eq!(parse_value("2E2"), ConstValue::Double(200.0));
    assert_eq!(parse_value("-1.5e3"), ConstValue::Double(-1500.0));
}

#[test]
fn decimal_literals() {
    assert_eq!(parse_value("-7"), ConstValue::Int(-7));
    assert_eq!(parse_value("+7"), ConstValue::Int(7));
    assert_eq!(parse_value("0"), ConstValue::Int(0));
    assert_eq!(parse_value("3.25"), ConstValue::Double(3.25));
    assert_eq!(parse_value(".5"), ConstValue::Double(0.5));
}

/// Dot-free literals too large for `i64` fall back to `Double`.
#[test]
fn oversized_integer_becomes_double() {
    assert_eq!(
        parse_value("99999999999999999999"),
        ConstValue::Double(1e20),
    );
}

/// An exponent marker with no digits is not scientific notation; the
/// decimal scanner takes the mantissa and leaves the marker behind.
#[test]
fn dangling_exponent_leaves_marker_unconsumed() {
    let mut parser = ThriftParser::new("1e");
    assert_eq!(parser.parse_const_value(), Ok(ConstValue::Int(1)));
    assert_eq!(parser.cursor().peek(), Some(b'e'));
}

#[test]
fn hex_or_integer_accepts_only_integers() {
    let mut parser = ThriftParser::new("12");
    assert_eq!(parser.parse_hex_or_integer(), Ok(12));

    let mut parser = ThriftParser::new("0x10");
    assert_eq!(parser.parse_hex_or_integer(), Ok(16));

    let mut parser = ThriftParser::new("-3:");
    assert_eq!(parser.parse_hex_or_integer(), Ok(-3));
    assert_eq!(parser.cursor().peek(), Some(b':'));

    for source in ["1.5", "2e3", "abc"] {
        let mut parser = ThriftParser::new(source);
        let failure = parser.parse_hex_or_integer().unwrap_err();
        assert_eq!(failure.kind, ThriftParseErrorKind::GrammarFailure, "{source}");
        assert_eq!(parser.cursor().offset(), 0, "{source}");
    }
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn double_and_single_quoted_strings() {
    assert_eq!(
        parse_value("\"hello world\""),
        ConstValue::String("hello world".to_string()),
    );
    assert_eq!(
        parse_value("'hello'"),
        ConstValue::String("hello".to_string()),
    );
}

/// Escapes are copied through without interpretation.
#[test]
fn string_escapes_are_verbatim() {
    assert_eq!(
        parse_value(r#""say \"hi\"\n""#),
        ConstValue::String(r#"say \"hi\"\n"#.to_string()),
    );
    assert_eq!(
        parse_value(r"'it\'s'"),
        ConstValue::String(r"it\'s".to_string()),
    );
}

/// The other quote character needs no escaping.
#[test]
fn string_may_contain_other_quote() {
    assert_eq!(
        parse_value(r#"'say "hi"'"#),
        ConstValue::String(r#"say "hi""#.to_string()),
    );
}

#[test]
fn string_keeps_multibyte_text() {
    assert_eq!(
        parse_value("\"héllo → wörld\""),
        ConstValue::String("héllo → wörld".to_string()),
    );
}

#[test]
fn unterminated_string_fails() {
    let mut parser = ThriftParser::new("\"abc");
    let failure = parser.scan_string_literal().unwrap_err();
    assert_eq!(failure.kind, ThriftParseErrorKind::LexicalFailure);
    assert_eq!(failure.position.byte_offset(), 4);
}

// =============================================================================
// Booleans, containers, references
// =============================================================================

#[test]
fn boolean_literals() {
    assert_eq!(parse_value("true"), ConstValue::Bool(true));
    assert_eq!(parse_value("false"), ConstValue::Bool(false));
}

/// A name that merely starts with a boolean keyword is a reference.
#[test]
fn boolean_prefix_is_reference() {
    assert_eq!(parse_value("trueish"), reference(&["trueish"]));
}

#[test]
fn list_with_mixed_separators() {
    assert_eq!(
        parse_value("[1, 2; 3 4]"),
        ConstValue::List(vec![
            ConstValue::Int(1),
            ConstValue::Int(2),
            ConstValue::Int(3),
            ConstValue::Int(4),
        ]),
    );
    assert_eq!(parse_value("[ ]"), ConstValue::List(vec![]));
}

#[test]
fn map_keeps_entry_order_and_duplicates() {
    assert_eq!(
        parse_value("{'b': 1, 'a': [true], 'b': 0x2}"),
        ConstValue::Map(vec![
            (ConstValue::String("b".to_string()), ConstValue::Int(1)),
            (
                ConstValue::String("a".to_string()),
                ConstValue::List(vec![ConstValue::Bool(true)]),
            ),
            (ConstValue::String("b".to_string()), ConstValue::Int(2)),
        ]),
    );
}

#[test]
fn nested_containers() {
    assert_eq!(
        parse_value("{1: {2: [3.5]}}"),
        ConstValue::Map(vec![(
            ConstValue::Int(1),
            ConstValue::Map(vec![(
                ConstValue::Int(2),
                ConstValue::List(vec![ConstValue::Double(3.5)]),
            )]),
        )]),
    );
}

#[test]
fn symbolic_references() {
    assert_eq!(parse_value("MAX_SIZE"), reference(&["MAX_SIZE"]));
    assert_eq!(parse_value("Color.RED"), reference(&["Color.RED"]));
    assert_eq!(
        parse_value("shared . Limits . MAX"),
        reference(&["shared", "Limits", "MAX"]),
    );
}

#[test]
fn value_failure_is_grammar_failure() {
    let mut parser = ThriftParser::new("}");
    let failure = parser.parse_const_value().unwrap_err();
    assert_eq!(failure.kind, ThriftParseErrorKind::GrammarFailure);
    assert_eq!(failure.message(), "unexpected token, expected a constant value");
}
