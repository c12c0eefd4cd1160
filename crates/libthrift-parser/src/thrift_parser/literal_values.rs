//! Literal values: numbers, strings, booleans, lists, maps, and symbolic
//! references.
//!
//! # Scanner ordering
//!
//! Hexadecimal (`0x1A`) and scientific-notation (`1.5e10`) literals start
//! with text that the generic decimal scanner also accepts. If decimal ran
//! first it would stop after `0` or `1.5` and leave `x1A` / `e10` behind to
//! fail later, so the specific forms are tried first.
//!
//! The integer scanner comes after decimal and is never reached from
//! [`parse_const_value`](ThriftParser::parse_const_value): decimal accepts
//! every plain integer. It is still used on its own for enum values and
//! field ids, where decimals are not allowed.

use crate::ast::ConstValue;
use crate::scan_failure::Expected;
use crate::scan_failure::ScanFailure;
use crate::scan_failure::ScanResult;
use crate::ThriftParseErrorKind;
use crate::ThriftParser;

impl<'src> ThriftParser<'src> {
    /// Parses any literal value.
    pub(crate) fn parse_const_value(&mut self) -> ScanResult<ConstValue> {
        self.nested(|parser| {
            parser.try_in_order(
                "a constant value",
                &[
                    Self::parse_hex_value,
                    Self::parse_scientific_value,
                    Self::parse_decimal_value,
                    Self::parse_integer_value,
                    Self::parse_string_value,
                    Self::parse_boolean_value,
                    Self::parse_list_value,
                    Self::parse_map_value,
                    Self::parse_reference_value,
                ],
            )
        })
    }

    /// Parses an enum value or field id: hexadecimal or integer only.
    pub(crate) fn parse_hex_or_integer(&mut self) -> ScanResult<i64> {
        self.try_in_order(
            "an integer",
            &[Self::scan_hex_integer, Self::scan_integer],
        )
    }

    fn parse_hex_value(&mut self) -> ScanResult<ConstValue> {
        self.scan_hex_integer().map(ConstValue::Int)
    }

    fn parse_scientific_value(&mut self) -> ScanResult<ConstValue> {
        self.scan_scientific_double().map(ConstValue::Double)
    }

    fn parse_integer_value(&mut self) -> ScanResult<ConstValue> {
        self.scan_integer().map(ConstValue::Int)
    }

    fn parse_string_value(&mut self) -> ScanResult<ConstValue> {
        self.scan_string_literal().map(ConstValue::String)
    }

    fn parse_reference_value(&mut self) -> ScanResult<ConstValue> {
        self.scan_symbolic_reference().map(ConstValue::Reference)
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// `-?0[xX][0-9a-fA-F]+`
    ///
    /// Literals wider than 63 bits wrap into `i64` the way Thrift's `i64`
    /// does, so `0xFFFFFFFFFFFFFFFF` is `-1`.
    pub(crate) fn scan_hex_integer(&mut self) -> ScanResult<i64> {
        let bytes = self.cursor.remaining();
        let sign_len = usize::from(bytes.first() == Some(&b'-'));
        let has_prefix = bytes.get(sign_len) == Some(&b'0')
            && matches!(bytes.get(sign_len + 1), Some(b'x' | b'X'));
        if !has_prefix {
            return Err(self.lexical_failure("hexadecimal literal"));
        }

        let prefix_len = sign_len + 2;
        let digits_len = bytes[prefix_len..]
            .iter()
            .take_while(|byte| byte.is_ascii_hexdigit())
            .count();
        self.cursor.bump(prefix_len);
        if digits_len == 0 {
            return Err(self.lexical_failure("hexadecimal digits"));
        }

        let digits_start = self.cursor.offset();
        self.cursor.bump(digits_len);
        let digits = self.cursor.slice_from(digits_start);
        let Ok(magnitude) = u64::from_str_radix(digits, 16) else {
            return Err(self.lexical_failure("hexadecimal literal of at most 64 bits"));
        };

        let value = magnitude as i64;
        self.cursor.skip_whitespace();
        Ok(if sign_len == 1 { value.wrapping_neg() } else { value })
    }

    /// `-?[0-9.]*[eE][0-9]+`
    pub(crate) fn scan_scientific_double(&mut self) -> ScanResult<f64> {
        let start = self.cursor.offset();
        let bytes = self.cursor.remaining();
        let sign_len = usize::from(bytes.first() == Some(&b'-'));
        let mantissa_len = bytes[sign_len..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit() || **byte == b'.')
            .count();
        let exponent_marker = sign_len + mantissa_len;
        if !matches!(bytes.get(exponent_marker), Some(b'e' | b'E')) {
            return Err(self.lexical_failure("scientific-notation literal"));
        }

        let exponent_len = bytes[exponent_marker + 1..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count();
        self.cursor.bump(exponent_marker + 1);
        if exponent_len == 0 {
            return Err(self.lexical_failure("exponent digits"));
        }

        self.cursor.bump(exponent_len);
        let Ok(value) = self.cursor.slice_from(start).parse::<f64>() else {
            return Err(self.lexical_failure("scientific-notation literal"));
        };
        self.cursor.skip_whitespace();
        Ok(value)
    }

    /// `[+-]?[0-9.]+` containing at least one digit.
    ///
    /// Dot-free literals become [`ConstValue::Int`] when they fit in `i64`;
    /// everything else becomes [`ConstValue::Double`].
    fn parse_decimal_value(&mut self) -> ScanResult<ConstValue> {
        let start = self.cursor.offset();
        let bytes = self.cursor.remaining();
        let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
        let body_len = bytes[sign_len..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit() || **byte == b'.')
            .count();
        let body = &bytes[sign_len..sign_len + body_len];
        if !body.iter().any(u8::is_ascii_digit) {
            return Err(self.lexical_failure("numeric literal"));
        }

        self.cursor.bump(sign_len + body_len);
        let text = self.cursor.slice_from(start);
        let value = if body.contains(&b'.') {
            text.parse::<f64>().ok().map(ConstValue::Double)
        } else {
            text.parse::<i64>()
                .map(ConstValue::Int)
                .or_else(|_| text.parse::<f64>().map(ConstValue::Double))
                .ok()
        };
        let Some(value) = value else {
            return Err(self.lexical_failure("well-formed numeric literal"));
        };

        self.cursor.skip_whitespace();
        Ok(value)
    }

    /// `[+-]?[0-9]+`, rejected when followed by `.`, `e`, `E`, `x`, or `X`.
    pub(crate) fn scan_integer(&mut self) -> ScanResult<i64> {
        let start = self.cursor.offset();
        let bytes = self.cursor.remaining();
        let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
        let digits_len = bytes[sign_len..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count();
        if digits_len == 0 {
            return Err(self.lexical_failure("integer literal"));
        }
        if matches!(
            bytes.get(sign_len + digits_len),
            Some(b'.' | b'e' | b'E' | b'x' | b'X'),
        ) {
            self.cursor.bump(sign_len + digits_len);
            return Err(self.lexical_failure("integer literal"));
        }

        self.cursor.bump(sign_len + digits_len);
        let Ok(value) = self.cursor.slice_from(start).parse::<i64>() else {
            return Err(self.lexical_failure("integer literal within 64 bits"));
        };
        self.cursor.skip_whitespace();
        Ok(value)
    }

    // =========================================================================
    // Strings
    // =========================================================================

    /// A `"`- or `'`-delimited string.
    ///
    /// A backslash consumes the byte after it unconditionally, so `\"` does
    /// not close a `"` string. Escapes are not interpreted: the returned
    /// text is exactly what appears between the quotes.
    pub(crate) fn scan_string_literal(&mut self) -> ScanResult<String> {
        let bytes = self.cursor.remaining();
        let quote = match bytes.first() {
            Some(quote @ (b'"' | b'\'')) => *quote,
            _ => return Err(self.lexical_failure("string literal")),
        };

        let mut index = 1;
        while let Some(&byte) = bytes.get(index) {
            if byte == quote {
                let content_start = self.cursor.offset() + 1;
                self.cursor.bump(index);
                let content = self.cursor.slice_from(content_start).to_string();
                self.cursor.bump(1);
                self.cursor.skip_whitespace();
                return Ok(content);
            }
            index += if byte == b'\\' { 2 } else { 1 };
        }

        self.cursor.bump(bytes.len());
        Err(self.lexical_failure("closing quote of string literal"))
    }

    /// A `"`- or `'`-delimited path with no escape handling, as used by
    /// `include`.
    pub(crate) fn scan_quoted_path(&mut self) -> ScanResult<String> {
        let bytes = self.cursor.remaining();
        let quote = match bytes.first() {
            Some(quote @ (b'"' | b'\'')) => *quote,
            _ => return Err(self.lexical_failure("quoted include path")),
        };
        let Some(path_len) = memchr::memchr(quote, &bytes[1..]) else {
            self.cursor.bump(bytes.len());
            return Err(self.lexical_failure("closing quote of include path"));
        };

        self.cursor.bump(1);
        let path_start = self.cursor.offset();
        self.cursor.bump(path_len);
        let path = self.cursor.slice_from(path_start).to_string();
        self.cursor.bump(1);
        self.cursor.skip_whitespace();
        Ok(path)
    }

    // =========================================================================
    // Booleans, containers, references
    // =========================================================================

    fn parse_boolean_value(&mut self) -> ScanResult<ConstValue> {
        self.try_in_order(
            "a boolean",
            &[
                |parser: &mut Self| {
                    parser.expect_keyword("true").map(|_| ConstValue::Bool(true))
                },
                |parser: &mut Self| {
                    parser.expect_keyword("false").map(|_| ConstValue::Bool(false))
                },
            ],
        )
    }

    /// `[ (value sep?)* ]`
    fn parse_list_value(&mut self) -> ScanResult<ConstValue> {
        self.expect_char(b'[')?;
        let items = self.repeat_until_failure(|parser| {
            let item = parser.parse_const_value()?;
            parser.scan_separator();
            Ok(item)
        });
        self.expect_char(b']')?;
        Ok(ConstValue::List(items))
    }

    /// `{ (value : value sep?)* }`
    fn parse_map_value(&mut self) -> ScanResult<ConstValue> {
        self.expect_char(b'{')?;
        let entries = self.repeat_until_failure(|parser| {
            let key = parser.parse_const_value()?;
            parser.expect_char(b':')?;
            let value = parser.parse_const_value()?;
            parser.scan_separator();
            Ok((key, value))
        });
        self.expect_char(b'}')?;
        Ok(ConstValue::Map(entries))
    }

    /// One or more identifiers joined by `.`, e.g. `Color.RED` or
    /// `shared . Limits . MAX`.
    ///
    /// Identifiers may themselves contain dots, so `Color.RED` is usually
    /// a single segment; separate segments only arise when whitespace or
    /// comments surround a dot.
    pub(crate) fn scan_symbolic_reference(&mut self) -> ScanResult<Vec<String>> {
        let mut segments = vec![self.scan_identifier()?];
        segments.extend(self.repeat_until_failure(|parser| {
            parser.expect_char(b'.')?;
            parser.scan_identifier()
        }));
        Ok(segments)
    }

    fn lexical_failure(&mut self, expected: &'static str) -> ScanFailure {
        self.cursor.fail(
            ThriftParseErrorKind::LexicalFailure,
            Expected::Description(expected),
        )
    }
}
