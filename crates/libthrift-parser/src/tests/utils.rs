//! Various test utils.

use crate::ast;
use crate::ThriftParseError;

/// Parses `source`, panicking with the formatted error if it fails.
pub fn parse_ok(source: &str) -> ast::Document {
    match crate::parse(source) {
        Ok(doc) => doc,
        Err(error) => panic!(
            "expected `{source}` to parse, got:\n{}",
            error.format_detailed(None),
        ),
    }
}

/// Parses `source`, panicking if it unexpectedly succeeds.
pub fn parse_err(source: &str) -> ThriftParseError {
    match crate::parse(source) {
        Ok(doc) => panic!("expected `{source}` to fail, got: {doc:#?}"),
        Err(error) => error,
    }
}

/// The four-declaration document used by the end-to-end tests.
pub const ECHO_SERVICE_SOURCE: &str = "\
namespace java com.example
typedef string UUID
struct Point { 1: required i32 x; 2: required i32 y; }
service Echo { string ping(1: string msg) }
";
