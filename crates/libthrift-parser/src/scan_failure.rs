use crate::SourcePosition;
use crate::ThriftParseErrorKind;
use std::fmt;

/// Result type used by every scanner, combinator, and grammar production.
///
/// `Err` is ordinary control flow while backtracking: the combinators
/// consume it to decide which alternative to try next. Only the document
/// driver turns an unrecovered failure into a [`crate::ThriftParseError`].
pub(crate) type ScanResult<T> = Result<T, ScanFailure>;

/// What a failed scanner or production was looking for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Expected {
    /// A literal punctuation byte such as `{` or `=`.
    Char(u8),

    /// A reserved word such as `struct` or `throws`.
    Keyword(&'static str),

    /// A free-form description such as "identifier".
    Description(&'static str),

    /// Values or types nested deeper than the parser allows.
    NestingLimit,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Char(byte) => write!(f, "`{}`", char::from(*byte)),
            Expected::Keyword(keyword) => write!(f, "`{keyword}`"),
            Expected::Description(description) => f.write_str(description),
            Expected::NestingLimit => f.write_str("shallower nesting"),
        }
    }
}

/// A recoverable failure signalled by a speculative parse attempt.
///
/// Failures are cheap to build (no allocation) because most of them are
/// discarded by an enclosing ordered choice or repetition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ScanFailure {
    pub(crate) kind: ThriftParseErrorKind,
    pub(crate) expected: Expected,
    pub(crate) position: SourcePosition,
}

impl ScanFailure {
    pub(crate) fn new(
        kind: ThriftParseErrorKind,
        expected: Expected,
        position: SourcePosition,
    ) -> Self {
        Self {
            kind,
            expected,
            position,
        }
    }

    /// Human-readable description of the failed expectation.
    pub(crate) fn message(&self) -> String {
        if self.expected == Expected::NestingLimit {
            return "maximum nesting depth exceeded".to_string();
        }
        match self.kind {
            ThriftParseErrorKind::GrammarFailure => {
                format!("unexpected token, expected {}", self.expected)
            }
            ThriftParseErrorKind::LexicalFailure
            | ThriftParseErrorKind::StructuralFailure => {
                format!("expected {}", self.expected)
            }
        }
    }
}
