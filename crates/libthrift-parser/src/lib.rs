//! A Thrift IDL parsing library.
//!
//! This crate parses a Thrift interface definition into a [`ast::Document`]:
//! one insertion-ordered map per declaration kind (`typedef`, `const`,
//! `enum`, `struct`, `union`, `exception`, `service`, `namespace`,
//! `include`), keyed by declared name. Parsing is scannerless: a
//! backtracking recursive-descent parser reads the source bytes directly.
//!
//! ```
//! let doc = libthrift_parser::parse(
//!     "namespace java com.example\n\
//!      enum Color { RED = 1, GREEN = 2 }",
//! ).unwrap();
//!
//! assert_eq!(doc.namespaces["java"].service_name, "com.example");
//! assert_eq!(doc.enums["Color"].items.len(), 2);
//! ```

pub mod ast;
mod definition_kind;
mod scan_failure;
mod source_position;
mod thrift_cursor;
mod thrift_parse_error;
mod thrift_parse_error_kind;
mod thrift_parser;

pub use definition_kind::DefinitionKind;
pub use source_position::SourcePosition;
pub use thrift_parse_error::ThriftParseError;
pub use thrift_parse_error_kind::ThriftParseErrorKind;
pub use thrift_parser::ThriftParser;

/// Parses a complete Thrift document.
pub fn parse(source: &str) -> Result<ast::Document, ThriftParseError> {
    ThriftParser::new(source).parse_document()
}

/// Parses a Thrift document starting `start_offset` bytes into `source`.
///
/// Offsets past the end of `source` are clamped to the end and yield an
/// empty document.
pub fn parse_from(
    source: &str,
    start_offset: usize,
) -> Result<ast::Document, ThriftParseError> {
    ThriftParser::new(source)
        .with_start_offset(start_offset)
        .parse_document()
}

#[cfg(test)]
mod tests;
