//! Keywords, identifiers, punctuation, and separators.
//!
//! Every scanner that consumes a token also skips the whitespace and
//! comments that follow it, so grammar rules never skip whitespace
//! themselves.

use crate::scan_failure::Expected;
use crate::scan_failure::ScanResult;
use crate::ThriftParseErrorKind;
use crate::ThriftParser;

/// Bytes allowed in identifiers: `[a-zA-Z0-9_.]`.
pub(crate) fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'.'
}

/// Bytes allowed in namespace scopes: identifier bytes plus `*`.
pub(crate) fn is_scope_byte(byte: u8) -> bool {
    is_identifier_byte(byte) || byte == b'*'
}

impl<'src> ThriftParser<'src> {
    /// Scans one or more identifier bytes.
    ///
    /// Identifiers may contain dots, so `shared.UUID` is a single
    /// identifier.
    pub(crate) fn scan_identifier(&mut self) -> ScanResult<String> {
        self.scan_word(is_identifier_byte, "identifier")
    }

    /// Scans a namespace scope such as `java`, `py.twisted`, or `*`.
    pub(crate) fn scan_scoped_identifier(&mut self) -> ScanResult<String> {
        self.scan_word(is_scope_byte, "namespace scope")
    }

    fn scan_word(
        &mut self,
        accepts: fn(u8) -> bool,
        expected: &'static str,
    ) -> ScanResult<String> {
        let start = self.cursor.offset();
        let word_len = self
            .cursor
            .remaining()
            .iter()
            .take_while(|byte| accepts(**byte))
            .count();
        if word_len == 0 {
            return Err(self.cursor.fail(
                ThriftParseErrorKind::LexicalFailure,
                Expected::Description(expected),
            ));
        }

        self.cursor.bump(word_len);
        let word = self.cursor.slice_from(start).to_string();
        self.cursor.skip_whitespace();
        Ok(word)
    }

    /// Matches `keyword` exactly.
    ///
    /// The keyword must not run straight into another identifier byte, so
    /// `struct` does not match the start of `structure` and `optional` does
    /// not match the start of `optionalFlag`.
    pub(crate) fn expect_keyword(
        &mut self,
        keyword: &'static str,
    ) -> ScanResult<&'static str> {
        let rest = self.cursor.remaining();
        let matches = rest.starts_with(keyword.as_bytes())
            && rest
                .get(keyword.len())
                .is_none_or(|next| !is_identifier_byte(*next));
        if !matches {
            return Err(self.cursor.fail(
                ThriftParseErrorKind::LexicalFailure,
                Expected::Keyword(keyword),
            ));
        }

        self.cursor.bump(keyword.len());
        self.cursor.skip_whitespace();
        Ok(keyword)
    }

    /// Matches a mandatory punctuation byte such as `{` or `=`.
    pub(crate) fn expect_char(&mut self, expected: u8) -> ScanResult<()> {
        if self.cursor.peek() != Some(expected) {
            return Err(self.cursor.fail(
                ThriftParseErrorKind::StructuralFailure,
                Expected::Char(expected),
            ));
        }

        self.cursor.bump(1);
        self.cursor.skip_whitespace();
        Ok(())
    }

    /// Consumes an optional `,` or `;` list separator.
    ///
    /// Returns whether a separator was present. Its absence is never an
    /// error: Thrift lists may be separated by whitespace alone.
    pub(crate) fn scan_separator(&mut self) -> bool {
        match self.cursor.peek() {
            Some(b',' | b';') => {
                self.cursor.bump(1);
                self.cursor.skip_whitespace();
                true
            }
            _ => false,
        }
    }
}
