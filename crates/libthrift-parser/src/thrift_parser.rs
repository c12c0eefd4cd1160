//! Backtracking recursive-descent parser for Thrift IDL documents.
//!
//! This module provides [`ThriftParser`], which parses one source string
//! into an [`ast::Document`]. The free functions [`crate::parse`] and
//! [`crate::parse_from`] wrap it for the common case.
//!
//! # Architecture
//!
//! The parser works directly on the source bytes through a
//! [`ThriftCursor`]; there is no separate lexer. Grammar rules are methods
//! returning [`ScanResult<T>`], where `Err` is a cheap [`ScanFailure`]
//! that the combinators treat as ordinary control flow:
//!
//! - [`try_in_order`](ThriftParser::try_in_order): ordered choice. Every
//!   alternative runs from the same checkpoint, and the first success wins.
//! - [`repeat_until_failure`](ThriftParser::repeat_until_failure): greedy
//!   repetition that rolls back the final, failing attempt and never fails.
//! - [`optional`](ThriftParser::optional): try once, and on failure proceed
//!   as if nothing was there.
//!
//! Each combinator brackets its attempt with a checkpoint `save()` and
//! exactly one `restore()`+`drop_checkpoint()` or `drop_checkpoint()`, so
//! a failed attempt never leaks partial cursor state.
//!
//! Grammar rules live in submodules:
//!
//! - `lexical_scanners`: keywords, identifiers, punctuation, separators
//! - `literal_values`: numeric, string, boolean, list, map, and reference
//!   values
//! - `declarations`: types, fields, and the nine top-level declarations
//!
//! # Errors
//!
//! There is no error recovery. The document driver stops at the first
//! declaration that fails and reports the furthest failure recorded while
//! attempting it.
//!
//! Values and types nest through recursion, so nesting is capped at
//! [`MAX_RECURSION_DEPTH`](ThriftParser::MAX_RECURSION_DEPTH). Exceeding it
//! fails the declaration with "maximum nesting depth exceeded" instead of
//! overflowing the stack.

mod declarations;
mod lexical_scanners;
mod literal_values;

use crate::ast;
use crate::scan_failure::Expected;
use crate::scan_failure::ScanFailure;
use crate::scan_failure::ScanResult;
use crate::thrift_cursor::ThriftCursor;
use crate::ThriftParseError;
use crate::ThriftParseErrorKind;
use indexmap::IndexMap;

/// A grammar rule usable as one alternative of an ordered choice.
pub(crate) type Rule<'src, T> = fn(&mut ThriftParser<'src>) -> ScanResult<T>;

/// A backtracking recursive-descent parser for Thrift documents.
///
/// Each parser owns its cursor and checkpoint stack, so independent parses
/// can run concurrently on separate threads.
///
/// # Usage
///
/// ```
/// use libthrift_parser::ThriftParser;
///
/// let source = "struct Point { 1: i32 x; 2: i32 y; }";
/// let doc = ThriftParser::new(source).parse_document().unwrap();
///
/// assert_eq!(doc.structs["Point"].len(), 2);
/// ```
pub struct ThriftParser<'src> {
    cursor: ThriftCursor<'src>,

    /// Current nesting depth, incremented on entry to `parse_const_value`
    /// and `parse_field_type` and decremented on exit.
    recursion_depth: usize,

    /// The first nesting-limit failure within the current declaration.
    /// Reported in preference to the furthest failure.
    nesting_failure: Option<ScanFailure>,
}

impl<'src> ThriftParser<'src> {
    /// Maximum nesting depth for values (`[[[...`, `{{{...`) and container
    /// types (`list<list<...`).
    ///
    /// Real IDL files rarely nest more than a handful of levels. The cap
    /// stays well inside the stack of a debug-build test thread.
    pub const MAX_RECURSION_DEPTH: usize = 64;

    /// Creates a parser positioned at the start of `source`.
    ///
    /// Accepts any type that can be referenced as a `str`,
    /// including `&str`, `&String`, and `&Cow<str>`.
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        Self {
            cursor: ThriftCursor::new(source.as_ref(), 0),
            recursion_depth: 0,
            nesting_failure: None,
        }
    }

    /// Starts parsing at `start_offset` bytes into the source instead of at
    /// the beginning. Offsets past the end are clamped to the end.
    ///
    /// Line numbers in errors count line endings from `start_offset` on.
    pub fn with_start_offset(self, start_offset: usize) -> Self {
        Self {
            cursor: ThriftCursor::new(self.cursor.source(), start_offset),
            ..self
        }
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> &ThriftCursor<'src> {
        &self.cursor
    }

    // =========================================================================
    // Document driver
    // =========================================================================

    /// Parses the whole source into a [`ast::Document`].
    ///
    /// Declarations are parsed one after another and folded into the
    /// document by kind and name. The first declaration that fails to parse
    /// aborts the whole parse with a [`ThriftParseError`]; an empty (or
    /// whitespace-and-comments only) source yields an empty document.
    pub fn parse_document(mut self) -> Result<ast::Document, ThriftParseError> {
        let mut document = ast::Document::default();

        self.cursor.skip_whitespace();
        while !self.cursor.is_at_end() {
            self.cursor.clear_furthest_failure();
            self.nesting_failure = None;
            match self.parse_definition() {
                Ok(definition) => {
                    log::trace!(
                        "Parsed {} `{}` (ending at byte {}).",
                        definition.kind(),
                        definition.name,
                        self.cursor.offset(),
                    );
                    document.insert(definition);
                }

                Err(failure) => {
                    let failure = self
                        .nesting_failure
                        .take()
                        .or_else(|| self.cursor.take_furthest_failure())
                        .unwrap_or(failure);
                    let error = self.error_from_failure(failure);
                    log::debug!("Halting parse: {}", error.format_oneline());
                    return Err(error);
                }
            }
        }

        debug_assert_eq!(self.cursor.checkpoint_depth(), 0);
        debug_assert_eq!(self.recursion_depth, 0);
        Ok(document)
    }

    /// Converts the failure that ends a parse into the public error type.
    fn error_from_failure(&self, failure: ScanFailure) -> ThriftParseError {
        let source = self.cursor.source();
        let offset = failure.position.byte_offset().min(source.len());
        let context: String = match source.get(offset..) {
            Some(rest) => rest.chars().take(ThriftParseError::CONTEXT_CHAR_LEN).collect(),
            None => String::from_utf8_lossy(&source.as_bytes()[offset..])
                .chars()
                .take(ThriftParseError::CONTEXT_CHAR_LEN)
                .collect(),
        };
        let found = match context.chars().next() {
            Some(ch) => format!("`{ch}`"),
            None => "end of input".to_string(),
        };

        ThriftParseError::new(
            format!("{}, found {found}", failure.message()),
            context,
            failure.position.line(),
            failure.kind,
        )
    }

    // =========================================================================
    // Nesting limit
    // =========================================================================

    /// Runs `rule` one nesting level deeper, failing without running it once
    /// the depth would exceed [`Self::MAX_RECURSION_DEPTH`].
    pub(crate) fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> ScanResult<T>,
    ) -> ScanResult<T> {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            let failure = self.cursor.fail(
                ThriftParseErrorKind::LexicalFailure,
                Expected::NestingLimit,
            );
            self.nesting_failure.get_or_insert(failure);
            return Err(failure);
        }

        self.recursion_depth += 1;
        let result = rule(self);
        self.recursion_depth -= 1;
        result
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Ordered choice: tries each alternative from the same starting point
    /// and returns the first success.
    ///
    /// Ordering matters wherever alternatives overlap lexically. If every
    /// alternative fails, the choice fails with a grammar failure that
    /// names `expected`.
    pub(crate) fn try_in_order<T>(
        &mut self,
        expected: &'static str,
        alternatives: &[Rule<'src, T>],
    ) -> ScanResult<T> {
        self.cursor.save();
        for alternative in alternatives {
            match alternative(self) {
                Ok(value) => {
                    self.cursor.drop_checkpoint();
                    return Ok(value);
                }
                Err(_) => self.cursor.restore(),
            }
        }
        self.cursor.drop_checkpoint();
        Err(self.cursor.fail(
            ThriftParseErrorKind::GrammarFailure,
            Expected::Description(expected),
        ))
    }

    /// Runs `rule` once. On failure, rewinds to where it started and
    /// returns `None` instead of failing.
    pub(crate) fn optional<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> ScanResult<T>,
    ) -> Option<T> {
        self.cursor.save();
        let result = rule(self);
        if result.is_err() {
            self.cursor.restore();
        }
        self.cursor.drop_checkpoint();
        result.ok()
    }

    /// Greedy repetition: collects successive successes of `rule` until it
    /// fails, rolling back the failed attempt. Never fails.
    pub(crate) fn repeat_until_failure<T>(
        &mut self,
        rule: impl Fn(&mut Self) -> ScanResult<T>,
    ) -> Vec<T> {
        let mut items = Vec::new();
        self.repeat_into(rule, |item| items.push(item));
        items
    }

    /// Like [`repeat_until_failure`](Self::repeat_until_failure), but
    /// collects into a map keyed by `key`. Later items with a duplicate key
    /// replace earlier ones.
    pub(crate) fn repeat_until_failure_keyed<T>(
        &mut self,
        rule: impl Fn(&mut Self) -> ScanResult<T>,
        key: impl Fn(&T) -> String,
    ) -> IndexMap<String, T> {
        let mut items = IndexMap::new();
        self.repeat_into(rule, |item| {
            items.insert(key(&item), item);
        });
        items
    }

    fn repeat_into<T>(
        &mut self,
        rule: impl Fn(&mut Self) -> ScanResult<T>,
        mut sink: impl FnMut(T),
    ) {
        loop {
            let start = self.cursor.offset();
            self.cursor.save();
            match rule(self) {
                Ok(item) => {
                    self.cursor.drop_checkpoint();
                    sink(item);
                    // A rule that matches without consuming would match
                    // forever.
                    if self.cursor.offset() == start {
                        return;
                    }
                }

                Err(_) => {
                    self.cursor.restore();
                    self.cursor.drop_checkpoint();
                    return;
                }
            }
        }
    }
}
