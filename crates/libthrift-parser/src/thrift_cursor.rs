//! A byte cursor over Thrift source text with a checkpoint stack.
//!
//! The cursor owns every piece of mutable scanning state for one parse:
//! the current [`SourcePosition`], the stack of saved positions used for
//! backtracking, and the furthest failure observed so far. Nothing here is
//! shared between parses.
//!
//! All grammar-significant bytes in Thrift are ASCII, so the cursor scans
//! bytes rather than chars. Multi-byte UTF-8 sequences only ever appear
//! inside comments and string literals, which are skipped or sliced as a
//! whole.

use crate::scan_failure::Expected;
use crate::scan_failure::ScanFailure;
use crate::SourcePosition;
use crate::ThriftParseErrorKind;
use smallvec::SmallVec;

pub(crate) struct ThriftCursor<'src> {
    /// The full source text being parsed.
    source: &'src str,

    /// Current read position and line-ending counters.
    position: SourcePosition,

    /// Saved positions for speculative parse attempts.
    ///
    /// Uses SmallVec to avoid heap allocation for typical nesting depths:
    /// a field default value inside a struct inside a declaration choice is
    /// rarely more than a dozen checkpoints deep.
    checkpoints: SmallVec<[SourcePosition; 16]>,

    /// The failure recorded at the greatest byte offset since the last
    /// call to `clear_furthest_failure()`.
    furthest_failure: Option<ScanFailure>,
}

impl<'src> ThriftCursor<'src> {
    /// Creates a cursor at `start_offset`, clamped to the end of `source`.
    pub(crate) fn new(source: &'src str, start_offset: usize) -> Self {
        Self {
            source,
            position: SourcePosition::new(start_offset.min(source.len()), 0, 0),
            checkpoints: SmallVec::new(),
            furthest_failure: None,
        }
    }

    // =========================================================================
    // Position helpers
    // =========================================================================

    pub(crate) fn source(&self) -> &'src str {
        self.source
    }

    pub(crate) fn position(&self) -> SourcePosition {
        self.position
    }

    pub(crate) fn offset(&self) -> usize {
        self.position.byte_offset()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.offset() >= self.source.len()
    }

    /// Returns the bytes that have not been consumed yet.
    pub(crate) fn remaining(&self) -> &'src [u8] {
        &self.source.as_bytes()[self.offset()..]
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.peek_nth(0)
    }

    pub(crate) fn peek_nth(&self, n: usize) -> Option<u8> {
        self.remaining().get(n).copied()
    }

    /// Advances past `byte_len` bytes without counting line endings.
    pub(crate) fn bump(&mut self, byte_len: usize) {
        let byte_len = byte_len.min(self.remaining().len());
        self.position.advance(byte_len);
    }

    /// Returns the source text between `start` and the current offset.
    pub(crate) fn slice_from(&self, start: usize) -> &'src str {
        self.source.get(start..self.offset()).unwrap_or_default()
    }

    // =========================================================================
    // Checkpoint stack
    // =========================================================================

    /// Pushes the current position onto the checkpoint stack.
    pub(crate) fn save(&mut self) {
        self.checkpoints.push(self.position);
    }

    /// Rewinds to the most recent checkpoint without popping it.
    pub(crate) fn restore(&mut self) {
        debug_assert!(
            !self.checkpoints.is_empty(),
            "restore() called with no saved checkpoint",
        );
        if let Some(checkpoint) = self.checkpoints.last() {
            self.position = *checkpoint;
        }
    }

    /// Pops the most recent checkpoint without rewinding.
    pub(crate) fn drop_checkpoint(&mut self) {
        debug_assert!(
            !self.checkpoints.is_empty(),
            "drop_checkpoint() called with no saved checkpoint",
        );
        self.checkpoints.pop();
    }

    pub(crate) fn checkpoint_depth(&self) -> usize {
        self.checkpoints.len()
    }

    // =========================================================================
    // Failure tracking
    // =========================================================================

    /// Builds a failure at the current position and records it if it is the
    /// furthest one seen so far.
    ///
    /// Ties go to the most recent failure, so an ordered choice that fails
    /// without advancing reports its own summary instead of the expectation
    /// of its first alternative.
    pub(crate) fn fail(
        &mut self,
        kind: ThriftParseErrorKind,
        expected: Expected,
    ) -> ScanFailure {
        let failure = ScanFailure::new(kind, expected, self.position);
        let is_furthest = self.furthest_failure.is_none_or(|furthest| {
            furthest.position.byte_offset() <= failure.position.byte_offset()
        });
        if is_furthest {
            self.furthest_failure = Some(failure);
        }
        failure
    }

    pub(crate) fn clear_furthest_failure(&mut self) {
        self.furthest_failure = None;
    }

    pub(crate) fn take_furthest_failure(&mut self) -> Option<ScanFailure> {
        self.furthest_failure.take()
    }

    // =========================================================================
    // Whitespace and comments
    // =========================================================================

    /// Skips whitespace and comments until neither matches.
    ///
    /// `/* ... */`, `# ...`, and `// ...` comments are all treated as
    /// whitespace and may be interleaved with it arbitrarily. Every `\n` and
    /// `\r` consumed here (including inside block comments) is counted.
    pub(crate) fn skip_whitespace(&mut self) {
        loop {
            match (self.peek(), self.peek_nth(1)) {
                (Some(b' ' | b'\t'), _) => self.bump(1),
                (Some(byte @ (b'\n' | b'\r')), _) => {
                    self.position.record_line_ending(byte);
                    self.bump(1);
                }
                (Some(b'/'), Some(b'*')) => self.skip_block_comment(),
                (Some(b'/'), Some(b'/')) => self.skip_line_comment(2),
                (Some(b'#'), _) => self.skip_line_comment(1),
                _ => return,
            }
        }
    }

    /// Skips a `/* ... */` comment. An unterminated comment runs to the end
    /// of the input.
    fn skip_block_comment(&mut self) {
        let body = &self.remaining()[2..];
        let (body_len, closer_len) = match memchr::memmem::find(body, b"*/") {
            Some(index) => (index, 2),
            None => (body.len(), 0),
        };
        for index in memchr::memchr2_iter(b'\n', b'\r', &body[..body_len]) {
            self.position.record_line_ending(body[index]);
        }
        let end = self.offset() + 2 + body_len + closer_len;
        self.position.jump_to(end);
    }

    /// Skips a line comment whose opener is `opener_len` bytes long. The
    /// terminating line ending is left for the whitespace loop to count.
    fn skip_line_comment(&mut self, opener_len: usize) {
        let body = &self.remaining()[opener_len..];
        let body_len = memchr::memchr2(b'\n', b'\r', body).unwrap_or(body.len());
        let end = self.offset() + opener_len + body_len;
        self.position.jump_to(end);
    }
}
