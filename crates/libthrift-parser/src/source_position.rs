/// A snapshot of the parser's read position in the source text.
///
/// This is a pure data struct: the cursor is responsible for computing new
/// values as it scans. Snapshots are what the checkpoint stack stores, so
/// restoring one rewinds both the offset and the line-ending counters.
///
/// # Line numbers
///
/// Line endings are never split explicitly. Instead, two independent
/// counters record every `\n` and every `\r` consumed while skipping
/// whitespace or comments, and the line number is derived as
/// `max(newline_count, carriage_return_count) + 1`.
///
/// This is exact for files that consistently use `\n` or `\r\n` (or bare
/// `\r`) line endings. Files that mix conventions get an approximation,
/// and line endings that appear inside string literals are not counted at
/// all.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SourcePosition {
    /// Byte offset from the start of the source (0-based).
    byte_offset: usize,

    /// Number of `\n` bytes consumed as whitespace so far.
    newline_count: usize,

    /// Number of `\r` bytes consumed as whitespace so far.
    carriage_return_count: usize,
}

impl SourcePosition {
    pub fn new(
        byte_offset: usize,
        newline_count: usize,
        carriage_return_count: usize,
    ) -> Self {
        Self {
            byte_offset,
            newline_count,
            carriage_return_count,
        }
    }

    /// Returns the 0-based byte offset from the start of the source.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Returns the number of `\n` bytes consumed as whitespace so far.
    pub fn newline_count(&self) -> usize {
        self.newline_count
    }

    /// Returns the number of `\r` bytes consumed as whitespace so far.
    pub fn carriage_return_count(&self) -> usize {
        self.carriage_return_count
    }

    /// Returns the 1-based line number of this position.
    ///
    /// See the type-level docs for why this is an approximation.
    pub fn line(&self) -> usize {
        self.newline_count.max(self.carriage_return_count) + 1
    }

    pub(crate) fn advance(&mut self, byte_len: usize) {
        self.byte_offset += byte_len;
    }

    pub(crate) fn jump_to(&mut self, byte_offset: usize) {
        debug_assert!(byte_offset >= self.byte_offset);
        self.byte_offset = byte_offset;
    }

    /// Counts `byte` if it is a line-ending byte. Other bytes are ignored.
    pub(crate) fn record_line_ending(&mut self, byte: u8) {
        match byte {
            b'\n' => self.newline_count += 1,
            b'\r' => self.carriage_return_count += 1,
            _ => (),
        }
    }
}
