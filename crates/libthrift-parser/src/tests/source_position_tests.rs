//! Tests for the `SourcePosition` struct.
//!
//! These tests verify:
//! - Constructor and accessors round-trip their values
//! - The line number is derived from the larger line-ending counter
//! - Only `\n` and `\r` are counted as line endings

use crate::SourcePosition;

// =============================================================================
// Constructor tests
// =============================================================================

/// Verify that the default position is the very start of a document.
#[test]
fn default_is_document_start() {
    let pos = SourcePosition::default();
    assert_eq!(pos.byte_offset(), 0);
    assert_eq!(pos.newline_count(), 0);
    assert_eq!(pos.carriage_return_count(), 0);
    assert_eq!(pos.line(), 1, "First line should be 1");
}

#[test]
fn constructor_sets_all_fields() {
    let pos = SourcePosition::new(42, 3, 1);
    assert_eq!(pos.byte_offset(), 42);
    assert_eq!(pos.newline_count(), 3);
    assert_eq!(pos.carriage_return_count(), 1);
}

// =============================================================================
// Line number tests
// =============================================================================

/// `\n`-only files: the newline counter drives the line number.
#[test]
fn line_from_newlines_only() {
    assert_eq!(SourcePosition::new(10, 3, 0).line(), 4);
}

/// Classic Mac `\r`-only files: the carriage-return counter drives it.
#[test]
fn line_from_carriage_returns_only() {
    assert_eq!(SourcePosition::new(10, 0, 5).line(), 6);
}

/// `\r\n` files increment both counters equally, so the line is still
/// exact.
#[test]
fn line_from_crlf_pairs() {
    assert_eq!(SourcePosition::new(10, 2, 2).line(), 3);
}

/// Mixed endings are approximated by the larger counter rather than the
/// sum.
#[test]
fn line_for_mixed_endings_uses_larger_counter() {
    // "a\nb\r\nc\rd" has three line breaks but counts (2, 2).
    let pos = SourcePosition::new(8, 2, 2);
    assert_eq!(pos.line(), 3);
}

// =============================================================================
// Mutation tests
// =============================================================================

#[test]
fn record_line_ending_counts_each_kind_separately() {
    let mut pos = SourcePosition::default();
    pos.record_line_ending(b'\n');
    pos.record_line_ending(b'\r');
    pos.record_line_ending(b'\n');
    assert_eq!(pos.newline_count(), 2);
    assert_eq!(pos.carriage_return_count(), 1);
}

#[test]
fn record_line_ending_ignores_other_bytes() {
    let mut pos = SourcePosition::default();
    for byte in [b' ', b'\t', b'x', b'{'] {
        pos.record_line_ending(byte);
    }
    assert_eq!(pos, SourcePosition::default());
}

/// Advancing moves the offset only; line counters are untouched.
#[test]
fn advance_moves_offset_only() {
    let mut pos = SourcePosition::new(5, 1, 0);
    pos.advance(7);
    assert_eq!(pos, SourcePosition::new(12, 1, 0));
}
