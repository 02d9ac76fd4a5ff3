//! Source locations: character spans, line/column positions and line maps.
//!
//! Span offsets are counted in Unicode scalar values, the unit the scanner
//! walks the source in. Positions are 1-based and are what diagnostics print.
//! `LineMap` is the exception: it slices the source `&str` and so works in
//! bytes.

use std::fmt;

/// A character offset from the start of the source.
pub type TextPos = u32;

/// A span in source text, defined by a start offset and a length.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TextSpan {
    /// The character offset where this span starts.
    pub start: TextPos,
    /// The length of this span in characters.
    pub length: TextPos,
}

impl TextSpan {
    #[inline]
    pub fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    /// Create a span from start and end offsets.
    #[inline]
    pub fn from_bounds(start: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            length: end - start,
        }
    }

    /// The end offset of this span (exclusive).
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }

    /// Return a new span covering both this span and the other.
    pub fn union(&self, other: &TextSpan) -> TextSpan {
        let start = self.start.min(other.start);
        let end = self.end().max(other.end());
        TextSpan::from_bounds(start, end)
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

/// A 1-based line and column in source text.
///
/// Every character (tabs included) moves the column by one; a line feed
/// moves to column 1 of the next line.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub col: u32,
}

impl Position {
    /// Line 1, column 1.
    pub const START: Position = Position { line: 1, col: 1 };

    #[inline]
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }

    /// The position just after `ch`.
    #[inline]
    pub fn advance(self, ch: char) -> Position {
        if ch == '\n' {
            Position {
                line: self.line + 1,
                col: 1,
            }
        } else {
            Position {
                line: self.line,
                col: self.col + 1,
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Line start table for a source text, in byte offsets.
///
/// Used by the diagnostic emitter to pull out the source line a diagnostic
/// points into. Unlike `TextSpan`, everything here is measured in bytes of
/// the `&str` it was built from.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Byte offset of the start of each line.
    line_starts: Vec<usize>,
    /// Byte length of the text.
    len: usize,
}

impl LineMap {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0usize];
        line_starts.extend(memchr::memchr_iter(b'\n', text.as_bytes()).map(|i| i + 1));
        Self {
            line_starts,
            len: text.len(),
        }
    }

    /// The text of a 1-based line, without its trailing line break.
    pub fn line_text<'a>(&self, text: &'a str, line: u32) -> Option<&'a str> {
        let index = (line as usize).checked_sub(1)?;
        let start = *self.line_starts.get(index)?;
        let end = self
            .line_starts
            .get(index + 1)
            .map(|next| next - 1)
            .unwrap_or(self.len);
        let slice = text.get(start..end.min(text.len()))?;
        Some(slice.strip_suffix('\r').unwrap_or(slice))
    }
}
