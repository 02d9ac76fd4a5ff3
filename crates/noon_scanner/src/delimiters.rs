//! Bracket balancing.

use crate::char_codes::is_white_space_single_line;
use noon_core::text::Position;
use noon_diagnostics::Region;

/// An opener still waiting for its closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenDelimiter {
    pub kind: Region,
    pub offset: usize,
    pub position: Position,
}

/// Stack of unresolved `(`, `{` and `[`.
#[derive(Debug, Clone, Default)]
pub struct DelimiterStack {
    entries: Vec<OpenDelimiter>,
}

impl DelimiterStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: Region, offset: usize, position: Position) {
        self.entries.push(OpenDelimiter {
            kind,
            offset,
            position,
        });
    }

    /// Pop the top entry if it is an opener of `kind`.
    ///
    /// Returns `false`, leaving the stack untouched, for a closer that meets
    /// an empty stack or an opener of a different kind.
    pub fn close(&mut self, kind: Region) -> bool {
        match self.entries.last() {
            Some(top) if top.kind == kind => {
                self.entries.pop();
                true
            }
            _ => false,
        }
    }

    /// The unresolved opener that appears first in the source.
    pub fn oldest(&self) -> Option<&OpenDelimiter> {
        self.entries.first()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Where the trailing run of closers in `text` begins, when that run
    /// closes every pending opener, innermost first. Blanks may sit between
    /// the closers.
    pub fn closing_suffix(&self, text: &[char]) -> Option<usize> {
        let mut pending = self.entries.iter().peekable();
        let mut start = text.len();
        for (i, &ch) in text.iter().enumerate().rev() {
            let Some(open) = pending.peek() else {
                break;
            };
            if is_white_space_single_line(ch) {
                continue;
            }
            if closer_region(ch)? != open.kind {
                return None;
            }
            pending.next();
            start = i;
        }
        pending.peek().is_none().then_some(start)
    }
}

fn closer_region(ch: char) -> Option<Region> {
    match ch {
        ')' => Some(Region::Paren),
        '}' => Some(Region::Curly),
        ']' => Some(Region::Square),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced() {
        let mut stack = DelimiterStack::new();
        stack.push(Region::Paren, 0, Position::new(1, 1));
        stack.push(Region::Curly, 1, Position::new(1, 2));
        assert!(!stack.is_empty());
        assert!(stack.close(Region::Curly));
        assert!(stack.close(Region::Paren));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_mismatch_leaves_stack() {
        let mut stack = DelimiterStack::new();
        assert!(!stack.close(Region::Square));
        stack.push(Region::Paren, 0, Position::START);
        assert!(!stack.close(Region::Square));
        assert_eq!(stack.oldest().map(|d| d.kind), Some(Region::Paren));
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_closing_suffix() {
        let mut stack = DelimiterStack::new();
        stack.push(Region::Paren, 0, Position::new(1, 1));
        stack.push(Region::Curly, 1, Position::new(1, 2));
        assert_eq!(stack.closing_suffix(&chars("comment})")), Some(7));
        assert_eq!(stack.closing_suffix(&chars("note } ) ")), Some(5));
        assert_eq!(stack.closing_suffix(&chars("note)}")), None);
        assert_eq!(stack.closing_suffix(&chars("note)")), None);
        assert_eq!(DelimiterStack::new().closing_suffix(&chars("x")), Some(1));
    }

    #[test]
    fn test_oldest() {
        let mut stack = DelimiterStack::new();
        stack.push(Region::Square, 0, Position::new(1, 1));
        stack.push(Region::Paren, 4, Position::new(1, 5));
        let oldest = stack.oldest().copied();
        assert_eq!(oldest.map(|d| d.kind), Some(Region::Square));
        assert_eq!(oldest.map(|d| d.position), Some(Position::new(1, 1)));
    }
}
