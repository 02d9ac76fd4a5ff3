//! Line and block comments.

use crate::char_codes::{ASTERISK, BACKSLASH, LINE_FEED, SLASH};

/// Block comment scanning state. A backslash protects the next character,
/// so `\*/` does not close the comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentState {
    Normal,
    Escaped,
}

/// Scan a block comment whose `/*` starts at `start`.
///
/// Returns the offset just past the closing `*/`, or `None` when the text
/// ends first (in either state).
pub fn scan_block_comment(text: &[char], start: usize) -> Option<usize> {
    let mut state = CommentState::Normal;
    let mut pos = start + 2;
    while let Some(&ch) = text.get(pos) {
        match state {
            CommentState::Escaped => state = CommentState::Normal,
            CommentState::Normal => match ch {
                BACKSLASH => state = CommentState::Escaped,
                ASTERISK if text.get(pos + 1) == Some(&SLASH) => return Some(pos + 2),
                _ => {}
            },
        }
        pos += 1;
    }
    None
}

/// Scan a `#` or `//` comment starting at `start`. The line feed is not
/// consumed.
pub fn scan_line_comment(text: &[char], start: usize) -> usize {
    text[start..]
        .iter()
        .position(|&ch| ch == LINE_FEED)
        .map_or(text.len(), |i| start + i)
}
