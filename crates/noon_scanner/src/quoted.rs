//! String and char literals.
//!
//! A literal runs from its opening quote to the next quote of the same kind.
//! There is no escape mechanism, the other quote character is plain content
//! and literals may span lines.

use crate::char_codes::{DOUBLE_QUOTE, SINGLE_QUOTE};
use noon_ast::syntax_kind::SyntaxKind;
use noon_diagnostics::Region;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteKind {
    /// `"..."`
    Double,
    /// `'...'`
    Single,
}

impl QuoteKind {
    pub fn from_char(ch: char) -> Option<QuoteKind> {
        match ch {
            DOUBLE_QUOTE => Some(QuoteKind::Double),
            SINGLE_QUOTE => Some(QuoteKind::Single),
            _ => None,
        }
    }

    pub fn quote_char(self) -> char {
        match self {
            QuoteKind::Double => DOUBLE_QUOTE,
            QuoteKind::Single => SINGLE_QUOTE,
        }
    }

    pub fn token_kind(self) -> SyntaxKind {
        match self {
            QuoteKind::Double => SyntaxKind::StringLiteral,
            QuoteKind::Single => SyntaxKind::CharLiteral,
        }
    }

    /// The region reported when the literal is never closed.
    pub fn region(self) -> Region {
        match self {
            QuoteKind::Double => Region::String,
            QuoteKind::Single => Region::Char,
        }
    }
}

/// Find the end of the quoted literal whose opening quote is at `start`.
///
/// Returns the offset just past the closing quote, or `None` when the text
/// ends first.
pub fn scan_quoted(text: &[char], start: usize, quote: QuoteKind) -> Option<usize> {
    let close = quote.quote_char();
    text.get(start + 1..)?
        .iter()
        .position(|&ch| ch == close)
        .map(|i| start + 1 + i + 1)
}
