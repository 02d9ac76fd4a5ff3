//! Tokens produced by the scanner.

use noon_ast::syntax_kind::SyntaxKind;
use noon_ast::types::TokenFlags;
use noon_core::text::{Position, TextSpan};

/// A scanned token with its lexeme and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    /// The lexeme exactly as written, quotes included.
    pub text: String,
    pub span: TextSpan,
    /// Position of the first character.
    pub start: Position,
    /// Position just past the last character.
    pub end: Position,
    pub flags: TokenFlags,
}

impl Token {
    /// Whether there was a line break before this token.
    pub fn has_preceding_line_break(&self) -> bool {
        self.flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == SyntaxKind::EndOfFileToken
    }
}

/// Everything a successful scan produced.
#[derive(Debug, Clone, Default)]
pub struct ScanOutput {
    /// Tokens in source order, terminated by an `EndOfFileToken`.
    pub tokens: Vec<Token>,
    /// Non-fatal diagnostics met along the way.
    pub warnings: Vec<noon_diagnostics::Diagnostic>,
}
