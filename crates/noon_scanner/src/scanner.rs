//! The noon scanner.
//!
//! Converts source text into tokens, dispatching on the first character of
//! each token to the literal scanners and tracking bracket balance as it
//! goes. The first error ends the scan.

use crate::char_codes::*;
use crate::comment::{scan_block_comment, scan_line_comment};
use crate::delimiters::DelimiterStack;
use crate::number::scan_number;
use crate::quoted::{scan_quoted, QuoteKind};
use crate::token::{ScanOutput, Token};
use noon_ast::syntax_kind::SyntaxKind;
use noon_ast::types::TokenFlags;
use noon_core::text::{Position, TextSpan};
use noon_diagnostics::{Diagnostic, DiagnosticKind, Region};
use tracing::{debug, trace};

/// The scanner converts noon source text into tokens.
pub struct Scanner {
    /// The source text being scanned.
    text: Vec<char>,
    /// `positions[i]` is the line/column of `text[i]`, plus one entry for
    /// the end of the text.
    positions: Vec<Position>,
    /// Current position in the text.
    pos: usize,
    /// Start of the current token (after leading trivia).
    token_start: usize,
    token: SyntaxKind,
    token_flags: TokenFlags,
    delimiters: DelimiterStack,
    warnings: Vec<Diagnostic>,
}

impl Scanner {
    pub fn new(text: &str) -> Self {
        let text: Vec<char> = text.chars().collect();
        let mut positions = Vec::with_capacity(text.len() + 1);
        let mut cursor = Position::START;
        for &ch in &text {
            positions.push(cursor);
            cursor = cursor.advance(ch);
        }
        positions.push(cursor);

        Self {
            text,
            positions,
            pos: 0,
            token_start: 0,
            token: SyntaxKind::Unknown,
            token_flags: TokenFlags::NONE,
            delimiters: DelimiterStack::new(),
            warnings: Vec::new(),
        }
    }

    #[inline]
    pub fn token_flags(&self) -> TokenFlags {
        self.token_flags
    }

    pub fn token_text(&self) -> String {
        self.chars_to_string(self.token_start, self.pos)
    }

    /// Line and column of a character offset.
    pub fn position_at(&self, offset: usize) -> Position {
        let last = self.positions.len() - 1;
        self.positions[offset.min(last)]
    }

    /// Take the warnings collected so far.
    pub fn take_warnings(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.warnings)
    }

    /// Snapshot of the current token.
    pub fn token_info(&self) -> Token {
        Token {
            kind: self.token,
            text: self.token_text(),
            span: span(self.token_start, self.pos),
            start: self.position_at(self.token_start),
            end: self.position_at(self.pos),
            flags: self.token_flags,
        }
    }

    /// Scan every token up to and including the `EndOfFileToken`.
    pub fn tokenize(mut self) -> Result<ScanOutput, Diagnostic> {
        debug!(target: "noon::scanner", chars = self.text.len(), "scan started");
        let mut tokens = Vec::new();
        loop {
            let kind = self.scan()?;
            let token = self.token_info();
            trace!(
                target: "noon::scanner",
                kind = ?token.kind,
                text = %token.text,
                at = %token.start,
                "token"
            );
            tokens.push(token);
            if kind == SyntaxKind::EndOfFileToken {
                break;
            }
        }
        debug!(
            target: "noon::scanner",
            tokens = tokens.len(),
            warnings = self.warnings.len(),
            "scan finished"
        );
        Ok(ScanOutput {
            tokens,
            warnings: self.warnings,
        })
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    #[inline]
    fn current_char(&self) -> Option<char> {
        self.text.get(self.pos).copied()
    }

    /// Look at the character at position pos + offset.
    #[inline]
    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(self.pos + offset).copied()
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Skip whitespace and comments, setting token_flags for line breaks.
    fn skip_trivia(&mut self) -> Result<(), Diagnostic> {
        while let Some(ch) = self.current_char() {
            match ch {
                LINE_FEED => {
                    self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                    self.pos += 1;
                }
                HASH => {
                    self.pos = self.line_comment_end(self.pos, 1);
                }
                SLASH if self.char_at(1) == Some(SLASH) => {
                    self.pos = self.line_comment_end(self.pos, 2);
                }
                SLASH if self.char_at(1) == Some(ASTERISK) => {
                    let start = self.pos;
                    match scan_block_comment(&self.text, start) {
                        Some(end) => {
                            if self.text[start..end].contains(&LINE_FEED) {
                                self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                            }
                            self.pos = end;
                        }
                        None => return Err(self.unclosed(Region::Comment, start)),
                    }
                }
                c if is_white_space_single_line(c) => {
                    self.pos += 1;
                }
                _ => return Ok(()),
            }
        }
        Ok(())
    }

    /// End of the line comment whose `marker_len`-character marker starts at
    /// `start`.
    ///
    /// A comment that runs to the end of input while brackets are open stops
    /// before a trailing run of closers that balances all of them, so
    /// `({"x" #note})` still closes its brackets.
    fn line_comment_end(&self, start: usize, marker_len: usize) -> usize {
        let end = scan_line_comment(&self.text, start);
        if end < self.text.len() || self.delimiters.is_empty() {
            return end;
        }
        let body = start + marker_len;
        match self.delimiters.closing_suffix(&self.text[body..end]) {
            Some(offset) => body + offset,
            None => end,
        }
    }

    /// Scan the next token and return its kind.
    pub fn scan(&mut self) -> Result<SyntaxKind, Diagnostic> {
        self.token_flags = TokenFlags::NONE;
        self.skip_trivia()?;
        self.token_start = self.pos;

        let Some(ch) = self.current_char() else {
            if let Some(open) = self.delimiters.oldest() {
                return Err(self.unclosed(open.kind, open.offset));
            }
            self.token = SyntaxKind::EndOfFileToken;
            return Ok(self.token);
        };

        self.token = match ch {
            '(' | '{' | '[' => self.scan_opener(ch),
            ')' | '}' | ']' => self.scan_closer(ch)?,
            ',' => self.take(1, SyntaxKind::CommaToken),
            ';' => self.take(1, SyntaxKind::SemicolonToken),
            '?' => self.take(1, SyntaxKind::QuestionToken),
            '~' => self.take(1, SyntaxKind::TildeToken),

            DOT => self.scan_dot()?,
            ':' => self.scan_colon(),
            '+' => self.scan_plus(),
            '-' => self.scan_minus(),
            ASTERISK => self.scan_asterisk()?,
            SLASH => self.scan_slash(),
            '%' => self.scan_percent(),
            '=' => self.scan_equals(),
            '!' => self.scan_exclamation(),
            '<' => self.scan_less_than(),
            '>' => self.scan_greater_than(),
            '&' => self.scan_ampersand(),
            '|' => self.scan_bar(),
            '^' => self.scan_caret(),

            c => match QuoteKind::from_char(c) {
                Some(quote) => self.scan_quoted_literal(quote)?,
                None if is_digit(c) => self.scan_numeric_literal()?,
                None if is_identifier_start(c) => self.scan_identifier(),
                None => self.take(1, SyntaxKind::Unknown),
            },
        };

        Ok(self.token)
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    #[inline]
    fn take(&mut self, len: usize, kind: SyntaxKind) -> SyntaxKind {
        self.pos += len;
        kind
    }

    fn scan_opener(&mut self, ch: char) -> SyntaxKind {
        let (region, kind) = match ch {
            '(' => (Region::Paren, SyntaxKind::OpenParenToken),
            '{' => (Region::Curly, SyntaxKind::OpenBraceToken),
            _ => (Region::Square, SyntaxKind::OpenBracketToken),
        };
        let position = self.position_at(self.pos);
        self.delimiters.push(region, self.pos, position);
        self.take(1, kind)
    }

    fn scan_closer(&mut self, ch: char) -> Result<SyntaxKind, Diagnostic> {
        let (region, kind) = match ch {
            ')' => (Region::Paren, SyntaxKind::CloseParenToken),
            '}' => (Region::Curly, SyntaxKind::CloseBraceToken),
            _ => (Region::Square, SyntaxKind::CloseBracketToken),
        };
        if !self.delimiters.close(region) {
            return Err(self.error_at(DiagnosticKind::Unmatched(region), self.pos, self.pos + 1));
        }
        Ok(self.take(1, kind))
    }

    fn scan_dot(&mut self) -> Result<SyntaxKind, Diagnostic> {
        if self.char_at(1).is_some_and(is_digit) {
            self.scan_numeric_literal()
        } else if self.char_at(1) == Some(DOT) && self.char_at(2) == Some(DOT) {
            Ok(self.take(3, SyntaxKind::DotDotDotToken))
        } else {
            Ok(self.take(1, SyntaxKind::DotToken))
        }
    }

    fn scan_colon(&mut self) -> SyntaxKind {
        match self.char_at(1) {
            Some(':') => self.take(2, SyntaxKind::ColonColonToken),
            Some('=') => self.take(2, SyntaxKind::ColonEqualsToken),
            _ => self.take(1, SyntaxKind::ColonToken),
        }
    }

    fn scan_plus(&mut self) -> SyntaxKind {
        match self.char_at(1) {
            Some('+') => self.take(2, SyntaxKind::PlusPlusToken),
            Some('=') => self.take(2, SyntaxKind::PlusEqualsToken),
            _ => self.take(1, SyntaxKind::PlusToken),
        }
    }

    fn scan_minus(&mut self) -> SyntaxKind {
        match self.char_at(1) {
            Some('-') => self.take(2, SyntaxKind::MinusMinusToken),
            Some('=') => self.take(2, SyntaxKind::MinusEqualsToken),
            Some('>') => self.take(2, SyntaxKind::MinusGreaterThanToken),
            _ => self.take(1, SyntaxKind::MinusToken),
        }
    }

    fn scan_asterisk(&mut self) -> Result<SyntaxKind, Diagnostic> {
        let kind = match (self.char_at(1), self.char_at(2)) {
            (Some(SLASH), _) => {
                let kind = DiagnosticKind::Unmatched(Region::Comment);
                return Err(self.error_at(kind, self.pos, self.pos + 2));
            }
            (Some(ASTERISK), Some('=')) => self.take(3, SyntaxKind::AsteriskAsteriskEqualsToken),
            (Some(ASTERISK), _) => self.take(2, SyntaxKind::AsteriskAsteriskToken),
            (Some('='), _) => self.take(2, SyntaxKind::AsteriskEqualsToken),
            _ => self.take(1, SyntaxKind::AsteriskToken),
        };
        Ok(kind)
    }

    fn scan_slash(&mut self) -> SyntaxKind {
        // `/*` and `//` are trivia and never reach here.
        if self.char_at(1) == Some('=') {
            self.take(2, SyntaxKind::SlashEqualsToken)
        } else {
            self.take(1, SyntaxKind::SlashToken)
        }
    }

    fn scan_percent(&mut self) -> SyntaxKind {
        match (self.char_at(1), self.char_at(2)) {
            (Some('%'), Some('=')) => self.take(3, SyntaxKind::PercentPercentEqualsToken),
            (Some('%'), _) => self.take(2, SyntaxKind::PercentPercentToken),
            (Some('='), _) => self.take(2, SyntaxKind::PercentEqualsToken),
            _ => self.take(1, SyntaxKind::PercentToken),
        }
    }

    fn scan_equals(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            self.take(2, SyntaxKind::EqualsEqualsToken)
        } else {
            self.take(1, SyntaxKind::EqualsToken)
        }
    }

    fn scan_exclamation(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            self.take(2, SyntaxKind::ExclamationEqualsToken)
        } else {
            self.take(1, SyntaxKind::ExclamationToken)
        }
    }

    fn scan_less_than(&mut self) -> SyntaxKind {
        match (self.char_at(1), self.char_at(2)) {
            (Some('<'), Some('=')) => self.take(3, SyntaxKind::LessThanLessThanEqualsToken),
            (Some('<'), _) => self.take(2, SyntaxKind::LessThanLessThanToken),
            (Some('='), _) => self.take(2, SyntaxKind::LessThanEqualsToken),
            _ => self.take(1, SyntaxKind::LessThanToken),
        }
    }

    fn scan_greater_than(&mut self) -> SyntaxKind {
        match (self.char_at(1), self.char_at(2)) {
            (Some('>'), Some('=')) => self.take(3, SyntaxKind::GreaterThanGreaterThanEqualsToken),
            (Some('>'), _) => self.take(2, SyntaxKind::GreaterThanGreaterThanToken),
            (Some('='), _) => self.take(2, SyntaxKind::GreaterThanEqualsToken),
            _ => self.take(1, SyntaxKind::GreaterThanToken),
        }
    }

    fn scan_ampersand(&mut self) -> SyntaxKind {
        match self.char_at(1) {
            Some('&') => self.take(2, SyntaxKind::AmpersandAmpersandToken),
            Some('=') => self.take(2, SyntaxKind::AmpersandEqualsToken),
            _ => self.take(1, SyntaxKind::AmpersandToken),
        }
    }

    fn scan_bar(&mut self) -> SyntaxKind {
        match self.char_at(1) {
            Some('|') => self.take(2, SyntaxKind::BarBarToken),
            Some('=') => self.take(2, SyntaxKind::BarEqualsToken),
            _ => self.take(1, SyntaxKind::BarToken),
        }
    }

    fn scan_caret(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            self.take(2, SyntaxKind::CaretEqualsToken)
        } else {
            self.take(1, SyntaxKind::CaretToken)
        }
    }

    fn scan_quoted_literal(&mut self, quote: QuoteKind) -> Result<SyntaxKind, Diagnostic> {
        let start = self.pos;
        let Some(end) = scan_quoted(&self.text, start, quote) else {
            return Err(self.unclosed(quote.region(), start));
        };
        self.pos = end;
        if quote == QuoteKind::Single && end - start - 2 > 1 {
            let warning = self.error_at(DiagnosticKind::MultiCharacterCharConstant, start, end);
            self.warnings.push(warning);
        }
        Ok(quote.token_kind())
    }

    fn scan_numeric_literal(&mut self) -> Result<SyntaxKind, Diagnostic> {
        match scan_number(&self.text, self.pos) {
            Ok(number) => {
                self.pos = number.end;
                self.token_flags |= number.flags;
                Ok(number.kind)
            }
            Err(e) => Err(self.error_at(e.kind, e.at, e.end)),
        }
    }

    fn scan_identifier(&mut self) -> SyntaxKind {
        let start = self.pos;
        self.pos += 1;
        while !self.is_eof() && is_identifier_part(self.text[self.pos]) {
            self.pos += 1;
        }
        let text = self.chars_to_string(start, self.pos);
        SyntaxKind::from_keyword(&text).unwrap_or(SyntaxKind::Identifier)
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    fn error_at(&self, kind: DiagnosticKind, start: usize, end: usize) -> Diagnostic {
        Diagnostic::new(kind, span(start, end), self.position_at(start))
    }

    /// `region` opened at `offset` and never closed.
    ///
    /// When a bracket opened before it is still pending, the bracket is the
    /// construct reported: the earliest unresolved opener wins.
    fn unclosed(&self, region: Region, offset: usize) -> Diagnostic {
        let (region, offset, position) = match self.delimiters.oldest() {
            Some(open) if open.offset < offset => (open.kind, open.offset, open.position),
            _ => (region, offset, self.position_at(offset)),
        };
        let len = region.open_text().chars().count();
        Diagnostic::new(
            DiagnosticKind::Unclosed(region),
            span(offset, offset + len),
            position,
        )
    }

    fn chars_to_string(&self, start: usize, end: usize) -> String {
        self.text[start..end].iter().collect()
    }
}

#[inline]
fn span(start: usize, end: usize) -> TextSpan {
    TextSpan::from_bounds(start as u32, end as u32)
}

/// Scan all of `text`.
pub fn tokenize(text: &str) -> Result<ScanOutput, Diagnostic> {
    Scanner::new(text).tokenize()
}
