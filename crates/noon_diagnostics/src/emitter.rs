//! Terminal rendering of diagnostics.
//!
//! ```text
//! <string>:1:3: error: operator `+` not supported between integer and char
//!  1 | 1+'6'
//!    |   ^~~
//! ```

use crate::{Diagnostic, DiagnosticCategory};
use noon_core::text::LineMap;
use std::fmt::Write;

// ANSI color codes
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Renders diagnostics against the source text they were produced from.
pub struct Emitter<'a> {
    source: &'a str,
    line_map: LineMap,
    color: bool,
}

impl<'a> Emitter<'a> {
    pub fn new(source: &'a str, color: bool) -> Self {
        Self {
            source,
            line_map: LineMap::new(source),
            color,
        }
    }

    /// The headline, the offending source line and a caret underline.
    pub fn render(&self, diag: &Diagnostic) -> String {
        let mut out = String::new();
        self.render_headline(&mut out, diag);
        self.render_snippet(&mut out, diag);
        out
    }

    fn render_headline(&self, out: &mut String, diag: &Diagnostic) {
        if !self.color {
            let _ = writeln!(out, "{}", diag);
            return;
        }
        let color = category_color(diag.category());
        if let Some(ref file) = diag.file {
            let _ = write!(out, "{}{}{}:", CYAN, file, RESET);
        }
        let _ = writeln!(
            out,
            "{}{}:{}:{} {}{}{}{}: {}{}{}",
            BOLD,
            diag.position.line,
            diag.position.col,
            RESET,
            BOLD,
            color,
            diag.category(),
            RESET,
            BOLD,
            diag.kind,
            RESET
        );
    }

    fn render_snippet(&self, out: &mut String, diag: &Diagnostic) {
        let line = diag.position.line;
        let Some(text) = self.line_map.line_text(self.source, line) else {
            return;
        };
        let gutter = line.to_string();
        let width = gutter.len();

        // Tabs before the caret are kept so the underline lines up.
        let col = diag.position.col.saturating_sub(1) as usize;
        let padding: String = text
            .chars()
            .take(col)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let remaining = text.chars().count().saturating_sub(col);
        let underline = (diag.span.length as usize).min(remaining).max(1);
        let caret = format!("^{}", "~".repeat(underline - 1));

        let (gray, color, reset) = if self.color {
            (GRAY, category_color(diag.category()), RESET)
        } else {
            ("", "", "")
        };
        let _ = writeln!(out, "{gray} {gutter:>width$} |{reset} {text}");
        let _ = writeln!(
            out,
            "{gray} {blank:>width$} |{reset} {padding}{color}{caret}{reset}",
            blank = ""
        );
    }
}

fn category_color(category: DiagnosticCategory) -> &'static str {
    match category {
        DiagnosticCategory::Error => RED,
        DiagnosticCategory::Warning => YELLOW,
    }
}
