//! noon_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! A [`Diagnostic`] pairs a catalog entry ([`DiagnosticKind`]) with the place
//! in the source it points at. Rendering for terminals lives in [`emitter`].

pub mod emitter;
pub mod messages;

pub use messages::{DiagnosticKind, Region};

use noon_core::text::{Position, TextSpan};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
        }
    }
}

/// A realized diagnostic with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The file (or virtual file name such as `<string>`), once known.
    pub file: Option<String>,
    /// The characters the diagnostic points at.
    pub span: TextSpan,
    /// 1-based position of `span.start`.
    pub position: Position,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, span: TextSpan, position: Position) -> Self {
        Self {
            file: None,
            span,
            position,
            kind,
        }
    }

    /// Attach the file name the source came from.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn category(&self) -> DiagnosticCategory {
        self.kind.category()
    }

    pub fn is_error(&self) -> bool {
        self.category() == DiagnosticCategory::Error
    }

    /// The rendered message text, without location or category.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}:", file)?;
        }
        write!(
            f,
            "{}:{}: {}: {}",
            self.position.line,
            self.position.col,
            self.category(),
            self.kind
        )
    }
}

impl std::error::Error for Diagnostic {}

/// Diagnostics accumulated while compiling one source.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// The first error, if any.
    pub fn first_error(&self) -> Option<&Diagnostic> {
        self.diagnostics.iter().find(|d| d.is_error())
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn at(kind: DiagnosticKind, line: u32, col: u32) -> Diagnostic {
        Diagnostic::new(kind, TextSpan::new(0, 1), Position::new(line, col))
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = at(DiagnosticKind::Unclosed(Region::Char), 1, 1).with_file("<string>");
        assert_eq!(diag.to_string(), "<string>:1:1: error: unclosed char `'`");
    }

    #[test]
    fn test_diagnostic_without_file() {
        let diag = at(DiagnosticKind::ExpectedExpression, 3, 7);
        assert!(diag.file.is_none());
        assert!(diag.is_error());
        assert_eq!(diag.to_string(), "3:7: error: expected expression");
    }

    #[test]
    fn test_warning_display() {
        let diag = at(DiagnosticKind::MultiCharacterCharConstant, 1, 2).with_file("a.noon");
        assert!(!diag.is_error());
        assert_eq!(
            diag.to_string(),
            "a.noon:1:2: warning: multi-character character constant"
        );
    }

    #[test]
    fn test_diagnostic_collection() {
        let mut collection = DiagnosticCollection::new();
        assert!(collection.is_empty());

        collection.add(at(DiagnosticKind::MultiCharacterCharConstant, 1, 1));
        assert!(collection.first_error().is_none());

        collection.add(at(DiagnosticKind::ExpectedExpression, 1, 4));
        assert_eq!(collection.len(), 2);
        assert_eq!(
            collection.first_error().map(|d| d.position),
            Some(Position::new(1, 4))
        );
    }
}
