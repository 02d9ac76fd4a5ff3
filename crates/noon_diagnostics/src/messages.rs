//! The diagnostic catalog.
//!
//! Every message the front end can produce is a variant of [`DiagnosticKind`];
//! its `Display` impl is the only place message text is spelled out.

use crate::DiagnosticCategory;
use std::fmt;
use thiserror::Error;

/// A delimited region of source text that can be left open or closed
/// without an opener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    String,
    Char,
    Comment,
    Paren,
    Curly,
    Square,
}

impl Region {
    /// The name used in `unclosed <name>` / `unmatched <name>` messages.
    pub fn name(self) -> &'static str {
        match self {
            Region::String => "string",
            Region::Char => "char",
            Region::Comment => "comment",
            Region::Paren => "bracket",
            Region::Curly => "curly",
            Region::Square => "square",
        }
    }

    pub fn open_text(self) -> &'static str {
        match self {
            Region::String => "\"",
            Region::Char => "'",
            Region::Comment => "/*",
            Region::Paren => "(",
            Region::Curly => "{",
            Region::Square => "[",
        }
    }

    pub fn close_text(self) -> &'static str {
        match self {
            Region::String => "\"",
            Region::Char => "'",
            Region::Comment => "*/",
            Region::Paren => ")",
            Region::Curly => "}",
            Region::Square => "]",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What went wrong. One variant per catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    #[error("unclosed {} `{}`", .0.name(), .0.open_text())]
    Unclosed(Region),

    #[error("unmatched {} `{}`", .0.name(), .0.close_text())]
    Unmatched(Region),

    #[error("invalid syntax `{0}`")]
    InvalidSyntax(String),

    #[error("consecutive underscore in numeric literal `{0}`")]
    ConsecutiveUnderscore(String),

    #[error("trailing underscore in numeric literal `{0}`")]
    TrailingUnderscore(String),

    #[error("invalid decimal literal")]
    InvalidDecimalLiteral,

    #[error("expected expression")]
    ExpectedExpression,

    #[error("expected value after operator `{0}`")]
    ExpectedValueAfterOperator(String),

    #[error("expected value before operator `{0}`")]
    ExpectedValueBeforeOperator(String),

    #[error("operator `{op}` not supported between {left} and {right}")]
    OperatorNotSupported {
        op: String,
        left: String,
        right: String,
    },

    #[error("expression nested too deeply")]
    NestingTooDeep,

    #[error("multi-character character constant")]
    MultiCharacterCharConstant,
}

impl DiagnosticKind {
    pub fn category(&self) -> DiagnosticCategory {
        match self {
            DiagnosticKind::MultiCharacterCharConstant => DiagnosticCategory::Warning,
            _ => DiagnosticCategory::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_region_messages() {
        let cases = [
            (Region::String, "unclosed string `\"`", "unmatched string `\"`"),
            (Region::Char, "unclosed char `'`", "unmatched char `'`"),
            (Region::Comment, "unclosed comment `/*`", "unmatched comment `*/`"),
            (Region::Paren, "unclosed bracket `(`", "unmatched bracket `)`"),
            (Region::Curly, "unclosed curly `{`", "unmatched curly `}`"),
            (Region::Square, "unclosed square `[`", "unmatched square `]`"),
        ];
        for (region, unclosed, unmatched) in cases {
            assert_eq!(DiagnosticKind::Unclosed(region).to_string(), unclosed);
            assert_eq!(DiagnosticKind::Unmatched(region).to_string(), unmatched);
        }
    }

    #[test]
    fn test_operator_not_supported() {
        let kind = DiagnosticKind::OperatorNotSupported {
            op: "+".into(),
            left: "integer".into(),
            right: "char".into(),
        };
        assert_eq!(
            kind.to_string(),
            "operator `+` not supported between integer and char"
        );
        assert_eq!(kind.category(), DiagnosticCategory::Error);
    }

    #[test]
    fn test_numeric_messages() {
        assert_eq!(
            DiagnosticKind::ConsecutiveUnderscore("1__1".into()).to_string(),
            "consecutive underscore in numeric literal `1__1`"
        );
        assert_eq!(
            DiagnosticKind::TrailingUnderscore("123_".into()).to_string(),
            "trailing underscore in numeric literal `123_`"
        );
        assert_eq!(
            DiagnosticKind::InvalidDecimalLiteral.to_string(),
            "invalid decimal literal"
        );
    }

    #[test]
    fn test_warning_category() {
        assert_eq!(
            DiagnosticKind::MultiCharacterCharConstant.category(),
            DiagnosticCategory::Warning
        );
    }
}
