//! Scanner integration tests.
//!
//! Verifies tokenization and the lexical diagnostics the scanner reports.

use noon_ast::syntax_kind::SyntaxKind;
use noon_core::text::Position;
use noon_diagnostics::{Diagnostic, DiagnosticKind, Region};
use noon_scanner::{tokenize, Token};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Helper: scan all tokens from source, without the end-of-file token.
fn scan_all(source: &str) -> Vec<Token> {
    let mut tokens = tokenize(source)
        .unwrap_or_else(|e| panic!("{source:?}: {e}"))
        .tokens;
    assert_eq!(tokens.pop().map(|t| t.kind), Some(SyntaxKind::EndOfFileToken));
    tokens
}

/// Helper: scan all token kinds.
fn scan_kinds(source: &str) -> Vec<SyntaxKind> {
    scan_all(source).into_iter().map(|t| t.kind).collect()
}

/// Helper: the error a source fails with.
fn scan_error(source: &str) -> Diagnostic {
    match tokenize(source) {
        Ok(output) => panic!("{source:?} scanned cleanly: {:?}", output.tokens),
        Err(e) => e,
    }
}

fn assert_error(source: &str, kind: DiagnosticKind, line: u32, col: u32) {
    let err = scan_error(source);
    assert_eq!(err.kind, kind, "{source:?}");
    assert_eq!(err.position, Position::new(line, col), "{source:?}");
}

#[test]
fn test_empty_source() {
    assert!(scan_all("").is_empty());
    assert!(scan_all("   \n\t  ").is_empty());
}

#[test]
fn test_numeric_literals() {
    let tokens = scan_all("42 3.14 1. 1_000 2e10 6.02E+23");
    let kinds: Vec<_> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
    assert_eq!(
        kinds,
        vec![
            (SyntaxKind::IntegerLiteral, "42"),
            (SyntaxKind::DecimalLiteral, "3.14"),
            (SyntaxKind::DecimalLiteral, "1."),
            (SyntaxKind::IntegerLiteral, "1_000"),
            (SyntaxKind::DecimalLiteral, "2e10"),
            (SyntaxKind::DecimalLiteral, "6.02E+23"),
        ]
    );
}

#[test]
fn test_quoted_literals() {
    let tokens = scan_all(r#""Hello 'world'" 'Hello "world"' "'" '"'"#);
    let kinds: Vec<_> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
    assert_eq!(
        kinds,
        vec![
            (SyntaxKind::StringLiteral, r#""Hello 'world'""#),
            (SyntaxKind::CharLiteral, r#"'Hello "world"'"#),
            (SyntaxKind::StringLiteral, r#""'""#),
            (SyntaxKind::CharLiteral, r#"'"'"#),
        ]
    );
}

#[test]
fn test_literal_spanning_lines_moves_positions() {
    let tokens = scan_all("\"a\nb\" x");
    assert_eq!(tokens[0].end, Position::new(2, 3));
    assert_eq!(tokens[1].start, Position::new(2, 4));
}

#[test]
fn test_brackets_inside_literals_and_comments_are_ignored() {
    for source in [
        "(/* comment */)",
        "({/* nested */})",
        "({\"String\" #comment})",
        "[1, 2 // trailing ]",
        "({/* 'inner' */})",
        "(\"Outer /* inner */\")",
        "/* Unclosed 'string */",
        "# This is 'a comment'",
        "/* Comment with \"quotes\" */",
    ] {
        tokenize(source).unwrap_or_else(|e| panic!("{source:?}: {e}"));
    }
}

#[test]
fn test_char_literal_warning_is_not_an_error() {
    let output = tokenize("([/* comment */ 'Char'])").unwrap();
    assert_eq!(output.warnings.len(), 1);
    assert_eq!(output.warnings[0].position, Position::new(1, 17));
}

#[test]
fn test_unclosed_regions() {
    assert_error("'", DiagnosticKind::Unclosed(Region::Char), 1, 1);
    assert_error("\"", DiagnosticKind::Unclosed(Region::String), 1, 1);
    assert_error("/*", DiagnosticKind::Unclosed(Region::Comment), 1, 1);
    assert_error("(", DiagnosticKind::Unclosed(Region::Paren), 1, 1);
    assert_error("{", DiagnosticKind::Unclosed(Region::Curly), 1, 1);
    assert_error("[", DiagnosticKind::Unclosed(Region::Square), 1, 1);
    assert_error("1 +\n  'abc", DiagnosticKind::Unclosed(Region::Char), 2, 3);
    assert_error("[\"Unclosed]", DiagnosticKind::Unclosed(Region::Square), 1, 1);
}

#[test]
fn test_unclosed_reports_oldest_opener() {
    assert_error("(\n  [\n    {", DiagnosticKind::Unclosed(Region::Paren), 1, 1);
    assert_error("() [", DiagnosticKind::Unclosed(Region::Square), 1, 4);
}

#[test]
fn test_unmatched_closers() {
    assert_error(")", DiagnosticKind::Unmatched(Region::Paren), 1, 1);
    assert_error("}", DiagnosticKind::Unmatched(Region::Curly), 1, 1);
    assert_error("]", DiagnosticKind::Unmatched(Region::Square), 1, 1);
    assert_error("*/", DiagnosticKind::Unmatched(Region::Comment), 1, 1);
    assert_error("(]", DiagnosticKind::Unmatched(Region::Square), 1, 2);
    assert_error("(1))", DiagnosticKind::Unmatched(Region::Paren), 1, 4);
}

#[test]
fn test_comment_opened_first_swallows_brackets() {
    assert_error("/* (", DiagnosticKind::Unclosed(Region::Comment), 1, 1);
    assert_error("/* [\"", DiagnosticKind::Unclosed(Region::Comment), 1, 1);
    assert_error("x /* {", DiagnosticKind::Unclosed(Region::Comment), 1, 3);
    assert_error("( /*", DiagnosticKind::Unclosed(Region::Paren), 1, 1);
}

#[test]
fn test_line_comments() {
    assert_eq!(scan_kinds("1 // comment"), vec![SyntaxKind::IntegerLiteral]);
    assert_eq!(
        scan_kinds("1 // ) \n/ 2"),
        vec![SyntaxKind::IntegerLiteral, SyntaxKind::SlashToken, SyntaxKind::IntegerLiteral]
    );
    assert!(scan_all("// a\n# b\n").is_empty());
    // A trailing comment inside brackets keeps only closers that balance them.
    assert_eq!(
        scan_kinds("({\"String\" #comment})"),
        vec![
            SyntaxKind::OpenParenToken,
            SyntaxKind::OpenBraceToken,
            SyntaxKind::StringLiteral,
            SyntaxKind::CloseBraceToken,
            SyntaxKind::CloseParenToken,
        ]
    );
    assert_error("({\"String\" #comment)}", DiagnosticKind::Unclosed(Region::Paren), 1, 1);
}

#[test]
fn test_deep_bracket_nesting() {
    let depth = 50_000;
    let source = format!("{}{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(scan_all(&source).len(), depth * 2);
    let source = format!("{}1", "- ".repeat(depth));
    assert_eq!(scan_all(&source).len(), depth + 1);
}

#[test]
fn test_comment_escapes() {
    assert!(scan_all("/*\\*/*/").is_empty());
    assert_eq!(scan_kinds("1#++"), vec![SyntaxKind::IntegerLiteral]);
    assert_error("/* \\*/", DiagnosticKind::Unclosed(Region::Comment), 1, 1);
}

#[test]
fn test_numeric_errors() {
    assert_error("1.1.1", DiagnosticKind::InvalidSyntax(".".into()), 1, 4);
    assert_error("1.0.0", DiagnosticKind::InvalidSyntax(".".into()), 1, 4);
    assert_error(
        "1__1",
        DiagnosticKind::ConsecutiveUnderscore("1__1".into()),
        1,
        1,
    );
    assert_error(
        "123_",
        DiagnosticKind::TrailingUnderscore("123_".into()),
        1,
        1,
    );
    for source in ["1e", "1e+", "1e_10", "1._1", ".1e"] {
        assert_error(source, DiagnosticKind::InvalidDecimalLiteral, 1, 1);
    }
    assert_error("x = 2 + 3__0", DiagnosticKind::ConsecutiveUnderscore("3__0".into()), 1, 9);
}

#[test]
fn test_leading_dot_literal_is_scanned() {
    let tokens = scan_all(".0");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, SyntaxKind::DecimalLiteral);
    assert!(tokens[0]
        .flags
        .contains(noon_ast::types::TokenFlags::LEADING_DOT));
}

#[test]
fn test_first_error_wins() {
    // The unmatched `)` comes before the unterminated string.
    assert_error(") \"", DiagnosticKind::Unmatched(Region::Paren), 1, 1);
}

proptest! {
    #[test]
    fn prop_integers_scan_as_one_literal(n in any::<u64>()) {
        let source = n.to_string();
        let tokens = scan_all(&source);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, SyntaxKind::IntegerLiteral);
        prop_assert_eq!(&tokens[0].text, &source);
    }

    #[test]
    fn prop_string_bodies_never_fail(body in "[^\"]*") {
        let source = format!("\"{body}\"");
        let tokens = scan_all(&source);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, SyntaxKind::StringLiteral);
    }

    #[test]
    fn prop_block_comment_bodies_are_trivia(body in "[^*\\\\]*") {
        let source = format!("/*{body}*/");
        prop_assert!(scan_all(&source).is_empty());
    }

    #[test]
    fn prop_balanced_nesting_scans(depth in 1usize..32) {
        let source = format!("{}{}", "([{".repeat(depth), "}])".repeat(depth));
        prop_assert_eq!(scan_all(&source).len(), depth * 6);
    }
}
