//! Numeric literals.
//!
//! ```text
//! digits   = digit+ ('_' digit+)*
//! number   = digits ('.' digits?)? (('e' | 'E') ('+' | '-')? digits)?
//!          | '.' digits (('e' | 'E') ('+' | '-')? digits)?
//! ```
//!
//! The scan is a single left-to-right pass over [`NumericScanState`]; the first
//! rule broken ends it with a [`NumberError`].

use crate::char_codes::{is_digit, is_identifier_part, DOT, UNDERSCORE};
use noon_ast::syntax_kind::SyntaxKind;
use noon_ast::types::TokenFlags;
use noon_diagnostics::DiagnosticKind;

/// Per-literal scan state, reset for every literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericScanState {
    /// The current digit group (integer, fraction or exponent) has a digit.
    pub saw_digit: bool,
    pub saw_dot: bool,
    pub saw_exponent: bool,
    /// The previous character was `_`.
    pub underscore_last: bool,
}

/// A well-formed numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedNumber {
    /// Offset just past the literal.
    pub end: usize,
    pub kind: SyntaxKind,
    pub flags: TokenFlags,
}

/// A numeric grammar violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberError {
    pub kind: DiagnosticKind,
    /// Where the diagnostic points.
    pub at: usize,
    /// End of the malformed text.
    pub end: usize,
}

/// Scan the numeric literal starting at `start`, which holds either a digit
/// or a `.` followed by a digit.
pub fn scan_number(text: &[char], start: usize) -> Result<ScannedNumber, NumberError> {
    let mut state = NumericScanState::default();
    let mut flags = TokenFlags::NONE;
    let mut pos = start;

    if text.get(pos) == Some(&DOT) {
        state.saw_dot = true;
        flags |= TokenFlags::LEADING_DOT;
        pos += 1;
    }

    while let Some(&ch) = text.get(pos) {
        match ch {
            c if is_digit(c) => {
                state.saw_digit = true;
                state.underscore_last = false;
            }
            UNDERSCORE => {
                if state.underscore_last {
                    let end = malformed_end(text, pos);
                    let lexeme = text[start..end].iter().collect();
                    return Err(error(DiagnosticKind::ConsecutiveUnderscore(lexeme), start, end));
                }
                if !state.saw_digit {
                    // `1._1`, `1e_1`, `1e+_1`
                    return Err(invalid_decimal(text, start, pos));
                }
                state.underscore_last = true;
                flags |= TokenFlags::CONTAINS_SEPARATOR;
            }
            DOT => {
                if state.saw_dot || state.saw_exponent {
                    return Err(error(
                        DiagnosticKind::InvalidSyntax(DOT.to_string()),
                        pos,
                        pos + 1,
                    ));
                }
                if state.underscore_last {
                    return Err(invalid_decimal(text, start, pos));
                }
                state.saw_dot = true;
                state.saw_digit = false;
            }
            'e' | 'E' if !state.saw_exponent => {
                if state.underscore_last {
                    return Err(invalid_decimal(text, start, pos));
                }
                state.saw_exponent = true;
                state.saw_digit = false;
                flags |= TokenFlags::SCIENTIFIC;
                if matches!(text.get(pos + 1), Some('+') | Some('-')) {
                    pos += 1;
                }
            }
            _ => break,
        }
        pos += 1;
    }

    if state.underscore_last {
        let end = malformed_end(text, pos);
        let lexeme = text[start..end].iter().collect();
        return Err(error(DiagnosticKind::TrailingUnderscore(lexeme), start, end));
    }
    if state.saw_exponent && !state.saw_digit {
        return Err(invalid_decimal(text, start, pos));
    }
    // A letter glued to the literal, e.g. `12abc` or `1e5e`.
    if text.get(pos).is_some_and(|&c| is_identifier_part(c)) {
        return Err(invalid_decimal(text, start, pos));
    }

    let kind = if state.saw_dot || state.saw_exponent {
        SyntaxKind::DecimalLiteral
    } else {
        SyntaxKind::IntegerLiteral
    };
    Ok(ScannedNumber {
        end: pos,
        kind,
        flags,
    })
}

/// The malformed literal continues over letters, digits, `_` and `.`.
fn malformed_end(text: &[char], from: usize) -> usize {
    let mut end = from;
    while text
        .get(end)
        .is_some_and(|&c| c.is_alphanumeric() || c == UNDERSCORE || c == DOT)
    {
        end += 1;
    }
    end
}

fn invalid_decimal(text: &[char], start: usize, pos: usize) -> NumberError {
    error(
        DiagnosticKind::InvalidDecimalLiteral,
        start,
        malformed_end(text, pos),
    )
}

fn error(kind: DiagnosticKind, at: usize, end: usize) -> NumberError {
    NumberError { kind, at, end }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(s: &str) -> Result<ScannedNumber, NumberError> {
        let text: Vec<char> = s.chars().collect();
        scan_number(&text, 0)
    }

    fn err_kind(s: &str) -> DiagnosticKind {
        match scan(s) {
            Err(e) => e.kind,
            Ok(n) => panic!("{s:?} scanned as {n:?}"),
        }
    }

    #[test]
    fn test_integers_and_decimals() {
        let n = scan("35534444").unwrap();
        assert_eq!((n.kind, n.end), (SyntaxKind::IntegerLiteral, 8));
        let n = scan("1.5").unwrap();
        assert_eq!((n.kind, n.end), (SyntaxKind::DecimalLiteral, 3));
        let n = scan("1.").unwrap();
        assert_eq!((n.kind, n.end), (SyntaxKind::DecimalLiteral, 2));
        let n = scan("1_000e-3").unwrap();
        assert_eq!(n.kind, SyntaxKind::DecimalLiteral);
        assert!(n.flags.contains(TokenFlags::SCIENTIFIC | TokenFlags::CONTAINS_SEPARATOR));
        let n = scan("12+3").unwrap();
        assert_eq!(n.end, 2);
    }

    #[test]
    fn test_leading_dot() {
        let n = scan(".25").unwrap();
        assert_eq!(n.kind, SyntaxKind::DecimalLiteral);
        assert!(n.flags.contains(TokenFlags::LEADING_DOT));
        assert_eq!(err_kind(".1e"), DiagnosticKind::InvalidDecimalLiteral);
    }

    #[test]
    fn test_second_dot() {
        let e = scan("1.1.1").unwrap_err();
        assert_eq!(e.kind, DiagnosticKind::InvalidSyntax(".".into()));
        assert_eq!(e.at, 3);
        let e = scan("1e5.0").unwrap_err();
        assert_eq!(e.at, 3);
    }

    #[test]
    fn test_underscores() {
        assert_eq!(
            err_kind("1__1"),
            DiagnosticKind::ConsecutiveUnderscore("1__1".into())
        );
        assert_eq!(
            err_kind("123_"),
            DiagnosticKind::TrailingUnderscore("123_".into())
        );
        assert_eq!(
            err_kind("1__2.5x + 1"),
            DiagnosticKind::ConsecutiveUnderscore("1__2.5x".into())
        );
        assert_eq!(err_kind("1_.5"), DiagnosticKind::InvalidDecimalLiteral);
        assert_eq!(err_kind("1_e5"), DiagnosticKind::InvalidDecimalLiteral);
    }

    #[test]
    fn test_invalid_decimal_literals() {
        for src in ["1e", "1e+", "1e_10", "1._1", "12abc", "1e5e"] {
            let e = scan(src).unwrap_err();
            assert_eq!(e.kind, DiagnosticKind::InvalidDecimalLiteral, "{src}");
            assert_eq!(e.at, 0, "{src}");
        }
    }
}
