//! Operator precedence for binary operators.

use noon_ast::syntax_kind::SyntaxKind;

/// Operator precedence levels, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum OperatorPrecedence {
    Lowest = 0,
    LogicalOr = 1,
    LogicalAnd = 2,
    BitwiseOr = 3,
    BitwiseXor = 4,
    BitwiseAnd = 5,
    Equality = 6,
    Relational = 7,
    Shift = 8,
    Additive = 9,
    Multiplicative = 10,
    Exponentiation = 11,
    Invalid = 255,
}

/// Get the binary operator precedence for a given token kind.
pub fn get_binary_operator_precedence(kind: SyntaxKind) -> OperatorPrecedence {
    match kind {
        SyntaxKind::BarBarToken => OperatorPrecedence::LogicalOr,
        SyntaxKind::AmpersandAmpersandToken => OperatorPrecedence::LogicalAnd,
        SyntaxKind::BarToken => OperatorPrecedence::BitwiseOr,
        SyntaxKind::CaretToken => OperatorPrecedence::BitwiseXor,
        SyntaxKind::AmpersandToken => OperatorPrecedence::BitwiseAnd,
        SyntaxKind::EqualsEqualsToken | SyntaxKind::ExclamationEqualsToken => {
            OperatorPrecedence::Equality
        }
        SyntaxKind::LessThanToken
        | SyntaxKind::GreaterThanToken
        | SyntaxKind::LessThanEqualsToken
        | SyntaxKind::GreaterThanEqualsToken => OperatorPrecedence::Relational,
        SyntaxKind::LessThanLessThanToken | SyntaxKind::GreaterThanGreaterThanToken => {
            OperatorPrecedence::Shift
        }
        SyntaxKind::PlusToken | SyntaxKind::MinusToken => OperatorPrecedence::Additive,
        SyntaxKind::AsteriskToken
        | SyntaxKind::SlashToken
        | SyntaxKind::PercentToken
        | SyntaxKind::PercentPercentToken => OperatorPrecedence::Multiplicative,
        SyntaxKind::AsteriskAsteriskToken => OperatorPrecedence::Exponentiation,
        _ => OperatorPrecedence::Invalid,
    }
}

/// `**` groups to the right, every other binary operator to the left.
pub fn is_right_associative(kind: SyntaxKind) -> bool {
    kind == SyntaxKind::AsteriskAsteriskToken
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        let p = get_binary_operator_precedence;
        assert!(p(SyntaxKind::BarBarToken) < p(SyntaxKind::AmpersandAmpersandToken));
        assert!(p(SyntaxKind::BarToken) < p(SyntaxKind::CaretToken));
        assert!(p(SyntaxKind::CaretToken) < p(SyntaxKind::AmpersandToken));
        assert!(p(SyntaxKind::EqualsEqualsToken) < p(SyntaxKind::LessThanToken));
        assert!(p(SyntaxKind::LessThanLessThanToken) < p(SyntaxKind::PlusToken));
        assert!(p(SyntaxKind::MinusToken) < p(SyntaxKind::PercentPercentToken));
        assert!(p(SyntaxKind::SlashToken) < p(SyntaxKind::AsteriskAsteriskToken));
    }

    #[test]
    fn test_non_binary() {
        assert_eq!(
            get_binary_operator_precedence(SyntaxKind::EqualsToken),
            OperatorPrecedence::Invalid
        );
        assert_eq!(
            get_binary_operator_precedence(SyntaxKind::TildeToken),
            OperatorPrecedence::Invalid
        );
        assert!(is_right_associative(SyntaxKind::AsteriskAsteriskToken));
        assert!(!is_right_associative(SyntaxKind::MinusToken));
    }
}
