//! Operand compatibility checks over the parsed AST.
//!
//! Types flow bottom-up: each expression is checked operands first, left to
//! right, and the first incompatible operator aborts the check.

use noon_ast::node::*;
use noon_ast::syntax_kind::SyntaxKind;
use noon_diagnostics::{Diagnostic, DiagnosticKind};
use tracing::debug;

use crate::types::PrimitiveType;

pub type CheckResult<T> = Result<T, Diagnostic>;

/// The checker. Holds no per-file state beyond a node counter, so one value
/// can check any number of files.
#[derive(Debug, Default)]
pub struct Checker {
    nodes_checked: usize,
}

impl Checker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check_source_file(&mut self, source_file: &SourceFile<'_>) -> CheckResult<()> {
        debug!(
            target: "noon::checker",
            file = %source_file.file_name,
            statements = source_file.statements.len(),
            "check started"
        );
        for statement in source_file.statements {
            self.check_expression(statement)?;
        }
        debug!(target: "noon::checker", nodes = self.nodes_checked, "check finished");
        Ok(())
    }

    /// Check an expression and return its type.
    ///
    /// Left-nested chains (`a + b + c`, `- - x`, `f()()`) are built by loops
    /// in the parser and can be arbitrarily long, so their spine is walked
    /// with an explicit stack. Every other child sits behind a parser
    /// recursion level and is bounded by the parser's nesting limit.
    pub fn check_expression(&mut self, expr: &Expression<'_>) -> CheckResult<PrimitiveType> {
        let mut spine = Vec::new();
        let mut base = expr;
        while let Some(first) = first_operand(base) {
            spine.push(base);
            base = first;
        }

        let mut ty = self.check_leaf(base)?;
        for node in spine.into_iter().rev() {
            ty = self.check_spine_node(node, ty)?;
        }
        Ok(ty)
    }

    /// Check an expression with no leading operand.
    fn check_leaf(&mut self, expr: &Expression<'_>) -> CheckResult<PrimitiveType> {
        self.nodes_checked += 1;
        match expr {
            Expression::Literal(lit) => Ok(literal_type(lit.kind)),
            Expression::Group(n) => self.check_group_expression(n),
            Expression::Pair(n) => {
                self.check_expression(n.key)?;
                self.check_expression(n.value)?;
                Ok(PrimitiveType::Unknown)
            }
            _ => Ok(PrimitiveType::Unknown),
        }
    }

    /// Finish checking `node` once its leading operand has type `first`.
    fn check_spine_node(
        &mut self,
        node: &Expression<'_>,
        first: PrimitiveType,
    ) -> CheckResult<PrimitiveType> {
        self.nodes_checked += 1;
        match node {
            Expression::PrefixUnary(n) => Ok(match n.operator.kind {
                SyntaxKind::ExclamationToken => PrimitiveType::Boolean,
                _ => first,
            }),
            Expression::Binary(n) => self.check_binary_expression(n, first),
            Expression::Call(n) => {
                self.check_expressions(n.arguments)?;
                Ok(PrimitiveType::Unknown)
            }
            Expression::Index(n) => {
                self.check_expressions(n.indices)?;
                Ok(PrimitiveType::Unknown)
            }
            _ => Ok(first),
        }
    }

    fn check_expressions(&mut self, list: &[Expression<'_>]) -> CheckResult<()> {
        for expr in list {
            self.check_expression(expr)?;
        }
        Ok(())
    }

    fn check_group_expression(&mut self, node: &GroupExpression<'_>) -> CheckResult<PrimitiveType> {
        if let Some(inner) = node.parenthesized() {
            return self.check_expression(inner);
        }
        self.check_expressions(node.elements)?;
        Ok(PrimitiveType::Unknown)
    }

    fn check_binary_expression(
        &mut self,
        node: &BinaryExpression<'_>,
        left: PrimitiveType,
    ) -> CheckResult<PrimitiveType> {
        let right = self.check_expression(node.right)?;

        let kind = node.operator.kind;
        let operator = match kind {
            SyntaxKind::EqualsToken | SyntaxKind::ColonEqualsToken => return Ok(right),
            _ => kind.compound_base().unwrap_or(kind),
        };

        if left.is_unknown() || right.is_unknown() {
            return Ok(PrimitiveType::Unknown);
        }

        match binary_result_type(operator, left, right) {
            Some(result) => Ok(result),
            None => Err(Diagnostic::new(
                DiagnosticKind::OperatorNotSupported {
                    op: node.operator.text().to_string(),
                    left: left.name().to_string(),
                    right: right.name().to_string(),
                },
                node.right.span(),
                node.right.start(),
            )),
        }
    }
}

/// The operand checked first, for nodes that chain through it.
fn first_operand<'e, 'a>(expr: &'e Expression<'a>) -> Option<&'e Expression<'a>> {
    match expr {
        Expression::PrefixUnary(n) => Some(n.operand),
        Expression::PostfixUnary(n) => Some(n.operand),
        Expression::Binary(n) => Some(n.left),
        Expression::Call(n) => Some(n.callee),
        Expression::Index(n) => Some(n.object),
        _ => None,
    }
}

fn literal_type(kind: LiteralKind) -> PrimitiveType {
    match kind {
        LiteralKind::Integer => PrimitiveType::Integer,
        LiteralKind::Decimal => PrimitiveType::Decimal,
        LiteralKind::String => PrimitiveType::String,
        LiteralKind::Char => PrimitiveType::Char,
        LiteralKind::True | LiteralKind::False => PrimitiveType::Boolean,
        LiteralKind::Null => PrimitiveType::Null,
    }
}

/// The type of `left <operator> right`, or `None` when the operands are not
/// supported. Neither side may be unknown.
fn binary_result_type(
    operator: SyntaxKind,
    left: PrimitiveType,
    right: PrimitiveType,
) -> Option<PrimitiveType> {
    let both_numeric = left.is_numeric() && right.is_numeric();
    let both_text = left.is_text() && right.is_text();
    match operator {
        SyntaxKind::PlusToken if both_numeric => Some(left.widen(right)),
        SyntaxKind::PlusToken if both_text => Some(PrimitiveType::String),
        SyntaxKind::MinusToken
        | SyntaxKind::AsteriskToken
        | SyntaxKind::AsteriskAsteriskToken
        | SyntaxKind::SlashToken
        | SyntaxKind::PercentToken
        | SyntaxKind::PercentPercentToken
        | SyntaxKind::LessThanLessThanToken
        | SyntaxKind::GreaterThanGreaterThanToken
        | SyntaxKind::AmpersandToken
        | SyntaxKind::BarToken
        | SyntaxKind::CaretToken
            if both_numeric =>
        {
            Some(left.widen(right))
        }
        SyntaxKind::LessThanToken
        | SyntaxKind::GreaterThanToken
        | SyntaxKind::LessThanEqualsToken
        | SyntaxKind::GreaterThanEqualsToken
            if both_numeric || both_text =>
        {
            Some(PrimitiveType::Boolean)
        }
        SyntaxKind::EqualsEqualsToken | SyntaxKind::ExclamationEqualsToken => {
            let comparable = both_numeric
                || both_text
                || (left == PrimitiveType::Boolean && right == PrimitiveType::Boolean)
                || left == PrimitiveType::Null
                || right == PrimitiveType::Null;
            comparable.then_some(PrimitiveType::Boolean)
        }
        SyntaxKind::AmpersandAmpersandToken | SyntaxKind::BarBarToken => {
            let logical = |t: PrimitiveType| t.is_numeric() || t == PrimitiveType::Boolean;
            (logical(left) && logical(right)).then_some(PrimitiveType::Boolean)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PrimitiveType::*;

    #[test]
    fn test_plus() {
        assert_eq!(binary_result_type(SyntaxKind::PlusToken, Integer, Integer), Some(Integer));
        assert_eq!(binary_result_type(SyntaxKind::PlusToken, Integer, Decimal), Some(Decimal));
        assert_eq!(binary_result_type(SyntaxKind::PlusToken, Char, String), Some(String));
        assert_eq!(binary_result_type(SyntaxKind::PlusToken, Integer, Char), None);
        assert_eq!(binary_result_type(SyntaxKind::PlusToken, Boolean, Boolean), None);
    }

    #[test]
    fn test_comparison() {
        assert_eq!(binary_result_type(SyntaxKind::LessThanToken, String, Char), Some(Boolean));
        assert_eq!(binary_result_type(SyntaxKind::LessThanToken, Integer, String), None);
        assert_eq!(binary_result_type(SyntaxKind::EqualsEqualsToken, Null, Integer), Some(Boolean));
        assert_eq!(binary_result_type(SyntaxKind::EqualsEqualsToken, Boolean, Integer), None);
    }

    #[test]
    fn test_logical() {
        assert_eq!(binary_result_type(SyntaxKind::BarBarToken, Boolean, Integer), Some(Boolean));
        assert_eq!(binary_result_type(SyntaxKind::AmpersandAmpersandToken, String, Boolean), None);
    }

    #[test]
    fn test_arithmetic_rejects_text() {
        assert_eq!(binary_result_type(SyntaxKind::MinusToken, String, String), None);
        assert_eq!(binary_result_type(SyntaxKind::LessThanLessThanToken, Integer, Integer), Some(Integer));
        assert_eq!(binary_result_type(SyntaxKind::CaretToken, Decimal, Char), None);
    }
}
