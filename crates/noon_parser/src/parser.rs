//! The noon expression parser.
//!
//! A precedence-climbing parser over the scanner's token list. It builds an
//! arena-allocated AST and stops at the first syntax error.

use bumpalo::Bump;
use noon_ast::node::*;
use noon_ast::syntax_kind::SyntaxKind;
use noon_ast::types::TokenFlags;
use noon_core::text::TextSpan;
use noon_diagnostics::{Diagnostic, DiagnosticKind};
use noon_scanner::Token;
use tracing::debug;

use crate::precedence::{get_binary_operator_precedence, is_right_associative, OperatorPrecedence};

/// Maximum recursion depth to prevent stack overflow on deeply nested input.
const MAX_RECURSION_DEPTH: u32 = 200;

pub type ParseResult<T> = Result<T, Diagnostic>;

/// What sits right before an operand being parsed.
#[derive(Debug, Clone, Copy)]
enum OperandContext {
    /// The operand begins an expression.
    Start,
    /// The operand follows a binary or assignment operator.
    AfterOperator(OperatorToken),
}

/// The parser produces a SourceFile AST from scanned tokens.
pub struct Parser<'a> {
    arena: &'a Bump,
    tokens: Vec<Token>,
    /// Index of the current token.
    pos: usize,
    file_name: String,
    /// Bracket nesting; a line break only ends a statement at depth zero.
    group_depth: u32,
    /// Index of the first token of the statement being parsed.
    statement_start: usize,
    /// Tracks recursion depth to prevent stack overflow on deeply nested input.
    recursion_depth: u32,
}

impl<'a> Parser<'a> {
    pub fn new(arena: &'a Bump, file_name: &str, mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let (span, end) = tokens
                .last()
                .map(|t| (TextSpan::new(t.span.end(), 0), t.end))
                .unwrap_or_default();
            tokens.push(Token {
                kind: SyntaxKind::EndOfFileToken,
                text: String::new(),
                span,
                start: end,
                end,
                flags: TokenFlags::NONE,
            });
        }
        Self {
            arena,
            tokens,
            pos: 0,
            file_name: file_name.to_string(),
            group_depth: 0,
            statement_start: 0,
            recursion_depth: 0,
        }
    }

    pub fn parse_source_file(mut self) -> ParseResult<SourceFile<'a>> {
        debug!(target: "noon::parser", file = %self.file_name, tokens = self.tokens.len(), "parse started");
        let mut statements = bumpalo::collections::Vec::new_in(self.arena);

        loop {
            while self.current_token() == SyntaxKind::SemicolonToken {
                self.next_token();
            }
            if self.current_token() == SyntaxKind::EndOfFileToken {
                break;
            }
            self.statement_start = self.pos;
            let expr = self.parse_expression()?;
            statements.push(expr);
            self.parse_statement_end()?;
        }

        let end = self.current().span.end();
        let data = NodeData::new(TextSpan::from_bounds(0, end), Default::default());
        debug!(target: "noon::parser", statements = statements.len(), "parse finished");
        Ok(SourceFile {
            data,
            statements: statements.into_bump_slice(),
            file_name: self.file_name,
        })
    }

    // ========================================================================
    // Token management
    // ========================================================================

    #[inline]
    fn current(&self) -> &Token {
        // The token list always ends with an `EndOfFileToken`.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    #[inline]
    fn current_token(&self) -> SyntaxKind {
        self.current().kind
    }

    #[inline]
    fn next_token(&mut self) -> SyntaxKind {
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        self.current_token()
    }

    fn current_data(&self) -> NodeData {
        let token = self.current();
        NodeData::new(token.span, token.start)
    }

    fn current_operator(&self) -> OperatorToken {
        OperatorToken::new(self.current_token(), self.current_data())
    }

    /// Whether the current token ends the expression being parsed.
    fn is_expression_end(&self) -> bool {
        let token = self.current();
        match token.kind {
            SyntaxKind::EndOfFileToken
            | SyntaxKind::SemicolonToken
            | SyntaxKind::CommaToken
            | SyntaxKind::CloseParenToken
            | SyntaxKind::CloseBraceToken
            | SyntaxKind::CloseBracketToken => true,
            _ => {
                self.group_depth == 0
                    && self.pos != self.statement_start
                    && token.has_preceding_line_break()
            }
        }
    }

    /// Whether the current token can begin an operand.
    fn is_operand_start(&self) -> bool {
        let token = self.current();
        token.kind.is_value_start() && !token.flags.contains(TokenFlags::LEADING_DOT)
    }

    fn error(&self, kind: DiagnosticKind, data: NodeData) -> Diagnostic {
        Diagnostic::new(kind, data.span, data.start)
    }

    fn error_at_current(&self, kind: DiagnosticKind) -> Diagnostic {
        self.error(kind, self.current_data())
    }

    fn invalid_syntax_at_current(&self) -> Diagnostic {
        self.error_at_current(DiagnosticKind::InvalidSyntax(self.current().text.clone()))
    }

    fn alloc(&self, expr: Expression<'a>) -> &'a Expression<'a> {
        self.arena.alloc(expr)
    }

    // ========================================================================
    // Statements
    // ========================================================================

    /// A statement ends at `;`, at a line break, or at the end of input.
    fn parse_statement_end(&mut self) -> ParseResult<()> {
        match self.current_token() {
            SyntaxKind::EndOfFileToken => Ok(()),
            SyntaxKind::SemicolonToken => {
                self.next_token();
                Ok(())
            }
            _ if self.current().has_preceding_line_break() => Ok(()),
            _ => Err(self.invalid_syntax_at_current()),
        }
    }

    // ========================================================================
    // Expression parsing
    // ========================================================================

    fn parse_expression(&mut self) -> ParseResult<Expression<'a>> {
        self.nested(|parser| parser.parse_assignment_expression(OperandContext::Start))
    }

    /// Run `parse` one recursion level deeper, failing with `NestingTooDeep`
    /// past `MAX_RECURSION_DEPTH`.
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.recursion_depth >= MAX_RECURSION_DEPTH {
            return Err(self.error_at_current(DiagnosticKind::NestingTooDeep));
        }
        self.recursion_depth += 1;
        let result = parse(self);
        self.recursion_depth -= 1;
        result
    }

    fn parse_assignment_expression(
        &mut self,
        context: OperandContext,
    ) -> ParseResult<Expression<'a>> {
        let left = self.parse_binary_expression(OperatorPrecedence::Lowest, context)?;

        if !self.current_token().is_assignment_operator() || self.is_expression_end() {
            return Ok(left);
        }
        let operator = self.current_operator();
        self.next_token();
        let context = OperandContext::AfterOperator(operator);
        let right = self.nested(|parser| parser.parse_assignment_expression(context))?;
        Ok(self.make_binary(left, operator, right))
    }

    fn parse_binary_expression(
        &mut self,
        min_precedence: OperatorPrecedence,
        context: OperandContext,
    ) -> ParseResult<Expression<'a>> {
        let mut left = self.parse_unary_expression(context)?;

        loop {
            if self.is_expression_end() {
                break;
            }
            let kind = self.current_token();
            let precedence = get_binary_operator_precedence(kind);
            if precedence == OperatorPrecedence::Invalid || precedence <= min_precedence {
                break;
            }

            let operator = self.current_operator();
            self.next_token();
            let context = OperandContext::AfterOperator(operator);
            let right = if is_right_associative(kind) {
                // `a ** b ** c` nests to the right, one level per operator.
                self.nested(|parser| {
                    parser.parse_binary_expression(OperatorPrecedence::Multiplicative, context)
                })?
            } else {
                self.parse_binary_expression(precedence, context)?
            };
            left = self.make_binary(left, operator, right);
        }

        Ok(left)
    }

    fn make_binary(
        &self,
        left: Expression<'a>,
        operator: OperatorToken,
        right: Expression<'a>,
    ) -> Expression<'a> {
        let data = NodeData::new(left.span().union(&right.span()), left.start());
        Expression::Binary(BinaryExpression {
            data,
            left: self.alloc(left),
            operator,
            right: self.alloc(right),
        })
    }

    fn parse_unary_expression(&mut self, context: OperandContext) -> ParseResult<Expression<'a>> {
        if self.current_token().is_prefix_operator() {
            return self.parse_prefix_unary_expression(context);
        }
        if self.is_operand_start() {
            return self.parse_postfix_expression();
        }
        Err(self.missing_operand(context))
    }

    /// A run of prefix operators followed by their operand.
    fn parse_prefix_unary_expression(
        &mut self,
        context: OperandContext,
    ) -> ParseResult<Expression<'a>> {
        let mut operators = Vec::new();
        while self.current_token().is_prefix_operator() && !self.is_expression_end() {
            operators.push(self.current_operator());
            self.next_token();
        }

        if !self.is_operand_start() {
            let (first, last) = match (operators.first(), operators.last()) {
                (Some(first), Some(last)) => (*first, *last),
                _ => return Err(self.missing_operand(context)),
            };
            if self.is_expression_end() {
                return Err(match context {
                    OperandContext::Start => self.error(DiagnosticKind::ExpectedExpression, first.data),
                    OperandContext::AfterOperator(_) => self.error(
                        DiagnosticKind::ExpectedValueAfterOperator(last.text().to_string()),
                        last.data,
                    ),
                });
            }
            return Err(self.missing_operand(OperandContext::AfterOperator(last)));
        }

        let mut expr = self.parse_postfix_expression()?;
        for operator in operators.into_iter().rev() {
            let data = NodeData::new(operator.data.span.union(&expr.span()), operator.data.start);
            expr = Expression::PrefixUnary(PrefixUnaryExpression {
                data,
                operator,
                operand: self.alloc(expr),
            });
        }
        Ok(expr)
    }

    /// The diagnostic for a token that cannot begin the operand required here.
    fn missing_operand(&self, context: OperandContext) -> Diagnostic {
        let kind = self.current_token();
        if kind.is_binary_only_operator() && !self.is_expression_end() {
            let text = self.current().text.clone();
            return self.error_at_current(DiagnosticKind::ExpectedValueBeforeOperator(text));
        }
        match context {
            OperandContext::AfterOperator(operator) if self.is_expression_end() => self.error(
                DiagnosticKind::ExpectedValueAfterOperator(operator.text().to_string()),
                operator.data,
            ),
            _ => self.error_at_current(DiagnosticKind::ExpectedExpression),
        }
    }

    /// An operand followed by any number of calls, indexes and `++`/`--`.
    fn parse_postfix_expression(&mut self) -> ParseResult<Expression<'a>> {
        let mut expr = self.parse_primary_expression()?;

        loop {
            let token = self.current();
            if token.has_preceding_line_break() && self.group_depth == 0 {
                break;
            }
            expr = match token.kind {
                SyntaxKind::OpenParenToken => {
                    let (arguments, close) = self.parse_group_elements(GroupKind::Paren)?;
                    let data = NodeData::new(expr.span().union(&close), expr.start());
                    Expression::Call(CallExpression {
                        data,
                        callee: self.alloc(expr),
                        arguments,
                    })
                }
                SyntaxKind::OpenBracketToken => {
                    let (indices, close) = self.parse_group_elements(GroupKind::Square)?;
                    let data = NodeData::new(expr.span().union(&close), expr.start());
                    Expression::Index(IndexExpression {
                        data,
                        object: self.alloc(expr),
                        indices,
                    })
                }
                kind if kind.is_postfix_operator() => {
                    let operator = self.current_operator();
                    self.next_token();
                    let data = NodeData::new(expr.span().union(&operator.data.span), expr.start());
                    Expression::PostfixUnary(PostfixUnaryExpression {
                        data,
                        operand: self.alloc(expr),
                        operator,
                    })
                }
                _ => break,
            };
        }

        Ok(expr)
    }

    fn parse_primary_expression(&mut self) -> ParseResult<Expression<'a>> {
        let token = self.current();
        let data = NodeData::new(token.span, token.start);
        let literal_kind = match token.kind {
            SyntaxKind::IntegerLiteral => LiteralKind::Integer,
            SyntaxKind::DecimalLiteral => LiteralKind::Decimal,
            SyntaxKind::StringLiteral => LiteralKind::String,
            SyntaxKind::CharLiteral => LiteralKind::Char,
            SyntaxKind::TrueKeyword => LiteralKind::True,
            SyntaxKind::FalseKeyword => LiteralKind::False,
            SyntaxKind::NullKeyword => LiteralKind::Null,
            SyntaxKind::Identifier => {
                let name = self.arena.alloc_str(&token.text);
                self.next_token();
                return Ok(Expression::Identifier(Identifier { data, name }));
            }
            SyntaxKind::OpenParenToken => return self.parse_group(GroupKind::Paren),
            SyntaxKind::OpenBracketToken => return self.parse_group(GroupKind::Square),
            SyntaxKind::OpenBraceToken => return self.parse_group(GroupKind::Curly),
            _ => return Err(self.error_at_current(DiagnosticKind::ExpectedExpression)),
        };
        let text = self.arena.alloc_str(&token.text);
        self.next_token();
        Ok(Expression::Literal(Literal {
            data,
            kind: literal_kind,
            text,
        }))
    }

    fn parse_group(&mut self, kind: GroupKind) -> ParseResult<Expression<'a>> {
        let open = self.current_data();
        let (elements, close) = self.parse_group_elements(kind)?;
        Ok(Expression::Group(GroupExpression {
            data: NodeData::new(open.span.union(&close), open.start),
            kind,
            elements,
        }))
    }

    /// Parse `open element, element, ... close`, returning the elements and
    /// the closer's span. The scanner has already checked bracket balance, so
    /// the closer met here always matches the opener.
    fn parse_group_elements(
        &mut self,
        kind: GroupKind,
    ) -> ParseResult<(NodeList<'a, Expression<'a>>, TextSpan)> {
        self.next_token();
        self.group_depth += 1;
        let mut elements = bumpalo::collections::Vec::new_in(self.arena);

        while !self.is_group_close() {
            let element = self.parse_group_element(kind)?;
            elements.push(element);
            match self.current_token() {
                SyntaxKind::CommaToken => {
                    self.next_token();
                }
                _ if self.is_group_close() => {}
                _ => return Err(self.invalid_syntax_at_current()),
            }
        }

        let close = self.current().span;
        self.group_depth -= 1;
        self.next_token();
        Ok((elements.into_bump_slice(), close))
    }

    fn is_group_close(&self) -> bool {
        matches!(
            self.current_token(),
            SyntaxKind::CloseParenToken
                | SyntaxKind::CloseBracketToken
                | SyntaxKind::CloseBraceToken
                | SyntaxKind::EndOfFileToken
        )
    }

    fn parse_group_element(&mut self, kind: GroupKind) -> ParseResult<Expression<'a>> {
        let key = self.parse_expression()?;
        if kind != GroupKind::Curly || self.current_token() != SyntaxKind::ColonToken {
            return Ok(key);
        }
        let colon = self.current_operator();
        self.next_token();
        let value = self.parse_assignment_expression(OperandContext::AfterOperator(colon))?;
        let data = NodeData::new(key.span().union(&value.span()), key.start());
        Ok(Expression::Pair(PairExpression {
            data,
            key: self.alloc(key),
            value: self.alloc(value),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noon_scanner::tokenize;

    fn parse_ok<'a>(arena: &'a Bump, source: &str) -> SourceFile<'a> {
        let tokens = tokenize(source).unwrap().tokens;
        Parser::new(arena, "<string>", tokens)
            .parse_source_file()
            .unwrap()
    }

    #[test]
    fn test_parse_empty() {
        let arena = Bump::new();
        assert!(parse_ok(&arena, "").statements.is_empty());
        assert!(parse_ok(&arena, ";;\n# only a comment").statements.is_empty());
    }

    #[test]
    fn test_statements_split_on_newline_and_semicolon() {
        let arena = Bump::new();
        let file = parse_ok(&arena, "1\n2; 3");
        assert_eq!(file.statements.len(), 3);
    }

    #[test]
    fn test_newline_inside_group_does_not_split() {
        let arena = Bump::new();
        let file = parse_ok(&arena, "(1 +\n 2)");
        assert_eq!(file.statements.len(), 1);
    }

    #[test]
    fn test_prefix_operator_after_newline_starts_statement() {
        let arena = Bump::new();
        let file = parse_ok(&arena, "1\n-2");
        assert_eq!(file.statements.len(), 2);

        let tokens = tokenize("1\n*x").unwrap().tokens;
        let err = Parser::new(&arena, "<string>", tokens)
            .parse_source_file()
            .unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::ExpectedValueBeforeOperator("*".into()));
    }

    #[test]
    fn test_precedence() {
        let arena = Bump::new();
        let file = parse_ok(&arena, "1 + 2 * 3");
        let Expression::Binary(sum) = &file.statements[0] else {
            panic!("expected binary expression");
        };
        assert_eq!(sum.operator.kind, SyntaxKind::PlusToken);
        assert!(matches!(sum.right, Expression::Binary(b) if b.operator.kind == SyntaxKind::AsteriskToken));
    }

    #[test]
    fn test_missing_eof_token_is_added() {
        let arena = Bump::new();
        let mut tokens = tokenize("1").unwrap().tokens;
        tokens.pop();
        let file = Parser::new(&arena, "<string>", tokens)
            .parse_source_file()
            .unwrap();
        assert_eq!(file.statements.len(), 1);
    }

    fn parse_err(source: &str) -> Diagnostic {
        let arena = Bump::new();
        let tokens = tokenize(source).unwrap().tokens;
        Parser::new(&arena, "<string>", tokens)
            .parse_source_file()
            .unwrap_err()
    }

    #[test]
    fn test_right_associative_chain_limit() {
        let depth = MAX_RECURSION_DEPTH as usize + 1;
        let err = parse_err(&format!("1{}", "**1".repeat(depth)));
        assert_eq!(err.kind, DiagnosticKind::NestingTooDeep);

        let err = parse_err(&format!("x{}", " = x".repeat(depth)));
        assert_eq!(err.kind, DiagnosticKind::NestingTooDeep);

        let arena = Bump::new();
        let file = parse_ok(&arena, &format!("1{}", "**1".repeat(depth - 2)));
        assert_eq!(file.statements.len(), 1);
    }

    #[test]
    fn test_long_left_chain_is_not_limited() {
        let arena = Bump::new();
        let file = parse_ok(&arena, &format!("1{}", "+1".repeat(10_000)));
        assert_eq!(file.statements.len(), 1);
        let file = parse_ok(&arena, &format!("{}1", "- ".repeat(10_000)));
        assert_eq!(file.statements.len(), 1);
    }

    #[test]
    fn test_nesting_limit() {
        let arena = Bump::new();
        let depth = MAX_RECURSION_DEPTH as usize + 1;
        let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        let tokens = tokenize(&source).unwrap().tokens;
        let err = Parser::new(&arena, "<string>", tokens)
            .parse_source_file()
            .unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::NestingTooDeep);
    }
}
