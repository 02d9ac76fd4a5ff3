//! AST node definitions.
//!
//! Nodes reference their children through arena-allocated references, so a
//! whole tree is freed together with the arena it was parsed into.

use crate::syntax_kind::SyntaxKind;
use noon_core::text::{Position, TextSpan};

// ============================================================================
// Core Node Wrapper
// ============================================================================

/// Common data shared by all AST nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeData {
    /// Characters covered by the node.
    pub span: TextSpan,
    /// Position of the first character; diagnostics about the node point here.
    pub start: Position,
}

impl NodeData {
    pub fn new(span: TextSpan, start: Position) -> Self {
        Self { span, start }
    }
}

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

/// An operator as written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorToken {
    pub kind: SyntaxKind,
    pub data: NodeData,
}

impl OperatorToken {
    pub fn new(kind: SyntaxKind, data: NodeData) -> Self {
        Self { kind, data }
    }

    pub fn text(&self) -> &'static str {
        self.kind.punctuation_text().unwrap_or("")
    }
}

// ============================================================================
// Source File
// ============================================================================

#[derive(Debug)]
pub struct SourceFile<'a> {
    pub data: NodeData,
    /// One expression per statement, in source order.
    pub statements: NodeList<'a, Expression<'a>>,
    pub file_name: String,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug)]
pub enum Expression<'a> {
    Literal(Literal<'a>),
    Identifier(Identifier<'a>),
    PrefixUnary(PrefixUnaryExpression<'a>),
    PostfixUnary(PostfixUnaryExpression<'a>),
    Binary(BinaryExpression<'a>),
    Group(GroupExpression<'a>),
    Pair(PairExpression<'a>),
    Call(CallExpression<'a>),
    Index(IndexExpression<'a>),
}

impl<'a> Expression<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Expression::Literal(n) => &n.data,
            Expression::Identifier(n) => &n.data,
            Expression::PrefixUnary(n) => &n.data,
            Expression::PostfixUnary(n) => &n.data,
            Expression::Binary(n) => &n.data,
            Expression::Group(n) => &n.data,
            Expression::Pair(n) => &n.data,
            Expression::Call(n) => &n.data,
            Expression::Index(n) => &n.data,
        }
    }

    #[inline]
    pub fn span(&self) -> TextSpan {
        self.data().span
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.data().start
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Integer,
    Decimal,
    String,
    Char,
    True,
    False,
    Null,
}

#[derive(Debug)]
pub struct Literal<'a> {
    pub data: NodeData,
    pub kind: LiteralKind,
    /// The lexeme, quotes included for string and char literals.
    pub text: &'a str,
}

#[derive(Debug)]
pub struct Identifier<'a> {
    pub data: NodeData,
    pub name: &'a str,
}

#[derive(Debug)]
pub struct PrefixUnaryExpression<'a> {
    pub data: NodeData,
    pub operator: OperatorToken,
    pub operand: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct PostfixUnaryExpression<'a> {
    pub data: NodeData,
    pub operand: &'a Expression<'a>,
    pub operator: OperatorToken,
}

/// Binary and assignment expressions.
#[derive(Debug)]
pub struct BinaryExpression<'a> {
    pub data: NodeData,
    pub left: &'a Expression<'a>,
    pub operator: OperatorToken,
    pub right: &'a Expression<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// `( ... )`
    Paren,
    /// `[ ... ]`
    Square,
    /// `{ ... }`
    Curly,
}

/// A bracketed, comma-separated list of elements.
#[derive(Debug)]
pub struct GroupExpression<'a> {
    pub data: NodeData,
    pub kind: GroupKind,
    pub elements: NodeList<'a, Expression<'a>>,
}

impl<'a> GroupExpression<'a> {
    /// `(expr)`: a parenthesized single expression.
    pub fn parenthesized(&self) -> Option<&Expression<'a>> {
        match (self.kind, self.elements) {
            (GroupKind::Paren, [inner]) => Some(inner),
            _ => None,
        }
    }
}

/// `key: value` inside a curly group.
#[derive(Debug)]
pub struct PairExpression<'a> {
    pub data: NodeData,
    pub key: &'a Expression<'a>,
    pub value: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct CallExpression<'a> {
    pub data: NodeData,
    pub callee: &'a Expression<'a>,
    pub arguments: NodeList<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct IndexExpression<'a> {
    pub data: NodeData,
    pub object: &'a Expression<'a>,
    pub indices: NodeList<'a, Expression<'a>>,
}
