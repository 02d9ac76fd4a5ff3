//! noon_ast: Token kinds and the expression tree.
//!
//! Defines the SyntaxKind enum shared by the scanner and parser, the
//! token flag set, and the arena-allocated AST produced by the parser.

pub mod node;
pub mod syntax_kind;
pub mod types;

// Re-export key types
pub use node::*;
pub use syntax_kind::SyntaxKind;
pub use types::*;
