//! noon_parser: Precedence-climbing expression parser.
//!
//! Parses the scanner's token list into an arena-allocated AST, stopping at
//! the first syntax error.

mod parser;
mod precedence;

pub use parser::{ParseResult, Parser};
pub use precedence::{get_binary_operator_precedence, is_right_associative, OperatorPrecedence};

use bumpalo::Bump;
use noon_ast::node::SourceFile;

/// Scan and parse `text` in one step, dropping scanner warnings.
pub fn parse_source<'a>(
    arena: &'a Bump,
    file_name: &str,
    text: &str,
) -> ParseResult<SourceFile<'a>> {
    let output = noon_scanner::tokenize(text)?;
    Parser::new(arena, file_name, output.tokens).parse_source_file()
}
