//! noon_scanner: Tokenizer for noon source code.
//!
//! Produces tokens from source text and reports the first lexical error:
//! - string and char literals (no escapes, may span lines)
//! - `#` line comments and `/* */` block comments with `\` escapes
//! - numeric literals with `_` separators, fractions and exponents
//! - bracket balancing across `()`, `{}` and `[]`

mod char_codes;
pub mod comment;
pub mod delimiters;
pub mod number;
pub mod quoted;
mod scanner;
mod token;

pub use scanner::{tokenize, Scanner};
pub use token::{ScanOutput, Token};
