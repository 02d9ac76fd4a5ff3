//! noon_checker: Operand compatibility checks.
//!
//! Infers a primitive type for each expression and rejects binary operators
//! applied to operands they do not support.

mod checker;
mod types;

pub use checker::{CheckResult, Checker};
pub use types::PrimitiveType;
