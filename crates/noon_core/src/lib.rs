//! noon_core: Core utilities shared by every stage of the noon front end.
//!
//! Provides source spans, 1-based line/column positions and line maps.

pub mod text;

pub use text::{LineMap, Position, TextPos, TextSpan};
