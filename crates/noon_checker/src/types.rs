//! The primitive types the checker reasons about.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Integer,
    Decimal,
    String,
    Char,
    Boolean,
    Null,
    /// Identifiers, calls, indexing and non-parenthesis groups. Never reported.
    Unknown,
}

impl PrimitiveType {
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveType::Integer => "integer",
            PrimitiveType::Decimal => "decimal",
            PrimitiveType::String => "string",
            PrimitiveType::Char => "char",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Null => "null",
            PrimitiveType::Unknown => "unknown",
        }
    }

    #[inline]
    pub fn is_numeric(self) -> bool {
        matches!(self, PrimitiveType::Integer | PrimitiveType::Decimal)
    }

    /// `string` and `char`.
    #[inline]
    pub fn is_text(self) -> bool {
        matches!(self, PrimitiveType::String | PrimitiveType::Char)
    }

    #[inline]
    pub fn is_unknown(self) -> bool {
        self == PrimitiveType::Unknown
    }

    /// The result of arithmetic on two numeric operands.
    pub fn widen(self, other: PrimitiveType) -> PrimitiveType {
        if self == PrimitiveType::Integer && other == PrimitiveType::Integer {
            PrimitiveType::Integer
        } else {
            PrimitiveType::Decimal
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
