//! Flag types attached to tokens.

bitflags::bitflags! {
    /// Facts the scanner records about a token beyond its kind.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TokenFlags: u8 {
        const NONE                 = 0;
        /// A line break appeared between the previous token and this one.
        const PRECEDING_LINE_BREAK = 1 << 0;
        /// Numeric literal written without an integer part, e.g. `.5`.
        const LEADING_DOT          = 1 << 1;
        /// Numeric literal with an exponent part.
        const SCIENTIFIC           = 1 << 2;
        /// Numeric literal containing `_` separators.
        const CONTAINS_SEPARATOR   = 1 << 3;

        const NUMERIC_LITERAL_FLAGS = Self::LEADING_DOT.bits()
            | Self::SCIENTIFIC.bits()
            | Self::CONTAINS_SEPARATOR.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_flags() {
        let flags = TokenFlags::PRECEDING_LINE_BREAK | TokenFlags::SCIENTIFIC;
        assert!(flags.intersects(TokenFlags::NUMERIC_LITERAL_FLAGS));
        assert!(!TokenFlags::PRECEDING_LINE_BREAK.intersects(TokenFlags::NUMERIC_LITERAL_FLAGS));
        assert_eq!(TokenFlags::default(), TokenFlags::NONE);
    }
}
