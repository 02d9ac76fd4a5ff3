//! SyntaxKind enum - every token kind the scanner produces.

/// The kind of a token.
///
/// Variants are grouped so that range checks (`is_literal`,
/// `is_assignment_operator`, ...) stay a pair of integer comparisons; keep
/// the `FIRST_*`/`LAST_*` markers in sync when adding a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum SyntaxKind {
    Unknown = 0,
    EndOfFileToken,

    // Literals
    IntegerLiteral,
    DecimalLiteral,
    StringLiteral,
    CharLiteral,

    Identifier,

    // Keywords
    TrueKeyword,
    FalseKeyword,
    NullKeyword,

    // Punctuation
    OpenParenToken,
    CloseParenToken,
    OpenBraceToken,
    CloseBraceToken,
    OpenBracketToken,
    CloseBracketToken,
    DotToken,
    DotDotDotToken,
    CommaToken,
    SemicolonToken,
    ColonToken,
    ColonColonToken,
    QuestionToken,
    MinusGreaterThanToken,

    // Operators
    PlusPlusToken,
    MinusMinusToken,
    ExclamationToken,
    TildeToken,
    PlusToken,
    MinusToken,
    AsteriskToken,
    AsteriskAsteriskToken,
    SlashToken,
    PercentToken,
    PercentPercentToken,
    LessThanLessThanToken,
    GreaterThanGreaterThanToken,
    LessThanToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    EqualsEqualsToken,
    ExclamationEqualsToken,
    AmpersandToken,
    BarToken,
    CaretToken,
    AmpersandAmpersandToken,
    BarBarToken,

    // Assignment operators
    EqualsToken,
    ColonEqualsToken,
    PlusEqualsToken,
    MinusEqualsToken,
    AsteriskEqualsToken,
    AsteriskAsteriskEqualsToken,
    SlashEqualsToken,
    PercentEqualsToken,
    PercentPercentEqualsToken,
    LessThanLessThanEqualsToken,
    GreaterThanGreaterThanEqualsToken,
    AmpersandEqualsToken,
    BarEqualsToken,
    CaretEqualsToken,
}

impl SyntaxKind {
    pub const FIRST_LITERAL: SyntaxKind = SyntaxKind::IntegerLiteral;
    pub const LAST_LITERAL: SyntaxKind = SyntaxKind::CharLiteral;
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::TrueKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::NullKeyword;
    pub const FIRST_PUNCTUATION: SyntaxKind = SyntaxKind::OpenParenToken;
    pub const LAST_PUNCTUATION: SyntaxKind = SyntaxKind::CaretEqualsToken;
    pub const FIRST_ASSIGNMENT: SyntaxKind = SyntaxKind::EqualsToken;
    pub const LAST_ASSIGNMENT: SyntaxKind = SyntaxKind::CaretEqualsToken;
    pub const FIRST_COMPOUND_ASSIGNMENT: SyntaxKind = SyntaxKind::PlusEqualsToken;
}

impl SyntaxKind {
    #[inline]
    pub fn is_literal(self) -> bool {
        self >= Self::FIRST_LITERAL && self <= Self::LAST_LITERAL
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        self >= Self::FIRST_KEYWORD && self <= Self::LAST_KEYWORD
    }

    #[inline]
    pub fn is_punctuation(self) -> bool {
        self >= Self::FIRST_PUNCTUATION && self <= Self::LAST_PUNCTUATION
    }

    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        self >= Self::FIRST_ASSIGNMENT && self <= Self::LAST_ASSIGNMENT
    }

    #[inline]
    pub fn is_compound_assignment(self) -> bool {
        self >= Self::FIRST_COMPOUND_ASSIGNMENT && self <= Self::LAST_ASSIGNMENT
    }

    /// Whether a token of this kind can start an operand on its own.
    pub fn is_value_start(self) -> bool {
        self.is_literal()
            || self.is_keyword()
            || matches!(
                self,
                SyntaxKind::Identifier
                    | SyntaxKind::OpenParenToken
                    | SyntaxKind::OpenBraceToken
                    | SyntaxKind::OpenBracketToken
            )
    }

    /// Operators that may appear in front of an operand.
    pub fn is_prefix_operator(self) -> bool {
        matches!(
            self,
            SyntaxKind::PlusToken
                | SyntaxKind::MinusToken
                | SyntaxKind::ExclamationToken
                | SyntaxKind::TildeToken
                | SyntaxKind::PlusPlusToken
                | SyntaxKind::MinusMinusToken
        )
    }

    pub fn is_postfix_operator(self) -> bool {
        matches!(self, SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken)
    }

    /// Binary operators (assignments included) that cannot start an operand.
    pub fn is_binary_only_operator(self) -> bool {
        (self.is_binary_operator() || self.is_assignment_operator()) && !self.is_prefix_operator()
    }

    /// Non-assignment binary operators.
    pub fn is_binary_operator(self) -> bool {
        matches!(
            self,
            SyntaxKind::PlusToken
                | SyntaxKind::MinusToken
                | SyntaxKind::AsteriskToken
                | SyntaxKind::AsteriskAsteriskToken
                | SyntaxKind::SlashToken
                | SyntaxKind::PercentToken
                | SyntaxKind::PercentPercentToken
                | SyntaxKind::LessThanLessThanToken
                | SyntaxKind::GreaterThanGreaterThanToken
                | SyntaxKind::LessThanToken
                | SyntaxKind::GreaterThanToken
                | SyntaxKind::LessThanEqualsToken
                | SyntaxKind::GreaterThanEqualsToken
                | SyntaxKind::EqualsEqualsToken
                | SyntaxKind::ExclamationEqualsToken
                | SyntaxKind::AmpersandToken
                | SyntaxKind::BarToken
                | SyntaxKind::CaretToken
                | SyntaxKind::AmpersandAmpersandToken
                | SyntaxKind::BarBarToken
        )
    }

    /// The operator a compound assignment applies, e.g. `+` for `+=`.
    pub fn compound_base(self) -> Option<SyntaxKind> {
        match self {
            SyntaxKind::PlusEqualsToken => Some(SyntaxKind::PlusToken),
            SyntaxKind::MinusEqualsToken => Some(SyntaxKind::MinusToken),
            SyntaxKind::AsteriskEqualsToken => Some(SyntaxKind::AsteriskToken),
            SyntaxKind::AsteriskAsteriskEqualsToken => Some(SyntaxKind::AsteriskAsteriskToken),
            SyntaxKind::SlashEqualsToken => Some(SyntaxKind::SlashToken),
            SyntaxKind::PercentEqualsToken => Some(SyntaxKind::PercentToken),
            SyntaxKind::PercentPercentEqualsToken => Some(SyntaxKind::PercentPercentToken),
            SyntaxKind::LessThanLessThanEqualsToken => Some(SyntaxKind::LessThanLessThanToken),
            SyntaxKind::GreaterThanGreaterThanEqualsToken => {
                Some(SyntaxKind::GreaterThanGreaterThanToken)
            }
            SyntaxKind::AmpersandEqualsToken => Some(SyntaxKind::AmpersandToken),
            SyntaxKind::BarEqualsToken => Some(SyntaxKind::BarToken),
            SyntaxKind::CaretEqualsToken => Some(SyntaxKind::CaretToken),
            _ => None,
        }
    }

    /// Look up a keyword SyntaxKind from text.
    pub fn from_keyword(text: &str) -> Option<SyntaxKind> {
        match text {
            "true" => Some(SyntaxKind::TrueKeyword),
            "false" => Some(SyntaxKind::FalseKeyword),
            "null" => Some(SyntaxKind::NullKeyword),
            _ => None,
        }
    }

    /// Get the punctuation text for a punctuation kind, or None.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::OpenParenToken => Some("("),
            SyntaxKind::CloseParenToken => Some(")"),
            SyntaxKind::OpenBraceToken => Some("{"),
            SyntaxKind::CloseBraceToken => Some("}"),
            SyntaxKind::OpenBracketToken => Some("["),
            SyntaxKind::CloseBracketToken => Some("]"),
            SyntaxKind::DotToken => Some("."),
            SyntaxKind::DotDotDotToken => Some("..."),
            SyntaxKind::CommaToken => Some(","),
            SyntaxKind::SemicolonToken => Some(";"),
            SyntaxKind::ColonToken => Some(":"),
            SyntaxKind::ColonColonToken => Some("::"),
            SyntaxKind::QuestionToken => Some("?"),
            SyntaxKind::MinusGreaterThanToken => Some("->"),
            SyntaxKind::PlusPlusToken => Some("++"),
            SyntaxKind::MinusMinusToken => Some("--"),
            SyntaxKind::ExclamationToken => Some("!"),
            SyntaxKind::TildeToken => Some("~"),
            SyntaxKind::PlusToken => Some("+"),
            SyntaxKind::MinusToken => Some("-"),
            SyntaxKind::AsteriskToken => Some("*"),
            SyntaxKind::AsteriskAsteriskToken => Some("**"),
            SyntaxKind::SlashToken => Some("/"),
            SyntaxKind::PercentToken => Some("%"),
            SyntaxKind::PercentPercentToken => Some("%%"),
            SyntaxKind::LessThanLessThanToken => Some("<<"),
            SyntaxKind::GreaterThanGreaterThanToken => Some(">>"),
            SyntaxKind::LessThanToken => Some("<"),
            SyntaxKind::GreaterThanToken => Some(">"),
            SyntaxKind::LessThanEqualsToken => Some("<="),
            SyntaxKind::GreaterThanEqualsToken => Some(">="),
            SyntaxKind::EqualsEqualsToken => Some("=="),
            SyntaxKind::ExclamationEqualsToken => Some("!="),
            SyntaxKind::AmpersandToken => Some("&"),
            SyntaxKind::BarToken => Some("|"),
            SyntaxKind::CaretToken => Some("^"),
            SyntaxKind::AmpersandAmpersandToken => Some("&&"),
            SyntaxKind::BarBarToken => Some("||"),
            SyntaxKind::EqualsToken => Some("="),
            SyntaxKind::ColonEqualsToken => Some(":="),
            SyntaxKind::PlusEqualsToken => Some("+="),
            SyntaxKind::MinusEqualsToken => Some("-="),
            SyntaxKind::AsteriskEqualsToken => Some("*="),
            SyntaxKind::AsteriskAsteriskEqualsToken => Some("**="),
            SyntaxKind::SlashEqualsToken => Some("/="),
            SyntaxKind::PercentEqualsToken => Some("%="),
            SyntaxKind::PercentPercentEqualsToken => Some("%%="),
            SyntaxKind::LessThanLessThanEqualsToken => Some("<<="),
            SyntaxKind::GreaterThanGreaterThanEqualsToken => Some(">>="),
            SyntaxKind::AmpersandEqualsToken => Some("&="),
            SyntaxKind::BarEqualsToken => Some("|="),
            SyntaxKind::CaretEqualsToken => Some("^="),
            _ => None,
        }
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
