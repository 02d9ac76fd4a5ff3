//! Character classes used by the scanner.

pub const LINE_FEED: char = '\n';
pub const DOUBLE_QUOTE: char = '"';
pub const SINGLE_QUOTE: char = '\'';
pub const HASH: char = '#';
pub const ASTERISK: char = '*';
pub const SLASH: char = '/';
pub const BACKSLASH: char = '\\';
pub const DOT: char = '.';
pub const UNDERSCORE: char = '_';

/// Whitespace that does not end a line.
#[inline]
pub fn is_white_space_single_line(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | '\r'
            | '\u{000B}' // vertical tab
            | '\u{000C}' // form feed
            | '\u{00A0}' // no-break space
            | '\u{2000}'..='\u{200A}' // various spaces
            | '\u{3000}' // ideographic space
            | '\u{FEFF}' // BOM / zero-width no-break space
    )
}

#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Whether `ch` may start an identifier.
#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    ch == UNDERSCORE
        || ch.is_ascii_alphabetic()
        || (ch as u32 > 0x7F && unicode_xid::UnicodeXID::is_xid_start(ch))
}

/// Whether `ch` may continue an identifier.
#[inline]
pub fn is_identifier_part(ch: char) -> bool {
    ch == UNDERSCORE
        || ch.is_ascii_alphanumeric()
        || (ch as u32 > 0x7F && unicode_xid::UnicodeXID::is_xid_continue(ch))
}
