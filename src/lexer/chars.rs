//! Byte classification predicates used by the scanner.
//!
//! The scanner works on raw bytes rather than decoded characters, so every
//! predicate here takes a `u8`. Multi-byte sequences never reach these
//! predicates directly; the full-width folder substitutes an ASCII byte
//! first where one applies.

/// ASCII letter, either case.
pub fn is_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// ASCII decimal digit.
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Letter, digit, or underscore. Identifiers continue while this holds;
/// they may not start with a digit or underscore.
pub fn is_ident_continue(byte: u8) -> bool {
    is_letter(byte) || is_digit(byte) || byte == b'_'
}

/// Space, tab, newline, or carriage return.
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Symbols that form a complete token on their own, with no lookahead.
pub fn is_symbol(byte: u8) -> bool {
    matches!(
        byte,
        b'+' | b'-' | b'(' | b')' | b'{' | b'}' | b';' | b':'
    )
}

/// First byte of an operator that may be doubled with `=`.
pub fn is_operator_start(byte: u8) -> bool {
    matches!(byte, b'=' | b'<' | b'>')
}
