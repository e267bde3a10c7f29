//! Full-width punctuation folding.
//!
//! Source text may spell punctuation in full-width form, so `（` appears in
//! the byte stream as the three-byte sequence `EF BC 88`. The eight forms
//! below fold to their half-width ASCII equivalents before classification.
//! Any other multi-byte sequence is left alone and handed back to the
//! scanner byte by byte.

/// Smallest first-byte value for which the scanner attempts a fold.
pub const FOLD_THRESHOLD: u8 = 0xE0;

/// Folds a three-byte full-width punctuation sequence to its ASCII
/// equivalent.
///
/// Returns `None` when the sequence is not one of the folded forms. The
/// caller has already consumed `second` and `third` from the stream and
/// must restore both, in reverse order, so later reads observe them
/// unchanged.
pub fn fold(first: u8, second: u8, third: u8) -> Option<u8> {
    if first != 0xEF {
        return None;
    }
    match (second, third) {
        (0xBC, 0x88) => Some(b'('),
        (0xBC, 0x89) => Some(b')'),
        (0xBC, 0x9B) => Some(b';'),
        (0xBC, 0x9A) => Some(b':'),
        (0xBC, 0x9C) => Some(b'<'),
        (0xBC, 0x9E) => Some(b'>'),
        (0xBD, 0x9B) => Some(b'{'),
        (0xBD, 0x9D) => Some(b'}'),
        _ => None,
    }
}
