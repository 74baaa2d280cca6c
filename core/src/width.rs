//! Full-width to half-width folding.
//!
//! Every rule works on Unicode scalar values only. A character either folds to
//! a half-width ASCII character accepted by the active mode, or it is dropped.
//! Folding an already-folded string is a no-op, so a field can be normalized
//! again on every change without drifting.

use crate::NormalizationMode;

/// Offset between a full-width form (U+FF01..U+FF5E) and its ASCII twin.
pub const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Code points that do not fold cleanly by [`FULLWIDTH_OFFSET`].
const HALFWIDTH_EXCEPTIONS: &[(char, char)] = &[
    ('\u{201D}', '"'),  // ”
    ('\u{2019}', '\''), // ’
    ('\u{2018}', '`'),  // ‘
    ('\u{FFE5}', '\\'), // ￥
    ('\u{3000}', ' '),  // ideographic space
    ('\u{301C}', '~'),  // 〜
];

/// Fold a full-width form (U+FF01..U+FF5E) to ASCII, leave anything else alone.
#[inline]
pub fn shift_fullwidth(ch: char) -> char {
    match ch {
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(ch as u32 - FULLWIDTH_OFFSET).unwrap_or(ch),
        _ => ch,
    }
}

/// Map a hiragana vowel glyph to its romaji letter.
///
/// `shift` is the state of the shift key at the most recent key event; IMEs in
/// direct-kana mode emit あいうえお for the vowel keys, so the case is recovered
/// from the key event rather than the glyph.
pub fn fold_vowel(ch: char, shift: bool) -> Option<char> {
    let lower = match ch {
        'あ' => 'a',
        'い' => 'i',
        'う' => 'u',
        'え' => 'e',
        'お' => 'o',
        _ => return None,
    };
    Some(if shift { lower.to_ascii_uppercase() } else { lower })
}

fn fold_exception(ch: char) -> Option<char> {
    HALFWIDTH_EXCEPTIONS
        .iter()
        .find(|(from, _)| *from == ch)
        .map(|(_, to)| *to)
}

fn fold_digit(ch: char) -> Option<char> {
    let ch = match ch {
        '\u{FF10}'..='\u{FF19}' => shift_fullwidth(ch),
        _ => ch,
    };
    ch.is_ascii_digit().then_some(ch)
}

fn fold_letter(ch: char, shift: bool) -> Option<char> {
    if let Some(vowel) = fold_vowel(ch, shift) {
        return Some(vowel);
    }
    let ch = match ch {
        '\u{FF21}'..='\u{FF3A}' | '\u{FF41}'..='\u{FF5A}' => shift_fullwidth(ch),
        _ => ch,
    };
    ch.is_ascii_alphabetic().then_some(ch)
}

fn fold_printable(ch: char, shift: bool) -> Option<char> {
    if let Some(vowel) = fold_vowel(ch, shift) {
        return Some(vowel);
    }
    let ch = fold_exception(ch).unwrap_or_else(|| shift_fullwidth(ch));
    matches!(ch, ' '..='~').then_some(ch)
}

/// Fold a single character under `mode`.
///
/// Returns `None` when the character is dropped. [`NormalizationMode::Numeric`]
/// works on whole strings (sign placement depends on position), so here it only
/// reports whether a character can take part in a number.
pub fn fold_char(mode: NormalizationMode, ch: char, shift: bool) -> Option<char> {
    match mode {
        NormalizationMode::None => Some(ch),
        NormalizationMode::HalfWidthNumber => fold_digit(ch),
        NormalizationMode::HalfWidthAlphabet => fold_letter(ch, shift),
        NormalizationMode::HalfWidthAlphabetAndNumber => {
            fold_digit(ch).or_else(|| fold_letter(ch, shift))
        }
        NormalizationMode::HalfWidth => fold_printable(ch, shift),
        NormalizationMode::Numeric => fold_digit(ch).or_else(|| crate::numeric::fold_dash(ch)),
    }
}

/// Whether `ch` survives folding under `mode` (for either shift state).
pub fn is_accepted(mode: NormalizationMode, ch: char) -> bool {
    fold_char(mode, ch, false).is_some()
}

/// Normalize `text` for a field in `mode`.
///
/// Total and idempotent: `normalize(m, &normalize(m, s, k), k) == normalize(m, s, k)`.
pub fn normalize(mode: NormalizationMode, text: &str, shift: bool) -> String {
    match mode {
        NormalizationMode::None => text.to_string(),
        NormalizationMode::Numeric => crate::numeric::canonicalize_number(text),
        _ => text
            .chars()
            .filter_map(|ch| fold_char(mode, ch, shift))
            .collect(),
    }
}
