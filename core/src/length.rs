//! Max-length checks for pending keystrokes.
//!
//! Lengths and selection offsets count Unicode scalar values, so a full-width
//! character and an ASCII character each take one slot. Browsers report
//! `selectionStart`/`selectionEnd` in UTF-16 code units; convert those with
//! [`Selection::from_utf16`] before building a keydown event.

use serde::{Deserialize, Serialize};

/// A text selection inside the field, as character (scalar value) offsets.
///
/// The range is always normalized such that `start <= end`. An emoji outside
/// the BMP is one character here but two UTF-16 code units in a DOM selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
}

impl Selection {
    /// Create a new selection; the ends may be given in either order.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A collapsed selection (plain caret) at `pos`.
    #[inline]
    pub fn caret(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    /// Build a selection from UTF-16 code-unit offsets into `text`.
    ///
    /// An offset inside a surrogate pair rounds up to the end of that
    /// character; offsets past the end clamp to the text length.
    pub fn from_utf16(text: &str, a: usize, b: usize) -> Self {
        Self::new(utf16_to_char_offset(text, a), utf16_to_char_offset(text, b))
    }

    /// Number of characters a keystroke would overwrite.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if nothing is selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

fn utf16_to_char_offset(text: &str, offset: usize) -> usize {
    let mut units = 0;
    for (index, ch) in text.chars().enumerate() {
        if units >= offset {
            return index;
        }
        units += ch.len_utf16();
    }
    text.chars().count()
}

/// Resolve a configured `maxLength` into an effective limit.
///
/// Negative values mean "no limit", the same as an unset `maxlength`
/// attribute.
pub fn effective_limit(max_length: Option<i32>) -> Option<usize> {
    max_length.and_then(|n| usize::try_from(n).ok())
}

/// Whether inserting one more character would exceed `max_length`.
///
/// Characters covered by `selection` are replaced by the keystroke, so they do
/// not count against the limit.
pub fn would_overflow(current: &str, selection: Option<Selection>, max_length: Option<i32>) -> bool {
    let Some(limit) = effective_limit(max_length) else {
        return false;
    };
    let overwrite = selection.map(|s| s.len()).unwrap_or(0);
    current.chars().count().saturating_sub(overwrite) >= limit
}

/// Cut `text` down to `max_length` characters.
///
/// Keystrokes are vetoed before they land, but pasted text and IME commits
/// arrive whole and are trimmed here instead.
pub fn truncate_to_max_length(text: &str, max_length: Option<i32>) -> String {
    match effective_limit(max_length) {
        Some(limit) => text.chars().take(limit).collect(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_normalizes() {
        let sel = Selection::new(5, 2);
        assert_eq!(sel.start, 2);
        assert_eq!(sel.end, 5);
        assert_eq!(sel.len(), 3);
        assert!(Selection::caret(4).is_empty());
    }

    #[test]
    fn selection_from_utf16_offsets() {
        // U+1F600 takes two UTF-16 code units
        let text = "a\u{1F600}b";
        assert_eq!(Selection::from_utf16(text, 1, 3), Selection::new(1, 2));
        assert_eq!(Selection::from_utf16(text, 4, 0), Selection::new(0, 3));
        assert_eq!(Selection::from_utf16(text, 2, 2), Selection::caret(2));
        assert_eq!(Selection::from_utf16(text, 9, 9), Selection::caret(3));
        assert_eq!(Selection::from_utf16("あい", 1, 2), Selection::new(1, 2));
    }

    #[test]
    fn emoji_selection_frees_one_slot() {
        let text = "a\u{1F600}b";
        let sel = Selection::from_utf16(text, 1, 3);
        assert!(!would_overflow(text, Some(sel), Some(3)));
        assert!(would_overflow(text, Some(Selection::from_utf16(text, 1, 1)), Some(3)));
    }

    #[test]
    fn overflow_at_limit() {
        assert!(would_overflow("abc", None, Some(3)));
        assert!(!would_overflow("ab", None, Some(3)));
        assert!(!would_overflow("abc", None, None));
    }

    #[test]
    fn selection_frees_room() {
        assert!(!would_overflow("abc", Some(Selection::new(1, 2)), Some(3)));
        assert!(would_overflow("abc", Some(Selection::caret(1)), Some(3)));
        assert!(!would_overflow("abcd", Some(Selection::new(0, 4)), Some(3)));
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert!(!would_overflow("あい", None, Some(3)));
        assert!(would_overflow("あいう", None, Some(3)));
    }

    #[test]
    fn zero_and_negative_limits() {
        assert!(would_overflow("", None, Some(0)));
        assert!(!would_overflow("anything", None, Some(-1)));
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate_to_max_length("あいうえお", Some(3)), "あいう");
        assert_eq!(truncate_to_max_length("ab", Some(3)), "ab");
        assert_eq!(truncate_to_max_length("abcdef", None), "abcdef");
        assert_eq!(truncate_to_max_length("abcdef", Some(-1)), "abcdef");
    }
}
