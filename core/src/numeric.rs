//! Signed-integer canonicalization for numeric fields.
//!
//! Values stay strings end to end. Range checks compare canonical integer
//! strings directly, so a pasted 40-digit number is clamped like any other
//! value instead of overflowing.

use std::cmp::Ordering;

use crate::width::shift_fullwidth;

/// Map a dash-like glyph to ASCII `-`.
///
/// Covers U+2010 HYPHEN, U+FF0D FULLWIDTH HYPHEN-MINUS, U+2015 HORIZONTAL BAR,
/// U+30FC KATAKANA-HIRAGANA PROLONGED SOUND MARK and U+2212 MINUS SIGN. Kana
/// keyboards produce ー for the minus key, which is why it is in the list.
pub fn fold_dash(ch: char) -> Option<char> {
    match ch {
        '-' | '\u{2010}' | '\u{FF0D}' | '\u{2015}' | '\u{30FC}' | '\u{2212}' => Some('-'),
        _ => None,
    }
}

/// Collapse a leading `0-` or `-0` into a bare sign until neither remains.
fn collapse_leading_sign(mut s: String) -> String {
    loop {
        if s.starts_with("0-") || s.starts_with("-0") {
            s.replace_range(..2, "-");
        } else {
            return s;
        }
    }
}

/// Drop leading zeros from a run of ASCII digits; `"000"` becomes `"0"`.
fn strip_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() && !digits.is_empty() {
        "0"
    } else {
        trimmed
    }
}

/// Turn arbitrary text into a canonical signed-integer string.
///
/// The result is one of `"0"`, `"-"`, `[1-9][0-9]*` or `-[1-9][0-9]*`. A lone
/// `"-"` is kept so the user can start typing a negative number; commit paths
/// call [`resolve_lone_sign`] afterwards.
///
/// ```
/// use fieldnorm_core::numeric::canonicalize_number;
///
/// assert_eq!(canonicalize_number("－１５"), "-15");
/// assert_eq!(canonicalize_number("012"), "12");
/// assert_eq!(canonicalize_number("-"), "-");
/// assert_eq!(canonicalize_number(""), "0");
/// ```
pub fn canonicalize_number(text: &str) -> String {
    let folded: String = text
        .chars()
        .map(shift_digit)
        .map(|ch| fold_dash(ch).unwrap_or(ch))
        .collect();

    let collapsed = collapse_leading_sign(folded);

    let mut negative = false;
    let mut digits = String::with_capacity(collapsed.len());
    for (i, ch) in collapsed
        .chars()
        .filter(|c| *c == '-' || c.is_ascii_digit())
        .enumerate()
    {
        match ch {
            '-' if i == 0 => negative = true,
            '-' => {}
            _ => digits.push(ch),
        }
    }

    // Stripping can expose a new "-0" prefix ("a-0" -> "-0").
    if negative {
        let trimmed = digits.trim_start_matches('0');
        let mut out = String::with_capacity(trimmed.len() + 1);
        out.push('-');
        out.push_str(trimmed);
        return out;
    }

    match strip_leading_zeros(&digits) {
        "" => "0".to_string(),
        s => s.to_string(),
    }
}

fn shift_digit(ch: char) -> char {
    match ch {
        '\u{FF10}'..='\u{FF19}' => shift_fullwidth(ch),
        _ => ch,
    }
}

/// Resolve the "about to type a negative number" placeholder at commit time.
pub fn resolve_lone_sign(value: &str) -> String {
    if value == "-" {
        "-1".to_string()
    } else {
        value.to_string()
    }
}

/// Whether `value` is a complete canonical integer (not a lone sign).
pub fn is_complete(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Compare two canonical integer strings numerically.
///
/// Both sides must be complete canonical integers (see [`is_complete`]);
/// anything else compares by its canonical form.
pub fn compare_integers(a: &str, b: &str) -> Ordering {
    let (a_neg, a_abs) = split_sign(a);
    let (b_neg, b_abs) = split_sign(b);
    match (a_neg, b_neg) {
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        (false, false) => compare_magnitudes(a_abs, b_abs),
        (true, true) => compare_magnitudes(b_abs, a_abs),
    }
}

fn split_sign(value: &str) -> (bool, &str) {
    match value.strip_prefix('-') {
        Some(abs) => (true, abs),
        None => (false, value),
    }
}

fn compare_magnitudes(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Clamp a canonical integer into `[min, max]`.
///
/// Missing bounds are open. When `min > max` the lower bound wins, matching the
/// order in which the checks run.
pub fn clamp_integer(value: &str, min: Option<&str>, max: Option<&str>) -> String {
    if let Some(max) = max {
        if compare_integers(value, max) == Ordering::Greater {
            return clamp_integer(max, min, None);
        }
    }
    if let Some(min) = min {
        if compare_integers(value, min) == Ordering::Less {
            return min.to_string();
        }
    }
    value.to_string()
}

/// Parse a canonical integer, saturating at the `i64` range.
///
/// A lone sign or an empty string reads as zero.
pub fn parse_integer(value: &str) -> i64 {
    let (negative, digits) = split_sign(value);
    let mut acc: i64 = 0;
    for b in digits.bytes().filter(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        acc = if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        };
    }
    acc
}

/// Add `delta` to a canonical integer and return the canonical result.
///
/// Works on the digit strings, so values of any length step exactly. A lone
/// sign or an empty string reads as zero.
pub fn step_integer(value: &str, delta: i64) -> String {
    let (negative, digits) = split_sign(value);
    let digits = strip_leading_zeros(digits);
    let digits = if digits.is_empty() { "0" } else { digits };
    let step = delta.unsigned_abs().to_string();
    let step_negative = delta < 0;

    let (result_negative, magnitude) = if negative == step_negative {
        (negative, add_magnitudes(digits, &step))
    } else {
        match compare_magnitudes(digits, &step) {
            Ordering::Less => (step_negative, sub_magnitudes(&step, digits)),
            _ => (negative, sub_magnitudes(digits, &step)),
        }
    };

    if magnitude == "0" || !result_negative {
        magnitude
    } else {
        format!("-{}", magnitude)
    }
}

fn add_magnitudes(a: &str, b: &str) -> String {
    let mut a = a.bytes().rev();
    let mut b = b.bytes().rev();
    let mut out = Vec::new();
    let mut carry = 0;
    loop {
        let (x, y) = (a.next(), b.next());
        if x.is_none() && y.is_none() {
            break;
        }
        let sum = x.map_or(0, |d| d - b'0') + y.map_or(0, |d| d - b'0') + carry;
        out.push(b'0' + sum % 10);
        carry = sum / 10;
    }
    if carry > 0 {
        out.push(b'0' + carry);
    }
    out.iter().rev().map(|&d| char::from(d)).collect()
}

/// `a - b` for magnitudes with `a >= b`.
fn sub_magnitudes(a: &str, b: &str) -> String {
    let mut b = b.bytes().rev();
    let mut out = Vec::new();
    let mut borrow = 0;
    for x in a.bytes().rev() {
        let y = b.next().map_or(0, |d| d - b'0') + borrow;
        let x = x - b'0';
        if x < y {
            out.push(b'0' + x + 10 - y);
            borrow = 1;
        } else {
            out.push(b'0' + x - y);
            borrow = 0;
        }
    }
    let digits: String = out.iter().rev().map(|&d| char::from(d)).collect();
    strip_leading_zeros(&digits).to_string()
}
