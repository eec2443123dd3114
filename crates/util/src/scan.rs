//! Lenient fixed-width integer scanning.
//!
//! Reads a run of integer fields separated by literal text, the way a
//! `"%02d:%02d:%02d"` scan format does, but never fails: scanning stops at the
//! first thing that does not match and every field not reached stays `0`.

/// One integer field of a scan pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanField {
    /// Literal text that must precede the field. Empty for the first field.
    pub literal: &'static str,
    /// Maximum number of characters (sign included) the field may consume.
    pub width: usize,
}

impl ScanField {
    pub const fn new(literal: &'static str, width: usize) -> Self {
        Self { literal, width }
    }
}

/// Scan `input` against `fields`, returning one value per field.
///
/// Rules:
/// - the literal before each field must match exactly, otherwise scanning stops;
/// - ASCII spaces before a field's digits are skipped;
/// - a field reads an optional `+`/`-` and then digits, up to `width` characters;
/// - a field with no digits stops scanning;
/// - fields that were not scanned are `0`, and trailing input is ignored.
///
/// # Examples
///
/// ```
/// use ormtypes_util::scan::{scan_fixed_ints, ScanField};
///
/// const HM: [ScanField; 2] = [ScanField::new("", 2), ScanField::new(":", 2)];
///
/// assert_eq!(scan_fixed_ints("07:15", &HM), [7, 15]);
/// assert_eq!(scan_fixed_ints("7", &HM), [7, 0]);
/// assert_eq!(scan_fixed_ints("garbage", &HM), [0, 0]);
/// ```
pub fn scan_fixed_ints<const N: usize>(input: &str, fields: &[ScanField; N]) -> [i64; N] {
    let mut out = [0i64; N];
    let mut rest = input.as_bytes();
    for (slot, field) in out.iter_mut().zip(fields.iter()) {
        match rest.strip_prefix(field.literal.as_bytes()) {
            Some(after) => rest = after,
            None => break,
        }
        match scan_int(rest, field.width) {
            Some((value, consumed)) => {
                *slot = value;
                rest = &rest[consumed..];
            }
            None => break,
        }
    }
    out
}

/// Reads one integer of at most `width` characters from the start of `input`.
///
/// Returns the value and the number of bytes consumed, spaces included.
fn scan_int(input: &[u8], width: usize) -> Option<(i64, usize)> {
    let skipped = input.iter().take_while(|b| **b == b' ').count();
    let field = &input[skipped..];
    let limit = field.len().min(width);

    let mut pos = 0;
    let mut negative = false;
    if let Some(sign @ (b'+' | b'-')) = field.first().copied() {
        if limit == 0 {
            return None;
        }
        negative = sign == b'-';
        pos = 1;
    }

    let digits_start = pos;
    let mut value: i64 = 0;
    while pos < limit && field[pos].is_ascii_digit() {
        value = value
            .wrapping_mul(10)
            .wrapping_add(i64::from(field[pos] - b'0'));
        pos += 1;
    }
    if pos == digits_start {
        return None;
    }

    let value = if negative { value.wrapping_neg() } else { value };
    Some((value, skipped + pos))
}
