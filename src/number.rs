//! Shortest-form rewriting of decimal number literals.
//!
//! [`number`] takes a literal that a lexer has already recognised as a number
//! (`[+-]digits[.digits][(e|E)[+-]digits]`) and rewrites it inside the same
//! buffer to the shortest literal with the identical value:
//!
//! | Input      | Output    |
//! |------------|-----------|
//! | `+1.50`    | `1.5`     |
//! | `-0.0`     | `0`       |
//! | `0.0123`   | `.0123`   |
//! | `0.00012`  | `12e-5`   |
//! | `1000`     | `1e3`     |
//! | `1.5e1`    | `15`      |
//!
//! The mantissa is normalised to its significant digits and an integer
//! exponent, then emitted in whichever of fixed-point or scientific notation is
//! shorter. An exponent of `2` or a relative exponent of `-2` stays fixed-point.
//!
//! ## Examples
//!
//! ```rust
//! use minify_common::number;
//!
//! let mut buf = *b"-000.250e+3";
//! assert_eq!(number(&mut buf), b"-250");
//! ```

use std::ops::Range;
use tracing::trace;

const ZERO: &[u8] = b"0";

/// Rewrites a numeric literal in place and returns its shortest form.
///
/// The returned slice is either a sub-slice of `num` or the static canonical
/// zero `"0"`. It is never longer than the input. If the exponent cannot be
/// parsed as a 64-bit integer the input is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use minify_common::number;
///
/// let mut buf = b"10.00".to_vec();
/// assert_eq!(number(&mut buf), b"10");
///
/// let mut buf = b"0.0001".to_vec();
/// assert_eq!(number(&mut buf), b"1e-4");
/// ```
pub fn number(num: &mut [u8]) -> &[u8] {
    match canonicalize(num) {
        Canonical::Zero => ZERO,
        Canonical::Window(range) => &num[range],
    }
}

/// Canonicalizes an owned literal, moving the result to the front of the buffer.
///
/// ```rust
/// use minify_common::number::number_owned;
///
/// assert_eq!(number_owned(b"+0.50".to_vec()), b".5");
/// ```
pub fn number_owned(mut num: Vec<u8>) -> Vec<u8> {
    match canonicalize(&mut num) {
        Canonical::Zero => {
            num.clear();
            num.extend_from_slice(ZERO);
        }
        Canonical::Window(range) => {
            let len = range.len();
            num.copy_within(range, 0);
            num.truncate(len);
        }
    }
    num
}

/// Result of canonicalization: a window into the input buffer, or zero.
enum Canonical {
    Zero,
    Window(Range<usize>),
}

fn canonicalize(buf: &mut [u8]) -> Canonical {
    let len = buf.len();

    // a leading '+' is never emitted
    let offset = usize::from(buf.first() == Some(&b'+'));
    let num = &mut buf[offset..];

    let negative = num.first() == Some(&b'-');
    let mut start = usize::from(negative);

    let Some((dot, mut end, mut exp)) = scan(num) else {
        trace!(literal = ?String::from_utf8_lossy(num), "unparsable exponent, keeping literal");
        return Canonical::Window(0..len);
    };
    let dot = dot.unwrap_or(end);

    while start < end && num[start] == b'0' {
        start += 1;
    }
    if dot < end {
        let mut i = end - 1;
        while i > dot && num[i] == b'0' {
            i -= 1;
        }
        end = if i == dot { dot } else { i + 1 };
    }
    if start == end {
        return Canonical::Zero;
    }

    // fold integer trailing zeros or the fractional digits into the exponent
    if end == dot {
        if let Some(last) = num[start..end].iter().rposition(|&c| c != b'0') {
            let last = start + last;
            let Some(folded) = exp.checked_add((end - last - 1) as i64) else {
                return Canonical::Window(0..len);
            };
            exp = folded;
            end = last + 1;
        }
    } else {
        let Some(folded) = exp.checked_sub((end - dot - 1) as i64) else {
            return Canonical::Window(0..len);
        };
        exp = folded;
        if start == dot {
            if let Some(first) = num[dot + 1..end].iter().position(|&c| c != b'0') {
                let first = dot + 1 + first;
                num.copy_within(first..end, dot);
                end -= first - dot;
            }
        } else {
            num.copy_within(dot + 1..end, dot);
            end -= 1;
        }
    }

    // only the mantissa digits [start, end) remain, value is digits * 10^exp
    let Some(rel_exp) = exp.checked_add((end - start) as i64) else {
        return Canonical::Window(0..len);
    };
    if exp == 0 {
        // mantissa is already the shortest form
    } else if rel_exp < -2 || exp > 2 {
        num[end] = b'e';
        end += 1;
        if exp < 0 {
            num[end] = b'-';
            end += 1;
        }
        end += write_decimal(&mut num[end..], exp.unsigned_abs());
    } else if exp < 0 {
        if rel_exp > 0 {
            let point = start + rel_exp as usize;
            num.copy_within(point..end, point + 1);
            num[point] = b'.';
            end += 1;
        } else {
            let zeros = (-rel_exp) as usize;
            num.copy_within(start..end, start + zeros + 1);
            num[start] = b'.';
            num[start + 1..start + zeros + 1].fill(b'0');
            end += zeros + 1;
        }
    } else {
        let zeros = exp as usize;
        num[end..end + zeros].fill(b'0');
        end += zeros;
    }

    if negative {
        start -= 1;
        num[start] = b'-';
    }
    Canonical::Window(offset + start..offset + end)
}

/// Locates the decimal point and the exponent marker.
///
/// Returns the dot index, the index where the mantissa ends and the parsed
/// exponent, or `None` when the exponent digits are malformed.
fn scan(num: &[u8]) -> Option<(Option<usize>, usize, i64)> {
    let mut dot = None;
    for (i, &c) in num.iter().enumerate() {
        match c {
            b'.' => dot = Some(i),
            b'e' | b'E' => return parse_exponent(&num[i + 1..]).map(|exp| (dot, i, exp)),
            _ => {}
        }
    }
    Some((dot, num.len(), 0))
}

fn parse_exponent(b: &[u8]) -> Option<i64> {
    let (negative, digits) = match b.split_first() {
        Some((b'+', rest)) => (false, rest),
        Some((b'-', rest)) => (true, rest),
        _ => (false, b),
    };
    if digits.is_empty() {
        return None;
    }
    let mut n: i64 = 0;
    for &c in digits {
        if !c.is_ascii_digit() {
            return None;
        }
        n = n.checked_mul(10)?.checked_add(i64::from(c - b'0'))?;
    }
    Some(if negative { -n } else { n })
}

/// Writes `n` in decimal without leading zeros and returns the digit count.
fn write_decimal(out: &mut [u8], mut n: u64) -> usize {
    let mut width = 1;
    let mut rest = n / 10;
    while rest > 0 {
        width += 1;
        rest /= 10;
    }
    for slot in out[..width].iter_mut().rev() {
        *slot = b'0' + (n % 10) as u8;
        n /= 10;
    }
    width
}
