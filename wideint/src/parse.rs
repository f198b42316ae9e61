//! Text to [`Int128`] conversion.
//!
//! The lenient constructors never fail: characters outside of the digit set are
//! skipped and an input without any digit yields zero. This tolerance can hide
//! malformed input, callers needing validation should go through the
//! [`FromStr`] implementation which rejects it, or validate beforehand.

use std::str::FromStr;

use crate::algorithms;
use crate::error::{Error, ErrorKind};
use crate::Int128;

const HEX_RADIX: u32 = 16;
const DECIMAL_RADIX: u32 = 10;

/// Splits a single leading `-` off the input.
fn split_sign(s: &str) -> (bool, &str) {
    match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    }
}

fn strip_hex_prefix(s: &str) -> Option<&str> {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
}

/// Accumulates the digits of `digits` most significant first.
///
/// Returns the unsigned magnitude and the number of characters skipped.
fn accumulate(digits: &str, radix: u32) -> ((i64, u64), usize) {
    let mut value = (0i64, 0u64);
    let mut skipped = 0usize;

    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            skipped += 1;
            continue;
        };
        value = if radix == HEX_RADIX {
            algorithms::shl4_or_nibble(value, digit as u8)
        } else {
            algorithms::mul10_add_digit(value, digit as u8)
        };
    }

    (value, skipped)
}

fn parse_magnitude(input: &str, negative: bool, digits: &str, radix: u32) -> Int128 {
    let (magnitude, skipped) = accumulate(digits, radix);
    if skipped > 0 {
        log::debug!("skipped {skipped} non digit character(s) while parsing {input:?}");
    }

    let magnitude = Int128::from(magnitude);
    if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    }
}

impl Int128 {
    /// Parses a decimal string with an optional leading `-`.
    ///
    /// Non digit characters are skipped and an input with no digit yields zero.
    /// Values wider than 128 bits wrap around.
    ///
    /// ```rust
    /// use wideint::Int128;
    ///
    /// assert_eq!(Int128::from_decimal_str("-1,000"), Int128::from_i64(-1000));
    /// assert_eq!(Int128::from_decimal_str(""), Int128::ZERO);
    /// ```
    pub fn from_decimal_str(s: &str) -> Self {
        let (negative, digits) = split_sign(s);
        parse_magnitude(s, negative, digits, DECIMAL_RADIX)
    }

    /// Parses a hexadecimal string with an optional leading `-` and an optional
    /// `0x`/`0X` prefix after the sign.
    ///
    /// Digits are case insensitive, other characters are skipped.
    pub fn from_hex_str(s: &str) -> Self {
        let (negative, unsigned) = split_sign(s);
        let digits = strip_hex_prefix(unsigned).unwrap_or(unsigned);
        parse_magnitude(s, negative, digits, HEX_RADIX)
    }

    /// Parses either base, picking hexadecimal when a `0x`/`0X` prefix directly
    /// follows the optional sign and decimal otherwise.
    ///
    /// A bare prefix (`"0x"`, `"-0X"`) holds no digit and yields zero.
    ///
    /// ```rust
    /// use wideint::Int128;
    ///
    /// assert_eq!(Int128::from_str_lenient("-0xff"), Int128::from_i64(-255));
    /// assert_eq!(Int128::from_str_lenient("255"), Int128::from_i64(255));
    /// assert_eq!(Int128::from_str_lenient("0x"), Int128::ZERO);
    /// ```
    pub fn from_str_lenient(s: &str) -> Self {
        let (negative, unsigned) = split_sign(s);
        match strip_hex_prefix(unsigned) {
            Some(digits) => parse_magnitude(s, negative, digits, HEX_RADIX),
            None => parse_magnitude(s, negative, unsigned, DECIMAL_RADIX),
        }
    }

    /// Parses the grammar accepted by [`Int128::from_str_lenient`] but rejects
    /// anything it would have skipped.
    ///
    /// On success the result is the same as the lenient one, including the
    /// wrap around of values wider than 128 bits.
    pub fn from_str_strict(s: &str) -> Result<Self, Error> {
        if s.is_empty() {
            return Err(ErrorKind::Empty.into());
        }

        let (negative, unsigned) = split_sign(s);
        let (digits, radix) = match strip_hex_prefix(unsigned) {
            Some(digits) => (digits, HEX_RADIX),
            None => (unsigned, DECIMAL_RADIX),
        };

        if digits.is_empty() {
            return Err(ErrorKind::MissingDigits.into());
        }

        let offset = s.len() - digits.len();
        if let Some((index, character)) = digits.char_indices().find(|(_, c)| !c.is_digit(radix))
        {
            return Err(ErrorKind::InvalidDigit {
                index: offset + index,
                character,
            }
            .into());
        }

        Ok(parse_magnitude(s, negative, digits, radix))
    }
}

impl FromStr for Int128 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_strict(s)
    }
}

impl<'a> From<&'a str> for Int128 {
    fn from(s: &'a str) -> Self {
        Self::from_str_lenient(s)
    }
}
