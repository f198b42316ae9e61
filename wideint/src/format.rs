use std::fmt::{Display, Formatter};

use crate::algorithms;
use crate::Int128;

// Enough for the 39 digits of 2^127
const MAX_DECIMAL_DIGITS: usize = 39;

impl Int128 {
    /// Decimal digits of the absolute value, most significant first.
    ///
    /// The magnitude is read as an unsigned 128-bit value so that the
    /// negation of [`Int128::MIN`], which is itself, still yields 2^127.
    fn magnitude_digits(self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let magnitude = if self.is_negative() {
            self.wrapping_neg()
        } else {
            self
        };

        let mut high = magnitude.high() as u64;
        let mut low = magnitude.low();
        let mut digits = Vec::with_capacity(MAX_DECIMAL_DIGITS);
        while high != 0 || low != 0 {
            let ((high_quotient, low_quotient), rem) = algorithms::div_rem_by_u32(high, low, 10);
            digits.push(char::from(b'0' + rem as u8));
            high = high_quotient;
            low = low_quotient;
        }

        digits.iter().rev().collect()
    }

    /// Formats the value in decimal, with a `-` prefix if it is negative.
    ///
    /// ```rust
    /// use wideint::Int128;
    ///
    /// assert_eq!(Int128::from_words(1, 0).to_decimal_string(), "18446744073709551616");
    /// assert_eq!(Int128::from_i64(-42).to_decimal_string(), "-42");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        self.to_string()
    }
}

impl Display for Int128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_digits())
    }
}
