//! Word level building blocks for [`Int128`](crate::Int128).
//!
//! A value is handled as a `(high, low)` pair where `high` is the signed most
//! significant word and `low` the unsigned least significant word. Only 64-bit
//! operations are used here, the crate never relies on a native 128-bit integer.

/// Adds two word pairs, wrapping modulo 2^128.
///
/// The carry out of the low word is detected by the wrapped sum being smaller
/// than the left hand side low word.
#[inline]
pub(crate) const fn add_words(lhs: (i64, u64), rhs: (i64, u64)) -> (i64, u64) {
    let low = lhs.1.wrapping_add(rhs.1);
    let mut high = lhs.0.wrapping_add(rhs.0);
    if low < lhs.1 {
        high = high.wrapping_add(1);
    }
    (high, low)
}

/// Subtracts `rhs` from `lhs`, wrapping modulo 2^128.
///
/// A borrow is taken from the high word when the left hand side low word is
/// smaller than the right hand side one.
#[inline]
pub(crate) const fn sub_words(lhs: (i64, u64), rhs: (i64, u64)) -> (i64, u64) {
    let low = lhs.1.wrapping_sub(rhs.1);
    let mut high = lhs.0.wrapping_sub(rhs.0);
    if lhs.1 < rhs.1 {
        high = high.wrapping_sub(1);
    }
    (high, low)
}

#[inline]
pub(crate) const fn complement_words(value: (i64, u64)) -> (i64, u64) {
    (!value.0, !value.1)
}

/// Computes `value * 10 + digit`, discarding bits shifted past the 128-bit boundary.
///
/// Both products are computed as `(x << 3) + (x << 1)`. The bits leaving the low
/// word through each shift and the carry of their sum are gathered and added to
/// the high word, as is the carry produced by adding the digit.
#[inline]
pub(crate) const fn mul10_add_digit(value: (i64, u64), digit: u8) -> (i64, u64) {
    let (high, low) = value;

    let low_times_8 = low << 3;
    let low_times_2 = low << 1;
    let (low_times_10, add_carry) = low_times_8.overflowing_add(low_times_2);
    // At most 7 + 1 + 1
    let carry = (low >> 61) + (low >> 63) + add_carry as u64;

    let high_times_10 = (high << 3)
        .wrapping_add(high << 1)
        .wrapping_add(carry as i64);

    let (new_low, digit_carry) = low_times_10.overflowing_add(digit as u64);
    let new_high = high_times_10.wrapping_add(digit_carry as i64);

    (new_high, new_low)
}

/// Shifts the value left by one nibble and places `nibble` in the freed bits.
///
/// The top four bits of the low word move into the bottom of the high word, the
/// top four bits of the high word are lost.
#[inline]
pub(crate) const fn shl4_or_nibble(value: (i64, u64), nibble: u8) -> (i64, u64) {
    let (high, low) = value;
    let new_high = (high << 4) | (low >> 60) as i64;
    let new_low = (low << 4) | (nibble & 0xF) as u64;
    (new_high, new_low)
}

/// Divides the unsigned 128-bit value `(high, low)` by a non zero `divisor`.
///
/// Returns the quotient words and the remainder. The remainder of the high word
/// division is combined with the low word one 32-bit half at a time, so every
/// intermediate dividend is smaller than `divisor * 2^32` and fits in a `u64`.
///
/// # Panics
///
/// Panics if `divisor` is zero.
#[inline]
pub(crate) const fn div_rem_by_u32(high: u64, low: u64, divisor: u32) -> ((u64, u64), u32) {
    let divisor = divisor as u64;

    let high_quotient = high / divisor;
    let rem = high % divisor;

    let upper = (rem << 32) | (low >> 32);
    let upper_quotient = upper / divisor;
    let rem = upper % divisor;

    let lower = (rem << 32) | (low & 0xFFFF_FFFF);
    let lower_quotient = lower / divisor;
    let rem = lower % divisor;

    let low_quotient = (upper_quotient << 32) | lower_quotient;

    ((high_quotient, low_quotient), rem as u32)
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    fn to_native(value: (i64, u64)) -> i128 {
        ((value.0 as i128) << 64) | value.1 as i128
    }

    fn from_native(value: i128) -> (i64, u64) {
        ((value >> 64) as i64, value as u64)
    }

    #[test]
    fn test_add_words_carry() {
        assert_eq!(add_words((0, u64::MAX), (0, 1)), (1, 0));
        assert_eq!(add_words((-1, u64::MAX), (0, 1)), (0, 0));
        assert_eq!(add_words((i64::MAX, u64::MAX), (0, 1)), (i64::MIN, 0));
    }

    #[test]
    fn test_sub_words_borrow() {
        assert_eq!(sub_words((1, 0), (0, 1)), (0, u64::MAX));
        assert_eq!(sub_words((0, 0), (0, 1)), (-1, u64::MAX));
        assert_eq!(sub_words((i64::MIN, 0), (0, 1)), (i64::MAX, u64::MAX));
    }

    #[test]
    fn test_add_sub_words_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let a = rng.gen::<i128>();
            let b = rng.gen::<i128>();

            let sum = add_words(from_native(a), from_native(b));
            assert_eq!(to_native(sum), a.wrapping_add(b));

            let diff = sub_words(from_native(a), from_native(b));
            assert_eq!(to_native(diff), a.wrapping_sub(b));
        }
    }

    #[test]
    fn test_complement_words() {
        assert_eq!(complement_words((0, 0)), (-1, u64::MAX));
        assert_eq!(complement_words((-1, u64::MAX)), (0, 0));
    }

    #[test]
    fn test_mul10_add_digit() {
        assert_eq!(mul10_add_digit((0, 0), 7), (0, 7));
        assert_eq!(mul10_add_digit((0, 12), 3), (0, 123));

        // Every shift and the sum carry into the high word
        let expected = from_native((u64::MAX as i128) * 10 + 9);
        assert_eq!(mul10_add_digit((0, u64::MAX), 9), expected);

        // Adding the digit alone overflows the low word
        let value = from_native((u64::MAX as i128 - 5) / 10);
        let expected = from_native((u64::MAX as i128 - 5) / 10 * 10 + 9);
        assert_eq!(mul10_add_digit(value, 9), expected);

        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let a = rng.gen::<i128>();
            let digit = rng.gen_range(0..10u8);
            let res = mul10_add_digit(from_native(a), digit);
            let expected = a.wrapping_mul(10).wrapping_add(digit as i128);
            assert_eq!(to_native(res), expected);
        }
    }

    #[test]
    fn test_shl4_or_nibble() {
        assert_eq!(shl4_or_nibble((0, 0), 0xA), (0, 0xA));
        assert_eq!(shl4_or_nibble((0, 0xF << 60), 0), (0xF, 0));
        assert_eq!(shl4_or_nibble((-1, 0), 0), (-16, 0));

        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let a = rng.gen::<u128>();
            let nibble = rng.gen_range(0..16u8);
            let res = shl4_or_nibble(from_native(a as i128), nibble);
            let expected = (a << 4) | nibble as u128;
            assert_eq!(to_native(res) as u128, expected);
        }
    }

    #[test]
    fn test_div_rem_by_u32() {
        assert_eq!(div_rem_by_u32(0, 0, 10), ((0, 0), 0));
        assert_eq!(div_rem_by_u32(0, 123, 10), ((0, 12), 3));
        assert_eq!(div_rem_by_u32(1, 0, 10), ((0, 1844674407370955161), 6));

        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let a = rng.gen::<u128>();
            let divisor = rng.gen_range(1..=u32::MAX);
            let ((high, low), rem) = div_rem_by_u32((a >> 64) as u64, a as u64, divisor);
            let quotient = ((high as u128) << 64) | low as u128;
            assert_eq!(quotient, a / divisor as u128);
            assert_eq!(rem as u128, a % divisor as u128);
        }
    }

    #[test]
    #[should_panic]
    fn test_div_rem_by_zero() {
        let _ = div_rem_by_u32(1, 1, std::hint::black_box(0));
    }
}
