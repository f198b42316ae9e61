use crate::algorithms;

/// A signed 128-bit integer stored as two 64-bit words.
///
/// The represented value is `high * 2^64 + low` in two's complement, so every
/// bit pattern is a valid value and each value has exactly one encoding.
/// Equality therefore compares the words directly.
///
/// Arithmetic wraps modulo 2^128 and never reports overflow. Checked variants
/// would be a behaviour changing extension and are not provided.
// Little endian order: low word first
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Int128 {
    low: u64,
    high: i64,
}

impl Int128 {
    pub const BITS: u32 = 128;
    pub const ZERO: Self = Self::from_parts(0, 0);
    pub const ONE: Self = Self::from_parts(0, 1);
    pub const MIN: Self = Self::from_parts(i64::MIN, 0);
    pub const MAX: Self = Self::from_parts(i64::MAX, u64::MAX);

    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Sign extends `value` into the high word.
    pub const fn from_i64(value: i64) -> Self {
        let high = if value < 0 { -1 } else { 0 };
        Self::from_parts(high, value as u64)
    }

    /// Builds a value from its two words, the low word bits being reinterpreted
    /// as unsigned.
    ///
    /// ```rust
    /// use wideint::Int128;
    ///
    /// // -50
    /// let a = Int128::from_words(-1, -50);
    /// assert_eq!(a, Int128::from_i64(-50));
    /// ```
    pub const fn from_words(high: i64, low: i64) -> Self {
        Self::from_parts(high, low as u64)
    }

    pub const fn from_parts(high: i64, low: u64) -> Self {
        Self { low, high }
    }

    #[inline]
    pub const fn high(self) -> i64 {
        self.high
    }

    #[inline]
    pub const fn low(self) -> u64 {
        self.low
    }

    /// Returns the `(high, low)` words
    #[inline]
    pub const fn words(self) -> (i64, u64) {
        (self.high, self.low)
    }

    pub const fn is_zero(self) -> bool {
        self.high == 0 && self.low == 0
    }

    pub const fn is_negative(self) -> bool {
        self.high < 0
    }

    /// Adds `rhs`, wrapping around at the boundary of the type.
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        let (high, low) = algorithms::add_words(self.words(), rhs.words());
        Self::from_parts(high, low)
    }

    /// Subtracts `rhs`, wrapping around at the boundary of the type.
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        let (high, low) = algorithms::sub_words(self.words(), rhs.words());
        Self::from_parts(high, low)
    }

    /// Two's complement negation: complement both words then add one.
    ///
    /// [`Int128::MIN`] is its own negation.
    pub const fn wrapping_neg(self) -> Self {
        let (high, low) = algorithms::complement_words(self.words());
        Self::from_parts(high, low).wrapping_add(Self::ONE)
    }
}

#[cfg(test)]
impl Int128 {
    pub(crate) fn from_native(value: i128) -> Self {
        Self::from_parts((value >> 64) as i64, value as u64)
    }

    pub(crate) fn to_native(self) -> i128 {
        ((self.high as i128) << 64) | self.low as i128
    }
}

#[cfg(test)]
impl rand::distributions::Distribution<Int128> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Int128 {
        Int128::from_parts(rng.gen::<i64>(), rng.gen::<u64>())
    }
}

impl std::ops::Add<Self> for Int128 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

impl std::ops::AddAssign<Self> for Int128 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::Sub<Self> for Int128 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.wrapping_sub(rhs)
    }
}

impl std::ops::SubAssign<Self> for Int128 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl std::ops::Neg for Int128 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}

impl std::iter::Sum for Int128 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl From<(i64, u64)> for Int128 {
    fn from(value: (i64, u64)) -> Self {
        Self::from_parts(value.0, value.1)
    }
}

impl From<Int128> for (i64, u64) {
    fn from(value: Int128) -> Self {
        value.words()
    }
}

impl From<i64> for Int128 {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<i32> for Int128 {
    fn from(value: i32) -> Self {
        Self::from_i64(value as i64)
    }
}

impl From<i16> for Int128 {
    fn from(value: i16) -> Self {
        Self::from_i64(value as i64)
    }
}

impl From<i8> for Int128 {
    fn from(value: i8) -> Self {
        Self::from_i64(value as i64)
    }
}

impl From<u64> for Int128 {
    fn from(value: u64) -> Self {
        Self::from_parts(0, value)
    }
}

impl From<u32> for Int128 {
    fn from(value: u32) -> Self {
        Self::from(value as u64)
    }
}

impl From<u16> for Int128 {
    fn from(value: u16) -> Self {
        Self::from(value as u64)
    }
}

impl From<u8> for Int128 {
    fn from(value: u8) -> Self {
        Self::from(value as u64)
    }
}

impl From<bool> for Int128 {
    fn from(input: bool) -> Self {
        Self::from(if input { 1u64 } else { 0u64 })
    }
}

// SAFETY
//
// Int128 is allowed to be all zeros
unsafe impl bytemuck::Zeroable for Int128 {}

// SAFETY
//
// u64 and i64 impl bytemuck::Pod and Int128 is repr(C) with two 8 bytes
// fields, so it has no padding.
//
// https://docs.rs/bytemuck/latest/bytemuck/trait.Pod.html#foreign-impls
//
// Thus Int128 can safely be considered Pod
unsafe impl bytemuck::Pod for Int128 {}
