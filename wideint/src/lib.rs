//! # Description
//! wideint provides [`Int128`], a signed 128-bit integer composed of two 64-bit words,
//! for targets and toolchains where a native 128-bit integer is not available.
//!
//! Every operation is a pure function of its inputs: values are `Copy`, nothing is
//! mutated in place and there is no shared state.
//!
//! - Addition, subtraction and negation wrap modulo 2^128, no overflow is reported.
//! - Decimal and hexadecimal parsing is lenient, characters outside of the digit set are
//!   skipped. A strict parser is available through [`std::str::FromStr`].
//! - Decimal formatting is compiled in with the `format` feature.
//!
//! ```rust
//! use wideint::Int128;
//!
//! let a = Int128::from_decimal_str("123456789012345678901234567890");
//! let b = Int128::from_decimal_str("987654321098765432109876543210");
//!
//! assert_eq!(a + b, Int128::from("1111111110111111111011111111100"));
//! assert_eq!(Int128::from_words(0, -1) + Int128::ONE, Int128::from_words(1, 0));
//! ```

pub(crate) mod algorithms;
mod error;
#[cfg(feature = "format")]
mod format;
mod int128;
mod parse;

pub use error::{Error, ErrorKind};
pub use int128::Int128;

/// Whether [`Int128`] implements decimal formatting (`Display`,
/// [`Int128::to_decimal_string`]) in this build.
pub const DECIMAL_FORMATTING_ENABLED: bool = cfg!(feature = "format");
