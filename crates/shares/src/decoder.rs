// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Arbitrary-base decoding into exact integers.

use crate::errors::DecodeError;
use num_bigint::BigUint;
use num_traits::Zero;

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;
/// Largest supported base, using the digits `0-9` and `a-z`.
pub const MAX_BASE: u32 = 36;

/// Decodes `digits`, most significant first, in the given `base`.
///
/// Letters are case-insensitive: `a`/`A` is 10 and `z`/`Z` is 35. An empty string decodes
/// to zero.
///
/// # Errors
///
/// Returns `DecodeError::InvalidBase` when `base` is outside `2..=36`, and
/// `DecodeError::InvalidDigit` for the first character (by zero-based position) that is not
/// an ASCII alphanumeric or whose value is not below `base`.
pub fn decode(digits: &str, base: u32) -> Result<BigUint, DecodeError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(DecodeError::InvalidBase { base });
    }

    let radix = BigUint::from(base);
    let mut value = BigUint::zero();
    for (position, character) in digits.chars().enumerate() {
        let digit = character
            .to_digit(MAX_BASE)
            .filter(|digit| *digit < base)
            .ok_or(DecodeError::InvalidDigit {
                character,
                position,
                base,
            })?;
        value = value * &radix + digit;
    }
    Ok(value)
}
