// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Lagrange interpolation over the integers.
//!
//! For a basis of points `(x_i, y_i)` with pairwise distinct `x_i`, the value of the unique
//! polynomial of degree `< len` through the basis at `x` is
//!
//! ```text
//! f(x) = Σ_i y_i · Π_{j≠i} (x − x_j) / Π_{j≠i} (x_i − x_j)
//! ```
//!
//! Every term is computed as an exact integer quotient. A term whose numerator is not a
//! multiple of its denominator is reported as [`InterpolationError::NonExactDivision`], even
//! if the fractional parts of all terms would cancel in the sum.

use crate::errors::InterpolationError;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point on an integer polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// Evaluates the polynomial defined by `basis` at zero, recovering its constant term.
///
/// # Errors
///
/// Returns `InterpolationError::NonExactDivision` if any Lagrange term is fractional,
/// `InterpolationError::DuplicateAbscissa` if two basis points share an x-coordinate and
/// `InterpolationError::EmptyPointSet` for an empty basis.
pub fn interpolate_at_zero(basis: &[Point]) -> Result<BigInt, InterpolationError> {
    interpolate_at(basis, &BigInt::zero())
}

/// Evaluates the polynomial defined by `basis` at `x`.
///
/// Errors are the same as for [`interpolate_at_zero`].
pub fn interpolate_at(basis: &[Point], x: &BigInt) -> Result<BigInt, InterpolationError> {
    if basis.is_empty() {
        return Err(InterpolationError::EmptyPointSet);
    }

    let mut value = BigInt::zero();
    for (i, point) in basis.iter().enumerate() {
        let coefficient = basis_coefficient(basis, i, x)?;
        value += &point.y * coefficient;
    }
    Ok(value)
}

/// Returns `true` iff `candidate` lies on the polynomial defined by `basis`.
///
/// A fractional Lagrange term while evaluating at `candidate.x` makes the candidate
/// inconsistent; it is not surfaced as an error.
pub fn is_consistent(candidate: &Point, basis: &[Point]) -> bool {
    match interpolate_at(basis, &candidate.x) {
        Ok(expected) => expected == candidate.y,
        Err(err) => {
            trace!(x = %candidate.x, "candidate rejected: {err}");
            false
        }
    }
}

/// Computes `Π_{j≠i} (x − x_j) / Π_{j≠i} (x_i − x_j)` as an exact integer.
fn basis_coefficient(basis: &[Point], i: usize, x: &BigInt) -> Result<BigInt, InterpolationError> {
    let xi = &basis[i].x;
    let mut numerator = BigInt::one();
    let mut denominator = BigInt::one();

    for (j, other) in basis.iter().enumerate() {
        if i == j {
            continue;
        }
        let delta = xi - &other.x;
        if delta.is_zero() {
            return Err(InterpolationError::DuplicateAbscissa { x: xi.clone() });
        }
        numerator *= x - &other.x;
        denominator *= delta;
    }

    let (quotient, remainder) = numerator.div_rem(&denominator);
    if !remainder.is_zero() {
        return Err(InterpolationError::NonExactDivision {
            numerator,
            denominator,
        });
    }
    Ok(quotient)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Points on the polynomial with the given coefficients, constant term first.
    fn sample(coeffs: &[BigInt], xs: impl IntoIterator<Item = i64>) -> Vec<Point> {
        xs.into_iter()
            .map(|x| {
                let x = BigInt::from(x);
                let y = coeffs
                    .iter()
                    .rev()
                    .fold(BigInt::zero(), |acc, coeff| acc * &x + coeff);
                Point { x, y }
            })
            .collect()
    }

    // f(x) = x^2 + 3
    fn square_plus_three() -> Vec<Point> {
        vec![Point::new(1, 4), Point::new(2, 7), Point::new(3, 12)]
    }

    #[test]
    fn test_interpolate_at_zero() {
        let secret = interpolate_at_zero(&square_plus_three()).unwrap();
        assert_eq!(secret, BigInt::from(3));
    }

    #[test]
    fn test_interpolate_single_point() {
        let secret = interpolate_at_zero(&[Point::new(5, 17)]).unwrap();
        assert_eq!(secret, BigInt::from(17));
    }

    #[test]
    fn test_interpolate_order_independent() {
        let mut basis = square_plus_three();
        basis.reverse();
        assert_eq!(interpolate_at_zero(&basis).unwrap(), BigInt::from(3));
    }

    #[test]
    fn test_interpolate_at_other_x() {
        let value = interpolate_at(&square_plus_three(), &BigInt::from(6)).unwrap();
        assert_eq!(value, BigInt::from(39));
        let value = interpolate_at(&square_plus_three(), &BigInt::from(-2)).unwrap();
        assert_eq!(value, BigInt::from(7));
    }

    #[test]
    fn test_per_term_division_is_strict() {
        // All three points lie on x^2 + 3, so the sum of the Lagrange terms is the integer 3,
        // but the first term is 12/5.
        let basis = vec![Point::new(1, 4), Point::new(2, 7), Point::new(6, 39)];
        let err = interpolate_at_zero(&basis).unwrap_err();
        assert_eq!(
            err,
            InterpolationError::NonExactDivision {
                numerator: BigInt::from(12),
                denominator: BigInt::from(5),
            }
        );
    }

    #[test]
    fn test_negative_terms_divide_exactly() {
        // Second term of {1,2,3} at zero is 3 / -1.
        let basis = vec![Point::new(1, 0), Point::new(2, 1), Point::new(3, 0)];
        assert_eq!(interpolate_at_zero(&basis).unwrap(), BigInt::from(-3));
    }

    #[test]
    fn test_duplicate_abscissa() {
        let basis = vec![Point::new(1, 4), Point::new(1, 5)];
        assert_eq!(
            interpolate_at_zero(&basis).unwrap_err(),
            InterpolationError::DuplicateAbscissa { x: BigInt::from(1) }
        );
    }

    #[test]
    fn test_empty_basis() {
        assert_eq!(
            interpolate_at_zero(&[]).unwrap_err(),
            InterpolationError::EmptyPointSet
        );
    }

    #[test]
    fn test_is_consistent() {
        let basis = square_plus_three();
        assert!(is_consistent(&Point::new(6, 39), &basis));
        assert!(!is_consistent(&Point::new(6, 40), &basis));
    }

    #[test]
    fn test_is_consistent_on_fractional_term() {
        // Evaluating {1,2,6} at x = 3: first term is (3-2)(3-6) / (1-2)(1-6) = -3/5.
        let basis = vec![Point::new(1, 4), Point::new(2, 7), Point::new(6, 39)];
        assert!(!is_consistent(&Point::new(3, 12), &basis));
    }

    #[test]
    fn test_large_values_are_exact() {
        let big = BigInt::parse_bytes(b"123456789012345678901234567890123456789", 10).unwrap();
        let coeffs = [big.clone(), BigInt::from(987654321u64), big.clone()];
        let basis = sample(&coeffs, 1..=3);
        assert_eq!(interpolate_at_zero(&basis).unwrap(), big);
        let extra = sample(&coeffs, [4, 9, 100]);
        for point in &extra {
            assert!(is_consistent(point, &basis));
        }
    }

    proptest! {
        #[test]
        fn recovers_constant_term_on_consecutive_abscissae(
            coeffs in prop::collection::vec(-1_000_000i64..1_000_000, 1..7)
        ) {
            let k = coeffs.len() as i64;
            let coeffs: Vec<BigInt> = coeffs.into_iter().map(BigInt::from).collect();
            let basis = sample(&coeffs, 1..=k);
            prop_assert_eq!(interpolate_at_zero(&basis).unwrap(), coeffs[0].clone());

            for point in sample(&coeffs, k + 1..k + 5) {
                prop_assert!(is_consistent(&point, &basis));
                let shifted = Point::new(point.x.clone(), &point.y + BigInt::one());
                prop_assert!(!is_consistent(&shifted, &basis));
            }
        }
    }
}
