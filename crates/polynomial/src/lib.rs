// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Exact Lagrange Interpolation
//!
//! Lagrange interpolation over the integers, with big integer point coordinates. No modulus is
//! applied anywhere: every intermediate value is exact.
//!
//! ## Features
//!
//! - Uses `num-bigint` for point coordinates.
//! - Interpolation at zero to recover the constant term of the polynomial through a point set.
//! - Consistency checks of an external point against the polynomial defined by a point set.
//! - Optional serde support behind the `serde` feature.
//!
//! ## Exactness
//!
//! Each Lagrange term `Π(x - x_j) / Π(x_i - x_j)` must divide exactly. A point set whose
//! individual terms are fractional is rejected even when the final sum would be integral.

mod errors;
pub mod lagrange;

pub use errors::InterpolationError;
pub use lagrange::{interpolate_at, interpolate_at_zero, is_consistent, Point};
