// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Share records for threshold secret reconstruction.
//!
//! A share is an `(index, base, digits)` triple. The index is the x-coordinate of a point on
//! the secret polynomial and the digits, read in `base`, are its y-coordinate.
//!
//! - [`decoder`] turns a digit string in base 2 to 36 into an exact integer.
//! - [`Share`] and [`ShareCollection`] hold the decoded, immutable share set.
//! - [`envelope`] parses the JSON input record into a [`ShareSet`].

pub mod decoder;
pub mod envelope;
mod errors;
mod share;

pub use decoder::decode;
pub use envelope::{parse_envelope, ShareCountPolicy, ShareSet};
pub use errors::*;
pub use share::{Share, ShareCollection};
