// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::decoder::decode;
use crate::errors::{DecodeError, EnvelopeError};
use num_bigint::{BigInt, BigUint};
use sss_polynomial::Point;
use std::ops::Deref;

/// A single decoded share.
///
/// The share index is the x-coordinate of its point and the decoded value is the
/// y-coordinate. Shares are never mutated once decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share {
    index: u64,
    base: u32,
    raw_value: String,
    decoded_y: BigUint,
}

impl Share {
    /// Decodes `raw_value` in `base` and builds the share at `index`.
    pub fn decode(index: u64, base: u32, raw_value: impl Into<String>) -> Result<Self, DecodeError> {
        let raw_value = raw_value.into();
        let decoded_y = decode(&raw_value, base)?;
        Ok(Self {
            index,
            base,
            raw_value,
            decoded_y,
        })
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    pub fn decoded_y(&self) -> &BigUint {
        &self.decoded_y
    }

    /// The point `(index, decoded_y)` used for interpolation.
    pub fn point(&self) -> Point {
        Point::new(self.index, BigInt::from(self.decoded_y.clone()))
    }
}

/// The full, ordered set of shares used by one reconstruction.
///
/// Shares are kept in ascending index order and indices are unique, so every subset of
/// positions is a set of points with pairwise distinct x-coordinates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShareCollection {
    shares: Vec<Share>,
    points: Vec<Point>,
}

impl ShareCollection {
    /// Builds a collection, sorting shares by index.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::DuplicateIndex` if two shares have the same index.
    pub fn new(mut shares: Vec<Share>) -> Result<Self, EnvelopeError> {
        shares.sort_by_key(Share::index);
        if let Some(pair) = shares.windows(2).find(|pair| pair[0].index == pair[1].index) {
            return Err(EnvelopeError::DuplicateIndex {
                index: pair[0].index,
            });
        }
        let points = shares.iter().map(Share::point).collect();
        Ok(Self { shares, points })
    }

    /// Points in the same order as the shares.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Indices of all shares, ascending.
    pub fn indices(&self) -> Vec<u64> {
        self.shares.iter().map(Share::index).collect()
    }
}

impl Deref for ShareCollection {
    type Target = [Share];

    fn deref(&self) -> &Self::Target {
        &self.shares
    }
}
