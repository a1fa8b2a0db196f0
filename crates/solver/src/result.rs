// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use num_bigint::BigInt;
use sss_shares::Share;

/// Outcome of one reconstruction.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconstructionResult {
    secret: Option<BigInt>,
    accepted_subset: Vec<Share>,
    wrong_shares: Vec<Share>,
    attempts_tried: u128,
    total_combinations: u128,
}

impl ReconstructionResult {
    pub(crate) fn accepted(
        secret: BigInt,
        accepted_subset: Vec<Share>,
        wrong_shares: Vec<Share>,
        attempts_tried: u128,
        total_combinations: u128,
    ) -> Self {
        Self {
            secret: Some(secret),
            accepted_subset,
            wrong_shares,
            attempts_tried,
            total_combinations,
        }
    }

    pub(crate) fn exhausted(total_combinations: u128) -> Self {
        Self {
            secret: None,
            accepted_subset: vec![],
            wrong_shares: vec![],
            attempts_tried: total_combinations,
            total_combinations,
        }
    }

    /// The recovered secret, or `None` when no subset was accepted.
    pub fn secret(&self) -> Option<&BigInt> {
        self.secret.as_ref()
    }

    /// The shares whose polynomial was accepted, in index order.
    pub fn accepted_subset(&self) -> &[Share] {
        &self.accepted_subset
    }

    /// Shares outside the accepted subset that do not fit its polynomial.
    pub fn wrong_shares(&self) -> &[Share] {
        &self.wrong_shares
    }

    pub fn attempts_tried(&self) -> u128 {
        self.attempts_tried
    }

    /// `C(n, k)` for the share set that was searched.
    pub fn total_combinations(&self) -> u128 {
        self.total_combinations
    }

    pub fn is_recovered(&self) -> bool {
        self.secret.is_some()
    }
}
