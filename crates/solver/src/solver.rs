// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::combinations::{binomial, Combinations};
use crate::errors::SolveError;
use crate::interrupt::{Interrupt, NeverInterrupt};
use crate::policy::AcceptancePolicy;
use crate::result::ReconstructionResult;
use sss_polynomial::{interpolate_at_zero, is_consistent, Point};
use sss_shares::{Share, ShareCollection};
use tracing::{debug, info, instrument, trace};

/// Searches the `k`-subsets of a share collection for one whose polynomial the other shares
/// agree with.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconstructionSolver {
    policy: AcceptancePolicy,
}

impl ReconstructionSolver {
    pub fn new(policy: AcceptancePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> AcceptancePolicy {
        self.policy
    }

    /// Runs the search to completion.
    ///
    /// # Errors
    ///
    /// Returns `SolveError::InvalidThreshold` unless `1 <= k <= shares.len()`.
    pub fn solve(
        &self,
        shares: &ShareCollection,
        k: usize,
    ) -> Result<ReconstructionResult, SolveError> {
        self.solve_with(shares, k, &NeverInterrupt)
    }

    /// Runs the search, consulting `interrupt` before every subset after the first.
    ///
    /// Subsets are tried in ascending lexicographic order of their positions. A subset whose
    /// secret cannot be interpolated exactly is skipped. Otherwise every share outside the
    /// subset is checked, and the subset is accepted if the number of shares that do not fit
    /// is within the policy's fault budget. The first accepted subset ends the search. If
    /// none is accepted the result has no secret and no wrong shares.
    ///
    /// # Errors
    ///
    /// Returns `SolveError::InvalidThreshold` unless `1 <= k <= shares.len()`, and
    /// `SolveError::Interrupted` if `interrupt` stops the search.
    #[instrument(skip_all, fields(n = shares.len(), k = k))]
    pub fn solve_with<I: Interrupt + ?Sized>(
        &self,
        shares: &ShareCollection,
        k: usize,
        interrupt: &I,
    ) -> Result<ReconstructionResult, SolveError> {
        let n = shares.len();
        if k == 0 || k > n {
            return Err(SolveError::InvalidThreshold { k, n });
        }

        let total_combinations = binomial(n as u64, k as u64);
        let fault_budget = self.policy.fault_budget(n, k);
        let points = shares.points();
        let mut basis: Vec<Point> = Vec::with_capacity(k);
        let mut in_subset = vec![false; n];
        let mut attempts_tried: u128 = 0;

        debug!(total_combinations, fault_budget, "starting search");

        let mut combinations = Combinations::new(n, k);
        while let Some(subset) = combinations.next_subset() {
            // Checkpoint between attempts; a finished search is never interrupted.
            if attempts_tried > 0 && interrupt.should_stop(attempts_tried) {
                info!(attempts_tried, total_combinations, "search interrupted");
                return Err(SolveError::Interrupted {
                    attempts_tried,
                    total_combinations,
                });
            }

            attempts_tried += 1;
            basis.clear();
            basis.extend(subset.iter().map(|&position| points[position].clone()));

            match interpolate_at_zero(&basis) {
                Err(err) => {
                    debug!(
                        attempt = attempts_tried,
                        subset = ?indices(shares, subset),
                        "subset unusable: {err}"
                    );
                }
                Ok(secret) => {
                    in_subset.fill(false);
                    for &position in subset {
                        in_subset[position] = true;
                    }

                    let mut wrong = Vec::new();
                    for position in (0..n).filter(|&position| !in_subset[position]) {
                        if is_consistent(&points[position], &basis) {
                            continue;
                        }
                        trace!(index = shares[position].index(), "share does not fit");
                        wrong.push(position);
                        if wrong.len() > fault_budget {
                            break;
                        }
                    }

                    if wrong.len() <= fault_budget {
                        info!(
                            attempt = attempts_tried,
                            subset = ?indices(shares, subset),
                            wrong = ?indices(shares, &wrong),
                            "subset accepted"
                        );
                        return Ok(ReconstructionResult::accepted(
                            secret,
                            collect(shares, subset),
                            collect(shares, &wrong),
                            attempts_tried,
                            total_combinations,
                        ));
                    }

                    debug!(
                        attempt = attempts_tried,
                        subset = ?indices(shares, subset),
                        "subset rejected"
                    );
                }
            }
        }

        info!(attempts_tried, "search exhausted without a consistent subset");
        Ok(ReconstructionResult::exhausted(total_combinations))
    }
}

fn indices(shares: &ShareCollection, positions: &[usize]) -> Vec<u64> {
    positions
        .iter()
        .map(|&position| shares[position].index())
        .collect()
}

fn collect(shares: &ShareCollection, positions: &[usize]) -> Vec<Share> {
    positions
        .iter()
        .map(|&position| shares[position].clone())
        .collect()
}
