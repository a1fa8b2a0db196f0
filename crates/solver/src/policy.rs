// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use serde::{Deserialize, Serialize};

/// Decides whether a candidate subset is accepted, given the shares outside it that do not
/// fit its polynomial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum AcceptancePolicy {
    /// Every share outside the subset must fit.
    #[default]
    Unanimous,
    /// Up to `max_faults` shares outside the subset may be wrong. The budget is capped at
    /// `(n - k) / 2`, beyond which two different polynomials could both be accepted.
    FaultBudget { max_faults: usize },
}

impl AcceptancePolicy {
    /// Number of inconsistent shares tolerated for `n` shares and threshold `k`.
    pub fn fault_budget(&self, n: usize, k: usize) -> usize {
        match self {
            AcceptancePolicy::Unanimous => 0,
            AcceptancePolicy::FaultBudget { max_faults } => {
                (*max_faults).min(n.saturating_sub(k) / 2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_budget() {
        assert_eq!(AcceptancePolicy::Unanimous.fault_budget(10, 3), 0);
        let policy = AcceptancePolicy::FaultBudget { max_faults: 2 };
        assert_eq!(policy.fault_budget(10, 3), 2);
        assert_eq!(policy.fault_budget(6, 3), 1);
        assert_eq!(policy.fault_budget(4, 3), 0);
        assert_eq!(policy.fault_budget(3, 3), 0);
    }
}
