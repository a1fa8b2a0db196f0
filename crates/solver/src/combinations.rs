// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Lexicographic enumeration of `k`-subsets of positions `0..n`.

use num_integer::Integer;

/// Number of `k`-subsets of an `n`-set, saturating at `u128::MAX` only when the exact value
/// does not fit.
pub fn binomial(n: u64, k: u64) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        // C(n, i + 1) = C(n, i) * (n - i) / (i + 1). Cancelling the common factor of C(n, i)
        // and i + 1 first leaves a divisor of n - i, so no step exceeds the final value.
        let divisor = u128::from(i + 1);
        let common = result.gcd(&divisor);
        let factor = u128::from(n - i) / (divisor / common);
        result = match (result / common).checked_mul(factor) {
            Some(next) => next,
            None => return u128::MAX,
        };
    }
    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Start,
    Running,
    Done,
}

/// Cursor over every `k`-subset of the positions `0..n`.
///
/// Subsets are produced in ascending lexicographic order, each as an ascending list of
/// positions: `[0, 1, .., k-1]` first and `[n-k, .., n-1]` last. The cursor works on a
/// single position buffer, so [`Combinations::next_subset`] does not allocate; the
/// [`Iterator`] implementation yields owned copies.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    positions: Vec<usize>,
    cursor: Cursor,
}

impl Combinations {
    /// Creates a cursor over the `k`-subsets of `0..n`. There are none when `k > n`.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            positions: (0..k).collect(),
            cursor: if k > n { Cursor::Done } else { Cursor::Start },
        }
    }

    /// Advances to the next subset and returns its positions.
    pub fn next_subset(&mut self) -> Option<&[usize]> {
        match self.cursor {
            Cursor::Done => return None,
            Cursor::Start => self.cursor = Cursor::Running,
            Cursor::Running => {
                if !self.advance() {
                    self.cursor = Cursor::Done;
                    return None;
                }
            }
        }
        Some(&self.positions)
    }

    fn advance(&mut self) -> bool {
        let k = self.positions.len();
        // Rightmost position that can still move right.
        let Some(i) = (0..k).rev().find(|&i| self.positions[i] < self.n - k + i) else {
            return false;
        };
        self.positions[i] += 1;
        for j in i + 1..k {
            self.positions[j] = self.positions[j - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_subset().map(<[usize]>::to_vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_four_choose_three() {
        let subsets: Vec<Vec<usize>> = Combinations::new(4, 3).collect();
        assert_eq!(
            subsets,
            vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 2, 3], vec![1, 2, 3]]
        );
    }

    #[test]
    fn test_singletons() {
        let subsets: Vec<Vec<usize>> = Combinations::new(3, 1).collect();
        assert_eq!(subsets, vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_whole_collection() {
        let subsets: Vec<Vec<usize>> = Combinations::new(5, 5).collect();
        assert_eq!(subsets, vec![vec![0, 1, 2, 3, 4]]);
    }

    #[test]
    fn test_k_greater_than_n() {
        assert_eq!(Combinations::new(2, 3).count(), 0);
    }

    #[test]
    fn test_restartable() {
        let first: Vec<Vec<usize>> = Combinations::new(6, 3).collect();
        let second: Vec<Vec<usize>> = Combinations::new(6, 3).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_exhausted_cursor_stays_exhausted() {
        let mut combinations = Combinations::new(2, 2);
        assert_eq!(combinations.next_subset(), Some(&[0, 1][..]));
        assert_eq!(combinations.next_subset(), None);
        assert_eq!(combinations.next_subset(), None);
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(4, 3), 4);
        assert_eq!(binomial(5, 3), 10);
        assert_eq!(binomial(10, 0), 1);
        assert_eq!(binomial(3, 4), 0);
        assert_eq!(binomial(64, 32), 1_832_624_140_942_590_534);
        assert_eq!(binomial(10_000, 5_000), u128::MAX);
    }

    #[test]
    fn test_binomial_near_u128_limit() {
        // C(130, 64) * 66 overflows u128 although C(130, 65) itself fits.
        assert_eq!(
            binomial(130, 65),
            95_067_625_827_960_698_145_584_333_020_095_113_100
        );
        assert_eq!(binomial(130, 65), binomial(129, 64) + binomial(129, 65));
        assert_eq!(binomial(132, 66), u128::MAX);
    }

    proptest! {
        #[test]
        fn enumerates_every_subset_once_in_order(n in 1usize..=9, k in 1usize..=9) {
            prop_assume!(k <= n);
            let subsets: Vec<Vec<usize>> = Combinations::new(n, k).collect();

            prop_assert_eq!(subsets.len() as u128, binomial(n as u64, k as u64));
            prop_assert!(subsets.windows(2).all(|pair| pair[0] < pair[1]));

            let mut seen = HashSet::new();
            for subset in &subsets {
                prop_assert_eq!(subset.len(), k);
                prop_assert!(subset.windows(2).all(|pair| pair[0] < pair[1]));
                prop_assert!(subset.iter().all(|&position| position < n));
                prop_assert!(seen.insert(subset.clone()));
            }
        }
    }
}
