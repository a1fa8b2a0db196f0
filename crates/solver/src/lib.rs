// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Reconstruction Search
//!
//! Recovers the secret of a `k`-of-`n` share set when some shares may be corrupted.
//!
//! Every `k`-subset of the shares is tried in ascending lexicographic order of positions.
//! For each subset the constant term of its interpolating polynomial is computed, and every
//! share outside the subset is checked against that polynomial. The first subset that passes
//! the [`AcceptancePolicy`] wins, so results are reproducible for identical input.
//!
//! Shares inside the accepted subset are never checked individually.

pub mod combinations;
mod errors;
pub mod interrupt;
mod policy;
mod result;
mod solver;

pub use combinations::{binomial, Combinations};
pub use errors::SolveError;
pub use interrupt::{AttemptLimit, Deadline, Interrupt, NeverInterrupt};
pub use policy::AcceptancePolicy;
pub use result::ReconstructionResult;
pub use solver::ReconstructionSolver;
