// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Cooperative interruption of a running search.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Checked by the solver between attempts, never after the last one.
pub trait Interrupt {
    /// Returns `true` to stop the search. `attempts_tried` counts the subsets tried so far.
    fn should_stop(&self, attempts_tried: u128) -> bool;
}

/// Never stops the search.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverInterrupt;

impl Interrupt for NeverInterrupt {
    fn should_stop(&self, _: u128) -> bool {
        false
    }
}

/// Stops the search once a point in time has passed.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    pub fn at(at: Instant) -> Self {
        Self { at }
    }

    pub fn after(timeout: Duration) -> Self {
        Self::at(Instant::now() + timeout)
    }
}

impl Interrupt for Deadline {
    fn should_stop(&self, _: u128) -> bool {
        Instant::now() >= self.at
    }
}

/// Stops the search after a fixed number of attempts.
#[derive(Debug, Clone, Copy)]
pub struct AttemptLimit(pub u128);

impl Interrupt for AttemptLimit {
    fn should_stop(&self, attempts_tried: u128) -> bool {
        attempts_tried >= self.0
    }
}

/// A shared flag, e.g. set from a signal handler.
impl Interrupt for AtomicBool {
    fn should_stop(&self, _: u128) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<T: Interrupt + ?Sized> Interrupt for Arc<T> {
    fn should_stop(&self, attempts_tried: u128) -> bool {
        (**self).should_stop(attempts_tried)
    }
}

impl<T: Interrupt> Interrupt for Option<T> {
    fn should_stop(&self, attempts_tried: u128) -> bool {
        self.as_ref()
            .is_some_and(|interrupt| interrupt.should_stop(attempts_tried))
    }
}
