// SPDX-License-Identifier: MPL-2.0
//! Re-entrancy state machine for slide transitions.
//!
//! While a slide animation is running the carousel sits in
//! [`TransitionState::Transitioning`] and rejects further transition requests.
//! There is no queue: a rejected request is simply gone. The window is closed
//! by elapsed time, matching the animation length, not by any signal from the
//! renderer.

use std::time::{Duration, Instant};

/// Whether a carousel locks itself while a transition animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionGuard {
    /// Transitions are instantaneous style changes; every request is honored.
    Unguarded,
    /// Requests are dropped for this long after a transition starts.
    Locked(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionState {
    #[default]
    Idle,
    Transitioning {
        until: Instant,
    },
}

impl TransitionState {
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(self, TransitionState::Transitioning { .. })
    }

    /// Enters the locked state if the guard calls for one.
    pub fn begin(&mut self, guard: TransitionGuard, now: Instant) {
        *self = match guard {
            TransitionGuard::Unguarded => TransitionState::Idle,
            TransitionGuard::Locked(window) => TransitionState::Transitioning {
                until: now + window,
            },
        };
    }

    /// Returns to `Idle` once the window has elapsed.
    ///
    /// Returns `true` when this call performed the `Transitioning -> Idle`
    /// change.
    pub fn settle(&mut self, now: Instant) -> bool {
        match *self {
            TransitionState::Transitioning { until } if now >= until => {
                *self = TransitionState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Drops any in-flight window immediately.
    pub fn reset(&mut self) {
        *self = TransitionState::Idle;
    }
}
