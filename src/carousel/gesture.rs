// SPDX-License-Identifier: MPL-2.0
//! Touch gesture tracking and swipe/tap classification.
//!
//! A gesture is recorded from press to release. On release the displacement
//! and elapsed time decide whether it was a horizontal swipe, a tap, or
//! something else (a vertical scroll, a slow drag) that the carousel ignores.

use crate::config::{
    GestureConfig, DEFAULT_MAX_SWIPE_DURATION_MS, DEFAULT_MAX_VERTICAL_DRIFT_PX, DEFAULT_MIN_SWIPE_DISTANCE_PX,
    DEFAULT_SCROLL_DEADBAND_PX, DEFAULT_TAP_TOLERANCE_PX,
};
use iced::{Point, Vector};
use std::time::{Duration, Instant};

/// Classification limits for swipes and taps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureThresholds {
    /// Horizontal travel must be strictly greater than this for a swipe.
    pub min_swipe_distance: f32,
    /// Swipes and taps must complete in strictly less than this.
    pub max_duration: Duration,
    /// Vertical travel must be strictly less than this for a swipe.
    pub max_vertical_drift: f32,
    /// Travel on both axes at or below this is a tap.
    pub tap_tolerance: f32,
    /// Horizontal travel needed before scroll suppression kicks in.
    pub scroll_deadband: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            min_swipe_distance: DEFAULT_MIN_SWIPE_DISTANCE_PX,
            max_duration: Duration::from_millis(DEFAULT_MAX_SWIPE_DURATION_MS),
            max_vertical_drift: DEFAULT_MAX_VERTICAL_DRIFT_PX,
            tap_tolerance: DEFAULT_TAP_TOLERANCE_PX,
            scroll_deadband: DEFAULT_SCROLL_DEADBAND_PX,
        }
    }
}

impl GestureThresholds {
    /// Builds thresholds from the `[gesture]` section.
    ///
    /// Missing, negative or non-finite values keep their defaults.
    #[must_use]
    pub fn from_config(section: &GestureConfig) -> Self {
        let defaults = Self::default();
        let px = |value: Option<f32>, fallback: f32| {
            value
                .filter(|v| v.is_finite() && *v >= 0.0)
                .unwrap_or(fallback)
        };
        Self {
            min_swipe_distance: px(section.min_swipe_distance_px, defaults.min_swipe_distance),
            max_duration: section
                .max_swipe_duration_ms
                .filter(|ms| *ms > 0)
                .map_or(defaults.max_duration, Duration::from_millis),
            max_vertical_drift: px(section.max_vertical_drift_px, defaults.max_vertical_drift),
            tap_tolerance: px(section.tap_tolerance_px, defaults.tap_tolerance),
            scroll_deadband: px(section.scroll_deadband_px, defaults.scroll_deadband),
        }
    }
}

/// What a completed gesture amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    /// Finger moved left: reveal the next slide.
    SwipeLeft,
    /// Finger moved right: reveal the previous slide.
    SwipeRight,
    /// Press and release in place.
    Tap,
    /// Diagonal, vertical, too slow, or too short to be a swipe.
    Ignored,
}

/// Classifies a release from its displacement and duration.
#[must_use]
pub fn classify(delta: Vector, elapsed: Duration, thresholds: &GestureThresholds) -> Gesture {
    if elapsed >= thresholds.max_duration {
        return Gesture::Ignored;
    }

    let abs_x = delta.x.abs();
    let abs_y = delta.y.abs();

    if abs_x > thresholds.min_swipe_distance && abs_y < thresholds.max_vertical_drift {
        return if delta.x < 0.0 {
            Gesture::SwipeLeft
        } else {
            Gesture::SwipeRight
        };
    }

    if abs_x <= thresholds.tap_tolerance && abs_y <= thresholds.tap_tolerance {
        return Gesture::Tap;
    }

    Gesture::Ignored
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct GestureStart {
    position: Point,
    at: Instant,
}

/// Records the start of the in-flight gesture, if any.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    start: Option<GestureStart>,
}

impl GestureTracker {
    pub fn begin(&mut self, position: Point, now: Instant) {
        self.start = Some(GestureStart { position, at: now });
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Whether page scrolling should be held back at this finger position.
    ///
    /// True once the gesture is clearly horizontal: horizontal travel beats
    /// vertical travel and has left the deadband.
    #[must_use]
    pub fn should_suppress_scroll(&self, position: Point, thresholds: &GestureThresholds) -> bool {
        let Some(start) = self.start else {
            return false;
        };
        let delta = position - start.position;
        let abs_x = delta.x.abs();
        abs_x > delta.y.abs() && abs_x > thresholds.scroll_deadband
    }

    /// Ends the gesture and classifies it. `None` when nothing was tracked.
    pub fn finish(
        &mut self,
        position: Point,
        now: Instant,
        thresholds: &GestureThresholds,
    ) -> Option<Gesture> {
        let start = self.start.take()?;
        let elapsed = now.saturating_duration_since(start.at);
        Some(classify(position - start.position, elapsed, thresholds))
    }

    /// Forgets the in-flight gesture without classifying it.
    pub fn cancel(&mut self) {
        self.start = None;
    }
}
