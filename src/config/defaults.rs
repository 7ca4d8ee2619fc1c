// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Viewport**: Mobile/desktop breakpoint
//! - **Gesture**: Swipe and tap classification thresholds
//! - **Auto-play**: Per-carousel advance intervals and gesture cooldowns
//! - **Transition**: Re-entrancy lock window
//! - **Strip layout**: Desktop review strip geometry
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Viewport Defaults
// ==========================================================================

/// Widths at or below this value (in logical pixels) use the mobile layout.
pub const DEFAULT_MOBILE_BREAKPOINT_PX: f32 = 767.0;

/// Minimum accepted breakpoint.
pub const MIN_MOBILE_BREAKPOINT_PX: f32 = 320.0;

/// Maximum accepted breakpoint.
pub const MAX_MOBILE_BREAKPOINT_PX: f32 = 2048.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Horizontal travel a release must exceed to count as a swipe.
pub const DEFAULT_MIN_SWIPE_DISTANCE_PX: f32 = 40.0;

/// A swipe or tap must complete in strictly less than this.
pub const DEFAULT_MAX_SWIPE_DURATION_MS: u64 = 500;

/// Vertical travel must stay below this for a release to count as a swipe.
pub const DEFAULT_MAX_VERTICAL_DRIFT_PX: f32 = 80.0;

/// Releases within this distance of the start point on both axes are taps.
pub const DEFAULT_TAP_TOLERANCE_PX: f32 = 10.0;

/// Horizontal travel needed before page scrolling is suppressed.
pub const DEFAULT_SCROLL_DEADBAND_PX: f32 = 10.0;

// ==========================================================================
// Auto-play Defaults
// ==========================================================================

/// Review carousel advance interval.
pub const DEFAULT_REVIEWS_INTERVAL_MS: u64 = 4000;

/// Mobile app slideshow advance interval.
pub const DEFAULT_APP_SCREENS_INTERVAL_MS: u64 = 3000;

/// Feature card slideshow advance interval.
pub const DEFAULT_FEATURE_CARDS_INTERVAL_MS: u64 = 3500;

/// Minimum auto-play interval.
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 1000;

/// Maximum auto-play interval.
pub const MAX_AUTOPLAY_INTERVAL_MS: u64 = 60_000;

/// Delay before auto-play resumes after a gesture on the review carousel
/// and the app slideshow.
pub const DEFAULT_GESTURE_COOLDOWN_MS: u64 = 2000;

/// Delay before auto-play resumes after a gesture on the feature cards.
pub const DEFAULT_FEATURE_CARDS_COOLDOWN_MS: u64 = 1500;

/// Maximum gesture cooldown.
pub const MAX_GESTURE_COOLDOWN_MS: u64 = 10_000;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Length of the slide animation window while new requests are dropped.
pub const DEFAULT_TRANSITION_MS: u64 = 400;

/// Maximum transition window.
pub const MAX_TRANSITION_MS: u64 = 2000;

// ==========================================================================
// Strip Layout Defaults
// ==========================================================================

/// Width of one review card in the desktop strip.
pub const DEFAULT_CARD_WIDTH_PX: f32 = 360.0;

/// Space between two review cards in the desktop strip.
pub const DEFAULT_CARD_GAP_PX: f32 = 24.0;

/// Multiplier applied to the gap when centering the active card.
pub const DEFAULT_GAP_TUNING: f32 = 0.5;

/// Accepted gap tuning range.
pub const MIN_GAP_TUNING: f32 = -4.0;
pub const MAX_GAP_TUNING: f32 = 4.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of carousel events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Tick
// ==========================================================================

/// Period of the timer subscription that drives deadlines.
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MOBILE_BREAKPOINT_PX < DEFAULT_MOBILE_BREAKPOINT_PX);
    assert!(MAX_MOBILE_BREAKPOINT_PX > DEFAULT_MOBILE_BREAKPOINT_PX);

    assert!(DEFAULT_TAP_TOLERANCE_PX < DEFAULT_MIN_SWIPE_DISTANCE_PX);
    assert!(DEFAULT_SCROLL_DEADBAND_PX < DEFAULT_MIN_SWIPE_DISTANCE_PX);
    assert!(DEFAULT_MAX_SWIPE_DURATION_MS > 0);

    assert!(DEFAULT_REVIEWS_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_APP_SCREENS_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_FEATURE_CARDS_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_REVIEWS_INTERVAL_MS <= MAX_AUTOPLAY_INTERVAL_MS);

    assert!(DEFAULT_GESTURE_COOLDOWN_MS <= MAX_GESTURE_COOLDOWN_MS);
    assert!(DEFAULT_FEATURE_CARDS_COOLDOWN_MS <= MAX_GESTURE_COOLDOWN_MS);

    // A transition must settle before the next auto-play tick.
    assert!(DEFAULT_TRANSITION_MS < MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);

    assert!(DEFAULT_CARD_WIDTH_PX > 0.0);
    assert!(DEFAULT_CARD_GAP_PX >= 0.0);
    assert!(DEFAULT_GAP_TUNING >= MIN_GAP_TUNING);
    assert!(DEFAULT_GAP_TUNING <= MAX_GAP_TUNING);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_defaults_are_valid() {
        assert_eq!(DEFAULT_MOBILE_BREAKPOINT_PX, 767.0);
        assert!(DEFAULT_MOBILE_BREAKPOINT_PX > MIN_MOBILE_BREAKPOINT_PX);
    }

    #[test]
    fn autoplay_intervals_fall_between_three_and_four_seconds() {
        for interval in [
            DEFAULT_REVIEWS_INTERVAL_MS,
            DEFAULT_APP_SCREENS_INTERVAL_MS,
            DEFAULT_FEATURE_CARDS_INTERVAL_MS,
        ] {
            assert!((3000..=4000).contains(&interval));
        }
    }

    #[test]
    fn cooldowns_fall_between_one_and_two_seconds() {
        for cooldown in [DEFAULT_GESTURE_COOLDOWN_MS, DEFAULT_FEATURE_CARDS_COOLDOWN_MS] {
            assert!((1000..=2000).contains(&cooldown));
        }
    }

    #[test]
    fn fifty_pixel_swipe_clears_the_distance_threshold() {
        assert!(50.0 > DEFAULT_MIN_SWIPE_DISTANCE_PX);
        assert!(300 < DEFAULT_MAX_SWIPE_DURATION_MS);
    }
}
