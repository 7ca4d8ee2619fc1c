// SPDX-License-Identifier: MPL-2.0
//! Viewport classification.
//!
//! The mode is derived from the window width on every resize; it changes how
//! slides are laid out but never what the current index means.

use crate::config::{
    DEFAULT_MOBILE_BREAKPOINT_PX, MAX_MOBILE_BREAKPOINT_PX, MIN_MOBILE_BREAKPOINT_PX,
};

/// Layout classification of the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportMode {
    Mobile,
    Desktop,
}

impl ViewportMode {
    /// Widths at or below the breakpoint are mobile.
    #[must_use]
    pub fn from_width(width: f32, breakpoint: Breakpoint) -> Self {
        if width <= breakpoint.value() {
            ViewportMode::Mobile
        } else {
            ViewportMode::Desktop
        }
    }

    #[must_use]
    pub fn is_mobile(self) -> bool {
        self == ViewportMode::Mobile
    }
}

/// Mobile/desktop breakpoint in logical pixels, clamped to a sane range.
///
/// # Example
///
/// ```
/// use iced_showcase::carousel::Breakpoint;
///
/// assert_eq!(Breakpoint::default().value(), 767.0);
/// assert_eq!(Breakpoint::new(10.0).value(), 320.0); // Clamped to min
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint(f32);

impl Breakpoint {
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_MOBILE_BREAKPOINT_PX, MAX_MOBILE_BREAKPOINT_PX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self(DEFAULT_MOBILE_BREAKPOINT_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_width_itself_is_mobile() {
        let bp = Breakpoint::default();
        assert_eq!(ViewportMode::from_width(767.0, bp), ViewportMode::Mobile);
        assert_eq!(ViewportMode::from_width(767.5, bp), ViewportMode::Desktop);
        assert_eq!(ViewportMode::from_width(375.0, bp), ViewportMode::Mobile);
        assert_eq!(ViewportMode::from_width(1280.0, bp), ViewportMode::Desktop);
    }

    #[test]
    fn breakpoint_clamps_and_rejects_nan() {
        assert_eq!(Breakpoint::new(5000.0).value(), MAX_MOBILE_BREAKPOINT_PX);
        assert_eq!(Breakpoint::new(f32::NAN), Breakpoint::default());
        assert_eq!(Breakpoint::new(1024.0).value(), 1024.0);
    }
}
