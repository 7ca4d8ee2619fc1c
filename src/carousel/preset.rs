// SPDX-License-Identifier: MPL-2.0
//! Parameter sets for the three carousel sections of the landing page.
//!
//! All three run the same controller; they differ only in timing, whether
//! transitions lock, and what happens above the mobile breakpoint.

use super::layout::{DesktopLayout, StripGeometry};
use super::transition::TransitionGuard;
use crate::config::{
    CarouselConfig, DEFAULT_APP_SCREENS_INTERVAL_MS, DEFAULT_CARD_GAP_PX, DEFAULT_CARD_WIDTH_PX,
    DEFAULT_FEATURE_CARDS_COOLDOWN_MS, DEFAULT_FEATURE_CARDS_INTERVAL_MS, DEFAULT_GAP_TUNING,
    DEFAULT_GESTURE_COOLDOWN_MS, DEFAULT_REVIEWS_INTERVAL_MS, DEFAULT_TRANSITION_MS,
    MAX_AUTOPLAY_INTERVAL_MS, MAX_GAP_TUNING, MAX_GESTURE_COOLDOWN_MS, MAX_TRANSITION_MS,
    MIN_AUTOPLAY_INTERVAL_MS, MIN_GAP_TUNING,
};
use std::time::Duration;

/// Which landing-page section a carousel drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarouselKind {
    /// Customer reviews. Centered strip on desktop, no transition lock.
    Reviews,
    /// Mobile app screenshots. Static grid on desktop.
    AppScreens,
    /// Product feature cards. Static grid on desktop.
    FeatureCards,
}

impl CarouselKind {
    pub const ALL: [CarouselKind; 3] = [
        CarouselKind::Reviews,
        CarouselKind::AppScreens,
        CarouselKind::FeatureCards,
    ];

    /// Stable identifier used for i18n keys and diagnostics.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            CarouselKind::Reviews => "reviews",
            CarouselKind::AppScreens => "app-screens",
            CarouselKind::FeatureCards => "feature-cards",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub kind: CarouselKind,
    pub autoplay_interval: Duration,
    pub gesture_cooldown: Duration,
    pub guard: TransitionGuard,
    pub desktop: DesktopLayout,
}

impl Preset {
    #[must_use]
    pub fn reviews() -> Self {
        Self {
            kind: CarouselKind::Reviews,
            autoplay_interval: Duration::from_millis(DEFAULT_REVIEWS_INTERVAL_MS),
            gesture_cooldown: Duration::from_millis(DEFAULT_GESTURE_COOLDOWN_MS),
            guard: TransitionGuard::Unguarded,
            desktop: DesktopLayout::Strip(StripGeometry {
                card_width: DEFAULT_CARD_WIDTH_PX,
                gap: DEFAULT_CARD_GAP_PX,
                gap_tuning: DEFAULT_GAP_TUNING,
            }),
        }
    }

    #[must_use]
    pub fn app_screens() -> Self {
        Self {
            kind: CarouselKind::AppScreens,
            autoplay_interval: Duration::from_millis(DEFAULT_APP_SCREENS_INTERVAL_MS),
            gesture_cooldown: Duration::from_millis(DEFAULT_GESTURE_COOLDOWN_MS),
            guard: TransitionGuard::Locked(Duration::from_millis(DEFAULT_TRANSITION_MS)),
            desktop: DesktopLayout::StaticGrid,
        }
    }

    #[must_use]
    pub fn feature_cards() -> Self {
        Self {
            kind: CarouselKind::FeatureCards,
            autoplay_interval: Duration::from_millis(DEFAULT_FEATURE_CARDS_INTERVAL_MS),
            gesture_cooldown: Duration::from_millis(DEFAULT_FEATURE_CARDS_COOLDOWN_MS),
            guard: TransitionGuard::Locked(Duration::from_millis(DEFAULT_TRANSITION_MS)),
            desktop: DesktopLayout::StaticGrid,
        }
    }

    #[must_use]
    pub fn for_kind(kind: CarouselKind) -> Self {
        match kind {
            CarouselKind::Reviews => Self::reviews(),
            CarouselKind::AppScreens => Self::app_screens(),
            CarouselKind::FeatureCards => Self::feature_cards(),
        }
    }

    /// Applies a configuration section on top of the built-in preset.
    ///
    /// Out-of-range values are clamped; the layout kind (strip or grid) is
    /// fixed per section and cannot be changed from configuration.
    #[must_use]
    pub fn with_config(mut self, section: &CarouselConfig) -> Self {
        if let Some(ms) = section.autoplay_interval_ms {
            self.autoplay_interval = Duration::from_millis(
                ms.clamp(MIN_AUTOPLAY_INTERVAL_MS, MAX_AUTOPLAY_INTERVAL_MS),
            );
        }
        if let Some(ms) = section.gesture_cooldown_ms {
            self.gesture_cooldown = Duration::from_millis(ms.min(MAX_GESTURE_COOLDOWN_MS));
        }
        if let Some(ms) = section.transition_ms {
            self.guard = match ms.min(MAX_TRANSITION_MS) {
                0 => TransitionGuard::Unguarded,
                window => TransitionGuard::Locked(Duration::from_millis(window)),
            };
        }
        if let DesktopLayout::Strip(geometry) = &mut self.desktop {
            if let Some(width) = section.card_width_px.filter(|w| w.is_finite() && *w > 0.0) {
                geometry.card_width = width;
            }
            if let Some(gap) = section.card_gap_px.filter(|g| g.is_finite() && *g >= 0.0) {
                geometry.gap = gap;
            }
            if let Some(tuning) = section.gap_tuning.filter(|t| t.is_finite()) {
                geometry.gap_tuning = tuning.clamp(MIN_GAP_TUNING, MAX_GAP_TUNING);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_reviews_use_the_strip_and_skip_the_lock() {
        assert!(matches!(Preset::reviews().desktop, DesktopLayout::Strip(_)));
        assert_eq!(Preset::reviews().guard, TransitionGuard::Unguarded);

        for preset in [Preset::app_screens(), Preset::feature_cards()] {
            assert_eq!(preset.desktop, DesktopLayout::StaticGrid);
            assert_eq!(
                preset.guard,
                TransitionGuard::Locked(Duration::from_millis(400))
            );
        }
    }

    #[test]
    fn for_kind_matches_constructor() {
        for kind in CarouselKind::ALL {
            assert_eq!(Preset::for_kind(kind).kind, kind);
        }
    }

    #[test]
    fn config_overrides_are_clamped() {
        let section = CarouselConfig {
            autoplay_interval_ms: Some(10),
            gesture_cooldown_ms: Some(999_999),
            transition_ms: Some(0),
            ..CarouselConfig::default()
        };
        let preset = Preset::app_screens().with_config(&section);
        assert_eq!(
            preset.autoplay_interval,
            Duration::from_millis(MIN_AUTOPLAY_INTERVAL_MS)
        );
        assert_eq!(
            preset.gesture_cooldown,
            Duration::from_millis(MAX_GESTURE_COOLDOWN_MS)
        );
        assert_eq!(preset.guard, TransitionGuard::Unguarded);
    }

    #[test]
    fn strip_geometry_ignores_invalid_values() {
        let section = CarouselConfig {
            card_width_px: Some(-5.0),
            card_gap_px: Some(f32::NAN),
            gap_tuning: Some(100.0),
            ..CarouselConfig::default()
        };
        let DesktopLayout::Strip(geometry) = Preset::reviews().with_config(&section).desktop else {
            panic!("reviews should keep the strip layout");
        };
        assert_eq!(geometry.card_width, DEFAULT_CARD_WIDTH_PX);
        assert_eq!(geometry.gap, DEFAULT_CARD_GAP_PX);
        assert_eq!(geometry.gap_tuning, MAX_GAP_TUNING);
    }

    #[test]
    fn grid_sections_ignore_strip_geometry() {
        let section = CarouselConfig {
            card_width_px: Some(500.0),
            ..CarouselConfig::default()
        };
        assert_eq!(
            Preset::feature_cards().with_config(&section).desktop,
            DesktopLayout::StaticGrid
        );
    }
}
