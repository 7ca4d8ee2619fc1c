// SPDX-License-Identifier: MPL-2.0
//! How the active slide is presented for each viewport mode.

/// Geometry of the desktop review strip, where all cards sit in a row and the
/// row is translated so the active card lands in the middle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripGeometry {
    pub card_width: f32,
    pub gap: f32,
    /// Visual-tuning multiplier applied to the gap when centering.
    pub gap_tuning: f32,
}

impl StripGeometry {
    /// Distance between the left edges of two neighbouring cards.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.card_width + self.gap
    }

    /// Horizontal translation of the row that centers card `index` inside a
    /// viewport of `viewport_width`.
    #[must_use]
    pub fn centered_offset(&self, index: usize, viewport_width: f32) -> f32 {
        (viewport_width - self.card_width) / 2.0
            - index as f32 * self.pitch()
            - self.gap * self.gap_tuning
    }
}

/// What the carousel does above the mobile breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DesktopLayout {
    /// Keep cycling, with the whole set in a translated strip.
    Strip(StripGeometry),
    /// Stop cycling and let a static grid show every slide.
    StaticGrid,
}

/// The element state the last transition left behind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Presentation {
    /// One slide shown, centered by layout. Translation is zero.
    Single { active: usize },
    /// All slides in a row, translated by `offset_x`.
    Strip { active: usize, offset_x: f32 },
    /// Every slide shown; no slide is singled out and no translation applies.
    Grid,
}

impl Presentation {
    /// Index of the highlighted slide, if this presentation has one.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        match *self {
            Presentation::Single { active } | Presentation::Strip { active, .. } => Some(active),
            Presentation::Grid => None,
        }
    }

    #[must_use]
    pub fn translation_x(&self) -> f32 {
        match *self {
            Presentation::Strip { offset_x, .. } => offset_x,
            Presentation::Single { .. } | Presentation::Grid => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, PX_EPSILON};

    const GEOMETRY: StripGeometry = StripGeometry {
        card_width: 300.0,
        gap: 20.0,
        gap_tuning: 0.0,
    };

    #[test]
    fn first_card_is_centered_in_viewport() {
        // (1000 - 300) / 2 = 350: card 0 spans 350..650, centered on 500.
        assert_abs_diff_eq!(GEOMETRY.centered_offset(0, 1000.0), 350.0);
    }

    #[test]
    fn each_step_shifts_by_one_pitch() {
        let a = GEOMETRY.centered_offset(2, 1000.0);
        let b = GEOMETRY.centered_offset(3, 1000.0);
        assert_abs_diff_eq!(a - b, GEOMETRY.pitch());
    }

    #[test]
    fn active_card_center_matches_viewport_center() {
        for index in 0..6 {
            let offset = GEOMETRY.centered_offset(index, 1280.0);
            let card_left = offset + index as f32 * GEOMETRY.pitch();
            assert_abs_diff_eq!(card_left + GEOMETRY.card_width / 2.0, 640.0, epsilon = PX_EPSILON);
        }
    }

    #[test]
    fn gap_tuning_nudges_by_a_fraction_of_the_gap() {
        let tuned = StripGeometry {
            gap_tuning: 0.5,
            ..GEOMETRY
        };
        assert_abs_diff_eq!(
            GEOMETRY.centered_offset(1, 1000.0) - tuned.centered_offset(1, 1000.0),
            10.0
        );
    }

    #[test]
    fn only_strip_translates() {
        assert_eq!(Presentation::Single { active: 3 }.translation_x(), 0.0);
        assert_eq!(Presentation::Grid.translation_x(), 0.0);
        assert_eq!(
            Presentation::Strip {
                active: 1,
                offset_x: -42.0
            }
            .translation_x(),
            -42.0
        );
        assert_eq!(Presentation::Grid.active(), None);
    }
}
