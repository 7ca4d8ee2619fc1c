// SPDX-License-Identifier: MPL-2.0
//! Slide content of the landing page.
//!
//! Slides only carry i18n keys; the text lives in `assets/i18n/*.ftl`.

use crate::carousel::{CarouselKind, Slide};

/// Identifier of the product tour played from the first app screen.
pub const APP_TOUR_VIDEO_ID: &str = "clockwise-app-tour";

/// Number of slides each section ships with.
#[must_use]
pub fn slide_count(kind: CarouselKind) -> usize {
    match kind {
        CarouselKind::Reviews => 6,
        CarouselKind::AppScreens => 4,
        CarouselKind::FeatureCards => 5,
    }
}

#[must_use]
pub fn slides(kind: CarouselKind) -> Vec<Slide> {
    (1..=slide_count(kind))
        .map(|n| {
            let slide = Slide::new(
                format!("{}-slide-{n}-title", kind.id()),
                format!("{}-slide-{n}-body", kind.id()),
            );
            if kind == CarouselKind::AppScreens && n == 1 {
                slide.with_video(APP_TOUR_VIDEO_ID)
            } else {
                slide
            }
        })
        .collect()
}

#[must_use]
pub fn section_title_key(kind: CarouselKind) -> String {
    format!("section-{}-title", kind.id())
}
