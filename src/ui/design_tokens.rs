// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the landing page.
//!
//! - **Palette**: base colors
//! - **Spacing**: 8px grid
//! - **Sizing**: fixed component sizes
//! - **Typography**: font size scale
//! - **Radius** and **Shadow**

use iced::Color;

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const BLACK: Color = Color::BLACK;

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const SURFACE: f32 = 0.95;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

pub mod sizing {
    /// Height shared by every slide card so sections do not jump.
    pub const CARD_HEIGHT: f32 = 180.0;
    /// Widest a single mobile card grows.
    pub const CARD_MAX_WIDTH: f32 = 520.0;
    /// Card width in the static desktop grid.
    pub const GRID_CARD_WIDTH: f32 = 270.0;
    pub const INDICATOR: f32 = 10.0;
    pub const INDICATOR_ACTIVE: f32 = 24.0;
    pub const NAV_BUTTON: f32 = 36.0;
    /// Widest the page content grows on large screens.
    pub const PAGE_MAX_WIDTH: f32 = 1200.0;
}

pub mod typography {
    pub const HERO: f32 = 34.0;
    pub const TITLE_MD: f32 = 22.0;
    pub const TITLE_SM: f32 = 17.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::XXL > spacing::XL);

    assert!(sizing::INDICATOR_ACTIVE > sizing::INDICATOR);
    assert!(sizing::PAGE_MAX_WIDTH > sizing::CARD_MAX_WIDTH);

    assert!(typography::HERO > typography::TITLE_MD);
    assert!(typography::BODY_LG > typography::BODY);

    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);
};
