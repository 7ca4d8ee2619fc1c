// SPDX-License-Identifier: MPL-2.0
//! Button styles for carousel navigation.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Round previous/next arrow buttons.
pub fn nav(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let (background, shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, shadow::MD),
        button::Status::Pressed => (palette::PRIMARY_600, shadow::SM),
        button::Status::Active => (palette::PRIMARY_500, shadow::SM),
        button::Status::Disabled => (palette.background.strong.color, shadow::NONE),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow,
        snap: true,
    }
}

/// Slide indicator dot; the active one is drawn as a filled pill.
pub fn indicator(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text = theme.extended_palette().background.base.text;
        let color = if active {
            palette::PRIMARY_500
        } else {
            let alpha = match status {
                button::Status::Hovered => opacity::OVERLAY_MEDIUM,
                _ => opacity::OVERLAY_SUBTLE,
            };
            Color { a: alpha, ..text }
        };
        button::Style {
            background: Some(Background::Color(color)),
            text_color: text,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
