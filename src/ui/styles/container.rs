// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Slide card surface. `highlighted` marks the centered card of a strip.
pub fn card(highlighted: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let base = palette.background.weak.color;
        let border_color = if highlighted {
            palette::PRIMARY_500
        } else {
            palette.background.strong.color
        };
        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::SURFACE,
                ..base
            })),
            text_color: Some(palette.background.weak.text),
            border: Border {
                color: border_color,
                width: if highlighted { 2.0 } else { 1.0 },
                radius: radius::LG.into(),
            },
            shadow: if highlighted { shadow::MD } else { shadow::SM },
            ..container::Style::default()
        }
    }
}

/// Small video badge in the corner of a card.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_600)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
