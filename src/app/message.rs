// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::carousel::{CarouselKind, Input, VideoId};
use iced::widget::scrollable::RelativeOffset;
use iced::{window, Point};
use std::time::Instant;

/// A single finger on the page.
///
/// Touch events map one to one. Mouse input is translated into these by
/// `update` while the left button is held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed(Point),
    Moved(Point),
    Released(Point),
    /// The platform took the touch away (e.g. a system gesture).
    Lost,
}

/// Raw left-button mouse input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseEvent {
    CursorMoved(Point),
    CursorLeft,
    LeftPressed,
    LeftReleased,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Input that targets one carousel directly: its buttons, indicators and
    /// hover area.
    Carousel { kind: CarouselKind, input: Input },
    /// A press landed on a section outside its buttons.
    SectionPressed(CarouselKind),
    Pointer(PointerEvent),
    Mouse(MouseEvent),
    WindowResized(iced::Size),
    /// Focus doubles as page visibility.
    WindowFocusChanged { focused: bool },
    PageScrolled(RelativeOffset),
    Tick(Instant),
    /// The fixed embed delay ran out for this video.
    EmbedDelayElapsed(VideoId),
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_SHOWCASE_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Initial window width in logical pixels.
    pub width: Option<f32>,
}
