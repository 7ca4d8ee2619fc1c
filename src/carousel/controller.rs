// SPDX-License-Identifier: MPL-2.0
//! The carousel controller.
//!
//! One [`Carousel`] is mounted per landing-page section and owns all of that
//! section's state. Raw input from the window ([`Input`]) is normalized into
//! the closed [`Command`] set and fed through [`Carousel::dispatch`], the only
//! function that changes the current index or the layout mode.

use super::autoplay::{AutoPlay, AutoPlayChange};
use super::gesture::{Gesture, GestureThresholds, GestureTracker};
use super::layout::{DesktopLayout, Presentation};
use super::preset::{CarouselKind, Preset};
use super::slides::{Slide, SlideSet};
use super::transition::TransitionState;
use super::viewport::{Breakpoint, ViewportMode};
use crate::config::{Config, DEFAULT_MOBILE_BREAKPOINT_PX};
use crate::error::MountError;
use iced::Point;
use std::time::Instant;

/// State-changing requests understood by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    /// Any integer; wrapped into range before use.
    GoTo(i64),
    ModeChanged(ViewportMode),
}

impl Gesture {
    /// The command a completed gesture maps to.
    #[must_use]
    pub fn command(self) -> Option<Command> {
        match self {
            Gesture::SwipeLeft | Gesture::Tap => Some(Command::Next),
            Gesture::SwipeRight => Some(Command::Prev),
            Gesture::Ignored => None,
        }
    }
}

/// What a dispatched command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Moved { from: usize, to: usize },
    /// The target was already active; the presentation was re-applied.
    Unchanged { index: usize },
    /// Rejected because a transition is still animating.
    Dropped,
    /// Rejected because the section is showing its static desktop grid.
    Inactive,
    ModeSwitched { from: ViewportMode, to: ViewportMode },
}

/// Raw input from the window, mouse, touch screen or timer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// Navigation button or indicator press.
    Command(Command),
    PointerEntered,
    PointerLeft,
    VisibilityChanged { visible: bool },
    Resized { width: f32 },
    GestureStarted(Point),
    GestureMoved(Point),
    GestureEnded(Point),
    GestureCancelled,
    Tick,
}

/// Everything observable that came out of one [`Carousel::handle`] call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Response {
    pub outcome: Option<Outcome>,
    pub gesture: Option<Gesture>,
    pub autoplay: Option<AutoPlayChange>,
    /// The in-flight gesture is horizontal; page scrolling should not react.
    pub suppress_scroll: bool,
    /// A transition window closed during this call.
    pub settled: bool,
}

/// Environment a carousel is mounted into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountSettings {
    pub thresholds: GestureThresholds,
    pub breakpoint: Breakpoint,
    pub viewport_width: f32,
}

impl Default for MountSettings {
    fn default() -> Self {
        Self {
            thresholds: GestureThresholds::default(),
            breakpoint: Breakpoint::default(),
            viewport_width: 375.0,
        }
    }
}

impl MountSettings {
    #[must_use]
    pub fn from_config(config: &Config, viewport_width: f32) -> Self {
        Self {
            thresholds: GestureThresholds::from_config(&config.gesture),
            breakpoint: Breakpoint::new(
                config
                    .viewport
                    .mobile_breakpoint_px
                    .unwrap_or(DEFAULT_MOBILE_BREAKPOINT_PX),
            ),
            viewport_width,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Carousel {
    preset: Preset,
    slides: SlideSet,
    indicators: bool,
    current: usize,
    /// Mode the presentation was last rendered for.
    mode: ViewportMode,
    viewport_width: f32,
    breakpoint: Breakpoint,
    thresholds: GestureThresholds,
    transition: TransitionState,
    autoplay: AutoPlay,
    gesture: GestureTracker,
    presentation: Presentation,
}

impl Carousel {
    /// Mounts a carousel on the first slide.
    ///
    /// Indicators are enabled only when `indicator_count` pairs 1:1 with the
    /// slides. Auto-play starts immediately unless the section opens on its
    /// static desktop grid.
    pub fn mount(
        preset: Preset,
        slides: Vec<Slide>,
        indicator_count: usize,
        settings: MountSettings,
        now: Instant,
    ) -> Result<Self, MountError> {
        let slides = SlideSet::new(slides)?;
        let indicators = indicator_count == slides.len();
        let viewport_width = sanitize_width(settings.viewport_width);
        let mode = ViewportMode::from_width(viewport_width, settings.breakpoint);

        let mut carousel = Self {
            autoplay: AutoPlay::new(preset.autoplay_interval, preset.gesture_cooldown),
            preset,
            slides,
            indicators,
            current: 0,
            mode,
            viewport_width,
            breakpoint: settings.breakpoint,
            thresholds: settings.thresholds,
            transition: TransitionState::Idle,
            gesture: GestureTracker::default(),
            presentation: Presentation::Grid,
        };
        carousel.render();
        if carousel.cycles() {
            carousel.autoplay.start(now);
        }
        Ok(carousel)
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// The single state-transition function.
    pub fn dispatch(&mut self, command: Command, now: Instant) -> Outcome {
        self.transition.settle(now);
        match command {
            Command::Next => self.step(self.current as i64 + 1, now),
            Command::Prev => self.step(self.current as i64 - 1, now),
            Command::GoTo(index) => self.step(index, now),
            Command::ModeChanged(mode) => self.switch_mode(mode, now),
        }
    }

    pub fn go_to(&mut self, index: i64, now: Instant) -> Outcome {
        self.dispatch(Command::GoTo(index), now)
    }

    pub fn next(&mut self, now: Instant) -> Outcome {
        self.dispatch(Command::Next, now)
    }

    pub fn prev(&mut self, now: Instant) -> Outcome {
        self.dispatch(Command::Prev, now)
    }

    fn step(&mut self, target: i64, now: Instant) -> Outcome {
        if !self.cycles() {
            return Outcome::Inactive;
        }
        if self.transition.is_transitioning() {
            return Outcome::Dropped;
        }

        let from = self.current;
        let to = self.slides.normalize(target);
        self.current = to;
        self.render();
        if to == from {
            return Outcome::Unchanged { index: to };
        }
        self.transition.begin(self.preset.guard, now);
        Outcome::Moved { from, to }
    }

    fn switch_mode(&mut self, to: ViewportMode, now: Instant) -> Outcome {
        let from = self.mode;
        if from == to {
            self.render();
            return Outcome::Unchanged {
                index: self.current,
            };
        }

        self.mode = to;
        if self.preset.desktop == DesktopLayout::StaticGrid {
            match to {
                ViewportMode::Mobile => {
                    self.render();
                    self.autoplay.start(now);
                }
                ViewportMode::Desktop => {
                    self.autoplay.stop(now);
                    self.transition.reset();
                    if self.gesture.is_tracking() {
                        // The release will never be classified; start the
                        // cooldown now so the hold does not outlive the grid.
                        self.gesture.cancel();
                        self.autoplay.gesture_ended(now);
                    }
                    self.render();
                }
            }
        } else {
            self.render();
        }
        Outcome::ModeSwitched { from, to }
    }

    fn render(&mut self) {
        self.presentation = match (self.mode, self.preset.desktop) {
            (ViewportMode::Mobile, _) => Presentation::Single {
                active: self.current,
            },
            (ViewportMode::Desktop, DesktopLayout::Strip(geometry)) => Presentation::Strip {
                active: self.current,
                offset_x: geometry.centered_offset(self.current, self.viewport_width),
            },
            (ViewportMode::Desktop, DesktopLayout::StaticGrid) => Presentation::Grid,
        };
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Normalizes one raw input into commands and timer changes.
    pub fn handle(&mut self, input: Input, now: Instant) -> Response {
        let was_playing = self.autoplay.is_playing();
        let mut response = Response {
            settled: self.transition.settle(now),
            ..Response::default()
        };

        match input {
            Input::Command(command) => {
                response.outcome = Some(self.dispatch(command, now));
            }
            Input::PointerEntered => {
                self.autoplay.set_hovered(true, now);
            }
            Input::PointerLeft => {
                self.autoplay.set_hovered(false, now);
            }
            Input::VisibilityChanged { visible } => {
                self.autoplay.set_hidden(!visible, now);
            }
            Input::Resized { width } => {
                self.viewport_width = sanitize_width(width);
                let mode = ViewportMode::from_width(self.viewport_width, self.breakpoint);
                if mode == self.mode {
                    // Same mode, but the strip offset depends on the width.
                    self.render();
                } else {
                    response.outcome = Some(self.dispatch(Command::ModeChanged(mode), now));
                }
            }
            Input::GestureStarted(position) => {
                if self.cycles() {
                    self.gesture.begin(position, now);
                    self.autoplay.gesture_started(now);
                }
            }
            Input::GestureMoved(position) => {
                response.suppress_scroll =
                    self.gesture.should_suppress_scroll(position, &self.thresholds);
            }
            Input::GestureEnded(position) => {
                if let Some(gesture) = self.gesture.finish(position, now, &self.thresholds) {
                    self.autoplay.gesture_ended(now);
                    response.gesture = Some(gesture);
                    if let Some(command) = gesture.command() {
                        response.outcome = Some(self.dispatch(command, now));
                    }
                }
            }
            Input::GestureCancelled => {
                if self.gesture.is_tracking() {
                    self.gesture.cancel();
                    self.autoplay.gesture_ended(now);
                }
            }
            Input::Tick => {
                if self.autoplay.poll(now).fire {
                    response.outcome = Some(self.dispatch(Command::Next, now));
                }
            }
        }

        response.autoplay = match (was_playing, self.autoplay.is_playing()) {
            (false, true) => Some(AutoPlayChange::Started),
            (true, false) => Some(AutoPlayChange::Stopped),
            _ => None,
        };
        response
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn kind(&self) -> CarouselKind {
        self.preset.kind
    }

    #[must_use]
    pub fn preset(&self) -> &Preset {
        &self.preset
    }

    #[must_use]
    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: an empty carousel cannot be mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn active_slide(&self) -> Option<&Slide> {
        self.presentation
            .active()
            .and_then(|index| self.slides.get(index))
    }

    #[must_use]
    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    #[must_use]
    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    #[must_use]
    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    #[must_use]
    pub fn slide_is_active(&self, index: usize) -> bool {
        self.presentation.active() == Some(index)
    }

    #[must_use]
    pub fn has_indicators(&self) -> bool {
        self.indicators
    }

    #[must_use]
    pub fn indicator_is_active(&self, index: usize) -> bool {
        self.indicators && self.slide_is_active(index)
    }

    #[must_use]
    pub fn is_auto_playing(&self) -> bool {
        self.autoplay.is_playing()
    }

    #[must_use]
    pub fn autoplay(&self) -> &AutoPlay {
        &self.autoplay
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_transitioning()
    }

    #[must_use]
    pub fn is_gesture_in_progress(&self) -> bool {
        self.gesture.is_tracking()
    }

    /// True while the section cycles slides in its current mode.
    #[must_use]
    pub fn cycles(&self) -> bool {
        self.mode.is_mobile() || matches!(self.preset.desktop, DesktopLayout::Strip(_))
    }

    /// True while some deadline is pending and the owner must keep ticking.
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        self.transition.is_transitioning() || self.autoplay.needs_polling()
    }
}

fn sanitize_width(width: f32) -> f32 {
    if width.is_finite() {
        width.max(0.0)
    } else {
        0.0
    }
}
