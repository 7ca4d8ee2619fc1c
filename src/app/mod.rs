// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the landing-page carousels.
//!
//! The `App` mounts one [`Carousel`] per section, translates window, mouse
//! and touch events into carousel inputs, and forwards activity to the
//! diagnostics log and the optional video embed.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, MouseEvent, PointerEvent};

use crate::carousel::{Carousel, CarouselKind, MountSettings, Preset};
use crate::collaborators::EmbedHost;
use crate::config::{self, CarouselConfig, Config, ThemeMode};
use crate::content;
use crate::diagnostics::{BufferCapacity, CarouselEventKind, DiagnosticsLog};
use crate::error::MountError;
use crate::i18n::fluent::I18n;
use iced::widget::scrollable::RelativeOffset;
use iced::{window, Element, Point, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// Mounted sections in page order. Sections that failed to mount are absent.
    carousels: Vec<Carousel>,
    diagnostics: DiagnosticsLog,
    embed: EmbedHost,
    window_width: f32,
    pointer: PointerRouting,
    scroll: ScrollLock,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("carousels", &self.carousels.len())
            .field("window_width", &self.window_width)
            .finish()
    }
}

/// Which section owns the finger currently on the page.
///
/// A press reaches `update` twice: once from the section's hover area and
/// once from the global event stream, in either order. The first half waits
/// here for the second.
#[derive(Debug, Clone, Default)]
struct PointerRouting {
    cursor: Option<Point>,
    mouse_down: bool,
    pending_press: Option<(Point, Instant)>,
    press_target: Option<CarouselKind>,
    owner: Option<CarouselKind>,
}

/// Page scroll position held while a horizontal swipe is in progress.
#[derive(Debug, Clone, Copy, Default)]
struct ScrollLock {
    locked: bool,
    offset: RelativeOffset,
}

fn window_settings(width: f32) -> window::Settings {
    window::Settings {
        size: iced::Size::new(width, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

fn initial_width(flags: &Flags) -> f32 {
    flags
        .width
        .filter(|w| w.is_finite())
        .map_or(WINDOW_DEFAULT_WIDTH, |w| w.max(MIN_WINDOW_WIDTH))
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());
    let width = initial_width(&flags);

    // iced 0.14 requires an `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings(width))
        .subscription(App::subscription)
        .run()
}

/// Section settings for a carousel kind.
fn section_config(config: &Config, kind: CarouselKind) -> &CarouselConfig {
    match kind {
        CarouselKind::Reviews => &config.reviews,
        CarouselKind::AppScreens => &config.app_screens,
        CarouselKind::FeatureCards => &config.feature_cards,
    }
}

fn mount_section(
    config: &Config,
    kind: CarouselKind,
    window_width: f32,
    now: Instant,
) -> Result<Carousel, MountError> {
    let section = section_config(config, kind);
    if section.enabled == Some(false) {
        return Err(MountError::Disabled);
    }
    let slides = content::slides(kind);
    let indicators = slides.len();
    Carousel::mount(
        Preset::for_kind(kind).with_config(section),
        slides,
        indicators,
        MountSettings::from_config(config, window_width),
        now,
    )
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let mut app = Self::with_config(&config, i18n, initial_width(&flags), Instant::now());

        if let Some(key) = config_warning {
            eprintln!("[config] {}", app.i18n.tr(&key));
            app.diagnostics
                .record(None, CarouselEventKind::Warning { key }, Instant::now());
        }

        let task = app.schedule_embeds(Instant::now());
        (app, task)
    }

    /// Builds the application around an already loaded configuration.
    ///
    /// Sections that cannot be mounted are left out and logged.
    pub fn with_config(config: &Config, i18n: I18n, window_width: f32, now: Instant) -> Self {
        let capacity = BufferCapacity::new(
            config
                .diagnostics
                .buffer_capacity
                .unwrap_or(config::DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        );
        let mut diagnostics = DiagnosticsLog::new(capacity, now);

        let mut carousels = Vec::with_capacity(CarouselKind::ALL.len());
        for kind in CarouselKind::ALL {
            match mount_section(config, kind, window_width, now) {
                Ok(carousel) => {
                    diagnostics.record_mount(&carousel, now);
                    carousels.push(carousel);
                }
                Err(err) => {
                    eprintln!("[carousel] {} not mounted: {err}", kind.id());
                    diagnostics.record(
                        Some(kind),
                        CarouselEventKind::MountFailed {
                            reason: err.i18n_key().to_string(),
                        },
                        now,
                    );
                }
            }
        }

        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            carousels,
            diagnostics,
            embed: EmbedHost::detached(),
            window_width,
            pointer: PointerRouting::default(),
            scroll: ScrollLock::default(),
        }
    }

    /// Plugs in a video player for slides that carry a video identifier.
    pub fn attach_embed(&mut self, embed: EmbedHost) {
        self.embed = embed;
    }

    #[must_use]
    pub fn carousel(&self, kind: CarouselKind) -> Option<&Carousel> {
        self.carousels.iter().find(|c| c.kind() == kind)
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsLog {
        &self.diagnostics
    }

    #[must_use]
    pub fn embed(&self) -> &EmbedHost {
        &self.embed
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll.locked
    }

    fn needs_ticks(&self) -> bool {
        self.carousels.iter().any(Carousel::needs_ticks)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.needs_ticks()),
        ])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            carousels: &self.carousels,
        })
    }
}
