// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::message::{MouseEvent, PointerEvent};
use super::view::PAGE_SCROLL_ID;
use super::{paths, App, Message};
use crate::carousel::{CarouselKind, Input, Outcome, VideoId};
use crate::collaborators::EmbedTrigger;
use crate::diagnostics::{CarouselEventKind, DIAGNOSTICS_FILE};
use crate::error::Result;
use iced::widget::{operation, Id};
use iced::{Point, Task};
use std::path::{Path, PathBuf};
use std::time::Instant;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        self.update_at(message, Instant::now())
    }

    /// [`App::update`] with an explicit clock.
    pub fn update_at(&mut self, message: Message, now: Instant) -> Task<Message> {
        match message {
            Message::Carousel { kind, input } => self.handle_carousel(kind, input, now),
            Message::SectionPressed(kind) => self.handle_section_pressed(kind),
            Message::Pointer(event) => self.handle_pointer(event, now),
            Message::Mouse(event) => self.handle_mouse(event, now),
            Message::WindowResized(size) => {
                self.window_width = size.width;
                self.broadcast(Input::Resized { width: size.width }, now)
            }
            Message::WindowFocusChanged { focused } => {
                self.embed.set_visible(focused);
                self.broadcast(Input::VisibilityChanged { visible: focused }, now)
            }
            Message::PageScrolled(offset) => {
                if self.scroll.locked {
                    if offset != self.scroll.offset {
                        return operation::snap_to(Id::new(PAGE_SCROLL_ID), self.scroll.offset);
                    }
                } else {
                    self.scroll.offset = offset;
                }
                Task::none()
            }
            // The tick carries its own instant; deadlines are checked against it.
            Message::Tick(at) => self.handle_tick(at),
            Message::EmbedDelayElapsed(id) => {
                if self.is_video_active(&id) {
                    self.load_video(&id, now);
                }
                Task::none()
            }
            Message::WindowCloseRequested(_window) => {
                if let Some(dir) = paths::get_app_config_dir() {
                    match self.write_diagnostics(&dir) {
                        Ok(path) => eprintln!(
                            "[diagnostics] {} carousel events written to {}",
                            self.diagnostics.len(),
                            path.display()
                        ),
                        Err(err) => eprintln!("[diagnostics] export failed: {err}"),
                    }
                }
                iced::exit()
            }
        }
    }

    /// Writes the session's diagnostics log into `dir`.
    pub fn write_diagnostics(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(DIAGNOSTICS_FILE);
        self.diagnostics.write_json(&path)?;
        Ok(path)
    }

    fn handle_carousel(&mut self, kind: CarouselKind, input: Input, now: Instant) -> Task<Message> {
        let Some(carousel) = self.carousels.iter_mut().find(|c| c.kind() == kind) else {
            return Task::none();
        };
        let response = carousel.handle(input, now);
        self.diagnostics.record_response(kind, &response, now);

        if response.suppress_scroll {
            self.scroll.locked = true;
        }

        match response.outcome {
            Some(Outcome::Moved { .. } | Outcome::ModeSwitched { .. }) => {
                self.schedule_embed(kind, now)
            }
            _ => Task::none(),
        }
    }

    fn broadcast(&mut self, input: Input, now: Instant) -> Task<Message> {
        let kinds: Vec<_> = self.carousels.iter().map(|c| c.kind()).collect();
        Task::batch(
            kinds
                .into_iter()
                .map(|kind| self.handle_carousel(kind, input, now)),
        )
    }

    fn handle_tick(&mut self, at: Instant) -> Task<Message> {
        let kinds: Vec<_> = self
            .carousels
            .iter()
            .filter(|c| c.needs_ticks())
            .map(|c| c.kind())
            .collect();
        Task::batch(
            kinds
                .into_iter()
                .map(|kind| self.handle_carousel(kind, Input::Tick, at)),
        )
    }

    // =========================================================================
    // Pointer routing
    // =========================================================================

    fn handle_section_pressed(&mut self, kind: CarouselKind) -> Task<Message> {
        match self.pointer.pending_press.take() {
            Some((position, at)) => self.begin_gesture(kind, position, at),
            None => {
                self.pointer.press_target = Some(kind);
                Task::none()
            }
        }
    }

    fn handle_pointer(&mut self, event: PointerEvent, now: Instant) -> Task<Message> {
        match event {
            PointerEvent::Pressed(position) => match self.pointer.press_target.take() {
                Some(kind) => self.begin_gesture(kind, position, now),
                // Either a button took the press, or the section's half of it
                // has not arrived yet.
                None => {
                    self.pointer.pending_press = Some((position, now));
                    Task::none()
                }
            },
            PointerEvent::Moved(position) => match self.pointer.owner {
                Some(kind) => self.handle_carousel(kind, Input::GestureMoved(position), now),
                None => Task::none(),
            },
            PointerEvent::Released(position) => {
                self.end_press();
                match self.pointer.owner.take() {
                    Some(kind) => self.handle_carousel(kind, Input::GestureEnded(position), now),
                    None => Task::none(),
                }
            }
            PointerEvent::Lost => {
                self.end_press();
                match self.pointer.owner.take() {
                    Some(kind) => self.handle_carousel(kind, Input::GestureCancelled, now),
                    None => Task::none(),
                }
            }
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent, now: Instant) -> Task<Message> {
        match event {
            MouseEvent::CursorMoved(position) => {
                self.pointer.cursor = Some(position);
                if self.pointer.mouse_down {
                    self.handle_pointer(PointerEvent::Moved(position), now)
                } else {
                    Task::none()
                }
            }
            MouseEvent::CursorLeft => {
                self.pointer.cursor = None;
                if std::mem::take(&mut self.pointer.mouse_down) {
                    self.handle_pointer(PointerEvent::Lost, now)
                } else {
                    Task::none()
                }
            }
            MouseEvent::LeftPressed => match self.pointer.cursor {
                Some(position) => {
                    self.pointer.mouse_down = true;
                    self.handle_pointer(PointerEvent::Pressed(position), now)
                }
                None => Task::none(),
            },
            MouseEvent::LeftReleased => {
                if !std::mem::take(&mut self.pointer.mouse_down) {
                    return Task::none();
                }
                let event = self
                    .pointer
                    .cursor
                    .map_or(PointerEvent::Lost, PointerEvent::Released);
                self.handle_pointer(event, now)
            }
        }
    }

    fn begin_gesture(&mut self, kind: CarouselKind, position: Point, at: Instant) -> Task<Message> {
        self.pointer.owner = Some(kind);
        self.handle_carousel(kind, Input::GestureStarted(position), at)
    }

    fn end_press(&mut self) {
        self.pointer.pending_press = None;
        self.pointer.press_target = None;
        self.scroll.locked = false;
    }

    // =========================================================================
    // Video embed
    // =========================================================================

    /// Triggers the embed for every section whose active slide has a video.
    pub(super) fn schedule_embeds(&mut self, now: Instant) -> Task<Message> {
        let kinds: Vec<_> = self.carousels.iter().map(|c| c.kind()).collect();
        Task::batch(
            kinds
                .into_iter()
                .map(|kind| self.schedule_embed(kind, now)),
        )
    }

    fn schedule_embed(&mut self, kind: CarouselKind, now: Instant) -> Task<Message> {
        if !self.embed.is_attached() {
            return Task::none();
        }
        let Some(id) = self
            .carousel(kind)
            .and_then(|c| c.active_slide())
            .and_then(|slide| slide.video_id())
            .cloned()
        else {
            return Task::none();
        };

        match self.embed.trigger() {
            EmbedTrigger::OnActivation => {
                self.load_video(&id, now);
                Task::none()
            }
            EmbedTrigger::FixedDelay(delay) => Task::perform(
                async move {
                    tokio::time::sleep(delay).await;
                    id
                },
                Message::EmbedDelayElapsed,
            ),
        }
    }

    fn is_video_active(&self, id: &VideoId) -> bool {
        self.carousels.iter().any(|c| {
            c.active_slide()
                .and_then(|slide| slide.video_id())
                .is_some_and(|active| active == id)
        })
    }

    fn load_video(&mut self, id: &VideoId, now: Instant) {
        if self.embed.load(id) {
            let carousel = self
                .carousels
                .iter()
                .find(|c| c.active_slide().and_then(|s| s.video_id()) == Some(id))
                .map(|c| c.kind());
            self.diagnostics.record(
                carousel,
                CarouselEventKind::VideoLoaded {
                    id: id.as_str().to_string(),
                },
                now,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{Command, Presentation, ViewportMode};
    use crate::collaborators::{EmbedHost, VideoEmbed};
    use crate::config::Config;
    use crate::content::APP_TOUR_VIDEO_ID;
    use crate::i18n::fluent::I18n;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    const MOBILE: f32 = 375.0;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn app(width: f32, t0: Instant) -> App {
        App::with_config(&Config::default(), I18n::default(), width, t0)
    }

    fn index(app: &App, kind: CarouselKind) -> usize {
        app.carousel(kind).expect("mounted").current_index()
    }

    fn swipe(app: &mut App, kind: CarouselKind, from: Point, to: Point, t0: Instant) {
        let _ = app.update_at(Message::SectionPressed(kind), t0);
        let _ = app.update_at(Message::Pointer(PointerEvent::Pressed(from)), t0);
        let _ = app.update_at(Message::Pointer(PointerEvent::Released(to)), t0 + ms(150));
    }

    #[test]
    fn all_sections_mount_by_default() {
        let app = app(MOBILE, Instant::now());
        for kind in CarouselKind::ALL {
            assert!(app.carousel(kind).is_some());
        }
        assert_eq!(app.diagnostics().len(), 3);
    }

    #[test]
    fn disabled_section_is_left_out() {
        let mut config = Config::default();
        config.feature_cards.enabled = Some(false);
        let app = App::with_config(&config, I18n::default(), MOBILE, Instant::now());
        assert!(app.carousel(CarouselKind::FeatureCards).is_none());
        let failed = app.diagnostics().iter().any(|event| {
            event.carousel == Some(CarouselKind::FeatureCards)
                && matches!(event.kind, CarouselEventKind::MountFailed { .. })
        });
        assert!(failed);
    }

    #[test]
    fn button_commands_reach_only_their_section() {
        let t0 = Instant::now();
        let mut app = app(MOBILE, t0);
        let _ = app.update_at(
            Message::Carousel {
                kind: CarouselKind::Reviews,
                input: Input::Command(Command::GoTo(-1)),
            },
            t0,
        );
        assert_eq!(index(&app, CarouselKind::Reviews), 5);
        assert_eq!(index(&app, CarouselKind::AppScreens), 0);
    }

    #[test]
    fn swipe_is_routed_to_pressed_section() {
        let t0 = Instant::now();
        let mut app = app(MOBILE, t0);
        swipe(
            &mut app,
            CarouselKind::FeatureCards,
            Point::new(200.0, 300.0),
            Point::new(140.0, 300.0),
            t0,
        );
        assert_eq!(index(&app, CarouselKind::FeatureCards), 1);
        assert_eq!(index(&app, CarouselKind::Reviews), 0);
    }

    #[test]
    fn press_halves_pair_in_either_order() {
        let t0 = Instant::now();
        let mut app = app(MOBILE, t0);
        let _ = app.update_at(
            Message::Pointer(PointerEvent::Pressed(Point::new(150.0, 100.0))),
            t0,
        );
        let _ = app.update_at(Message::SectionPressed(CarouselKind::Reviews), t0);
        let _ = app.update_at(
            Message::Pointer(PointerEvent::Released(Point::new(200.0, 100.0))),
            t0 + ms(150),
        );
        assert_eq!(index(&app, CarouselKind::Reviews), 5);
    }

    #[test]
    fn press_taken_by_a_button_is_not_a_gesture() {
        let t0 = Instant::now();
        let mut app = app(MOBILE, t0);
        let _ = app.update_at(
            Message::Pointer(PointerEvent::Pressed(Point::new(100.0, 100.0))),
            t0,
        );
        let _ = app.update_at(
            Message::Pointer(PointerEvent::Released(Point::new(100.0, 100.0))),
            t0 + ms(50),
        );
        for kind in CarouselKind::ALL {
            assert_eq!(index(&app, kind), 0);
        }
    }

    #[test]
    fn horizontal_drag_locks_page_scroll_until_release() {
        let t0 = Instant::now();
        let mut app = app(MOBILE, t0);
        let _ = app.update_at(Message::SectionPressed(CarouselKind::Reviews), t0);
        let _ = app.update_at(
            Message::Pointer(PointerEvent::Pressed(Point::new(200.0, 100.0))),
            t0,
        );
        let _ = app.update_at(
            Message::Pointer(PointerEvent::Moved(Point::new(170.0, 102.0))),
            t0 + ms(40),
        );
        assert!(app.is_scroll_locked());
        let _ = app.update_at(
            Message::Pointer(PointerEvent::Released(Point::new(150.0, 102.0))),
            t0 + ms(120),
        );
        assert!(!app.is_scroll_locked());
    }

    #[test]
    fn mouse_drag_emulates_a_finger() {
        let t0 = Instant::now();
        let mut app = app(MOBILE, t0);
        let _ = app.update_at(
            Message::Mouse(MouseEvent::CursorMoved(Point::new(250.0, 80.0))),
            t0,
        );
        let _ = app.update_at(Message::SectionPressed(CarouselKind::AppScreens), t0);
        let _ = app.update_at(Message::Mouse(MouseEvent::LeftPressed), t0);
        let _ = app.update_at(
            Message::Mouse(MouseEvent::CursorMoved(Point::new(190.0, 82.0))),
            t0 + ms(100),
        );
        let _ = app.update_at(Message::Mouse(MouseEvent::LeftReleased), t0 + ms(200));
        assert_eq!(index(&app, CarouselKind::AppScreens), 1);
    }

    #[test]
    fn resize_switches_modes_everywhere() {
        let t0 = Instant::now();
        let mut app = app(MOBILE, t0);
        let _ = app.update_at(Message::WindowResized(iced::Size::new(1280.0, 800.0)), t0);
        for kind in CarouselKind::ALL {
            assert_eq!(app.carousel(kind).map(|c| c.mode()), Some(ViewportMode::Desktop));
        }
        assert_eq!(
            app.carousel(CarouselKind::AppScreens).map(|c| c.presentation()),
            Some(Presentation::Grid)
        );
    }

    #[test]
    fn losing_focus_pauses_every_section() {
        let t0 = Instant::now();
        let mut app = app(MOBILE, t0);
        let _ = app.update_at(Message::WindowFocusChanged { focused: false }, t0);
        assert!(CarouselKind::ALL
            .into_iter()
            .all(|kind| !app.carousel(kind).is_some_and(|c| c.is_auto_playing())));
        let _ = app.update_at(Message::Tick(t0 + ms(10_000)), t0 + ms(10_000));
        assert_eq!(index(&app, CarouselKind::Reviews), 0);
    }

    #[test]
    fn tick_advances_due_sections() {
        let t0 = Instant::now();
        let mut app = app(MOBILE, t0);
        let _ = app.update_at(Message::Tick(t0 + ms(3000)), t0 + ms(3000));
        assert_eq!(index(&app, CarouselKind::AppScreens), 1);
        assert_eq!(index(&app, CarouselKind::Reviews), 0);
        assert_eq!(index(&app, CarouselKind::FeatureCards), 0);
    }

    #[derive(Debug, Default, Clone)]
    struct Recorder(Arc<Mutex<Vec<String>>>);

    impl VideoEmbed for Recorder {
        fn load(&mut self, id: &VideoId) {
            self.0.lock().unwrap().push(id.as_str().to_string());
        }
        fn pause(&mut self) {}
        fn resume(&mut self) {}
    }

    #[test]
    fn active_video_slide_loads_the_embed() {
        let t0 = Instant::now();
        let mut app = app(MOBILE, t0);
        let recorder = Recorder::default();
        let loads = recorder.0.clone();
        app.attach_embed(EmbedHost::attached(
            Box::new(recorder),
            EmbedTrigger::OnActivation,
        ));

        let _ = app.schedule_embeds(t0);
        assert_eq!(*loads.lock().unwrap(), vec![APP_TOUR_VIDEO_ID.to_string()]);
        assert!(app
            .diagnostics()
            .iter()
            .any(|e| matches!(e.kind, CarouselEventKind::VideoLoaded { .. })));
    }

    #[test]
    fn delayed_embed_skips_video_that_is_no_longer_active() {
        let t0 = Instant::now();
        let mut app = app(MOBILE, t0);
        let recorder = Recorder::default();
        let loads = recorder.0.clone();
        app.attach_embed(EmbedHost::attached(
            Box::new(recorder),
            EmbedTrigger::FixedDelay(ms(1500)),
        ));
        let _ = app.update_at(
            Message::Carousel {
                kind: CarouselKind::AppScreens,
                input: Input::Command(Command::Next),
            },
            t0,
        );
        let id = VideoId::new(APP_TOUR_VIDEO_ID).expect("non-empty");
        let _ = app.update_at(Message::EmbedDelayElapsed(id), t0 + ms(1500));
        assert!(loads.lock().unwrap().is_empty());
    }

    #[test]
    fn delayed_embed_loads_video_that_is_still_active() {
        let t0 = Instant::now();
        let mut app = app(MOBILE, t0);
        let recorder = Recorder::default();
        let loads = recorder.0.clone();
        app.attach_embed(EmbedHost::attached(
            Box::new(recorder),
            EmbedTrigger::FixedDelay(ms(1500)),
        ));

        // Scheduling only arms the delay.
        let _ = app.schedule_embeds(t0);
        assert!(loads.lock().unwrap().is_empty());

        let id = VideoId::new(APP_TOUR_VIDEO_ID).expect("non-empty");
        let _ = app.update_at(Message::EmbedDelayElapsed(id.clone()), t0 + ms(1500));
        let _ = app.update_at(Message::EmbedDelayElapsed(id), t0 + ms(3000));
        assert_eq!(*loads.lock().unwrap(), vec![APP_TOUR_VIDEO_ID.to_string()]);
        assert!(app.embed().loaded().is_some());
    }

    #[test]
    fn diagnostics_are_written_as_json() {
        let t0 = Instant::now();
        let mut app = app(MOBILE, t0);
        let _ = app.update_at(
            Message::Carousel {
                kind: CarouselKind::Reviews,
                input: Input::Command(Command::Next),
            },
            t0 + ms(20),
        );

        let dir = tempfile::tempdir().expect("temp dir");
        let path = app.write_diagnostics(dir.path()).expect("write diagnostics");
        assert_eq!(path, dir.path().join(DIAGNOSTICS_FILE));

        let content = std::fs::read_to_string(&path).expect("read back");
        let events: Vec<crate::diagnostics::SerializableEvent> =
            serde_json::from_str(&content).expect("valid json");
        assert_eq!(events.len(), app.diagnostics().len());
        assert!(events
            .iter()
            .any(|e| e.kind == CarouselEventKind::Moved { from: 0, to: 1 }));
    }
}
