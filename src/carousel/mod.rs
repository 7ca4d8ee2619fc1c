// SPDX-License-Identifier: MPL-2.0
//! Browser-free carousel controller.
//!
//! The landing page mounts three independent carousels. Each one is a
//! [`Carousel`] built from a [`Preset`] and a non-empty set of slides; it is
//! driven entirely by [`Input`]s and wall-clock instants supplied by the
//! caller, so the whole state machine can be exercised without a window.
//!
//! # Example
//!
//! ```
//! use iced_showcase::carousel::{Carousel, Command, MountSettings, Outcome, Preset, Slide};
//! use std::time::Instant;
//!
//! let now = Instant::now();
//! let slides = (0..5).map(|i| Slide::new(format!("t{i}"), format!("b{i}"))).collect();
//! let mut carousel = Carousel::mount(Preset::reviews(), slides, 5, MountSettings::default(), now)
//!     .expect("five slides mount");
//!
//! assert_eq!(carousel.dispatch(Command::GoTo(-1), now), Outcome::Moved { from: 0, to: 4 });
//! assert_eq!(carousel.dispatch(Command::Next, now), Outcome::Moved { from: 4, to: 0 });
//! ```

mod autoplay;
mod controller;
mod gesture;
mod layout;
mod preset;
mod slides;
mod transition;
mod viewport;

pub use autoplay::{AutoPlay, AutoPlayChange, Poll};
pub use controller::{Carousel, Command, Input, MountSettings, Outcome, Response};
pub use gesture::{classify, Gesture, GestureThresholds, GestureTracker};
pub use layout::{DesktopLayout, Presentation, StripGeometry};
pub use preset::{CarouselKind, Preset};
pub use slides::{normalize_index, Slide, SlideSet, VideoId};
pub use transition::{TransitionGuard, TransitionState};
pub use viewport::{Breakpoint, ViewportMode};
