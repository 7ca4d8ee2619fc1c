// SPDX-License-Identifier: MPL-2.0
//! Bounded log of carousel activity with JSON export.

use super::buffer::{BufferCapacity, CircularBuffer};
use super::events::{CarouselEventKind, DiagnosticEvent};
use crate::carousel::{AutoPlayChange, Carousel, CarouselKind, Outcome, Response};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// File name of the session log written next to `settings.toml`.
pub const DIAGNOSTICS_FILE: &str = "diagnostics.json";

/// Exported form of a [`DiagnosticEvent`], timed relative to log creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableEvent {
    pub offset_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carousel: Option<CarouselKind>,
    #[serde(flatten)]
    pub kind: CarouselEventKind,
}

#[derive(Debug, Clone)]
pub struct DiagnosticsLog {
    started_at: Instant,
    events: CircularBuffer<DiagnosticEvent>,
}

impl DiagnosticsLog {
    #[must_use]
    pub fn new(capacity: BufferCapacity, started_at: Instant) -> Self {
        Self {
            started_at,
            events: CircularBuffer::new(capacity),
        }
    }

    pub fn record(&mut self, carousel: Option<CarouselKind>, kind: CarouselEventKind, at: Instant) {
        self.events.push(DiagnosticEvent::new(carousel, kind, at));
    }

    pub fn record_mount(&mut self, carousel: &Carousel, at: Instant) {
        self.record(
            Some(carousel.kind()),
            CarouselEventKind::Mounted {
                slides: carousel.len(),
                mode: carousel.mode(),
                indicators: carousel.has_indicators(),
            },
            at,
        );
    }

    /// Records whatever a [`Carousel::handle`] call changed.
    ///
    /// `Unchanged` and `Inactive` outcomes are not interesting and are skipped.
    pub fn record_response(&mut self, carousel: CarouselKind, response: &Response, at: Instant) {
        if let Some(gesture) = response.gesture {
            self.record(Some(carousel), CarouselEventKind::Gesture { gesture }, at);
        }
        let outcome = match response.outcome {
            Some(Outcome::Moved { from, to }) => Some(CarouselEventKind::Moved { from, to }),
            Some(Outcome::Dropped) => Some(CarouselEventKind::Dropped),
            Some(Outcome::ModeSwitched { from, to }) => {
                Some(CarouselEventKind::ModeSwitched { from, to })
            }
            Some(Outcome::Unchanged { .. } | Outcome::Inactive) | None => None,
        };
        if let Some(kind) = outcome {
            self.record(Some(carousel), kind, at);
        }
        match response.autoplay {
            Some(AutoPlayChange::Started) => {
                self.record(Some(carousel), CarouselEventKind::AutoPlayStarted, at);
            }
            Some(AutoPlayChange::Stopped) => {
                self.record(Some(carousel), CarouselEventKind::AutoPlayStopped, at);
            }
            None => {}
        }
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.events.capacity()
    }

    #[must_use]
    pub fn export(&self) -> Vec<SerializableEvent> {
        self.events
            .iter()
            .map(|event| SerializableEvent {
                offset_ms: u64::try_from(
                    event
                        .timestamp
                        .saturating_duration_since(self.started_at)
                        .as_millis(),
                )
                .unwrap_or(u64::MAX),
                carousel: event.carousel,
                kind: event.kind.clone(),
            })
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.export())
    }

    /// Writes the exported log to `path`, replacing any previous session.
    ///
    /// The content goes to a `.json.tmp` sibling first and is renamed into
    /// place, so a crash mid-write leaves the old file intact.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let content = self.to_json()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, content)?;
        if let Err(err) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }
        Ok(())
    }
}
