// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types recorded while the carousels run.

use crate::carousel::{CarouselKind, Gesture, ViewportMode};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// An event with the monotonic instant it happened at.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: Instant,
    /// `None` for page-level events such as configuration warnings.
    pub carousel: Option<CarouselKind>,
    pub kind: CarouselEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(carousel: Option<CarouselKind>, kind: CarouselEventKind, timestamp: Instant) -> Self {
        Self {
            timestamp,
            carousel,
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CarouselEventKind {
    Mounted {
        slides: usize,
        mode: ViewportMode,
        indicators: bool,
    },

    /// The section was left inert.
    MountFailed {
        /// i18n key of the reason.
        reason: String,
    },

    Moved {
        from: usize,
        to: usize,
    },

    /// A request arrived while a transition was still animating.
    Dropped,

    ModeSwitched {
        from: ViewportMode,
        to: ViewportMode,
    },

    AutoPlayStarted,
    AutoPlayStopped,

    Gesture {
        gesture: Gesture,
    },

    VideoLoaded {
        id: String,
    },

    Warning {
        /// i18n key of the warning.
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_serialize_with_type_tag() {
        let json = serde_json::to_string(&CarouselEventKind::Moved { from: 1, to: 2 })
            .expect("serialization should succeed");
        assert_eq!(json, r#"{"type":"moved","from":1,"to":2}"#);

        let json = serde_json::to_string(&CarouselEventKind::Gesture {
            gesture: Gesture::SwipeLeft,
        })
        .expect("serialization should succeed");
        assert_eq!(json, r#"{"type":"gesture","gesture":"swipe_left"}"#);
    }

    #[test]
    fn mode_switch_round_trips() {
        let kind = CarouselEventKind::ModeSwitched {
            from: ViewportMode::Mobile,
            to: ViewportMode::Desktop,
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        let back: CarouselEventKind =
            serde_json::from_str(&json).expect("deserialization should succeed");
        assert_eq!(back, kind);
    }
}
