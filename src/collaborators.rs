// SPDX-License-Identifier: MPL-2.0
//! Interfaces of the page widgets the carousels sit next to.
//!
//! The contact form and the video embed are not implemented here. The landing
//! page only talks to them through these traits, so hosts can plug in their
//! own implementations and tests can plug in recorders.

use crate::carousel::VideoId;
use std::fmt;
use std::time::Duration;

// =============================================================================
// Field validation
// =============================================================================

/// The kinds of contact-form fields a validator is asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Email,
    Phone,
    Company,
    Message,
}

/// Result of validating one field value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Validation {
    pub valid: bool,
    /// Human-readable explanation; empty when the value is valid.
    pub message: String,
}

impl Validation {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

pub trait FieldValidator {
    fn validate(&self, value: &str, kind: FieldKind) -> Validation;
}

// =============================================================================
// Video embed
// =============================================================================

/// A video player that can be loaded by identifier and paused with the page.
pub trait VideoEmbed: fmt::Debug {
    fn load(&mut self, id: &VideoId);
    fn pause(&mut self);
    fn resume(&mut self);
}

/// How the host decides when to load the embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedTrigger {
    /// Load as soon as a slide carrying a video becomes active.
    OnActivation,
    /// No way to observe when the embed scrolls into view: load after a wait.
    FixedDelay(Duration),
}

/// Default wait for [`EmbedTrigger::FixedDelay`].
pub const EMBED_FALLBACK_DELAY: Duration = Duration::from_millis(1500);

/// Owns an optional embed and forwards page events to it.
#[derive(Debug)]
pub struct EmbedHost {
    embed: Option<Box<dyn VideoEmbed>>,
    trigger: EmbedTrigger,
    loaded: Option<VideoId>,
}

impl Default for EmbedHost {
    fn default() -> Self {
        Self::detached()
    }
}

impl EmbedHost {
    #[must_use]
    pub fn detached() -> Self {
        Self {
            embed: None,
            trigger: EmbedTrigger::FixedDelay(EMBED_FALLBACK_DELAY),
            loaded: None,
        }
    }

    #[must_use]
    pub fn attached(embed: Box<dyn VideoEmbed>, trigger: EmbedTrigger) -> Self {
        Self {
            embed: Some(embed),
            trigger,
            loaded: None,
        }
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.embed.is_some()
    }

    #[must_use]
    pub fn trigger(&self) -> EmbedTrigger {
        self.trigger
    }

    #[must_use]
    pub fn loaded(&self) -> Option<&VideoId> {
        self.loaded.as_ref()
    }

    /// Loads `id` unless it is already the loaded video.
    ///
    /// Returns `true` when the embed was asked to load.
    pub fn load(&mut self, id: &VideoId) -> bool {
        let Some(embed) = self.embed.as_mut() else {
            return false;
        };
        if self.loaded.as_ref() == Some(id) {
            return false;
        }
        embed.load(id);
        self.loaded = Some(id.clone());
        true
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.loaded.is_none() {
            return;
        }
        if let Some(embed) = self.embed.as_mut() {
            if visible {
                embed.resume();
            } else {
                embed.pause();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Default, Clone)]
    struct Recorder(Arc<Mutex<Vec<String>>>);

    impl VideoEmbed for Recorder {
        fn load(&mut self, id: &VideoId) {
            self.0.lock().unwrap().push(format!("load:{}", id.as_str()));
        }
        fn pause(&mut self) {
            self.0.lock().unwrap().push("pause".into());
        }
        fn resume(&mut self) {
            self.0.lock().unwrap().push("resume".into());
        }
    }

    fn host() -> (EmbedHost, Arc<Mutex<Vec<String>>>) {
        let recorder = Recorder::default();
        let log = recorder.0.clone();
        (
            EmbedHost::attached(Box::new(recorder), EmbedTrigger::OnActivation),
            log,
        )
    }

    #[test]
    fn detached_host_ignores_everything() {
        let mut host = EmbedHost::detached();
        let id = VideoId::new("abc").unwrap();
        assert!(!host.load(&id));
        host.set_visible(false);
        assert!(host.loaded().is_none());
    }

    #[test]
    fn same_video_is_loaded_once() {
        let (mut host, log) = host();
        let id = VideoId::new("abc").unwrap();
        assert!(host.load(&id));
        assert!(!host.load(&id));
        assert_eq!(*log.lock().unwrap(), vec!["load:abc".to_string()]);
    }

    #[test]
    fn visibility_is_forwarded_only_after_load() {
        let (mut host, log) = host();
        host.set_visible(false);
        assert!(log.lock().unwrap().is_empty());

        host.load(&VideoId::new("xyz").unwrap());
        host.set_visible(false);
        host.set_visible(true);
        assert_eq!(
            *log.lock().unwrap(),
            vec!["load:xyz".to_string(), "pause".into(), "resume".into()]
        );
    }

    struct NonEmpty;

    impl FieldValidator for NonEmpty {
        fn validate(&self, value: &str, _kind: FieldKind) -> Validation {
            if value.trim().is_empty() {
                Validation::invalid("required")
            } else {
                Validation::ok()
            }
        }
    }

    #[test]
    fn validator_trait_is_object_safe() {
        let validator: &dyn FieldValidator = &NonEmpty;
        assert!(validator.validate("Ada", FieldKind::Name).valid);
        let result = validator.validate("  ", FieldKind::Email);
        assert!(!result.valid);
        assert_eq!(result.message, "required");
    }
}
