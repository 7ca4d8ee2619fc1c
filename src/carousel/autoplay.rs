// SPDX-License-Identifier: MPL-2.0
//! Auto-play timer.
//!
//! The timer is a deadline rather than a running task: the owner polls it with
//! the current time and advances the carousel when it reports a fire. Every
//! suspension (hover, hidden window, touch gesture) discards the deadline, and
//! every resume recreates it one full interval out.

use std::time::{Duration, Instant};

/// A change in whether the timer is running, reported so callers can log it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoPlayChange {
    Started,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureHold {
    Released,
    Held,
    CoolingDown { resume_at: Instant },
}

/// Result of polling the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Poll {
    /// The timer elapsed: advance one slide.
    pub fire: bool,
    /// The timer started or stopped during this poll.
    pub change: Option<AutoPlayChange>,
}

#[derive(Debug, Clone)]
pub struct AutoPlay {
    interval: Duration,
    cooldown: Duration,
    /// Layout-level switch, off while a static desktop grid is shown.
    enabled: bool,
    hovered: bool,
    hidden: bool,
    hold: GestureHold,
    next_fire_at: Option<Instant>,
}

impl AutoPlay {
    /// Creates a stopped timer.
    #[must_use]
    pub fn new(interval: Duration, cooldown: Duration) -> Self {
        Self {
            interval,
            cooldown,
            enabled: false,
            hovered: false,
            hidden: false,
            hold: GestureHold::Released,
            next_fire_at: None,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// True while a deadline is armed.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.next_fire_at.is_some()
    }

    #[must_use]
    pub fn next_fire_at(&self) -> Option<Instant> {
        self.next_fire_at
    }

    /// True while the owner must keep polling.
    #[must_use]
    pub fn needs_polling(&self) -> bool {
        self.next_fire_at.is_some() || matches!(self.hold, GestureHold::CoolingDown { .. })
    }

    pub fn start(&mut self, now: Instant) -> Option<AutoPlayChange> {
        self.enabled = true;
        self.sync(now)
    }

    pub fn stop(&mut self, now: Instant) -> Option<AutoPlayChange> {
        self.enabled = false;
        self.sync(now)
    }

    pub fn set_hovered(&mut self, hovered: bool, now: Instant) -> Option<AutoPlayChange> {
        self.hovered = hovered;
        self.sync(now)
    }

    pub fn set_hidden(&mut self, hidden: bool, now: Instant) -> Option<AutoPlayChange> {
        self.hidden = hidden;
        self.sync(now)
    }

    /// Suspends the timer for the duration of a touch gesture.
    pub fn gesture_started(&mut self, now: Instant) -> Option<AutoPlayChange> {
        self.hold = GestureHold::Held;
        self.sync(now)
    }

    /// Schedules the resume one cooldown after the gesture ends, whatever the
    /// gesture turned out to be.
    pub fn gesture_ended(&mut self, now: Instant) -> Option<AutoPlayChange> {
        self.hold = GestureHold::CoolingDown {
            resume_at: now + self.cooldown,
        };
        self.sync(now)
    }

    /// Releases an elapsed cooldown and reports whether the deadline passed.
    ///
    /// Fires at most once per poll. A poll that arrives more than one interval
    /// late fires once and re-arms from `now`.
    pub fn poll(&mut self, now: Instant) -> Poll {
        let mut change = None;
        if let GestureHold::CoolingDown { resume_at } = self.hold {
            if now >= resume_at {
                self.hold = GestureHold::Released;
                change = self.sync(now);
            }
        }

        let mut fire = false;
        if let Some(deadline) = self.next_fire_at {
            if now >= deadline {
                fire = true;
                let mut next = deadline + self.interval;
                if next <= now {
                    next = now + self.interval;
                }
                self.next_fire_at = Some(next);
            }
        }

        Poll { fire, change }
    }

    fn should_play(&self) -> bool {
        self.enabled && !self.hovered && !self.hidden && self.hold == GestureHold::Released
    }

    fn sync(&mut self, now: Instant) -> Option<AutoPlayChange> {
        match (self.should_play(), self.next_fire_at) {
            (true, None) => {
                self.next_fire_at = Some(now + self.interval);
                Some(AutoPlayChange::Started)
            }
            (false, Some(_)) => {
                self.next_fire_at = None;
                Some(AutoPlayChange::Stopped)
            }
            _ => None,
        }
    }
}
