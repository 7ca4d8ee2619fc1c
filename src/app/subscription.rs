// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window, mouse and touch events are turned into [`Message`]s here. Which
//! carousel a pointer event belongs to is decided later, in `update`.

use super::message::{MouseEvent, PointerEvent};
use super::Message;
use crate::config::TICK_INTERVAL_MS;
use iced::{event, mouse, time, touch, window, Event, Subscription};
use std::time::Duration;

/// Routes native events to top-level messages.
///
/// Events are forwarded whether or not a widget captured them: a section's
/// hover area captures presses, and gestures still have to see them.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        Event::Window(window::Event::Focused) => {
            Some(Message::WindowFocusChanged { focused: true })
        }
        Event::Window(window::Event::Unfocused) => {
            Some(Message::WindowFocusChanged { focused: false })
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::Pointer(PointerEvent::Pressed(position)))
        }
        Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(Message::Pointer(PointerEvent::Moved(position)))
        }
        Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Message::Pointer(PointerEvent::Released(position)))
        }
        Event::Touch(touch::Event::FingerLost { .. }) => {
            Some(Message::Pointer(PointerEvent::Lost))
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::Mouse(MouseEvent::CursorMoved(position)))
        }
        Event::Mouse(mouse::Event::CursorLeft) => Some(Message::Mouse(MouseEvent::CursorLeft)),
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::Mouse(MouseEvent::LeftPressed))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::Mouse(MouseEvent::LeftReleased))
        }
        _ => None,
    })
}

/// Periodic tick for auto-play deadlines, transition windows and cooldowns.
///
/// Only runs while some carousel has a pending deadline.
pub fn create_tick_subscription(needs_ticks: bool) -> Subscription<Message> {
    if needs_ticks {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
