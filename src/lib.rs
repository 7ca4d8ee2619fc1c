// SPDX-License-Identifier: MPL-2.0
//! `iced_showcase` renders the carousels of a product landing page with the
//! Iced GUI framework.
//!
//! The [`carousel`] module holds a window-free controller: index cycling with
//! wraparound, a transition lock, auto-play with hover, visibility and gesture
//! suspension, swipe and tap classification, and responsive layout. The
//! [`app`] module mounts three instances of it and wires them to Iced.

pub mod app;
pub mod carousel;
pub mod collaborators;
pub mod config;
pub mod content;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
