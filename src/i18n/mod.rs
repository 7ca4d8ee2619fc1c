// SPDX-License-Identifier: MPL-2.0
//! Localization of UI strings and slide content with Fluent.
//!
//! Locale resolution order: `--lang`, then `[general] language`, then the OS
//! locale, then `en-US`.

pub mod fluent;
