// SPDX-License-Identifier: MPL-2.0
//! User interface of the landing page.
//!
//! - [`showcase`] - One carousel section: cards, indicators, navigation
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme resolution

pub mod design_tokens;
pub mod showcase;
pub mod styles;
pub mod theming;
