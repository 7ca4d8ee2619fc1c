// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection.

use crate::config::ThemeMode;
use iced::Theme;

impl ThemeMode {
    /// Resolves `System` through the OS preference; unknown means dark.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
