// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Carousel(MountError),
    Diagnostics(String),
}

/// Reasons a carousel section could not be mounted.
///
/// A failed mount leaves the section inert: nothing is rendered for it and no
/// input is routed to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    /// The section has no slides to show.
    NoSlides,

    /// The section was turned off in the configuration.
    Disabled,
}

impl MountError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            MountError::NoSlides => "warning-carousel-no-slides",
            MountError::Disabled => "warning-carousel-disabled",
        }
    }
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::NoSlides => write!(f, "No slides to mount"),
            MountError::Disabled => write!(f, "Carousel disabled in configuration"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Carousel(e) => write!(f, "Carousel Error: {}", e),
            Error::Diagnostics(e) => write!(f, "Diagnostics Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<MountError> for Error {
    fn from(err: MountError) -> Self {
        Error::Carousel(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Diagnostics(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
