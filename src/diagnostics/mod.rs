// SPDX-License-Identifier: MPL-2.0
//! In-memory record of what the carousels did.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: generic ring buffer with a clamped [`BufferCapacity`]
//! - [`DiagnosticEvent`]: a [`CarouselEventKind`] stamped with its instant
//! - [`DiagnosticsLog`]: bounded event log with JSON export
//!
//! The log lives in memory and is written to [`DIAGNOSTICS_FILE`] in the
//! config directory when the window closes.

mod buffer;
mod events;
mod log;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{CarouselEventKind, DiagnosticEvent};
pub use log::{DiagnosticsLog, SerializableEvent, DIAGNOSTICS_FILE};
