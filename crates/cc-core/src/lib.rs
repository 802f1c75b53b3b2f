//! # cc-core
//!
//! Core types and error definitions for churchcal-rs.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace – the error hierarchy with its early-return
//! macros, the process-wide `Settings`, and small text/parsing utilities.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `ensure_post!` macros.
pub mod errors;

/// Global library settings (calendar abbreviation, year cache switch).
pub mod settings;

/// Miscellaneous utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A calendar year number (dates are supported from 1900 to 2199).
pub type Year = u16;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedCalendar, Settings, DEFAULT_CALENDAR};
