//! Error types for churchcal-rs.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  The `ensure!` and
//! `ensure_post!` macros give early returns with the matching variant.

use thiserror::Error;

/// The top-level error type used throughout churchcal-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Postcondition violated (see [`ensure_post!`](crate::ensure_post)).
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),

    /// Date-related error.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A named item (commemoration, calendar, season) could not be found.
    #[error("no {kind} named {name:?}")]
    Lookup {
        /// What kind of item was looked up.
        kind: &'static str,
        /// The name that was not found.
        name: String,
    },

    /// A church year could not be built because an ordering invariant of
    /// the build pipeline was violated.
    #[error("church year construction failed: {0}")]
    Construction(String),
}

/// Shorthand `Result` type used throughout churchcal-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cc_core::{ensure, errors::Error};
/// fn positive(x: i32) -> cc_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Postcondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cc_core::{ensure_post, errors::Error};
/// fn double(x: i32) -> cc_core::errors::Result<i32> {
///     let result = x * 2;
///     ensure_post!(result > 0, "result must be positive, got {result}");
///     Ok(result)
/// }
/// assert!(double(1).is_ok());
/// assert!(double(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(
                format!($($msg)*)
            ));
        }
    };
}
