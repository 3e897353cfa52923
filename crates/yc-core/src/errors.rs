//! Error types for yieldcurve-rs.
//!
//! A single `thiserror`-derived enum covers the whole workspace. Numerical
//! failures (a vanished derivative, a missed iteration budget) are dedicated
//! variants so that callers can distinguish them from precondition
//! violations; a failed curve bootstrap wraps the underlying failure
//! together with the pillar date at which it occurred.

use thiserror::Error;

/// The top-level error type used throughout yieldcurve-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The root finder's estimated derivative was exactly zero; the Newton
    /// step is undefined and the iteration cannot proceed.
    #[error("root finder: derivative vanished at x = {x}")]
    ZeroDerivative {
        /// The abscissa at which the derivative vanished.
        x: f64,
    },

    /// The root finder exhausted its iteration budget without converging.
    #[error("root finder: no convergence after {iterations} iterations")]
    NoConvergence {
        /// The number of iterations performed.
        iterations: u32,
    },

    /// The curve bootstrap failed while solving for a pillar. No partial
    /// curve is ever returned.
    #[error("bootstrap failed at pillar {date}: {reason}")]
    Bootstrap {
        /// The pillar (maturity) date being solved when the failure occurred.
        date: String,
        /// The underlying failure.
        reason: String,
    },
}

/// Shorthand `Result` type used throughout yieldcurve-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use yc_core::ensure;
/// fn positive(x: f64) -> yc_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
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

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use yc_core::fail;
/// fn always_err() -> yc_core::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
