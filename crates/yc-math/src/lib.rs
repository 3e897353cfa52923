//! # yc-math
//!
//! Numerical building blocks: scalar interpolation over sorted samples and
//! a Newton–Raphson root finder with a finite-difference derivative.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// 1-D interpolation over sorted sample points.
pub mod interpolation;

/// 1-D root finding.
pub mod solvers1d;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use interpolation::{
    Interpolation1D, InterpolationBuilder, Linear, LinearInterpolation, LogLinear,
    LogLinearInterpolation,
};
pub use solvers1d::{newton, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
