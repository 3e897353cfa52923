//! # yc-termstructures
//!
//! Discount curves, curve shifting, market calibration instruments, and the
//! sequential bootstrap that turns instrument quotes into a discount curve.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The sequential curve bootstrap.
pub mod bootstrap;

/// Discount curves and the `YieldCurve` trait.
pub mod discount_curve;

/// Market calibration instruments.
pub mod rate_helpers;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use bootstrap::{bootstrap_curve, bootstrap_curve_with};
pub use discount_curve::{compound_factor, DiscountCurve, Pillar, ShiftedCurve, YieldCurve};
pub use rate_helpers::CalibrationInstrument;
