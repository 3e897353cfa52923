//! # yieldcurve
//!
//! Yield-curve bootstrapping and fixed-income pricing.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `yc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! yieldcurve = "0.1"
//! ```
//!
//! ```rust
//! use yieldcurve::termstructures::bootstrap_curve;
//! use yieldcurve::termstructures::rate_helpers::CalibrationInstrument;
//! use yieldcurve::time::day_counter::{Actual360, Thirty360};
//! use yieldcurve::time::{Calendar, Date};
//!
//! let reference = Date::from_ymd(2025, 1, 1).unwrap();
//! let instruments = vec![
//!     CalibrationInstrument::deposit(
//!         0.02,
//!         Date::from_ymd(2025, 7, 1).unwrap(),
//!         Actual360,
//!     ),
//!     CalibrationInstrument::par_swap(
//!         0.03,
//!         Date::from_ymd(2027, 1, 1).unwrap(),
//!         12,
//!         Thirty360,
//!         Calendar::default(),
//!     ),
//! ];
//! let curve = bootstrap_curve(reference, &instruments).unwrap();
//!
//! use yieldcurve::termstructures::YieldCurve;
//! assert_eq!(curve.discount_factor(reference), 1.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use yc_core as core;

/// Date, calendar, day counter, and schedule types.
pub use yc_time as time;

/// Mathematical utilities: interpolation and root finding.
pub use yc_math as math;

/// Cash-flow types and coupon leg generation.
pub use yc_cashflows as cashflows;

/// Discount curves, calibration instruments, and the bootstrap.
pub use yc_termstructures as termstructures;

/// Fixed-income instruments and risk metrics.
pub use yc_instruments as instruments;
