//! # yc-instruments
//!
//! Fixed-income instruments priced off a discount curve, plus bump-based
//! risk metrics.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Fixed-rate bonds.
pub mod bond;

/// Bump-based sensitivities.
pub mod risk;

pub use bond::FixedRateBond;
pub use risk::{bond_risk_metrics, RiskMetrics, BASIS_POINT};
