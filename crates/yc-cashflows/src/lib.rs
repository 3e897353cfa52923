//! # yc-cashflows
//!
//! Cash-flow values and fixed-rate coupon leg generation, shared by the
//! instrument pricers and the curve bootstrap.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Cash-flow types and leg generation.
pub mod cashflow;

pub use cashflow::{fixed_rate_leg, CashFlow, CashFlowKind};
