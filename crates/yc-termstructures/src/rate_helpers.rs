//! Market calibration instruments.
//!
//! A calibration instrument pairs a market quote with a pricing rule. The
//! bootstrap solves each pillar so that the instrument prices back to par
//! (1.0 per unit notional) on the curve being built.

use std::sync::Arc;

use yc_cashflows::fixed_rate_leg;
use yc_core::errors::Result;
use yc_core::{Rate, Real};
use yc_time::{Calendar, Date, DayCounter};

use crate::discount_curve::YieldCurve;

/// A market instrument used to calibrate a discount curve.
///
/// The set is closed: pricing dispatches over this enum exhaustively, so
/// there is no "unsupported instrument" failure mode.
#[derive(Debug, Clone)]
pub enum CalibrationInstrument {
    /// A deposit: unit notional invested at `rate` simple interest until
    /// `maturity`.
    Deposit {
        /// The quoted simple rate.
        rate: Rate,
        /// The deposit maturity.
        maturity: Date,
        /// The accrual convention of the quote.
        day_counter: Arc<dyn DayCounter>,
    },
    /// A par swap, priced as a fixed-rate bond quoted at par: unit notional
    /// paying `rate` coupons every `frequency_months` until `maturity`.
    ParSwap {
        /// The quoted par rate.
        rate: Rate,
        /// The swap maturity.
        maturity: Date,
        /// Months between fixed-leg coupons.
        frequency_months: u32,
        /// The accrual convention of the fixed leg.
        day_counter: Arc<dyn DayCounter>,
        /// The calendar used to roll coupon dates.
        calendar: Calendar,
    },
}

impl CalibrationInstrument {
    /// A deposit quote.
    pub fn deposit(rate: Rate, maturity: Date, day_counter: impl DayCounter + 'static) -> Self {
        CalibrationInstrument::Deposit {
            rate,
            maturity,
            day_counter: Arc::new(day_counter),
        }
    }

    /// A par swap quote.
    pub fn par_swap(
        rate: Rate,
        maturity: Date,
        frequency_months: u32,
        day_counter: impl DayCounter + 'static,
        calendar: Calendar,
    ) -> Self {
        CalibrationInstrument::ParSwap {
            rate,
            maturity,
            frequency_months,
            day_counter: Arc::new(day_counter),
            calendar,
        }
    }

    /// The maturity date, which becomes the instrument's pillar.
    pub fn maturity_date(&self) -> Date {
        match self {
            CalibrationInstrument::Deposit { maturity, .. } => *maturity,
            CalibrationInstrument::ParSwap { maturity, .. } => *maturity,
        }
    }

    /// Present value per unit notional on `curve`, as of `valuation_date`.
    ///
    /// An instrument quoted consistently with the curve prices to 1.0.
    pub fn price(&self, curve: &dyn YieldCurve, valuation_date: Date) -> Result<Real> {
        match self {
            CalibrationInstrument::Deposit {
                rate,
                maturity,
                day_counter,
            } => {
                let tau = day_counter.year_fraction(valuation_date, *maturity);
                Ok((1.0 + rate * tau) * curve.discount_factor(*maturity))
            }
            CalibrationInstrument::ParSwap {
                rate,
                maturity,
                frequency_months,
                day_counter,
                calendar,
            } => {
                let flows = fixed_rate_leg(
                    1.0,
                    *rate,
                    valuation_date,
                    *maturity,
                    *frequency_months,
                    day_counter.as_ref(),
                    calendar,
                )?;
                let pv = flows
                    .iter()
                    .filter(|flow| flow.payment_date > valuation_date)
                    .map(|flow| flow.amount * curve.discount_factor(flow.payment_date))
                    .sum();
                Ok(pv)
            }
        }
    }
}
