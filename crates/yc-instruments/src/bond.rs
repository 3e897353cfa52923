//! Fixed-rate bonds.

use std::sync::Arc;

use yc_cashflows::{fixed_rate_leg, CashFlow};
use yc_core::errors::Result;
use yc_core::{Rate, Real};
use yc_time::{Calendar, Date, DayCounter};

use yc_termstructures::discount_curve::YieldCurve;

/// A bullet bond paying fixed coupons and redeeming its face value at
/// maturity.
#[derive(Debug, Clone)]
pub struct FixedRateBond {
    face_value: Real,
    coupon_rate: Rate,
    start_date: Date,
    maturity_date: Date,
    frequency_months: u32,
    day_counter: Arc<dyn DayCounter>,
    calendar: Calendar,
}

impl FixedRateBond {
    /// Create a fixed-rate bond. Dates are validated when the cash flows
    /// are generated.
    pub fn new(
        face_value: Real,
        coupon_rate: Rate,
        start_date: Date,
        maturity_date: Date,
        frequency_months: u32,
        day_counter: impl DayCounter + 'static,
        calendar: Calendar,
    ) -> Self {
        FixedRateBond {
            face_value,
            coupon_rate,
            start_date,
            maturity_date,
            frequency_months,
            day_counter: Arc::new(day_counter),
            calendar,
        }
    }

    /// The bond's face value.
    pub fn face_value(&self) -> Real {
        self.face_value
    }

    /// The annual coupon rate.
    pub fn coupon_rate(&self) -> Rate {
        self.coupon_rate
    }

    /// The maturity date.
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// All remaining and past cash flows: coupons plus the redemption.
    pub fn cash_flows(&self) -> Result<Vec<CashFlow>> {
        fixed_rate_leg(
            self.face_value,
            self.coupon_rate,
            self.start_date,
            self.maturity_date,
            self.frequency_months,
            self.day_counter.as_ref(),
            &self.calendar,
        )
    }

    /// Dirty price: the discounted value of every cash flow strictly after
    /// the valuation date.
    pub fn dirty_price(&self, curve: &dyn YieldCurve, valuation_date: Date) -> Result<Real> {
        let flows = self.cash_flows()?;
        Ok(flows
            .iter()
            .filter(|flow| flow.payment_date > valuation_date)
            .map(|flow| flow.amount * curve.discount_factor(flow.payment_date))
            .sum())
    }

    /// Interest accrued from the last coupon date (or the start date) up to
    /// the valuation date.
    pub fn accrued_interest(&self, valuation_date: Date) -> Result<Real> {
        if valuation_date <= self.start_date || valuation_date >= self.maturity_date {
            return Ok(0.0);
        }
        let flows = self.cash_flows()?;
        let accrual_start = flows
            .iter()
            .map(|flow| flow.payment_date)
            .filter(|&d| d <= valuation_date)
            .max()
            .unwrap_or(self.start_date);
        let tau = self.day_counter.year_fraction(accrual_start, valuation_date);
        Ok(self.face_value * self.coupon_rate * tau)
    }

    /// Clean price: dirty price less accrued interest.
    pub fn clean_price(&self, curve: &dyn YieldCurve, valuation_date: Date) -> Result<Real> {
        Ok(self.dirty_price(curve, valuation_date)? - self.accrued_interest(valuation_date)?)
    }
}
