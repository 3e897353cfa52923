//! Cash-flow types and leg generation.

use yc_core::errors::Result;
use yc_core::Real;
use yc_time::{BusinessDayConvention, Calendar, Date, DayCounter, Schedule};

/// What a cash flow represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashFlowKind {
    /// A periodic interest coupon.
    Coupon,
    /// The principal redemption at maturity.
    Principal,
}

/// A single dated cash flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashFlow {
    /// The amount paid, in units of the face value's currency.
    pub amount: Real,
    /// The payment date.
    pub payment_date: Date,
    /// Coupon or principal.
    pub kind: CashFlowKind,
}

/// Generate the cash flows of a fixed-rate leg plus a final principal
/// redemption.
///
/// Payment dates come from a periodic schedule rolled with
/// Modified Following; each coupon accrues between consecutive schedule
/// dates under `day_counter`. The principal is a separate flow on the final
/// date, so the last date carries two entries.
pub fn fixed_rate_leg(
    face_value: Real,
    coupon_rate: Real,
    start: Date,
    maturity: Date,
    frequency_months: u32,
    day_counter: &dyn DayCounter,
    calendar: &Calendar,
) -> Result<Vec<CashFlow>> {
    let schedule = Schedule::generate(
        start,
        maturity,
        frequency_months,
        calendar,
        BusinessDayConvention::ModifiedFollowing,
    )?;
    let dates = schedule.dates();

    let mut flows = Vec::with_capacity(dates.len());
    for pair in dates.windows(2) {
        let accrual = day_counter.year_fraction(pair[0], pair[1]);
        flows.push(CashFlow {
            amount: face_value * coupon_rate * accrual,
            payment_date: pair[1],
            kind: CashFlowKind::Coupon,
        });
    }
    flows.push(CashFlow {
        amount: face_value,
        payment_date: *dates.last().expect("schedule never empty"),
        kind: CashFlowKind::Principal,
    });
    Ok(flows)
}
