//! Bump-based sensitivities.

use yc_core::errors::Result;
use yc_core::{Rate, Real};
use yc_termstructures::discount_curve::{ShiftedCurve, YieldCurve};
use yc_time::Date;

use crate::bond::FixedRateBond;

/// One basis point, as a decimal rate.
pub const BASIS_POINT: Rate = 1e-4;

/// Price and curve sensitivities of a bond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskMetrics {
    /// Dirty price on the unshifted curve.
    pub price: Real,
    /// Effective duration: relative price change per unit parallel shift.
    pub duration: Real,
    /// Effective convexity: relative second-order price change.
    pub convexity: Real,
    /// Price change for a one basis point downward shift.
    pub dv01: Real,
}

/// Compute bump-based risk metrics by shifting the curve's zero rates up
/// and down by `bump` and differencing the reprices.
pub fn bond_risk_metrics(
    bond: &FixedRateBond,
    curve: &dyn YieldCurve,
    valuation_date: Date,
    bump: Rate,
) -> Result<RiskMetrics> {
    let price = bond.dirty_price(curve, valuation_date)?;
    if price == 0.0 {
        // no remaining flows; every sensitivity is zero
        return Ok(RiskMetrics {
            price: 0.0,
            duration: 0.0,
            convexity: 0.0,
            dv01: 0.0,
        });
    }

    let up = ShiftedCurve::new(curve, bump);
    let down = ShiftedCurve::new(curve, -bump);
    let price_up = bond.dirty_price(&up, valuation_date)?;
    let price_down = bond.dirty_price(&down, valuation_date)?;

    let duration = (price_down - price_up) / (2.0 * bump * price);
    let convexity = (price_down + price_up - 2.0 * price) / (bump * bump * price);
    let dv01 = (price_down - price_up) / 2.0 * (BASIS_POINT / bump);

    Ok(RiskMetrics {
        price,
        duration,
        convexity,
        dv01,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use yc_math::interpolation::LogLinear;
    use yc_termstructures::discount_curve::DiscountCurve;
    use yc_time::day_counter::{Actual365Fixed, DayCounter, Thirty360};
    use yc_time::Calendar;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn flat_curve(reference: Date, rate: Rate) -> DiscountCurve {
        let dates = [
            reference,
            date(2026, 1, 1),
            date(2027, 1, 1),
            date(2030, 1, 1),
        ];
        let dfs: Vec<f64> = dates
            .iter()
            .map(|&d| {
                let t = Actual365Fixed
                    .year_fraction(reference, d)
                    .max(0.0);
                (-rate * t).exp()
            })
            .collect();
        DiscountCurve::new(reference, &dates, &dfs, Actual365Fixed, &LogLinear).unwrap()
    }

    #[test]
    fn duration_of_a_coupon_bond_is_below_its_maturity() {
        let reference = date(2025, 1, 1);
        let curve = flat_curve(reference, 0.03);
        let bond = FixedRateBond::new(
            100.0,
            0.03,
            reference,
            date(2027, 1, 1),
            12,
            Thirty360,
            Calendar::default(),
        );
        let metrics = bond_risk_metrics(&bond, &curve, reference, BASIS_POINT).unwrap();
        assert!(metrics.duration > 1.5 && metrics.duration < 2.0);
        assert!(metrics.convexity > 0.0);
        assert!(metrics.dv01 > 0.0);
    }

    #[test]
    fn dv01_matches_duration_to_first_order() {
        let reference = date(2025, 1, 1);
        let curve = flat_curve(reference, 0.03);
        let bond = FixedRateBond::new(
            100.0,
            0.04,
            reference,
            date(2030, 1, 1),
            12,
            Thirty360,
            Calendar::default(),
        );
        let metrics = bond_risk_metrics(&bond, &curve, reference, BASIS_POINT).unwrap();
        assert_relative_eq!(
            metrics.dv01,
            metrics.duration * metrics.price * BASIS_POINT,
            max_relative = 1e-4
        );
    }

    #[test]
    fn expired_bond_has_zero_metrics() {
        let reference = date(2025, 1, 1);
        let curve = flat_curve(reference, 0.03);
        let bond = FixedRateBond::new(
            100.0,
            0.03,
            reference,
            date(2027, 1, 1),
            12,
            Thirty360,
            Calendar::default(),
        );
        // valued after maturity every flow is in the past
        let metrics = bond_risk_metrics(&bond, &curve, date(2028, 1, 1), BASIS_POINT).unwrap();
        assert_eq!(metrics.price, 0.0);
        assert_eq!(metrics.duration, 0.0);
        assert_eq!(metrics.convexity, 0.0);
        assert_eq!(metrics.dv01, 0.0);
        assert!(metrics.duration.is_finite());
    }

    #[test]
    fn higher_rates_mean_lower_price() {
        let reference = date(2025, 1, 1);
        let bond = FixedRateBond::new(
            100.0,
            0.03,
            reference,
            date(2027, 1, 1),
            12,
            Thirty360,
            Calendar::default(),
        );
        let low = bond_risk_metrics(&bond, &flat_curve(reference, 0.02), reference, BASIS_POINT)
            .unwrap();
        let high = bond_risk_metrics(&bond, &flat_curve(reference, 0.04), reference, BASIS_POINT)
            .unwrap();
        assert!(low.price > high.price);
    }
}
