//! Discount curves and the `YieldCurve` trait.

use std::sync::Arc;

use yc_core::ensure;
use yc_core::errors::Result;
use yc_core::{DiscountFactor, Rate, Real, Time};
use yc_math::interpolation::{Interpolation1D, InterpolationBuilder};
use yc_time::day_counter::Actual365Fixed;
use yc_time::{Date, DayCounter};

/// A term structure of discount factors.
///
/// Queries never mutate the curve; a curve is an immutable value once built.
pub trait YieldCurve: std::fmt::Debug {
    /// The date at which discounting starts. `discount_factor` at this date
    /// is exactly 1.0.
    fn reference_date(&self) -> Date;

    /// Discount factor for a payment at `date`.
    fn discount_factor(&self, date: Date) -> DiscountFactor;

    /// Continuously compounded zero rate from the reference date to `date`,
    /// on an Actual/365 (Fixed) basis. Zero at the reference date itself.
    fn zero_rate(&self, date: Date) -> Rate {
        let t = Actual365Fixed.year_fraction(self.reference_date(), date);
        if t == 0.0 {
            return 0.0;
        }
        -self.discount_factor(date).ln() / t
    }

    /// Simply compounded forward rate between `d1` and `d2` on an
    /// Actual/365 (Fixed) basis. Zero for a degenerate span.
    fn forward_rate(&self, d1: Date, d2: Date) -> Rate {
        let tau = Actual365Fixed.year_fraction(d1, d2);
        if tau == 0.0 {
            return 0.0;
        }
        (self.discount_factor(d1) / self.discount_factor(d2) - 1.0) / tau
    }
}

impl<C: YieldCurve + ?Sized> YieldCurve for &C {
    fn reference_date(&self) -> Date {
        (**self).reference_date()
    }

    fn discount_factor(&self, date: Date) -> DiscountFactor {
        (**self).discount_factor(date)
    }
}

/// Growth factor of a unit amount invested at `rate` for `t` years.
///
/// `frequency = 0` means continuous compounding, `exp(r·t)`; a positive
/// `frequency` compounds `f` times per year, `(1 + r/f)^(f·t)`.
pub fn compound_factor(rate: Rate, t: Time, frequency: u32) -> Real {
    if frequency == 0 {
        return (rate * t).exp();
    }
    let f = frequency as Real;
    (1.0 + rate / f).powf(f * t)
}

/// One node of a discount curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pillar {
    /// The pillar date.
    pub date: Date,
    /// Year fraction from the reference date, Actual/365 (Fixed).
    pub time: Time,
    /// The discount factor at the pillar date.
    pub discount: DiscountFactor,
}

/// An interpolated discount curve over dated pillars.
///
/// Pillar times are measured with the curve's own day counter; queries
/// between pillars go through the interpolation the curve was built with,
/// and queries beyond the last pillar extrapolate.
#[derive(Debug)]
pub struct DiscountCurve {
    reference_date: Date,
    pillars: Vec<Pillar>,
    day_counter: Arc<dyn DayCounter>,
    interp: Option<Box<dyn Interpolation1D>>,
}

impl DiscountCurve {
    /// Build a discount curve from dated discount factors.
    ///
    /// `dates` must start at `reference_date` with a discount factor of
    /// 1.0 and be strictly increasing; every discount factor must be
    /// strictly positive. A single-node curve is legal and discounts to
    /// `f64::NAN` anywhere off the reference date.
    pub fn new(
        reference_date: Date,
        dates: &[Date],
        discounts: &[DiscountFactor],
        day_counter: impl DayCounter + 'static,
        builder: &dyn InterpolationBuilder,
    ) -> Result<Self> {
        ensure!(
            dates.len() == discounts.len(),
            "curve: {} dates but {} discount factors",
            dates.len(),
            discounts.len()
        );
        ensure!(!dates.is_empty(), "curve needs at least one node");
        ensure!(
            dates[0] == reference_date,
            "curve must start at the reference date {reference_date}, got {}",
            dates[0]
        );
        ensure!(
            (discounts[0] - 1.0).abs() <= 1e-12,
            "discount factor at the reference date must be 1.0, got {}",
            discounts[0]
        );
        ensure!(
            dates.windows(2).all(|w| w[0] < w[1]),
            "curve dates must be strictly increasing"
        );
        ensure!(
            discounts.iter().all(|&df| df > 0.0),
            "discount factors must be strictly positive"
        );

        let day_counter: Arc<dyn DayCounter> = Arc::new(day_counter);
        let pillars: Vec<Pillar> = dates
            .iter()
            .zip(discounts.iter())
            .map(|(&date, &discount)| Pillar {
                date,
                time: day_counter.year_fraction(reference_date, date),
                discount,
            })
            .collect();

        let interp = if pillars.len() >= 2 {
            let times: Vec<Time> = pillars.iter().map(|p| p.time).collect();
            let dfs: Vec<DiscountFactor> = pillars.iter().map(|p| p.discount).collect();
            Some(builder.build(&times, &dfs, true)?)
        } else {
            None
        };

        Ok(DiscountCurve {
            reference_date,
            pillars,
            day_counter,
            interp,
        })
    }

    /// The curve's pillars, in date order.
    pub fn pillars(&self) -> &[Pillar] {
        &self.pillars
    }

    /// The last pillar date.
    pub fn max_date(&self) -> Date {
        self.pillars.last().expect("at least one pillar").date
    }

    /// The day counter used to place pillars on the time axis.
    pub fn day_counter(&self) -> &Arc<dyn DayCounter> {
        &self.day_counter
    }
}

impl YieldCurve for DiscountCurve {
    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn discount_factor(&self, date: Date) -> DiscountFactor {
        if date == self.reference_date {
            return 1.0;
        }
        match &self.interp {
            Some(interp) => {
                let t = self.day_counter.year_fraction(self.reference_date, date);
                interp.value(t)
            }
            None => Real::NAN,
        }
    }
}

/// A curve shifted by a constant continuously compounded spread.
///
/// Discount factors are scaled by `exp(-spread * t)` with `t` on an
/// Actual/365 (Fixed) basis, which shifts every zero rate by `spread`.
#[derive(Debug)]
pub struct ShiftedCurve<C: YieldCurve> {
    base: C,
    spread: Rate,
}

impl<C: YieldCurve> ShiftedCurve<C> {
    /// Wrap `base` with a parallel zero-rate shift of `spread`.
    pub fn new(base: C, spread: Rate) -> Self {
        ShiftedCurve { base, spread }
    }

    /// The underlying curve.
    pub fn base(&self) -> &C {
        &self.base
    }

    /// The applied spread.
    pub fn spread(&self) -> Rate {
        self.spread
    }
}

impl<C: YieldCurve> YieldCurve for ShiftedCurve<C> {
    fn reference_date(&self) -> Date {
        self.base.reference_date()
    }

    fn discount_factor(&self, date: Date) -> DiscountFactor {
        let t = Actual365Fixed.year_fraction(self.reference_date(), date);
        self.base.discount_factor(date) * (-self.spread * t).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use yc_math::interpolation::LogLinear;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn sample_curve() -> DiscountCurve {
        let reference = date(2025, 1, 1);
        DiscountCurve::new(
            reference,
            &[reference, date(2026, 1, 1), date(2027, 1, 1)],
            &[1.0, 0.97, 0.93],
            Actual365Fixed,
            &LogLinear,
        )
        .unwrap()
    }

    #[test]
    fn unit_discount_at_reference() {
        let curve = sample_curve();
        assert_eq!(curve.discount_factor(date(2025, 1, 1)), 1.0);
    }

    #[test]
    fn exact_at_pillars() {
        let curve = sample_curve();
        assert_eq!(curve.discount_factor(date(2026, 1, 1)), 0.97);
        assert_eq!(curve.discount_factor(date(2027, 1, 1)), 0.93);
    }

    #[test]
    fn monotone_between_pillars() {
        let curve = sample_curve();
        let mid = curve.discount_factor(date(2026, 7, 1));
        assert!(mid < 0.97 && mid > 0.93);
    }

    #[test]
    fn extrapolates_past_last_pillar() {
        let curve = sample_curve();
        let beyond = curve.discount_factor(date(2028, 1, 1));
        assert!(beyond.is_finite());
        assert!(beyond < 0.93);
    }

    #[test]
    fn zero_rate_at_reference_is_zero() {
        let curve = sample_curve();
        assert_eq!(curve.zero_rate(date(2025, 1, 1)), 0.0);
    }

    #[test]
    fn zero_rate_matches_discount() {
        let curve = sample_curve();
        let d = date(2026, 1, 1);
        let t = 365.0 / 365.0;
        assert_relative_eq!(curve.zero_rate(d), -(0.97f64.ln()) / t, max_relative = 1e-12);
    }

    #[test]
    fn forward_rate_of_a_degenerate_span_is_zero() {
        let curve = sample_curve();
        let d = date(2026, 1, 1);
        assert_eq!(curve.forward_rate(d, d), 0.0);
    }

    #[test]
    fn compound_factor_conventions() {
        // continuous: exp(r t)
        assert_relative_eq!(
            compound_factor(0.05, 2.0, 0),
            (0.1f64).exp(),
            max_relative = 1e-15
        );
        // annual: (1 + r)^t
        assert_relative_eq!(
            compound_factor(0.05, 2.0, 1),
            1.05f64.powi(2),
            max_relative = 1e-15
        );
        // semi-annual: (1 + r/2)^(2t)
        assert_relative_eq!(
            compound_factor(0.05, 2.0, 2),
            1.025f64.powi(4),
            max_relative = 1e-15
        );
        // zero time is a unit factor under every convention
        assert_eq!(compound_factor(0.05, 0.0, 0), 1.0);
        assert_eq!(compound_factor(0.05, 0.0, 4), 1.0);
    }

    #[test]
    fn forward_rate_between_pillars() {
        let curve = sample_curve();
        let fwd = curve.forward_rate(date(2026, 1, 1), date(2027, 1, 1));
        let tau = 365.0 / 365.0;
        assert_relative_eq!(fwd, (0.97 / 0.93 - 1.0) / tau, max_relative = 1e-12);
    }

    #[test]
    fn single_node_curve() {
        let reference = date(2025, 1, 1);
        let curve =
            DiscountCurve::new(reference, &[reference], &[1.0], Actual365Fixed, &LogLinear)
                .unwrap();
        assert_eq!(curve.discount_factor(reference), 1.0);
        assert!(curve.discount_factor(date(2026, 1, 1)).is_nan());
    }

    #[test]
    fn rejects_invalid_input() {
        let reference = date(2025, 1, 1);
        // first date not the reference date
        assert!(DiscountCurve::new(
            reference,
            &[date(2026, 1, 1)],
            &[1.0],
            Actual365Fixed,
            &LogLinear,
        )
        .is_err());
        // first discount not 1.0
        assert!(DiscountCurve::new(
            reference,
            &[reference, date(2026, 1, 1)],
            &[0.99, 0.97],
            Actual365Fixed,
            &LogLinear,
        )
        .is_err());
        // non-increasing dates
        assert!(DiscountCurve::new(
            reference,
            &[reference, date(2026, 1, 1), date(2026, 1, 1)],
            &[1.0, 0.97, 0.96],
            Actual365Fixed,
            &LogLinear,
        )
        .is_err());
        // non-positive discount
        assert!(DiscountCurve::new(
            reference,
            &[reference, date(2026, 1, 1)],
            &[1.0, 0.0],
            Actual365Fixed,
            &LogLinear,
        )
        .is_err());
    }

    #[test]
    fn shifted_curve_moves_zero_rates_in_parallel() {
        let curve = sample_curve();
        let shifted = ShiftedCurve::new(&curve, 0.0001);
        let d = date(2026, 7, 1);
        assert_relative_eq!(
            shifted.zero_rate(d),
            curve.zero_rate(d) + 0.0001,
            max_relative = 1e-10
        );
        assert_eq!(shifted.discount_factor(curve.reference_date()), 1.0);
    }
}
