//! The sequential curve bootstrap.
//!
//! Instruments are sorted by maturity and solved one pillar at a time: each
//! pillar's discount factor is the Newton root of "this instrument prices
//! to par on the curve built so far, plus the trial pillar". A failure at
//! any pillar aborts the whole bootstrap; no partial curve is ever
//! returned.

use tracing::{debug, warn};
use yc_core::errors::{Error, Result};
use yc_core::{DiscountFactor, Rate, Real, Time};
use yc_math::interpolation::{Interpolation1D, InterpolationBuilder, LogLinear};
use yc_math::solvers1d::{newton, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use yc_time::day_counter::Actual365Fixed;
use yc_time::{Date, DayCounter};

use crate::discount_curve::{DiscountCurve, YieldCurve};
use crate::rate_helpers::CalibrationInstrument;

/// Zero-rate guess for the very first pillar, when there is no previous
/// pillar to imply one from.
const FIRST_PILLAR_GUESS: Rate = 0.05;

/// Bootstrap a log-linear discount curve from market instruments.
///
/// See [`bootstrap_curve_with`] for the full contract.
pub fn bootstrap_curve(
    reference_date: Date,
    instruments: &[CalibrationInstrument],
) -> Result<DiscountCurve> {
    bootstrap_curve_with(reference_date, instruments, &LogLinear)
}

/// Bootstrap a discount curve from market instruments with a caller-chosen
/// interpolation scheme.
///
/// Instruments are processed in maturity order (ties keep input order, and
/// only the first of a duplicated maturity is used). Each instrument
/// contributes one pillar at its maturity; the pillar's discount factor is
/// solved so the instrument reprices to par. Pillar times sit on an
/// Actual/365 (Fixed) grid regardless of the instruments' own quote
/// conventions.
///
/// An empty instrument list yields the trivial curve: a single pillar at
/// the reference date, discounting to `f64::NAN` everywhere else.
pub fn bootstrap_curve_with(
    reference_date: Date,
    instruments: &[CalibrationInstrument],
    builder: &dyn InterpolationBuilder,
) -> Result<DiscountCurve> {
    let mut sorted: Vec<&CalibrationInstrument> = instruments.iter().collect();
    sorted.sort_by_key(|instrument| instrument.maturity_date());

    let mut dates: Vec<Date> = vec![reference_date];
    let mut times: Vec<Time> = vec![0.0];
    let mut discounts: Vec<DiscountFactor> = vec![1.0];

    for instrument in sorted {
        let maturity = instrument.maturity_date();
        let last = *dates.last().expect("pillar lists start non-empty");
        if maturity <= last {
            warn!(
                maturity = %maturity,
                pillar = %last,
                "skipping instrument: maturity not after the last pillar"
            );
            continue;
        }

        let pillar_time = Actual365Fixed.year_fraction(reference_date, maturity);
        let guess = match discounts.len() {
            1 => FIRST_PILLAR_GUESS,
            n => {
                // implied zero rate at the previous pillar
                -discounts[n - 1].ln() / times[n - 1]
            }
        };

        let objective = par_deviation(
            reference_date,
            instrument,
            &times,
            &discounts,
            pillar_time,
            builder,
        );
        let zero = newton(objective, 0.0, guess, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS)
            .map_err(|err| Error::Bootstrap {
                date: maturity.to_string(),
                reason: err.to_string(),
            })?;

        let df = (-zero * pillar_time).exp();
        debug!(maturity = %maturity, zero_rate = zero, discount = df, "pillar solved");
        dates.push(maturity);
        times.push(pillar_time);
        discounts.push(df);
    }

    DiscountCurve::new(reference_date, &dates, &discounts, Actual365Fixed, builder)
}

/// Objective for one pillar solve: the deviation of the instrument's price
/// from par, as a function of the trial zero rate at the pillar.
///
/// Takes snapshots of the already-solved pillar grid, so the returned
/// closure is self-contained apart from the instrument and builder borrows.
/// A pricing or interpolation failure surfaces as NaN, which the root
/// finder reports as non-convergence.
fn par_deviation<'a>(
    reference_date: Date,
    instrument: &'a CalibrationInstrument,
    times: &[Time],
    discounts: &[DiscountFactor],
    pillar_time: Time,
    builder: &'a dyn InterpolationBuilder,
) -> impl Fn(Real) -> Real + 'a {
    let mut trial_times = times.to_vec();
    let mut trial_discounts = discounts.to_vec();
    trial_times.push(pillar_time);
    trial_discounts.push(1.0); // overwritten before each evaluation

    move |zero: Real| {
        let df = (-zero * pillar_time).exp();
        if !df.is_finite() || df <= 0.0 {
            return Real::NAN;
        }
        let mut discounts = trial_discounts.clone();
        *discounts.last_mut().expect("trial grid non-empty") = df;
        let interp = match builder.build(&trial_times, &discounts, true) {
            Ok(interp) => interp,
            Err(_) => return Real::NAN,
        };
        let trial = TrialCurve {
            reference_date,
            interp: interp.as_ref(),
        };
        match instrument.price(&trial, reference_date) {
            Ok(price) => price - 1.0,
            Err(_) => Real::NAN,
        }
    }
}

/// The in-progress curve seen by an instrument during a pillar solve:
/// solved pillars plus the trial pillar, on the Actual/365 (Fixed) grid.
#[derive(Debug)]
struct TrialCurve<'a> {
    reference_date: Date,
    interp: &'a dyn Interpolation1D,
}

impl YieldCurve for TrialCurve<'_> {
    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn discount_factor(&self, date: Date) -> DiscountFactor {
        if date == self.reference_date {
            return 1.0;
        }
        let t = Actual365Fixed.year_fraction(self.reference_date, date);
        self.interp.value(t)
    }
}
