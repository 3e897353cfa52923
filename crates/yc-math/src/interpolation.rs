//! 1-D interpolation over sorted sample points.
//!
//! Interpolants are immutable once built: they own copies of their sample
//! arrays, so the caller's slices can go away. Out-of-range queries either
//! extend the boundary segment (when `extrapolate` is set) or return
//! `f64::NAN`.

use yc_core::ensure;
use yc_core::errors::Result;
use yc_core::Real;

/// A scalar interpolation over sorted sample points.
pub trait Interpolation1D: std::fmt::Debug + Send + Sync {
    /// Evaluate the interpolant at `x`.
    ///
    /// At a sample abscissa the stored ordinate is returned exactly. Outside
    /// the sample range the result is the linear extension of the boundary
    /// segment when extrapolation is enabled, `f64::NAN` otherwise.
    fn value(&self, x: Real) -> Real;

    /// Smallest sample abscissa.
    fn x_min(&self) -> Real;

    /// Largest sample abscissa.
    fn x_max(&self) -> Real;

    /// Whether `x` lies inside the sample range.
    fn is_in_range(&self, x: Real) -> bool {
        x >= self.x_min() && x <= self.x_max()
    }
}

/// Validate interpolation inputs shared by every scheme.
fn validate(xs: &[Real], ys: &[Real]) -> Result<()> {
    ensure!(
        xs.len() == ys.len(),
        "interpolation: {} abscissae but {} ordinates",
        xs.len(),
        ys.len()
    );
    ensure!(xs.len() >= 2, "interpolation needs at least two points");
    ensure!(
        xs.iter().all(|x| x.is_finite()) && ys.iter().all(|y| y.is_finite()),
        "interpolation samples must be finite"
    );
    Ok(())
}

/// Sort sample pairs by abscissa and check strict monotonicity.
fn sorted_pairs(xs: &[Real], ys: &[Real]) -> Result<(Vec<Real>, Vec<Real>)> {
    let mut pairs: Vec<(Real, Real)> = xs.iter().copied().zip(ys.iter().copied()).collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    ensure!(
        pairs.windows(2).all(|w| w[0].0 < w[1].0),
        "interpolation abscissae must be distinct"
    );
    Ok(pairs.into_iter().unzip())
}

/// Index of the segment [xs[i], xs[i+1]] containing x, clamped to the
/// boundary segments for out-of-range x.
fn locate(xs: &[Real], x: Real) -> usize {
    match xs.binary_search_by(|probe| probe.total_cmp(&x)) {
        Ok(i) => i.min(xs.len() - 2),
        Err(0) => 0,
        Err(i) => (i - 1).min(xs.len() - 2),
    }
}

// ── Linear ────────────────────────────────────────────────────────────────────

/// Piecewise-linear interpolation.
#[derive(Debug, Clone)]
pub struct LinearInterpolation {
    xs: Vec<Real>,
    ys: Vec<Real>,
    extrapolate: bool,
}

impl LinearInterpolation {
    /// Build a linear interpolant. The samples are sorted by abscissa;
    /// duplicate abscissae are rejected.
    pub fn new(xs: &[Real], ys: &[Real], extrapolate: bool) -> Result<Self> {
        validate(xs, ys)?;
        let (xs, ys) = sorted_pairs(xs, ys)?;
        Ok(LinearInterpolation { xs, ys, extrapolate })
    }
}

impl Interpolation1D for LinearInterpolation {
    fn value(&self, x: Real) -> Real {
        if !self.is_in_range(x) && !self.extrapolate {
            return Real::NAN;
        }
        // Exact pass-through at the samples, untouched by rounding in the
        // segment formula below.
        if let Ok(i) = self.xs.binary_search_by(|probe| probe.total_cmp(&x)) {
            return self.ys[i];
        }
        let i = locate(&self.xs, x);
        let slope = (self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i]);
        self.ys[i] + slope * (x - self.xs[i])
    }

    fn x_min(&self) -> Real {
        self.xs[0]
    }

    fn x_max(&self) -> Real {
        *self.xs.last().expect("at least two samples")
    }
}

// ── Log-linear ────────────────────────────────────────────────────────────────

/// Piecewise log-linear interpolation: linear in `ln y`, so each segment is
/// an exponential in `x`. Requires strictly positive ordinates. The natural
/// choice for discount factors, where it corresponds to piecewise-constant
/// forward rates.
#[derive(Debug, Clone)]
pub struct LogLinearInterpolation {
    xs: Vec<Real>,
    ys: Vec<Real>,
    log_interp: LinearInterpolation,
}

impl LogLinearInterpolation {
    /// Build a log-linear interpolant. Fails if any ordinate is not
    /// strictly positive.
    pub fn new(xs: &[Real], ys: &[Real], extrapolate: bool) -> Result<Self> {
        validate(xs, ys)?;
        ensure!(
            ys.iter().all(|&y| y > 0.0),
            "log-linear interpolation requires strictly positive ordinates"
        );
        let (xs, ys) = sorted_pairs(xs, ys)?;
        let log_ys: Vec<Real> = ys.iter().map(|y| y.ln()).collect();
        let log_interp = LinearInterpolation::new(&xs, &log_ys, extrapolate)?;
        Ok(LogLinearInterpolation { xs, ys, log_interp })
    }
}

impl Interpolation1D for LogLinearInterpolation {
    fn value(&self, x: Real) -> Real {
        // exp(ln y) is not bit-exact, so samples answer from the stored
        // ordinates directly.
        if let Ok(i) = self.xs.binary_search_by(|probe| probe.total_cmp(&x)) {
            return self.ys[i];
        }
        self.log_interp.value(x).exp()
    }

    fn x_min(&self) -> Real {
        self.xs[0]
    }

    fn x_max(&self) -> Real {
        *self.xs.last().expect("at least two samples")
    }
}

// ── Builders ──────────────────────────────────────────────────────────────────

/// Factory for an interpolation scheme, letting curve constructors stay
/// generic over the scheme without naming a concrete type.
pub trait InterpolationBuilder: std::fmt::Debug + Send + Sync {
    /// Build an interpolant over the given samples.
    fn build(
        &self,
        xs: &[Real],
        ys: &[Real],
        extrapolate: bool,
    ) -> Result<Box<dyn Interpolation1D>>;
}

/// Builder for [`LinearInterpolation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl InterpolationBuilder for Linear {
    fn build(
        &self,
        xs: &[Real],
        ys: &[Real],
        extrapolate: bool,
    ) -> Result<Box<dyn Interpolation1D>> {
        Ok(Box::new(LinearInterpolation::new(xs, ys, extrapolate)?))
    }
}

/// Builder for [`LogLinearInterpolation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLinear;

impl InterpolationBuilder for LogLinear {
    fn build(
        &self,
        xs: &[Real],
        ys: &[Real],
        extrapolate: bool,
    ) -> Result<Box<dyn Interpolation1D>> {
        Ok(Box::new(LogLinearInterpolation::new(xs, ys, extrapolate)?))
    }
}
