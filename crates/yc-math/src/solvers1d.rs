//! 1-D root finding.

use yc_core::errors::{Error, Result};
use yc_core::Real;

/// Default absolute tolerance on the objective value.
pub const DEFAULT_TOLERANCE: Real = 1e-7;

/// Default iteration budget.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Step used for the central-difference derivative estimate.
pub const DERIVATIVE_STEP: Real = 1e-5;

/// Central-difference derivative of `f` with step `h`.
pub fn derivative<F>(f: F, h: Real) -> impl Fn(Real) -> Real
where
    F: Fn(Real) -> Real,
{
    move |x| (f(x + h) - f(x - h)) / (2.0 * h)
}

/// Newton–Raphson iteration solving `f(x) = target` from `guess`.
///
/// The derivative is estimated by central differences with
/// [`DERIVATIVE_STEP`], so `f` need not be differentiable in closed form.
/// Convergence means `|f(x) - target| <= tolerance`. A vanishing derivative
/// estimate aborts with [`Error::ZeroDerivative`]; exhausting the iteration
/// budget (including via NaN objective values, which never satisfy the
/// tolerance test) yields [`Error::NoConvergence`].
pub fn newton<F>(
    f: F,
    target: Real,
    guess: Real,
    tolerance: Real,
    max_iterations: u32,
) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    let mut x = guess;
    for _ in 0..max_iterations {
        let value = f(x) - target;
        if value.abs() <= tolerance {
            return Ok(x);
        }
        let slope = (f(x + DERIVATIVE_STEP) - f(x - DERIVATIVE_STEP)) / (2.0 * DERIVATIVE_STEP);
        if slope == 0.0 {
            return Err(Error::ZeroDerivative { x });
        }
        x -= value / slope;
    }
    Err(Error::NoConvergence {
        iterations: max_iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn square_root_of_four() {
        let f = |x: Real| x * x;
        let root = newton(f, 4.0, 1.0, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS).unwrap();
        assert_relative_eq!(root, 2.0, max_relative = 1e-6);

        // A negative guess converges to the negative root.
        let root = newton(f, 4.0, -1.0, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS).unwrap();
        assert_relative_eq!(root, -2.0, max_relative = 1e-6);
    }

    #[test]
    fn exponential_equation() {
        // Solve exp(-x) = 0.5, x = ln 2
        let f = |x: Real| (-x).exp();
        let root = newton(f, 0.5, 0.1, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS).unwrap();
        assert_relative_eq!(root, std::f64::consts::LN_2, max_relative = 1e-6);
    }

    #[test]
    fn flat_objective_reports_zero_derivative() {
        // x^2 has a stationary point at 0; asking for a root of x^2 = -1
        // from x = 0 dies on the first step.
        let f = |x: Real| x * x;
        let err = newton(f, -1.0, 0.0, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS).unwrap_err();
        assert!(matches!(err, Error::ZeroDerivative { x } if x == 0.0));
    }

    #[test]
    fn nan_objective_reports_no_convergence() {
        let f = |_: Real| Real::NAN;
        let err = newton(f, 0.0, 1.0, DEFAULT_TOLERANCE, 25).unwrap_err();
        assert_eq!(err, Error::NoConvergence { iterations: 25 });
    }

    #[test]
    fn already_at_root_returns_guess() {
        let f = |x: Real| x;
        let root = newton(f, 3.0, 3.0, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS).unwrap();
        assert_eq!(root, 3.0);
    }

    #[test]
    fn derivative_estimate() {
        let d = derivative(|x: Real| x * x * x, 1e-6);
        assert_relative_eq!(d(2.0), 12.0, max_relative = 1e-6);
    }
}
