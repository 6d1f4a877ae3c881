//! Secant method for finding roots of a scalar function. The shooting
//! driver consumes this module through [`find_root`] only.

use crate::errors::SolverError;
use log::{debug, error, info};

/// Convergence tolerance used by the shooting driver by default.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;
/// Iteration cap used by the shooting driver by default.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Secant iteration started from two guesses.
///
/// Returns x such that |f(x)| < `tolerance`. Fails with
/// [`SolverError::NonConvergence`] when the iteration budget is exhausted
/// and with [`SolverError::SecantStalled`] when two consecutive residuals
/// coincide (the secant denominator is zero).
pub fn find_root<F>(
    f: F,
    guess_a: f64,
    guess_b: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<f64, SolverError>
where
    F: Fn(f64) -> f64,
{
    debug!(
        "starting secant method with guesses ({}, {}), tolerance={}, max_iterations={}",
        guess_a, guess_b, tolerance, max_iterations
    );

    let mut x_prev = guess_a;
    let mut x_curr = guess_b;
    let mut f_prev = f(x_prev);
    let mut f_curr = f(x_curr);

    debug!(
        "initial values: x_prev={}, x_curr={}, f_prev={}, f_curr={}",
        x_prev, x_curr, f_prev, f_curr
    );

    for iteration in 0..max_iterations {
        if f_curr.abs() < tolerance {
            info!(
                "secant method converged after {} iterations with x={}, f(x)={}",
                iteration, x_curr, f_curr
            );
            return Ok(x_curr);
        }
        if f_curr == f_prev {
            error!(
                "secant method stalled at iteration {}: f({}) == f({}) == {}",
                iteration, x_curr, x_prev, f_curr
            );
            return Err(SolverError::SecantStalled { at: x_curr });
        }

        let x_next = x_curr - f_curr * (x_curr - x_prev) / (f_curr - f_prev);
        debug!(
            "iteration {}: x_next={}, f_curr={}",
            iteration, x_next, f_curr
        );

        x_prev = x_curr;
        x_curr = x_next;
        f_prev = f_curr;
        f_curr = f(x_curr);
    }

    error!(
        "secant method did not converge after {} iterations",
        max_iterations
    );
    Err(SolverError::NonConvergence {
        iterations: max_iterations,
    })
}
