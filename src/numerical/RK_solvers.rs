//! Fixed-step explicit Runge-Kutta solvers for initial value problems.
//!
//! Both methods integrate the n-th order scalar ODE written in first-order
//! form through the vector field adapter: the caller supplies the
//! highest-derivative function f(x, y_vec) and the initial state
//! (y, y', ..., y^(n-1)), and gets back the x mesh of N+1 equally spaced
//! points over [a, b] and the trajectory matrix with one column per mesh
//! point.

use crate::errors::SolverError;
use crate::numerical::vector_field::lift_scalar_field;
use log::debug;
use nalgebra::{DMatrix, DVector};

/// Which fixed-step formula the shared step loop applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RKMethod {
    /// Second-order Runge-Kutta (Heun). Global error O(h^2).
    RK2,
    /// Classical fourth-order Runge-Kutta. Global error O(h^4).
    RK4,
}

/// Rejects grids for which the step size h = (b - a)/N is undefined or
/// non-positive.
pub(crate) fn check_grid(a: f64, b: f64, n_steps: usize) -> Result<(), SolverError> {
    if n_steps == 0 {
        return Err(SolverError::InvalidArgument(
            "number of subintervals N must be at least 1".to_string(),
        ));
    }
    if !a.is_finite() || !b.is_finite() {
        return Err(SolverError::InvalidArgument(format!(
            "interval bounds must be finite, got [{}, {}]",
            a, b
        )));
    }
    if b <= a {
        return Err(SolverError::InvalidArgument(format!(
            "integration interval must satisfy b > a, got [{}, {}]",
            a, b
        )));
    }
    Ok(())
}

/// Mesh of N+1 equally spaced points over [a, b].
pub fn create_mesh(a: f64, b: f64, n_steps: usize) -> DVector<f64> {
    let h = (b - a) / n_steps as f64;
    DVector::from_fn(n_steps + 1, |i, _| a + i as f64 * h)
}

fn rk2_step<F>(x: f64, y: &DVector<f64>, h: f64, field: &F) -> DVector<f64>
where
    F: Fn(f64, &DVector<f64>) -> f64,
{
    let k0 = h * lift_scalar_field(x, y, field);
    let k1 = h * lift_scalar_field(x + h, &(y + &k0), field);
    y + (k0 + k1) / 2.0
}

fn rk4_step<F>(x: f64, y: &DVector<f64>, h: f64, field: &F) -> DVector<f64>
where
    F: Fn(f64, &DVector<f64>) -> f64,
{
    let k0 = h * lift_scalar_field(x, y, field);
    let k1 = h * lift_scalar_field(x + h / 2.0, &(y + &k0 / 2.0), field);
    let k2 = h * lift_scalar_field(x + h / 2.0, &(y + &k1 / 2.0), field);
    let k3 = h * lift_scalar_field(x + h, &(y + &k2), field);
    y + (k0 + 2.0 * k1 + 2.0 * k2 + k3) / 6.0
}

/// Step loop shared by both methods. Inputs are assumed already validated;
/// the public entry points and the shooting driver check them first.
pub(crate) fn integrate<F>(
    method: RKMethod,
    init_conds: &DVector<f64>,
    a: f64,
    b: f64,
    n_steps: usize,
    field: &F,
) -> (DVector<f64>, DMatrix<f64>)
where
    F: Fn(f64, &DVector<f64>) -> f64,
{
    let h = (b - a) / n_steps as f64;
    debug!(
        "integrating with {:?}: a={}, b={}, N={}, h={}, n={}",
        method,
        a,
        b,
        n_steps,
        h,
        init_conds.len()
    );

    let mut trajectory = DMatrix::zeros(init_conds.len(), n_steps + 1);
    trajectory.set_column(0, init_conds);
    let mut y = init_conds.clone();

    for i in 0..n_steps {
        let xi = a + i as f64 * h;
        y = match method {
            RKMethod::RK2 => rk2_step(xi, &y, h, field),
            RKMethod::RK4 => rk4_step(xi, &y, h, field),
        };
        trajectory.set_column(i + 1, &y);
    }

    (create_mesh(a, b, n_steps), trajectory)
}

/// Solves an IVP with the selected fixed-step method.
///
/// # Arguments
/// * `method` - RK2 or RK4; same contract, different step formula.
/// * `init_conds` - Initial state vector (y, y', ..., y^(n-1)) at x = a.
/// * `a` - Startpoint of the interval, also the initial x value.
/// * `b` - Endpoint of the interval.
/// * `n_steps` - Number of subintervals N; the mesh has N+1 points.
/// * `field` - Highest-derivative function f(x, y_vec).
///
/// # Returns
/// * x mesh of N+1 points and the trajectory matrix (one column per point,
///   column 0 is `init_conds`).
pub fn solve_ivp<F>(
    method: RKMethod,
    init_conds: &DVector<f64>,
    a: f64,
    b: f64,
    n_steps: usize,
    field: &F,
) -> Result<(DVector<f64>, DMatrix<f64>), SolverError>
where
    F: Fn(f64, &DVector<f64>) -> f64,
{
    check_grid(a, b, n_steps)?;
    if init_conds.is_empty() {
        return Err(SolverError::InvalidArgument(
            "initial condition vector must be non-empty".to_string(),
        ));
    }
    Ok(integrate(method, init_conds, a, b, n_steps, field))
}

/// Second-order Runge-Kutta entry point; see [`solve_ivp`].
pub fn solve_ivp_rk2<F>(
    init_conds: &DVector<f64>,
    a: f64,
    b: f64,
    n_steps: usize,
    field: &F,
) -> Result<(DVector<f64>, DMatrix<f64>), SolverError>
where
    F: Fn(f64, &DVector<f64>) -> f64,
{
    solve_ivp(RKMethod::RK2, init_conds, a, b, n_steps, field)
}

/// Classical fourth-order Runge-Kutta entry point; see [`solve_ivp`].
pub fn solve_ivp_rk4<F>(
    init_conds: &DVector<f64>,
    a: f64,
    b: f64,
    n_steps: usize,
    field: &F,
) -> Result<(DVector<f64>, DMatrix<f64>), SolverError>
where
    F: Fn(f64, &DVector<f64>) -> f64,
{
    solve_ivp(RKMethod::RK4, init_conds, a, b, n_steps, field)
}

/////////////////////////////////////////////////////////////////////////
//          tests
//////////////////////////////////////////////////////////////////////////
