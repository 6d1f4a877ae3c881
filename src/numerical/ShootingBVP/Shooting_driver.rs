//! # Shooting Method for Boundary Value Problems (BVP)
//!
//! Solves the two-point BVP for a second-order scalar ODE
//! y'' = f(x, y, y'), y(a) = α, y(b) = β by treating the unknown initial
//! slope u = y'(a) as a free parameter:
//! 1. residual(u) = y(b) of the RK4-integrated IVP with initial condition
//!    [α, u] minus β;
//! 2. the secant root finder resolves u* with residual(u*) ≈ 0;
//! 3. one more RK4 pass with [α, u*] produces the returned trajectory.
//!
//! The residual carries no state between evaluations other than the
//! immutable problem parameters; every trial integration allocates its own
//! mesh and trajectory. Non-convergence of the root search propagates as an
//! error without retry, bracket widening or partition changes.
//!
//! ## Usage Example
//! ```
//! use RustedRK::numerical::ShootingBVP::Shooting_driver::{
//!     BoundaryValueProblem, ShootingMethodSolver,
//! };
//! use nalgebra::DVector;
//!
//! // y'' = 0, y(0) = 2, y(1) = 5; exact solution y = 3x + 2
//! let field = |_x: f64, _y: &DVector<f64>| 0.0;
//! let problem = BoundaryValueProblem::new(field, 0.0, 1.0, 2.0, 5.0);
//!
//! let mut solver = ShootingMethodSolver::new();
//! let result = solver.solve(&problem).unwrap();
//! assert!((result.s - 3.0).abs() < 1e-8);
//! ```

use crate::errors::SolverError;
use crate::numerical::RK_solvers::{RKMethod, check_grid, integrate};
use crate::numerical::secant::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, find_root};
use log::{debug, info};
use nalgebra::{DMatrix, DVector};

/// Default partition count for the internal RK4 integrations. Override
/// through [`ShootingMethodSolver::n_steps`] to trade accuracy for cost.
pub const DEFAULT_SHOOTING_STEPS: usize = 2000;

/// The BVP y'' = f(x, y, y') with y(a) = alpha and y(b) = beta. Not mutated
/// after construction.
pub struct BoundaryValueProblem<F> {
    /// Highest-derivative function f(x, y_vec) with y_vec = (y, y').
    pub field: F,
    pub a: f64,
    pub b: f64,
    pub alpha: f64,
    pub beta: f64,
}

impl<F> BoundaryValueProblem<F>
where
    F: Fn(f64, &DVector<f64>) -> f64,
{
    pub fn new(field: F, a: f64, b: f64, alpha: f64, beta: f64) -> Self {
        Self {
            field,
            a,
            b,
            alpha,
            beta,
        }
    }
}

/// Configuration for the shooting method solver.
pub struct ShootingMethodSolver {
    /// Number of subintervals for every internal RK4 integration.
    pub n_steps: usize,
    /// Convergence tolerance handed to the secant root finder.
    pub tolerance: f64,
    /// Iteration cap handed to the secant root finder.
    pub max_iterations: usize,
    /// Starting guesses for the unknown initial slope. With `None` the
    /// interval endpoints (a, b) are handed to the root finder; supply
    /// `Some((u0, u1))` for genuine slope estimates.
    pub initial_guesses: Option<(f64, f64)>,
    pub result: ShootingMethodResult,
}

#[derive(Debug, Clone)]
pub struct ShootingMethodResult {
    pub x_mesh: DVector<f64>,
    /// Full trajectory: row 0 is y(x), row 1 is y'(x); one column per mesh
    /// point.
    pub y: DMatrix<f64>,
    /// Resolved initial slope u* = y'(a).
    pub s: f64,
    /// State (y, y') at x = b.
    pub bound_values: DVector<f64>,
}

impl Default for ShootingMethodResult {
    fn default() -> Self {
        Self {
            x_mesh: DVector::zeros(0),
            y: DMatrix::zeros(0, 0),
            s: 0.0,
            bound_values: DVector::zeros(0),
        }
    }
}

impl ShootingMethodSolver {
    pub fn new() -> Self {
        Self {
            n_steps: DEFAULT_SHOOTING_STEPS,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            initial_guesses: None,
            result: ShootingMethodResult::default(),
        }
    }

    /// Solves the BVP using the shooting method.
    pub fn solve<F>(
        &mut self,
        problem: &BoundaryValueProblem<F>,
    ) -> Result<ShootingMethodResult, SolverError>
    where
        F: Fn(f64, &DVector<f64>) -> f64,
    {
        info!("starting shooting method solver");
        debug!(
            "problem parameters: a={}, b={}, alpha={}, beta={}",
            problem.a, problem.b, problem.alpha, problem.beta
        );
        debug!(
            "solver parameters: n_steps={}, tolerance={}, max_iterations={}, initial_guesses={:?}",
            self.n_steps, self.tolerance, self.max_iterations, self.initial_guesses
        );

        check_grid(problem.a, problem.b, self.n_steps)?;
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidArgument(
                "max_iterations must be at least 1".to_string(),
            ));
        }

        let n_steps = self.n_steps;
        let residual = |u: f64| -> f64 {
            let y0 = DVector::from_vec(vec![problem.alpha, u]);
            let (_, trajectory) =
                integrate(RKMethod::RK4, &y0, problem.a, problem.b, n_steps, &problem.field);
            let last = trajectory.column(trajectory.ncols() - 1);
            let residual_val = last[0] - problem.beta;
            debug!(
                "residual evaluation: u={}, y(b)={}, y'(b)={}, residual={}",
                u, last[0], last[1], residual_val
            );
            residual_val
        };

        // default starting guesses are the interval endpoints, not slope
        // estimates
        let (guess_a, guess_b) = self.initial_guesses.unwrap_or((problem.a, problem.b));
        let s = find_root(
            residual,
            guess_a,
            guess_b,
            self.tolerance,
            self.max_iterations,
        )?;
        info!("found initial slope s = {}", s);

        let y0 = DVector::from_vec(vec![problem.alpha, s]);
        let (x_mesh, trajectory) = integrate(
            RKMethod::RK4,
            &y0,
            problem.a,
            problem.b,
            self.n_steps,
            &problem.field,
        );
        let bound_values = trajectory.column(trajectory.ncols() - 1).into_owned();
        info!(
            "final solution: y({})={}, y'({})={}",
            problem.b, bound_values[0], problem.b, bound_values[1]
        );

        self.result = ShootingMethodResult {
            x_mesh,
            y: trajectory,
            s,
            bound_values,
        };
        Ok(self.result.clone())
    }

    pub fn get_solution(&self) -> ShootingMethodResult {
        self.result.clone()
    }

    pub fn get_x(&self) -> DVector<f64> {
        self.result.x_mesh.clone()
    }

    /// The solution y(x) over the mesh, derivative track discarded.
    pub fn get_y(&self) -> DVector<f64> {
        self.result.y.row(0).transpose().into_owned()
    }
}

/// Shooting entry point with the documented defaults: N = 2000 internal
/// subintervals, secant tolerance 1e-6, 100 iterations, starting guesses
/// (a, b). Returns the x mesh and the solution values y(x).
pub fn solve_bvp<F>(
    a: f64,
    b: f64,
    alpha: f64,
    beta: f64,
    field: F,
) -> Result<(DVector<f64>, DVector<f64>), SolverError>
where
    F: Fn(f64, &DVector<f64>) -> f64,
{
    let problem = BoundaryValueProblem::new(field, a, b, alpha, beta);
    let mut solver = ShootingMethodSolver::new();
    solver.solve(&problem)?;
    Ok((solver.get_x(), solver.get_y()))
}

/////////////////////////////////////////////////////////////////////////
//          tests
//////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    use simplelog::*;

    fn init_logger() {
        let _ = SimpleLogger::init(LevelFilter::Info, Config::default());
    }

    #[test]
    fn trivial_bvp_resolves_zero_slope() {
        init_logger();

        // y'' = 0 with zero boundary values: y(x) = 0 everywhere, u* = 0
        let field = |_x: f64, _y: &DVector<f64>| 0.0;
        let problem = BoundaryValueProblem::new(field, 0.0, 1.0, 0.0, 0.0);

        let mut solver = ShootingMethodSolver::new();
        let result = solver.solve(&problem).unwrap();

        assert_abs_diff_eq!(result.s, 0.0, epsilon = 1e-8);
        for y in solver.get_y().iter() {
            assert_abs_diff_eq!(*y, 0.0, epsilon = 1e-8);
        }
    }

    #[test]
    fn solve_bvp_entry_point_trivial_ode() {
        init_logger();

        let field = |_x: f64, _y: &DVector<f64>| 0.0;
        let (x_mesh, y_vals) = solve_bvp(0.0, 1.0, 0.0, 0.0, field).unwrap();

        assert_eq!(x_mesh.len(), DEFAULT_SHOOTING_STEPS + 1);
        assert_eq!(y_vals.len(), x_mesh.len());
        for y in y_vals.iter() {
            assert_abs_diff_eq!(*y, 0.0, epsilon = 1e-8);
        }
    }

    #[test]
    fn linear_ode_hyperbolic_sine_solution() {
        init_logger();

        // y'' = y, y(0) = 0, y(1) = sinh(1); exact y = sinh(x), y'(0) = 1
        let field = |_x: f64, y: &DVector<f64>| y[0];
        let problem = BoundaryValueProblem::new(field, 0.0, 1.0, 0.0, 1.0_f64.sinh());

        let mut solver = ShootingMethodSolver::new();
        solver.tolerance = 1e-8;
        let result = solver.solve(&problem).unwrap();

        assert_abs_diff_eq!(result.bound_values[0], problem.beta, epsilon = 1e-6);
        assert_abs_diff_eq!(result.s, 1.0, epsilon = 1e-6);

        let x_mesh = solver.get_x();
        let y = solver.get_y();
        for i in 0..x_mesh.len() {
            assert_abs_diff_eq!(y[i], x_mesh[i].sinh(), epsilon = 1e-6);
        }
    }

    #[test]
    fn straight_line_bvp() {
        init_logger();

        // y'' = 0, y(0) = 2, y(1) = 5; exact y = 3x + 2
        let field = |_x: f64, _y: &DVector<f64>| 0.0;
        let problem = BoundaryValueProblem::new(field, 0.0, 1.0, 2.0, 5.0);

        let mut solver = ShootingMethodSolver::new();
        let result = solver.solve(&problem).unwrap();

        assert_abs_diff_eq!(result.s, 3.0, epsilon = 1e-8);
        assert_abs_diff_eq!(result.bound_values[0], 5.0, epsilon = 1e-8);

        let x_mesh = solver.get_x();
        let y = solver.get_y();
        for i in 0..x_mesh.len() {
            assert_abs_diff_eq!(y[i], 3.0 * x_mesh[i] + 2.0, epsilon = 1e-8);
        }
    }

    #[test]
    fn nonlinear_pendulum() {
        init_logger();

        // y'' = -sin(y), y(0) = 0, y(1) = 0.5
        let field = |_x: f64, y: &DVector<f64>| -y[0].sin();
        let problem = BoundaryValueProblem::new(field, 0.0, 1.0, 0.0, 0.5);

        let mut solver = ShootingMethodSolver::new();
        let result = solver.solve(&problem).unwrap();

        assert_abs_diff_eq!(result.bound_values[0], problem.beta, epsilon = 1e-5);
        assert!(result.s.is_finite());
    }

    #[test]
    fn custom_slope_guesses_are_honored() {
        init_logger();

        // y'' = y, y(0) = 0, y(1) = sinh(1) again, but with genuine slope
        // estimates instead of the endpoint pair
        let field = |_x: f64, y: &DVector<f64>| y[0];
        let problem = BoundaryValueProblem::new(field, 0.0, 1.0, 0.0, 1.0_f64.sinh());

        let mut solver = ShootingMethodSolver::new();
        solver.initial_guesses = Some((0.5, 2.0));
        let result = solver.solve(&problem).unwrap();

        assert_abs_diff_eq!(result.s, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn coarse_partition_is_caller_controlled() {
        init_logger();

        let field = |_x: f64, y: &DVector<f64>| y[0];
        let problem = BoundaryValueProblem::new(field, 0.0, 1.0, 0.0, 1.0_f64.sinh());

        let mut solver = ShootingMethodSolver::new();
        solver.n_steps = 50;
        let result = solver.solve(&problem).unwrap();

        assert_eq!(result.x_mesh.len(), 51);
        assert_eq!(result.y.ncols(), 51);
        assert_abs_diff_eq!(result.s, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn non_convergence_is_surfaced() {
        init_logger();

        let field = |_x: f64, y: &DVector<f64>| y[0];
        let problem = BoundaryValueProblem::new(field, 0.0, 1.0, 0.0, 1.0);

        // unattainable tolerance and a tiny iteration budget
        let mut solver = ShootingMethodSolver::new();
        solver.tolerance = 0.0;
        solver.max_iterations = 3;
        let result = solver.solve(&problem);

        assert!(matches!(
            result,
            Err(SolverError::NonConvergence { .. }) | Err(SolverError::SecantStalled { .. })
        ));
    }

    #[test]
    fn zero_subintervals_is_rejected_before_search() {
        let field = |_x: f64, _y: &DVector<f64>| 0.0;
        let problem = BoundaryValueProblem::new(field, 0.0, 1.0, 0.0, 0.0);

        let mut solver = ShootingMethodSolver::new();
        solver.n_steps = 0;
        let result = solver.solve(&problem);

        assert!(matches!(result, Err(SolverError::InvalidArgument(_))));
    }

    #[test]
    fn degenerate_interval_is_rejected() {
        let field = |_x: f64, _y: &DVector<f64>| 0.0;
        let problem = BoundaryValueProblem::new(field, 1.0, 1.0, 0.0, 0.0);

        let mut solver = ShootingMethodSolver::new();
        let result = solver.solve(&problem);

        assert!(matches!(result, Err(SolverError::InvalidArgument(_))));
    }

    #[test]
    fn identical_solves_are_deterministic() {
        init_logger();

        let field = |_x: f64, y: &DVector<f64>| -y[0].sin();
        let problem = BoundaryValueProblem::new(field, 0.0, 1.0, 0.0, 0.5);

        let mut first = ShootingMethodSolver::new();
        let mut second = ShootingMethodSolver::new();
        let r1 = first.solve(&problem).unwrap();
        let r2 = second.solve(&problem).unwrap();

        assert_eq!(r1.s, r2.s);
        assert_eq!(r1.x_mesh, r2.x_mesh);
        assert_eq!(r1.y, r2.y);
    }
}
