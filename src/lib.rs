//MIT License
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
pub mod Utils;
pub mod errors;

///  Example#1
/// ```
/// // solve the IVP y' = x, y(0) = 1 with the classical RK4 method
/// use RustedRK::numerical::RK_solvers::solve_ivp_rk4;
/// use nalgebra::DVector;
/// let field = |x: f64, _y: &DVector<f64>| x;
/// let y0 = DVector::from_vec(vec![1.0]);
/// let (x_mesh, trajectory) = solve_ivp_rk4(&y0, 0.0, 1.0, 1000, &field).unwrap();
/// // analytic solution y = 1 + x^2/2, so y(1) = 1.5
/// let y_final = trajectory[(0, trajectory.ncols() - 1)];
/// assert!((y_final - 1.5).abs() < 1e-10);
/// assert_eq!(x_mesh.len(), 1001);
/// ```
/// Example#2
/// ```
/// // solve the BVP y'' = y, y(0) = 0, y(1) = sinh(1) by shooting;
/// // the resolved initial slope is y'(0) = 1 and the solution is sinh(x)
/// use RustedRK::numerical::ShootingBVP::Shooting_driver::{
///     BoundaryValueProblem, ShootingMethodSolver,
/// };
/// use nalgebra::DVector;
/// let field = |_x: f64, y: &DVector<f64>| y[0];
/// let problem = BoundaryValueProblem::new(field, 0.0, 1.0, 0.0, 1.0_f64.sinh());
/// let mut solver = ShootingMethodSolver::new();
/// let result = solver.solve(&problem).unwrap();
/// assert!((result.s - 1.0).abs() < 1e-5);
/// ```
pub mod numerical;
