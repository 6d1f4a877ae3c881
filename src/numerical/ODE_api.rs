//! Struct-style api over the fixed-step solvers: owns the field function,
//! the method choice and the computed results, and can export the
//! trajectory to CSV.

use crate::Utils::logger::save_matrix_to_csv;
use crate::errors::SolverError;
use crate::numerical::RK_solvers::{RKMethod, solve_ivp};
use log::info;
use nalgebra::{DMatrix, DVector};
use std::env;

/// Highest-derivative function f(x, y_vec) in owned form.
pub type ScalarField = Box<dyn Fn(f64, &DVector<f64>) -> f64>;

pub struct FixedStepODE {
    field: ScalarField,
    /// Names of the state components, used as column headers on export.
    values: Vec<String>,
    arg: String,
    method: RKMethod,
    a: f64,
    b: f64,
    n_steps: usize,
    y0: DVector<f64>,
    x_result: DVector<f64>,
    y_result: DMatrix<f64>,
}

impl FixedStepODE {
    pub fn new(
        field: ScalarField,
        values: Vec<String>,
        arg: String,
        method: RKMethod,
        // start point
        a: f64,
        b: f64,
        n_steps: usize,
        // initial condition
        y0: DVector<f64>,
    ) -> Self {
        FixedStepODE {
            field,
            values,
            arg,
            method,
            a,
            b,
            n_steps,
            y0,
            x_result: DVector::zeros(0),
            y_result: DMatrix::zeros(0, 0),
        }
    }

    pub fn solve(&mut self) -> Result<(), SolverError> {
        let (x_result, y_result) = solve_ivp(
            self.method,
            &self.y0,
            self.a,
            self.b,
            self.n_steps,
            &self.field,
        )?;
        info!(
            "solved {:?} IVP over [{}, {}] with {} steps",
            self.method, self.a, self.b, self.n_steps
        );
        self.x_result = x_result;
        self.y_result = y_result;
        Ok(())
    }

    pub fn get_result(&self) -> (DVector<f64>, DMatrix<f64>) {
        (self.x_result.clone(), self.y_result.clone())
    }

    /// Writes the trajectory as `<arg>+<values>.csv` into the current
    /// directory.
    pub fn save_result(&self) -> Result<(), SolverError> {
        let current_dir = env::current_dir()?;
        let file_name = format!("{}+{}.csv", self.arg, self.values.join("+"));
        let full_path = current_dir.join(file_name);
        save_matrix_to_csv(
            &self.y_result,
            &self.values,
            full_path.to_str().unwrap_or_default(),
            &self.x_result,
            &self.arg,
        )?;
        info!("result saved to {}", full_path.display());
        Ok(())
    }
}
