use nalgebra::DVector;

/// Lifts a scalar "highest-derivative" function into a first-order vector
/// field.
///
/// For an n-th order scalar ODE y^(n) = f(x, y, y', ..., y^(n-1)) the state
/// vector is (y, y', ..., y^(n-1)); the derivative of each lower component
/// is the next-higher one and the derivative of the last component is
/// supplied by `field`:
///
/// F(x, y_vec) = (y_vec[1], ..., y_vec[n-1], field(x, y_vec))
///
/// For n = 1 the output is simply [field(x, y_vec)].
pub fn lift_scalar_field<F>(x: f64, y_vec: &DVector<f64>, field: &F) -> DVector<f64>
where
    F: Fn(f64, &DVector<f64>) -> f64,
{
    let n = y_vec.len();
    assert!(n > 0, "state vector must be non-empty");
    let mut F_vec = DVector::zeros(n);
    for i in 0..n - 1 {
        F_vec[i] = y_vec[i + 1];
    }
    F_vec[n - 1] = field(x, y_vec);
    F_vec
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn shifts_lower_components_and_appends_field() {
        let field = |x: f64, y: &DVector<f64>| x * y[0];
        let y_vec = DVector::from_vec(vec![2.0, 3.0, 5.0]);
        let F_vec = lift_scalar_field(1.5, &y_vec, &field);

        assert_eq!(F_vec.len(), y_vec.len());
        assert_abs_diff_eq!(F_vec[0], y_vec[1]);
        assert_abs_diff_eq!(F_vec[1], y_vec[2]);
        assert_abs_diff_eq!(F_vec[2], 1.5 * 2.0);
    }

    #[test]
    fn first_order_degenerate_case() {
        // n = 1: no components to shift, output is just [f(x, y)]
        let field = |x: f64, _y: &DVector<f64>| x;
        let y_vec = DVector::from_vec(vec![7.0]);
        let F_vec = lift_scalar_field(0.25, &y_vec, &field);

        assert_eq!(F_vec.len(), 1);
        assert_abs_diff_eq!(F_vec[0], 0.25);
    }

    #[test]
    #[should_panic]
    fn empty_state_is_rejected() {
        let field = |_x: f64, _y: &DVector<f64>| 0.0;
        let y_vec = DVector::zeros(0);
        let _ = lift_scalar_field(0.0, &y_vec, &field);
    }

    #[test]
    fn second_order_reduction() {
        // y'' = -y in first-order form: (y, y') -> (y', -y)
        let field = |_x: f64, y: &DVector<f64>| -y[0];
        let y_vec = DVector::from_vec(vec![1.0, 0.0]);
        let F_vec = lift_scalar_field(0.0, &y_vec, &field);

        assert_abs_diff_eq!(F_vec[0], 0.0);
        assert_abs_diff_eq!(F_vec[1], -1.0);
    }
}
