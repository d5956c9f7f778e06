use crate::error::{check_same_length, SpexResult};

/// Unweighted chi-squared: the sum of squared residuals between data and model.
///
/// No per-point uncertainty enters the statistic. A variance-weighted form
/// would be a different statistic with its own type.
pub struct ChiSquared;

impl ChiSquared {
    /// Scalar statistic: sum((data_y - model_y)²)
    ///
    /// Lengths are checked before any arithmetic. Non-finite values are not
    /// rejected; they carry through into a non-finite result. Two empty
    /// sequences give `0.0`.
    ///
    /// Finite inputs stay within f64 range only: squares can underflow to
    /// `0.0` (`[1e-200]` vs `[0.0]`) or overflow to `inf` (`[1e200]` vs `[-1e200]`).
    pub fn statistic(data_y: &[f64], model_y: &[f64]) -> SpexResult<f64> {
        check_same_length(data_y, model_y)?;
        Ok(data_y.iter().zip(model_y.iter())
            .map(|(d, m)| {
                let r = d - m;
                r * r
            })
            .sum())
    }

    /// Per-point residuals: data_y - model_y
    pub fn residuals(data_y: &[f64], model_y: &[f64]) -> SpexResult<Vec<f64>> {
        check_same_length(data_y, model_y)?;
        Ok(data_y.iter().zip(model_y.iter())
            .map(|(d, m)| d - m)
            .collect())
    }

    /// Gradient with respect to each model value: -2·(data_y - model_y)
    pub fn gradient(data_y: &[f64], model_y: &[f64]) -> SpexResult<Vec<f64>> {
        check_same_length(data_y, model_y)?;
        Ok(data_y.iter().zip(model_y.iter())
            .map(|(d, m)| -2.0 * (d - m))
            .collect())
    }
}
