use serde::{Serialize, Deserialize};

use crate::error::SpexResult;
use crate::statistic::chi_squared::ChiSquared;

/// Selects which fit statistic compares data to model.
///
/// - `ChiSquared` — unweighted sum of squared residuals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatisticType {
    #[default]
    ChiSquared,
}

impl StatisticType {
    /// Evaluates the selected statistic on a data/model pair.
    pub fn evaluate(self, data_y: &[f64], model_y: &[f64]) -> SpexResult<f64> {
        match self {
            StatisticType::ChiSquared => ChiSquared::statistic(data_y, model_y),
        }
    }

    /// Name as written in JSON files.
    pub fn name(self) -> &'static str {
        match self {
            StatisticType::ChiSquared => "chi_squared",
        }
    }
}
