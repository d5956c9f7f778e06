pub mod error;
pub mod statistic;
pub mod spectrum;

// Convenience re-exports
pub use error::{Error, SpexResult};
pub use statistic::chi_squared::ChiSquared;
pub use statistic::statistic_type::StatisticType;
pub use spectrum::spectrum_pair::SpectrumPair;

/// Unweighted chi-squared between observed and model values.
///
/// Shorthand for [`ChiSquared::statistic`].
pub fn chi_squared(data_y: &[f64], model_y: &[f64]) -> SpexResult<f64> {
    ChiSquared::statistic(data_y, model_y)
}
