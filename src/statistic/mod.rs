pub mod chi_squared;
pub mod statistic_type;

pub use chi_squared::ChiSquared;
pub use statistic_type::StatisticType;
