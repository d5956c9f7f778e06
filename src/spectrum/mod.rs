pub mod spectrum_pair;

pub use spectrum_pair::SpectrumPair;
