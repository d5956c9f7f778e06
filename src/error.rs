//! # Errors
//! Errors emitted by spex_stats.

use std::{error, fmt, io};

/// spex_stats specific result.
pub type SpexResult<T> = Result<T, Error>;

/// Possible errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Data and model sequences do not have the same number of elements.
    ShapeMismatch { data_len: usize, model_len: usize },

    /// Reading or writing a spectrum file failed, or its JSON was malformed.
    IOError(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ShapeMismatch {
                data_len,
                model_len,
            } => {
                write!(
                    f,
                    "shape mismatch: data_y has {} elements but model_y has {}",
                    data_len, model_len
                )
            }
            Error::IOError(s) => {
                write!(f, "{}", s)
            }
        }
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::IOError(value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::IOError(value.to_string())
    }
}

/// Fails with [`Error::ShapeMismatch`] unless both sequences have the same length.
pub(crate) fn check_same_length(data_y: &[f64], model_y: &[f64]) -> SpexResult<()> {
    if data_y.len() != model_y.len() {
        tracing::debug!(
            data_len = data_y.len(),
            model_len = model_y.len(),
            "rejecting data/model pair with mismatched lengths"
        );
        return Err(Error::ShapeMismatch {
            data_len: data_y.len(),
            model_len: model_y.len(),
        });
    }
    Ok(())
}
