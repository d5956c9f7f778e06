use std::io::Write;
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::error::SpexResult;
use crate::statistic::statistic_type::StatisticType;

/// Observed spectrum and the model evaluated on the same bins.
///
/// Lengths are not checked on construction or load; a mismatch is reported
/// by `evaluate`.
///
/// JSON layout:
/// ```json
/// { "name": "src-1", "data_y": [3.0, 5.0], "model_y": [1.0, 2.0], "statistic": "chi_squared" }
/// ```
/// `name` and `statistic` may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumPair {
    /// Optional label, only used in log output.
    #[serde(default)]
    pub name: Option<String>,
    /// Measured values, one per bin.
    pub data_y: Vec<f64>,
    /// Model prediction, one per bin.
    pub model_y: Vec<f64>,
    /// Statistic used by `evaluate`.
    #[serde(default)]
    pub statistic: StatisticType,
}

impl SpectrumPair {
    pub fn new(data_y: Vec<f64>, model_y: Vec<f64>) -> Self {
        SpectrumPair {
            name: None,
            data_y,
            model_y,
            statistic: StatisticType::default(),
        }
    }

    /// Evaluates the configured statistic on this pair.
    pub fn evaluate(&self) -> SpexResult<f64> {
        self.statistic.evaluate(&self.data_y, &self.model_y)
    }

    /// Serializes the pair to a pretty-printed JSON file.
    ///
    /// Errors from the final buffered write are returned, not dropped.
    pub fn save_json(&self, path: impl AsRef<Path>) -> SpexResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Deserializes a `SpectrumPair` from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> SpexResult<SpectrumPair> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let pair: SpectrumPair = serde_json::from_reader(reader)?;
        tracing::debug!(
            path = %path.display(),
            data_len = pair.data_y.len(),
            model_len = pair.model_y.len(),
            statistic = pair.statistic.name(),
            "loaded spectrum pair"
        );
        Ok(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn missing_optional_fields_take_defaults() {
        let pair: SpectrumPair =
            serde_json::from_str(r#"{"data_y": [0.0, 0.0], "model_y": [1.0, 1.0]}"#).unwrap();
        assert_eq!(pair.name, None);
        assert_eq!(pair.statistic, StatisticType::ChiSquared);
        assert_eq!(pair.evaluate().unwrap(), 2.0);
    }

    #[test]
    fn mismatched_lengths_load_but_fail_to_evaluate() {
        let pair: SpectrumPair =
            serde_json::from_str(r#"{"data_y": [1.0, 2.0, 3.0], "model_y": [1.0, 2.0]}"#).unwrap();
        assert_eq!(
            pair.evaluate(),
            Err(Error::ShapeMismatch { data_len: 3, model_len: 2 })
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SpectrumPair::load_json("/nonexistent/dir/pair.json").unwrap_err();
        assert!(matches!(err, Error::IOError(_)));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn failed_write_is_an_io_error() {
        // /dev/full accepts open but fails every write with ENOSPC.
        let pair = SpectrumPair::new(vec![1.0, 2.0], vec![1.0, 2.0]);
        let err = pair.save_json("/dev/full").unwrap_err();
        assert!(matches!(err, Error::IOError(_)));
    }
}
