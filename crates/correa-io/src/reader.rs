//! CSV cohort reader with full input validation.

use std::path::{Path, PathBuf};

use correa_dca::ProbabilityMatrix;
use tracing::{debug, info, instrument};

use crate::IoError;
use crate::domain::CohortData;

/// Default name of the observed-outcome column.
const DEFAULT_LABEL_COLUMN: &str = "label";

/// Reads a validation cohort from a CSV file.
///
/// Expected CSV format:
/// - Header row required
/// - One column (default `label`) holds the observed class as a non-negative integer
/// - Every other column, in header order, holds the model's probability for
///   class 0, 1, 2, ...
/// - `label,p_HC,p_NAG,p_AG,p_IM,p_GC`
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`IoError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`IoError::CsvParse`] | Malformed CSV record |
/// | [`IoError::MissingLabelColumn`] | Header lacks the label column |
/// | [`IoError::NoProbabilityColumns`] | Header has only the label column |
/// | [`IoError::EmptyDataset`] | Zero data rows after header |
/// | [`IoError::InconsistentRowLength`] | Row has different column count than header |
/// | [`IoError::InvalidLabel`] | Label is not a non-negative integer |
/// | [`IoError::LabelOutOfRange`] | Label has no probability column |
/// | [`IoError::NonFiniteValue`] | Probability is NaN, Inf, or unparseable |
/// | [`IoError::InvalidProbabilities`] | Probability outside [0, 1] |
pub struct CohortReader {
    path: PathBuf,
    label_column: String,
}

impl CohortReader {
    /// Create a new reader for the given CSV file path.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            label_column: DEFAULT_LABEL_COLUMN.to_string(),
        }
    }

    /// Set the name of the observed-outcome column.
    #[must_use]
    pub fn with_label_column(mut self, column: impl Into<String>) -> Self {
        self.label_column = column.into();
        self
    }

    /// Read and validate the CSV file, returning a [`CohortData`].
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<CohortData, IoError> {
        let file = std::fs::File::open(&self.path).map_err(|e| IoError::FileNotFound {
            path: self.path.clone(),
            source: e,
        })?;

        // flexible(true) so that our own InconsistentRowLength check fires
        // instead of a low-level CsvParse error.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let header = rdr.headers().map_err(|e| self.parse_error(e))?.clone();
        let expected_cols = header.len();
        let label_index = header
            .iter()
            .position(|name| name == self.label_column)
            .ok_or_else(|| IoError::MissingLabelColumn {
                path: self.path.clone(),
                column: self.label_column.clone(),
            })?;
        let class_columns: Vec<String> = header
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != label_index)
            .map(|(_, name)| name.to_string())
            .collect();
        if class_columns.is_empty() {
            return Err(IoError::NoProbabilityColumns {
                path: self.path.clone(),
            });
        }
        let n_classes = class_columns.len();
        debug!(label_index, n_classes, "read CSV header");

        let mut labels = Vec::new();
        let mut rows = Vec::new();

        for (row_index, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| self.parse_error(e))?;

            if record.len() != expected_cols {
                return Err(IoError::InconsistentRowLength {
                    path: self.path.clone(),
                    row_index,
                    expected: expected_cols,
                    got: record.len(),
                });
            }

            let raw_label = record.get(label_index).unwrap_or("");
            let label: usize = raw_label.parse().map_err(|_| IoError::InvalidLabel {
                path: self.path.clone(),
                row_index,
                raw: raw_label.to_string(),
            })?;
            if label >= n_classes {
                return Err(IoError::LabelOutOfRange {
                    path: self.path.clone(),
                    row_index,
                    label,
                    n_classes,
                });
            }

            let mut probs = Vec::with_capacity(n_classes);
            for (col_index, raw) in record.iter().enumerate() {
                if col_index == label_index {
                    continue;
                }
                let value = raw
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| IoError::NonFiniteValue {
                        path: self.path.clone(),
                        row_index,
                        column: header.get(col_index).unwrap_or("").to_string(),
                        raw: raw.to_string(),
                    })?;
                probs.push(value);
            }

            labels.push(label);
            rows.push(probs);
        }

        if labels.is_empty() {
            return Err(IoError::EmptyDataset {
                path: self.path.clone(),
            });
        }

        let probabilities =
            ProbabilityMatrix::new(rows).map_err(|e| IoError::InvalidProbabilities {
                path: self.path.clone(),
                source: e,
            })?;

        info!(n_cases = labels.len(), n_classes, "cohort loaded");
        Ok(CohortData::new(labels, probabilities, class_columns))
    }

    fn parse_error(&self, e: csv::Error) -> IoError {
        IoError::CsvParse {
            path: self.path.clone(),
            offset: e.position().map_or(0, |p| p.byte()),
            source: e,
        }
    }
}
