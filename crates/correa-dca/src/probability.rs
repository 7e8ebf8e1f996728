//! Per-class probability matrix produced by a classifier.

use crate::error::DcaError;

/// Validated `n_samples x n_classes` matrix of class probabilities.
///
/// Entry `row(i)[c]` is the estimated probability that case `i` belongs to
/// class `c`, in the classifier's training-time class order. Every entry is
/// finite and inside [0, 1]. Rows are expected to sum to 1 but this is not
/// enforced: calibrated models routinely drift by rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityMatrix {
    rows: Vec<Vec<f64>>,
    n_classes: usize,
}

impl ProbabilityMatrix {
    /// Create a matrix from row-major probabilities.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DcaError::EmptyCohort`] | `rows` is empty |
    /// | [`DcaError::ZeroClasses`] | The first row has no columns |
    /// | [`DcaError::RaggedRow`] | A row's length differs from the first row |
    /// | [`DcaError::InvalidProbability`] | An entry is non-finite or outside [0, 1] |
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, DcaError> {
        let Some(first) = rows.first() else {
            return Err(DcaError::EmptyCohort);
        };
        let n_classes = first.len();
        if n_classes == 0 {
            return Err(DcaError::ZeroClasses);
        }

        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != n_classes {
                return Err(DcaError::RaggedRow {
                    row: row_index,
                    expected: n_classes,
                    got: row.len(),
                });
            }
            if let Some(class) = row.iter().position(|p| !(0.0..=1.0).contains(p)) {
                return Err(DcaError::InvalidProbability {
                    row: row_index,
                    class,
                    value: row[class],
                });
            }
        }

        Ok(Self { rows, n_classes })
    }

    /// Extract the probability column for one class.
    ///
    /// # Errors
    ///
    /// Returns [`DcaError::ClassOutOfRange`] if `class >= n_classes`.
    pub fn column(&self, class: usize) -> Result<Vec<f64>, DcaError> {
        if class >= self.n_classes {
            return Err(DcaError::ClassOutOfRange {
                class,
                n_classes: self.n_classes,
            });
        }
        Ok(self.rows.iter().map(|row| row[class]).collect())
    }

    /// Most probable class per row. Ties resolve to the lowest class index.
    #[must_use]
    pub fn predicted_classes(&self) -> Vec<usize> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .fold((0, f64::NEG_INFINITY), |best, (class, &p)| {
                        if p > best.1 { (class, p) } else { best }
                    })
                    .0
            })
            .collect()
    }

    /// Return the probabilities for one case.
    ///
    /// # Panics
    ///
    /// Panics if `index >= n_samples()`.
    #[must_use]
    pub fn row(&self, index: usize) -> &[f64] {
        &self.rows[index]
    }

    /// Return all rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Return the number of cases.
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.rows.len()
    }

    /// Return the number of class columns.
    #[must_use]
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }
}
