//! Domain types for correa-io.

use correa_dca::ProbabilityMatrix;

use crate::IoError;

/// A validated cohort name for output file naming.
///
/// Must match `[a-zA-Z0-9_-]+`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CohortName(String);

impl CohortName {
    /// Parse and validate a cohort name.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidCohortName`] if the name is empty or
    /// contains characters outside `[a-zA-Z0-9_-]`.
    pub fn new(name: String) -> Result<Self, IoError> {
        if name.is_empty()
            || !name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(IoError::InvalidCohortName { name });
        }
        Ok(Self(name))
    }

    /// Return the cohort name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CohortName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One validation cohort: observed labels and the model's class probabilities.
///
/// Produced by [`CohortReader`](crate::CohortReader). `labels[i]` is the
/// observed class of case `i` and `probabilities.row(i)` the model's estimate
/// for it; column `c` of the matrix is named `class_columns[c]`.
#[derive(Debug)]
pub struct CohortData {
    labels: Vec<usize>,
    probabilities: ProbabilityMatrix,
    class_columns: Vec<String>,
}

impl CohortData {
    pub(crate) fn new(
        labels: Vec<usize>,
        probabilities: ProbabilityMatrix,
        class_columns: Vec<String>,
    ) -> Self {
        Self {
            labels,
            probabilities,
            class_columns,
        }
    }

    /// Return the observed class labels.
    #[must_use]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Return the per-class probability matrix.
    #[must_use]
    pub fn probabilities(&self) -> &ProbabilityMatrix {
        &self.probabilities
    }

    /// Return the probability column names, in class order.
    #[must_use]
    pub fn class_columns(&self) -> &[String] {
        &self.class_columns
    }

    /// Return the number of cases.
    #[must_use]
    pub fn n_cases(&self) -> usize {
        self.labels.len()
    }

    /// Return the number of classes.
    #[must_use]
    pub fn n_classes(&self) -> usize {
        self.class_columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cohort_name_valid() {
        let name = CohortName::new("external_shengyi-01".to_string());
        assert_eq!(name.unwrap().as_str(), "external_shengyi-01");
    }

    #[test]
    fn cohort_name_rejects_empty() {
        let name = CohortName::new(String::new());
        assert!(matches!(name, Err(IoError::InvalidCohortName { .. })));
    }

    #[test]
    fn cohort_name_rejects_path_separators() {
        let name = CohortName::new("../dongying".to_string());
        assert!(matches!(name, Err(IoError::InvalidCohortName { .. })));
    }

    #[test]
    fn cohort_data_accessors() {
        let probs = ProbabilityMatrix::new(vec![vec![0.2, 0.8], vec![0.6, 0.4]]).unwrap();
        let data = CohortData::new(vec![1, 0], probs, vec!["p0".into(), "p1".into()]);
        assert_eq!(data.n_cases(), 2);
        assert_eq!(data.n_classes(), 2);
        assert_eq!(data.labels(), &[1, 0]);
        assert_eq!(data.class_columns()[1], "p1");
    }
}
