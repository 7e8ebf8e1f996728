/// Errors from sample validation and session predictions.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Returned when a lab value is NaN or infinite.
    #[error("{feature} must be a finite number, got {value}")]
    NonFiniteValue {
        /// Display name of the offending feature.
        feature: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Returned when a lab value lies outside its accepted range.
    #[error("{feature} must lie in [{min}, {max}], got {value}")]
    ValueOutOfRange {
        /// Display name of the offending feature.
        feature: &'static str,
        /// The offending value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// Returned when a class index has no diagnostic category.
    #[error("class index {index} does not map to a diagnostic category")]
    UnknownCategory {
        /// The unmapped class index.
        index: usize,
    },

    /// Returned when the classifier returns no prediction for the sample.
    #[error("classifier returned {got} predictions for a single sample")]
    MissingPrediction {
        /// Number of rows returned.
        got: usize,
    },

    /// Returned when the classifier's output width differs from its declared class count.
    #[error("classifier declares {expected} classes but returned {got} probability columns")]
    ClassCountMismatch {
        /// Classes declared by the classifier.
        expected: usize,
        /// Columns in the returned probability matrix.
        got: usize,
    },

    /// Wraps an error raised by the classifier.
    #[error("classifier failed")]
    Classifier(#[source] Box<dyn std::error::Error + Send + Sync>),
}
