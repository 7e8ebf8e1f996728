/// Errors from net-benefit and DCA table computation.
///
/// Every variant is a contract violation by the caller: nothing is retried
/// and no partial table is ever returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DcaError {
    /// Returned when a threshold is not strictly inside (0, 1).
    #[error("threshold must lie strictly inside (0, 1), got {threshold}")]
    ThresholdOutOfRange {
        /// The offending threshold value.
        threshold: f64,
    },

    /// Returned when outcome and probability vectors differ in length.
    #[error("outcome vector has {outcomes} entries but probability vector has {probabilities}")]
    LengthMismatch {
        /// Number of outcomes.
        outcomes: usize,
        /// Number of probabilities.
        probabilities: usize,
    },

    /// Returned when a cohort contains zero cases.
    #[error("cohort has zero cases")]
    EmptyCohort,

    /// Returned when the requested class has no probability column.
    #[error("class index {class} out of range for a probability matrix with {n_classes} classes")]
    ClassOutOfRange {
        /// The requested class index.
        class: usize,
        /// Number of class columns available.
        n_classes: usize,
    },

    /// Returned when a probability matrix has zero class columns.
    #[error("probability matrix has zero class columns")]
    ZeroClasses,

    /// Returned when a probability matrix row has the wrong number of columns.
    #[error("probability row {row} has {got} columns, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Expected column count (from the first row).
        expected: usize,
        /// Actual column count.
        got: usize,
    },

    /// Returned when a probability is NaN, infinite, or outside [0, 1].
    #[error("probability at row {row}, class {class} is {value}, expected a finite value in [0, 1]")]
    InvalidProbability {
        /// Zero-based row index.
        row: usize,
        /// Zero-based class column.
        class: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when a grid step is not a positive finite number.
    #[error("grid step must be positive and finite, got {step}")]
    InvalidGridStep {
        /// The offending step.
        step: f64,
    },

    /// Returned when a grid's start exceeds its end.
    #[error("grid start ({start}) must not exceed grid end ({end})")]
    InvalidGridRange {
        /// First threshold of the grid.
        start: f64,
        /// Last threshold of the grid.
        end: f64,
    },

    /// Returned when a range-built grid would hold more than the allowed points.
    #[error("grid from {start} to {end} in steps of {step} exceeds {max} points")]
    TooManyGridPoints {
        /// First threshold of the grid.
        start: f64,
        /// Requested last threshold.
        end: f64,
        /// The requested step.
        step: f64,
        /// Maximum number of points allowed.
        max: usize,
    },

    /// Returned when a grid would contain no thresholds.
    #[error("threshold grid is empty")]
    EmptyGrid,

    /// Returned when explicit grid values are not strictly increasing.
    #[error("grid values must be strictly increasing: {previous} is followed by {next} at index {index}")]
    NonIncreasingGrid {
        /// Index of the value that breaks the ordering.
        index: usize,
        /// The preceding value.
        previous: f64,
        /// The value at `index`.
        next: f64,
    },
}
