//! I/O error types for correa-io.

use std::path::PathBuf;

use correa_dca::DcaError;

/// Errors from cohort file reading and table export.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the input file does not exist or is unreadable.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when the CSV parser encounters a malformed record.
    #[error("CSV parse error in {path} at byte offset {offset}")]
    CsvParse {
        /// Path to the CSV file.
        path: PathBuf,
        /// Byte offset where the error occurred.
        offset: u64,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// Returned when the CSV file contains a header but zero data rows.
    #[error("empty cohort (no data rows) in {path}")]
    EmptyDataset {
        /// Path to the CSV file.
        path: PathBuf,
    },

    /// Returned when the header has no outcome label column.
    #[error("label column \"{column}\" not found in {path}")]
    MissingLabelColumn {
        /// Path to the CSV file.
        path: PathBuf,
        /// The label column name that was expected.
        column: String,
    },

    /// Returned when the header has a label column but nothing else.
    #[error("no probability columns in {path}: expected one column per class besides the label")]
    NoProbabilityColumns {
        /// Path to the CSV file.
        path: PathBuf,
    },

    /// Returned when a data row has a different number of columns than the header.
    #[error("inconsistent row length in {path}: row {row_index} has {got} columns, expected {expected}")]
    InconsistentRowLength {
        /// Path to the CSV file.
        path: PathBuf,
        /// Zero-based row index (excluding header).
        row_index: usize,
        /// Expected number of columns (from header).
        expected: usize,
        /// Actual number of columns in this row.
        got: usize,
    },

    /// Returned when a label is not a non-negative integer.
    #[error("invalid label in {path}: row {row_index}, raw value \"{raw}\"")]
    InvalidLabel {
        /// Path to the CSV file.
        path: PathBuf,
        /// Zero-based row index (excluding header).
        row_index: usize,
        /// The raw string value that failed to parse.
        raw: String,
    },

    /// Returned when a label has no matching probability column.
    #[error("label {label} at row {row_index} in {path} has no probability column ({n_classes} classes)")]
    LabelOutOfRange {
        /// Path to the CSV file.
        path: PathBuf,
        /// Zero-based row index (excluding header).
        row_index: usize,
        /// The offending label.
        label: usize,
        /// Number of probability columns in the file.
        n_classes: usize,
    },

    /// Returned when a probability cell is NaN, Inf, or otherwise not a finite float.
    #[error("non-finite value in {path}: row {row_index}, column \"{column}\", raw value \"{raw}\"")]
    NonFiniteValue {
        /// Path to the CSV file.
        path: PathBuf,
        /// Zero-based row index (excluding header).
        row_index: usize,
        /// Header name of the offending column.
        column: String,
        /// The raw string value that failed to parse.
        raw: String,
    },

    /// Returned when the parsed probabilities violate the matrix contract.
    #[error("invalid probabilities in {path}")]
    InvalidProbabilities {
        /// Path to the CSV file.
        path: PathBuf,
        /// Underlying validation error.
        source: DcaError,
    },

    /// Returned when the cohort name contains characters outside `[a-zA-Z0-9_-]`.
    #[error("invalid cohort name \"{name}\": must match [a-zA-Z0-9_-]+")]
    InvalidCohortName {
        /// The invalid name.
        name: String,
    },

    /// Returned when the output directory cannot be created.
    #[error("cannot create output directory {path}")]
    OutputDirCreate {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when a result file cannot be written.
    #[error("cannot write file {path}")]
    WriteFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when a table row cannot be encoded as CSV.
    #[error("cannot encode CSV record for {path}")]
    CsvWrite {
        /// Path of the table being written.
        path: PathBuf,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// Returned when the JSON summary cannot be encoded.
    #[error("cannot encode JSON summary for {path}")]
    JsonEncode {
        /// Path of the summary being written.
        path: PathBuf,
        /// Underlying serde_json error.
        source: serde_json::Error,
    },
}
