//! Per-session prediction history for the Correa cascade classifier.
//!
//! Validates the ten lab-value inputs, maps class indices to diagnostic
//! categories, and keeps a bounded, paginated history of predictions owned by
//! each session rather than by the process.

mod category;
mod error;
mod history;
mod sample;
mod session;

pub use category::DiagnosticCategory;
pub use error::SessionError;
pub use history::{HISTORY_CAPACITY, PAGE_SIZE, PredictionHistory, PredictionRecord};
pub use sample::{LabFeature, LabSample};
pub use session::PredictionSession;
