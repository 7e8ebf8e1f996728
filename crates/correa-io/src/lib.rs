//! Cohort CSV reading and decision-curve table export for correa.

mod domain;
mod error;
mod reader;
mod writer;

pub use domain::{CohortData, CohortName};
pub use error::IoError;
pub use reader::CohortReader;
pub use writer::TableWriter;
