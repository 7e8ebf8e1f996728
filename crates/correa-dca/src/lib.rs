//! Decision-curve analysis: net benefit over probability thresholds.
//!
//! Pure math library — zero I/O. Provides validated thresholds and threshold
//! grids, outcome binarization, the per-threshold net-benefit statistic, and
//! assembly of the model / treat-all / treat-none net-benefit table for one
//! class of clinical interest. Classifiers are consumed through the
//! [`ProbabilisticClassifier`] capability trait.

mod classifier;
mod config;
mod error;
mod grid;
mod net_benefit;
mod outcome;
mod probability;
mod table;
mod threshold;

pub use classifier::ProbabilisticClassifier;
pub use config::{DcaConfig, build_dca_table};
pub use error::DcaError;
pub use grid::ThresholdGrid;
pub use net_benefit::{ClassificationCounts, net_benefit, treat_all_net_benefit};
pub use outcome::{binarize, prevalence};
pub use probability::ProbabilityMatrix;
pub use table::{NetBenefitRow, NetBenefitTable};
pub use threshold::Threshold;
