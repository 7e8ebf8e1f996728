//! Configuration builder for decision-curve table construction.

use tracing::{debug, info, instrument};

use crate::error::DcaError;
use crate::grid::ThresholdGrid;
use crate::net_benefit::{ClassificationCounts, treat_all_net_benefit};
use crate::outcome::{binarize, prevalence};
use crate::probability::ProbabilityMatrix;
use crate::table::{NetBenefitRow, NetBenefitTable};

/// Class index of gastric cancer (GC) in the Correa cascade label order.
const DEFAULT_POSITIVE_CLASS: usize = 4;

/// Configuration for building a decision-curve table.
///
/// Construct via [`DcaConfig::new`], then chain `with_*` methods to override defaults.
///
/// # Defaults
///
/// | Parameter | Default |
/// |-----------|---------|
/// | `grid`    | [`ThresholdGrid::reference`] (0.01..=0.99, step 0.01) |
#[derive(Debug, Clone)]
pub struct DcaConfig {
    positive_class: usize,
    grid: ThresholdGrid,
}

impl DcaConfig {
    /// Create a configuration for the given class of clinical interest.
    #[must_use]
    pub fn new(positive_class: usize) -> Self {
        Self {
            positive_class,
            grid: ThresholdGrid::reference(),
        }
    }

    /// Set the threshold grid to sweep.
    #[must_use]
    pub fn with_grid(mut self, grid: ThresholdGrid) -> Self {
        self.grid = grid;
        self
    }

    /// Return the positive class index.
    #[must_use]
    pub fn positive_class(&self) -> usize {
        self.positive_class
    }

    /// Return the threshold grid.
    #[must_use]
    pub fn grid(&self) -> &ThresholdGrid {
        &self.grid
    }

    /// Build the net-benefit table for a cohort.
    ///
    /// Labels are binarized against the positive class, the matching
    /// probability column is extracted, and the model, treat-all and
    /// treat-none net benefits are evaluated at every grid point.
    ///
    /// Cohorts with no positive (or no negative) cases are not errors; they
    /// yield a valid but clinically trivial curve.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DcaError::LengthMismatch`] | `labels.len() != probabilities.n_samples()` |
    /// | [`DcaError::ClassOutOfRange`] | No probability column for the positive class |
    #[instrument(skip_all, fields(positive_class = self.positive_class, n_cases = labels.len()))]
    pub fn build_table(
        &self,
        labels: &[usize],
        probabilities: &ProbabilityMatrix,
    ) -> Result<NetBenefitTable, DcaError> {
        if labels.len() != probabilities.n_samples() {
            return Err(DcaError::LengthMismatch {
                outcomes: labels.len(),
                probabilities: probabilities.n_samples(),
            });
        }

        let scores = probabilities.column(self.positive_class)?;
        let outcomes = binarize(labels, self.positive_class);
        let prevalence = prevalence(&outcomes)?;
        debug!(prevalence, "binarized outcomes");

        let rows = self
            .grid
            .iter()
            .map(|threshold| {
                let counts = ClassificationCounts::at(&outcomes, &scores, threshold)?;
                Ok(NetBenefitRow {
                    threshold: threshold.value(),
                    net_benefit_model: counts.net_benefit(threshold),
                    net_benefit_all: treat_all_net_benefit(prevalence, threshold),
                    net_benefit_none: 0.0,
                })
            })
            .collect::<Result<Vec<_>, DcaError>>()?;

        info!(n_thresholds = rows.len(), prevalence, "decision curve computed");
        Ok(NetBenefitTable::new(
            self.positive_class,
            labels.len(),
            prevalence,
            rows,
        ))
    }
}

impl Default for DcaConfig {
    fn default() -> Self {
        Self::new(DEFAULT_POSITIVE_CLASS)
    }
}

/// Build a net-benefit table in one call.
///
/// Equivalent to `DcaConfig::new(positive_class).with_grid(grid.clone()).build_table(..)`.
///
/// # Errors
///
/// See [`DcaConfig::build_table`].
pub fn build_dca_table(
    labels: &[usize],
    probabilities: &ProbabilityMatrix,
    positive_class: usize,
    grid: &ThresholdGrid,
) -> Result<NetBenefitTable, DcaError> {
    DcaConfig::new(positive_class)
        .with_grid(grid.clone())
        .build_table(labels, probabilities)
}
