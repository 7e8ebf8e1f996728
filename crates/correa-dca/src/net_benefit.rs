//! The decision-curve-analysis net-benefit statistic.

use crate::error::DcaError;
use crate::threshold::Threshold;

/// Confusion counts for a binary outcome at one decision threshold.
///
/// A case is classified positive when its predicted probability is greater
/// than or equal to the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationCounts {
    /// Positive cases classified positive.
    pub true_positives: usize,
    /// Negative cases classified positive.
    pub false_positives: usize,
    /// Positive cases classified negative.
    pub false_negatives: usize,
    /// Negative cases classified negative.
    pub true_negatives: usize,
}

impl ClassificationCounts {
    /// Count outcomes against predictions at `threshold`.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DcaError::LengthMismatch`] | `outcomes.len() != probabilities.len()` |
    /// | [`DcaError::EmptyCohort`] | Zero cases |
    pub fn at(
        outcomes: &[bool],
        probabilities: &[f64],
        threshold: Threshold,
    ) -> Result<Self, DcaError> {
        if outcomes.len() != probabilities.len() {
            return Err(DcaError::LengthMismatch {
                outcomes: outcomes.len(),
                probabilities: probabilities.len(),
            });
        }
        if outcomes.is_empty() {
            return Err(DcaError::EmptyCohort);
        }

        let t = threshold.value();
        let mut counts = Self {
            true_positives: 0,
            false_positives: 0,
            false_negatives: 0,
            true_negatives: 0,
        };
        for (&positive, &p) in outcomes.iter().zip(probabilities) {
            match (p >= t, positive) {
                (true, true) => counts.true_positives += 1,
                (true, false) => counts.false_positives += 1,
                (false, true) => counts.false_negatives += 1,
                (false, false) => counts.true_negatives += 1,
            }
        }
        Ok(counts)
    }

    /// Total number of cases.
    #[must_use]
    pub fn n(&self) -> usize {
        self.true_positives + self.false_positives + self.false_negatives + self.true_negatives
    }

    /// Net benefit of acting on these classifications at `threshold`:
    /// `TP/n - FP/n * t/(1-t)`.
    #[must_use]
    pub fn net_benefit(&self, threshold: Threshold) -> f64 {
        let n = self.n() as f64;
        (self.true_positives as f64 / n) - (self.false_positives as f64 / n) * threshold.odds()
    }
}

/// Net benefit of a model at a single threshold.
///
/// Rewards correctly flagged positive cases and penalizes false positives,
/// weighted by the threshold odds `t / (1 - t)`.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`DcaError::ThresholdOutOfRange`] | `threshold` not strictly inside (0, 1) |
/// | [`DcaError::LengthMismatch`] | `outcomes.len() != probabilities.len()` |
/// | [`DcaError::EmptyCohort`] | Zero cases |
pub fn net_benefit(
    outcomes: &[bool],
    probabilities: &[f64],
    threshold: f64,
) -> Result<f64, DcaError> {
    let threshold = Threshold::new(threshold)?;
    Ok(ClassificationCounts::at(outcomes, probabilities, threshold)?.net_benefit(threshold))
}

/// Net benefit of treating every case as positive.
///
/// Depends only on cohort prevalence and the threshold:
/// `prevalence - (1 - prevalence) * t/(1-t)`.
#[must_use]
pub fn treat_all_net_benefit(prevalence: f64, threshold: Threshold) -> f64 {
    prevalence - (1.0 - prevalence) * threshold.odds()
}
