//! Outcome binarization and cohort prevalence.

use crate::error::DcaError;

/// Collapse multi-class labels into a binary outcome vector for one class.
///
/// `outcome[i]` is `true` iff `labels[i] == positive_class`.
#[must_use]
pub fn binarize(labels: &[usize], positive_class: usize) -> Vec<bool> {
    labels.iter().map(|&label| label == positive_class).collect()
}

/// Fraction of cases with a positive outcome.
///
/// A prevalence of exactly 0 or 1 is a degenerate but valid cohort.
///
/// # Errors
///
/// Returns [`DcaError::EmptyCohort`] if `outcomes` is empty.
pub fn prevalence(outcomes: &[bool]) -> Result<f64, DcaError> {
    if outcomes.is_empty() {
        return Err(DcaError::EmptyCohort);
    }
    let positives = outcomes.iter().filter(|&&y| y).count();
    Ok(positives as f64 / outcomes.len() as f64)
}
