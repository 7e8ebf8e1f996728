//! A single user's prediction session.

use correa_dca::ProbabilisticClassifier;
use tracing::{debug, instrument};

use crate::category::DiagnosticCategory;
use crate::error::SessionError;
use crate::history::{PredictionHistory, PredictionRecord};
use crate::sample::LabSample;

/// Prediction session owning its own history and page cursor.
///
/// Sessions never share history. Pass `&model` to let many sessions use one
/// fitted classifier.
#[derive(Debug)]
pub struct PredictionSession<C> {
    classifier: C,
    history: PredictionHistory,
    current_page: usize,
}

impl<C: ProbabilisticClassifier> PredictionSession<C> {
    /// Start a session with an empty history on page 1.
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            history: PredictionHistory::new(),
            current_page: 1,
        }
    }

    /// Classify a sample and record the result.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`SessionError::Classifier`] | The classifier failed |
    /// | [`SessionError::MissingPrediction`] | The classifier did not return exactly one row |
    /// | [`SessionError::ClassCountMismatch`] | The row width differs from `n_classes()` |
    /// | [`SessionError::UnknownCategory`] | The predicted class has no category |
    #[instrument(skip_all)]
    pub fn predict(&mut self, sample: LabSample) -> Result<&PredictionRecord, SessionError> {
        let probabilities = self
            .classifier
            .predict_proba(&[sample.to_row()])
            .map_err(|e| SessionError::Classifier(Box::new(e)))?;
        if probabilities.n_samples() != 1 {
            return Err(SessionError::MissingPrediction {
                got: probabilities.n_samples(),
            });
        }
        if probabilities.n_classes() != self.classifier.n_classes() {
            return Err(SessionError::ClassCountMismatch {
                expected: self.classifier.n_classes(),
                got: probabilities.n_classes(),
            });
        }

        let class = probabilities.predicted_classes()[0];
        let category = DiagnosticCategory::from_index(class)?;
        debug!(%category, "sample classified");

        Ok(self.history.push(PredictionRecord {
            sample,
            category,
            probabilities: probabilities.row(0).to_vec(),
        }))
    }

    /// Return the most recent prediction.
    #[must_use]
    pub fn latest(&self) -> Option<&PredictionRecord> {
        self.history.latest()
    }

    /// Return the full history.
    #[must_use]
    pub fn history(&self) -> &PredictionHistory {
        &self.history
    }

    /// Current 1-based page, clamped to the pages that exist.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page.min(self.history.total_pages().max(1))
    }

    /// Number of history pages.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.history.total_pages()
    }

    /// Advance one page, stopping at the last page.
    pub fn next_page(&mut self) {
        self.current_page = (self.current_page() + 1).min(self.total_pages().max(1));
    }

    /// Go back one page, stopping at page 1.
    pub fn previous_page(&mut self) {
        self.current_page = self.current_page().saturating_sub(1).max(1);
    }

    /// Records on the current page.
    #[must_use]
    pub fn current_page_records(&self) -> Vec<&PredictionRecord> {
        self.history.page(self.current_page())
    }
}
