//! Capability interface for probabilistic classifiers.

use crate::probability::ProbabilityMatrix;

/// A fitted classifier that estimates per-class probabilities.
///
/// The net-benefit engine only ever consumes the [`ProbabilityMatrix`] this
/// produces, so any model honoring the contract can be substituted: column
/// `c` of the output must correspond to class `c` of the training data.
pub trait ProbabilisticClassifier {
    /// Error raised when prediction fails (e.g. wrong feature count).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Number of classes the model distinguishes.
    fn n_classes(&self) -> usize;

    /// Estimate class probabilities for each row of `features`.
    ///
    /// # Errors
    ///
    /// Implementation-defined; typically a feature-count mismatch.
    fn predict_proba(&self, features: &[Vec<f64>]) -> Result<ProbabilityMatrix, Self::Error>;

    /// Predict the most probable class for each row of `features`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`predict_proba`](Self::predict_proba).
    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<usize>, Self::Error> {
        Ok(self.predict_proba(features)?.predicted_classes())
    }
}

impl<T: ProbabilisticClassifier + ?Sized> ProbabilisticClassifier for &T {
    type Error = T::Error;

    fn n_classes(&self) -> usize {
        (**self).n_classes()
    }

    fn predict_proba(&self, features: &[Vec<f64>]) -> Result<ProbabilityMatrix, Self::Error> {
        (**self).predict_proba(features)
    }
}
