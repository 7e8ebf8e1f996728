//! Bounded, paginated prediction history.

use std::collections::VecDeque;

use serde::Serialize;

use crate::category::DiagnosticCategory;
use crate::sample::LabSample;

/// Maximum number of predictions retained per session.
pub const HISTORY_CAPACITY: usize = 10;

/// Number of predictions shown per history page.
pub const PAGE_SIZE: usize = 5;

/// One completed prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRecord {
    /// The lab values the prediction was made from.
    pub sample: LabSample,
    /// The predicted diagnostic category.
    pub category: DiagnosticCategory,
    /// Class probabilities reported by the classifier, in class order.
    pub probabilities: Vec<f64>,
}

/// Append-only history holding the most recent [`HISTORY_CAPACITY`] predictions.
///
/// Oldest records are evicted first. Pages are 1-based and hold
/// [`PAGE_SIZE`] records each, oldest first.
#[derive(Debug, Clone, Default)]
pub struct PredictionHistory {
    records: VecDeque<PredictionRecord>,
}

impl PredictionHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, evicting the oldest one when full, and return it.
    pub fn push(&mut self, record: PredictionRecord) -> &PredictionRecord {
        if self.records.len() == HISTORY_CAPACITY {
            self.records.pop_front();
        }
        self.records.push_back(record);
        &self.records[self.records.len() - 1]
    }

    /// Return the most recent record.
    #[must_use]
    pub fn latest(&self) -> Option<&PredictionRecord> {
        self.records.back()
    }

    /// Iterate over records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &PredictionRecord> {
        self.records.iter()
    }

    /// Return the number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Return true if no predictions have been made.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of pages needed to show every record. Zero when empty.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.records.len().div_ceil(PAGE_SIZE)
    }

    /// Records on a 1-based page. Empty for page 0 or pages past the end.
    #[must_use]
    pub fn page(&self, page: usize) -> Vec<&PredictionRecord> {
        if page == 0 {
            return Vec::new();
        }
        self.records
            .iter()
            .skip((page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: DiagnosticCategory) -> PredictionRecord {
        PredictionRecord {
            sample: LabSample::default(),
            category,
            probabilities: vec![0.2; 5],
        }
    }

    fn filled(n: usize) -> PredictionHistory {
        let mut history = PredictionHistory::new();
        for i in 0..n {
            history.push(record(DiagnosticCategory::ALL[i % 5]));
        }
        history
    }

    #[test]
    fn empty_history() {
        let history = PredictionHistory::new();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
        assert_eq!(history.total_pages(), 0);
        assert!(history.page(1).is_empty());
    }

    #[test]
    fn push_returns_latest() {
        let mut history = PredictionHistory::new();
        let pushed = history.push(record(DiagnosticCategory::Im)).category;
        assert_eq!(pushed, DiagnosticCategory::Im);
        assert_eq!(history.latest().unwrap().category, DiagnosticCategory::Im);
    }

    #[test]
    fn capacity_evicts_oldest() {
        let history = filled(12);
        assert_eq!(history.len(), HISTORY_CAPACITY);
        // Records 0 and 1 (HC, NAG) were evicted; record 2 (AG) is now oldest.
        assert_eq!(history.iter().next().unwrap().category, DiagnosticCategory::Ag);
        // Record 11 is NAG.
        assert_eq!(history.latest().unwrap().category, DiagnosticCategory::Nag);
    }

    #[test]
    fn pagination_splits_by_five() {
        let history = filled(7);
        assert_eq!(history.total_pages(), 2);
        assert_eq!(history.page(1).len(), 5);
        assert_eq!(history.page(2).len(), 2);
        assert!(history.page(3).is_empty());
        assert!(history.page(0).is_empty());
    }

    #[test]
    fn full_history_has_two_pages() {
        let history = filled(25);
        assert_eq!(history.total_pages(), 2);
        assert_eq!(history.page(2).len(), 5);
    }
}
