//! Net-benefit table types.

use serde::{Deserialize, Serialize};

/// Net benefit of the three DCA strategies at one threshold.
///
/// Serializes with the export column names
/// `Threshold, NetBenefit_Model, NetBenefit_All, NetBenefit_None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetBenefitRow {
    /// Decision threshold, strictly inside (0, 1).
    #[serde(rename = "Threshold")]
    pub threshold: f64,
    /// Net benefit of acting on the model's predictions.
    #[serde(rename = "NetBenefit_Model")]
    pub net_benefit_model: f64,
    /// Net benefit of treating every case.
    #[serde(rename = "NetBenefit_All")]
    pub net_benefit_all: f64,
    /// Net benefit of treating no case. Always 0.
    #[serde(rename = "NetBenefit_None")]
    pub net_benefit_none: f64,
}

impl NetBenefitRow {
    /// True if the model strictly beats both treat-all and treat-none.
    #[must_use]
    pub fn model_is_useful(&self) -> bool {
        self.net_benefit_model > self.net_benefit_all
            && self.net_benefit_model > self.net_benefit_none
    }
}

/// Decision-curve table for one cohort and one class of interest.
///
/// Rows are ordered by ascending threshold, one per grid point.
#[derive(Debug, Clone, PartialEq)]
pub struct NetBenefitTable {
    positive_class: usize,
    n_cases: usize,
    prevalence: f64,
    rows: Vec<NetBenefitRow>,
}

impl NetBenefitTable {
    pub(crate) fn new(
        positive_class: usize,
        n_cases: usize,
        prevalence: f64,
        rows: Vec<NetBenefitRow>,
    ) -> Self {
        Self {
            positive_class,
            n_cases,
            prevalence,
            rows,
        }
    }

    /// Return the rows in ascending threshold order.
    #[must_use]
    pub fn rows(&self) -> &[NetBenefitRow] {
        &self.rows
    }

    /// Class index treated as the positive outcome.
    #[must_use]
    pub fn positive_class(&self) -> usize {
        self.positive_class
    }

    /// Number of cases in the cohort.
    #[must_use]
    pub fn n_cases(&self) -> usize {
        self.n_cases
    }

    /// Fraction of cases belonging to the positive class.
    #[must_use]
    pub fn prevalence(&self) -> f64 {
        self.prevalence
    }

    /// Return the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Return true if the table has no rows. Never true for tables built
    /// from a valid grid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Thresholds at which the model beats both reference strategies.
    #[must_use]
    pub fn useful_thresholds(&self) -> Vec<f64> {
        self.rows
            .iter()
            .filter(|row| row.model_is_useful())
            .map(|row| row.threshold)
            .collect()
    }

    /// Row with the highest model net benefit. The earliest threshold wins ties.
    #[must_use]
    pub fn max_model_net_benefit(&self) -> Option<&NetBenefitRow> {
        self.rows.iter().fold(None, |best, row| match best {
            Some(b) if b.net_benefit_model >= row.net_benefit_model => Some(b),
            _ => Some(row),
        })
    }
}
