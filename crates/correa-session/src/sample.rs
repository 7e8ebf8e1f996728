//! The ten lab-value inputs of the cascade classifier.

use std::fmt;

use serde::Serialize;

use crate::error::SessionError;

/// Number of lab features the classifier consumes.
const N_FEATURES: usize = 10;

/// One lab-value input, in the column order the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabFeature {
    /// Age in years.
    Age,
    /// Monocyte percentage.
    MonoPct,
    /// Albumin/globulin ratio.
    AgRatio,
    /// Basophil percentage.
    BasoPct,
    /// Platelet distribution width.
    Pdw,
    /// Direct bilirubin.
    Dbil,
    /// Absolute neutrophil count.
    NeutCount,
    /// Absolute lymphocyte count.
    LymphCount,
    /// Creatinine.
    Crea,
    /// Aspartate aminotransferase.
    Ast,
}

impl LabFeature {
    /// All features in model column order.
    pub const ALL: [Self; N_FEATURES] = [
        Self::Age,
        Self::MonoPct,
        Self::AgRatio,
        Self::BasoPct,
        Self::Pdw,
        Self::Dbil,
        Self::NeutCount,
        Self::LymphCount,
        Self::Crea,
        Self::Ast,
    ];

    /// Column name as it appears in the training data.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::MonoPct => "MONO%",
            Self::AgRatio => "A/G",
            Self::BasoPct => "BASO%",
            Self::Pdw => "PDW",
            Self::Dbil => "DBIL",
            Self::NeutCount => "NEUT#",
            Self::LymphCount => "LYMPH#",
            Self::Crea => "CREA",
            Self::Ast => "AST",
        }
    }

    /// Inclusive accepted range `(min, max)`.
    #[must_use]
    pub fn range(self) -> (f64, f64) {
        match self {
            Self::Age => (0.0, 100.0),
            Self::MonoPct => (3.0, 10.0),
            Self::AgRatio => (1.2, 2.4),
            Self::BasoPct => (0.0, 1.0),
            Self::Pdw => (9.9, 17.0),
            Self::Dbil => (0.0, 6.8),
            Self::NeutCount => (1.8, 6.3),
            Self::LymphCount => (1.1, 3.2),
            Self::Crea => (53.0, 123.0),
            Self::Ast => (15.0, 40.0),
        }
    }

    /// Value pre-filled on a new entry form.
    #[must_use]
    pub fn default_value(self) -> f64 {
        match self {
            Self::Age => 50.0,
            Self::MonoPct => 5.0,
            Self::AgRatio => 1.5,
            Self::BasoPct => 0.5,
            Self::Pdw => 12.0,
            Self::Dbil => 5.0,
            Self::NeutCount => 5.0,
            Self::LymphCount => 2.0,
            Self::Crea => 80.0,
            Self::Ast => 30.0,
        }
    }

    /// Zero-based column index.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for LabFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated set of lab values, one per [`LabFeature`], in column order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabSample([f64; N_FEATURES]);

impl LabSample {
    /// Validate lab values given in [`LabFeature::ALL`] order.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`SessionError::NonFiniteValue`] | A value is NaN or infinite |
    /// | [`SessionError::ValueOutOfRange`] | A value lies outside its feature's range |
    pub fn new(values: [f64; N_FEATURES]) -> Result<Self, SessionError> {
        for (feature, &value) in LabFeature::ALL.iter().zip(&values) {
            if !value.is_finite() {
                return Err(SessionError::NonFiniteValue {
                    feature: feature.name(),
                    value,
                });
            }
            let (min, max) = feature.range();
            if value < min || value > max {
                return Err(SessionError::ValueOutOfRange {
                    feature: feature.name(),
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(Self(values))
    }

    /// Return the value of one feature.
    #[must_use]
    pub fn get(&self, feature: LabFeature) -> f64 {
        self.0[feature.index()]
    }

    /// Return the values in column order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Copy the values into a feature row for a classifier.
    #[must_use]
    pub fn to_row(&self) -> Vec<f64> {
        self.0.to_vec()
    }
}

impl Default for LabSample {
    fn default() -> Self {
        Self(LabFeature::ALL.map(LabFeature::default_value))
    }
}
