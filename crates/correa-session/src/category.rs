//! Diagnostic categories of the gastric cancer cascade.

use std::fmt;

use serde::Serialize;

use crate::error::SessionError;

/// Stage of the Correa gastric cancer cascade, in model class order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticCategory {
    /// Healthy control.
    Hc,
    /// Non-atrophic gastritis.
    Nag,
    /// Atrophic gastritis.
    Ag,
    /// Intestinal metaplasia.
    Im,
    /// Gastric cancer.
    Gc,
}

impl DiagnosticCategory {
    /// All categories in class-index order.
    pub const ALL: [Self; 5] = [Self::Hc, Self::Nag, Self::Ag, Self::Im, Self::Gc];

    /// Map a model class index to its category.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownCategory`] if `index >= 5`.
    pub fn from_index(index: usize) -> Result<Self, SessionError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(SessionError::UnknownCategory { index })
    }

    /// Return the model class index.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short clinical abbreviation.
    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Hc => "HC",
            Self::Nag => "NAG",
            Self::Ag => "AG",
            Self::Im => "IM",
            Self::Gc => "GC",
        }
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for (i, category) in DiagnosticCategory::ALL.iter().enumerate() {
            assert_eq!(DiagnosticCategory::from_index(i).unwrap(), *category);
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn gc_is_class_four() {
        assert_eq!(
            DiagnosticCategory::from_index(4).unwrap(),
            DiagnosticCategory::Gc
        );
    }

    #[test]
    fn unknown_index() {
        assert!(matches!(
            DiagnosticCategory::from_index(5),
            Err(SessionError::UnknownCategory { index: 5 })
        ));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", DiagnosticCategory::Nag), "NAG");
    }
}
