//! Threshold grids swept by decision-curve analysis.

use std::ops::Index;

use crate::error::DcaError;
use crate::threshold::Threshold;

/// Number of points in the reference grid (0.01 to 0.99 in steps of 0.01).
const REFERENCE_POINTS: usize = 99;

/// Upper bound on the points a range-built grid may contain.
pub const MAX_GRID_POINTS: usize = 1_000_000;

/// Fraction of a step by which `end` may be undershot and still be included.
const STEP_TOLERANCE: f64 = 1e-9;

/// Strictly increasing sequence of thresholds, each inside (0, 1).
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdGrid(Vec<Threshold>);

impl ThresholdGrid {
    /// Build an evenly spaced grid from `start` to `end` inclusive.
    ///
    /// Points are computed as `start + i * step` rather than by repeated
    /// addition, so rounding error does not accumulate along the grid. The
    /// last point is the largest `start + i * step` within a billionth of a
    /// step of `end`, and no point ever exceeds `end`.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DcaError::InvalidGridStep`] | `step` is not positive and finite |
    /// | [`DcaError::InvalidGridRange`] | `start > end` |
    /// | [`DcaError::ThresholdOutOfRange`] | `start` or `end` falls outside (0, 1) |
    /// | [`DcaError::TooManyGridPoints`] | The range holds more than [`MAX_GRID_POINTS`] points |
    /// | [`DcaError::NonIncreasingGrid`] | `step` is too small to separate neighbouring points |
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self, DcaError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(DcaError::InvalidGridStep { step });
        }
        let start_threshold = Threshold::new(start)?;
        Threshold::new(end)?;
        if start > end {
            return Err(DcaError::InvalidGridRange { start, end });
        }

        let steps = ((end - start) / step + STEP_TOLERANCE).floor();
        if !steps.is_finite() || steps >= MAX_GRID_POINTS as f64 {
            return Err(DcaError::TooManyGridPoints {
                start,
                end,
                step,
                max: MAX_GRID_POINTS,
            });
        }
        let n_points = steps as usize + 1;

        let mut thresholds = Vec::with_capacity(n_points);
        thresholds.push(start_threshold);
        for i in 1..n_points {
            let value = grid_point(start, end, step, i);
            let previous = thresholds[i - 1].value();
            if value <= previous {
                return Err(DcaError::NonIncreasingGrid {
                    index: i,
                    previous,
                    next: value,
                });
            }
            thresholds.push(Threshold::new(value)?);
        }
        Ok(Self(thresholds))
    }

    /// Build a grid from explicit threshold values.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DcaError::EmptyGrid`] | `values` is empty |
    /// | [`DcaError::ThresholdOutOfRange`] | Any value is outside (0, 1) |
    /// | [`DcaError::NonIncreasingGrid`] | Values are not strictly increasing |
    pub fn from_values(values: Vec<f64>) -> Result<Self, DcaError> {
        if values.is_empty() {
            return Err(DcaError::EmptyGrid);
        }
        for (index, pair) in values.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(DcaError::NonIncreasingGrid {
                    index: index + 1,
                    previous: pair[0],
                    next: pair[1],
                });
            }
        }
        let thresholds = values
            .into_iter()
            .map(Threshold::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(thresholds))
    }

    /// The conventional DCA grid: 0.01 to 0.99 in steps of 0.01 (99 points).
    ///
    /// Both singular endpoints, 0 and 1, are excluded.
    #[must_use]
    pub fn reference() -> Self {
        let thresholds = (0..REFERENCE_POINTS)
            .map(|i| Threshold::new_unchecked(grid_point(0.01, 0.99, 0.01, i)))
            .collect();
        Self(thresholds)
    }

    /// Return the thresholds in ascending order.
    #[must_use]
    pub fn thresholds(&self) -> &[Threshold] {
        &self.0
    }

    /// Iterate over the thresholds in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Threshold> + '_ {
        self.0.iter().copied()
    }

    /// Return the number of grid points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the grid has no points.
    ///
    /// Every constructor rejects empty grids, so this is always `false` for
    /// valid instances. Provided to satisfy the `len_without_is_empty`
    /// convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The `i`-th point of an evenly spaced grid, capped at `end`.
fn grid_point(start: f64, end: f64, step: f64, i: usize) -> f64 {
    (start + i as f64 * step).min(end)
}

impl Default for ThresholdGrid {
    fn default() -> Self {
        Self::reference()
    }
}

impl Index<usize> for ThresholdGrid {
    type Output = Threshold;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
