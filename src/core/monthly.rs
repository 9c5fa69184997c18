//! Monthly observation series.

use crate::core::calendar::{months_between, YearMonth};
use crate::error::{DecomposeError, Result};
use crate::seasonality::{Decomposition, SeasonalDecomposer};
use crate::transform::rolling_mean;
use crate::utils::count_non_finite;
use tracing::trace;

/// Policy for handling missing values (NaN/Inf) before decomposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GapFill {
    /// Return error if missing values found.
    Error,
    /// Fill with a specific value.
    Fill(f64),
    /// Forward fill (use previous valid value). Leading gaps stay missing.
    ForwardFill,
    /// Linear interpolation across interior gaps. Edge gaps take the nearest
    /// valid value when `fill_edges` is set and stay missing otherwise.
    Interpolate { fill_edges: bool },
}

/// Contiguous monthly observations.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySeries {
    months: Vec<YearMonth>,
    values: Vec<f64>,
}

impl MonthlySeries {
    /// Pair months with values.
    ///
    /// Each month must directly follow its predecessor.
    pub fn new(months: Vec<YearMonth>, values: Vec<f64>) -> Result<Self> {
        if months.is_empty() {
            return Err(DecomposeError::EmptyData);
        }
        if values.len() != months.len() {
            return Err(DecomposeError::DimensionMismatch {
                expected: months.len(),
                got: values.len(),
            });
        }
        for (i, pair) in months.windows(2).enumerate() {
            if pair[0].succ() != Some(pair[1]) {
                return Err(DecomposeError::NonContiguous { index: i + 1 });
            }
        }

        Ok(Self { months, values })
    }

    /// One value per month from January `start_year` to December `end_year`.
    pub fn from_year_range(start_year: i32, end_year: i32, values: Vec<f64>) -> Result<Self> {
        Self::new(months_between(start_year, end_year)?, values)
    }

    /// Consecutive months beginning at `first`.
    pub fn starting_at(first: YearMonth, values: Vec<f64>) -> Result<Self> {
        let mut months = Vec::with_capacity(values.len());
        let mut current = Some(first);
        for _ in 0..values.len() {
            let month = current.ok_or_else(|| {
                DecomposeError::InvalidParameter("month range exceeds calendar".to_string())
            })?;
            months.push(month);
            current = month.succ();
        }

        Self::new(months, values)
    }

    /// Number of months.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed series.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Months in chronological order.
    pub fn months(&self) -> &[YearMonth] {
        &self.months
    }

    /// Observed value per month.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Earliest month.
    pub fn first_month(&self) -> YearMonth {
        self.months[0]
    }

    /// Latest month.
    pub fn last_month(&self) -> YearMonth {
        self.months[self.months.len() - 1]
    }

    /// Check if series has missing values (NaN or Inf).
    pub fn has_missing_values(&self) -> bool {
        self.values.iter().any(|v| !v.is_finite())
    }

    /// Return a copy with missing values handled.
    pub fn fill_gaps(&self, policy: GapFill) -> Result<Self> {
        let missing = count_non_finite(&self.values);
        trace!(missing, ?policy, "filling gaps");

        let values = match policy {
            GapFill::Error => {
                if missing > 0 {
                    return Err(DecomposeError::MissingValues);
                }
                self.values.clone()
            }
            GapFill::Fill(fill_value) => self
                .values
                .iter()
                .map(|&v| if v.is_finite() { v } else { fill_value })
                .collect(),
            GapFill::ForwardFill => {
                let mut last_valid = None;
                self.values
                    .iter()
                    .map(|&v| {
                        if v.is_finite() {
                            last_valid = Some(v);
                            v
                        } else {
                            last_valid.unwrap_or(v)
                        }
                    })
                    .collect()
            }
            GapFill::Interpolate { fill_edges } => interpolate_gaps(&self.values, fill_edges),
        };

        Ok(Self {
            months: self.months.clone(),
            values,
        })
    }

    /// Additive decomposition of the values with the given period.
    ///
    /// Missing values are not rejected; they propagate into the components.
    pub fn decompose(&self, period: usize) -> Result<Decomposition> {
        SeasonalDecomposer::new(period).decompose(&self.values)
    }

    /// Trailing moving average of the values.
    pub fn smoothed(&self, window: usize) -> Vec<f64> {
        rolling_mean(&self.values, window)
    }

    /// ISO date label of each month start.
    pub fn labels(&self) -> Vec<String> {
        self.months.iter().map(YearMonth::label).collect()
    }

    /// Start of each month in Unix milliseconds.
    pub fn time_starts(&self) -> Vec<i64> {
        self.months.iter().map(YearMonth::time_start_millis).collect()
    }
}

/// Linear interpolation over runs of non-finite values.
fn interpolate_gaps(values: &[f64], fill_edges: bool) -> Vec<f64> {
    let mut result = values.to_vec();
    let n = result.len();

    let mut i = 0;
    while i < n {
        if result[i].is_finite() {
            i += 1;
            continue;
        }

        let start = i;
        while i < n && !result[i].is_finite() {
            i += 1;
        }
        let end = i;

        let left = start.checked_sub(1).map(|j| result[j]);
        let right = (end < n).then(|| result[end]);

        match (left, right) {
            (Some(l), Some(r)) => {
                // Gap spans (end - start + 1) segments between the two anchors
                let segments = (end - start + 1) as f64;
                for (j, idx) in (start..end).enumerate() {
                    let t = (j + 1) as f64 / segments;
                    result[idx] = l + t * (r - l);
                }
            }
            (Some(l), None) if fill_edges => result[start..end].fill(l),
            (None, Some(r)) if fill_edges => result[start..end].fill(r),
            _ => {}
        }
    }

    result
}
