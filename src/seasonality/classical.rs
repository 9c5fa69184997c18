//! Classical additive decomposition of a monthly series.
//!
//! The series is split into three components of equal length:
//! - Trend: centered moving average whose window shrinks at the edges
//! - Seasonal: per-phase mean deviation from trend, repeated every period
//! - Residual: what is left after removing trend and seasonal
//!
//! Non-finite observations are not masked. They flow into every component
//! that depends on them so a bad upstream value stays visible downstream.

use crate::error::{DecomposeError, Result};
use crate::transform::centered_mean;
use crate::utils::{count_non_finite, nullable_values, variance};
use tracing::{debug, warn};

/// Result of an additive decomposition.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawDecomposition")]
pub struct Decomposition {
    /// Trend component.
    pub trend: Vec<f64>,
    /// Seasonal component, strictly periodic with `period`.
    pub seasonal: Vec<f64>,
    /// Residual component.
    pub residual: Vec<f64>,
    period: usize,
}

/// Unchecked wire form of [`Decomposition`].
#[derive(serde::Deserialize)]
struct RawDecomposition {
    #[serde(deserialize_with = "nullable_values")]
    trend: Vec<f64>,
    #[serde(deserialize_with = "nullable_values")]
    seasonal: Vec<f64>,
    #[serde(deserialize_with = "nullable_values")]
    residual: Vec<f64>,
    period: usize,
}

impl TryFrom<RawDecomposition> for Decomposition {
    type Error = DecomposeError;

    /// Components must share one length and the seasonal part must repeat with `period`.
    fn try_from(raw: RawDecomposition) -> Result<Self> {
        if raw.period == 0 {
            return Err(DecomposeError::InvalidPeriod(0));
        }
        let n = raw.trend.len();
        for other in [&raw.seasonal, &raw.residual] {
            if other.len() != n {
                return Err(DecomposeError::DimensionMismatch {
                    expected: n,
                    got: other.len(),
                });
            }
        }
        // Bitwise comparison so NaN phases still count as repeating.
        let periodic = raw
            .seasonal
            .iter()
            .enumerate()
            .all(|(i, s)| s.to_bits() == raw.seasonal[i % raw.period].to_bits());
        if !periodic {
            return Err(DecomposeError::InvalidParameter(format!(
                "seasonal component does not repeat with period {}",
                raw.period
            )));
        }

        Ok(Self {
            trend: raw.trend,
            seasonal: raw.seasonal,
            residual: raw.residual,
            period: raw.period,
        })
    }
}

impl Decomposition {
    /// Number of observations covered.
    pub fn len(&self) -> usize {
        self.trend.len()
    }

    /// True when no observations are covered.
    pub fn is_empty(&self) -> bool {
        self.trend.is_empty()
    }

    /// Seasonal period used for the decomposition.
    pub fn period(&self) -> usize {
        self.period
    }

    /// Mean deviation from trend for each phase that occurs in the series.
    ///
    /// Has `min(period, len)` entries.
    pub fn phase_means(&self) -> &[f64] {
        &self.seasonal[..self.period.min(self.seasonal.len())]
    }

    /// Pointwise `trend + seasonal + residual`.
    pub fn reconstruct(&self) -> Vec<f64> {
        self.trend
            .iter()
            .zip(self.seasonal.iter())
            .zip(self.residual.iter())
            .map(|((t, s), r)| t + s + r)
            .collect()
    }

    /// Series with the seasonal component removed (`trend + residual`).
    pub fn seasonally_adjusted(&self) -> Vec<f64> {
        self.trend
            .iter()
            .zip(self.residual.iter())
            .map(|(t, r)| t + r)
            .collect()
    }

    /// Get the seasonal strength (0 to 1).
    /// Values close to 1 indicate strong seasonality.
    pub fn seasonal_strength(&self) -> f64 {
        strength(&self.seasonal, &self.residual)
    }

    /// Get the trend strength (0 to 1).
    /// Values close to 1 indicate strong trend.
    pub fn trend_strength(&self) -> f64 {
        strength(&self.trend, &self.residual)
    }
}

/// `max(0, 1 - Var(R) / Var(C + R))`, or 0 when the denominator vanishes.
fn strength(component: &[f64], residual: &[f64]) -> f64 {
    let combined: Vec<f64> = component
        .iter()
        .zip(residual.iter())
        .map(|(c, r)| c + r)
        .collect();
    let var_combined = variance(&combined);

    if var_combined.is_nan() || var_combined < 1e-10 {
        return 0.0;
    }

    (1.0 - variance(residual) / var_combined).max(0.0)
}

/// Additive decomposer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonalDecomposer {
    /// Seasonal period in samples.
    period: usize,
    /// Trend window; defaults to one full period.
    window: Option<usize>,
}

impl SeasonalDecomposer {
    /// Create a decomposer for the given seasonal period.
    pub fn new(period: usize) -> Self {
        Self {
            period,
            window: None,
        }
    }

    /// Override the trend window size.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = Some(window);
        self
    }

    /// Seasonal period in samples.
    pub fn period(&self) -> usize {
        self.period
    }

    /// Trend window in effect.
    pub fn window(&self) -> usize {
        self.window.unwrap_or(self.period)
    }

    /// Decompose the series.
    pub fn decompose(&self, series: &[f64]) -> Result<Decomposition> {
        if series.is_empty() {
            return Err(DecomposeError::EmptyData);
        }
        if self.period == 0 {
            return Err(DecomposeError::InvalidPeriod(0));
        }

        let window = self.window();
        debug!(
            len = series.len(),
            period = self.period,
            window,
            "decomposing series"
        );

        let non_finite = count_non_finite(series);
        if non_finite > 0 {
            warn!(
                non_finite,
                "series contains non-finite values; they propagate into all components"
            );
        }

        let trend = compute_trend(series, window);
        let seasonal = compute_seasonal(series, &trend, self.period)?;
        let residual = compute_residual(series, &trend, &seasonal)?;

        Ok(Decomposition {
            trend,
            seasonal,
            residual,
            period: self.period,
        })
    }
}

impl Default for SeasonalDecomposer {
    fn default() -> Self {
        Self::new(12) // Monthly seasonality default
    }
}

/// Decompose `series` with a trend window of one full `period`.
///
/// Fails when the series is empty or the period is not positive.
///
/// # Example
/// ```
/// use poyang_seasonal::seasonality::decompose;
///
/// let series: Vec<f64> = (1..=12).map(f64::from).collect();
/// let result = decompose(&series, 12).unwrap();
/// assert_eq!(result.trend[0], 4.0);
/// assert!(decompose(&series, 0).is_err());
/// ```
pub fn decompose(series: &[f64], period: i64) -> Result<Decomposition> {
    if series.is_empty() {
        return Err(DecomposeError::EmptyData);
    }
    let period = match usize::try_from(period) {
        Ok(p) if p > 0 => p,
        _ => return Err(DecomposeError::InvalidPeriod(period)),
    };

    SeasonalDecomposer::new(period).decompose(series)
}

/// Centered moving average over `window_size` samples.
///
/// Uses `window_size / 2` neighbours on each side of every index, clipped at
/// the series boundaries. A window of 0 or 1 returns the series unchanged.
pub fn compute_trend(series: &[f64], window_size: usize) -> Vec<f64> {
    centered_mean(series, window_size / 2)
}

/// Per-phase mean of `series - trend`, repeated with the given period.
///
/// Phases that occur fewer times (when the length is not a multiple of the
/// period) are averaged over their own smaller count.
pub fn compute_seasonal(series: &[f64], trend: &[f64], period: usize) -> Result<Vec<f64>> {
    if period == 0 {
        return Err(DecomposeError::InvalidPeriod(0));
    }
    if trend.len() != series.len() {
        return Err(DecomposeError::DimensionMismatch {
            expected: series.len(),
            got: trend.len(),
        });
    }

    let n = series.len();
    let phases = period.min(n);
    let mut sums = vec![0.0; phases];
    let mut counts = vec![0usize; phases];

    for (i, (y, t)) in series.iter().zip(trend.iter()).enumerate() {
        let phase = i % period;
        sums[phase] += y - t;
        counts[phase] += 1;
    }

    let phase_means: Vec<f64> = sums
        .iter()
        .zip(counts.iter())
        .map(|(s, &c)| s / c as f64)
        .collect();

    Ok((0..n).map(|i| phase_means[i % period]).collect())
}

/// Pointwise `series - trend - seasonal`.
pub fn compute_residual(series: &[f64], trend: &[f64], seasonal: &[f64]) -> Result<Vec<f64>> {
    for other in [trend, seasonal] {
        if other.len() != series.len() {
            return Err(DecomposeError::DimensionMismatch {
                expected: series.len(),
                got: other.len(),
            });
        }
    }

    Ok(series
        .iter()
        .zip(trend.iter())
        .zip(seasonal.iter())
        .map(|((y, t), s)| y - t - s)
        .collect())
}
