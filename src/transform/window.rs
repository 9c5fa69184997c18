//! Moving-average window functions.
//!
//! Two flavours are provided: a centered mean whose window shrinks at the
//! series boundaries (used for trend extraction) and a trailing mean for
//! plain smoothing of a monthly series.

/// Compute a centered moving average with a boundary-shrinking window.
///
/// For each index `i` the result is the arithmetic mean of
/// `series[max(0, i - half_window) ..= min(n - 1, i + half_window)]`.
/// Near the edges the window is clipped rather than padded, so no value is
/// extrapolated beyond the observed data.
///
/// # Arguments
/// * `series` - Input time series
/// * `half_window` - Number of neighbours taken on each side of `i`
///
/// # Example
/// ```
/// use poyang_seasonal::transform::centered_mean;
///
/// let smoothed = centered_mean(&[1.0, 2.0, 3.0, 4.0, 5.0], 1);
/// assert_eq!(smoothed, vec![1.5, 2.0, 3.0, 4.0, 4.5]);
/// ```
pub fn centered_mean(series: &[f64], half_window: usize) -> Vec<f64> {
    let n = series.len();
    let mut result = Vec::with_capacity(n);

    for i in 0..n {
        let start = i.saturating_sub(half_window);
        let end = i.saturating_add(half_window).min(n - 1);
        let window = &series[start..=end];
        result.push(window.iter().sum::<f64>() / window.len() as f64);
    }

    result
}

/// Compute a trailing rolling mean.
///
/// Positions before a full window is available are NaN, as is every
/// position when `window` is zero.
pub fn rolling_mean(series: &[f64], window: usize) -> Vec<f64> {
    let n = series.len();
    let mut result = vec![f64::NAN; n];
    if window == 0 {
        return result;
    }

    for i in (window - 1)..n {
        let segment = &series[i + 1 - window..=i];
        result[i] = segment.iter().sum::<f64>() / window as f64;
    }

    result
}
