//! Chart payload for a decomposed monthly series.
//!
//! The payload carries one label per month and one dataset per component, in
//! the shape a line-chart widget consumes. Non-finite values serialize as
//! JSON `null`, so a malformed month shows up as a break in the line.

use crate::core::MonthlySeries;
use crate::error::{DecomposeError, Result};
use crate::seasonality::Decomposition;
use crate::utils::nullable_values;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Poyang Lake seasonal water extent";

/// A named line of the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    #[serde(deserialize_with = "nullable_values")]
    pub data: Vec<f64>,
}

/// Labels plus datasets for a time-series chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    /// Observed, trend, seasonal and residual lines, labelled by month start.
    pub fn from_decomposition(series: &MonthlySeries, decomposition: &Decomposition) -> Result<Self> {
        if decomposition.len() != series.len() {
            return Err(DecomposeError::DimensionMismatch {
                expected: series.len(),
                got: decomposition.len(),
            });
        }

        let datasets = vec![
            Dataset {
                label: "observed".to_string(),
                data: series.values().to_vec(),
            },
            Dataset {
                label: "trend".to_string(),
                data: decomposition.trend.clone(),
            },
            Dataset {
                label: "seasonal".to_string(),
                data: decomposition.seasonal.clone(),
            },
            Dataset {
                label: "residual".to_string(),
                data: decomposition.residual.clone(),
            },
        ];

        Ok(Self {
            title: DEFAULT_TITLE.to_string(),
            labels: series.labels(),
            datasets,
        })
    }

    /// Replace the chart title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Look up a dataset by label.
    pub fn dataset(&self, label: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::core::YearMonth;

    fn sample_series() -> MonthlySeries {
        let values = (0..12).map(|i| 30.0 + i as f64).collect();
        MonthlySeries::starting_at(YearMonth::new(2020, 1).unwrap(), values).unwrap()
    }

    #[test]
    fn datasets_follow_components() {
        let series = sample_series();
        let decomposition = series.decompose(12).unwrap();
        let chart = ChartData::from_decomposition(&series, &decomposition).unwrap();

        assert_eq!(chart.title, DEFAULT_TITLE);
        assert_eq!(chart.labels.len(), 12);
        assert_eq!(chart.labels[0], "2020-01-01");
        assert_eq!(chart.datasets.len(), 4);
        assert_eq!(chart.dataset("observed").unwrap().data, series.values());
        assert_eq!(chart.dataset("trend").unwrap().data, decomposition.trend);
        assert!(chart.dataset("forecast").is_none());
    }

    #[test]
    fn mismatched_decomposition_rejected() {
        let series = sample_series();
        let other = crate::seasonality::decompose(&[1.0, 2.0], 12).unwrap();
        assert!(ChartData::from_decomposition(&series, &other).is_err());
    }

    #[test]
    fn non_finite_values_serialize_as_null() {
        let mut values: Vec<f64> = (0..12).map(|i| i as f64).collect();
        values[3] = f64::NAN;
        let series =
            MonthlySeries::starting_at(YearMonth::new(2021, 1).unwrap(), values).unwrap();
        let chart = ChartData::from_decomposition(&series, &series.decompose(12).unwrap())
            .unwrap()
            .with_title("test");

        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["title"], "test");
        assert!(json["datasets"][0]["data"][3].is_null());
        assert_eq!(json["datasets"][0]["data"][2], 2.0);
    }

    #[test]
    fn chart_with_gaps_reads_back_from_json() {
        let mut values: Vec<f64> = (0..12).map(|i| i as f64).collect();
        values[3] = f64::NAN;
        let series =
            MonthlySeries::starting_at(YearMonth::new(2021, 1).unwrap(), values).unwrap();
        let chart = ChartData::from_decomposition(&series, &series.decompose(12).unwrap()).unwrap();

        let json = serde_json::to_string(&chart).unwrap();
        let restored: ChartData = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.labels, chart.labels);
        assert_eq!(restored.datasets.len(), 4);
        for (got, want) in restored.datasets.iter().zip(chart.datasets.iter()) {
            assert_eq!(got.label, want.label);
            assert_eq!(got.data.len(), want.data.len());
            for (g, w) in got.data.iter().zip(want.data.iter()) {
                if w.is_finite() {
                    assert_relative_eq!(*g, *w, epsilon = 1e-12);
                } else {
                    assert!(g.is_nan());
                }
            }
        }
        assert!(restored.dataset("observed").unwrap().data[3].is_nan());
        assert_eq!(restored.dataset("observed").unwrap().data[2], 2.0);
    }
}
