//! Analysis configuration and the monthly decomposition pipeline.

use crate::core::{months_between, GapFill, MonthlySeries, YearMonth};
use crate::error::{DecomposeError, Result};
use crate::report::ChartData;
use crate::seasonality::Decomposition;
use crate::spatial::{poyang_region, spatial_grid, GridTile};
use geo::Rect;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Parameters of one seasonal water-extent analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// First year analysed (January).
    pub start_year: i32,
    /// Last year analysed, inclusive (December).
    pub end_year: i32,
    /// Lon/lat bounding box.
    pub region: Rect<f64>,
    /// Tiles per side of the spatial grid.
    pub grid_size: usize,
    /// Seasonal period in months.
    pub period: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            start_year: 2020,
            end_year: 2021,
            region: poyang_region(),
            grid_size: 5,
            period: 12,
        }
    }
}

/// Output of [`AnalysisConfig::analyze`].
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalAnalysis {
    pub series: MonthlySeries,
    pub decomposition: Decomposition,
    pub chart: ChartData,
}

impl AnalysisConfig {
    /// Configuration with the lake defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive year range.
    pub fn with_years(mut self, start_year: i32, end_year: i32) -> Self {
        self.start_year = start_year;
        self.end_year = end_year;
        self
    }

    /// Set the analysis bounding box.
    pub fn with_region(mut self, region: Rect<f64>) -> Self {
        self.region = region;
        self
    }

    /// Set the number of tiles per side.
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Set the seasonal period in months.
    pub fn with_period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Reject reversed year ranges, an empty grid and a zero period.
    pub fn validate(&self) -> Result<()> {
        if self.end_year < self.start_year {
            return Err(DecomposeError::InvalidParameter(format!(
                "end year {} precedes start year {}",
                self.end_year, self.start_year
            )));
        }
        if self.grid_size == 0 {
            return Err(DecomposeError::InvalidParameter(
                "grid size must be positive".to_string(),
            ));
        }
        if self.period == 0 {
            return Err(DecomposeError::InvalidPeriod(0));
        }
        Ok(())
    }

    /// Months covered by the year range.
    pub fn months(&self) -> Result<Vec<YearMonth>> {
        months_between(self.start_year, self.end_year)
    }

    /// Spatial tiles of the region.
    pub fn grid(&self) -> Result<Vec<GridTile>> {
        spatial_grid(self.region, self.grid_size)
    }

    /// Decompose one value per configured month and build the chart payload.
    ///
    /// `gap_fill` is applied before decomposition; pass [`GapFill::Error`] to
    /// reject missing months outright.
    pub fn analyze(&self, values: Vec<f64>, gap_fill: GapFill) -> Result<SeasonalAnalysis> {
        self.validate()?;
        info!(
            start_year = self.start_year,
            end_year = self.end_year,
            period = self.period,
            "running seasonal analysis"
        );

        let series = MonthlySeries::new(self.months()?, values)?.fill_gaps(gap_fill)?;
        let decomposition = series.decompose(self.period)?;
        let chart = ChartData::from_decomposition(&series, &decomposition)?;

        Ok(SeasonalAnalysis {
            series,
            decomposition,
            chart,
        })
    }
}
