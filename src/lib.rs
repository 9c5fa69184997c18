//! # poyang-seasonal
//!
//! Monthly water-extent analysis for Poyang Lake.
//!
//! Builds a calendar-aligned monthly series of water coverage, decomposes it
//! additively into trend, seasonal and residual components, and turns the
//! result into a chart payload. Also provides the spectral water rule used to
//! classify Sentinel-2 pixels and the regular tiling of the lake region.
//!
//! ```
//! use poyang_seasonal::prelude::*;
//!
//! let values: Vec<f64> = (0..24).map(|i| 40.0 + (i % 12) as f64).collect();
//! let analysis = AnalysisConfig::default()
//!     .analyze(values, GapFill::Error)
//!     .unwrap();
//! assert_eq!(analysis.chart.labels.len(), 24);
//! ```

#![allow(clippy::needless_range_loop)]

pub mod analysis;
pub mod core;
pub mod error;
pub mod report;
pub mod seasonality;
pub mod spatial;
pub mod transform;
pub mod utils;
pub mod water;

pub use error::{DecomposeError, Result};

pub mod prelude {
    pub use crate::analysis::{AnalysisConfig, SeasonalAnalysis};
    pub use crate::core::{GapFill, MonthlySeries, YearMonth};
    pub use crate::error::{DecomposeError, Result};
    pub use crate::report::ChartData;
    pub use crate::seasonality::{decompose, Decomposition, SeasonalDecomposer};
}
