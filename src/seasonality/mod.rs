//! Seasonal decomposition.
//!
//! Splits a monthly series into trend, seasonal and residual components with
//! `series[i] == trend[i] + seasonal[i] + residual[i]`.

mod classical;

pub use classical::{
    compute_residual, compute_seasonal, compute_trend, decompose, Decomposition,
    SeasonalDecomposer,
};
