//! Utility functions shared by the decomposition and series modules.

pub mod nullable;
pub mod stats;

pub use nullable::nullable_values;
pub use stats::{count_non_finite, mean, variance};
