//! Window transformations for monthly series.
//!
//! # Example
//!
//! ```
//! use poyang_seasonal::transform::{centered_mean, rolling_mean};
//!
//! let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! // Centered mean, one neighbour on each side
//! let cm = centered_mean(&series, 1);
//!
//! // Trailing mean with window 3
//! let rm = rolling_mean(&series, 3);
//! ```

pub mod window;

pub use window::{centered_mean, rolling_mean};
