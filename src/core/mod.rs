//! Core data structures: calendar months and monthly observation series.

mod calendar;
mod monthly;

pub use calendar::{months_between, YearMonth};
pub use monthly::{GapFill, MonthlySeries};
