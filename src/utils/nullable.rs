//! Serde helper for series that may contain non-finite values.
//!
//! `serde_json` writes NaN and infinities as `null`; this reads them back as NaN.

use serde::{Deserialize, Deserializer};

/// Deserialize a sequence of numbers, mapping `null` entries to NaN.
pub fn nullable_values<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Vec<Option<f64>> = Vec::deserialize(deserializer)?;
    Ok(values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}
