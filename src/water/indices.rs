//! NDWI, MNDWI, NDVI and EVI, and the water rule built on them.
//!
//! A pixel is water when `MNDWI > EVI`, `MNDWI > NDVI` and `EVI < 0.1`.

use serde::{Deserialize, Serialize};

/// Surface reflectance of one Sentinel-2 pixel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reflectance {
    /// B2
    pub blue: f64,
    /// B3
    pub green: f64,
    /// B4
    pub red: f64,
    /// B8
    pub nir: f64,
    /// B11
    pub swir1: f64,
}

/// Spectral indices derived from a [`Reflectance`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralIndices {
    pub ndwi: f64,
    pub mndwi: f64,
    pub ndvi: f64,
    pub evi: f64,
}

/// `(a - b) / (a + b)`.
pub fn normalized_difference(a: f64, b: f64) -> f64 {
    (a - b) / (a + b)
}

impl Reflectance {
    /// Compute all four spectral indices.
    pub fn indices(&self) -> SpectralIndices {
        SpectralIndices {
            ndwi: normalized_difference(self.green, self.nir),
            mndwi: normalized_difference(self.green, self.swir1),
            ndvi: normalized_difference(self.nir, self.red),
            evi: 2.5 * (self.nir - self.red)
                / (self.nir + 6.0 * self.red - 7.5 * self.blue + 1.0),
        }
    }

    /// Apply the water rule to this pixel.
    pub fn is_water(&self) -> bool {
        self.indices().is_water()
    }
}

impl SpectralIndices {
    /// Comparisons with NaN are false, so undefined indices never classify as water.
    pub fn is_water(&self) -> bool {
        self.mndwi > self.evi && self.mndwi > self.ndvi && self.evi < 0.1
    }
}

/// Share of pixels classified as water, NaN for an empty sample.
pub fn water_fraction(pixels: &[Reflectance]) -> f64 {
    if pixels.is_empty() {
        return f64::NAN;
    }
    let water = pixels.iter().filter(|p| p.is_water()).count();
    water as f64 / pixels.len() as f64
}
