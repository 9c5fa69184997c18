//! Spectral water classification of Sentinel-2 pixels.

mod indices;

pub use indices::{normalized_difference, water_fraction, Reflectance, SpectralIndices};
