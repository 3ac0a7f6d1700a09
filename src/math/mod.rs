//! Mathematical utilities for noise, color and interpolation

/// HSB colors and RGBA conversion
pub mod color;
/// Linear interpolation and range mapping
pub mod interpolation;
/// Smooth one-dimensional value noise
pub mod noise;
