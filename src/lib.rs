//! Greedy tile collapse and animated light paths over rail grids
//!
//! A grid of square tiles is solved so that every connector meets a matching connector
//! on its neighbor. Lights then enter the grid from its border, follow the connectors
//! tile to tile, and are animated frame by frame onto a rendering surface.

#![forbid(unsafe_code)]

/// Grid collapse, path generation and light animation
pub mod algorithm;
/// Input/output operations, rendering surfaces and error handling
pub mod io;
/// Noise, color and interpolation utilities
pub mod math;
/// Tile, edge and grid data model
pub mod spatial;

pub use io::error::{LightRailError, Result};
