//! Spatial data structures for the light rail grid
//!
//! This module contains:
//! - Edge, segment and tile type definitions
//! - Edge sets used while solving a tile
//! - The rectangular tile grid

/// Fixed-size edge sets
pub mod edges;
/// Rectangular grid storage and neighbor lookup
pub mod grid;
/// Tile, edge and segment model with tile type classification
pub mod tiles;

pub use grid::TileGrid;
pub use tiles::{Edge, Point, Segment, Tile, TileType};
