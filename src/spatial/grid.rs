//! Rectangular tile grid with bounds-checked neighbor access
//!
//! Tiles live in a single `ndarray` matrix, so every row has the same column count and a
//! tile's row/column always equal its matrix index.

use ndarray::Array2;
use std::fmt;

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::edges::EdgeSet;
use crate::spatial::tiles::{Edge, Tile, TileType};

/// Grid of tiles, rows outer and columns inner
///
/// Cloning produces a fully independent copy, which is how path generation isolates
/// itself from later changes to the source grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    tiles: Array2<Tile>,
    tile_size: f64,
}

impl TileGrid {
    /// Create a grid of uncollapsed tiles
    pub fn new(rows: usize, cols: usize, tile_size: f64) -> Self {
        let tiles = Array2::from_shape_fn((rows, cols), |(row, col)| Tile::new(row, col, tile_size));
        Self { tiles, tile_size }
    }

    /// Build a collapsed grid from rows of tile types
    ///
    /// Every tile receives the canonical segments of its type.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows are empty, ragged, or contain [`TileType::Unknown`]
    pub fn from_types(types: &[Vec<TileType>], tile_size: f64) -> Result<Self> {
        let rows = types.len();
        let cols = types.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(invalid_parameter(
                "types",
                &format!("{rows}x{cols}"),
                &"grid must have at least one row and one column",
            ));
        }
        if let Some(ragged) = types.iter().position(|row| row.len() != cols) {
            return Err(invalid_parameter(
                "types",
                &ragged,
                &format!("row has a different column count than the first row ({cols})"),
            ));
        }

        let mut grid = Self::new(rows, cols, tile_size);
        for (row, row_types) in types.iter().enumerate() {
            for (col, &tile_type) in row_types.iter().enumerate() {
                if !tile_type.is_solved() {
                    return Err(invalid_parameter(
                        "types",
                        &format!("{row},{col}"),
                        &"tile types must be solved",
                    ));
                }
                if let Some(tile) = grid.get_mut(row, col) {
                    tile.collapse(tile_type.segments());
                }
            }
        }
        Ok(grid)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.tiles.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.tiles.ncols()
    }

    /// Side length of every tile in pixels
    pub const fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// Pixel width and height covered by the grid
    pub fn pixel_size(&self) -> (f64, f64) {
        (
            self.cols() as f64 * self.tile_size,
            self.rows() as f64 * self.tile_size,
        )
    }

    /// Tile at a grid position
    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        self.tiles.get([row, col])
    }

    pub(crate) fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Tile> {
        self.tiles.get_mut([row, col])
    }

    /// Position of the neighbor across `edge`, if it lies inside the grid
    pub fn neighbor_position(&self, row: usize, col: usize, edge: Edge) -> Option<[usize; 2]> {
        let [row_offset, col_offset] = edge.offset();
        let neighbor_row = row.checked_add_signed(row_offset)?;
        let neighbor_col = col.checked_add_signed(col_offset)?;
        (neighbor_row < self.rows() && neighbor_col < self.cols())
            .then_some([neighbor_row, neighbor_col])
    }

    /// Neighbor tile across `edge`
    pub fn neighbor(&self, row: usize, col: usize, edge: Edge) -> Option<&Tile> {
        self.neighbor_position(row, col, edge)
            .and_then(|[neighbor_row, neighbor_col]| self.get(neighbor_row, neighbor_col))
    }

    /// Edges of a tile that face out past the grid border
    pub fn outward_edges(&self, row: usize, col: usize) -> EdgeSet {
        Edge::ALL
            .into_iter()
            .filter(|&edge| self.neighbor_position(row, col, edge).is_none())
            .collect()
    }

    /// Tiles in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Whether every tile has been collapsed
    pub fn is_solved(&self) -> bool {
        self.tiles.iter().all(Tile::is_collapsed)
    }

    /// Reset every tile to the uncollapsed state
    pub fn reset(&mut self) {
        let tile_size = self.tile_size;
        for ((row, col), tile) in self.tiles.indexed_iter_mut() {
            *tile = Tile::new(row, col, tile_size);
        }
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.rows() {
            for tile in row {
                write!(f, "{}", tile.tile_type().glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
