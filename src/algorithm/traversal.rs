//! Path generation over a solved grid
//!
//! A walk starts on a boundary tile whose connector reaches the outside of the grid and
//! follows connectors tile to tile. Each step enters through the edge facing the previous
//! tile and leaves through the other end of the segment touching that edge.

use std::fmt;

use tracing::{debug, warn};

use crate::algorithm::animator::LightPath;
use crate::algorithm::geometry::{PathItemState, resolve};
use crate::algorithm::random::RandomSource;
use crate::io::configuration::{MAX_PATH_ITERATIONS, MAX_STEP, MIN_STEP};
use crate::spatial::grid::TileGrid;
use crate::spatial::tiles::{Edge, Segment, Tile, TileType};

/// Reasons a light path could not be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalError {
    /// The chosen boundary tile has no direction into the grid
    UnresolvedStart {
        /// Row of the start tile
        row: usize,
        /// Column of the start tile
        col: usize,
        /// Type of the start tile
        tile_type: TileType,
    },
    /// A directed segment has no draw geometry
    UnresolvedGeometry {
        /// Row of the tile
        row: usize,
        /// Column of the tile
        col: usize,
        /// Segment that could not be resolved
        segment: Segment,
    },
}

impl fmt::Display for TraversalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedStart {
                row,
                col,
                tile_type,
            } => write!(
                f,
                "no entry direction for {tile_type:?} tile at ({row}, {col})"
            ),
            Self::UnresolvedGeometry { row, col, segment } => write!(
                f,
                "no geometry for {:?} -> {:?} at ({row}, {col})",
                segment.start, segment.end
            ),
        }
    }
}

impl std::error::Error for TraversalError {}

/// Builds light paths over a private copy of a solved grid
#[derive(Debug, Clone)]
pub struct PathGenerator {
    grid: TileGrid,
    edge_tiles: Vec<[usize; 2]>,
}

impl PathGenerator {
    /// Copy `grid` and index its edge tiles
    pub fn new(grid: &TileGrid) -> Self {
        let grid = grid.clone();
        let edge_tiles: Vec<[usize; 2]> = grid
            .iter()
            .filter(|tile| is_edge_tile(&grid, tile))
            .map(|tile| [tile.row(), tile.col()])
            .collect();
        debug!(edge_tiles = edge_tiles.len(), "path generator ready");

        Self { grid, edge_tiles }
    }

    /// The grid paths are generated over
    pub const fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Positions of boundary tiles with a connector leaving the grid
    pub fn edge_tiles(&self) -> &[[usize; 2]] {
        &self.edge_tiles
    }

    /// Walk the grid from a random edge tile
    ///
    /// A grid without edge tiles produces an empty path. A walk that reaches
    /// [`MAX_PATH_ITERATIONS`] tiles with a continuation left is returned with its
    /// budget flagged as exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`TraversalError`] when the start tile has no direction into the grid
    pub fn generate<R: RandomSource>(
        &self,
        random: &mut R,
    ) -> Result<LightPath, TraversalError> {
        let speed = random.random_range(MIN_STEP, MAX_STEP);

        let Some(&[row, col]) = random.choose(&self.edge_tiles) else {
            debug!("grid has no edge tiles");
            return Ok(LightPath::new(Vec::new(), speed, random));
        };

        let mut items = vec![self.first_item(row, col)?];
        let mut budget_exhausted = false;

        while let Some(previous) = items.last() {
            let Some(next) = self.continuation(previous)? else {
                break;
            };
            if items.len() >= MAX_PATH_ITERATIONS {
                warn!(
                    limit = MAX_PATH_ITERATIONS,
                    "iteration limit reached while generating a light path"
                );
                budget_exhausted = true;
                break;
            }
            items.push(next);
        }

        debug!(
            start_row = row,
            start_col = col,
            length = items.len(),
            speed,
            "light path generated"
        );

        Ok(LightPath::new(items, speed, random).with_budget_exhausted(budget_exhausted))
    }

    fn first_item(&self, row: usize, col: usize) -> Result<PathItemState, TraversalError> {
        let tile = self
            .grid
            .get(row, col)
            .ok_or(TraversalError::UnresolvedStart {
                row,
                col,
                tile_type: TileType::Unknown,
            })?;
        let segment = first_segment(tile, self.grid.rows(), self.grid.cols()).ok_or(
            TraversalError::UnresolvedStart {
                row,
                col,
                tile_type: tile.tile_type(),
            },
        )?;

        resolve(tile, segment).ok_or(TraversalError::UnresolvedGeometry { row, col, segment })
    }

    fn continuation(
        &self,
        previous: &PathItemState,
    ) -> Result<Option<PathItemState>, TraversalError> {
        let exit = previous.segment.end;
        let Some([row, col]) =
            self.grid
                .neighbor_position(previous.tile.row(), previous.tile.col(), exit)
        else {
            return Ok(None);
        };
        let Some(tile) = self.grid.get(row, col) else {
            return Ok(None);
        };

        let entry = exit.opposite();
        let Some(end) = tile.tile_type().exit_for(entry) else {
            debug!(
                row,
                col,
                tile_type = ?tile.tile_type(),
                ?entry,
                "path leaves the connector network"
            );
            return Ok(None);
        };

        let segment = Segment::new(entry, end);
        resolve(tile, segment)
            .map(Some)
            .ok_or(TraversalError::UnresolvedGeometry { row, col, segment })
    }
}

/// Whether a solved boundary tile has a connector on one of its outward sides
fn is_edge_tile(grid: &TileGrid, tile: &Tile) -> bool {
    if tile.tile_type() == TileType::Unknown {
        return false;
    }
    grid.outward_edges(tile.row(), tile.col())
        .iter()
        .any(|edge| tile.has_edge(edge))
}

/// Direction of travel through the start tile
fn first_segment(tile: &Tile, rows: usize, cols: usize) -> Option<Segment> {
    use Edge::{Bottom, Left, Right, Top};

    let top = tile.row() == 0;
    let bottom = tile.row() + 1 == rows;
    let left = tile.col() == 0;
    let right = tile.col() + 1 == cols;
    let segment = Segment::new;

    match tile.tile_type() {
        TileType::TopRight => {
            first_on_boundary(&[(top, segment(Top, Right)), (right, segment(Right, Top))])
        }
        TileType::TopBottom => {
            first_on_boundary(&[(top, segment(Top, Bottom)), (bottom, segment(Bottom, Top))])
        }
        TileType::TopLeft => {
            first_on_boundary(&[(top, segment(Top, Left)), (left, segment(Left, Top))])
        }
        TileType::BottomRight => first_on_boundary(&[
            (bottom, segment(Bottom, Right)),
            (right, segment(Right, Bottom)),
        ]),
        TileType::BottomLeft => first_on_boundary(&[
            (bottom, segment(Bottom, Left)),
            (left, segment(Left, Bottom)),
        ]),
        TileType::LeftRight => {
            first_on_boundary(&[(left, segment(Left, Right)), (right, segment(Right, Left))])
        }
        TileType::TopRightBottomLeft => first_on_boundary(&[
            (top, segment(Top, Right)),
            (right, segment(Right, Top)),
            (bottom, segment(Bottom, Left)),
            (left, segment(Left, Bottom)),
        ]),
        TileType::TopBottomLeftRight => first_on_boundary(&[
            (top, segment(Top, Bottom)),
            (bottom, segment(Bottom, Top)),
            (left, segment(Left, Right)),
            (right, segment(Right, Left)),
        ]),
        TileType::TopLeftBottomRight => first_on_boundary(&[
            (top, segment(Top, Left)),
            (left, segment(Left, Top)),
            (bottom, segment(Bottom, Right)),
            (right, segment(Right, Bottom)),
        ]),
        TileType::Blank | TileType::Unknown => None,
    }
}

fn first_on_boundary(options: &[(bool, Segment)]) -> Option<Segment> {
    options
        .iter()
        .find(|(on_boundary, _)| *on_boundary)
        .map(|&(_, segment)| segment)
}
