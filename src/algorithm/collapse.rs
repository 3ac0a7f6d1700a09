//! Greedy single-sweep tile collapse
//!
//! Corners are solved first from curated candidate lists, then every remaining tile is
//! solved in row-major order from the connectors its solved neighbors demand. There is no
//! backtracking: a tile whose required edges cannot all be paired keeps whatever segments
//! could be formed and the sweep carries on.

use tracing::{debug, warn};

use crate::algorithm::random::RandomSource;
use crate::io::configuration::{MAX_CANVAS_DIMENSION, MAX_GRID_DIMENSION};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::edges::EdgeSet;
use crate::spatial::grid::TileGrid;
use crate::spatial::tiles::{Edge, Segment, TileType};

/// Types of a top neighbor that need a connector on this tile's top edge
pub const REQUIRES_TOP: [TileType; 6] = [
    TileType::TopBottom,
    TileType::BottomRight,
    TileType::BottomLeft,
    TileType::TopRightBottomLeft,
    TileType::TopBottomLeftRight,
    TileType::TopLeftBottomRight,
];

/// Types of a right neighbor that need a connector on this tile's right edge
pub const REQUIRES_RIGHT: [TileType; 6] = [
    TileType::TopLeft,
    TileType::LeftRight,
    TileType::BottomLeft,
    TileType::TopBottomLeftRight,
    TileType::TopRightBottomLeft,
    TileType::TopLeftBottomRight,
];

/// Types of a bottom neighbor that need a connector on this tile's bottom edge
pub const REQUIRES_BOTTOM: [TileType; 6] = [
    TileType::TopRight,
    TileType::TopBottom,
    TileType::TopLeft,
    TileType::TopBottomLeftRight,
    TileType::TopRightBottomLeft,
    TileType::TopLeftBottomRight,
];

/// Types of a left neighbor that need a connector on this tile's left edge
pub const REQUIRES_LEFT: [TileType; 6] = [
    TileType::TopRight,
    TileType::BottomRight,
    TileType::LeftRight,
    TileType::TopBottomLeftRight,
    TileType::TopRightBottomLeft,
    TileType::TopLeftBottomRight,
];

/// Neighbor types that force a connector on `edge` of the current tile
pub const fn requires(edge: Edge) -> &'static [TileType] {
    match edge {
        Edge::Top => &REQUIRES_TOP,
        Edge::Right => &REQUIRES_RIGHT,
        Edge::Bottom => &REQUIRES_BOTTOM,
        Edge::Left => &REQUIRES_LEFT,
    }
}

/// Check a tile size against the grid it will be rendered with
///
/// # Errors
///
/// Returns an error if the tile size is not a positive finite number, or if the grid
/// would render wider or taller than [`MAX_CANVAS_DIMENSION`] pixels
pub fn check_tile_size(rows: usize, cols: usize, tile_size: f64) -> Result<()> {
    if !tile_size.is_finite() || tile_size <= 0.0 {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &"must be a positive number of pixels",
        ));
    }

    for (dimension, tiles) in [("cols", cols), ("rows", rows)] {
        let extent = tiles as f64 * tile_size;
        if extent > MAX_CANVAS_DIMENSION {
            return Err(invalid_parameter(
                "tile_size",
                &tile_size,
                &format!(
                    "{dimension} × tile size is {extent} px, above the {MAX_CANVAS_DIMENSION} px limit"
                ),
            ));
        }
    }
    Ok(())
}

/// The four grid corners, in the order they are collapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    /// Row 0, column 0
    TopLeft,
    /// Row 0, last column
    TopRight,
    /// Last row, last column
    BottomRight,
    /// Last row, column 0
    BottomLeft,
}

impl Corner {
    /// Collapse order
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// Tile types a corner may start from
    pub const fn candidates(self) -> &'static [TileType] {
        match self {
            Self::TopLeft => &[
                TileType::TopRight,
                TileType::TopBottom,
                TileType::BottomLeft,
                TileType::LeftRight,
                TileType::TopBottomLeftRight,
                TileType::Blank,
            ],
            Self::TopRight => &[
                TileType::TopLeft,
                TileType::TopBottom,
                TileType::LeftRight,
                TileType::BottomRight,
                TileType::TopBottomLeftRight,
                TileType::Blank,
            ],
            Self::BottomRight => &[
                TileType::TopRight,
                TileType::TopBottom,
                TileType::BottomLeft,
                TileType::LeftRight,
                TileType::TopBottomLeftRight,
                TileType::Blank,
            ],
            Self::BottomLeft => &[
                TileType::TopLeft,
                TileType::TopBottom,
                TileType::LeftRight,
                TileType::BottomRight,
                TileType::TopBottomLeftRight,
                TileType::Blank,
            ],
        }
    }

    /// Grid position of this corner
    pub const fn position(self, rows: usize, cols: usize) -> [usize; 2] {
        let last_row = rows.saturating_sub(1);
        let last_col = cols.saturating_sub(1);
        match self {
            Self::TopLeft => [0, 0],
            Self::TopRight => [0, last_col],
            Self::BottomRight => [last_row, last_col],
            Self::BottomLeft => [last_row, 0],
        }
    }
}

/// Connector demands on a tile, derived from its neighbors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeConstraints {
    /// Edges a solved neighbor already connects to
    pub required: EdgeSet,
    /// Edges facing an absent or unsolved neighbor
    pub optional: EdgeSet,
}

/// Pair up constrained edges into segments
///
/// Exactly two required edges are joined by a single segment in a random direction.
/// Otherwise a start edge is drawn (required edges first) and paired with a random edge
/// from what remains, until nothing is left to pair.
pub fn segments_from_edges<R: RandomSource>(
    random: &mut R,
    constraints: EdgeConstraints,
) -> Vec<Segment> {
    let EdgeConstraints {
        mut required,
        mut optional,
    } = constraints;
    let mut segments = Vec::with_capacity(2);

    if required.len() == 2 {
        let pair = required.to_vec();
        if let [first, second] = pair.as_slice() {
            let start = random.choose(&pair).copied().unwrap_or(*first);
            let end = if start == *first { *second } else { *first };
            segments.push(Segment::new(start, end));
        }
        return segments;
    }

    let mut pool = required.union(&optional);
    while !pool.is_empty() {
        let source = if required.is_empty() {
            optional
        } else {
            required
        };
        let Some(start) = random.choose(&source.to_vec()).copied() else {
            break;
        };
        pool.remove(start);
        required.remove(start);
        optional.remove(start);

        let Some(end) = random.choose(&pool.to_vec()).copied() else {
            break;
        };
        pool.remove(end);
        required.remove(end);
        optional.remove(end);

        segments.push(Segment::new(start, end));
    }

    segments
}

/// Greedy constraint solver assigning connectors to every tile of a grid
#[derive(Debug, Clone)]
pub struct GridGenerator {
    grid: TileGrid,
    cursor: usize,
    contradictions: Vec<[usize; 2]>,
}

impl GridGenerator {
    /// Create a generator for an uncollapsed `rows` × `cols` grid
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_GRID_DIMENSION`], or if the tile size is invalid for the grid
    /// (see [`check_tile_size`])
    pub fn new(rows: usize, cols: usize, tile_size: f64) -> Result<Self> {
        for (parameter, value) in [("rows", rows), ("cols", cols)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        check_tile_size(rows, cols, tile_size)?;

        Ok(Self {
            grid: TileGrid::new(rows, cols, tile_size),
            cursor: 0,
            contradictions: Vec::new(),
        })
    }

    /// Reset every tile to the uncollapsed state
    pub fn initialize(&mut self) {
        self.grid.reset();
        self.cursor = 0;
        self.contradictions.clear();
    }

    /// Fix a tile to a solved type before collapsing
    ///
    /// Pinned tiles are skipped by the sweep and constrain their neighbors like any
    /// other solved tile. [`initialize`](Self::initialize) clears every pin.
    ///
    /// # Errors
    ///
    /// Returns an error if the position lies outside the grid or the type is unsolved
    pub fn pin(&mut self, row: usize, col: usize, tile_type: TileType) -> Result<()> {
        if !tile_type.is_solved() {
            return Err(invalid_parameter(
                "tile_type",
                &format!("{tile_type:?}"),
                &"pinned tiles must be solved",
            ));
        }
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        let Some(tile) = self.grid.get_mut(row, col) else {
            return Err(invalid_parameter(
                "position",
                &format!("{row},{col}"),
                &format!("outside the {rows}x{cols} grid"),
            ));
        };
        tile.collapse(tile_type.segments());
        Ok(())
    }

    /// Collapse the whole grid: corners first, then the rest in row-major order
    pub fn collapse<R: RandomSource>(&mut self, random: &mut R) {
        self.collapse_corners(random);
        while self.collapse_step(random).is_some() {}
        debug!(
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            contradictions = self.contradictions.len(),
            "grid collapsed"
        );
    }

    /// Collapse the four corner tiles from their candidate lists
    ///
    /// On grids narrower than two tiles corners coincide; a corner that is already
    /// collapsed is left alone.
    pub fn collapse_corners<R: RandomSource>(&mut self, random: &mut R) {
        for corner in Corner::ALL {
            let [row, col] = corner.position(self.grid.rows(), self.grid.cols());
            if self.is_collapsed(row, col) {
                continue;
            }
            self.collapse_tile(random, row, col);
        }
    }

    /// Collapse the next uncollapsed tile in row-major order
    ///
    /// Returns the position that was collapsed, or `None` once the grid is solved.
    pub fn collapse_step<R: RandomSource>(&mut self, random: &mut R) -> Option<[usize; 2]> {
        let cols = self.grid.cols();
        let total = self.grid.rows() * cols;

        while self.cursor < total {
            let row = self.cursor / cols;
            let col = self.cursor % cols;
            self.cursor += 1;
            if !self.is_collapsed(row, col) {
                self.collapse_tile(random, row, col);
                return Some([row, col]);
            }
        }

        None
    }

    /// Corner occupied by a tile, judged by which neighbors are missing
    pub fn corner_at(&self, row: usize, col: usize) -> Option<Corner> {
        let missing = self.grid.outward_edges(row, col);
        let missing_both = |a: Edge, b: Edge| missing.contains(a) && missing.contains(b);

        if missing_both(Edge::Top, Edge::Left) {
            Some(Corner::TopLeft)
        } else if missing_both(Edge::Top, Edge::Right) {
            Some(Corner::TopRight)
        } else if missing_both(Edge::Bottom, Edge::Right) {
            Some(Corner::BottomRight)
        } else if missing_both(Edge::Bottom, Edge::Left) {
            Some(Corner::BottomLeft)
        } else {
            None
        }
    }

    /// Required and optional edges of a tile given its neighbors' current state
    pub fn edge_constraints(&self, row: usize, col: usize) -> EdgeConstraints {
        let mut constraints = EdgeConstraints::default();

        for edge in Edge::ALL {
            match self.grid.neighbor(row, col, edge).map(|tile| tile.tile_type()) {
                None | Some(TileType::Unknown) => constraints.optional.insert(edge),
                Some(neighbor) if requires(edge).contains(&neighbor) => {
                    constraints.required.insert(edge);
                }
                // A solved neighbor without a facing connector rules the edge out
                Some(_) => {}
            }
        }

        constraints
    }

    /// The grid in its current state
    pub const fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Consume the generator, keeping the grid
    pub fn into_grid(self) -> TileGrid {
        self.grid
    }

    /// Positions where required edges could not all be paired
    ///
    /// Without pinned tiles every swept tile still has an optional edge, so this stays empty.
    pub fn contradictions(&self) -> &[[usize; 2]] {
        &self.contradictions
    }

    fn is_collapsed(&self, row: usize, col: usize) -> bool {
        self.grid.get(row, col).is_some_and(|tile| tile.is_collapsed())
    }

    fn collapse_tile<R: RandomSource>(&mut self, random: &mut R, row: usize, col: usize) {
        let segments = if let Some(corner) = self.corner_at(row, col) {
            random
                .choose(corner.candidates())
                .copied()
                .unwrap_or(TileType::Blank)
                .segments()
        } else {
            let constraints = self.edge_constraints(row, col);
            let segments = segments_from_edges(random, constraints);

            let covered: EdgeSet = segments
                .iter()
                .flat_map(|segment| [segment.start, segment.end])
                .collect();
            if !constraints.required.is_subset(&covered) {
                warn!(
                    row,
                    col,
                    required = ?constraints.required,
                    "unsolvable tile, keeping partial connectors"
                );
                self.contradictions.push([row, col]);
            }
            segments
        };

        if let Some(tile) = self.grid.get_mut(row, col) {
            tile.collapse(segments);
        }
    }
}
