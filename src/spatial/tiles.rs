//! Tile model: edges, connector segments and tile type classification
//!
//! A tile carries up to two connector segments between its four edges. The tile type is
//! never stored; it is always derived from the segments so the two cannot disagree.

use crate::spatial::edges::EdgeSet;

/// One of the four sides of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Edge {
    /// Upper side
    Top,
    /// Right-hand side
    Right,
    /// Lower side
    Bottom,
    /// Left-hand side
    Left,
}

impl Edge {
    /// All edges, clockwise from the top
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The edge on the far side of a shared tile boundary
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Row and column offset of the neighbor across this edge
    pub const fn offset(self) -> [isize; 2] {
        match self {
            Self::Top => [-1, 0],
            Self::Right => [0, 1],
            Self::Bottom => [1, 0],
            Self::Left => [0, -1],
        }
    }

    /// Stable bit position of this edge inside an [`EdgeSet`]
    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
        }
    }

    /// Inverse of [`Edge::index`]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Top),
            1 => Some(Self::Right),
            2 => Some(Self::Bottom),
            3 => Some(Self::Left),
            _ => None,
        }
    }
}

/// A connector running between two edges of a tile
///
/// The pair is unordered for classification purposes. During traversal the order
/// records the direction of travel: the light enters at `start` and leaves at `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Edge where the connector begins
    pub start: Edge,
    /// Edge where the connector ends
    pub end: Edge,
}

impl Segment {
    /// Create a segment between two edges
    pub const fn new(start: Edge, end: Edge) -> Self {
        Self { start, end }
    }

    /// The same connector travelled the other way
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Whether either end of the connector sits on `edge`
    pub fn touches(self, edge: Edge) -> bool {
        self.start == edge || self.end == edge
    }

    /// The far end of the connector when arriving at `edge`
    pub fn other(self, edge: Edge) -> Option<Edge> {
        if self.start == edge {
            Some(self.end)
        } else if self.end == edge {
            Some(self.start)
        } else {
            None
        }
    }

    /// Straight connectors join opposite edges; all others are quarter arcs
    pub fn is_straight(self) -> bool {
        self.start.opposite() == self.end
    }
}

/// Classification of a tile by the edges its segments join
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileType {
    /// Not yet collapsed
    Unknown,
    /// Collapsed with no connectors
    Blank,
    /// Quarter arc between top and right
    TopRight,
    /// Vertical line
    TopBottom,
    /// Quarter arc between top and left
    TopLeft,
    /// Quarter arc between bottom and right
    BottomRight,
    /// Quarter arc between bottom and left
    BottomLeft,
    /// Horizontal line
    LeftRight,
    /// Two arcs in opposite corners: top-right and bottom-left
    TopRightBottomLeft,
    /// Crossing vertical and horizontal lines
    TopBottomLeftRight,
    /// Two arcs in opposite corners: top-left and bottom-right
    TopLeftBottomRight,
}

impl TileType {
    /// Every type a collapsed tile can take
    pub const SOLVED: [Self; 10] = [
        Self::Blank,
        Self::TopRight,
        Self::TopBottom,
        Self::TopLeft,
        Self::BottomRight,
        Self::BottomLeft,
        Self::LeftRight,
        Self::TopRightBottomLeft,
        Self::TopBottomLeftRight,
        Self::TopLeftBottomRight,
    ];

    /// Single-connector type for a segment, ignoring its direction
    ///
    /// Returns `None` for a degenerate segment whose ends share an edge.
    pub const fn from_segment(segment: Segment) -> Option<Self> {
        match (segment.start, segment.end) {
            (Edge::Top, Edge::Bottom) | (Edge::Bottom, Edge::Top) => Some(Self::TopBottom),
            (Edge::Top, Edge::Right) | (Edge::Right, Edge::Top) => Some(Self::TopRight),
            (Edge::Top, Edge::Left) | (Edge::Left, Edge::Top) => Some(Self::TopLeft),
            (Edge::Bottom, Edge::Right) | (Edge::Right, Edge::Bottom) => Some(Self::BottomRight),
            (Edge::Bottom, Edge::Left) | (Edge::Left, Edge::Bottom) => Some(Self::BottomLeft),
            (Edge::Left, Edge::Right) | (Edge::Right, Edge::Left) => Some(Self::LeftRight),
            _ => None,
        }
    }

    /// Canonical segments for this type
    ///
    /// These are the segments a corner tile receives when it is collapsed directly
    /// from a chosen type.
    pub fn segments(self) -> Vec<Segment> {
        match self {
            Self::Unknown | Self::Blank => Vec::new(),
            Self::TopRight => vec![Segment::new(Edge::Top, Edge::Right)],
            Self::TopBottom => vec![Segment::new(Edge::Top, Edge::Bottom)],
            Self::TopLeft => vec![Segment::new(Edge::Top, Edge::Left)],
            Self::BottomRight => vec![Segment::new(Edge::Bottom, Edge::Right)],
            Self::BottomLeft => vec![Segment::new(Edge::Bottom, Edge::Left)],
            Self::LeftRight => vec![Segment::new(Edge::Left, Edge::Right)],
            Self::TopRightBottomLeft => vec![
                Segment::new(Edge::Top, Edge::Right),
                Segment::new(Edge::Bottom, Edge::Left),
            ],
            Self::TopBottomLeftRight => vec![
                Segment::new(Edge::Top, Edge::Bottom),
                Segment::new(Edge::Left, Edge::Right),
            ],
            Self::TopLeftBottomRight => vec![
                Segment::new(Edge::Top, Edge::Left),
                Segment::new(Edge::Bottom, Edge::Right),
            ],
        }
    }

    /// Edges touched by this type's connectors
    pub fn edges(self) -> EdgeSet {
        self.segments()
            .iter()
            .flat_map(|segment| [segment.start, segment.end])
            .collect()
    }

    /// Whether a connector of this type ends on `edge`
    pub fn has_edge(self, edge: Edge) -> bool {
        self.edges().contains(edge)
    }

    /// Exit edge for a light entering through `entry`
    ///
    /// Two-segment types route each entry along the segment that touches it, so a
    /// crossing tile can be passed through twice along independent connectors.
    pub fn exit_for(self, entry: Edge) -> Option<Edge> {
        self.segments()
            .into_iter()
            .find_map(|segment| segment.other(entry))
    }

    /// Whether this type belongs to a collapsed tile
    pub const fn is_solved(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Box-drawing glyph used by the textual grid rendering
    pub const fn glyph(self) -> char {
        match self {
            Self::Unknown => '?',
            Self::Blank => '·',
            Self::TopRight => '└',
            Self::TopBottom => '│',
            Self::TopLeft => '┘',
            Self::BottomRight => '┌',
            Self::BottomLeft => '┐',
            Self::LeftRight => '─',
            Self::TopRightBottomLeft => '╲',
            Self::TopBottomLeftRight => '┼',
            Self::TopLeftBottomRight => '╱',
        }
    }
}

/// Classify a set of segments into a tile type
///
/// No segments gives [`TileType::Blank`], one gives the type naming its edge pair, and two
/// must split the four edges into disjoint pairs. Anything else is not a shape a tile can
/// hold and falls back to [`TileType::Blank`].
pub fn classify(segments: &[Segment]) -> TileType {
    let mut kinds: Vec<TileType> = Vec::with_capacity(2);
    for kind in segments.iter().copied().filter_map(TileType::from_segment) {
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }

    match kinds.as_slice() {
        [] => TileType::Blank,
        [single] => *single,
        [first, second] => match (first, second) {
            (TileType::TopBottom, TileType::LeftRight)
            | (TileType::LeftRight, TileType::TopBottom) => TileType::TopBottomLeftRight,
            (TileType::TopRight, TileType::BottomLeft)
            | (TileType::BottomLeft, TileType::TopRight) => TileType::TopRightBottomLeft,
            (TileType::TopLeft, TileType::BottomRight)
            | (TileType::BottomRight, TileType::TopLeft) => TileType::TopLeftBottomRight,
            _ => TileType::Blank,
        },
        _ => TileType::Blank,
    }
}

/// Pixel coordinate on the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate, growing rightwards
    pub x: f64,
    /// Vertical coordinate, growing downwards
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single grid cell and the connectors assigned to it
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    segments: Vec<Segment>,
    collapsed: bool,
    row: usize,
    col: usize,
    size: f64,
}

impl Tile {
    /// Create an uncollapsed tile at a grid position
    pub const fn new(row: usize, col: usize, size: f64) -> Self {
        Self {
            segments: Vec::new(),
            collapsed: false,
            row,
            col,
            size,
        }
    }

    /// Create a collapsed tile holding the given segments
    pub const fn with_segments(row: usize, col: usize, size: f64, segments: Vec<Segment>) -> Self {
        Self {
            segments,
            collapsed: true,
            row,
            col,
            size,
        }
    }

    /// Type derived from the current segments
    pub fn tile_type(&self) -> TileType {
        if self.collapsed {
            classify(&self.segments)
        } else {
            TileType::Unknown
        }
    }

    /// Connectors held by this tile
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether any connector ends on `edge`
    pub fn has_edge(&self, edge: Edge) -> bool {
        self.segments.iter().any(|segment| segment.touches(edge))
    }

    /// Pixel center of the tile
    pub fn position(&self) -> Point {
        let half = self.size / 2.0;
        Point::new(
            (self.col as f64).mul_add(self.size, half),
            (self.row as f64).mul_add(self.size, half),
        )
    }

    /// Grid row
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Grid column
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Side length in pixels
    pub const fn size(&self) -> f64 {
        self.size
    }

    /// Whether the tile has been assigned its connectors
    pub const fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub(crate) fn collapse(&mut self, segments: Vec<Segment>) {
        self.segments = segments;
        self.collapsed = true;
    }
}
