//! Draw geometry for one directed pass through a tile
//!
//! Every arc is drawn as a quarter of a circle centered on a tile corner. A single
//! canonical quarter is mirrored into place through per-axis scale factors, so the
//! animator only ever sweeps angles forward.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::spatial::tiles::{Edge, Point, Segment, Tile};

/// Start and end angle of an arc sweep, in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleRange {
    /// Sweep start
    pub start: f64,
    /// Sweep end
    pub end: f64,
}

impl AngleRange {
    /// Create an angle range
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Absolute angular distance covered by the sweep
    pub fn span(&self) -> f64 {
        (self.end - self.start).abs()
    }
}

/// Shape of the connector drawn through a tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    /// Quarter arc around the item's start point
    Arc {
        /// Sweep traced by the leading light
        angle: AngleRange,
        /// Sweep traced while the trailing light leaves the tile
        reverse: AngleRange,
    },
    /// Straight line from the item's start point
    Line {
        /// Far end of the line
        end: Point,
    },
}

/// Precomputed render state for one tile of a light path
#[derive(Debug, Clone, PartialEq)]
pub struct PathItemState {
    /// Tile being crossed
    pub tile: Tile,
    /// Direction of travel through the tile
    pub segment: Segment,
    /// Arc center, or the first endpoint of a line
    pub line_start: Point,
    /// Mirror factors applied while the light advances
    pub scale: Point,
    /// Mirror factors applied while the trail is withdrawn
    pub reverse_scale: Point,
    /// Arc or line data
    pub stroke: Stroke,
}

impl PathItemState {
    /// End point for straight connectors
    pub const fn line_end(&self) -> Option<Point> {
        match self.stroke {
            Stroke::Line { end } => Some(end),
            Stroke::Arc { .. } => None,
        }
    }

    /// Forward sweep for curved connectors
    pub const fn angle(&self) -> Option<AngleRange> {
        match self.stroke {
            Stroke::Arc { angle, .. } => Some(angle),
            Stroke::Line { .. } => None,
        }
    }

    /// Trailing sweep for curved connectors
    pub const fn reverse_angle(&self) -> Option<AngleRange> {
        match self.stroke {
            Stroke::Arc { reverse, .. } => Some(reverse),
            Stroke::Line { .. } => None,
        }
    }
}

const IDENTITY: Point = Point::new(1.0, 1.0);
const MIRROR_X: Point = Point::new(-1.0, 1.0);
const MIRROR_Y: Point = Point::new(1.0, -1.0);

/// Resolve the draw geometry for travelling along `segment` through `tile`
///
/// Returns `None` when both ends of the segment sit on the same edge.
pub fn resolve(tile: &Tile, segment: Segment) -> Option<PathItemState> {
    let half = tile.size() / 2.0;
    let Point { x, y } = tile.position();

    let top_right = Point::new(x + half, y - half);
    let top_left = Point::new(x - half, y - half);
    let bottom_right = Point::new(x + half, y + half);
    let bottom_left = Point::new(x - half, y + half);

    let upper = AngleRange::new(0.0, FRAC_PI_2);
    let left_upper = AngleRange::new(FRAC_PI_2, PI);
    let lower = AngleRange::new(PI, PI + FRAC_PI_2);
    let right_lower = AngleRange::new(PI + FRAC_PI_2, TAU);

    let arc = |angle, reverse| Stroke::Arc { angle, reverse };
    let line = |end| Stroke::Line { end };

    let (line_start, stroke, scale, reverse_scale) = match (segment.start, segment.end) {
        (Edge::Top, Edge::Right) => (top_right, arc(upper, left_upper), MIRROR_X, IDENTITY),
        (Edge::Top, Edge::Bottom) => (
            Point::new(x, y - half),
            line(Point::new(x, y + half)),
            IDENTITY,
            IDENTITY,
        ),
        (Edge::Top, Edge::Left) => (top_left, arc(upper, left_upper), IDENTITY, MIRROR_X),
        (Edge::Bottom, Edge::Top) => (
            Point::new(x, y + half),
            line(Point::new(x, y - half)),
            MIRROR_Y,
            MIRROR_Y,
        ),
        (Edge::Bottom, Edge::Right) => (bottom_right, arc(lower, right_lower), IDENTITY, MIRROR_X),
        (Edge::Bottom, Edge::Left) => (bottom_left, arc(lower, right_lower), MIRROR_X, IDENTITY),
        (Edge::Right, Edge::Top) => (top_right, arc(left_upper, upper), IDENTITY, MIRROR_X),
        (Edge::Right, Edge::Bottom) => (bottom_right, arc(right_lower, lower), MIRROR_X, IDENTITY),
        (Edge::Right, Edge::Left) => (
            Point::new(x + half, y),
            line(Point::new(x - half, y)),
            MIRROR_X,
            IDENTITY,
        ),
        (Edge::Left, Edge::Top) => (top_left, arc(left_upper, upper), MIRROR_X, IDENTITY),
        (Edge::Left, Edge::Right) => (
            Point::new(x - half, y),
            line(Point::new(x + half, y)),
            IDENTITY,
            MIRROR_X,
        ),
        (Edge::Left, Edge::Bottom) => (bottom_left, arc(right_lower, lower), IDENTITY, MIRROR_X),
        _ => return None,
    };

    Some(PathItemState {
        tile: tile.clone(),
        segment,
        line_start,
        scale,
        reverse_scale,
        stroke,
    })
}
