//! Static rendering of solved tiles

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::io::configuration::{
    DEFAULT_SEGMENT_COLOR, OUTLINE_COLOR, OUTLINE_STROKE_WEIGHT, SEGMENT_STROKE_WEIGHT,
};
use crate::io::surface::RenderSurface;
use crate::spatial::grid::TileGrid;
use crate::spatial::tiles::{Point, Tile, TileType};

/// Draw a tile outline and its connectors
///
/// Curved connectors are quarter arcs centered on the corner between their two edges;
/// straight connectors join opposite edge midpoints. Direction of travel is ignored.
pub fn draw_tile<S: RenderSurface>(surface: &mut S, tile: &Tile) {
    let half = tile.size() / 2.0;
    let size = tile.size();
    let Point { x, y } = tile.position();

    let top_left = Point::new(x - half, y - half);
    let top_right = Point::new(x + half, y - half);
    let bottom_right = Point::new(x + half, y + half);
    let bottom_left = Point::new(x - half, y + half);

    surface.stroke(OUTLINE_COLOR);
    surface.stroke_weight(OUTLINE_STROKE_WEIGHT);
    surface.line(top_left, top_right);
    surface.line(top_right, bottom_right);
    surface.line(bottom_right, bottom_left);
    surface.line(bottom_left, top_left);

    surface.stroke(DEFAULT_SEGMENT_COLOR);
    surface.stroke_weight(SEGMENT_STROKE_WEIGHT);

    for segment in tile.segments() {
        let canonical = TileType::from_segment(*segment).unwrap_or(TileType::Blank);
        match canonical {
            TileType::TopRight => surface.arc(top_right, size, size, FRAC_PI_2, PI),
            TileType::TopLeft => surface.arc(top_left, size, size, 0.0, FRAC_PI_2),
            TileType::BottomRight => surface.arc(bottom_right, size, size, PI, PI + FRAC_PI_2),
            TileType::BottomLeft => surface.arc(bottom_left, size, size, PI + FRAC_PI_2, TAU),
            TileType::TopBottom => {
                surface.line(Point::new(x, y - half), Point::new(x, y + half));
            }
            TileType::LeftRight => {
                surface.line(Point::new(x - half, y), Point::new(x + half, y));
            }
            _ => {}
        }
    }
}

/// Draw every tile of a grid
pub fn draw_grid<S: RenderSurface>(surface: &mut S, grid: &TileGrid) {
    for tile in grid.iter() {
        draw_tile(surface, tile);
    }
}
