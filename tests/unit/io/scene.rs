//! Tests for static tile and grid rendering

#[cfg(test)]
mod tests {
    use lightrail::io::configuration::{
        DEFAULT_SEGMENT_COLOR, OUTLINE_COLOR, OUTLINE_STROKE_WEIGHT, SEGMENT_STROKE_WEIGHT,
    };
    use lightrail::io::scene::{draw_grid, draw_tile};
    use lightrail::io::surface::{CommandRecorder, DrawCommand};
    use lightrail::spatial::grid::TileGrid;
    use lightrail::spatial::tiles::{Point, Tile, TileType};
    use std::f64::consts::{FRAC_PI_2, PI};

    fn draw(tile_type: TileType) -> CommandRecorder {
        let mut surface = CommandRecorder::new();
        draw_tile(
            &mut surface,
            &Tile::with_segments(1, 1, 10.0, tile_type.segments()),
        );
        surface
    }

    // Tests the outline is four lines around the tile in outline style
    // Verified by drawing the outline with the segment color
    #[test]
    fn test_outline_only_for_blank() {
        let surface = draw(TileType::Blank);
        assert_eq!(
            surface.lines(),
            vec![
                (Point::new(10.0, 10.0), Point::new(20.0, 10.0)),
                (Point::new(20.0, 10.0), Point::new(20.0, 20.0)),
                (Point::new(20.0, 20.0), Point::new(10.0, 20.0)),
                (Point::new(10.0, 20.0), Point::new(10.0, 10.0)),
            ]
        );
        assert_eq!(surface.arc_count(), 0);
        assert_eq!(
            surface.commands().get(..2),
            Some(
                [
                    DrawCommand::Stroke(OUTLINE_COLOR),
                    DrawCommand::StrokeWeight(OUTLINE_STROKE_WEIGHT),
                ]
                .as_slice()
            )
        );
        assert_eq!(surface.last_stroke(), Some(DEFAULT_SEGMENT_COLOR));
        assert!(
            surface
                .commands()
                .contains(&DrawCommand::StrokeWeight(SEGMENT_STROKE_WEIGHT))
        );
    }

    // Tests curved connectors are quarter arcs around their shared corner
    // Verified by centering top right arcs on the top left corner
    #[test]
    fn test_curved_connector_arcs() {
        let surface = draw(TileType::TopRight);
        assert_eq!(surface.lines().len(), 4);
        assert_eq!(
            surface.commands().last(),
            Some(&DrawCommand::Arc {
                center: Point::new(20.0, 10.0),
                width: 10.0,
                height: 10.0,
                start: FRAC_PI_2,
                stop: PI,
                scale: Point::new(1.0, 1.0),
            })
        );

        let surface = draw(TileType::TopRightBottomLeft);
        assert_eq!(surface.arc_count(), 2);
        assert_eq!(draw(TileType::TopLeftBottomRight).arc_count(), 2);
    }

    // Tests straight connectors join opposite edge midpoints
    // Verified by drawing the crossing's horizontal line vertically
    #[test]
    fn test_straight_connector_lines() {
        let lines = draw(TileType::TopBottomLeftRight).lines();
        assert_eq!(lines.len(), 6);
        assert!(lines.contains(&(Point::new(15.0, 10.0), Point::new(15.0, 20.0))));
        assert!(lines.contains(&(Point::new(10.0, 15.0), Point::new(20.0, 15.0))));
        assert_eq!(draw(TileType::LeftRight).arc_count(), 0);
    }

    // Tests a grid draws every tile's outline
    // Verified by skipping the last row
    #[test]
    fn test_draw_grid_covers_every_tile() {
        let grid = TileGrid::from_types(
            &[
                vec![TileType::TopRight, TileType::LeftRight],
                vec![TileType::Blank, TileType::TopBottom],
            ],
            10.0,
        )
        .unwrap_or_else(|error| panic!("valid types rejected: {error}"));
        let mut surface = CommandRecorder::new();
        draw_grid(&mut surface, &grid);

        assert_eq!(surface.lines().len(), 4 * 4 + 2);
        assert_eq!(surface.arc_count(), 1);
        assert_eq!(
            surface
                .commands()
                .iter()
                .filter(|command| **command == DrawCommand::Stroke(OUTLINE_COLOR))
                .count(),
            4
        );
    }
}
