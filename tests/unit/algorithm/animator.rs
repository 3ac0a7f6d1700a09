//! Tests for per-frame light animation along a path

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_4;

    use lightrail::algorithm::animator::LightPath;
    use lightrail::algorithm::geometry::{PathItemState, resolve};
    use lightrail::algorithm::random::RandomSource;
    use lightrail::io::configuration::LIGHT_STROKE_WEIGHT;
    use lightrail::io::surface::{CommandRecorder, DrawCommand};
    use lightrail::math::color::Hsb;
    use lightrail::spatial::tiles::{Edge, Point, Segment, Tile, TileType};

    use crate::FirstChoice;

    struct FixedNoise(f64);

    impl RandomSource for FixedNoise {
        fn random(&mut self) -> f64 {
            0.0
        }

        fn random_index(&mut self, len: usize) -> Option<usize> {
            (len > 0).then_some(0)
        }

        fn noise(&self, _x: f64) -> f64 {
            self.0
        }
    }

    fn item(row: usize, col: usize, tile_type: TileType, start: Edge, end: Edge) -> PathItemState {
        let tile = Tile::with_segments(row, col, 10.0, tile_type.segments());
        resolve(&tile, Segment::new(start, end))
            .unwrap_or_else(|| panic!("{start:?} -> {end:?} unresolved"))
    }

    fn path(items: Vec<PathItemState>, speed: f64) -> LightPath {
        LightPath::new(items, speed, &mut FirstChoice)
    }

    // Tests an empty path is done on construction and draws nothing
    // Verified by initializing done to false
    #[test]
    fn test_empty_path_is_done() {
        let mut light = path(Vec::new(), 1.0);
        assert!(light.is_done());

        let mut surface = CommandRecorder::new();
        light.advance(&mut surface, &FirstChoice, 1.0);
        assert!(surface.commands().is_empty());
        assert_eq!(light.current_index(), 0);
    }

    // Tests noise coordinates are drawn from their channel ranges
    // Verified by drawing brightness from the full channel range
    #[test]
    fn test_noise_coordinates_start_in_range() {
        let light = path(Vec::new(), 1.0);
        assert_eq!(light.noise_coordinates(), [0.0, 0.0, 50.0]);
        assert!(!light.budget_exhausted());
        assert!(light.with_budget_exhausted(true).budget_exhausted());
    }

    // Tests color channels wrap hue and saturation and clamp brightness
    // Verified by wrapping brightness like the other channels
    #[test]
    fn test_color_mapping() {
        let light = path(Vec::new(), 1.0);
        assert_eq!(light.color(&FirstChoice), Hsb::new(0.0, 0.0, 100.0));

        let color = light.color(&FixedNoise(0.3));
        assert!((color.hue - 60.0).abs() < 1e-9);
        assert!((color.saturation - 60.0).abs() < 1e-9);
        assert!((color.brightness - 60.0).abs() < 1e-9);

        let color = light.color(&FixedNoise(0.75));
        assert!((color.hue - 50.0).abs() < 1e-9);
        assert!((color.brightness - 100.0).abs() < 1e-9);
    }

    // Tests a vertical line at half progress reaches the tile center
    // Verified by drawing the full connector regardless of progress
    #[test]
    fn test_top_to_bottom_at_half_progress() {
        let mut light = path(
            vec![item(0, 0, TileType::TopBottom, Edge::Top, Edge::Bottom)],
            0.5,
        );
        let mut surface = CommandRecorder::new();

        light.advance(&mut surface, &FirstChoice, 1.0);
        assert!((light.current_progress() - 0.5).abs() < f64::EPSILON);
        surface.clear();
        light.advance(&mut surface, &FirstChoice, 1.0);

        assert_eq!(
            surface.lines(),
            vec![(Point::new(5.0, 0.0), Point::new(5.0, 5.0))]
        );
        assert!(surface.commands().contains(&DrawCommand::StrokeWeight(LIGHT_STROKE_WEIGHT)));
        assert_eq!(light.current_index(), 0);
        assert!(!light.is_done());
    }

    // Tests mirrored lines grow towards their end point
    // Verified by ignoring the scale factor of straight lines
    #[test]
    fn test_bottom_to_top_line_is_mirrored() {
        let mut light = path(
            vec![item(0, 0, TileType::TopBottom, Edge::Bottom, Edge::Top)],
            0.25,
        );
        let mut surface = CommandRecorder::new();
        light.advance(&mut surface, &FirstChoice, 1.0);
        surface.clear();
        light.advance(&mut surface, &FirstChoice, 1.0);

        assert_eq!(
            surface.lines(),
            vec![(Point::new(5.0, 10.0), Point::new(5.0, 7.5))]
        );
    }

    // Tests curved connectors sweep from their start angle around the corner
    // Verified by translating after scaling
    #[test]
    fn test_arc_sweep_at_half_progress() {
        let mut light = path(
            vec![item(0, 0, TileType::TopRight, Edge::Top, Edge::Right)],
            0.5,
        );
        let mut surface = CommandRecorder::new();
        light.advance(&mut surface, &FirstChoice, 1.0);
        surface.clear();
        light.advance(&mut surface, &FirstChoice, 1.0);

        let arcs: Vec<&DrawCommand> = surface
            .commands()
            .iter()
            .filter(|command| matches!(command, DrawCommand::Arc { .. }))
            .collect();
        assert_eq!(arcs.len(), 1);
        if let Some(DrawCommand::Arc {
            center,
            width,
            start,
            stop,
            scale,
            ..
        }) = arcs.first()
        {
            assert_eq!(*center, Point::new(10.0, 0.0));
            assert!((width - 10.0).abs() < f64::EPSILON);
            assert!(start.abs() < f64::EPSILON);
            assert!((stop - FRAC_PI_4).abs() < 1e-12);
            assert_eq!(*scale, Point::new(-1.0, 1.0));
        }
        assert_eq!(surface.depth(), 0);
    }

    // Tests a single tile path finishes on the frame its index passes the end
    // Verified by requiring an extra frame after the index moves
    #[test]
    fn test_single_item_finishes_with_index_step() {
        let mut light = path(
            vec![item(0, 0, TileType::LeftRight, Edge::Left, Edge::Right)],
            0.3,
        );
        let mut surface = CommandRecorder::new();

        for _ in 0..3 {
            light.advance(&mut surface, &FirstChoice, 1.0);
        }
        assert_eq!(light.current_index(), 0);
        assert!(!light.is_done());

        light.advance(&mut surface, &FirstChoice, 1.0);
        assert_eq!(light.current_index(), 1);
        assert!(light.current_progress().abs() < f64::EPSILON);
        assert!(light.is_done());
    }

    // Tests the trail in the previous tile is withdrawn before the path finishes
    // Verified by finishing as soon as the index passes the end
    #[test]
    fn test_trail_is_withdrawn_before_done() {
        let mut light = path(
            vec![
                item(0, 0, TileType::LeftRight, Edge::Left, Edge::Right),
                item(0, 1, TileType::LeftRight, Edge::Left, Edge::Right),
            ],
            0.6,
        );
        let mut surface = CommandRecorder::new();

        let mut frames = 0;
        while !light.is_done() && frames < 20 {
            surface.clear();
            light.advance(&mut surface, &FirstChoice, 1.0);
            frames += 1;

            if frames == 3 {
                // Head enters the second tile while the first still shows its trail
                assert_eq!(
                    surface.lines(),
                    vec![
                        (Point::new(10.0, 5.0), Point::new(10.0, 5.0)),
                        (Point::new(10.0, 5.0), Point::new(0.0, 5.0)),
                    ]
                );
            }
            if frames == 5 {
                assert_eq!(light.current_index(), 2);
                assert_eq!(surface.lines().len(), 1);
            }
        }

        assert_eq!(frames, 7);
        assert_eq!(light.current_index(), 3);
    }

    // Tests the speed factor scales progress and noise movement alike
    // Verified by advancing noise at the unscaled speed
    #[test]
    fn test_speed_factor_scales_step() {
        let mut light = path(
            vec![item(0, 0, TileType::LeftRight, Edge::Left, Edge::Right)],
            2.0,
        );
        let mut surface = CommandRecorder::new();
        light.advance(&mut surface, &FirstChoice, 0.05);

        assert!((light.current_progress() - 0.1).abs() < 1e-12);
        let [hue, saturation, brightness] = light.noise_coordinates();
        assert!((hue - 0.1).abs() < 1e-12);
        assert!((saturation - 0.1).abs() < 1e-12);
        assert!((brightness - 50.1).abs() < 1e-12);
    }
}
