//! Tests for surface transforms and the command recorder

#[cfg(test)]
mod tests {
    use lightrail::io::surface::{CommandRecorder, DrawCommand, RenderSurface, Transform};
    use lightrail::math::color::Hsb;
    use lightrail::spatial::tiles::Point;

    // Tests the default transform is the identity
    // Verified by defaulting the scale to zero
    #[test]
    fn test_default_transform_is_identity() {
        let transform = Transform::default();
        assert_eq!(transform.apply(Point::new(3.0, -4.0)), Point::new(3.0, -4.0));
    }

    // Tests translation and scale compose in local coordinates
    // Verified by applying scale after translation to the origin
    #[test]
    fn test_transform_composition() {
        let mirrored = Transform::default()
            .translated(Point::new(2.0, 3.0))
            .scaled(-1.0, 2.0);
        assert_eq!(mirrored.apply(Point::new(1.0, 1.0)), Point::new(1.0, 5.0));

        let scaled_first = Transform::default()
            .scaled(2.0, 2.0)
            .translated(Point::new(1.0, 1.0));
        assert_eq!(scaled_first.origin, Point::new(2.0, 2.0));
        assert_eq!(scaled_first.apply(Point::new(1.0, 0.0)), Point::new(4.0, 2.0));
    }

    // Tests the recorder resolves transforms at record time
    // Verified by recording lines in local coordinates
    #[test]
    fn test_recorder_applies_transform() {
        let mut recorder = CommandRecorder::new();
        recorder.push();
        recorder.translate(Point::new(10.0, 0.0));
        recorder.scale(-1.0, 1.0);
        recorder.line(Point::new(0.0, 0.0), Point::new(4.0, 2.0));
        recorder.arc(Point::new(0.0, 0.0), 6.0, 4.0, 0.0, 1.0);
        assert_eq!(recorder.depth(), 1);
        recorder.pop();
        recorder.line(Point::new(1.0, 1.0), Point::new(2.0, 2.0));

        assert_eq!(
            recorder.lines(),
            vec![
                (Point::new(10.0, 0.0), Point::new(6.0, 2.0)),
                (Point::new(1.0, 1.0), Point::new(2.0, 2.0)),
            ]
        );
        assert_eq!(
            recorder.commands().get(1),
            Some(&DrawCommand::Arc {
                center: Point::new(10.0, 0.0),
                width: 6.0,
                height: 4.0,
                start: 0.0,
                stop: 1.0,
                scale: Point::new(-1.0, 1.0),
            })
        );
        assert_eq!(recorder.depth(), 0);
    }

    // Tests popping without a saved transform falls back to the identity
    // Verified by keeping the current transform on an empty stack
    #[test]
    fn test_unbalanced_pop_resets_transform() {
        let mut recorder = CommandRecorder::new();
        recorder.translate(Point::new(5.0, 5.0));
        recorder.pop();
        recorder.line(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        assert_eq!(
            recorder.lines(),
            vec![(Point::new(0.0, 0.0), Point::new(1.0, 0.0))]
        );
    }

    // Tests style commands are recorded in order and clear keeps the transform
    // Verified by resetting the transform on clear
    #[test]
    fn test_style_commands_and_clear() {
        let mut recorder = CommandRecorder::new();
        recorder.stroke(Hsb::new(10.0, 20.0, 30.0));
        recorder.stroke_weight(3.0);
        recorder.stroke(Hsb::new(40.0, 50.0, 60.0));
        assert_eq!(recorder.last_stroke(), Some(Hsb::new(40.0, 50.0, 60.0)));
        assert_eq!(recorder.commands().get(1), Some(&DrawCommand::StrokeWeight(3.0)));

        recorder.translate(Point::new(1.0, 0.0));
        recorder.clear();
        assert!(recorder.commands().is_empty());
        assert_eq!(recorder.last_stroke(), None);

        recorder.line(Point::new(0.0, 0.0), Point::new(0.0, 1.0));
        assert_eq!(
            recorder.lines(),
            vec![(Point::new(1.0, 0.0), Point::new(1.0, 1.0))]
        );
    }
}
