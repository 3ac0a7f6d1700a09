//! Rendering surface abstraction and a command-recording implementation

use crate::math::color::Hsb;
use crate::spatial::tiles::Point;

/// Drawing operations the light rail renderer needs
///
/// Coordinates pass through the current transform, which starts as the identity and is
/// changed by [`RenderSurface::translate`] and [`RenderSurface::scale`] between matching
/// [`RenderSurface::push`] and [`RenderSurface::pop`] calls.
pub trait RenderSurface {
    /// Set the stroke color for subsequent draws
    fn stroke(&mut self, color: Hsb);

    /// Set the stroke width in pixels
    fn stroke_weight(&mut self, weight: f64);

    /// Stroke a straight line
    fn line(&mut self, from: Point, to: Point);

    /// Stroke an elliptical arc
    ///
    /// Angles are in radians, measured from the positive x axis towards positive y.
    /// Nothing is drawn unless `stop` is greater than `start`.
    fn arc(&mut self, center: Point, width: f64, height: f64, start: f64, stop: f64);

    /// Save the current transform
    fn push(&mut self);

    /// Restore the most recently saved transform
    fn pop(&mut self);

    /// Move the origin
    fn translate(&mut self, offset: Point);

    /// Scale both axes independently
    fn scale(&mut self, x: f64, y: f64);
}

/// Affine transform restricted to translation and per-axis scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Origin in surface coordinates
    pub origin: Point,
    /// Per-axis scale factors
    pub scale: Point,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            origin: Point::new(0.0, 0.0),
            scale: Point::new(1.0, 1.0),
        }
    }
}

impl Transform {
    /// Map a local point into surface coordinates
    pub fn apply(&self, point: Point) -> Point {
        Point::new(
            point.x.mul_add(self.scale.x, self.origin.x),
            point.y.mul_add(self.scale.y, self.origin.y),
        )
    }

    /// Compose a translation expressed in local coordinates
    #[must_use]
    pub fn translated(&self, offset: Point) -> Self {
        Self {
            origin: self.apply(offset),
            scale: self.scale,
        }
    }

    /// Compose a scale expressed in local coordinates
    #[must_use]
    pub fn scaled(&self, x: f64, y: f64) -> Self {
        Self {
            origin: self.origin,
            scale: Point::new(self.scale.x * x, self.scale.y * y),
        }
    }
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Stroke color change
    Stroke(Hsb),
    /// Stroke width change
    StrokeWeight(f64),
    /// Line in surface coordinates
    Line {
        /// First endpoint
        from: Point,
        /// Second endpoint
        to: Point,
    },
    /// Arc with its center in surface coordinates
    Arc {
        /// Center after the transform
        center: Point,
        /// Horizontal diameter after scaling
        width: f64,
        /// Vertical diameter after scaling
        height: f64,
        /// Sweep start in radians
        start: f64,
        /// Sweep stop in radians
        stop: f64,
        /// Scale in effect, whose signs mirror the sweep
        scale: Point,
    },
}

/// Surface that records draw calls instead of rasterizing them
///
/// Transforms are resolved at record time, so lines and arc centers are stored in
/// surface coordinates.
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
    transform: Transform,
    saved: Vec<Transform>,
}

impl CommandRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded so far
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Recorded lines as `(from, to)` pairs
    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Line { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// Number of recorded arcs
    pub fn arc_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Arc { .. }))
            .count()
    }

    /// Most recent stroke color
    pub fn last_stroke(&self) -> Option<Hsb> {
        self.commands.iter().rev().find_map(|command| match command {
            DrawCommand::Stroke(color) => Some(*color),
            _ => None,
        })
    }

    /// Depth of saved transforms
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Forget recorded commands, keeping the transform state
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl RenderSurface for CommandRecorder {
    fn stroke(&mut self, color: Hsb) {
        self.commands.push(DrawCommand::Stroke(color));
    }

    fn stroke_weight(&mut self, weight: f64) {
        self.commands.push(DrawCommand::StrokeWeight(weight));
    }

    fn line(&mut self, from: Point, to: Point) {
        self.commands.push(DrawCommand::Line {
            from: self.transform.apply(from),
            to: self.transform.apply(to),
        });
    }

    fn arc(&mut self, center: Point, width: f64, height: f64, start: f64, stop: f64) {
        self.commands.push(DrawCommand::Arc {
            center: self.transform.apply(center),
            width: width * self.transform.scale.x.abs(),
            height: height * self.transform.scale.y.abs(),
            start,
            stop,
            scale: self.transform.scale,
        });
    }

    fn push(&mut self) {
        self.saved.push(self.transform);
    }

    fn pop(&mut self) {
        self.transform = self.saved.pop().unwrap_or_default();
    }

    fn translate(&mut self, offset: Point) {
        self.transform = self.transform.translated(offset);
    }

    fn scale(&mut self, x: f64, y: f64) {
        self.transform = self.transform.scaled(x, y);
    }
}
