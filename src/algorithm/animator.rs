//! Frame-by-frame animation of a light along a path
//!
//! Each frame grows the connector of the current tile by the current progress and
//! withdraws the trail left in the previous tile by the same amount. When progress
//! passes one the light moves to the next tile.

use crate::algorithm::geometry::{PathItemState, Stroke};
use crate::algorithm::random::RandomSource;
use crate::io::configuration::{HSB_COLOR_MAX, LIGHT_STROKE_WEIGHT};
use crate::io::surface::RenderSurface;
use crate::math::color::Hsb;
use crate::math::interpolation::map_range;
use crate::spatial::tiles::Point;

/// A light travelling along an ordered list of tiles
#[derive(Debug, Clone)]
pub struct LightPath {
    items: Vec<PathItemState>,
    speed: f64,
    hue_noise: f64,
    saturation_noise: f64,
    brightness_noise: f64,
    current_index: usize,
    current_progress: f64,
    done: bool,
    budget_exhausted: bool,
}

impl LightPath {
    /// Create a path positioned at the start of its first tile
    ///
    /// Noise coordinates for the three color channels are drawn from `random`. A path
    /// without items is done immediately.
    pub fn new<R: RandomSource>(items: Vec<PathItemState>, speed: f64, random: &mut R) -> Self {
        let hue_noise = random.random_range(0.0, HSB_COLOR_MAX);
        let saturation_noise = random.random_range(0.0, HSB_COLOR_MAX);
        let brightness_noise = random.random_range(HSB_COLOR_MAX / 2.0, HSB_COLOR_MAX);
        let done = items.is_empty();

        Self {
            items,
            speed,
            hue_noise,
            saturation_noise,
            brightness_noise,
            current_index: 0,
            current_progress: 0.0,
            done,
            budget_exhausted: false,
        }
    }

    /// Mark whether generation stopped at the iteration limit
    #[must_use]
    pub fn with_budget_exhausted(mut self, exhausted: bool) -> Self {
        self.budget_exhausted = exhausted;
        self
    }

    /// Stroke color for the current noise coordinates
    pub fn color<R: RandomSource>(&self, random: &R) -> Hsb {
        let channel =
            |seed: f64| map_range(random.noise(seed), 0.0, 1.0, 0.0, HSB_COLOR_MAX * 2.0);

        Hsb::new(
            channel(self.hue_noise) % HSB_COLOR_MAX,
            channel(self.saturation_noise) % HSB_COLOR_MAX,
            channel(self.brightness_noise).min(HSB_COLOR_MAX),
        )
    }

    /// Draw one frame and move the light forward
    ///
    /// Does nothing once the path is done.
    pub fn advance<S: RenderSurface, R: RandomSource>(
        &mut self,
        surface: &mut S,
        random: &R,
        speed_factor: f64,
    ) {
        if self.done {
            return;
        }

        surface.stroke(self.color(random));
        surface.stroke_weight(LIGHT_STROKE_WEIGHT);

        let progress = self.current_progress;
        if let Some(item) = self.items.get(self.current_index) {
            draw_leading(surface, item, progress);
        }
        let previous = self
            .current_index
            .checked_sub(1)
            .and_then(|index| self.items.get(index));
        if let Some(item) = previous {
            draw_trailing(surface, item, progress);
        }
        let had_previous = previous.is_some();

        let step = self.speed * speed_factor;
        self.current_progress += step;
        self.hue_noise += step;
        self.saturation_noise += step;
        self.brightness_noise += step;

        if self.current_progress > 1.0 {
            self.current_progress = 0.0;
            self.current_index += 1;
        }
        if self.current_index >= self.items.len() && !had_previous {
            self.done = true;
        }
    }

    /// Tiles visited by the light, in order
    pub fn items(&self) -> &[PathItemState] {
        &self.items
    }

    /// Progress added per frame before the speed factor
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Index of the tile the light is entering
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Fraction of the current tile already covered
    pub const fn current_progress(&self) -> f64 {
        self.current_progress
    }

    /// Whether the light has left the grid
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Whether generation stopped at the iteration limit with a continuation left
    pub const fn budget_exhausted(&self) -> bool {
        self.budget_exhausted
    }

    /// Current hue, saturation and brightness noise coordinates
    pub const fn noise_coordinates(&self) -> [f64; 3] {
        [self.hue_noise, self.saturation_noise, self.brightness_noise]
    }
}

fn draw_leading<S: RenderSurface>(surface: &mut S, item: &PathItemState, progress: f64) {
    let start = item.line_start;
    match item.stroke {
        Stroke::Arc { angle, .. } => {
            let size = item.tile.size();
            surface.push();
            surface.translate(start);
            surface.scale(item.scale.x, item.scale.y);
            surface.arc(
                Point::new(0.0, 0.0),
                size,
                size,
                angle.start,
                angle.span().mul_add(progress, angle.start),
            );
            surface.pop();
        }
        Stroke::Line { end } => {
            let dx = (start.x - end.x).abs() * progress;
            let dy = (start.y - end.y).abs() * progress;
            surface.line(
                start,
                Point::new(
                    dx.mul_add(item.scale.x, start.x),
                    dy.mul_add(item.scale.y, start.y),
                ),
            );
        }
    }
}

fn draw_trailing<S: RenderSurface>(surface: &mut S, item: &PathItemState, progress: f64) {
    let start = item.line_start;
    match item.stroke {
        Stroke::Arc { reverse, .. } => {
            let size = item.tile.size();
            surface.push();
            surface.translate(start);
            surface.scale(item.reverse_scale.x, item.reverse_scale.y);
            surface.arc(
                Point::new(0.0, 0.0),
                size,
                size,
                reverse.start,
                reverse.span().mul_add(-progress, reverse.end),
            );
            surface.pop();
        }
        Stroke::Line { end } => {
            let dx = (start.x - end.x).abs() * progress;
            let dy = (start.y - end.y).abs() * progress;
            surface.line(
                end,
                Point::new(
                    dx.mul_add(-item.reverse_scale.x, start.x),
                    dy.mul_add(item.reverse_scale.y, start.y),
                ),
            );
        }
    }
}
