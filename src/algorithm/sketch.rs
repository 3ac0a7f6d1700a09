//! Sketch driver tying grid collapse, path generation and animation together

use tracing::{debug, warn};

use crate::algorithm::animator::LightPath;
use crate::algorithm::collapse::{GridGenerator, check_tile_size};
use crate::algorithm::random::RandomSource;
use crate::algorithm::traversal::PathGenerator;
use crate::io::configuration::{
    DEFAULT_COLS, DEFAULT_LIGHTS, DEFAULT_ROWS, DEFAULT_SPEED_FACTOR, DEFAULT_TILE_SIZE,
    PATH_GENERATION_ATTEMPTS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::scene;
use crate::io::surface::RenderSurface;
use crate::spatial::grid::TileGrid;

/// Runtime parameters of a sketch
#[derive(Debug, Clone, PartialEq)]
pub struct SketchConfig {
    /// Grid rows
    pub rows: usize,
    /// Grid columns
    pub cols: usize,
    /// Tile side length in pixels
    pub tile_size: f64,
    /// Lights animated at the same time
    pub lights: usize,
    /// Multiplier applied to every light's speed each frame
    pub speed_factor: f64,
    /// Generation attempts before a light slot is given up
    pub path_attempts: usize,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tile_size: DEFAULT_TILE_SIZE,
            lights: DEFAULT_LIGHTS,
            speed_factor: DEFAULT_SPEED_FACTOR,
            path_attempts: PATH_GENERATION_ATTEMPTS,
        }
    }
}

impl SketchConfig {
    /// Check the parameters that grid construction does not cover
    ///
    /// # Errors
    ///
    /// Returns an error if there are no lights, the speed factor is not a positive
    /// finite number, no generation attempt is allowed, or the tile size is invalid
    /// for the grid (see [`check_tile_size`])
    pub fn validate(&self) -> Result<()> {
        if self.lights == 0 {
            return Err(invalid_parameter(
                "lights",
                &self.lights,
                &"at least one light is required",
            ));
        }
        if !self.speed_factor.is_finite() || self.speed_factor <= 0.0 {
            return Err(invalid_parameter(
                "speed_factor",
                &self.speed_factor,
                &"must be a positive number",
            ));
        }
        if self.path_attempts == 0 {
            return Err(invalid_parameter(
                "path_attempts",
                &self.path_attempts,
                &"at least one attempt is required",
            ));
        }
        check_tile_size(self.rows, self.cols, self.tile_size)
    }
}

/// A solved grid with lights running over it
///
/// Finished lights are replaced with fresh paths on the next frame. Spawning stops for
/// good when the grid offers no path, when a path exhausts the iteration budget, or
/// when generation keeps failing.
pub struct Sketch<R> {
    config: SketchConfig,
    random: R,
    grid: TileGrid,
    paths: PathGenerator,
    lights: Vec<LightPath>,
    contradictions: usize,
    halted: bool,
}

impl<R: RandomSource> Sketch<R> {
    /// Collapse a new grid and spawn the initial lights
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or grid dimensions are invalid
    pub fn new(config: SketchConfig, mut random: R) -> Result<Self> {
        config.validate()?;

        let mut generator = GridGenerator::new(config.rows, config.cols, config.tile_size)?;
        generator.initialize();
        generator.collapse(&mut random);
        let contradictions = generator.contradictions().len();

        Ok(Self::from_parts(
            config,
            random,
            generator.into_grid(),
            contradictions,
        ))
    }

    /// Run lights over an already solved grid
    ///
    /// The grid's dimensions and tile size replace those in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the grid has uncollapsed tiles
    pub fn with_grid(mut config: SketchConfig, random: R, grid: TileGrid) -> Result<Self> {
        if !grid.is_solved() {
            return Err(invalid_parameter(
                "grid",
                &format!("{}x{}", grid.rows(), grid.cols()),
                &"every tile must be collapsed",
            ));
        }

        config.rows = grid.rows();
        config.cols = grid.cols();
        config.tile_size = grid.tile_size();
        config.validate()?;
        Ok(Self::from_parts(config, random, grid, 0))
    }

    fn from_parts(config: SketchConfig, random: R, grid: TileGrid, contradictions: usize) -> Self {
        let paths = PathGenerator::new(&grid);

        debug!(
            rows = config.rows,
            cols = config.cols,
            lights = config.lights,
            contradictions,
            "sketch initialized"
        );

        let mut sketch = Self {
            lights: Vec::with_capacity(config.lights),
            config,
            random,
            grid,
            paths,
            contradictions,
            halted: false,
        };
        sketch.fill_lights();
        sketch
    }

    /// The solved grid
    pub const fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Draw the static grid
    pub fn draw_grid<S: RenderSurface>(&self, surface: &mut S) {
        scene::draw_grid(surface, &self.grid);
    }

    /// Draw one frame of every light, then replace finished ones
    pub fn advance_lights<S: RenderSurface>(&mut self, surface: &mut S) {
        for light in &mut self.lights {
            light.advance(surface, &self.random, self.config.speed_factor);
        }
        self.lights.retain(|light| !light.is_done());
        self.fill_lights();
    }

    /// Lights currently running
    pub fn lights(&self) -> &[LightPath] {
        &self.lights
    }

    /// Tiles whose required edges could not all be paired during collapse
    pub const fn contradictions(&self) -> usize {
        self.contradictions
    }

    /// Whether new lights will no longer be spawned
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Whether spawning has stopped and every light has finished
    pub fn is_finished(&self) -> bool {
        self.halted && self.lights.is_empty()
    }

    fn fill_lights(&mut self) {
        while !self.halted && self.lights.len() < self.config.lights {
            match self.spawn() {
                Some(light) => self.lights.push(light),
                None => self.halted = true,
            }
        }
    }

    fn spawn(&mut self) -> Option<LightPath> {
        for attempt in 1..=self.config.path_attempts {
            match self.paths.generate(&mut self.random) {
                Ok(light) if light.items().is_empty() => {
                    debug!("no path available, spawning stopped");
                    return None;
                }
                Ok(light) => {
                    if light.budget_exhausted() {
                        self.halted = true;
                    }
                    return Some(light);
                }
                Err(error) => warn!(attempt, %error, "failed generating light path"),
            }
        }
        None
    }
}
