//! Command-line interface for rendering light rail animations

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use crate::algorithm::random::{RandomSource, SeededRandom};
use crate::algorithm::sketch::{Sketch, SketchConfig};
use crate::io::configuration::{
    DEFAULT_COLS, DEFAULT_FRAMES, DEFAULT_LIGHTS, DEFAULT_LOG_LEVEL, DEFAULT_OUTPUT,
    DEFAULT_ROWS, DEFAULT_SEED, DEFAULT_SPEED_FACTOR, DEFAULT_TILE_SIZE, GIF_FRAME_DELAY_MS,
    PATH_GENERATION_ATTEMPTS,
};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::image::export_png;
use crate::io::progress::ProgressManager;
use crate::io::raster::RasterSurface;
use crate::io::visualization::FrameCapture;

#[derive(Parser, Debug)]
#[command(name = "lightrail")]
#[command(
    author,
    version,
    about = "Render lights travelling over a randomly collapsed rail grid"
)]
/// Command-line arguments for the animation renderer
pub struct Cli {
    /// Output GIF path
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Grid rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Grid columns
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Tile side length in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: f64,

    /// Random seed for reproducible output
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum number of frames to render
    #[arg(short, long, default_value_t = DEFAULT_FRAMES)]
    pub frames: usize,

    /// Multiplier applied to every light's speed each frame
    #[arg(long, default_value_t = DEFAULT_SPEED_FACTOR)]
    pub speed_factor: f64,

    /// Lights running at the same time
    #[arg(short, long, default_value_t = DEFAULT_LIGHTS)]
    pub lights: usize,

    /// Also save the static grid as a PNG
    #[arg(long, value_name = "PNG")]
    pub grid_png: Option<PathBuf>,

    /// Print the solved grid to stdout
    #[arg(long)]
    pub print_grid: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Cli {
    /// Validate the sketch parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the frame count is zero or the sketch parameters are invalid
    pub fn sketch_config(&self) -> Result<SketchConfig> {
        if self.frames == 0 {
            return Err(invalid_parameter(
                "frames",
                &self.frames,
                &"at least one frame is required",
            ));
        }

        let config = SketchConfig {
            rows: self.rows,
            cols: self.cols,
            tile_size: self.tile_size,
            lights: self.lights,
            speed_factor: self.speed_factor,
            path_attempts: PATH_GENERATION_ATTEMPTS,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Render up to `frames` frames of a sketch
///
/// The static grid is drawn once and restored under every frame. Rendering stops early
/// once the sketch has no light left to animate.
pub fn render_frames<R: RandomSource>(
    sketch: &mut Sketch<R>,
    frames: usize,
    progress: &ProgressManager,
) -> FrameCapture {
    let mut surface = RasterSurface::for_grid(sketch.grid());
    sketch.draw_grid(&mut surface);
    let background = surface.image().clone();

    let mut capture = FrameCapture::new(GIF_FRAME_DELAY_MS, frames);
    for _ in 0..frames {
        surface.restore(&background);
        sketch.advance_lights(&mut surface);
        capture.push(surface.image().clone());
        progress.frame_rendered();

        if sketch.is_finished() {
            break;
        }
    }

    capture
}

/// Runs one render from parsed arguments
pub struct Renderer {
    cli: Cli,
}

impl Renderer {
    /// Create a renderer for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Collapse a grid, animate its lights and write the outputs
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or an output cannot be written
    pub fn run(&self) -> Result<()> {
        let config = self.cli.sketch_config()?;
        let mut sketch = Sketch::new(config, SeededRandom::new(self.cli.seed))?;

        if self.cli.print_grid {
            write!(std::io::stdout().lock(), "{}", sketch.grid())
                .map_err(|e| file_system_error("<stdout>", "write grid", e))?;
        }

        if let Some(path) = &self.cli.grid_png {
            let mut surface = RasterSurface::for_grid(sketch.grid());
            sketch.draw_grid(&mut surface);
            export_png(surface.image(), path)?;
        }

        let progress = if self.cli.should_show_progress() {
            ProgressManager::new(self.cli.frames, "Rendering")
        } else {
            ProgressManager::hidden()
        };

        let capture = render_frames(&mut sketch, self.cli.frames, &progress);
        progress.set_stage("Encoding");
        capture.export_gif(&self.cli.output)?;
        progress.finish();

        debug!(
            frames = capture.len(),
            contradictions = sketch.contradictions(),
            output = %self.cli.output.display(),
            "render complete"
        );
        Ok(())
    }
}
