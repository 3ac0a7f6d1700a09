//! Algorithm constants and runtime configuration defaults

use crate::math::color::Hsb;

// Path generation
/// Maximum number of tiles a single light path may visit
pub const MAX_PATH_ITERATIONS: usize = 100;
/// Lower bound of a light's per-frame step (exclusive upper bound is `MAX_STEP`)
pub const MIN_STEP: f64 = 0.5;
/// Upper bound of a light's per-frame step
pub const MAX_STEP: f64 = 2.0;
/// Attempts made to generate a path before the sketch stops spawning lights
pub const PATH_GENERATION_ATTEMPTS: usize = 3;

// Color
/// Upper bound of every HSB channel
pub const HSB_COLOR_MAX: f64 = 100.0;
/// Color of the static connectors drawn under the lights
pub const DEFAULT_SEGMENT_COLOR: Hsb = Hsb::new(58.0, 18.0, 45.0);
/// Color of the tile outlines
pub const OUTLINE_COLOR: Hsb = Hsb::new(58.6, 31.9, 34.9);
/// Canvas background as RGBA
pub const BACKGROUND_COLOR: [u8; 4] = [0x1b, 0x22, 0x2c, 0xff];

// Stroke weights in pixels
/// Tile outline stroke
pub const OUTLINE_STROKE_WEIGHT: f64 = 2.0;
/// Static connector stroke
pub const SEGMENT_STROKE_WEIGHT: f64 = 4.0;
/// Moving light stroke
pub const LIGHT_STROKE_WEIGHT: f64 = 6.0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 512;
/// Maximum rendered width or height in pixels
pub const MAX_CANVAS_DIMENSION: f64 = 2048.0;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default number of grid rows
pub const DEFAULT_ROWS: usize = 12;
/// Default number of grid columns
pub const DEFAULT_COLS: usize = 16;
/// Default tile side length in pixels
pub const DEFAULT_TILE_SIZE: f64 = 40.0;
/// Default number of rendered frames
pub const DEFAULT_FRAMES: usize = 300;
/// Default multiplier applied to each light's step every frame
pub const DEFAULT_SPEED_FACTOR: f64 = 0.05;
/// Default number of lights travelling at once
pub const DEFAULT_LIGHTS: usize = 1;
/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// Output settings
/// Default animation output path
pub const DEFAULT_OUTPUT: &str = "lightrail.gif";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 40;
/// Width of the frame progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
