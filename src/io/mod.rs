/// Command-line interface and render driver
pub mod cli;
/// Compile-time defaults and constants
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG export
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Frame rendering progress display
pub mod progress;
/// Image-backed rendering surface
pub mod raster;
/// Static tile and grid drawing
pub mod scene;
/// Rendering surface trait and recording surface
pub mod surface;
/// GIF capture and export
pub mod visualization;
