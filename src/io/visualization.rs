//! Frame capture and GIF generation for light rail animations

use std::fs::File;
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use tracing::debug;

use crate::io::error::{LightRailError, Result, file_system_error, invalid_parameter};

/// Collects rendered frames and encodes them as a looping GIF
#[derive(Debug, Clone)]
pub struct FrameCapture {
    frames: Vec<RgbaImage>,
    delay_ms: u32,
}

impl FrameCapture {
    /// Create an empty capture with a fixed delay between frames
    pub fn new(delay_ms: u32, expected_frames: usize) -> Self {
        Self {
            frames: Vec::with_capacity(expected_frames),
            delay_ms,
        }
    }

    /// Record a rendered frame
    pub fn push(&mut self, frame: RgbaImage) {
        self.frames.push(frame);
    }

    /// Captured frames in order
    pub fn frames(&self) -> &[RgbaImage] {
        &self.frames
    }

    /// Number of captured frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frame has been captured
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Delay between frames in milliseconds
    pub const fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Encode the captured frames as an infinitely looping GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - The parent directory or the file cannot be created
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path) -> Result<()> {
        if self.frames.is_empty() {
            return Err(invalid_parameter(
                "frames",
                &0,
                &"no frames captured for export",
            ));
        }

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }

        let file = File::create(output_path)
            .map_err(|e| file_system_error(output_path, "create file", e))?;

        let image_error = |source| LightRailError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        };

        let mut encoder = GifEncoder::new(file);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(image_error)?;

        let delay = Delay::from_numer_denom_ms(self.delay_ms, 1);
        encoder
            .encode_frames(
                self.frames
                    .iter()
                    .map(|image| Frame::from_parts(image.clone(), 0, 0, delay)),
            )
            .map_err(image_error)?;

        debug!(
            frames = self.frames.len(),
            path = %output_path.display(),
            "animation exported"
        );
        Ok(())
    }
}
