//! PNG export of rendered images

use std::path::Path;

use image::RgbaImage;

use crate::io::error::{LightRailError, Result, file_system_error};

/// Save an image as PNG, creating the parent directory when needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|source| LightRailError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}
