//! PNG output of the composed skin

use image::RgbaImage;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error while preparing the output location
    #[error("cannot write '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    /// Image encoding error
    #[error("cannot encode '{path}': {source}")]
    Image {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// Save an RGBA image as PNG, creating missing parent directories.
///
/// The format is chosen from the file extension, so paths without a `.png`
/// extension are still encoded by whatever `image` maps them to.
///
/// # Arguments
///
/// * `image` - The composed skin
/// * `path` - The output file path
///
/// # Returns
///
/// * `Ok(())` on success
/// * `Err(OutputError)` if the directory cannot be created or encoding fails
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    let display = || path.display().to_string();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|source| OutputError::Io { path: display(), source })?;
        }
    }

    image.save(path).map_err(|source| OutputError::Image { path: display(), source })
}
