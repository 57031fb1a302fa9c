// ABOUTME: Artifact delivery for the carousel-slides application
// ABOUTME: Saves a finished export artifact to disk under its suggested filename

use crate::errors::{CarouselError, Result};
use crate::export::ExportArtifact;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Save an artifact. A directory destination uses the artifact's suggested
/// filename inside it; a file destination is written as given, creating
/// parent directories as needed. Returns the path written.
pub fn deliver(artifact: &ExportArtifact, destination: &Path) -> Result<PathBuf> {
    let path = if destination.is_dir() {
        destination.join(&artifact.filename)
    } else {
        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(CarouselError::FileReadError)?;
            }
        }
        destination.to_path_buf()
    };

    fs::write(&path, &artifact.bytes).map_err(CarouselError::FileReadError)?;
    info!("Saved {} bytes to {:?}", artifact.bytes.len(), path);
    Ok(path)
}
