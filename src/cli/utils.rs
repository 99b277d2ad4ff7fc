//! Convenience helpers shared across command handlers.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use image::DynamicImage;

/// Persist a string either to a file or stdout when `-` is provided.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if path.as_os_str() == "-" {
        io::stdout().write_all(content.as_bytes())?;
        return Ok(());
    }
    ensure_parent(path)?;
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

/// Save an image, inferring the encoding from the file extension.
pub fn save_image(image: &DynamicImage, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory {}", parent.display())
            })?;
        }
    }
    Ok(())
}
