//! Rendering many numbers into a directory with a JSON manifest.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use image::{DynamicImage, ImageFormat};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::core::{Glyph, RangeError};
use crate::image::{ImageRenderOptions, StampOptions, render_glyph_image, stamp_glyph};
use crate::vector::{SvgOptions, render_svg_string};

pub const MANIFEST_FILE: &str = "manifest.json";

/// Which renderer produces the batch files.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputForm {
    #[default]
    Png,
    Stamp,
    Svg,
}

impl OutputForm {
    pub fn extension(self) -> &'static str {
        match self {
            OutputForm::Png | OutputForm::Stamp => "png",
            OutputForm::Svg => "svg",
        }
    }
}

impl fmt::Display for OutputForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputForm::Png => "png",
            OutputForm::Stamp => "stamp",
            OutputForm::Svg => "svg",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestEntry {
    pub number: u16,
    /// File name relative to the manifest.
    pub file: String,
    pub sha256: String,
}

/// Record of one batch run, saved next to the rendered files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    pub created_at: DateTime<Utc>,
    pub form: OutputForm,
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse manifest {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("failed to write manifest {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).context("failed to serialize manifest")?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

/// Render every number in `numbers` into `dir` and save a manifest there.
///
/// All numbers are checked before the directory is touched, so a bad entry
/// leaves no partial output behind.
pub fn render_batch(numbers: &[i64], dir: &Path, form: OutputForm) -> Result<Manifest> {
    let glyphs = numbers
        .iter()
        .map(|n| Glyph::from_number(*n))
        .collect::<Result<Vec<_>, RangeError>>()?;

    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let mut entries = Vec::with_capacity(glyphs.len());
    for glyph in &glyphs {
        let file = format!("{:04}.{}", glyph.number(), form.extension());
        let bytes = encode(glyph, form)?;
        let path = dir.join(&file);
        fs::write(&path, &bytes).with_context(|| format!("failed to write {}", path.display()))?;
        debug!(file = %file, bytes = bytes.len(), "wrote batch file");
        entries.push(ManifestEntry {
            number: glyph.number(),
            file,
            sha256: sha256_hex(&bytes),
        });
    }

    let manifest = Manifest {
        created_at: Utc::now(),
        form,
        entries,
    };
    manifest.save(&dir.join(MANIFEST_FILE))?;
    info!(count = manifest.entries.len(), dir = %dir.display(), %form, "rendered batch");
    Ok(manifest)
}

fn encode(glyph: &Glyph, form: OutputForm) -> Result<Vec<u8>> {
    let image = match form {
        OutputForm::Svg => {
            return Ok(render_svg_string(glyph, &SvgOptions::default()).into_bytes());
        }
        OutputForm::Png => render_glyph_image(glyph, &ImageRenderOptions::default())?,
        OutputForm::Stamp => {
            DynamicImage::ImageLuma8(stamp_glyph(glyph.digits(), &StampOptions::default()))
        }
    };
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .context("failed to encode png")?;
    Ok(buffer.into_inner())
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}
