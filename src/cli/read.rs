//! Recognizing a glyph image (`cistercian read ...`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use cistercian::{ImageRenderOptions, Layout, StampOptions, read_glyph};

use crate::cli::common::LayoutArg;

/// Args for `cistercian read`.
#[derive(Args, Debug)]
pub struct ReadArgs {
    /// PNG or JPEG image holding one glyph.
    pub image: PathBuf,
    /// How to locate the glyph.
    #[arg(long, default_value_t = LayoutArg::Auto, value_enum)]
    pub layout: LayoutArg,
    /// Pixel scale of a stamped image.
    #[arg(long, default_value_t = 1)]
    pub scale: u32,
}

/// Execute `cistercian read`.
pub fn handle(args: ReadArgs) -> Result<()> {
    let image = image::open(&args.image)
        .with_context(|| format!("failed to open {}", args.image.display()))?;
    let layout = match args.layout {
        LayoutArg::Auto => Layout::detect(&image)?,
        LayoutArg::Painted => ImageRenderOptions {
            width: image.width(),
            height: image.height(),
            ..Default::default()
        }
        .layout(),
        LayoutArg::Stamped => StampOptions { scale: args.scale }.layout(),
    };
    let number = read_glyph(&image, &layout)
        .with_context(|| format!("failed to read a numeral from {}", args.image.display()))?;
    println!("{number}");
    Ok(())
}
