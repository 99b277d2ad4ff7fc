//! Rendering a single number (`cistercian render ...`).

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;
use cistercian::{
    Color, Glyph, ImageRenderOptions, StampOptions, SvgOptions, parse_number, render_glyph_image,
    render_svg_string, render_text, stamp_glyph,
};
use image::DynamicImage;

use crate::cli::common::{FormatArg, TextStyleArg};
use crate::cli::utils::{save_image, write_output};

/// Args for `cistercian render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Number to draw, 0-9999.
    #[arg(value_parser = parse_number, allow_negative_numbers = true)]
    pub number: u16,
    /// Output format.
    #[arg(long, default_value_t = FormatArg::Text, value_enum)]
    pub format: FormatArg,
    /// Character set for text output.
    #[arg(long, default_value_t = TextStyleArg::Ascii, value_enum)]
    pub style: TextStyleArg,
    /// Line width in px.
    #[arg(long = "stroke-width", default_value_t = 10)]
    pub stroke_width: u32,
    /// Line color as #rgb or #rrggbb.
    #[arg(long = "stroke-color", default_value = "#000000")]
    pub stroke_color: Color,
    /// Background color; SVG output is transparent without it.
    #[arg(long)]
    pub background: Option<Color>,
    /// Canvas width in px (svg: 200, png: 256).
    #[arg(long)]
    pub width: Option<u32>,
    /// Canvas height in px (svg: 280, png: 256).
    #[arg(long)]
    pub height: Option<u32>,
    /// Pixel scale for stamped output.
    #[arg(long, default_value_t = 1)]
    pub scale: u32,
    /// Output file (`-` for stdout). Required for png and stamp.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

/// Execute `cistercian render`.
pub fn handle(args: RenderArgs) -> Result<()> {
    let glyph = Glyph::from_number(i64::from(args.number))?;
    match args.format {
        FormatArg::Text => emit(&args, &render_text(&glyph, args.style.into())),
        FormatArg::Svg => {
            let defaults = SvgOptions::default();
            let options = SvgOptions {
                width: args.width.unwrap_or(defaults.width),
                height: args.height.unwrap_or(defaults.height),
                stroke_width: args.stroke_width,
                stroke_color: args.stroke_color,
                background: args.background,
                ..defaults
            };
            let mut markup = render_svg_string(&glyph, &options);
            markup.push('\n');
            emit(&args, &markup)
        }
        FormatArg::Png => {
            let defaults = ImageRenderOptions::default();
            let options = ImageRenderOptions {
                width: args.width.unwrap_or(defaults.width),
                height: args.height.unwrap_or(defaults.height),
                stroke_width: args.stroke_width,
                stroke_color: args.stroke_color,
                background: args.background.unwrap_or(defaults.background),
                ..defaults
            };
            let image = render_glyph_image(&glyph, &options)?;
            write_image(&args, &image)
        }
        FormatArg::Stamp => {
            let options = StampOptions { scale: args.scale };
            let image = DynamicImage::ImageLuma8(stamp_glyph(glyph.digits(), &options));
            write_image(&args, &image)
        }
    }
}

fn emit(args: &RenderArgs, content: &str) -> Result<()> {
    match &args.output {
        Some(path) => write_output(path, content),
        None => {
            print!("{content}");
            Ok(())
        }
    }
}

fn write_image(args: &RenderArgs, image: &DynamicImage) -> Result<()> {
    let Some(path) = args.output.as_deref().filter(|p| p.as_os_str() != "-") else {
        bail!("--format png and --format stamp need an output file (-o PATH)");
    };
    save_image(image, path)?;
    println!("Rendered {} to {}", args.number, path.display());
    Ok(())
}
