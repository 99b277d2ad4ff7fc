//! Rendering many numbers at once (`cistercian batch ...`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use cistercian::{parse_number, render_batch};

use crate::cli::common::OutputFormArg;

/// Args for `cistercian batch`.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Numbers to draw, 0-9999 each.
    #[arg(required = true, num_args = 1.., value_parser = parse_number, allow_negative_numbers = true)]
    pub numbers: Vec<u16>,
    /// Directory receiving the files and `manifest.json`.
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,
    /// Kind of file to write.
    #[arg(long, default_value_t = OutputFormArg::Png, value_enum)]
    pub form: OutputFormArg,
}

/// Execute `cistercian batch`.
pub fn handle(args: BatchArgs) -> Result<()> {
    let numbers: Vec<i64> = args.numbers.iter().map(|n| i64::from(*n)).collect();
    let manifest = render_batch(&numbers, &args.output, args.form.into())
        .with_context(|| format!("failed to render batch into {}", args.output.display()))?;
    println!(
        "Rendered {} glyph(s) to {}",
        manifest.entries.len(),
        args.output.display()
    );
    Ok(())
}
