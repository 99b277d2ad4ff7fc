//! Command-line interface wiring for the `cistercian` binary.
//!
//! This module owns the clap definitions and delegates execution to one
//! submodule per command.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod batch;
pub mod common;
pub mod inspect;
pub mod read;
pub mod render;
pub mod utils;

/// Parsed CLI entrypoint for the `cistercian` binary.
#[derive(Parser, Debug)]
#[command(
    name = "cistercian",
    version,
    about = "Draw and read Cistercian numerals (0-9999)"
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one number as text, SVG or PNG.
    Render(render::RenderArgs),
    /// Render many numbers into a directory with a manifest.
    Batch(batch::BatchArgs),
    /// Read the number drawn in a PNG or JPEG image.
    Read(read::ReadArgs),
    /// Show the digits, segment mask and strokes of a number.
    Inspect(inspect::InspectArgs),
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render(args) => render::handle(args),
        Command::Batch(args) => batch::handle(args),
        Command::Read(args) => read::handle(args),
        Command::Inspect(args) => inspect::handle(args),
    }
}
