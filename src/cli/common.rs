//! Shared clap helper types for CLI commands.

use clap::ValueEnum;
use cistercian::{OutputForm, TextStyle};

/// Output produced by `render`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Svg,
    Png,
    Stamp,
}

/// Character sets for text output.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum TextStyleArg {
    Ascii,
    Blocks,
}

impl From<TextStyleArg> for TextStyle {
    fn from(value: TextStyleArg) -> TextStyle {
        match value {
            TextStyleArg::Ascii => TextStyle::Ascii,
            TextStyleArg::Blocks => TextStyle::Blocks,
        }
    }
}

/// File kinds written by `batch`.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormArg {
    Png,
    Stamp,
    Svg,
}

impl From<OutputFormArg> for OutputForm {
    fn from(value: OutputFormArg) -> OutputForm {
        match value {
            OutputFormArg::Png => OutputForm::Png,
            OutputFormArg::Stamp => OutputForm::Stamp,
            OutputFormArg::Svg => OutputForm::Svg,
        }
    }
}

/// How `read` locates the glyph inside an image.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum LayoutArg {
    /// Measure the glyph from its ink.
    Auto,
    /// Assume the default painted canvas padding.
    Painted,
    /// Assume a stamped image at `--scale`.
    Stamped,
}
