//! Describing a glyph (`cistercian inspect ...`).

use anyhow::Result;
use clap::Args;
use cistercian::{Glyph, Place, parse_number};

/// Args for `cistercian inspect`.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Number to describe, 0-9999.
    #[arg(value_parser = parse_number, allow_negative_numbers = true)]
    pub number: u16,
}

/// Execute `cistercian inspect`.
pub fn handle(args: InspectArgs) -> Result<()> {
    let glyph = Glyph::from_number(i64::from(args.number))?;
    let digits = glyph.digits();
    let mask = glyph.mask();

    let mut output = format!("Number {}\n", glyph.number());
    for place in Place::ALL.iter().rev() {
        output.push_str(&format!(
            "  {:<9} {} segments {}\n",
            place.name(),
            digits.get(*place),
            mask.place(*place)
        ));
    }
    output.push_str(&format!("Mask {mask}\n"));
    output.push_str(&format!("Strokes ({}):\n", glyph.stroke_count()));
    for stroke in glyph.iter() {
        output.push_str(&format!("  {stroke}\n"));
    }
    print!("{output}");
    Ok(())
}
