//! Palette command implementation.
//!
//! Prints the allowed colour set, optionally extended for this run.

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::Palette;

/// Show the allowed colour set
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Extra colours to allow for this run
    #[arg(long = "with", value_name = "COLOUR")]
    pub with: Vec<String>,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let palette = Palette::default_palette();
    for colour in &args.with {
        palette.add(colour.clone());
    }

    printer.status("Allowed", &plural(palette.len(), "colour", "colours"));

    for colour in palette.colours() {
        println!("{}", colour);
    }

    Ok(())
}
