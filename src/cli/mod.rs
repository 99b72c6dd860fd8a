pub mod completions;
pub mod dist;
pub mod palette;
pub mod sort;
pub mod validate;

use clap::{Parser, Subcommand};

/// pt - Colour-tagged 2D point set tool
#[derive(Parser, Debug)]
#[command(name = "pt")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sort point documents by distance from the origin
    Sort(sort::SortArgs),

    /// Compute point distances
    Dist(dist::DistArgs),

    /// Show the allowed colour set
    Palette(palette::PaletteArgs),

    /// Validate point documents without resolving them
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
