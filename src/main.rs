use clap::Parser;
use miette::Result;
use pt::cli::{Cli, Commands};
use pt::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Sort(args) => pt::cli::sort::run(args, &printer)?,
        Commands::Dist(args) => pt::cli::dist::run(args)?,
        Commands::Palette(args) => pt::cli::palette::run(args, &printer)?,
        Commands::Validate(args) => pt::cli::validate::run(args, &printer)?,
        Commands::Completions(args) => pt::cli::completions::run(args)?,
    }

    Ok(())
}
