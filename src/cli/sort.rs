//! Sort command implementation.
//!
//! Loads point documents, resolves them against the default palette, and
//! prints the points ordered by distance from the origin.

use std::path::PathBuf;

use clap::Args;

use crate::document::Document;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::types::{sort_by_distance, CartesianPoint, Palette};

/// Sort point documents by distance from the origin
#[derive(Args, Debug)]
pub struct SortArgs {
    /// Point documents to sort
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Print farthest points first
    #[arg(long)]
    pub reverse: bool,

    /// Print each point's distance from the origin after it
    #[arg(long)]
    pub distances: bool,
}

pub fn run(args: SortArgs, printer: &Printer) -> Result<()> {
    for file in &args.files {
        let document = Document::load(file)?;
        let palette = Palette::default_palette();
        let mut points = document.resolve(&palette)?;

        sort_by_distance(&mut points);
        if args.reverse {
            points.reverse();
        }

        printer.status(
            "Sorted",
            &format!(
                "{} from {}",
                plural(points.len(), "point", "points"),
                display_path(file)
            ),
        );

        for point in &points {
            if args.distances {
                println!("{} {}", point, point.distance_from_origin());
            } else {
                println!("{}", point);
            }
        }
    }

    Ok(())
}
