//! Dist command implementation.
//!
//! One point prints its distance from the origin; two points print the
//! Euclidean distance between them.

use clap::Args;

use crate::error::{PtError, Result};
use crate::types::{CartesianPoint, Palette, PalettePoint, Point};

/// Compute point distances
#[derive(Args, Debug)]
pub struct DistArgs {
    /// Points in x,y form
    #[arg(required = true)]
    pub points: Vec<String>,
}

pub fn run(args: DistArgs) -> Result<()> {
    let points: Vec<Point> = args
        .points
        .iter()
        .map(|s| s.parse())
        .collect::<Result<_>>()?;

    match points.as_slice() {
        [point] => println!("{}", point.distance_from_origin()),
        [a, b] => {
            let palette = Palette::default_palette();
            let a = PalettePoint::from_pair((a.x, a.y), &palette)?;
            let b = PalettePoint::from_pair((b.x, b.y), &palette)?;
            println!("{}", PalettePoint::distance_between(&a, &b));
        }
        _ => {
            return Err(PtError::Parse {
                message: format!("Expected one or two points, got {}", points.len()),
                help: Some(
                    "Pass one point for origin distance, two for the distance between them"
                        .to_string(),
                ),
            })
        }
    }

    Ok(())
}
