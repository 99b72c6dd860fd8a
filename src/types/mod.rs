//! Core domain types for pt.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Point` - bare 2D points, ordered by distance from the origin
//! - `ColourPoint` - points carrying a free-form colour label
//! - `Palette` - the shared allowed-colour registry
//! - `PalettePoint` - points validated against a `Palette`

mod cartesian;
mod colour_point;
mod palette;
mod palette_point;
mod point;

pub use cartesian::{sort_by_distance, CartesianPoint};
pub use colour_point::ColourPoint;
pub use palette::{Palette, DEFAULT_COLOURS};
pub use palette_point::{PalettePoint, DEFAULT_COLOUR};
pub use point::Point;
