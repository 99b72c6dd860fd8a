//! Points validated against the shared colour registry.

use std::fmt;

use crate::error::{PtError, Result};

use super::{CartesianPoint, Palette};

/// Colour used when a point is constructed without one.
pub const DEFAULT_COLOUR: &str = "red";

/// A point whose colour must be allowed by a [`Palette`] at construction.
///
/// Unlike [`ColourPoint`](super::ColourPoint), the coordinates are NOT
/// validated here: NaN and infinite values are accepted. The colour is
/// fixed once constructed. `x` stays mutable through its accessor pair
/// while `y` is read-only.
///
/// `Display` prints the bare `point<x,y>` form; the colour label is not
/// part of the display output.
#[derive(Clone)]
pub struct PalettePoint {
    x: f64,
    y: f64,
    colour: String,
    palette: Palette,
}

impl PalettePoint {
    /// Create a new point, validating the colour against the palette.
    ///
    /// Fails with [`PtError::InvalidColour`] when the colour is not
    /// currently in the registry. The point keeps a handle to the palette,
    /// so registry additions made through [`palette`](Self::palette) are
    /// visible to every other holder.
    pub fn new(x: f64, y: f64, colour: impl Into<String>, palette: &Palette) -> Result<Self> {
        let colour = colour.into();
        if !palette.contains(&colour) {
            return Err(PtError::InvalidColour {
                colour,
                help: Some(format!(
                    "Allowed colours: {}",
                    palette.colours().join(", ")
                )),
            });
        }

        Ok(Self {
            x,
            y,
            colour,
            palette: palette.clone(),
        })
    }

    /// Create a point from a coordinate pair with the default colour.
    pub fn from_pair(pair: (f64, f64), palette: &Palette) -> Result<Self> {
        Self::from_pair_coloured(pair, DEFAULT_COLOUR, palette)
    }

    /// Create a point from a coordinate pair with an explicit colour.
    ///
    /// Subject to the same colour validation as [`new`](Self::new).
    pub fn from_pair_coloured(
        pair: (f64, f64),
        colour: impl Into<String>,
        palette: &Palette,
    ) -> Result<Self> {
        let (x, y) = pair;
        Self::new(x, y, colour, palette)
    }

    /// Euclidean distance between two points' coordinates.
    ///
    /// Point-to-point distance, distinct from
    /// [`distance_from_origin`](CartesianPoint::distance_from_origin).
    pub fn distance_between(a: &PalettePoint, b: &PalettePoint) -> f64 {
        ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
    }

    /// Euclidean distance from this point to another.
    pub fn distance_to(&self, other: &PalettePoint) -> f64 {
        Self::distance_between(self, other)
    }

    /// The x-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Set the x-coordinate.
    pub fn set_x(&mut self, value: f64) {
        self.x = value;
    }

    /// The y-coordinate. There is no setter.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// The colour label, fixed at construction.
    pub fn colour(&self) -> &str {
        &self.colour
    }

    /// The shared registry handle this point was validated against.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl CartesianPoint for PalettePoint {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl fmt::Display for PalettePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "point<{},{}>", self.x, self.y)
    }
}

impl fmt::Debug for PalettePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{}>", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_with_allowed_colour() {
        let palette = Palette::default_palette();
        let p = PalettePoint::new(1.0, 2.0, "blue", &palette).unwrap();

        assert_eq!(p.x(), 1.0);
        assert_eq!(p.y(), 2.0);
        assert_eq!(p.colour(), "blue");
    }

    #[test]
    fn test_new_rejects_unknown_colour() {
        let palette = Palette::default_palette();
        let err = PalettePoint::new(0.0, 0.0, "ultraviolet", &palette).unwrap_err();

        match err {
            PtError::InvalidColour { colour, .. } => assert_eq!(colour, "ultraviolet"),
            other => panic!("expected InvalidColour, got {:?}", other),
        }
    }

    #[test]
    fn test_registry_extension_allows_new_colours() {
        let palette = Palette::default_palette();
        assert!(PalettePoint::new(0.0, 0.0, "ultraviolet", &palette).is_err());

        palette.add("ultraviolet");
        assert!(PalettePoint::new(0.0, 0.0, "ultraviolet", &palette).is_ok());
    }

    #[test]
    fn test_registry_is_shared_across_instances() {
        let palette = Palette::default_palette();
        let first = PalettePoint::new(1.0, 1.0, "red", &palette).unwrap();

        // Extend the registry through one instance's handle...
        first.palette().add("ultraviolet");

        // ...and construct through the original handle.
        assert!(PalettePoint::new(2.0, 2.0, "ultraviolet", &palette).is_ok());
    }

    #[test]
    fn test_coordinates_are_not_validated() {
        // Divergence from ColourPoint: NaN and infinity pass through.
        let palette = Palette::default_palette();
        assert!(PalettePoint::new(f64::NAN, 2.0, "red", &palette).is_ok());
        assert!(PalettePoint::new(1.0, f64::INFINITY, "red", &palette).is_ok());
    }

    #[test]
    fn test_from_pair_defaults_to_red() {
        let palette = Palette::default_palette();
        let from_pair = PalettePoint::from_pair((3.0, 2.0), &palette).unwrap();
        let explicit = PalettePoint::new(3.0, 2.0, "red", &palette).unwrap();

        assert_eq!(from_pair.x(), explicit.x());
        assert_eq!(from_pair.y(), explicit.y());
        assert_eq!(from_pair.colour(), explicit.colour());
    }

    #[test]
    fn test_from_pair_coloured() {
        let palette = Palette::default_palette();
        let p = PalettePoint::from_pair_coloured((3.0, 2.0), "green", &palette).unwrap();
        assert_eq!(p.colour(), "green");

        assert!(PalettePoint::from_pair_coloured((0.0, 0.0), "ultraviolet", &palette).is_err());
    }

    #[test]
    fn test_distance_between() {
        let palette = Palette::default_palette();
        let a = PalettePoint::new(1.0, 2.0, "blue", &palette).unwrap();
        let b = PalettePoint::new(3.0, 2.0, "red", &palette).unwrap();

        assert_eq!(PalettePoint::distance_between(&a, &b), 2.0);
        assert_eq!(a.distance_to(&b), 2.0);
        assert_eq!(b.distance_to(&a), 2.0);
    }

    #[test]
    fn test_set_x_is_visible_everywhere() {
        let palette = Palette::default_palette();
        let mut p = PalettePoint::new(3.0, 4.0, "red", &palette).unwrap();
        assert_eq!(p.distance_from_origin(), 5.0);

        p.set_x(0.0);
        assert_eq!(p.x(), 0.0);
        assert_eq!(p.distance_from_origin(), 4.0);
    }

    #[test]
    fn test_display_falls_back_to_bare_point_form() {
        let palette = Palette::default_palette();
        let p = PalettePoint::new(1.0, 2.0, "blue", &palette).unwrap();

        insta::assert_snapshot!(p.to_string(), @"point<1,2>");
        insta::assert_snapshot!(format!("{:?}", p), @"<1,2>");
    }

    #[test]
    fn test_inherited_ordering() {
        let palette = Palette::default_palette();
        let a = PalettePoint::new(3.0, 4.0, "red", &palette).unwrap();
        let b = PalettePoint::new(5.0, 0.0, "blue", &palette).unwrap();

        assert!(a.eq_by_distance(&b));
    }
}
