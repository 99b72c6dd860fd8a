//! The bare 2D point type.

use std::fmt;
use std::str::FromStr;

use crate::error::{PtError, Result};

use super::CartesianPoint;

/// A 2D point with no colour attached.
///
/// Both coordinates are plain public fields and may be mutated freely;
/// construction never fails. Distance from the origin is recomputed on
/// demand, never cached, so mutations are always reflected.
///
/// `Display` prints the `point<x,y>` form, `Debug` the shorter `<x,y>`
/// form. Derived equality compares coordinates; equality by distance from
/// the origin is a separate relation, see
/// [`eq_by_distance`](CartesianPoint::eq_by_distance).
#[derive(Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point. Stores the coordinates verbatim.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl CartesianPoint for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "point<{},{}>", self.x, self.y)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{}>", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = PtError;

    /// Parse a point from `x,y` text.
    ///
    /// The display (`point<x,y>`) and debug (`<x,y>`) wrappers are
    /// accepted as well.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let inner = trimmed.strip_prefix("point").unwrap_or(trimmed).trim();
        let inner = match inner.strip_prefix('<') {
            Some(rest) => rest.strip_suffix('>').ok_or_else(|| invalid_point(trimmed))?,
            None => inner,
        };

        let (x, y) = inner.split_once(',').ok_or_else(|| invalid_point(trimmed))?;
        Ok(Self::new(parse_coord(x)?, parse_coord(y)?))
    }
}

fn invalid_point(s: &str) -> PtError {
    PtError::Parse {
        message: format!("Invalid point: {}", s),
        help: Some("Use x,y format".to_string()),
    }
}

/// Parse a single coordinate field.
fn parse_coord(s: &str) -> Result<f64> {
    let s = s.trim();
    s.parse::<f64>().map_err(|_| PtError::Parse {
        message: format!("Invalid coordinate: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_from_origin() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(p.distance_from_origin(), 5.0);

        let p = Point::new(0.0, 0.0);
        assert_eq!(p.distance_from_origin(), 0.0);

        let p = Point::new(1.0, 1.0);
        assert!((p.distance_from_origin() - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_distance_recomputed_after_mutation() {
        let mut p = Point::new(3.0, 4.0);
        assert_eq!(p.distance_from_origin(), 5.0);

        p.x = 0.0;
        assert_eq!(p.distance_from_origin(), 4.0);
    }

    #[test]
    fn test_display_form() {
        insta::assert_snapshot!(Point::new(1.0, 2.0).to_string(), @"point<1,2>");
        insta::assert_snapshot!(Point::new(4.4, -55.0).to_string(), @"point<4.4,-55>");
    }

    #[test]
    fn test_debug_form() {
        insta::assert_snapshot!(format!("{:?}", Point::new(1.0, 2.0)), @"<1,2>");
    }

    #[test]
    fn test_from_str_bare() {
        let p: Point = "1,2".parse().unwrap();
        assert_eq!(p, Point::new(1.0, 2.0));

        let p: Point = " -3.5 , 4 ".parse().unwrap();
        assert_eq!(p, Point::new(-3.5, 4.0));
    }

    #[test]
    fn test_from_str_wrapped() {
        let p: Point = "point<1,2>".parse().unwrap();
        assert_eq!(p, Point::new(1.0, 2.0));

        let p: Point = "<1,2>".parse().unwrap();
        assert_eq!(p, Point::new(1.0, 2.0));
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("".parse::<Point>().is_err());
        assert!("1".parse::<Point>().is_err());
        assert!("a,2".parse::<Point>().is_err());
        assert!("point<1,2".parse::<Point>().is_err());
    }
}
