//! Colour-tagged points.

use std::fmt;
use std::str::FromStr;

use crate::error::{PtError, Result};

use super::CartesianPoint;

/// A point carrying a free-form colour label.
///
/// The colour is an arbitrary string: it is not checked against any
/// registry (see [`PalettePoint`](super::PalettePoint) for that) and may
/// be reassigned freely after construction. The coordinates are validated
/// instead: a value that is not a finite number is rejected.
///
/// `Display` prints the `<colour: x, y>` form; `Debug` keeps the bare
/// `<x,y>` form shared with [`Point`](super::Point).
#[derive(Clone, PartialEq)]
pub struct ColourPoint {
    pub x: f64,
    pub y: f64,
    pub colour: String,
}

impl ColourPoint {
    /// Create a new colour point.
    ///
    /// Fails with [`PtError::TypeValidation`] when either coordinate is
    /// NaN or infinite. The colour is stored verbatim.
    pub fn new(x: f64, y: f64, colour: impl Into<String>) -> Result<Self> {
        require_numeric(x, "x")?;
        require_numeric(y, "y")?;

        Ok(Self {
            x,
            y,
            colour: colour.into(),
        })
    }

    /// Create a colour point from loose text fields.
    ///
    /// A coordinate field that does not parse as a number fails with
    /// [`PtError::TypeValidation`].
    pub fn from_fields(x: &str, y: &str, colour: &str) -> Result<Self> {
        Self::new(numeric_field(x, "x")?, numeric_field(y, "y")?, colour)
    }
}

impl CartesianPoint for ColourPoint {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl fmt::Display for ColourPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: {}, {}>", self.colour, self.x, self.y)
    }
}

impl fmt::Debug for ColourPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{}>", self.x, self.y)
    }
}

impl FromStr for ColourPoint {
    type Err = PtError;

    /// Parse a colour point from `x,y,colour` text.
    fn from_str(s: &str) -> Result<Self> {
        let mut fields = s.trim().splitn(3, ',');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(x), Some(y), Some(colour)) => Self::from_fields(x, y, colour.trim()),
            _ => Err(PtError::Parse {
                message: format!("Invalid colour point: {}", s),
                help: Some("Use x,y,colour format".to_string()),
            }),
        }
    }
}

fn require_numeric(value: f64, field: &str) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PtError::TypeValidation {
            message: format!("{} must be a number, got {}", field, value),
            help: None,
        })
    }
}

fn numeric_field(text: &str, field: &str) -> Result<f64> {
    let text = text.trim();
    text.parse::<f64>().map_err(|_| PtError::TypeValidation {
        message: format!("{} must be a number, got \"{}\"", field, text),
        help: None,
    })
}
