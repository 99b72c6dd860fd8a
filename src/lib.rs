//! pt - Colour-tagged 2D point sets
//!
//! A library for modelling 2D points with optional colour labels, ordered
//! by distance from the origin, plus a shared allowed-colour registry
//! that validated points are constructed against.

pub mod cli;
pub mod document;
pub mod error;
pub mod output;
pub mod types;
pub mod validation;

pub use document::{Document, PointDef};
pub use error::{PtError, Result};
pub use types::{
    sort_by_distance, CartesianPoint, ColourPoint, Palette, PalettePoint, Point, DEFAULT_COLOUR,
    DEFAULT_COLOURS,
};
pub use validation::{validate_document, Diagnostic, Severity, ValidationResult};
