//! Validation checks for point documents.
//!
//! Runs a suite of checks against a document and the colour registry it
//! would be resolved against, and reports errors and warnings. Used by
//! `pt validate`.

mod checks;
mod diagnostic;

pub use diagnostic::{Diagnostic, Severity, ValidationResult};

use crate::document::Document;
use crate::types::Palette;

/// Run all validation checks against a document.
///
/// The document's own palette entries are taken into account without
/// being appended to `palette`, so validating never mutates the registry.
pub fn validate_document(document: &Document, palette: &Palette) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_unknown_colours(document, palette));
    result.merge(checks::check_duplicate_colours(document, palette));
    result.merge(checks::check_finite_coords(document));
    result.merge(checks::check_has_points(document));

    result
}
