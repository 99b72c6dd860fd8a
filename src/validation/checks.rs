//! Individual validation checks over a point document.

use crate::document::Document;
use crate::types::Palette;

use super::{Diagnostic, ValidationResult};

/// Points whose colour is neither in the registry nor added by the
/// document's own palette list.
pub(super) fn check_unknown_colours(document: &Document, palette: &Palette) -> ValidationResult {
    let mut result = ValidationResult::new();

    for def in &document.points {
        let colour = def.effective_colour();
        let known = palette.contains(colour) || document.palette.iter().any(|c| c == colour);

        if !known {
            result.push(
                Diagnostic::error(
                    "pt::validate::unknown-colour",
                    format!(
                        "unknown colour \"{}\" at point<{},{}>",
                        colour, def.x, def.y
                    ),
                )
                .with_help("Add it to the document's palette list"),
            );
        }
    }

    result
}

/// Document palette entries that are already allowed.
///
/// Appends never de-duplicate, so this is legal; it just has no effect on
/// validation.
pub(super) fn check_duplicate_colours(document: &Document, palette: &Palette) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: Vec<&str> = Vec::new();

    for colour in &document.palette {
        if palette.contains(colour) || seen.contains(&colour.as_str()) {
            result.push(Diagnostic::warning(
                "pt::validate::duplicate-colour",
                format!("colour \"{}\" is already allowed", colour),
            ));
        }
        seen.push(colour);
    }

    result
}

/// Coordinates that are NaN or infinite.
///
/// These construct fine, but their origin distance is not meaningful.
pub(super) fn check_finite_coords(document: &Document) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (index, def) in document.points.iter().enumerate() {
        if !def.x.is_finite() || !def.y.is_finite() {
            result.push(Diagnostic::warning(
                "pt::validate::non-finite-coord",
                format!("point {} has a non-finite coordinate", index),
            ));
        }
    }

    result
}

/// Documents that define no points at all.
pub(super) fn check_has_points(document: &Document) -> ValidationResult {
    let mut result = ValidationResult::new();

    if document.points.is_empty() {
        result.push(Diagnostic::warning(
            "pt::validate::no-points",
            "document defines no points",
        ));
    }

    result
}
