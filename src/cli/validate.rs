//! Validate command implementation.
//!
//! Runs the validation checks against point documents and reports
//! diagnostics without resolving any points.

use std::path::PathBuf;

use clap::Args;

use crate::document::Document;
use crate::error::{PtError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::Palette;
use crate::validation::{validate_document, Severity, ValidationResult};

/// Validate point documents without resolving them
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Point documents to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let mut combined = ValidationResult::new();

    for file in &args.files {
        let document = Document::load(file)?;
        let palette = Palette::default_palette();
        let result = validate_document(&document, &palette);

        printer.status("Checked", &display_path(file));
        print_diagnostics(&result, printer);
        combined.merge(result);
    }

    if combined.has_errors() {
        return Err(PtError::Validation {
            message: format!(
                "{}, {}",
                plural(combined.error_count(), "error", "errors"),
                plural(combined.warning_count(), "warning", "warnings")
            ),
            help: None,
        });
    }

    Ok(())
}

fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        eprintln!("  {}[{}]: {}", label, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }
}
