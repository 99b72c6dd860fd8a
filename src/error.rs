use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pt operations
#[derive(Error, Diagnostic, Debug)]
pub enum PtError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pt::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pt::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Type validation error: {message}")]
    #[diagnostic(code(pt::type_validation))]
    TypeValidation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid colour: {colour}")]
    #[diagnostic(code(pt::invalid_colour))]
    InvalidColour {
        colour: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation failed: {message}")]
    #[diagnostic(code(pt::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, PtError>;
