//! Point document (YAML) parsing.
//!
//! A point document is the CLI's input format: a list of points to
//! operate on, plus optional extra colours appended to the registry
//! before the points are constructed.
//!
//! ```yaml
//! palette:
//!   - ultraviolet
//! points:
//!   - { x: 1, y: 2, colour: red }
//!   - { x: 3, y: 4 }
//! ```
//!
//! The document structs are plain DTOs; the core point types stay free of
//! any serialization concern.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PtError, Result};
use crate::types::{Palette, PalettePoint, DEFAULT_COLOUR};

/// A point document loaded from YAML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    /// Extra colours appended to the registry before resolving points.
    pub palette: Vec<String>,

    /// Point definitions.
    pub points: Vec<PointDef>,
}

/// A single point definition inside a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointDef {
    pub x: f64,
    pub y: f64,

    /// Colour label; defaults to "red" when omitted.
    #[serde(default)]
    pub colour: Option<String>,
}

impl PointDef {
    /// The colour this definition resolves to.
    pub fn effective_colour(&self) -> &str {
        self.colour.as_deref().unwrap_or(DEFAULT_COLOUR)
    }
}

impl Document {
    /// Load a document from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PtError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read document: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a document from a YAML string.
    ///
    /// An empty file is a valid, empty document.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| PtError::Parse {
            message: format!("Invalid document: {}", e),
            help: Some("Check the document's YAML syntax".to_string()),
        })
    }

    /// Resolve the document into palette-validated points.
    ///
    /// Appends the document's palette entries to the registry first, then
    /// constructs every point through [`PalettePoint::new`]. A point with
    /// a colour the registry does not allow fails the whole resolve.
    pub fn resolve(&self, palette: &Palette) -> Result<Vec<PalettePoint>> {
        for colour in &self.palette {
            palette.add(colour.clone());
        }

        self.points
            .iter()
            .map(|def| PalettePoint::new(def.x, def.y, def.effective_colour(), palette))
            .collect()
    }
}
