//! Persistence boundary for finished strokes.
//!
//! This module provides:
//! - [`Document`] - The saved state: brush, settings and finished strokes
//! - [`DocumentStore`] - Load/save seam for a storage backend
//! - [`FileStore`] - JSON file backend
//!
//! Rendered geometry is never stored. A loaded document is re-rendered
//! from its strokes, which is why every stroke keeps its jitter seed.

mod storage;

use quill_config::{Brush, Settings};
use serde::{Deserialize, Serialize};

use crate::types::Stroke;

pub use storage::{DocumentStore, FileStore, PersistError, load_or_default};

/// Current document format version
pub const DOCUMENT_VERSION: u32 = 1;

/// A saved drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub brush: Brush,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub strokes: Vec<Stroke>,
}

fn default_version() -> u32 {
    DOCUMENT_VERSION
}

impl Default for Document {
    fn default() -> Self {
        Self {
            version: DOCUMENT_VERSION,
            brush: Brush::default(),
            settings: Settings::default(),
            strokes: Vec::new(),
        }
    }
}

impl Document {
    pub fn new(brush: Brush, settings: Settings, strokes: Vec<Stroke>) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            brush,
            settings,
            strokes,
        }
    }

    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        let document: Self = serde_json::from_str(json)?;
        if document.version > DOCUMENT_VERSION {
            return Err(PersistError::UnsupportedVersion(document.version));
        }
        Ok(document)
    }
}
