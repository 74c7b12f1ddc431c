//! Document storage backends.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Document;

/// Error type for document storage.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported document version {0}")]
    UnsupportedVersion(u32),
}

/// Load/save seam for a storage backend
pub trait DocumentStore {
    /// Persist a document, replacing any previous one
    fn save(&self, document: &Document) -> Result<(), PersistError>;

    /// Load the stored document, or `None` when nothing has been saved
    fn load(&self) -> Result<Option<Document>, PersistError>;
}

/// Stores the document as a JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for FileStore {
    fn save(&self, document: &Document) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, document.to_json()?)?;
        debug!(
            "Saved {} strokes to {}",
            document.strokes.len(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&self) -> Result<Option<Document>, PersistError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Document::from_json(&json).map(Some)
    }
}

/// Load the stored document, treating absent or unreadable data as an
/// empty drawing
pub fn load_or_default(store: &dyn DocumentStore) -> Document {
    match store.load() {
        Ok(Some(document)) => document,
        Ok(None) => Document::default(),
        Err(err) => {
            warn!("Discarding stored document: {}", err);
            Document::default()
        }
    }
}
