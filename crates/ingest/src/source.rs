//! Event source abstraction.

use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use sessionizer_core::{Error, Result};

/// One delimited-text event source.
///
/// A source is identified by a stable id and read as whole raw text. The
/// `version_token` feeds cache invalidation: it must change whenever the
/// source's content may have changed.
pub trait Source {
    /// Stable identifier, used in diagnostics and cache fingerprints.
    fn id(&self) -> &str;

    /// The source's entire raw text.
    fn read(&self) -> Result<String>;

    /// Cache-invalidation token for the current content.
    fn version_token(&self) -> u64;
}

/// An in-memory source, mainly for tests and embedding callers that
/// already hold the text.
#[derive(Debug, Clone)]
pub struct MemorySource {
    id: String,
    text: String,
}

impl MemorySource {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

impl Source for MemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn read(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn version_token(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.text.hash(&mut hasher);
        hasher.finish()
    }
}

/// A file-backed source.
///
/// The version token hashes file length and modification time, so edits
/// in place invalidate cached results without re-reading content.
#[derive(Debug, Clone)]
pub struct FileSource {
    id: String,
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        Self {
            id: path.display().to_string(),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Source for FileSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path)
            .map_err(|e| Error::source_unreadable(&self.id, e.to_string()))
    }

    fn version_token(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        if let Ok(meta) = fs::metadata(&self.path) {
            meta.len().hash(&mut hasher);
            if let Ok(modified) = meta.modified() {
                if let Ok(elapsed) = modified.duration_since(UNIX_EPOCH) {
                    elapsed.as_nanos().hash(&mut hasher);
                }
            }
        }
        hasher.finish()
    }
}
