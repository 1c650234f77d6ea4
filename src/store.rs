//! Content stores: where track audio bytes come from.
//!
//! The playlist calls [`ContentStore::read_all`] once when a track is added
//! and keeps the bytes as an opaque payload.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::config::UploadSettings;

/// Supplies the raw bytes behind a handle.
pub trait ContentStore {
    type Handle: ?Sized;

    fn read_all(&self, handle: &Self::Handle) -> io::Result<Vec<u8>>;
}

/// Reads audio files from the local filesystem.
///
/// Only files with one of the configured extensions are accepted, and files
/// above `max_bytes` are rejected before being read.
#[derive(Debug, Clone)]
pub struct FileStore {
    extensions: Vec<String>,
    max_bytes: Option<u64>,
}

impl FileStore {
    pub fn new(settings: &UploadSettings) -> Self {
        let extensions = settings
            .extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();

        Self {
            extensions,
            max_bytes: settings.max_bytes,
        }
    }

    /// Return true if `path` has one of the accepted extensions (case-insensitive).
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|e| e == &ext)
            })
            .unwrap_or(false)
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(&UploadSettings::default())
    }
}

impl ContentStore for FileStore {
    type Handle = Path;

    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>> {
        if !self.accepts(path) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "unsupported file type (expected one of: {})",
                    self.extensions.join(", ")
                ),
            ));
        }

        if let Some(max) = self.max_bytes {
            let size = fs::metadata(path)?.len();
            if size > max {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("file is {size} bytes, limit is {max}"),
                ));
            }
        }

        let bytes = fs::read(path)?;
        debug!(path = %path.display(), bytes = bytes.len(), "read audio content");
        Ok(bytes)
    }
}
