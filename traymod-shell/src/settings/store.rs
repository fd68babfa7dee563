//! Whole-document persistence for [`SettingsDocument`].
//!
//! The store only knows how to load and save the entire document. There is no
//! per-key update: callers load, modify and save, and are responsible for
//! serializing those sequences.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use super::document::SettingsDocument;
use crate::error::{ShellError, ShellResult};

/// Whole-file text persistence
pub trait TextStorage: Send + Sync {
    fn read_text(&self, path: &Path) -> io::Result<String>;
    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()>;
}

impl<T: TextStorage + ?Sized> TextStorage for Arc<T> {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        (**self).read_text(path)
    }

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        (**self).write_text(path, contents)
    }
}

/// Files on the local filesystem.
///
/// Writes go to a sibling temporary file which is then renamed over the
/// target, so readers never observe a half-written document.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStorage;

impl TextStorage for FsStorage {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, path).or_else(|err| {
            if let Err(e) = fs::remove_file(&tmp_path) {
                ::log::warn!("Failed to remove {}: {}", tmp_path.display(), e);
            }
            Err(err)
        })
    }
}

/// In-process storage keyed by path
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one file
    pub fn with_file(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.files.lock().insert(path.into(), contents.into());
        storage
    }

    /// Current raw contents of a file
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.lock().get(path).cloned()
    }
}

impl TextStorage for MemoryStorage {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        self.files.lock().get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display()))
        })
    }

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.files
            .lock()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

/// Load/save of the settings document at a fixed path
pub struct SettingsStore {
    storage: Box<dyn TextStorage>,
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(storage: impl TextStorage + 'static, path: impl Into<PathBuf>) -> Self {
        Self {
            storage: Box::new(storage),
            path: path.into(),
        }
    }

    /// File-backed store
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(FsStorage, path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole document
    pub fn load(&self) -> ShellResult<SettingsDocument> {
        let text = match self.storage.read_text(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ShellError::StoreMissing {
                    path: self.path.clone(),
                });
            }
            Err(e) => {
                return Err(ShellError::Io {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        SettingsDocument::parse(&text).map_err(|reason| ShellError::StoreCorrupt {
            path: self.path.clone(),
            reason,
        })
    }

    /// Replace the whole document
    pub fn save(&self, doc: &SettingsDocument) -> ShellResult<()> {
        let text = doc.to_pretty_string()?;
        self.storage
            .write_text(&self.path, &text)
            .map_err(|source| ShellError::Io {
                path: self.path.clone(),
                source,
            })?;
        ::log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
