use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to create storage directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),
    #[error("Failed to write storage file {0}: {1}")]
    Write(PathBuf, std::io::Error),
    #[error("Failed to serialize storage contents: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

const STORE_FILE: &str = "local_store.json";

/// File-backed key-value store, the desktop stand-in for the browser's
/// localStorage. Every mutation is persisted synchronously so state survives
/// app restarts.
#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl LocalStore {
    /// Open the store backed by `local_store.json` inside `dir`, creating the
    /// directory if needed. A missing or unparsable backing file starts
    /// empty; the corrupt contents are replaced on the next write.
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).map_err(|e| StorageError::CreateDir(dir.to_path_buf(), e))?;

        let path = dir.join(STORE_FILE);
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<HashMap<String, String>>(&contents) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(
                        "Storage file {} is corrupt ({}), starting empty",
                        path.display(),
                        e
                    );
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        info!(
            "📦 Local store opened at {} ({} entries)",
            path.display(),
            entries.len()
        );

        Ok(Self { path, entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|v| v.as_str())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    /// Remove a key. Removing an absent key is a no-op and does not rewrite
    /// the backing file.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, contents)
            .map_err(|e| StorageError::Write(self.path.clone(), e))
    }
}
