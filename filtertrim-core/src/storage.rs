use crate::error::{Result, TrimError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Storage abstraction for reading and replacing filter lists
pub trait ListStorage {
    /// Read the whole list as text. Invalid UTF-8 becomes U+FFFD.
    fn read_list(&self, path: &Path) -> Result<String>;

    /// Replace the list at `path` with `contents`.
    fn write_list(&self, path: &Path, contents: &str) -> Result<()>;
}

/// Local filesystem storage. Writes overwrite in place with no backup.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileStorage;

impl FileStorage {
    pub fn new() -> Self {
        Self
    }
}

impl ListStorage for FileStorage {
    fn read_list(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|source| TrimError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn write_list(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents).map_err(|source| TrimError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// In-memory storage keyed by path
#[derive(Debug, Default)]
pub struct MemoryStorage {
    lists: RefCell<HashMap<PathBuf, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.lists.borrow_mut().insert(path.into(), contents.into());
    }

    pub fn get(&self, path: &Path) -> Option<String> {
        self.lists
            .borrow()
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl ListStorage for MemoryStorage {
    fn read_list(&self, path: &Path) -> Result<String> {
        self.get(path).ok_or_else(|| TrimError::Read {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such list"),
        })
    }

    fn write_list(&self, path: &Path, contents: &str) -> Result<()> {
        self.insert(path, contents);
        Ok(())
    }
}
