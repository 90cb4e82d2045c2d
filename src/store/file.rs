use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{Medium, StoreError};

/// Local-file medium: the whole document lives in one JSON text file.
#[derive(Debug, Clone)]
pub struct FileMedium {
    path: PathBuf,
}

impl FileMedium {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Medium for FileMedium {
    fn read(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, text: &str) -> Result<(), StoreError> {
        fs::write(&self.path, text)?;
        Ok(())
    }
}
