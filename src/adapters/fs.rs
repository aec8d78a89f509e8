use crate::domain::ports::DirectoryLister;
use crate::utils::error::{InspectError, Result};
use std::ffi::OsString;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDirectory;

impl LocalDirectory {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryLister for LocalDirectory {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_names(&self, path: &Path) -> Result<Vec<OsString>> {
        let list_err = |source| InspectError::ListDirectory {
            path: path.to_path_buf(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(path).map_err(list_err)? {
            names.push(entry.map_err(list_err)?.file_name());
        }
        Ok(names)
    }
}
