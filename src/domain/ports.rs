use crate::core::render::OutputFormat;
use crate::utils::error::Result;
use std::ffi::OsString;
use std::path::Path;

pub trait DirectoryLister {
    /// Whether anything exists at `path`. Symlinks are followed, so a dangling
    /// link does not exist.
    fn exists(&self, path: &Path) -> bool;

    /// Names of the direct children of `path`, in the order the OS yields them.
    fn list_names(&self, path: &Path) -> Result<Vec<OsString>>;
}

pub trait ConfigProvider {
    fn target_path(&self) -> &Path;
    fn output_format(&self) -> OutputFormat;
}
