use serde::Serialize;
use std::path::PathBuf;

/// One directory entry as it is reported to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    pub name: String,
    pub repr: String,
    pub hex: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectOutcome {
    PathNotFound(PathBuf),
    Inspected { entries: usize },
}
