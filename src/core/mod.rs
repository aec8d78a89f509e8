pub mod encoding;
pub mod inspector;
pub mod render;

pub use crate::domain::model::{EntryReport, InspectOutcome};
pub use crate::domain::ports::{ConfigProvider, DirectoryLister};
pub use crate::utils::error::Result;
