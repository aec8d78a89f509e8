pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::LocalDirectory;
pub use config::{CliConfig, InspectorConfig, DEFAULT_TARGET_PATH};
pub use crate::core::{inspector::Inspector, render::OutputFormat};
pub use utils::error::{InspectError, Result};
