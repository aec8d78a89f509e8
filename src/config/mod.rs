pub mod toml_config;

use crate::core::render::OutputFormat;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

/// Directory inspected when neither the command line nor a config file names one.
pub const DEFAULT_TARGET_PATH: &str = "psmo-community/backend/src/main/resources/db/migration";

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "filename-inspector")]
#[command(about = "Print every filename in a directory together with the hex of its UTF-8 bytes")]
pub struct CliConfig {
    /// Directory to inspect [default: psmo-community/backend/src/main/resources/db/migration]
    pub path: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Settings after merging the command line, the config file and the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectorConfig {
    pub target_path: PathBuf,
    pub format: OutputFormat,
    pub log_level: Option<String>,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            target_path: PathBuf::from(DEFAULT_TARGET_PATH),
            format: OutputFormat::Text,
            log_level: None,
        }
    }
}

impl CliConfig {
    /// Command-line values win over the config file, which wins over the defaults.
    pub fn resolve(&self) -> Result<InspectorConfig> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                tracing::debug!("Loaded configuration from {}", path.display());
                Some(file)
            }
            None => None,
        };

        let mut resolved = InspectorConfig::default();
        if let Some(file) = &file {
            if let Some(path) = file.target_path() {
                resolved.target_path = PathBuf::from(path);
            }
            if let Some(format) = file.output_format()? {
                resolved.format = format;
            }
            resolved.log_level = file.log_level().map(str::to_string);
        }

        if let Some(path) = &self.path {
            resolved.target_path = path.clone();
        }
        if let Some(format) = self.format {
            resolved.format = format;
        }

        Ok(resolved)
    }
}

impl ConfigProvider for InspectorConfig {
    fn target_path(&self) -> &Path {
        &self.target_path
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}
