use crate::core::render::OutputFormat;
use crate::utils::error::{InspectError, Result};
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub target: Option<TargetConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| InspectError::ConfigError {
            field: path.display().to_string(),
            message: format!("Cannot read config file: {}", e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，先替換 `${VAR}` 環境變數
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| InspectError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DB_ROOT})，未設定的變數保留原文
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| InspectError::ConfigError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn target_path(&self) -> Option<&str> {
        self.target.as_ref().map(|t| t.path.as_str())
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        match self.output.as_ref().and_then(|o| o.format.as_deref()) {
            None => Ok(None),
            Some("text") => Ok(Some(OutputFormat::Text)),
            Some("json") => Ok(Some(OutputFormat::Json)),
            Some(other) => Err(InspectError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!("Expected one of: {}", OutputFormat::NAMES.join(", ")),
            }),
        }
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        // 驗證目標路徑
        if let Some(path) = self.target_path() {
            validate_path("target.path", path)?;
        }

        if let Some(format) = self.output.as_ref().and_then(|o| o.format.as_deref()) {
            validate_one_of("output.format", format, &OutputFormat::NAMES)?;
        }

        // 驗證日誌等級
        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }
}
