use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InspectError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cannot list directory {}: {source}", .path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Filename is not valid UTF-8: {name}")]
    Encoding { name: String },

    #[error("Invalid hex string {value:?}: {reason}")]
    InvalidHex { value: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl InspectError {
    /// 程序結束碼：設定錯誤為 2，其餘執行期錯誤為 1
    pub fn exit_code(&self) -> i32 {
        match self {
            InspectError::ConfigError { .. } | InspectError::InvalidConfigValueError { .. } => 2,
            _ => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            InspectError::ListDirectory { path, source } => {
                format!("Could not read {} as a directory: {}", path.display(), source)
            }
            InspectError::Encoding { name } => {
                format!("Found a filename that is not valid UTF-8: {}", name)
            }
            InspectError::ConfigError { .. } | InspectError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            InspectError::ListDirectory { .. } => "Point the inspector at a directory, not a file",
            InspectError::Encoding { .. } => {
                "Rename the file with a UTF-8 name or inspect it with a byte-level tool such as `ls -b`"
            }
            InspectError::ConfigError { .. } => "Check that the config file exists and is valid TOML",
            InspectError::InvalidConfigValueError { .. } => "Fix the reported value and run again",
            InspectError::InvalidHex { .. } => "Copy the full value of a `Hex:` line",
            InspectError::IoError(_) => "Check that standard output is writable",
            InspectError::SerializationError(_) => "Retry with --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, InspectError>;
