use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid command '{input}': {reason}")]
    CommandError { input: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MenuError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MenuError::IoError(_) => ErrorCategory::System,
            MenuError::CsvError(_)
            | MenuError::SerializationError(_)
            | MenuError::CommandError { .. } => ErrorCategory::Input,
            MenuError::TomlError(_)
            | MenuError::ConfigError { .. }
            | MenuError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 互動模式下打錯指令只需重新輸入
            MenuError::CommandError { .. } => ErrorSeverity::Low,
            MenuError::CsvError(_) | MenuError::SerializationError(_) => ErrorSeverity::Medium,
            MenuError::TomlError(_)
            | MenuError::ConfigError { .. }
            | MenuError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            MenuError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MenuError::IoError(_) => {
                "Check that the file exists and is readable".to_string()
            }
            MenuError::CsvError(_) => {
                "Menu CSV files need the header: name,description,price,course".to_string()
            }
            MenuError::SerializationError(_) => "Retry with --format text".to_string(),
            MenuError::TomlError(_) => "Fix the TOML syntax in the config file".to_string(),
            MenuError::ConfigError { .. } => "Review the configuration file".to_string(),
            MenuError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            MenuError::CommandError { .. } => "Type 'help' to list commands".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MenuError::IoError(e) => format!("Could not access a file: {}", e),
            MenuError::CsvError(e) => format!("The menu file could not be read: {}", e),
            MenuError::SerializationError(e) => format!("Could not render JSON output: {}", e),
            MenuError::TomlError(e) => format!("The config file is not valid TOML: {}", e),
            MenuError::ConfigError { message } => format!("Configuration problem: {}", message),
            MenuError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            MenuError::CommandError { reason, .. } => reason.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
