use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Hook processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScriptError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScriptError::IoError(_) => ErrorCategory::Io,
            ScriptError::SerializationError(_) => ErrorCategory::Data,
            ScriptError::ConfigError { .. }
            | ScriptError::MissingConfigError { .. }
            | ScriptError::InvalidConfigValueError { .. }
            | ScriptError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            ScriptError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 輸入檔案可能只是尚未產生，重試即可
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ScriptError::IoError(_) => {
                "Check that the input file exists and the output directory is writable".to_string()
            }
            ScriptError::SerializationError(_) => {
                "Make sure the hook input is JSON with `cart` and `shipping_rates` fields".to_string()
            }
            ScriptError::MissingConfigError { field } => {
                format!("Add `{}` to the campaign configuration", field)
            }
            ScriptError::InvalidConfigValueError { field, .. }
            | ScriptError::ConfigValidationError { field, .. } => {
                format!("Fix the `{}` entry in the campaign configuration", field)
            }
            ScriptError::ConfigError { .. } => {
                "Review the campaign configuration file or environment variables".to_string()
            }
            ScriptError::ProcessingError { .. } => {
                "Re-run with --verbose to see which campaign failed".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read or write a file: {}", self),
            ErrorCategory::Data => format!("The hook input could not be understood: {}", self),
            ErrorCategory::Configuration => format!("The campaign configuration is invalid: {}", self),
            ErrorCategory::Processing => format!("Shipping discounts could not be applied: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScriptError>;
