use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid value \"{value}\" for {field}: {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid model state: {message}")]
    StateError { message: String },

    #[error("Undefined field \"{field}\" in model \"{model}\". Allowed fields: \"{}\"", .allowed.join("\", \""))]
    SchemaError {
        model: String,
        field: String,
        allowed: Vec<String>,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML decode error: {0}")]
    TomlDecodeError(#[from] toml::de::Error),

    #[error("TOML encode error: {0}")]
    TomlEncodeError(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    State,
    Schema,
    Codec,
    Io,
    Config,
}

impl ModelError {
    pub fn validation(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        ModelError::ValidationError {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn state(message: impl Into<String>) -> Self {
        ModelError::StateError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ModelError::ValidationError { .. } => ErrorCategory::Validation,
            ModelError::StateError { .. } => ErrorCategory::State,
            ModelError::SchemaError { .. } => ErrorCategory::Schema,
            ModelError::SerializationError(_)
            | ModelError::TomlDecodeError(_)
            | ModelError::TomlEncodeError(_) => ErrorCategory::Codec,
            ModelError::IoError(_) => ErrorCategory::Io,
            ModelError::ConfigError { .. } => ErrorCategory::Config,
        }
    }

    /// Process exit code the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Schema => 2,
            ErrorCategory::State => 3,
            ErrorCategory::Codec | ErrorCategory::Io | ErrorCategory::Config => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
