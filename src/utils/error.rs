use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    #[error("Invalid configuration value for '{field}': {reason} (value: '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("instance not found: {key}")]
    InstanceNotFoundError { key: String },

    #[error("instance already exists: {id} ({uuid})")]
    InstanceAlreadyExistsError { id: String, uuid: String },

    #[error("migration not supported")]
    MigrationNotSupportedError,

    #[error("Handler extraction failed: {reason}")]
    HandlerExtractionError { reason: String },
}

impl AdapterError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AdapterError::InstanceNotFoundError { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, AdapterError::InstanceAlreadyExistsError { .. })
    }

    /// Configuration problems are reported to the caller verbatim; everything
    /// else is an adapter fault.
    pub fn is_config(&self) -> bool {
        matches!(self, AdapterError::InvalidConfigValueError { .. })
    }
}

pub type Result<T> = std::result::Result<T, AdapterError>;
