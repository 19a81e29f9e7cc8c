use thiserror::Error;

/// Caller-facing failure taxonomy. Store-layer errors are translated into
/// one of these at each component boundary; no raw store error reaches the
/// caller.
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Store unavailable")]
    StoreUnavailable,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl VaultError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        VaultError::BadRequest {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        VaultError::Conflict {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        VaultError::NotFound {
            message: message.into(),
        }
    }

    /// Transport hint for whatever request/response layer sits on top.
    pub fn status_code(&self) -> u16 {
        match self {
            VaultError::BadRequest { .. } => 400,
            VaultError::Unauthorized => 401,
            VaultError::NotFound { .. } => 404,
            VaultError::Conflict { .. } => 409,
            VaultError::StoreUnavailable => 500,
            VaultError::ConfigError { .. } | VaultError::InvalidConfigValueError { .. } => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, VaultError>;
