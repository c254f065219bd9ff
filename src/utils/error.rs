use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Invalid argument `{field}`: {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("Prediction unavailable: {message}")]
    PredictionUnavailable { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value `{value}` for `{field}`: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl FeedError {
    /// True for errors the caller can fix by correcting the request,
    /// false for failures of the predictor side.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. }
                | Self::ConfigError { .. }
                | Self::InvalidConfigValueError { .. }
                | Self::MissingConfigError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
