use thiserror::Error;

#[derive(Error, Debug)]
pub enum BriefError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Unexpected response payload: {message}")]
    PayloadError { message: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    AddressError(#[from] lettre::address::AddressError),

    #[error("{0}")]
    MessageError(#[from] lettre::error::Error),

    // Display carries only the transport detail; status lines embed it as-is.
    #[error("{message}")]
    SmtpError { message: String },
}

impl BriefError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            BriefError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BriefError>;
