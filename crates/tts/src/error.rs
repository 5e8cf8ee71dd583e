use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lipsync_core::HttpError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Speech synthesis errors with appropriate HTTP status codes
#[derive(Debug, Error)]
pub enum TtsError {
    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Provider rejected the API key
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Provider not found in configuration
    #[error("Provider '{0}' not found")]
    ProviderNotFound(String),

    /// Provider API returned an error
    #[error("Provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal server error
    ///
    /// `Some` carries a provider message that is safe to show; `None` hides
    /// the details from the client.
    #[error("Internal server error")]
    InternalError(Option<String>),
}

impl TtsError {
    /// Map a non-success provider status to an error
    pub(crate) fn from_provider_status(status: u16, message: String) -> Self {
        match status {
            401 => Self::AuthenticationFailed(message),
            400 => Self::InvalidRequest(message),
            _ => Self::ProviderApiError { status, message },
        }
    }
}

impl HttpError for TtsError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::AuthenticationFailed(_) => StatusCode::UNAUTHORIZED,
            Self::ProviderNotFound(_) => StatusCode::NOT_FOUND,
            Self::ConnectionError(_) => StatusCode::BAD_GATEWAY,
            Self::ProviderApiError { status, .. } => match *status {
                400 => StatusCode::BAD_REQUEST,
                401 => StatusCode::UNAUTHORIZED,
                403 => StatusCode::FORBIDDEN,
                429 => StatusCode::TOO_MANY_REQUESTS,
                _ => StatusCode::BAD_GATEWAY,
            },
            Self::ConfigError(_) | Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::InvalidRequest(_) => "invalid_request_error",
            Self::AuthenticationFailed(_) => "authentication_error",
            Self::ProviderNotFound(_) => "not_found_error",
            Self::ConnectionError(_) | Self::ProviderApiError { .. } => "api_error",
            Self::ConfigError(_) | Self::InternalError(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::InternalError(Some(provider_msg)) => provider_msg.clone(),
            Self::InternalError(None) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for TtsError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_statuses() {
        assert!(matches!(
            TtsError::from_provider_status(401, "bad key".into()),
            TtsError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            TtsError::from_provider_status(400, "bad voice".into()),
            TtsError::InvalidRequest(_)
        ));

        let err = TtsError::from_provider_status(429, "slow down".into());
        assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(err.error_type(), "api_error");

        let err = TtsError::from_provider_status(503, "down".into());
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn internal_details_stay_hidden() {
        assert_eq!(TtsError::InternalError(None).client_message(), "Internal server error");
        assert_eq!(
            TtsError::InternalError(Some("quota exhausted".into())).client_message(),
            "quota exhausted"
        );
    }

    #[test]
    fn not_found_body() {
        let body = serde_json::to_value(TtsError::ProviderNotFound("polly".into()).to_body()).unwrap();

        assert_eq!(body["error"]["type"], "not_found_error");
        assert_eq!(body["error"]["code"], 404);
        assert_eq!(body["error"]["message"], "Provider 'polly' not found");
    }
}
