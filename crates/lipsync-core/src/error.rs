use http::StatusCode;
use serde::Serialize;

/// Domain error that knows how it should be reported over HTTP
///
/// Feature crates implement this for their error enums so the response
/// shape stays identical across endpoints.
pub trait HttpError: std::error::Error {
    fn status_code(&self) -> StatusCode;

    /// Machine-readable category, e.g. `invalid_request_error`
    fn error_type(&self) -> &str;

    /// Message that may be shown to API consumers
    fn client_message(&self) -> String;

    /// `OpenAI`-compatible error body for this error
    fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: ErrorDetails {
                message: self.client_message(),
                r#type: self.error_type().to_string(),
                code: self.status_code().as_u16(),
            },
        }
    }
}

/// Error envelope: `{ "error": { "message", "type", "code" } }`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetails,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub message: String,
    pub r#type: String,
    pub code: u16,
}
