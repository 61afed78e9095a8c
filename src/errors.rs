use thiserror::Error;

/// Failure raised while translating one invocation through the gateway.
///
/// Every variant collapses to the same `500` response at the adapter
/// boundary; the display string becomes the response body.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    Application(String),

    #[error("application returned without calling start_response")]
    MissingStart,

    #[error("start_response called more than once")]
    DuplicateStart,

    #[error("invalid status line: {0:?}")]
    InvalidStatus(String),

    #[error("response body is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("invalid request body: {0}")]
    RequestBody(String),
}

impl From<anyhow::Error> for GatewayError {
    fn from(error: anyhow::Error) -> Self {
        GatewayError::Application(error.to_string())
    }
}

impl From<askama::Error> for GatewayError {
    fn from(error: askama::Error) -> Self {
        GatewayError::Application(format!("Template error: {error}"))
    }
}

impl From<base64::DecodeError> for GatewayError {
    fn from(error: base64::DecodeError) -> Self {
        GatewayError::RequestBody(error.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name}: expected a boolean, got {value:?}")]
    InvalidFlag { name: &'static str, value: String },

    #[error("{name}: expected a port number, got {value:?}")]
    InvalidPort { name: &'static str, value: String },
}
