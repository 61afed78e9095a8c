//! Synchronous request-handling interface.
//!
//! An [`Application`] receives a typed [`Environ`] plus a [`StartResponse`]
//! callback. It must call [`StartResponse::start`] exactly once with a
//! status line and header pairs, then return the body as ordered byte
//! fragments.

pub mod environ;
pub mod status;

pub use environ::{Environ, encode_query, project_header_key};
pub use status::{parse_status_code, status_line};

use crate::errors::GatewayError;

/// Ordered header pairs as reported through [`StartResponse::start`].
pub type HeaderList = Vec<(String, String)>;

/// Body fragments produced by an application, concatenated in order.
pub type Body = Vec<Vec<u8>>;

pub trait Application: Send + Sync {
    fn call(&self, environ: &Environ, start_response: &mut StartResponse)
    -> Result<Body, GatewayError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ResponseState {
    AwaitingStart,
    Started { status: u16, headers: HeaderList },
}

/// Completion callback with a two-state lifecycle: awaiting a call, then
/// started. It cannot return to the first state.
#[derive(Debug)]
pub struct StartResponse {
    state: ResponseState,
}

impl StartResponse {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ResponseState::AwaitingStart,
        }
    }

    /// Records the status and headers of the response.
    ///
    /// # Errors
    ///
    /// Fails with [`GatewayError::DuplicateStart`] on a second call and
    /// with [`GatewayError::InvalidStatus`] when the status line does not
    /// begin with a numeric code.
    pub fn start(&mut self, status: &str, headers: HeaderList) -> Result<(), GatewayError> {
        if self.is_started() {
            return Err(GatewayError::DuplicateStart);
        }
        let status = parse_status_code(status)?;
        self.state = ResponseState::Started { status, headers };
        Ok(())
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        matches!(self.state, ResponseState::Started { .. })
    }

    /// Consumes the callback and yields what the application reported.
    pub fn finish(self) -> Result<(u16, HeaderList), GatewayError> {
        match self.state {
            ResponseState::Started { status, headers } => Ok((status, headers)),
            ResponseState::AwaitingStart => Err(GatewayError::MissingStart),
        }
    }
}

impl Default for StartResponse {
    fn default() -> Self {
        Self::new()
    }
}
