use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, error};

use super::{InboundEvent, OutboundResponse};
use crate::core::config::GatewayConfig;
use crate::errors::GatewayError;
use crate::gateway::{Application, Environ, StartResponse, encode_query, project_header_key};

/// Bridges serverless proxy events to an embedded [`Application`].
///
/// One adapter serves every invocation; it holds no per-request state.
#[derive(Debug)]
pub struct EventAdapter<A> {
    app: A,
    config: GatewayConfig,
}

impl<A: Application> EventAdapter<A> {
    pub fn new(app: A, config: GatewayConfig) -> Self {
        Self { app, config }
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Produces exactly one response for `event`. Failures become a plain
    /// text `500` carrying the error message.
    pub fn handle(&self, event: &InboundEvent) -> OutboundResponse {
        match self.try_handle(event) {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Error processing request");
                OutboundResponse::failure(&e)
            }
        }
    }

    pub fn try_handle(&self, event: &InboundEvent) -> Result<OutboundResponse, GatewayError> {
        let environ = build_environ(event, &self.config)?;
        invoke(&self.app, &environ)
    }
}

/// Builds the request context for one event.
pub fn build_environ(event: &InboundEvent, config: &GatewayConfig) -> Result<Environ, GatewayError> {
    let mut environ = Environ::new(event.method(), event.path(), config);

    environ.query_string = match event.raw_query_string.as_deref() {
        Some(raw) if event.query_string_parameters.is_empty() => raw.to_string(),
        _ => encode_query(&event.query_string_parameters),
    };

    for (name, value) in &event.headers {
        environ.insert_var(project_header_key(name, config), value.as_str());
    }

    environ.input = event.body_bytes()?;
    if !environ.input.is_empty() && environ.var("CONTENT_LENGTH").is_none() {
        let length = environ.input.len().to_string();
        environ.insert_var("CONTENT_LENGTH", length);
    }

    Ok(environ)
}

/// Calls `app` once and assembles the response it reports.
///
/// A panic inside the application is caught and reported like any other
/// application error.
pub fn invoke<A>(app: &A, environ: &Environ) -> Result<OutboundResponse, GatewayError>
where
    A: Application + ?Sized,
{
    let mut start_response = StartResponse::new();

    let fragments = panic::catch_unwind(AssertUnwindSafe(|| {
        app.call(environ, &mut start_response)
    }))
    .map_err(|payload| GatewayError::Application(panic_message(payload.as_ref())))??;

    let (status_code, headers) = start_response.finish()?;
    debug!(
        status = status_code,
        fragments = fragments.len(),
        "Application returned"
    );

    let mut response = OutboundResponse {
        status_code,
        ..OutboundResponse::default()
    };
    response.merge_headers(headers);
    response.body = String::from_utf8(fragments.concat())?;

    Ok(response)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "application panicked".to_string()
    }
}
