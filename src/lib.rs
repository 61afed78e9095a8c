//! Portfolio - a small static portfolio site served from AWS Lambda.
//!
//! The site is four fixed pages (home, education, experience, projects)
//! rendered from compiled-in templates. It runs behind an HTTPS
//! terminating proxy as a single Lambda function.
//!
//! # Architecture
//!
//! - `adapter` turns API Gateway proxy events into gateway calls and back
//! - `gateway` defines the synchronous request-handling interface
//!   (`Environ`, `StartResponse`, `Application`)
//! - `site` is the application behind that interface: routing, templates,
//!   security headers and forwarded-header handling
//! - `core::config` holds the immutable configuration built at startup
//!
//! # Example
//!
//! ```
//! use portfolio::adapter::{EventAdapter, InboundEvent};
//! use portfolio::core::config::{AppConfig, GatewayConfig};
//! use portfolio::site::PortfolioApp;
//!
//! let adapter = EventAdapter::new(
//!     PortfolioApp::new(AppConfig::default()),
//!     GatewayConfig::default(),
//! );
//!
//! let event = InboundEvent {
//!     http_method: Some("GET".into()),
//!     path: Some("/education".into()),
//!     ..InboundEvent::default()
//! };
//!
//! let response = adapter.handle(&event);
//! assert_eq!(response.status_code, 200);
//! assert_eq!(response.headers["X-Frame-Options"], "SAMEORIGIN");
//! ```
// Module declarations
pub mod adapter;
pub mod core;
pub mod errors;
pub mod gateway;
pub mod site;

pub use errors::{ConfigError, GatewayError};

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. The level comes from `RUST_LOG` and
/// defaults to `info` (`debug` with the `debug-logs` feature). Calling it
/// more than once is harmless.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// portfolio::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let default_level = if cfg!(feature = "debug-logs") {
        "debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
