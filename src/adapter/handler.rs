//! Lambda entrypoint for the portfolio site.

use lambda_runtime::{Error, LambdaEvent};
use tracing::info;

use super::{EventAdapter, InboundEvent, OutboundResponse};
use crate::gateway::Application;

pub use self::function_handler as handler;

/// Lambda handler: one proxy event in, one response record out.
///
/// # Errors
///
/// Never fails at the runtime level; adapter failures are returned as a
/// `500` response record instead.
#[tracing::instrument(level = "info", skip(adapter, event))]
pub async fn function_handler<A: Application>(
    adapter: &EventAdapter<A>,
    event: LambdaEvent<InboundEvent>,
) -> Result<OutboundResponse, Error> {
    let (payload, context) = event.into_parts();

    #[cfg(feature = "debug-logs")]
    tracing::debug!("Inbound event: {:?}", payload);

    info!(
        request_id = %context.request_id,
        method = %payload.method(),
        path = %payload.path(),
        "Portfolio Lambda received request"
    );

    let response = adapter.handle(&payload);

    info!(
        request_id = %context.request_id,
        status = response.status_code,
        "Request completed"
    );

    Ok(response)
}
