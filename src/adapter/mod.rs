//! Serverless event adapter: proxy event in, gateway call, response record out.

pub mod event;
pub mod handler;
pub mod response;
pub mod translate;

pub use event::InboundEvent;
pub use handler::handler;
pub use response::OutboundResponse;
pub use translate::{EventAdapter, build_environ, invoke};
