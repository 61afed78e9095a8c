//! The portfolio site: four static pages behind the gateway interface.

pub mod app;
pub mod proxy;
pub mod routes;
pub mod security;
pub mod templates;

pub use app::PortfolioApp;
pub use proxy::ProxyFix;
pub use routes::Page;
pub use security::SECURITY_HEADERS;
pub use templates::STYLESHEET_PATH;
