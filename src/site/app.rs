use tracing::debug;

use super::proxy::ProxyFix;
use super::routes::Page;
use super::security::apply_security_headers;
use super::templates::{RenderContext, STYLESHEET, STYLESHEET_PATH, render_error, render_page};
use crate::core::config::AppConfig;
use crate::errors::GatewayError;
use crate::gateway::{Application, Body, Environ, HeaderList, StartResponse, status_line};

const ALLOWED_METHODS: &str = "GET, HEAD, OPTIONS";
const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
const CSS_CONTENT_TYPE: &str = "text/css; charset=utf-8";

/// The portfolio site as a gateway [`Application`].
#[derive(Debug, Clone)]
pub struct PortfolioApp {
    config: AppConfig,
    proxy: ProxyFix,
}

struct Reply {
    status: u16,
    headers: HeaderList,
    body: String,
}

impl Reply {
    fn html(status: u16, body: String) -> Self {
        Self::with_content_type(status, HTML_CONTENT_TYPE, body)
    }

    fn with_content_type(status: u16, content_type: &str, body: String) -> Self {
        let headers = vec![
            ("Content-Type".to_string(), content_type.to_string()),
            ("Content-Length".to_string(), body.len().to_string()),
        ];
        Self {
            status,
            headers,
            body,
        }
    }

    fn stylesheet() -> Self {
        Self::with_content_type(200, CSS_CONTENT_TYPE, STYLESHEET.to_string())
    }

    fn options() -> Self {
        Self {
            status: 200,
            headers: vec![("Content-Length".to_string(), "0".to_string())],
            body: String::new(),
        }
        .with_allow()
    }

    fn with_allow(mut self) -> Self {
        self.headers
            .push(("Allow".to_string(), ALLOWED_METHODS.to_string()));
        self
    }
}

impl PortfolioApp {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            proxy: ProxyFix::default(),
        }
    }

    #[must_use]
    pub fn with_proxy_fix(mut self, proxy: ProxyFix) -> Self {
        self.proxy = proxy;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn dispatch(&self, environ: &Environ) -> Result<Reply, GatewayError> {
        let ctx = render_context(environ);
        let method = environ.request_method.as_str();

        if environ.path_info == STYLESHEET_PATH {
            return Ok(match method {
                "GET" | "HEAD" => Reply::stylesheet(),
                "OPTIONS" => Reply::options(),
                _ => method_not_allowed(&ctx)?,
            });
        }

        let Some(page) = Page::from_path(&environ.path_info) else {
            return Ok(Reply::html(
                404,
                render_error(
                    "Not Found",
                    "The requested URL was not found on the server.",
                    &ctx,
                )?,
            ));
        };

        Ok(match method {
            "GET" | "HEAD" => Reply::html(200, render_page(page, &ctx)?),
            "OPTIONS" => Reply::options(),
            _ => method_not_allowed(&ctx)?,
        })
    }
}

fn method_not_allowed(ctx: &RenderContext) -> Result<Reply, GatewayError> {
    let body = render_error(
        "Method Not Allowed",
        "The method is not allowed for the requested URL.",
        ctx,
    )?;
    Ok(Reply::html(405, body).with_allow())
}

impl Application for PortfolioApp {
    fn call(
        &self,
        environ: &Environ,
        start_response: &mut StartResponse,
    ) -> Result<Body, GatewayError> {
        let mut environ = environ.clone();
        self.proxy.apply(&mut environ);

        debug!(
            method = %environ.request_method,
            path = %environ.path_info,
            remote_addr = environ.remote_addr.as_deref().unwrap_or("-"),
            testing = self.config.testing,
            "Dispatching request"
        );

        let Reply {
            status,
            mut headers,
            body,
        } = self.dispatch(&environ)?;
        apply_security_headers(&mut headers);
        start_response.start(&status_line(status), headers)?;

        if environ.request_method == "HEAD" {
            Ok(Vec::new())
        } else {
            Ok(vec![body.into_bytes()])
        }
    }
}

/// Derives link prefix and canonical URL from the (proxy-fixed) context.
fn render_context(environ: &Environ) -> RenderContext {
    let host = match environ.var("HTTP_HOST") {
        Some(host) => host.to_string(),
        None => {
            let default_port = matches!(
                (environ.url_scheme.as_str(), environ.server_port.as_str()),
                ("https", "443") | ("http", "80")
            );
            if default_port {
                environ.server_name.clone()
            } else {
                format!("{}:{}", environ.server_name, environ.server_port)
            }
        }
    };

    let path = if environ.path_info.is_empty() {
        "/"
    } else {
        environ.path_info.as_str()
    };

    RenderContext {
        prefix: environ.script_name.clone(),
        canonical_url: format!(
            "{}://{}{}{}",
            environ.url_scheme, host, environ.script_name, path
        ),
    }
}
