use crate::gateway::Environ;

/// Rewrites the request context from `X-Forwarded-*` headers set by a
/// trusted reverse proxy.
///
/// Each count is the number of proxy hops trusted for that header; zero
/// disables it. With `n` trusted hops the `n`-th value from the right is
/// used, and a header with fewer than `n` values is ignored.
///
/// A trailing `/` on `X-Forwarded-Prefix` is trimmed before it becomes
/// `SCRIPT_NAME`, so `/me/` and `/me` mount the site at the same place.
/// werkzeug keeps the prefix verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyFix {
    pub x_for: usize,
    pub x_proto: usize,
    pub x_host: usize,
    pub x_prefix: usize,
}

impl Default for ProxyFix {
    fn default() -> Self {
        Self {
            x_for: 1,
            x_proto: 1,
            x_host: 1,
            x_prefix: 1,
        }
    }
}

impl ProxyFix {
    pub fn apply(&self, environ: &mut Environ) {
        if let Some(addr) = trusted_value(environ.var("HTTP_X_FORWARDED_FOR"), self.x_for) {
            environ.remote_addr = Some(addr);
        }

        if let Some(proto) = trusted_value(environ.var("HTTP_X_FORWARDED_PROTO"), self.x_proto) {
            environ.url_scheme = proto;
        }

        if let Some(host) = trusted_value(environ.var("HTTP_X_FORWARDED_HOST"), self.x_host) {
            let (name, port) = match host.rsplit_once(':') {
                // A bracketed IPv6 literal without a port also contains ':'.
                Some((name, port)) if !host.ends_with(']') => {
                    (name.to_string(), Some(port.to_string()))
                }
                _ => (host.clone(), None),
            };
            environ.server_name = name;
            if let Some(port) = port {
                environ.server_port = port;
            }
            environ.insert_var("HTTP_HOST", host);
        }

        if let Some(prefix) = trusted_value(environ.var("HTTP_X_FORWARDED_PREFIX"), self.x_prefix) {
            environ.script_name = prefix.trim_end_matches('/').to_string();
        }
    }
}

fn trusted_value(raw: Option<&str>, trusted: usize) -> Option<String> {
    if trusted == 0 {
        return None;
    }
    let values: Vec<&str> = raw?.split(',').collect();
    if values.len() < trusted {
        return None;
    }
    let value = values[values.len() - trusted].trim();
    (!value.is_empty()).then(|| value.to_string())
}
