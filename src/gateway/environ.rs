use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::core::config::GatewayConfig;

/// Typed request context handed to an [`Application`](super::Application).
///
/// The fixed CGI fields live in named members; projected request headers
/// live in `vars`, keyed by their CGI names (`HTTP_X_CUSTOM`,
/// `CONTENT_TYPE`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environ {
    pub request_method: String,
    pub script_name: String,
    pub path_info: String,
    pub query_string: String,
    pub server_name: String,
    pub server_port: String,
    pub server_protocol: String,
    pub url_scheme: String,
    pub remote_addr: Option<String>,
    pub input: Vec<u8>,
    vars: BTreeMap<String, String>,
}

impl Environ {
    /// Starts a context for `method` and `path` carrying the static
    /// protocol metadata from `config`.
    #[must_use]
    pub fn new(method: &str, path: &str, config: &GatewayConfig) -> Self {
        Self {
            request_method: method.to_string(),
            script_name: String::new(),
            path_info: path.to_string(),
            query_string: String::new(),
            server_name: config.server_name.clone(),
            server_port: config.server_port.clone(),
            server_protocol: config.server_protocol.clone(),
            url_scheme: config.url_scheme.clone(),
            remote_addr: None,
            input: Vec::new(),
            vars: BTreeMap::new(),
        }
    }

    /// Looks up a CGI variable by name, fixed fields included.
    #[must_use]
    pub fn var(&self, key: &str) -> Option<&str> {
        match key {
            "REQUEST_METHOD" => Some(self.request_method.as_str()),
            "SCRIPT_NAME" => Some(self.script_name.as_str()),
            "PATH_INFO" => Some(self.path_info.as_str()),
            "QUERY_STRING" => Some(self.query_string.as_str()),
            "SERVER_NAME" => Some(self.server_name.as_str()),
            "SERVER_PORT" => Some(self.server_port.as_str()),
            "SERVER_PROTOCOL" => Some(self.server_protocol.as_str()),
            "REMOTE_ADDR" => self.remote_addr.as_deref(),
            _ => self.vars.get(key).map(String::as_str),
        }
    }

    /// Sets a projected variable. Later writes replace earlier ones.
    pub fn insert_var(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Projected variables in key order.
    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Looks up a request header by its HTTP name, e.g. `X-Forwarded-For`.
    #[must_use]
    pub fn header(&self, name: &str, config: &GatewayConfig) -> Option<&str> {
        self.vars
            .get(&project_header_key(name, config))
            .map(String::as_str)
    }

    /// Decodes the query string back into key/value pairs.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        form_urlencoded::parse(self.query_string.as_bytes())
            .into_owned()
            .collect()
    }
}

/// Maps an HTTP header name onto its CGI variable name.
///
/// The name is upper-cased and `-` becomes `_`; anything not listed in
/// `config.unprefixed_headers` gains an `HTTP_` prefix.
#[must_use]
pub fn project_header_key(name: &str, config: &GatewayConfig) -> String {
    let key = name.to_ascii_uppercase().replace('-', "_");
    if config.is_unprefixed(&key) {
        key
    } else {
        format!("HTTP_{key}")
    }
}

/// Serializes query parameters with `application/x-www-form-urlencoded`
/// rules.
#[must_use]
pub fn encode_query<'a, I>(params: I) -> String
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_keys_follow_cgi_convention() {
        let config = GatewayConfig::default();
        assert_eq!(project_header_key("X-Custom", &config), "HTTP_X_CUSTOM");
        assert_eq!(project_header_key("accept-language", &config), "HTTP_ACCEPT_LANGUAGE");
        assert_eq!(project_header_key("Content-Type", &config), "CONTENT_TYPE");
        assert_eq!(project_header_key("content-length", &config), "CONTENT_LENGTH");
    }

    #[test]
    fn custom_exception_list_is_honored() {
        let config = GatewayConfig {
            unprefixed_headers: vec!["AUTHORIZATION".to_string()],
            ..GatewayConfig::default()
        };
        assert_eq!(project_header_key("Authorization", &config), "AUTHORIZATION");
        assert_eq!(project_header_key("Content-Type", &config), "HTTP_CONTENT_TYPE");
    }

    #[test]
    fn query_encoding_uses_form_rules() {
        let mut params = BTreeMap::new();
        params.insert("q".to_string(), "rust lang".to_string());
        params.insert("tag".to_string(), "a&b=c".to_string());
        assert_eq!(encode_query(&params), "q=rust+lang&tag=a%26b%3Dc");
    }

    #[test]
    fn fixed_fields_are_visible_through_var() {
        let config = GatewayConfig::default();
        let mut environ = Environ::new("GET", "/projects", &config);
        environ.insert_var("HTTP_HOST", "example.com");

        assert_eq!(environ.var("REQUEST_METHOD"), Some("GET"));
        assert_eq!(environ.var("PATH_INFO"), Some("/projects"));
        assert_eq!(environ.var("SERVER_NAME"), Some("vercel"));
        assert_eq!(environ.var("SERVER_PORT"), Some("443"));
        assert_eq!(environ.var("REMOTE_ADDR"), None);
        assert_eq!(environ.header("Host", &config), Some("example.com"));
    }
}
