use std::env;

use crate::errors::ConfigError;

pub const DEFAULT_SECRET_KEY: &str = "default-secret-key";

/// Application settings, read once at startup and shared immutably.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub secret_key: String,
    pub environment: String,
    pub testing: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let testing = match lookup("TESTING") {
            Some(raw) => parse_flag("TESTING", &raw)?,
            None => false,
        };

        Ok(Self {
            secret_key: lookup("SECRET_KEY").unwrap_or_else(|| DEFAULT_SECRET_KEY.to_string()),
            environment: lookup("APP_ENV").unwrap_or_else(|| "production".to_string()),
            testing,
        })
    }

    #[must_use]
    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            environment: "production".to_string(),
            testing: false,
        }
    }
}

/// Static protocol metadata stamped onto every request context.
///
/// The adapter sits behind an HTTPS-terminating proxy, so scheme and port
/// are fixed rather than derived from the inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub server_name: String,
    pub server_port: String,
    pub server_protocol: String,
    pub url_scheme: String,
    /// Projected header keys that keep their bare CGI name instead of
    /// receiving the `HTTP_` prefix.
    pub unprefixed_headers: Vec<String>,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup("GATEWAY_SERVER_NAME") {
            config.server_name = name;
        }
        if let Some(port) = lookup("GATEWAY_SERVER_PORT") {
            if port.parse::<u16>().is_err() {
                return Err(ConfigError::InvalidPort {
                    name: "GATEWAY_SERVER_PORT",
                    value: port,
                });
            }
            config.server_port = port;
        }

        Ok(config)
    }

    #[must_use]
    pub fn is_unprefixed(&self, key: &str) -> bool {
        self.unprefixed_headers.iter().any(|k| k == key)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server_name: "vercel".to_string(),
            server_port: "443".to_string(),
            server_protocol: "HTTP/1.1".to_string(),
            url_scheme: "https".to_string(),
            unprefixed_headers: vec!["CONTENT_TYPE".to_string(), "CONTENT_LENGTH".to_string()],
        }
    }
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn app_config_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.uses_default_secret());
        assert_eq!(config.environment, "production");
        assert!(!config.testing);
    }

    #[test]
    fn app_config_reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("SECRET_KEY", "s3cret"),
            ("APP_ENV", "staging"),
            ("TESTING", "True"),
        ]))
        .unwrap();
        assert_eq!(config.secret_key, "s3cret");
        assert_eq!(config.environment, "staging");
        assert!(config.testing);
        assert!(!config.uses_default_secret());
    }

    #[test]
    fn app_config_rejects_garbage_flag() {
        let err = AppConfig::from_lookup(lookup_from(&[("TESTING", "maybe")])).unwrap_err();
        assert_eq!(err.to_string(), "TESTING: expected a boolean, got \"maybe\"");
    }

    #[test]
    fn gateway_config_port_must_be_numeric() {
        let err =
            GatewayConfig::from_lookup(lookup_from(&[("GATEWAY_SERVER_PORT", "https")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));

        let config =
            GatewayConfig::from_lookup(lookup_from(&[("GATEWAY_SERVER_PORT", "8443")])).unwrap();
        assert_eq!(config.server_port, "8443");
        assert_eq!(config.server_name, "vercel");
    }

    #[test]
    fn app_config_accepts_only_strict_booleans() {
        for raw in ["1", "true", " TRUE "] {
            let config = AppConfig::from_lookup(lookup_from(&[("TESTING", raw)])).unwrap();
            assert!(config.testing, "{raw:?}");
        }
        for raw in ["0", "false", "False"] {
            let config = AppConfig::from_lookup(lookup_from(&[("TESTING", raw)])).unwrap();
            assert!(!config.testing, "{raw:?}");
        }
        for raw in ["yes", "on", "no", "off", ""] {
            let err = AppConfig::from_lookup(lookup_from(&[("TESTING", raw)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidFlag { name: "TESTING", .. }), "{raw:?}");
        }
    }

    #[test]
    fn gateway_config_reads_server_name() {
        let config = GatewayConfig::from_lookup(lookup_from(&[(
            "GATEWAY_SERVER_NAME",
            "me.example.com",
        )]))
        .unwrap();
        assert_eq!(config.server_name, "me.example.com");
        assert_eq!(config.server_port, "443");
    }

    #[test]
    fn content_headers_are_unprefixed_by_default() {
        let config = GatewayConfig::default();
        assert!(config.is_unprefixed("CONTENT_TYPE"));
        assert!(config.is_unprefixed("CONTENT_LENGTH"));
        assert!(!config.is_unprefixed("X_CUSTOM"));
    }
}
