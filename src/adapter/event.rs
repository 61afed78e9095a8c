use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::GatewayError;

/// API Gateway proxy event, as delivered by the serverless host.
///
/// Maps are key-ordered so that serializing them is deterministic. The
/// host sends `null` rather than `{}` for an empty query map; both
/// deserialize to an empty map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundEvent {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub query_string_parameters: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_base64_encoded: bool,
    #[serde(default)]
    pub raw_path: Option<String>,
    #[serde(default)]
    pub raw_query_string: Option<String>,
}

impl InboundEvent {
    /// Request method; `GET` when the event carries none.
    #[must_use]
    pub fn method(&self) -> &str {
        match self.http_method.as_deref() {
            Some(method) if !method.is_empty() => method,
            _ => "GET",
        }
    }

    /// Request path, falling back to the v2 `rawPath` field. Empty means
    /// root.
    #[must_use]
    pub fn path(&self) -> &str {
        self.path
            .as_deref()
            .or(self.raw_path.as_deref())
            .unwrap_or("")
    }

    /// Decoded request body bytes; empty when the event has no body.
    pub fn body_bytes(&self) -> Result<Vec<u8>, GatewayError> {
        use base64::Engine as _;

        match self.body.as_deref() {
            None | Some("") => Ok(Vec::new()),
            Some(body) if self.is_base64_encoded => {
                Ok(base64::engine::general_purpose::STANDARD.decode(body)?)
            }
            Some(body) => Ok(body.as_bytes().to_vec()),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
