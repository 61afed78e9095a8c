use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::GatewayError;

/// Response record returned to the serverless host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl OutboundResponse {
    /// The `500` record every adapter failure collapses to.
    #[must_use]
    pub fn failure(error: &GatewayError) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "text/plain".to_string());
        Self {
            status_code: 500,
            headers,
            body: error.to_string(),
        }
    }

    /// Merges header pairs in order; a repeated key keeps its last value.
    pub fn merge_headers<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.headers.extend(pairs);
    }
}

impl Default for OutboundResponse {
    fn default() -> Self {
        Self {
            status_code: 500,
            headers: BTreeMap::new(),
            body: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_host_field_names() {
        let mut response = OutboundResponse {
            status_code: 200,
            body: "hi".into(),
            ..OutboundResponse::default()
        };
        response.merge_headers(vec![("Content-Type".into(), "text/html".into())]);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "statusCode": 200,
                "headers": { "Content-Type": "text/html" },
                "body": "hi"
            })
        );
    }

    #[test]
    fn status_defaults_to_server_error() {
        assert_eq!(OutboundResponse::default().status_code, 500);
    }

    #[test]
    fn later_headers_win() {
        let mut response = OutboundResponse::default();
        response.merge_headers(vec![
            ("X-Trace".into(), "first".into()),
            ("X-Trace".into(), "second".into()),
        ]);
        assert_eq!(response.headers["X-Trace"], "second");
        assert_eq!(response.headers.len(), 1);
    }
}
