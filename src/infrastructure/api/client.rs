//! HTTP client for the query endpoints of the Lytics API
//!
//! Every response is wrapped in an envelope: `{"status", "message", "data"}`.
//! Calls block and rely on the transport's default timeouts.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::domain::ports::{Entity, QueryForm, QueryService, Stream};
use crate::domain::value_objects::Record;
use crate::error::{LyticsError, LyticsResult};

/// Production API endpoint
pub const DEFAULT_API_URL: &str = "https://api.lytics.io";

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: serde_json::Value,
}

/// Blocking Lytics API client
#[derive(Debug, Clone)]
pub struct LyticsClient {
    agent: ureq::Agent,
    base_url: Url,
    api_key: String,
}

impl LyticsClient {
    /// Create a client for `base_url` authenticating with `api_key`
    pub fn new(base_url: &str, api_key: impl Into<String>) -> LyticsResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| LyticsError::Transport(format!("invalid api url '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(LyticsError::Transport(format!(
                "invalid api url '{}'",
                base_url
            )));
        }
        Ok(Self {
            agent: ureq::AgentBuilder::new().build(),
            base_url,
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/api/{segments...}` with each segment percent-encoded
    pub(crate) fn endpoint(&self, segments: &[&str]) -> LyticsResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LyticsError::Transport(format!("invalid api url '{}'", self.base_url)))?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn query_test_url(&self, record: &Record) -> LyticsResult<Url> {
        let mut url = self.endpoint(&["query", "_test"])?;
        if !record.is_empty() {
            url.query_pairs_mut().extend_pairs(record.iter());
        }
        Ok(url)
    }

    pub(crate) fn entity_url(
        &self,
        entity_type: &str,
        key_field: &str,
        key_value: &str,
        fields: Option<&[String]>,
        params: &Record,
    ) -> LyticsResult<Url> {
        let mut url = self.endpoint(&["entity", entity_type, key_field, key_value])?;
        let fields = fields.filter(|f| !f.is_empty());
        if fields.is_some() || !params.is_empty() {
            let mut query = url.query_pairs_mut();
            if let Some(fields) = fields {
                query.append_pair("fields", &fields.join(","));
            }
            query.extend_pairs(params.iter());
        }
        Ok(url)
    }

    fn send<T: DeserializeOwned>(&self, method: &str, url: &Url, body: Option<&str>) -> LyticsResult<T> {
        tracing::debug!(method, url = %url, "api request");
        let request = self
            .agent
            .request_url(method, url)
            .set("Authorization", &self.api_key)
            .set("Accept", "application/json");

        let result = match body {
            Some(body) => request
                .set("Content-Type", "text/plain")
                .send_string(body),
            None => request.call(),
        };

        match result {
            Ok(response) => {
                let text = response
                    .into_string()
                    .map_err(|e| LyticsError::Transport(e.to_string()))?;
                decode_data(&text)
            }
            Err(ureq::Error::Status(status, response)) => {
                let text = response.into_string().unwrap_or_default();
                Err(LyticsError::Api {
                    status,
                    message: error_message(&text),
                })
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(LyticsError::Transport(transport.to_string()))
            }
        }
    }
}

/// Unwrap `data` from a success envelope
pub(crate) fn decode_data<T: DeserializeOwned>(text: &str) -> LyticsResult<T> {
    let envelope: Envelope = serde_json::from_str(text)
        .map_err(|e| LyticsError::Transport(format!("unexpected api response: {}", e)))?;
    serde_json::from_value(envelope.data)
        .map_err(|e| LyticsError::Transport(format!("unexpected api response data: {}", e)))
}

/// Best message for an error body: the envelope message, else the raw text
pub(crate) fn error_message(text: &str) -> String {
    match serde_json::from_str::<Envelope>(text) {
        Ok(envelope) if !envelope.message.is_empty() => envelope.message,
        _ => text.trim().to_string(),
    }
}

impl QueryService for LyticsClient {
    fn validate_query(&self, query: &str) -> LyticsResult<Vec<QueryForm>> {
        let url = self.endpoint(&["query", "_validate"])?;
        self.send("POST", &url, Some(query))
    }

    fn list_streams(&self, filter: &str) -> LyticsResult<Vec<Stream>> {
        let mut url = self.endpoint(&["schema", "_streams"])?;
        if !filter.is_empty() {
            url.query_pairs_mut().append_pair("stream", filter);
        }
        self.send("GET", &url, None)
    }

    fn evaluate_query(&self, record: &Record, query: &str) -> LyticsResult<Entity> {
        let url = self.query_test_url(record)?;
        self.send("POST", &url, Some(query))
    }

    fn fetch_entity(
        &self,
        entity_type: &str,
        key_field: &str,
        key_value: &str,
        fields: Option<&[String]>,
        params: &Record,
    ) -> LyticsResult<Entity> {
        let url = self.entity_url(entity_type, key_field, key_value, fields, params)?;
        self.send("GET", &url, None)
    }
}
