//! QueryService port - the remote query API the watch loop depends on
//!
//! Implementations:
//! - `LyticsClient` - blocking HTTP client against the Lytics API
//! - test stubs that record calls and return canned answers

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Record;
use crate::error::LyticsResult;

/// An entity returned by the API (rendered as JSON, never inspected)
pub type Entity = serde_json::Value;

/// Entity type used for ad-hoc evaluation against deployed queries
pub const SENTINEL_ENTITY_TYPE: &str = "user";
/// Key field used for ad-hoc evaluation
pub const SENTINEL_KEY_FIELD: &str = "user_id";
/// A key value that never matches a real entity, forcing on-the-fly evaluation
pub const SENTINEL_KEY_VALUE: &str = "should-never-ever-ever-match-12345";

/// One parsed statement returned by query validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryForm {
    /// Source stream the statement reads from
    #[serde(default, alias = "From")]
    pub from: String,
    /// Table/alias the statement writes into
    #[serde(default, alias = "Alias", skip_serializing_if = "String::is_empty")]
    pub alias: String,
}

/// A data stream and its most recent events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stream {
    #[serde(alias = "stream", alias = "Name")]
    pub name: String,
    #[serde(default, alias = "recent_events", alias = "Recent")]
    pub recent: Vec<Record>,
}

/// Remote query operations
pub trait QueryService {
    /// Validate query text; each returned form names its source stream
    fn validate_query(&self, query: &str) -> LyticsResult<Vec<QueryForm>>;

    /// List streams (optionally filtered by name) with their recent events
    fn list_streams(&self, filter: &str) -> LyticsResult<Vec<Stream>>;

    /// Evaluate `query` against a single record
    fn evaluate_query(&self, record: &Record, query: &str) -> LyticsResult<Entity>;

    /// Fetch an entity by key; `params` are passed through as query parameters
    fn fetch_entity(
        &self,
        entity_type: &str,
        key_field: &str,
        key_value: &str,
        fields: Option<&[String]>,
        params: &Record,
    ) -> LyticsResult<Entity>;
}

impl<T: QueryService + ?Sized> QueryService for &T {
    fn validate_query(&self, query: &str) -> LyticsResult<Vec<QueryForm>> {
        (**self).validate_query(query)
    }

    fn list_streams(&self, filter: &str) -> LyticsResult<Vec<Stream>> {
        (**self).list_streams(filter)
    }

    fn evaluate_query(&self, record: &Record, query: &str) -> LyticsResult<Entity> {
        (**self).evaluate_query(record, query)
    }

    fn fetch_entity(
        &self,
        entity_type: &str,
        key_field: &str,
        key_value: &str,
        fields: Option<&[String]>,
        params: &Record,
    ) -> LyticsResult<Entity> {
        (**self).fetch_entity(entity_type, key_field, key_value, fields, params)
    }
}
