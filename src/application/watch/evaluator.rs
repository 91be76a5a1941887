//! Preview evaluation
//!
//! Runs the samples of a [`LogicalFile`] through the remote query service and
//! reports one event per attempted sample. A failing sample never stops the
//! ones after it.

use crate::domain::entities::LogicalFile;
use crate::domain::ports::{
    QueryService, SENTINEL_ENTITY_TYPE, SENTINEL_KEY_FIELD, SENTINEL_KEY_VALUE,
};
use crate::domain::value_objects::Record;
use crate::error::LyticsResult;

use super::event::{EvaluationMode, WatchEvent};

/// Evaluates LogicalFile samples against a query service
pub struct Evaluator<'a, S: QueryService> {
    service: &'a S,
    limit: usize,
}

impl<'a, S: QueryService> Evaluator<'a, S> {
    /// `limit` caps the samples evaluated per call
    pub fn new(service: &'a S, limit: usize) -> Self {
        Self { service, limit }
    }

    /// Evaluate up to `limit` samples of `file`
    ///
    /// With a query the samples run against it; without one they run against
    /// the account's deployed queries through a sentinel-key entity fetch.
    pub fn evaluate(&self, file: &LogicalFile, on_event: &impl Fn(WatchEvent)) {
        if file.samples().is_empty() {
            on_event(WatchEvent::NoData {
                name: file.name().to_string(),
            });
            return;
        }

        let mode = if file.has_query() {
            EvaluationMode::Query
        } else {
            EvaluationMode::DeployedQueries
        };
        on_event(WatchEvent::EvaluationStarted {
            name: file.name().to_string(),
            mode,
        });

        for sample in file.samples().iter().take(self.limit) {
            let result = match mode {
                EvaluationMode::Query => self.service.evaluate_query(sample, file.query()),
                EvaluationMode::DeployedQueries => self.evaluate_deployed(file.name(), sample),
            };

            match result {
                Ok(entity) => on_event(WatchEvent::EntityEvaluated {
                    name: file.name().to_string(),
                    entity,
                }),
                Err(e) => on_event(WatchEvent::EvaluationFailed {
                    name: file.name().to_string(),
                    message: e.to_string(),
                    record: sample.encode(),
                }),
            }
        }
    }

    fn evaluate_deployed(&self, stream: &str, sample: &Record) -> LyticsResult<serde_json::Value> {
        let mut params = Record::new();
        params.add("stream", stream);
        params.add("state", sample.to_state_json()?);

        self.service.fetch_entity(
            SENTINEL_ENTITY_TYPE,
            SENTINEL_KEY_FIELD,
            SENTINEL_KEY_VALUE,
            None,
            &params,
        )
    }
}
