//! Lytics API client
//!
//! Blocking HTTP implementation of the [`QueryService`](crate::domain::ports::QueryService) port.

mod client;

pub use client::{LyticsClient, DEFAULT_API_URL};
