//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod query_service;

pub use query_service::{
    Entity, QueryForm, QueryService, Stream, SENTINEL_ENTITY_TYPE, SENTINEL_KEY_FIELD,
    SENTINEL_KEY_VALUE,
};
