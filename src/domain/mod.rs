//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! Nothing here talks to the extraction engine.

pub mod config;
pub mod error;
pub mod media;
pub mod request;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use media::MediaMetadata;
pub use request::{Mode, Postprocessing, RequestShape, RetrievalRequest};
