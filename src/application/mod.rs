//! Application layer - Use cases and port interfaces
//!
//! Contains the request builder, the fetch workflow and the trait
//! definitions for the extraction engine and config storage.

pub mod fetch;
pub mod ports;
pub mod request_builder;

// Re-export use cases
pub use fetch::{FetchCallbacks, FetchError, FetchMediaUseCase, FetchOutput};
pub use request_builder::{AudioOptions, RetrievalRequestBuilder, VideoOptions};
