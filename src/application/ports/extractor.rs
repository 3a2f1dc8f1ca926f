//! Extraction engine port interface

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::media::MediaMetadata;
use crate::domain::request::RetrievalRequest;

/// Extraction errors. The engine's own message is carried through untouched.
#[derive(Debug, Clone, Error)]
pub enum ExtractionError {
    #[error("Extraction engine not found: {0}. Install yt-dlp or point --yt-dlp at it")]
    EngineNotFound(String),

    #[error("Failed to start extraction engine: {0}")]
    StartFailed(String),

    #[error("Could not resolve media: {0}")]
    Resolution(String),

    #[error("Download failed: {0}")]
    Transfer(String),

    #[error("Postprocessing failed: {0}")]
    Postprocessing(String),

    #[error("Extraction engine exited with {}: {message}", describe_exit(.code))]
    EngineFailed { code: Option<i32>, message: String },

    #[error("Engine returned no usable metadata: {0}")]
    InvalidMetadata(String),

    #[error("I/O error while talking to the engine: {0}")]
    Io(String),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {}", c),
        None => "a signal".to_string(),
    }
}

/// Callback receiving the engine's progress lines as they arrive
pub type OutputCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Port for the external extraction engine.
#[async_trait]
pub trait MediaExtractor: Send + Sync {
    /// Resolve the request's URL, fetch the selected streams and run any
    /// requested postprocessing. Blocks until the file is in place.
    ///
    /// # Arguments
    /// * `request` - The fully built retrieval request
    /// * `on_output` - Optional callback for engine progress lines
    ///
    /// # Returns
    /// Metadata of the resolved media, or an error
    async fn resolve_and_fetch(
        &self,
        request: &RetrievalRequest,
        on_output: Option<OutputCallback>,
    ) -> Result<MediaMetadata, ExtractionError>;
}
