//! Fetch media use case

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::media::MediaMetadata;
use crate::domain::request::{Mode, RetrievalRequest};

use super::ports::{ExtractionError, MediaExtractor, OutputCallback};

/// Errors from the fetch use case
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Output from the fetch use case
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutput {
    /// Title as resolved by the engine
    pub title: String,
    /// `<title>.<extension>` of the final file
    pub filename: String,
    pub mode: Mode,
    pub metadata: MediaMetadata,
}

impl FetchOutput {
    /// Confirmation line printed once the file is in place
    pub fn confirmation(&self) -> String {
        match self.mode {
            Mode::Audio => format!("Downloaded and converted: {}", self.filename),
            Mode::Video => format!("Downloaded video: {}", self.filename),
        }
    }
}

/// Callbacks for progress and status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct FetchCallbacks {
    /// Called with every progress line the engine prints
    pub on_output: Option<OutputCallback>,
    /// Called right before the engine is invoked
    pub on_fetch_start: Option<Box<dyn Fn(&RetrievalRequest) + Send + Sync>>,
    /// Called after the engine returned successfully
    pub on_fetch_end: Option<Box<dyn Fn(&FetchOutput) + Send + Sync>>,
}

/// One-shot fetch use case
pub struct FetchMediaUseCase<E>
where
    E: MediaExtractor,
{
    extractor: E,
}

impl<E> FetchMediaUseCase<E>
where
    E: MediaExtractor,
{
    /// Create a new use case instance
    pub fn new(extractor: E) -> Self {
        Self { extractor }
    }

    /// Hand the request to the engine once and report the resulting file.
    ///
    /// There is no retry: any engine failure ends the invocation.
    pub async fn execute(
        &self,
        request: &RetrievalRequest,
        callbacks: FetchCallbacks,
    ) -> Result<FetchOutput, FetchError> {
        if let Some(ref cb) = callbacks.on_fetch_start {
            cb(request);
        }

        debug!(
            url = request.target_url(),
            mode = %request.mode(),
            format = %request.format_selection(),
            "invoking extraction engine"
        );

        let metadata = self
            .extractor
            .resolve_and_fetch(request, callbacks.on_output)
            .await?;

        let output = FetchOutput {
            title: metadata.title.clone(),
            filename: request.output_filename(&metadata.title),
            mode: request.mode(),
            metadata,
        };

        info!(filename = %output.filename, "fetch complete");

        if let Some(ref cb) = callbacks.on_fetch_end {
            cb(&output);
        }

        Ok(output)
    }
}
