//! Retrieval request builder
//!
//! Translates validated parameters into a [`RetrievalRequest`]. The only
//! side effect is making sure the output directory exists.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::error::RequestError;
use crate::domain::request::{
    Mode, RetrievalRequest, DEFAULT_CODEC, DEFAULT_MAX_HEIGHT, DEFAULT_QUALITY,
};

/// Audio-mode parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioOptions {
    pub codec: String,
    pub quality: String,
}

impl Default for AudioOptions {
    fn default() -> Self {
        Self {
            codec: DEFAULT_CODEC.to_string(),
            quality: DEFAULT_QUALITY.to_string(),
        }
    }
}

/// Video-mode parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoOptions {
    pub max_height: u32,
}

impl Default for VideoOptions {
    fn default() -> Self {
        Self {
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

/// Builds requests scoped to one output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalRequestBuilder {
    output_directory: PathBuf,
}

impl RetrievalRequestBuilder {
    pub fn new(output_directory: impl Into<PathBuf>) -> Self {
        Self {
            output_directory: output_directory.into(),
        }
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Build an audio request: best audio stream, transcoded to `codec` at `quality`.
    pub async fn build_audio(
        &self,
        url: &str,
        options: &AudioOptions,
    ) -> Result<RetrievalRequest, RequestError> {
        let request = RetrievalRequest::audio(
            url,
            self.output_directory.clone(),
            &options.codec,
            &options.quality,
        )?;
        self.ensure_output_directory().await?;
        debug!(url = request.target_url(), codec = %options.codec, quality = %options.quality, "built audio request");
        Ok(request)
    }

    /// Build a video request: best video up to `max_height` plus best audio, muxed to mp4.
    pub async fn build_video(
        &self,
        url: &str,
        options: VideoOptions,
    ) -> Result<RetrievalRequest, RequestError> {
        let request =
            RetrievalRequest::video(url, self.output_directory.clone(), options.max_height)?;
        self.ensure_output_directory().await?;
        debug!(url = request.target_url(), max_height = options.max_height, "built video request");
        Ok(request)
    }

    /// Validate and assemble a request without touching the filesystem.
    pub fn prepare(
        &self,
        url: &str,
        mode: Mode,
        audio: &AudioOptions,
        video: VideoOptions,
    ) -> Result<RetrievalRequest, RequestError> {
        match mode {
            Mode::Audio => RetrievalRequest::audio(
                url,
                self.output_directory.clone(),
                &audio.codec,
                &audio.quality,
            ),
            Mode::Video => {
                RetrievalRequest::video(url, self.output_directory.clone(), video.max_height)
            }
        }
    }

    /// Dispatch on `mode`; fields of the other mode are ignored.
    pub async fn build(
        &self,
        url: &str,
        mode: Mode,
        audio: &AudioOptions,
        video: VideoOptions,
    ) -> Result<RetrievalRequest, RequestError> {
        match mode {
            Mode::Audio => self.build_audio(url, audio).await,
            Mode::Video => self.build_video(url, video).await,
        }
    }

    /// Create the output directory if missing. Succeeds when it already exists.
    pub async fn ensure_output_directory(&self) -> Result<(), RequestError> {
        tokio::fs::create_dir_all(&self.output_directory)
            .await
            .map_err(|source| RequestError::OutputDirectory {
                path: self.output_directory.clone(),
                source,
            })
    }
}
