//! Retrieval request entity

use std::path::{Path, PathBuf};

use crate::domain::error::RequestError;

use super::Mode;

/// Default audio codec
pub const DEFAULT_CODEC: &str = "mp3";

/// Default audio bitrate in kbps
pub const DEFAULT_QUALITY: &str = "192";

/// Default maximum video height
pub const DEFAULT_MAX_HEIGHT: u32 = 1080;

/// Container every video request is muxed into
pub const VIDEO_CONTAINER: &str = "mp4";

/// File name pattern, interpolated by the engine with the resolved title
pub const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Audio-only request fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioShape {
    pub codec: String,
    pub quality: String,
}

/// Video request fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoShape {
    pub max_height: u32,
    pub container_format: &'static str,
}

/// The mode-specific half of a request. Exactly one shape exists per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestShape {
    Audio(AudioShape),
    Video(VideoShape),
}

/// Audio extraction directive handed to the engine's postprocessor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Postprocessing {
    pub codec: String,
    pub quality: String,
}

/// A fully specified, immutable request for the extraction engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalRequest {
    target_url: String,
    output_directory: PathBuf,
    output_template: String,
    shape: RequestShape,
}

impl RetrievalRequest {
    /// Build an audio request. Validates input only; does not touch the filesystem.
    pub fn audio(
        url: &str,
        output_directory: impl Into<PathBuf>,
        codec: &str,
        quality: &str,
    ) -> Result<Self, RequestError> {
        let target_url = validate_url(url)?;

        let codec = codec.trim();
        if codec.is_empty() {
            return Err(RequestError::EmptyCodec);
        }
        let quality = quality.trim();
        if quality.is_empty() {
            return Err(RequestError::EmptyQuality);
        }

        Ok(Self::assemble(
            target_url,
            output_directory.into(),
            RequestShape::Audio(AudioShape {
                codec: codec.to_string(),
                quality: quality.to_string(),
            }),
        ))
    }

    /// Build a video request. Validates input only; does not touch the filesystem.
    pub fn video(
        url: &str,
        output_directory: impl Into<PathBuf>,
        max_height: u32,
    ) -> Result<Self, RequestError> {
        let target_url = validate_url(url)?;

        if max_height == 0 {
            return Err(RequestError::InvalidResolution(max_height));
        }

        Ok(Self::assemble(
            target_url,
            output_directory.into(),
            RequestShape::Video(VideoShape {
                max_height,
                container_format: VIDEO_CONTAINER,
            }),
        ))
    }

    fn assemble(target_url: String, output_directory: PathBuf, shape: RequestShape) -> Self {
        let output_template = output_directory
            .join(OUTPUT_TEMPLATE)
            .to_string_lossy()
            .into_owned();

        Self {
            target_url,
            output_directory,
            output_template,
            shape,
        }
    }

    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    pub fn mode(&self) -> Mode {
        match self.shape {
            RequestShape::Audio(_) => Mode::Audio,
            RequestShape::Video(_) => Mode::Video,
        }
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    pub fn output_template(&self) -> &str {
        &self.output_template
    }

    pub fn shape(&self) -> &RequestShape {
        &self.shape
    }

    pub fn codec(&self) -> Option<&str> {
        match &self.shape {
            RequestShape::Audio(a) => Some(&a.codec),
            RequestShape::Video(_) => None,
        }
    }

    pub fn quality(&self) -> Option<&str> {
        match &self.shape {
            RequestShape::Audio(a) => Some(&a.quality),
            RequestShape::Video(_) => None,
        }
    }

    pub fn max_height(&self) -> Option<u32> {
        match &self.shape {
            RequestShape::Audio(_) => None,
            RequestShape::Video(v) => Some(v.max_height),
        }
    }

    /// Format-selection directive in the engine's selector syntax.
    ///
    /// Audio: best audio-only stream, else best combined stream.
    /// Video: best video no taller than the ceiling plus best audio, else
    /// best combined stream.
    pub fn format_selection(&self) -> String {
        match &self.shape {
            RequestShape::Audio(_) => "bestaudio/best".to_string(),
            RequestShape::Video(v) => {
                format!("bestvideo[height<={}]+bestaudio/best", v.max_height)
            }
        }
    }

    /// Audio extraction directive, present only for audio requests
    pub fn postprocessing(&self) -> Option<Postprocessing> {
        match &self.shape {
            RequestShape::Audio(a) => Some(Postprocessing {
                codec: a.codec.clone(),
                quality: a.quality.clone(),
            }),
            RequestShape::Video(_) => None,
        }
    }

    /// Container used when separate video and audio streams are merged
    pub fn merge_output_format(&self) -> Option<&'static str> {
        match &self.shape {
            RequestShape::Audio(_) => None,
            RequestShape::Video(v) => Some(v.container_format),
        }
    }

    /// Extension of the final file: the codec for audio, the container for video
    pub fn expected_extension(&self) -> &str {
        match &self.shape {
            RequestShape::Audio(a) => &a.codec,
            RequestShape::Video(v) => v.container_format,
        }
    }

    /// Name of the file reported back to the user for a resolved title
    pub fn output_filename(&self, title: &str) -> String {
        format!("{}.{}", title, self.expected_extension())
    }
}

fn validate_url(url: &str) -> Result<String, RequestError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(RequestError::EmptyUrl);
    }
    Ok(url.to_string())
}
