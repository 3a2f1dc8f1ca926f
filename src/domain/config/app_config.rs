//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidModeError;
use crate::domain::request::{Mode, DEFAULT_CODEC, DEFAULT_MAX_HEIGHT, DEFAULT_QUALITY};

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "downloads";

/// Default extraction engine binary, looked up on PATH
pub const DEFAULT_YT_DLP: &str = "yt-dlp";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub mode: Option<String>,
    pub codec: Option<String>,
    pub quality: Option<String>,
    pub resolution: Option<u32>,
    pub output_dir: Option<String>,
    pub yt_dlp_path: Option<String>,
    pub ffmpeg_path: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            mode: Some(Mode::default().to_string()),
            codec: Some(DEFAULT_CODEC.to_string()),
            quality: Some(DEFAULT_QUALITY.to_string()),
            resolution: Some(DEFAULT_MAX_HEIGHT),
            output_dir: Some(DEFAULT_OUTPUT_DIR.to_string()),
            yt_dlp_path: Some(DEFAULT_YT_DLP.to_string()),
            ffmpeg_path: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            mode: other.mode.or(self.mode),
            codec: other.codec.or(self.codec),
            quality: other.quality.or(self.quality),
            resolution: other.resolution.or(self.resolution),
            output_dir: other.output_dir.or(self.output_dir),
            yt_dlp_path: other.yt_dlp_path.or(self.yt_dlp_path),
            ffmpeg_path: other.ffmpeg_path.or(self.ffmpeg_path),
        }
    }

    /// Parse the configured mode. Unlike the other accessors an invalid
    /// value is an error, not a silent fallback.
    pub fn mode_or_default(&self) -> Result<Mode, InvalidModeError> {
        match self.mode.as_deref() {
            Some(s) => s.parse(),
            None => Ok(Mode::default()),
        }
    }

    /// Get codec, or "mp3" if not set
    pub fn codec_or_default(&self) -> &str {
        self.codec.as_deref().unwrap_or(DEFAULT_CODEC)
    }

    /// Get quality, or "192" if not set
    pub fn quality_or_default(&self) -> &str {
        self.quality.as_deref().unwrap_or(DEFAULT_QUALITY)
    }

    /// Get maximum video height, or 1080 if not set
    pub fn resolution_or_default(&self) -> u32 {
        self.resolution.unwrap_or(DEFAULT_MAX_HEIGHT)
    }

    /// Get output directory, or "downloads" if not set
    pub fn output_dir_or_default(&self) -> PathBuf {
        PathBuf::from(self.output_dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR))
    }

    /// Get yt-dlp binary, or "yt-dlp" if not set
    pub fn yt_dlp_path_or_default(&self) -> &str {
        self.yt_dlp_path.as_deref().unwrap_or(DEFAULT_YT_DLP)
    }
}
