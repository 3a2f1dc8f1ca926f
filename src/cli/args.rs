//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::application::{AudioOptions, VideoOptions};
use crate::domain::config::AppConfig;
use crate::domain::request::Mode;

/// Tubegrab - fetch audio or video through yt-dlp
#[derive(Parser, Debug)]
#[command(name = "tubegrab")]
#[command(version)]
#[command(about = "Download audio or video from streaming platforms using yt-dlp")]
#[command(long_about = None)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// Media URL to fetch
    #[arg(required = true, value_name = "URL")]
    pub url: Option<String>,

    /// Download mode
    #[arg(short = 'm', long, value_name = "MODE")]
    pub mode: Option<ModeArg>,

    /// Audio codec (mp3, aac, opus, ...), audio mode only
    #[arg(short = 'c', long, value_name = "CODEC")]
    pub codec: Option<String>,

    /// Audio bitrate for conversion (e.g. 192), audio mode only
    #[arg(short = 'q', long, value_name = "KBPS")]
    pub quality: Option<String>,

    /// Max video height, video mode only
    #[arg(short = 'r', long, value_name = "HEIGHT")]
    pub resolution: Option<u32>,

    /// Directory downloads are written to
    #[arg(short = 'o', long, value_name = "DIR", env = "TUBEGRAB_OUTPUT_DIR")]
    pub output_dir: Option<String>,

    /// Path to the yt-dlp binary
    #[arg(long = "yt-dlp", value_name = "PATH", env = "TUBEGRAB_YT_DLP")]
    pub yt_dlp: Option<String>,

    /// ffmpeg binary or directory handed to yt-dlp for postprocessing
    #[arg(long, value_name = "PATH", env = "TUBEGRAB_FFMPEG")]
    pub ffmpeg_location: Option<String>,

    /// Print the yt-dlp command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Config layer made of everything given on the command line or via env
    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            mode: self.mode.map(|m| Mode::from(m).to_string()),
            codec: self.codec.clone(),
            quality: self.quality.clone(),
            resolution: self.resolution,
            output_dir: self.output_dir.clone(),
            yt_dlp_path: self.yt_dlp.clone(),
            ffmpeg_path: self.ffmpeg_location.clone(),
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Mode argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Audio,
    Video,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Audio => Mode::Audio,
            ModeArg::Video => Mode::Video,
        }
    }
}

/// Fully resolved options for a single fetch
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub url: String,
    pub mode: Mode,
    pub audio: AudioOptions,
    pub video: VideoOptions,
    pub output_dir: PathBuf,
    pub yt_dlp: String,
    pub ffmpeg_location: Option<String>,
    pub dry_run: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "mode",
    "codec",
    "quality",
    "resolution",
    "output_dir",
    "yt_dlp_path",
    "ffmpeg_path",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
