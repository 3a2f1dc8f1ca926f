//! Extraction engine adapters
//!
//! The engine is an external binary; this module only knows how to drive it.

mod yt_dlp;

pub use yt_dlp::{classify_failure, YtDlpExtractor};
