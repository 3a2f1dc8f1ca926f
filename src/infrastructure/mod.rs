//! Infrastructure layer - Adapter implementations
//!
//! Concrete implementations of the port interfaces: the yt-dlp
//! subprocess adapter and the TOML config file store.

pub mod config;
pub mod extraction;

// Re-export adapters
pub use config::XdgConfigStore;
pub use extraction::YtDlpExtractor;
