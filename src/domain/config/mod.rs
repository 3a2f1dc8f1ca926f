//! Configuration domain module

mod app_config;

pub use app_config::{AppConfig, DEFAULT_OUTPUT_DIR, DEFAULT_YT_DLP};
