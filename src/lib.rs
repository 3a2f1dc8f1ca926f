//! Tubegrab - fetch audio or video from streaming platforms
//!
//! This crate builds retrieval requests and hands them to an external
//! extraction engine (yt-dlp), which in turn drives ffmpeg for audio
//! extraction and muxing.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Retrieval requests, modes, media metadata, config and errors
//! - **Application**: Request builder, fetch use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (yt-dlp subprocess, XDG config file)
//! - **CLI**: Command-line interface, argument parsing and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
