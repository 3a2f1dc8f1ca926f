//! Media metadata returned by the extraction engine

mod metadata;

pub use metadata::MediaMetadata;
