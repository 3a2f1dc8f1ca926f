//! Retrieval request domain module

mod mode;
mod retrieval_request;

pub use mode::{Mode, ALL_MODES};
pub use retrieval_request::{
    AudioShape, Postprocessing, RequestShape, RetrievalRequest, VideoShape, DEFAULT_CODEC,
    DEFAULT_MAX_HEIGHT, DEFAULT_QUALITY, OUTPUT_TEMPLATE, VIDEO_CONTAINER,
};
