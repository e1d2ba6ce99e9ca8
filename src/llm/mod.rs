mod client;
mod types;

pub use client::{HttpInferenceClient, InferenceBackend};
pub use types::*;
