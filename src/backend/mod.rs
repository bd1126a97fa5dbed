mod client;
mod types;

pub use client::{HttpBackend, SummarizeBackend};
pub use types::{BackendResponse, MAX_PAGES, Upload, control_field};
