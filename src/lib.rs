pub mod backend;
pub mod config;
pub mod decode;
pub mod error;
pub mod relay;
pub mod server;

pub use error::{Error, Result};
