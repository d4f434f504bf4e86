pub mod client;
pub mod settings;

pub use client::ClientConfig;
pub use settings::{GhostSettings, LoggingConfig, Settings};
