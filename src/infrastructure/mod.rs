//! Infrastructure layer - external adapters (HTTP, terminal, filesystem).
//!
//! This layer handles all I/O operations and external dependencies.

pub mod config;
pub mod immich_client;
pub mod progress;
pub mod terminal;

pub use config::load_config;
pub use immich_client::HttpImmichClient;
pub use terminal::TerminalPrompter;
