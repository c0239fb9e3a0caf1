//! Infrastructure layer for cdi-background.
//!
//! Concrete implementations of the application ports plus configuration
//! loading.
//!
//! # Responsibilities
//!
//! - Reading override files from a local directory ([`DirectoryFetcher`])
//! - Writing deliveries as JSON lines ([`JsonLinesDeliverer`])
//! - Reporting the badge count through `tracing` ([`LoggingIconUpdater`])
//! - Loading the TOML configuration file ([`config_file`])
//!
//! # What does NOT belong here?
//!
//! - Deciding which files to fetch or in what order (that is the application layer)

pub mod badge;
pub mod config_file;
pub mod directory_fetcher;
pub mod json_lines;

pub use badge::LoggingIconUpdater;
pub use config_file::{load_config, AppConfig, ConfigError};
pub use directory_fetcher::DirectoryFetcher;
pub use json_lines::JsonLinesDeliverer;
