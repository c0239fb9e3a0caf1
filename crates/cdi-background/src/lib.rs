//! cdi-background library crate.
//!
//! This crate is the background half of CDInjector: given the hostname a tab
//! just navigated to, it works out which local override files apply, expands
//! their include directives, and hands one aggregated message per type to the
//! tab.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Navigation event (hostname, sender)
//!         ↓
//! [cdi-background]
//!   ├── domain/           Tab identifiers, ResolverConfig
//!   ├── application/      OverrideResolver, IncludeExpander, ScriptRegistry,
//!   │                     collaborator ports (FileFetcher, ScriptDeliverer, IconUpdater)
//!   └── infrastructure/
//!         ├── directory_fetcher/  Override files read from a local directory
//!         ├── json_lines/         Deliveries written as JSON lines
//!         ├── badge/              Badge count reporting through tracing
//!         └── config_file/        TOML configuration file
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O and no async.
//! - `application` depends on `domain`, `cdi-core` and the port traits only.
//! - `infrastructure` implements the ports with `tokio`, `serde_json` and `toml`.

/// Domain layer: tab identifiers and resolver settings (no I/O).
pub mod domain;

/// Application layer: override resolution, include expansion, tab bookkeeping.
pub mod application;

/// Infrastructure layer: concrete collaborators and configuration loading.
pub mod infrastructure;
