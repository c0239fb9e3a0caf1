//! Application layer for cdi-background.
//!
//! The application layer knows *what* to do for a navigation: which files to
//! ask for, in which order, how to stitch them together and whom to tell.
//! It delegates *how* to fetch, deliver and draw the badge to the
//! infrastructure layer through the traits in [`ports`].
//!
//! # What does NOT belong here?
//!
//! - Reading files or talking to a server (that is a [`ports::FileFetcher`])
//! - Writing to the browser or to stdout (that is a [`ports::ScriptDeliverer`])
//! - Loading configuration files (that is `infrastructure::config_file`)

pub mod expand_includes;
pub mod ports;
pub mod resolve_overrides;
pub mod script_registry;

pub use expand_includes::IncludeExpander;
pub use ports::{FileFetcher, IconUpdater, ScriptDeliverer};
pub use resolve_overrides::{NavigationOutcome, OverrideResolver};
pub use script_registry::ScriptRegistry;
