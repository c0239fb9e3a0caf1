//! # cdi-core
//!
//! Shared library for CDInjector containing the pure building blocks used to
//! decide which local override files belong to a page and how they are
//! stitched together before being sent to a browser tab.
//!
//! This crate has zero dependencies on async runtimes, file systems, or
//! browser APIs.  Everything here is deterministic and can be tested with
//! plain `#[test]` functions.
//!
//! # Architecture overview (for beginners)
//!
//! CDInjector lets a developer keep `.js` and `.css` files on their own
//! machine and have them injected into matching web pages.  A file named
//! `google.com.js` applies to `google.com` and every subdomain of it, while
//! `_global.js` applies to every page.
//!
//! This crate (`cdi-core`) defines:
//!
//! - **`domain`** – The hostname hierarchy ([`DomainLevels`]) and the naming
//!   rules for override files ([`OverrideFileName`], [`ScriptType`]).
//!
//! - **`text`** – The string splicing primitive used when an include
//!   directive is replaced by the content it points at.
//!
//! - **`include`** – The scanner that finds `// @include other.js` directives
//!   inside a fetched body.
//!
//! - **`protocol`** – The JSON messages delivered to a tab.

// Rust looks for each module in a subdirectory with the same name
// (e.g., src/domain/mod.rs).
pub mod domain;
pub mod include;
pub mod protocol;
pub mod text;

// Re-export the most-used items at the crate root so callers can write
// `cdi_core::DomainLevels` instead of `cdi_core::domain::levels::DomainLevels`.
pub use domain::file_name::{FileNameError, OverrideFileName, ScriptType, GLOBAL_LEVEL_NAME};
pub use domain::levels::{domain_levels, DomainLevels};
pub use include::directive::{find_directive, IncludeDirective};
pub use protocol::messages::{DeliveryTarget, ScriptMessage};
pub use text::splice::{splice, try_splice, SpliceError};
