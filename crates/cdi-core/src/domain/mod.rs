//! Domain entities for CDInjector.
//!
//! This module contains pure business logic with no infrastructure dependencies.
//!
//! # What is "domain" here? (for beginners)
//!
//! The domain layer answers two questions without touching the network:
//!
//! - Which hostname suffixes should be probed for a page, and in which order?
//! - What is the file name of the override for one of those suffixes?
//!
//! Code in outer layers (the resolver, the directory fetcher, the CLI)
//! depends on these answers, but nothing in here depends on them.

/// Naming rules for override files.
pub mod file_name;

/// The general-to-specific hostname hierarchy.
///
/// See [`levels::DomainLevels`] for the main type.
pub mod levels;
