//! Include directive scanning.
//!
//! An override body may pull in another override file with a directive on a
//! line of its own:
//!
//! ```text
//! console.info('Hello');
//! // @include foo.js
//! console.info('world');
//! ```
//!
//! This module only *finds* directives.  Fetching the referenced file and
//! splicing its content in is the job of the include expander in
//! `cdi-background`, which needs async I/O.

pub mod directive;
