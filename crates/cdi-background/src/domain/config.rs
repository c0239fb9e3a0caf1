//! Resolver configuration types.
//!
//! [`ResolverConfig`] holds the settings the [`OverrideResolver`] needs.  It is
//! a plain struct: the binary fills it from the TOML file and CLI flags, tests
//! build it directly.
//!
//! [`OverrideResolver`]: crate::application::OverrideResolver

use cdi_core::GLOBAL_LEVEL_NAME;

/// Default limit on nested include directives.
pub const DEFAULT_MAX_INCLUDE_DEPTH: usize = 16;

/// Runtime settings for override resolution.
///
/// # Example
///
/// ```rust
/// use cdi_background::domain::ResolverConfig;
///
/// let cfg = ResolverConfig::default();
/// assert_eq!(cfg.global_name, "_global");
/// assert_eq!(cfg.max_include_depth, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Level name of the pseudo-level probed before every hostname.
    pub global_name: String,

    /// How many include directives may be nested inside each other.
    ///
    /// A directive found deeper than this is removed from the output and a
    /// warning is logged.
    pub max_include_depth: usize,
}

impl Default for ResolverConfig {
    /// | Field             | Default   |
    /// |-------------------|-----------|
    /// | global_name       | `_global` |
    /// | max_include_depth | 16        |
    fn default() -> Self {
        Self {
            global_name: GLOBAL_LEVEL_NAME.to_string(),
            max_include_depth: DEFAULT_MAX_INCLUDE_DEPTH,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
