//! Hostname hierarchy: the ordered list of domain levels probed for a page.
//!
//! A hostname such as `www.google.com` is made of dot-separated *labels*.
//! Every suffix of those labels is a *domain level*:
//!
//! ```text
//! www.google.com
//!            com        level 1 (most general)
//!     google.com        level 2
//! www.google.com        level 3 (most specific)
//! ```
//!
//! Override files are probed from the most general level to the most
//! specific one, so that a file for `www.google.com` is appended after (and
//! can therefore build on) the file for `google.com`.
//!
//! # Laziness
//!
//! [`DomainLevels`] does not split the hostname up front.  It keeps the
//! hostname and the byte offset of the suffix it yielded last, and walks
//! backwards to the previous `.` on each call to `next()`.  Cloning the
//! iterator before consuming it gives a restartable sequence.

use std::iter::FusedIterator;

/// Lazy iterator over the domain levels of a hostname, general → specific.
///
/// Yields exactly `max(1, number of labels)` items.  An empty hostname yields
/// a single empty string.  Any string is accepted; there are no error cases.
///
/// # Examples
///
/// ```rust
/// use cdi_core::DomainLevels;
///
/// let levels: Vec<String> = DomainLevels::new("www.google.com").collect();
/// assert_eq!(levels, ["com", "google.com", "www.google.com"]);
///
/// let levels: Vec<String> = DomainLevels::new("").collect();
/// assert_eq!(levels, [""]);
/// ```
#[derive(Debug, Clone)]
pub struct DomainLevels {
    hostname: String,
    /// Byte offset where the most recently yielded suffix starts.
    ///
    /// `None` before the first call to `next()`.  `Some(0)` once the full
    /// hostname has been yielded, which ends the sequence.
    start: Option<usize>,
}

impl DomainLevels {
    /// Creates the level sequence for `hostname`.
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            start: None,
        }
    }

    /// The hostname this sequence was built from.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// End of the region that still has to be searched for the next `.`,
    /// or `None` when the sequence is exhausted.
    fn search_end(&self) -> Option<usize> {
        match self.start {
            None => Some(self.hostname.len()),
            Some(0) => None,
            // The byte just before the last suffix is the `.` that separated it.
            Some(start) => Some(start - 1),
        }
    }
}

impl Iterator for DomainLevels {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let search_end = self.search_end()?;
        let start = self.hostname[..search_end]
            .rfind('.')
            .map_or(0, |dot| dot + 1);
        self.start = Some(start);
        Some(self.hostname[start..].to_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.search_end() {
            None => 0,
            Some(end) => self.hostname[..end].matches('.').count() + 1,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DomainLevels {}

impl FusedIterator for DomainLevels {}

/// Shorthand for [`DomainLevels::new`].
pub fn domain_levels(hostname: &str) -> DomainLevels {
    DomainLevels::new(hostname)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
