//! IncludeExpander: recursive replacement of `@include` directives.
//!
//! # Algorithm (for beginners)
//!
//! ```text
//! body ──► find next directive ──► fetch referenced file ──► expand it (recursively)
//!   ▲                                                              │
//!   └────────── splice expanded text over the directive ◄──────────┘
//! ```
//!
//! Directives are handled in source order.  After each splice, scanning
//! resumes right after the inserted text: the inserted text was already
//! expanded by the recursive call, so it is never scanned twice.
//!
//! Every fetch goes through the same [`FileFetcher`] used for override files
//! and is awaited before the next one starts, so the order of fetches is
//! deterministic: a body's includes (and their includes) are fetched before
//! anything that follows the body.
//!
//! # Guards
//!
//! - A file that is missing expands to the empty string.
//! - A directive naming a file that is already being expanded further up
//!   the chain (A includes B includes A) is removed without fetching.
//! - A directive nested deeper than `max_depth` is removed without fetching.
//!
//! Both guards log a warning.  Expansion itself never fails.

use std::future::Future;
use std::pin::Pin;

use cdi_core::{find_directive, splice, IncludeDirective};
use tracing::{debug, warn};

use crate::application::ports::FileFetcher;

type ExpandFuture<'a> = Pin<Box<dyn Future<Output = String> + Send + 'a>>;

/// Expands include directives using a [`FileFetcher`].
#[derive(Debug, Clone, Copy)]
pub struct IncludeExpander {
    max_depth: usize,
}

impl IncludeExpander {
    /// Creates an expander that allows at most `max_depth` nested includes.
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Expands every directive in `body`.
    ///
    /// An absent body stays absent.
    pub async fn expand(&self, body: Option<String>, fetcher: &dyn FileFetcher) -> Option<String> {
        match body {
            Some(text) => Some(self.expand_in_chain(text, fetcher, Vec::new()).await),
            None => None,
        }
    }

    /// Like [`expand`](Self::expand), for a body fetched under `name`.
    ///
    /// `name` seeds the include chain, so a file that includes itself is
    /// caught at the first directive instead of one level later.
    pub async fn expand_named(
        &self,
        name: &str,
        body: Option<String>,
        fetcher: &dyn FileFetcher,
    ) -> Option<String> {
        match body {
            Some(text) => Some(
                self.expand_in_chain(text, fetcher, vec![name.to_string()])
                    .await,
            ),
            None => None,
        }
    }

    async fn expand_in_chain(
        &self,
        text: String,
        fetcher: &dyn FileFetcher,
        mut chain: Vec<String>,
    ) -> String {
        self.expand_text(text, fetcher, &mut chain, 0).await
    }

    // Boxed because the future is recursive.
    fn expand_text<'a>(
        &'a self,
        mut text: String,
        fetcher: &'a dyn FileFetcher,
        chain: &'a mut Vec<String>,
        depth: usize,
    ) -> ExpandFuture<'a> {
        Box::pin(async move {
            let mut position = 0;
            while let Some(directive) = find_directive(&text, position) {
                let replacement = self.resolve(&directive, fetcher, chain, depth).await;
                text = splice(&text, directive.start, directive.end, &replacement);
                position = directive.start + replacement.len();
            }
            text
        })
    }

    /// Produces the text that replaces one directive.
    async fn resolve(
        &self,
        directive: &IncludeDirective,
        fetcher: &dyn FileFetcher,
        chain: &mut Vec<String>,
        depth: usize,
    ) -> String {
        if chain.iter().any(|name| *name == directive.name) {
            warn!(
                include = %directive.name,
                chain = ?chain,
                "include cycle detected; dropping directive"
            );
            return String::new();
        }
        if depth >= self.max_depth {
            warn!(
                include = %directive.name,
                max_depth = self.max_depth,
                "include nesting too deep; dropping directive"
            );
            return String::new();
        }

        let Some(content) = fetcher.fetch(&directive.name).await else {
            debug!(include = %directive.name, "included file is absent");
            return String::new();
        };

        chain.push(directive.name.clone());
        let expanded = self.expand_text(content, fetcher, chain, depth + 1).await;
        chain.pop();
        expanded
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
