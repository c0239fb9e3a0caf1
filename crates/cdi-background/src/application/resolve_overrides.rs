//! OverrideResolver: the per-navigation orchestration of override files.
//!
//! This use case is the heart of the background core.  For a hostname it
//! probes the global pseudo-level and then every domain level, fetching the
//! script and style file of each level, expanding their includes, and
//! concatenating the results per type.  At the end of the walk it delivers at
//! most one message per type to the tab that navigated.
//!
//! # Fetch order
//!
//! ```text
//! www.google.com
//!   _global.js, _global.css,
//!   com.js, com.css,
//!   google.com.js, google.com.css,
//!   www.google.com.js, www.google.com.css
//! ```
//!
//! Fetches are issued one at a time.  The includes of a fetched body are
//! fetched before the next file in the list.  Later files are appended after
//! earlier ones, so a more specific level can build on a more general one.
//!
//! # Architecture
//!
//! The resolver depends only on the traits in
//! [`ports`](crate::application::ports).  All of them are injected at
//! construction time, which keeps the resolver fully unit-testable.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cdi_core::{DomainLevels, OverrideFileName, ScriptMessage, ScriptType};
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::application::expand_includes::IncludeExpander;
use crate::application::ports::{FileFetcher, IconUpdater, ScriptDeliverer};
use crate::application::script_registry::ScriptRegistry;
use crate::domain::{ResolverConfig, Sender, TabId};

/// Summary of one [`OverrideResolver::on_navigate`] request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationOutcome {
    /// Id attached to every log line of the request.
    pub request_id: Uuid,
    /// Override files that were present, in fetch order.
    pub loaded: Vec<String>,
    /// Types for which a message was delivered, in delivery order.
    pub delivered: Vec<ScriptType>,
}

/// Resolves, expands and delivers override files for navigations.
///
/// One instance is shared (behind an `Arc`) by every navigation.  The only
/// state it keeps between requests is the [`ScriptRegistry`].
pub struct OverrideResolver {
    fetcher: Arc<dyn FileFetcher>,
    deliverer: Arc<dyn ScriptDeliverer>,
    icon: Arc<dyn IconUpdater>,
    expander: IncludeExpander,
    global_name: String,
    registry: Mutex<ScriptRegistry>,
}

impl OverrideResolver {
    pub fn new(
        config: ResolverConfig,
        fetcher: Arc<dyn FileFetcher>,
        deliverer: Arc<dyn ScriptDeliverer>,
        icon: Arc<dyn IconUpdater>,
    ) -> Self {
        Self {
            fetcher,
            deliverer,
            icon,
            expander: IncludeExpander::new(config.max_include_depth),
            global_name: config.global_name,
            registry: Mutex::new(ScriptRegistry::new()),
        }
    }

    /// Handles a navigation of `sender`'s tab to `hostname`.
    ///
    /// Walks `global` + domain levels, delivers one message per non-empty
    /// type, registers every present override file for the tab and refreshes
    /// the badge.  Never fails: absent files are skipped and delivery errors
    /// are logged.
    pub async fn on_navigate(&self, hostname: &str, sender: Sender) -> NavigationOutcome {
        let request_id = Uuid::new_v4();
        let span = info_span!(
            "navigate",
            %request_id,
            hostname,
            tab_id = sender.tab_id,
            frame_id = sender.frame_id
        );
        self.navigate(hostname, sender, request_id)
            .instrument(span)
            .await
    }

    async fn navigate(&self, hostname: &str, sender: Sender, request_id: Uuid) -> NavigationOutcome {
        let mut accumulators = [String::new(), String::new()];
        let mut loaded = Vec::new();

        let levels = std::iter::once(self.global_name.clone()).chain(DomainLevels::new(hostname));
        for level in levels {
            for script_type in ScriptType::ALL {
                let name = OverrideFileName::new(level.as_str(), script_type).to_string();
                let body = self.fetcher.fetch(&name).await;
                let Some(expanded) = self
                    .expander
                    .expand_named(&name, body, self.fetcher.as_ref())
                    .await
                else {
                    debug!(file = %name, "override file absent");
                    continue;
                };

                debug!(file = %name, bytes = expanded.len(), "override file loaded");
                accumulators[script_type.index()].push_str(&expanded);
                self.register_script(name.as_str(), sender.tab_id);
                loaded.push(name);
            }
        }

        let mut delivered = Vec::new();
        for script_type in ScriptType::ALL {
            let contents = std::mem::take(&mut accumulators[script_type.index()]);
            if contents.is_empty() {
                continue;
            }
            self.send(sender, ScriptMessage::new(script_type, contents))
                .await;
            delivered.push(script_type);
        }

        self.update_interface(sender.tab_id);

        info!(
            loaded = loaded.len(),
            delivered = delivered.len(),
            "navigation resolved"
        );
        NavigationOutcome {
            request_id,
            loaded,
            delivered,
        }
    }

    /// Loads the single file `<hostname>.<type>` and delivers it.
    ///
    /// Unlike [`on_navigate`](Self::on_navigate) there is no hierarchy walk,
    /// and a message is delivered even when the file is absent or empty.
    pub async fn load_script(&self, hostname: &str, script_type: ScriptType, sender: Sender) {
        let name = OverrideFileName::new(hostname, script_type).to_string();
        let body = self.fetcher.fetch(&name).await;
        let contents = self
            .expander
            .expand_named(&name, body, self.fetcher.as_ref())
            .await
            .unwrap_or_default();
        debug!(file = %name, bytes = contents.len(), "single override loaded");
        self.send(sender, ScriptMessage::new(script_type, contents))
            .await;
    }

    /// Pushes the number of active overrides of `tab_id` to the badge.
    pub fn update_interface(&self, tab_id: TabId) {
        let count = self.registry().script_count_for_tab(tab_id);
        self.icon.set_count(tab_id, count);
    }

    /// Called when the user switches to `tab_id`; refreshes the badge.
    pub fn on_tab_activated(&self, tab_id: TabId) {
        self.update_interface(tab_id);
    }

    /// Names of the override files registered for `tab_id`.
    pub fn script_names_for_tab(&self, tab_id: TabId) -> HashSet<String> {
        self.registry().script_names_for_tab(tab_id)
    }

    /// Marks `name` as active in `tab_id`.  Idempotent.
    pub fn register_script(&self, name: &str, tab_id: TabId) {
        let mut registry = self.registry();
        if registry.register_script(name, tab_id) {
            debug!(
                file = name,
                tab_id,
                tabs = registry.tab_count(),
                "override registered for tab"
            );
        }
    }

    async fn send(&self, sender: Sender, message: ScriptMessage) {
        let script_type = message.script_type;
        if let Err(e) = self
            .deliverer
            .deliver(sender.tab_id, message, sender.target())
            .await
        {
            warn!(%script_type, tab_id = sender.tab_id, "delivery failed: {e}");
        }
    }

    // The guard is never held across an await point.
    fn registry(&self) -> MutexGuard<'_, ScriptRegistry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
