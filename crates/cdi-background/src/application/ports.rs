//! Collaborator traits consumed by the application layer.
//!
//! The resolver depends only on these traits.  Infrastructure implementations
//! read from disk or talk to the browser; test implementations record calls.
//! All of them are injected at construction time.

use async_trait::async_trait;
use cdi_core::{DeliveryTarget, ScriptMessage};

use crate::domain::TabId;

/// Fetches override files by name.
///
/// Implementations must never fail: a missing file, an unreachable server or
/// an unreadable body all resolve to `None`.
#[async_trait]
pub trait FileFetcher: Send + Sync {
    /// Returns the body of `name`, or `None` if it is absent.
    async fn fetch(&self, name: &str) -> Option<String>;
}

/// Sends aggregated override content to a tab.
///
/// Infrastructure implementations post a message to the tab; test
/// implementations record calls.
#[async_trait]
pub trait ScriptDeliverer: Send + Sync {
    /// Delivers `message` to the frame of `tab_id` named by `target`.
    ///
    /// An `Err` is logged by the caller and never aborts a request.
    async fn deliver(
        &self,
        tab_id: TabId,
        message: ScriptMessage,
        target: DeliveryTarget,
    ) -> Result<(), String>;
}

/// Shows the number of active overrides for a tab (the toolbar badge).
#[cfg_attr(test, mockall::automock)]
pub trait IconUpdater: Send + Sync {
    fn set_count(&self, tab_id: TabId, count: usize);
}
