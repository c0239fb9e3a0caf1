//! Badge count reporting.
//!
//! In the browser the count of active overrides is drawn on the toolbar
//! icon.  Outside the browser, [`LoggingIconUpdater`] remembers the latest
//! count per tab and logs the text the badge would show.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use tracing::info;

use crate::application::ports::IconUpdater;
use crate::domain::TabId;

/// Text shown on the badge for `count` active overrides.
///
/// Zero shows no badge at all.
pub fn badge_text(count: usize) -> String {
    if count == 0 {
        String::new()
    } else {
        count.to_string()
    }
}

/// [`IconUpdater`] that records counts and logs the badge text.
#[derive(Debug, Default)]
pub struct LoggingIconUpdater {
    counts: Mutex<HashMap<TabId, usize>>,
}

impl LoggingIconUpdater {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last count reported for `tab_id`, if any.
    pub fn count_for_tab(&self, tab_id: TabId) -> Option<usize> {
        self.counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&tab_id)
            .copied()
    }
}

impl IconUpdater for LoggingIconUpdater {
    fn set_count(&self, tab_id: TabId, count: usize) {
        self.counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(tab_id, count);
        info!(
            tab_id,
            count,
            badge = %badge_text(count),
            "active overrides: {count}"
        );
    }
}
