//! ScriptRegistry: which override files are active in which tab.
//!
//! The registry only feeds the badge count.  Each tab maps to the set of
//! override file names that produced content for it.  Registering the same
//! name twice for a tab has no effect the second time.
//!
//! There is no removal: entries live until the process exits.

use std::collections::{HashMap, HashSet};

use crate::domain::TabId;

/// In-memory map from tab to the names of its active override files.
///
/// # HashSet choice
///
/// Membership has no ordering semantics and insertion must be idempotent, so
/// a `HashSet<String>` per tab gives both for free.
#[derive(Debug, Default)]
pub struct ScriptRegistry {
    scripts_by_tab: HashMap<TabId, HashSet<String>>,
}

impl ScriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the names registered for `tab_id`.
    ///
    /// Unknown tabs yield an empty set; no entry is created for them.
    pub fn script_names_for_tab(&self, tab_id: TabId) -> HashSet<String> {
        self.scripts_by_tab
            .get(&tab_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of names registered for `tab_id` (0 for unknown tabs).
    pub fn script_count_for_tab(&self, tab_id: TabId) -> usize {
        self.scripts_by_tab.get(&tab_id).map_or(0, HashSet::len)
    }

    /// Adds `name` to the set for `tab_id`, creating the set on first use.
    ///
    /// Returns `true` if the name was not registered for that tab before.
    pub fn register_script(&mut self, name: impl Into<String>, tab_id: TabId) -> bool {
        self.scripts_by_tab
            .entry(tab_id)
            .or_default()
            .insert(name.into())
    }

    /// Number of tabs with at least one registration.
    pub fn tab_count(&self) -> usize {
        self.scripts_by_tab.len()
    }
}
