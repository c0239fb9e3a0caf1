//! Integration tests for the navigation pipeline.
//!
//! These tests exercise the application layer of cdi-background end-to-end:
//! `OverrideResolver` + `IncludeExpander` + `ScriptRegistry` with recording
//! collaborators in place of the browser and the local server.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cdi_background::application::{FileFetcher, IconUpdater, OverrideResolver, ScriptDeliverer};
use cdi_background::domain::{ResolverConfig, Sender, TabId};
use cdi_core::{splice, DeliveryTarget, ScriptMessage, ScriptType};

const TAB_ID: TabId = 42;

// ── Test doubles ──────────────────────────────────────────────────────────────

/// Answers fetches from a queue of scripted responses, in call order.
///
/// Once the queue is empty every further fetch is absent.
#[derive(Default)]
struct ScriptedFetcher {
    responses: Mutex<VecDeque<Option<String>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    fn new(responses: &[Option<&str>]) -> Self {
        Self {
            responses: Mutex::new(responses.iter().map(|r| r.map(str::to_string)).collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FileFetcher for ScriptedFetcher {
    async fn fetch(&self, name: &str) -> Option<String> {
        self.calls.lock().unwrap().push(name.to_string());
        self.responses.lock().unwrap().pop_front().flatten()
    }
}

#[derive(Default)]
struct RecordingDeliverer {
    deliveries: Mutex<Vec<(TabId, ScriptMessage, DeliveryTarget)>>,
}

#[async_trait]
impl ScriptDeliverer for RecordingDeliverer {
    async fn deliver(
        &self,
        tab_id: TabId,
        message: ScriptMessage,
        target: DeliveryTarget,
    ) -> Result<(), String> {
        self.deliveries.lock().unwrap().push((tab_id, message, target));
        Ok(())
    }
}

#[derive(Default)]
struct RecordingIcon {
    counts: Mutex<Vec<(TabId, usize)>>,
}

impl IconUpdater for RecordingIcon {
    fn set_count(&self, tab_id: TabId, count: usize) {
        self.counts.lock().unwrap().push((tab_id, count));
    }
}

struct Harness {
    resolver: OverrideResolver,
    fetcher: Arc<ScriptedFetcher>,
    deliverer: Arc<RecordingDeliverer>,
    icon: Arc<RecordingIcon>,
}

fn harness(fetcher: ScriptedFetcher) -> Harness {
    let fetcher = Arc::new(fetcher);
    let deliverer = Arc::new(RecordingDeliverer::default());
    let icon = Arc::new(RecordingIcon::default());
    let resolver = OverrideResolver::new(
        ResolverConfig::default(),
        Arc::clone(&fetcher) as Arc<dyn FileFetcher>,
        Arc::clone(&deliverer) as Arc<dyn ScriptDeliverer>,
        Arc::clone(&icon) as Arc<dyn IconUpdater>,
    );
    Harness {
        resolver,
        fetcher,
        deliverer,
        icon,
    }
}

fn sender() -> Sender {
    Sender::new(TAB_ID, 0)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_sequence_for_three_level_hostname() {
    // Arrange: every fetch is absent.
    let h = harness(ScriptedFetcher::default());

    // Act
    h.resolver.on_navigate("www.google.com", sender()).await;

    // Assert
    assert_eq!(
        h.fetcher.calls(),
        [
            "_global.js",
            "_global.css",
            "com.js",
            "com.css",
            "google.com.js",
            "google.com.css",
            "www.google.com.js",
            "www.google.com.css",
        ]
    );
    assert!(h.deliverer.deliveries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_include_directive_is_expanded_before_delivery() {
    // Arrange
    let include_foo = "// @include foo.js";
    let body = format!("console.info('Hello');\n{include_foo}\nconsole.info('world');");
    let foo_code = "// foo";
    let start = body.find(include_foo).unwrap();
    let expected = splice(&body, start, start + include_foo.len(), foo_code);

    let h = harness(ScriptedFetcher::new(&[
        None,               // _global.js
        None,               // _global.css
        Some(body.as_str()), // com.js
        Some(foo_code),     // foo.js (included from com.js)
        None,               // com.css
    ]));

    // Act
    h.resolver.on_navigate("com", sender()).await;

    // Assert: the include is fetched right after the file that names it.
    assert_eq!(
        h.fetcher.calls(),
        ["_global.js", "_global.css", "com.js", "foo.js", "com.css"]
    );
    let deliveries = h.deliverer.deliveries.lock().unwrap();
    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0].0, TAB_ID);
    assert_eq!(deliveries[0].1, ScriptMessage::new(ScriptType::Script, expected));
    assert_eq!(deliveries[0].2, DeliveryTarget { frame_id: 0 });
}

#[tokio::test]
async fn test_single_load_delivers_fixed_body_unmodified() {
    // Arrange
    let h = harness(ScriptedFetcher::new(&[Some("// some javascript code")]));

    // Act
    h.resolver
        .load_script("google.com", ScriptType::Script, sender())
        .await;

    // Assert
    assert_eq!(h.fetcher.calls(), ["google.com.js"]);
    let deliveries = h.deliverer.deliveries.lock().unwrap();
    assert_eq!(
        *deliveries,
        [(
            TAB_ID,
            ScriptMessage::new(ScriptType::Script, "// some javascript code"),
            DeliveryTarget { frame_id: 0 }
        )]
    );
}

#[tokio::test]
async fn test_navigation_registers_loaded_files_and_reports_badge_once() {
    // Arrange: _global.css and google.com.js exist.
    let h = harness(ScriptedFetcher::new(&[
        None,          // _global.js
        Some("a{}"),   // _global.css
        None,          // com.js
        None,          // com.css
        Some("g();"),  // google.com.js
        None,          // google.com.css
    ]));

    // Act
    let outcome = h.resolver.on_navigate("google.com", sender()).await;

    // Assert
    assert_eq!(outcome.loaded, ["_global.css", "google.com.js"]);
    let names = h.resolver.script_names_for_tab(TAB_ID);
    assert_eq!(names.len(), 2);
    assert!(names.contains("_global.css"));
    assert!(names.contains("google.com.js"));
    assert_eq!(*h.icon.counts.lock().unwrap(), [(TAB_ID, 2)]);
}

#[tokio::test]
async fn test_repeated_navigation_does_not_double_count() {
    let h = harness(ScriptedFetcher::new(&[
        Some("x();"), None, None, None, // first visit: _global.js, _global.css, com.js, com.css
        Some("x();"), None, None, None, // second visit
    ]));

    h.resolver.on_navigate("com", sender()).await;
    h.resolver.on_navigate("com", sender()).await;

    assert_eq!(h.resolver.script_names_for_tab(TAB_ID).len(), 1);
    assert_eq!(*h.icon.counts.lock().unwrap(), [(TAB_ID, 1), (TAB_ID, 1)]);
}

#[tokio::test]
async fn test_unknown_tab_reports_zero() {
    let h = harness(ScriptedFetcher::default());

    h.resolver.update_interface(7);

    assert!(h.resolver.script_names_for_tab(7).is_empty());
    assert_eq!(*h.icon.counts.lock().unwrap(), [(7, 0)]);
}

#[tokio::test]
async fn test_deliveries_are_addressed_to_sender_frame() {
    let h = harness(ScriptedFetcher::new(&[Some("g();"), Some("g{}")]));

    h.resolver.on_navigate("", Sender::new(5, 2)).await;

    let deliveries = h.deliverer.deliveries.lock().unwrap();
    assert_eq!(deliveries.len(), 2);
    for (tab_id, _, target) in deliveries.iter() {
        assert_eq!(*tab_id, 5);
        assert_eq!(*target, DeliveryTarget { frame_id: 2 });
    }
    assert_eq!(deliveries[0].1.script_type, ScriptType::Script);
    assert_eq!(deliveries[1].1.script_type, ScriptType::Style);
}

#[tokio::test]
async fn test_tabs_keep_separate_registrations() {
    let h = harness(ScriptedFetcher::new(&[
        Some("a();"), None, None, None, // tab 1: _global.js only
        None, None, Some("b();"), None, // tab 2: com.js only
    ]));

    h.resolver.on_navigate("com", Sender::new(1, 0)).await;
    h.resolver.on_navigate("com", Sender::new(2, 0)).await;

    assert!(h.resolver.script_names_for_tab(1).contains("_global.js"));
    assert!(h.resolver.script_names_for_tab(2).contains("com.js"));
    assert_eq!(h.resolver.script_names_for_tab(1).len(), 1);
    assert_eq!(h.resolver.script_names_for_tab(2).len(), 1);
}
