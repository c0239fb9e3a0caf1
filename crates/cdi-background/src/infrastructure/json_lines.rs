//! Deliveries written as JSON lines.
//!
//! Each call to [`ScriptDeliverer::deliver`] writes one line:
//!
//! ```json
//! {"tabId":42,"message":{"scriptType":"js","scriptContents":"..."},"target":{"frameId":0}}
//! ```
//!
//! The binary points this at stdout so the output can be piped into whatever
//! relays messages to the browser.

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use cdi_core::{DeliveryTarget, ScriptMessage};
use serde::Serialize;

use crate::application::ports::ScriptDeliverer;
use crate::domain::TabId;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeliveryRecord<'a> {
    tab_id: TabId,
    message: &'a ScriptMessage,
    target: DeliveryTarget,
}

/// [`ScriptDeliverer`] that serialises every delivery to a writer.
pub struct JsonLinesDeliverer<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> JsonLinesDeliverer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl<W: Write + Send> ScriptDeliverer for JsonLinesDeliverer<W> {
    async fn deliver(
        &self,
        tab_id: TabId,
        message: ScriptMessage,
        target: DeliveryTarget,
    ) -> Result<(), String> {
        let record = DeliveryRecord {
            tab_id,
            message: &message,
            target,
        };
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        serde_json::to_writer(&mut *out, &record).map_err(|e| e.to_string())?;
        writeln!(out).map_err(|e| e.to_string())?;
        out.flush().map_err(|e| e.to_string())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
