//! JSON message types delivered to the browser tab.
//!
//! The content script running inside the page listens for these messages and
//! injects their contents as a `<script>` or `<style>` element.
//!
//! # Message flow
//!
//! ```text
//! Background core → tab:  ScriptMessage  (+ DeliveryTarget naming the frame)
//! ```
//!
//! # Wire shape
//!
//! Field names are camelCase because the receiving side is JavaScript:
//!
//! ```json
//! {"scriptType":"js","scriptContents":"console.info('hi');"}
//! {"frameId":0}
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::file_name::ScriptType;

/// Aggregated override content for one [`ScriptType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptMessage {
    /// `"js"` or `"css"`; tells the tab which element to create.
    pub script_type: ScriptType,
    /// Fully include-expanded text, concatenated in probe order.
    pub script_contents: String,
}

impl ScriptMessage {
    pub fn new(script_type: ScriptType, script_contents: impl Into<String>) -> Self {
        Self {
            script_type,
            script_contents: script_contents.into(),
        }
    }
}

/// Addressing options for a delivery: which frame of the tab receives it.
///
/// Frame `0` is the top-level document; iframes have other ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryTarget {
    pub frame_id: i32,
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_message_serializes_with_camel_case_fields() {
        // Arrange
        let msg = ScriptMessage::new(ScriptType::Script, "// some javascript code");

        // Act
        let json = serde_json::to_value(&msg).expect("serialize must succeed");

        // Assert
        assert_eq!(
            json,
            serde_json::json!({
                "scriptType": "js",
                "scriptContents": "// some javascript code",
            })
        );
    }

    #[test]
    fn test_style_message_type_tag_is_css() {
        let json = serde_json::to_string(&ScriptMessage::new(ScriptType::Style, "")).unwrap();
        assert!(json.contains(r#""scriptType":"css""#), "got {json}");
    }

    #[test]
    fn test_script_message_deserializes_from_tab_json() {
        let raw = r#"{"scriptType":"css","scriptContents":"p { color: red }"}"#;
        let msg: ScriptMessage = serde_json::from_str(raw).unwrap();
        assert_eq!(msg, ScriptMessage::new(ScriptType::Style, "p { color: red }"));
    }

    #[test]
    fn test_unknown_script_type_is_rejected() {
        let raw = r#"{"scriptType":"html","scriptContents":""}"#;
        assert!(serde_json::from_str::<ScriptMessage>(raw).is_err());
    }

    #[test]
    fn test_delivery_target_serializes_frame_id() {
        let json = serde_json::to_value(DeliveryTarget { frame_id: 0 }).unwrap();
        assert_eq!(json, serde_json::json!({ "frameId": 0 }));
    }
}
