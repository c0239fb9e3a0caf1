//! Browser tab identity.

use cdi_core::DeliveryTarget;

/// Identifier the browser assigns to a tab.
pub type TabId = i32;

/// Identifier of a frame inside a tab.  `0` is the top-level document.
pub type FrameId = i32;

/// Origin of a navigation event: the tab and frame that asked for overrides.
///
/// Deliveries produced for the event are sent back to this tab and frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sender {
    pub tab_id: TabId,
    pub frame_id: FrameId,
}

impl Sender {
    pub fn new(tab_id: TabId, frame_id: FrameId) -> Self {
        Self { tab_id, frame_id }
    }

    /// Addressing options naming this sender's frame.
    pub fn target(&self) -> DeliveryTarget {
        DeliveryTarget {
            frame_id: self.frame_id,
        }
    }
}
