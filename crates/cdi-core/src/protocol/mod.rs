//! Messages exchanged with the browser tab.
//!
//! The background core sends one [`messages::ScriptMessage`] per override type
//! to the tab's content script, addressed to a frame by a
//! [`messages::DeliveryTarget`].

pub mod messages;
