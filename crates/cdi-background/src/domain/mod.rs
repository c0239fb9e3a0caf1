//! Domain layer for cdi-background.
//!
//! Pure types shared by the application and infrastructure layers.  Nothing
//! in here performs I/O or reads environment variables.

pub mod config;
pub mod tab;

pub use config::ResolverConfig;
pub use tab::{FrameId, Sender, TabId};
