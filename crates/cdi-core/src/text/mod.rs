//! Text manipulation primitives.

pub mod splice;
