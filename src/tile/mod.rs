//! Tile layout module orchestrator.
//!
//! Tiles live in a [`Layout`] arena and are addressed by [`TileId`] handles.
//! Construction, joins and recalculation live in `core`, the lazy size
//! resolver in `resolve`, and chain traversal in `chain`.

mod chain;
mod config;
mod core;
mod resolve;

pub use chain::Chain;
pub use config::LayoutConfig;
pub use core::{Layout, TileId};
