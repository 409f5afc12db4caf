use thiserror::Error;

use crate::geometry::Axis;
use crate::logging::LoggingError;
use crate::tile::TileId;

/// Unified result type for the tile layout crate.
pub type Result<T> = std::result::Result<T, TileError>;

/// Errors surfaced by the tile layout engine.
///
/// Size resolution, joins and child creation never fail; only lookups and
/// the explicit link check produce errors.
#[derive(Debug, Error)]
pub enum TileError {
    #[error("tile {parent} has no subtile named `{name}`")]
    SubtileNotFound { parent: TileId, name: String },
    #[error("tile {tile} has a dangling {} link", .axis.as_str())]
    BrokenLink { tile: TileId, axis: Axis },
    #[error(transparent)]
    Logging(#[from] LoggingError),
}
