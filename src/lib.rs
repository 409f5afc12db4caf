//! Tile-based space allocation for terminal UI layouts.
//!
//! A [`Layout`] owns a tree of tiles. Children fill their parent; tiles
//! joined into a horizontal or vertical chain share the parent's extent on
//! that axis, with explicitly sized members claiming their space first.
//! Sizes are computed lazily on [`Layout::size`] and memoized until
//! [`Layout::recalculate`] clears them after a resize.
//!
//! ```
//! use room_tiles::{Layout, Size};
//!
//! let mut layout = Layout::new();
//! let screen = layout.new_root();
//! layout.set_size(screen, 80, 24);
//!
//! let header = layout.new_named_subtile(screen, "header");
//! layout.set_size(header, 0, 1);
//! let body = layout.new_named_subtile(screen, "body");
//! layout.join_vertical(&[header, body]);
//!
//! assert_eq!(layout.size(body), Size::new(80, 23));
//!
//! layout.set_size(screen, 100, 40);
//! layout.recalculate(screen);
//! assert_eq!(layout.size(body), Size::new(100, 39));
//! ```

pub mod error;
pub mod geometry;
pub mod logging;
pub mod metrics;
pub mod style;
pub mod tile;

pub use error::{Result, TileError};
pub use geometry::{Axis, Direction, Size};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{LayoutMetrics, MetricSnapshot};
pub use style::{StyleSize, apply_height, apply_size, apply_width};
pub use tile::{Chain, Layout, LayoutConfig, TileId};
