use std::fmt;

use serde_json::Value;
use uuid::Uuid;

use super::config::LayoutConfig;
use crate::error::{Result, TileError};
use crate::geometry::{Axis, Direction, Size};
use crate::logging::{LogLevel, event_with_fields, json_kv, json_str};
use crate::metrics::LayoutMetrics;

/// Handle to a tile stored in a [`Layout`].
///
/// Handles are plain indices: they stay valid for the lifetime of the layout
/// that issued them and must not be used with another layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(usize);

impl TileId {
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

type RecalcCallback = Box<dyn FnMut()>;

pub(crate) struct Tile {
    pub(crate) explicit_width: Option<i32>,
    pub(crate) explicit_height: Option<i32>,
    pub(crate) memo_width: Option<i32>,
    pub(crate) memo_height: Option<i32>,
    pub(crate) parent: Option<TileId>,
    up: Option<TileId>,
    right: Option<TileId>,
    down: Option<TileId>,
    left: Option<TileId>,
    children: Vec<(String, TileId)>,
    callbacks: Vec<RecalcCallback>,
}

impl Tile {
    fn new(parent: Option<TileId>) -> Self {
        Self {
            explicit_width: None,
            explicit_height: None,
            memo_width: None,
            memo_height: None,
            parent,
            up: None,
            right: None,
            down: None,
            left: None,
            children: Vec::new(),
            callbacks: Vec::new(),
        }
    }

    /// Explicit size where set, memoized size otherwise, zero when neither.
    pub(crate) fn effective(&self) -> Size {
        Size::new(
            self.explicit_width.or(self.memo_width).unwrap_or(0),
            self.explicit_height.or(self.memo_height).unwrap_or(0),
        )
    }

    pub(crate) fn link(&self, direction: Direction) -> Option<TileId> {
        match direction {
            Direction::Up => self.up,
            Direction::Right => self.right,
            Direction::Down => self.down,
            Direction::Left => self.left,
        }
    }

    fn link_mut(&mut self, direction: Direction) -> &mut Option<TileId> {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Right => &mut self.right,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
        }
    }

    fn invalidate(&mut self) {
        self.memo_width = None;
        self.memo_height = None;
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tile")
            .field("explicit", &(self.explicit_width, self.explicit_height))
            .field("memo", &(self.memo_width, self.memo_height))
            .field("parent", &self.parent)
            .field("links", &[self.up, self.right, self.down, self.left])
            .field("children", &self.children)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

/// Zero means "auto": an explicit zero is indistinguishable from no size.
pub(crate) fn nonzero(value: i32) -> Option<i32> {
    (value != 0).then_some(value)
}

/// Arena owning every tile of one layout tree (or forest of roots).
///
/// Parents own their children by id; the child's parent link is a plain id
/// and never keeps anything alive. Sibling chains are doubly linked lists
/// threaded through the same arena.
#[derive(Debug, Default)]
pub struct Layout {
    tiles: Vec<Tile>,
    config: LayoutConfig,
}

#[derive(Default)]
struct RecalcStats {
    invalidated: usize,
    callbacks: usize,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            tiles: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut LayoutConfig {
        &mut self.config
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Create a tile with no parent.
    pub fn new_root(&mut self) -> TileId {
        self.alloc(None)
    }

    /// Create an anonymous child of `parent`, named with a fresh UUID.
    pub fn new_subtile(&mut self, parent: TileId) -> TileId {
        self.new_named_subtile(parent, Uuid::new_v4().to_string())
    }

    /// Create a child of `parent` addressable as `name`.
    ///
    /// If `parent` already has a child with that name, the new tile takes
    /// its slot in the child order. The displaced tile keeps its handle and
    /// parent link but is no longer found by lookup and no longer reached by
    /// [`recalculate`](Self::recalculate) from `parent`.
    pub fn new_named_subtile(&mut self, parent: TileId, name: impl Into<String>) -> TileId {
        let name = name.into();
        let child = self.alloc(Some(parent));
        let slot = self
            .tile(parent)
            .children
            .iter()
            .position(|(existing, _)| *existing == name);

        match slot {
            Some(index) => {
                let replaced = std::mem::replace(&mut self.tile_mut(parent).children[index].1, child);
                self.emit(LogLevel::Warn, "tree", "subtile_replaced", || {
                    vec![
                        json_kv("parent", parent.index()),
                        json_str("name", name.clone()),
                        json_kv("replaced", replaced.index()),
                        json_kv("tile", child.index()),
                    ]
                });
            }
            None => self.tile_mut(parent).children.push((name, child)),
        }

        child
    }

    /// Look up the child of `parent` registered under `name`.
    pub fn subtile(&self, parent: TileId, name: &str) -> Result<TileId> {
        self.tile(parent)
            .children
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, id)| *id)
            .ok_or_else(|| TileError::SubtileNotFound {
                parent,
                name: name.to_string(),
            })
    }

    pub fn has_subtile(&self, parent: TileId, name: &str) -> bool {
        self.tile(parent)
            .children
            .iter()
            .any(|(existing, _)| existing == name)
    }

    /// Children of `tile` with their names, in creation order.
    pub fn subtiles(&self, tile: TileId) -> impl Iterator<Item = (&str, TileId)> + '_ {
        self.tile(tile)
            .children
            .iter()
            .map(|(name, id)| (name.as_str(), *id))
    }

    pub fn parent(&self, tile: TileId) -> Option<TileId> {
        self.tile(tile).parent
    }

    pub fn neighbor(&self, tile: TileId, direction: Direction) -> Option<TileId> {
        self.tile(tile).link(direction)
    }

    /// Assign an explicit size. A zero extent clears that axis back to auto.
    ///
    /// Memoized sizes are left alone; call [`recalculate`](Self::recalculate)
    /// on the affected subtree for dependants to pick the change up.
    pub fn set_size(&mut self, tile: TileId, width: i32, height: i32) {
        let tile = self.tile_mut(tile);
        tile.explicit_width = nonzero(width);
        tile.explicit_height = nonzero(height);
    }

    pub fn set_width(&mut self, tile: TileId, width: i32) {
        self.tile_mut(tile).explicit_width = nonzero(width);
    }

    pub fn set_height(&mut self, tile: TileId, height: i32) {
        self.tile_mut(tile).explicit_height = nonzero(height);
    }

    /// The caller-assigned size, zero on unset axes.
    pub fn explicit_size(&self, tile: TileId) -> Size {
        let tile = self.tile(tile);
        Size::new(
            tile.explicit_width.unwrap_or(0),
            tile.explicit_height.unwrap_or(0),
        )
    }

    /// Link `tiles` left to right into one horizontal chain.
    ///
    /// Existing `right`/`left` links on the joined ends are overwritten. A
    /// tile moved out of another chain this way leaves its old neighbor
    /// pointing at it; avoiding that is the caller's job.
    pub fn join_horizontal(&mut self, tiles: &[TileId]) {
        self.join(Axis::Horizontal, tiles);
    }

    /// Link `tiles` top to bottom into one vertical chain.
    pub fn join_vertical(&mut self, tiles: &[TileId]) {
        self.join(Axis::Vertical, tiles);
    }

    pub fn join(&mut self, axis: Axis, tiles: &[TileId]) {
        for pair in tiles.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            *self.tile_mut(prev).link_mut(axis.forward()) = Some(next);
            *self.tile_mut(next).link_mut(axis.backward()) = Some(prev);
        }

        if tiles.len() > 1 {
            self.emit(LogLevel::Trace, "join", "tiles_joined", || {
                vec![
                    json_str("axis", axis.as_str()),
                    json_kv("count", tiles.len()),
                    json_kv("head", tiles[0].index()),
                ]
            });
        }
    }

    /// Register a callback fired on every [`recalculate`](Self::recalculate)
    /// reaching `tile`. Callbacks accumulate and cannot be removed.
    pub fn on_recalculate<F>(&mut self, tile: TileId, callback: F)
    where
        F: FnMut() + 'static,
    {
        self.tile_mut(tile).callbacks.push(Box::new(callback));
    }

    /// Clear memoized sizes of `tile` and all its descendants, then fire
    /// callbacks.
    ///
    /// Children are processed depth-first in creation order, and a tile's
    /// callbacks fire only after its whole subtree was invalidated. Chain
    /// neighbors and the parent are untouched. Nothing is recomputed here.
    pub fn recalculate(&mut self, tile: TileId) {
        let mut stats = RecalcStats::default();
        self.recalculate_subtree(tile, &mut stats);

        self.record(|metrics| metrics.record_recalculation(stats.invalidated, stats.callbacks));
        self.emit(LogLevel::Debug, "recalculate", "recalculated", || {
            vec![
                json_kv("tile", tile.index()),
                json_kv("invalidated", stats.invalidated),
                json_kv("callbacks", stats.callbacks),
            ]
        });
    }

    fn recalculate_subtree(&mut self, tile: TileId, stats: &mut RecalcStats) {
        self.tile_mut(tile).invalidate();
        stats.invalidated += 1;

        let children: Vec<TileId> = self.tile(tile).children.iter().map(|(_, id)| *id).collect();
        for child in children {
            self.recalculate_subtree(child, stats);
        }

        let mut callbacks = std::mem::take(&mut self.tile_mut(tile).callbacks);
        for callback in callbacks.iter_mut() {
            callback();
        }
        stats.callbacks += callbacks.len();
        self.tile_mut(tile).callbacks = callbacks;
    }

    /// Check that every sibling link is mirrored by its neighbor.
    ///
    /// Joins never validate; this is the opt-in check for debugging layouts
    /// that re-join tiles across chains.
    pub fn verify_links(&self) -> Result<()> {
        const DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ];

        for (index, tile) in self.tiles.iter().enumerate() {
            let id = TileId(index);
            for direction in DIRECTIONS {
                let Some(neighbor) = tile.link(direction) else {
                    continue;
                };
                if self.tile(neighbor).link(direction.opposite()) != Some(id) {
                    return Err(TileError::BrokenLink {
                        tile: id,
                        axis: direction.axis(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Emit the current metrics snapshot through the configured logger.
    pub fn log_metrics(&self) {
        let (Some(logger), Some(metrics)) = (self.config.logger.as_ref(), self.config.metrics.as_ref())
        else {
            return;
        };
        if let Ok(guard) = metrics.lock() {
            let event = guard.snapshot().to_log_event(&self.config.target("metrics"));
            let _ = logger.log_event(event);
        }
    }

    fn alloc(&mut self, parent: Option<TileId>) -> TileId {
        let id = TileId(self.tiles.len());
        self.tiles.push(Tile::new(parent));
        id
    }

    /// # Panics
    /// Panics if `id` was not issued by this layout.
    pub(crate) fn tile(&self, id: TileId) -> &Tile {
        &self.tiles[id.0]
    }

    pub(crate) fn tile_mut(&mut self, id: TileId) -> &mut Tile {
        &mut self.tiles[id.0]
    }

    pub(crate) fn record(&self, update: impl FnOnce(&mut LayoutMetrics)) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                update(&mut guard);
            }
        }
    }

    /// Build and send an event only when a logger wants `level`.
    pub(crate) fn emit<F>(&self, level: LogLevel, suffix: &str, message: &str, fields: F)
    where
        F: FnOnce() -> Vec<(String, Value)>,
    {
        let Some(logger) = self.config.logger.as_ref() else {
            return;
        };
        if !logger.enabled(level) {
            return;
        }
        let event = event_with_fields(level, &self.config.target(suffix), message, fields());
        let _ = logger.log_event(event);
    }
}
