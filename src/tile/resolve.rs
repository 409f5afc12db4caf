use super::core::{Layout, TileId, nonzero};
use crate::geometry::{Axis, Size};
use crate::logging::{LogLevel, json_kv, json_str};

impl Layout {
    /// Resolve the size of `tile`, computing and memoizing it if needed.
    ///
    /// A tile with both extents known (explicit or memoized) answers
    /// immediately. Otherwise it fills its parent: on each unknown axis the
    /// parent's extent, minus what chain siblings already claim, is shared
    /// among the chain members still lacking a size on that axis. Width is
    /// resolved before height, both against the same parent size.
    ///
    /// Returns `Size::ZERO` when the parent cannot be resolved yet, and the
    /// tile's own partial size when it has no parent. Never fails.
    pub fn size(&mut self, tile: TileId) -> Size {
        self.record(|metrics| metrics.record_query());

        let current = self.tile(tile).effective();
        if current.is_resolved() {
            self.record(|metrics| metrics.record_memo_hit());
            return current;
        }

        let Some(parent) = self.tile(tile).parent else {
            return current;
        };

        let container = self.size(parent);
        if !container.is_resolved() {
            return Size::ZERO;
        }

        let mut resolved = current;
        if resolved.width == 0 {
            resolved.width = self.fill(tile, Axis::Horizontal, container.width);
        }
        if resolved.height == 0 {
            resolved.height = self.fill(tile, Axis::Vertical, container.height);
        }

        let entry = self.tile_mut(tile);
        entry.memo_width = nonzero(resolved.width);
        entry.memo_height = nonzero(resolved.height);
        resolved
    }

    /// Share of `available` owed to `tile` along `axis`.
    ///
    /// Two unsized members split with an arithmetic shift; three or more use
    /// truncating division and the remainder is dropped. The result is not
    /// clamped, so over-claimed space yields zero or a negative extent.
    fn fill(&self, tile: TileId, axis: Axis, available: i32) -> i32 {
        let (allocated, unsized_count) =
            self.chain(tile, axis)
                .fold((0i32, 0i32), |(allocated, unsized_count), member| {
                    match self.tile(member).effective().along(axis) {
                        0 => (allocated, unsized_count + 1),
                        extent => (allocated.saturating_add(extent), unsized_count),
                    }
                });

        let remaining = available.saturating_sub(allocated);
        let share = match unsized_count {
            0 => return 0,
            1 => remaining,
            2 => remaining >> 1,
            n => remaining / n,
        };

        self.record(|metrics| metrics.record_fill());
        if share <= 0 {
            self.emit(LogLevel::Debug, "resolve", "fill_exhausted", || {
                vec![
                    json_kv("tile", tile.index()),
                    json_str("axis", axis.as_str()),
                    json_kv("available", available),
                    json_kv("allocated", allocated),
                    json_kv("unsized", unsized_count),
                    json_kv("share", share),
                ]
            });
        }
        share
    }
}
