use std::iter::FusedIterator;

use super::core::{Layout, TileId};
use crate::geometry::Axis;

/// Head-to-tail walk over one sibling chain.
///
/// The head is located when the iterator is created, so a fresh call after
/// re-joining reflects the new chain. Chains are assumed acyclic: joining a
/// tile back onto its own chain makes the walk never end.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    layout: &'a Layout,
    axis: Axis,
    next: Option<TileId>,
}

impl Iterator for Chain<'_> {
    type Item = TileId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.layout.neighbor(current, self.axis.forward());
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

impl Layout {
    /// Iterate the `axis` chain containing `tile`, starting at its head.
    ///
    /// `tile` may be any member of the chain. An unjoined tile forms a chain
    /// of one.
    pub fn chain(&self, tile: TileId, axis: Axis) -> Chain<'_> {
        Chain {
            layout: self,
            axis,
            next: Some(self.chain_head(tile, axis)),
        }
    }

    /// First member of the `axis` chain containing `tile`.
    pub fn chain_head(&self, tile: TileId, axis: Axis) -> TileId {
        let mut head = tile;
        while let Some(prev) = self.neighbor(head, axis.backward()) {
            head = prev;
        }
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(axis: Axis, count: usize) -> (Layout, Vec<TileId>) {
        let mut layout = Layout::new();
        let tiles: Vec<_> = (0..count).map(|_| layout.new_root()).collect();
        layout.join(axis, &tiles);
        (layout, tiles)
    }

    #[test]
    fn horizontal_chain_from_any_member() {
        let (layout, tiles) = joined(Axis::Horizontal, 10);

        for &start in &tiles {
            let walked: Vec<_> = layout.chain(start, Axis::Horizontal).collect();
            assert_eq!(walked, tiles);
        }
    }

    #[test]
    fn vertical_chain_stops_early() {
        let (layout, tiles) = joined(Axis::Vertical, 10);

        let prefix: Vec<_> = layout.chain(tiles[6], Axis::Vertical).take(3).collect();
        assert_eq!(prefix, tiles[..3].to_vec());

        let full: Vec<_> = layout.chain(tiles[0], Axis::Vertical).collect();
        assert_eq!(full, tiles);
    }

    #[test]
    fn axes_are_independent() {
        let (layout, tiles) = joined(Axis::Horizontal, 4);

        let vertical: Vec<_> = layout.chain(tiles[2], Axis::Vertical).collect();
        assert_eq!(vertical, vec![tiles[2]]);
        assert_eq!(layout.chain_head(tiles[3], Axis::Horizontal), tiles[0]);
        assert_eq!(layout.chain_head(tiles[3], Axis::Vertical), tiles[3]);
    }

    #[test]
    fn restart_sees_extended_chain() {
        let (mut layout, mut tiles) = joined(Axis::Horizontal, 10);
        let before = layout.chain(tiles[4], Axis::Horizontal).count();
        assert_eq!(before, 10);

        let extra = layout.new_root();
        let tail = tiles[9];
        layout.join_horizontal(&[tail, extra]);
        tiles.push(extra);

        let after: Vec<_> = layout.chain(tiles[4], Axis::Horizontal).collect();
        assert_eq!(after, tiles);
    }

    #[test]
    fn exhausted_chain_stays_exhausted() {
        let (layout, tiles) = joined(Axis::Vertical, 2);
        let mut walk = layout.chain(tiles[1], Axis::Vertical);
        assert_eq!(walk.next(), Some(tiles[0]));
        assert_eq!(walk.next(), Some(tiles[1]));
        assert_eq!(walk.next(), None);
        assert_eq!(walk.next(), None);
    }
}
