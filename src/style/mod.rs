//! Adapters copying a resolved tile size onto a caller's style value.
//!
//! Any builder-style type with chainable width/height setters can implement
//! [`StyleSize`]; the adapters resolve the tile and set both the exact and the
//! maximum extent so content cannot grow past the tile.

use crate::tile::{Layout, TileId};

pub trait StyleSize: Sized {
    fn width(self, width: i32) -> Self;
    fn max_width(self, width: i32) -> Self;
    fn height(self, height: i32) -> Self;
    fn max_height(self, height: i32) -> Self;
}

/// Set `width` and `max_width` to the tile's resolved width.
pub fn apply_width<S: StyleSize>(style: S, layout: &mut Layout, tile: TileId) -> S {
    let size = layout.size(tile);
    style.width(size.width).max_width(size.width)
}

/// Set `height` and `max_height` to the tile's resolved height.
pub fn apply_height<S: StyleSize>(style: S, layout: &mut Layout, tile: TileId) -> S {
    let size = layout.size(tile);
    style.height(size.height).max_height(size.height)
}

/// Set all four extents from a single resolution of the tile.
pub fn apply_size<S: StyleSize>(style: S, layout: &mut Layout, tile: TileId) -> S {
    let size = layout.size(tile);
    style
        .width(size.width)
        .max_width(size.width)
        .height(size.height)
        .max_height(size.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct BoxStyle {
        width: Option<i32>,
        max_width: Option<i32>,
        height: Option<i32>,
        max_height: Option<i32>,
    }

    impl StyleSize for BoxStyle {
        fn width(mut self, width: i32) -> Self {
            self.width = Some(width);
            self
        }

        fn max_width(mut self, width: i32) -> Self {
            self.max_width = Some(width);
            self
        }

        fn height(mut self, height: i32) -> Self {
            self.height = Some(height);
            self
        }

        fn max_height(mut self, height: i32) -> Self {
            self.max_height = Some(height);
            self
        }
    }

    fn half_split() -> (Layout, TileId) {
        let mut layout = Layout::new();
        let root = layout.new_root();
        layout.set_size(root, 80, 24);
        let left = layout.new_subtile(root);
        let right = layout.new_subtile(root);
        layout.join_horizontal(&[left, right]);
        (layout, left)
    }

    #[test]
    fn width_only_leaves_height_untouched() {
        let (mut layout, left) = half_split();
        let style = apply_width(BoxStyle::default(), &mut layout, left);
        assert_eq!(
            style,
            BoxStyle {
                width: Some(40),
                max_width: Some(40),
                ..BoxStyle::default()
            }
        );
    }

    #[test]
    fn height_only_leaves_width_untouched() {
        let (mut layout, left) = half_split();
        let style = apply_height(BoxStyle::default(), &mut layout, left);
        assert_eq!(style.width, None);
        assert_eq!(style.height, Some(24));
        assert_eq!(style.max_height, Some(24));
    }

    #[test]
    fn full_size_sets_all_four() {
        let (mut layout, left) = half_split();
        let style = apply_size(BoxStyle::default(), &mut layout, left);
        assert_eq!(
            style,
            BoxStyle {
                width: Some(40),
                max_width: Some(40),
                height: Some(24),
                max_height: Some(24),
            }
        );
    }
}
