use gpui::px;

use super::{ScrollExtents, ScrollGradientSide};

/// Opacity of the overlay on `side` for the given scroll geometry.
///
/// This is a hard threshold: the result is always exactly `0.` or `1.`.
/// Without overflow both edges are hidden. Otherwise the left edge shows once
/// the content has been scrolled away from its start, and the right edge shows
/// until the content has been scrolled all the way to its end.
pub fn edge_opacity(side: ScrollGradientSide, extents: ScrollExtents) -> f32 {
    if !extents.is_overflowing() {
        return 0.;
    }

    let visible = match side {
        ScrollGradientSide::Left => extents.scroll_x > px(0.),
        ScrollGradientSide::Right => extents.scroll_x < extents.max_scroll(),
    };

    if visible { 1. } else { 0. }
}
