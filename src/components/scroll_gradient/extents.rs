use gpui::{App, Entity, Pixels, ScrollHandle, px};

/// A snapshot of a horizontal scroll container's geometry.
///
/// The scroll container owns these values; gradients only ever read them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollExtents {
    /// How far the content has been scrolled from its leading edge.
    pub scroll_x: Pixels,
    /// Total width of the scrollable content.
    pub content_width: Pixels,
    /// Width of the visible viewport.
    pub container_width: Pixels,
}

impl ScrollExtents {
    pub fn new(scroll_x: Pixels, content_width: Pixels, container_width: Pixels) -> Self {
        Self {
            scroll_x,
            content_width,
            container_width,
        }
    }

    /// The largest reachable scroll offset. Zero or negative when nothing overflows.
    pub fn max_scroll(&self) -> Pixels {
        self.content_width - self.container_width
    }

    /// Whether the content is wider than the viewport.
    ///
    /// NaN widths never count as overflowing.
    pub fn is_overflowing(&self) -> bool {
        self.max_scroll() > px(0.)
    }
}

/// Something that can report the current [`ScrollExtents`] of a horizontal
/// scroll container.
pub trait ScrollExtentsSource: 'static {
    fn read_extents(&self, cx: &App) -> ScrollExtents;
}

impl ScrollExtentsSource for ScrollExtents {
    fn read_extents(&self, _cx: &App) -> ScrollExtents {
        *self
    }
}

impl ScrollExtentsSource for Entity<ScrollExtents> {
    fn read_extents(&self, cx: &App) -> ScrollExtents {
        *self.read(cx)
    }
}

impl ScrollExtentsSource for ScrollHandle {
    fn read_extents(&self, _cx: &App) -> ScrollExtents {
        // gpui stores scroll offsets as negative translations of the content.
        let scroll_x = -self.offset().x;
        let container_width = self.bounds().size.width;
        let content_width = container_width + self.max_offset().width;

        ScrollExtents::new(scroll_x, content_width, container_width)
    }
}


#[cfg(all(test, feature = "test-support"))]
mod source_tests {
    use super::*;
    use gpui::{AppContext, TestAppContext};

    #[gpui::test]
    fn test_snapshot_source(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let extents = ScrollExtents::new(px(12.), px(400.), px(100.));
            assert_eq!(extents.read_extents(cx), extents);
        });
    }

    #[gpui::test]
    fn test_entity_source_sees_updates(cx: &mut TestAppContext) {
        let state = cx.new(|_cx| ScrollExtents::new(px(0.), px(400.), px(100.)));

        cx.update(|cx| {
            assert_eq!(state.read_extents(cx).scroll_x, px(0.));
        });

        state.update(cx, |extents, cx| {
            extents.scroll_x = px(150.);
            cx.notify();
        });

        cx.update(|cx| {
            let extents = state.read_extents(cx);
            assert_eq!(extents.scroll_x, px(150.));
            assert_eq!(extents.max_scroll(), px(300.));
        });
    }

    #[gpui::test]
    fn test_unlaid_out_scroll_handle_does_not_overflow(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let handle = ScrollHandle::new();
            let extents = handle.read_extents(cx);

            assert_eq!(extents.scroll_x, px(0.));
            assert!(!extents.is_overflowing());
        });
    }
}
