//! Fading overlays that mark the edges of a horizontally scrollable container
//! which still have content hidden past them.
//!
//! The fade is built from [`LAYER_COUNT`] overlapping, uniformly tinted layers
//! whose opacity decays quadratically away from the anchored edge. The layers
//! are tinted with a theme background color so the overlay blends into the
//! surface behind the scroll container.

mod extents;
pub use extents::*;

mod layers;
pub use layers::*;

mod visibility;
pub use visibility::*;

use std::time::Duration;

use gpui::{
    App, Div, ElementId, Entity, IntoElement, ParentElement, Pixels, RenderOnce, Styled, Window, div,
    prelude::FluentBuilder, px,
};

use crate::{
    ElementIdExt,
    extensions::deferrable::{Deferrable, DeferredConfig},
    theme::ThemeBackgroundKind,
    utils::opacity_transition,
};

/// Width of the whole overlay.
pub const GRADIENT_WIDTH: Pixels = px(100.);

/// The container edge a gradient is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollGradientSide {
    Left,
    Right,
}

/// A non-interactive fade drawn over one edge of a horizontal scroll container.
///
/// Place it as a child of the element that wraps the scrolling content (not
/// inside the scrolling content itself) so it stays pinned to the edge. It is
/// painted in tree order, so it must come after the scrolling content to be
/// drawn above it. [`Deferrable::deferred`] lifts it above the whole window
/// instead, at the cost of escaping the clipping of its ancestors.
#[derive(IntoElement)]
pub struct ScrollGradient {
    id: ElementId,
    side: ScrollGradientSide,
    extents: Box<dyn ScrollExtentsSource>,
    background: ThemeBackgroundKind,
    fade: Option<Duration>,
    layer_cache: Option<Entity<GradientLayerCache>>,
    deferred_config: DeferredConfig,
}

impl ScrollGradient {
    pub fn new(
        id: impl Into<ElementId>,
        side: ScrollGradientSide,
        extents: impl ScrollExtentsSource,
    ) -> Self {
        Self {
            id: id.into(),
            side,
            extents: Box::new(extents),
            background: ThemeBackgroundKind::default(),
            fade: None,
            layer_cache: None,
            deferred_config: DeferredConfig::disabled(),
        }
    }

    pub fn left(id: impl Into<ElementId>, extents: impl ScrollExtentsSource) -> Self {
        Self::new(id, ScrollGradientSide::Left, extents)
    }

    pub fn right(id: impl Into<ElementId>, extents: impl ScrollExtentsSource) -> Self {
        Self::new(id, ScrollGradientSide::Right, extents)
    }

    /// Creates the left and right gradients for the same scroll container.
    pub fn both(
        id: impl Into<ElementId>,
        extents: impl ScrollExtentsSource + Clone,
    ) -> [Self; 2] {
        let id = id.into();

        [
            Self::left(id.with_suffix("left"), extents.clone()),
            Self::right(id.with_suffix("right"), extents),
        ]
    }

    /// The theme background the layers are tinted with.
    pub fn background(mut self, background: ThemeBackgroundKind) -> Self {
        self.background = background;
        self
    }

    /// Eases the overlay in and out over `duration` instead of switching instantly.
    pub fn fade(mut self, duration: Duration) -> Self {
        self.fade = Some(duration);
        self
    }

    /// Stores the generated layers in `layer_cache` instead of window state
    /// keyed by this gradient's id.
    pub fn layer_cache(mut self, layer_cache: Entity<GradientLayerCache>) -> Self {
        self.layer_cache = Some(layer_cache);
        self
    }

    pub fn side(&self) -> ScrollGradientSide {
        self.side
    }

    /// The opacity the overlay should currently have, before any fade.
    pub fn target_opacity(&self, cx: &App) -> f32 {
        edge_opacity(self.side, self.extents.read_extents(cx))
    }
}

impl Deferrable for ScrollGradient {
    const DEFAULT_PRIORITY: usize = 1;

    fn deferred_config(&self) -> &DeferredConfig {
        &self.deferred_config
    }

    fn deferred_config_mut(&mut self) -> &mut DeferredConfig {
        &mut self.deferred_config
    }
}

impl RenderOnce for ScrollGradient {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let side = self.side;
        let base_color = self.background.resolve(cx);

        let layer_cache = self.layer_cache.clone().unwrap_or_else(|| {
            window.use_keyed_state(self.id.with_suffix("state:layers"), cx, |_window, _cx| {
                GradientLayerCache::new()
            })
        });
        let layers = layer_cache.update(cx, |cache, _cx| cache.layers(side, base_color).clone());

        let target_opacity = self.target_opacity(cx);
        let opacity = match self.fade {
            Some(duration) => *opacity_transition(
                self.id.clone(),
                window,
                cx,
                duration,
                target_opacity,
            )
            .evaluate(window, cx),
            None => target_opacity,
        };

        // No listeners and no occlusion, so pointer and scroll events reach
        // the content underneath.
        let overlay = div()
            .absolute()
            .top_0()
            .bottom_0()
            .w(GRADIENT_WIDTH)
            .map(|this| match side {
                ScrollGradientSide::Left => this.left_0(),
                ScrollGradientSide::Right => this.right_0(),
            })
            .opacity(opacity)
            .when(opacity > 0., |this| {
                this.children(layers.into_iter().map(render_layer))
            });

        self.apply_deferred(overlay)
    }
}

fn render_layer(layer: GradientLayer) -> Div {
    div()
        .absolute()
        .top_0()
        .bottom_0()
        .w(layer.width)
        .bg(layer.color)
        .when_some(layer.left(), |this, left| this.left(left))
        .when_some(layer.right(), |this, right| this.right(right))
}
