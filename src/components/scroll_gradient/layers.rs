use gpui::{Pixels, Rgba, px};
use smallvec::SmallVec;

use crate::utils::RgbaExt;

use super::ScrollGradientSide;

/// Number of stacked layers used to approximate the fade.
pub const LAYER_COUNT: usize = 25;

/// Width of a single layer. Consecutive layers overlap by half of it.
pub const LAYER_WIDTH: Pixels = px(8.);

/// Opacity of the layer touching the anchored edge.
pub const MAX_LAYER_OPACITY: f32 = 0.95;

pub type GradientLayers = SmallVec<[GradientLayer; LAYER_COUNT]>;

/// One uniformly tinted rectangle of the fade.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientLayer {
    pub index: usize,
    pub side: ScrollGradientSide,
    pub opacity: f32,
    /// Distance from the anchored edge.
    pub offset: Pixels,
    pub width: Pixels,
    /// The base color with its alpha scaled by `opacity`.
    pub color: Rgba,
}

impl GradientLayer {
    /// Left inset, only set for left-anchored layers.
    pub fn left(&self) -> Option<Pixels> {
        matches!(self.side, ScrollGradientSide::Left).then_some(self.offset)
    }

    /// Right inset, only set for right-anchored layers.
    pub fn right(&self) -> Option<Pixels> {
        matches!(self.side, ScrollGradientSide::Right).then_some(self.offset)
    }
}

/// Builds the layers for a fade anchored on `side`, tinted with `base_color`.
///
/// Opacity decays quadratically from [`MAX_LAYER_OPACITY`] at the anchored
/// edge to zero at the far end.
pub fn gradient_layers(side: ScrollGradientSide, base_color: Rgba) -> GradientLayers {
    let last = (LAYER_COUNT - 1) as f32;
    let step = LAYER_WIDTH * 0.5;

    (0..LAYER_COUNT)
        .map(|index| {
            let progress = index as f32 / last;
            let opacity = (1. - progress).powi(2) * MAX_LAYER_OPACITY;

            GradientLayer {
                index,
                side,
                opacity,
                offset: step * index as f32,
                width: LAYER_WIDTH,
                color: base_color.fade(opacity),
            }
        })
        .collect()
}

/// Remembers the last generated layers and only rebuilds them when the side
/// or the base color changes.
#[derive(Default)]
pub struct GradientLayerCache {
    key: Option<(ScrollGradientSide, Rgba)>,
    layers: GradientLayers,
    generation: usize,
}

impl GradientLayerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the layers for `side` and `base_color`, rebuilding them if
    /// either differs from the previous call.
    pub fn layers(&mut self, side: ScrollGradientSide, base_color: Rgba) -> &GradientLayers {
        let key = (side, base_color);

        if self.key != Some(key) {
            self.layers = gradient_layers(side, base_color);
            self.key = Some(key);
            self.generation += 1;

            tracing::trace!(
                ?side,
                generation = self.generation,
                "rebuilt scroll gradient layers"
            );
        }

        &self.layers
    }

    /// How many times the layers have been rebuilt.
    pub fn generation(&self) -> usize {
        self.generation
    }
}
