pub mod scroll_gradient;
pub use scroll_gradient::{ScrollGradient, ScrollGradientSide};
