use std::time::Duration;

use gpui::{App, ElementId, Window, ease_out_quint};
use gpui_transitions::{Transition, WindowUseTransition};

use crate::ElementIdExt;

/// A keyed `f32` opacity transition that eases toward `target`.
///
/// The goal is only replaced (and observers notified) when `target` differs
/// from the current goal, so calling this every frame is cheap.
pub fn opacity_transition(
    base_id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    duration: Duration,
    target: f32,
) -> Transition<f32> {
    let opacity_transition = window
        .use_keyed_transition(
            base_id.into().with_suffix("state:transition:opacity"),
            cx,
            duration,
            |_window, _cx| target,
        )
        .with_easing(ease_out_quint());

    opacity_transition.update(cx, |this, cx| {
        if *this != target {
            *this = target;
            cx.notify();
        }
    });

    opacity_transition
}
