use gpui::App;

use crate::theme::{ActiveVariantId, Theme, ThemeExt};

/// Installs the built-in theme and selects its first variant, unless the app
/// already provided its own.
pub fn init(cx: &mut App) {
    if !cx.has_global::<Theme>() {
        cx.set_theme(Theme::DEFAULT);
    }

    if !cx.has_global::<ActiveVariantId>() {
        cx.set_global(ActiveVariantId(0));
    }
}
