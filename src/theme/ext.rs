use gpui::App;

use crate::theme::{ActiveVariantId, Theme, ThemeVariant, ThemeVariantKind};

/// Extension trait for accessing and modifying the global theme.
pub trait ThemeExt {
    /// Changes the theme.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    fn get_theme(&self) -> &Theme;

    /// Switches to the first variant of the given kind.
    ///
    /// Returns `false` and leaves the active variant untouched if the theme has
    /// no variant of that kind.
    fn set_active_variant(&mut self, kind: ThemeVariantKind) -> bool;

    /// Gets the currently active theme variant.
    fn active_variant(&self) -> &ThemeVariant;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        self.set_global::<Theme>(theme.as_ref().clone())
    }

    fn get_theme(&self) -> &Theme {
        self.global()
    }

    fn set_active_variant(&mut self, kind: ThemeVariantKind) -> bool {
        let Some(index) = self.get_theme().variants.position(kind) else {
            return false;
        };

        tracing::debug!(?kind, index, "switching active theme variant");
        self.set_global(ActiveVariantId(index));

        true
    }

    fn active_variant(&self) -> &ThemeVariant {
        self.get_theme().variants.active(self)
    }
}
