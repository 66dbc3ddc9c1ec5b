#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::App;

use crate::theme::ThemeExt;

/// Background color variants from the active theme variant.
///
/// Surface overlays use these to blend into whatever they are drawn over.
#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
pub enum ThemeBackgroundKind {
    /// Base background for main surfaces.
    #[default]
    #[assoc(resolve = cx.active_variant().colors.background.primary)]
    Primary,
    /// Slightly elevated or grouped content.
    #[assoc(resolve = cx.active_variant().colors.background.secondary)]
    Secondary,
    /// Further elevated elements.
    #[assoc(resolve = cx.active_variant().colors.background.tertiary)]
    Tertiary,
    /// High emphasis backgrounds.
    #[assoc(resolve = cx.active_variant().colors.background.quaternary)]
    Quaternary,
    /// Highest emphasis backgrounds.
    #[assoc(resolve = cx.active_variant().colors.background.quinary)]
    Quinary,
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::{ActiveVariantId, Theme, ThemeExt, ThemeVariantKind};
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_theme_background_kind_variants(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            cx.set_global(ActiveVariantId(0));

            let background = cx.active_variant().colors.background.clone();

            assert_eq!(ThemeBackgroundKind::Primary.resolve(cx), background.primary);
            assert_eq!(ThemeBackgroundKind::Secondary.resolve(cx), background.secondary);
            assert_eq!(ThemeBackgroundKind::Tertiary.resolve(cx), background.tertiary);
            assert_eq!(ThemeBackgroundKind::Quaternary.resolve(cx), background.quaternary);
            assert_eq!(ThemeBackgroundKind::Quinary.resolve(cx), background.quinary);
        });
    }

    #[gpui::test]
    fn test_theme_background_kind_follows_active_variant(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            cx.set_active_variant(ThemeVariantKind::Dark);
            let dark = ThemeBackgroundKind::Primary.resolve(cx);

            cx.set_active_variant(ThemeVariantKind::Light);
            let light = ThemeBackgroundKind::Primary.resolve(cx);

            assert_ne!(dark, light, "Dark and light surfaces should differ");
        });
    }

    #[gpui::test]
    fn test_theme_background_kind_default(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            assert_eq!(ThemeBackgroundKind::default(), ThemeBackgroundKind::Primary);
        });
    }
}
