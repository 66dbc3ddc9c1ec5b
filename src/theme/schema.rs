use std::{
    ops::{Deref, DerefMut},
    path::Path,
    sync::LazyLock,
};

use gpui::{App, Global, Rgba, SharedString};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{ThemeError, deserializers::de_variants};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Theme {
    pub name: SharedString,
    pub variants: ThemeVariants,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub const $name: LazyLockTheme = LazyLockTheme::new(|| {
                Theme::from_json(include_str!($path)).expect("built-in theme should be valid")
            });
        )+
    };
}

pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for LazyLockTheme {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Theme {
    generate_builtin_themes!(["../../themes/default.json", DEFAULT]);

    /// Parses a theme from its JSON representation.
    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Theme, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    /// Reads and parses a theme file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Theme, ThemeError> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let theme = Self::from_json(contents)?;
        tracing::debug!(name = %theme.name, path = %path.display(), "loaded theme from disk");

        Ok(theme)
    }
}

impl Global for Theme {}

/// The variants of a theme. Never empty.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(transparent)]
pub struct ThemeVariants {
    #[serde(deserialize_with = "de_variants")]
    variants: SmallVec<[ThemeVariant; 2]>,
}

impl ThemeVariants {
    /// Returns `None` if `variants` is empty.
    pub fn new(variants: impl IntoIterator<Item = ThemeVariant>) -> Option<Self> {
        let variants: SmallVec<[ThemeVariant; 2]> = variants.into_iter().collect();

        (!variants.is_empty()).then_some(Self { variants })
    }

    pub fn all(&self) -> &[ThemeVariant] {
        &self.variants
    }

    /// Returns the variant selected by [`ActiveVariantId`].
    ///
    /// Falls back to the first variant when no id is set or the id is out of range.
    pub fn active(&self, cx: &App) -> &ThemeVariant {
        let index = cx.try_global::<ActiveVariantId>().map_or(0, |id| id.0);

        // Both `new` and the deserializer reject an empty list.
        self.variants.get(index).unwrap_or(&self.variants[0])
    }

    /// Finds the index of the first variant of the given kind.
    pub fn position(&self, kind: ThemeVariantKind) -> Option<usize> {
        self.variants.iter().position(|variant| variant.kind == kind)
    }
}

pub struct ActiveVariantId(pub usize);

impl gpui::Global for ActiveVariantId {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeVariant {
    pub kind: ThemeVariantKind,
    pub colors: ThemeColors,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariantKind {
    Dark,
    Light,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeColors {
    pub background: ThemeBackgroundColors,
    pub accent: ThemeAccentColors,
    pub text: ThemeTextColors,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeBackgroundColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub tertiary: Rgba,
    pub quaternary: Rgba,
    pub quinary: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeAccentColors {
    pub primary: Rgba,
    pub constructive: Rgba,
    pub destructive: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextColors {
    pub primary: Rgba,
    pub secondary: Rgba,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE_VARIANT: &str = r##"{
        "name": "Single",
        "variants": [
            {
                "kind": "Light",
                "colors": {
                    "background": {
                        "primary": "#ffffff",
                        "secondary": "#eeeeee",
                        "tertiary": "#dddddd",
                        "quaternary": "#cccccc",
                        "quinary": "#bbbbbb"
                    },
                    "accent": {
                        "primary": "#0000ff",
                        "constructive": "#00ff00",
                        "destructive": "#ff0000"
                    },
                    "text": { "primary": "#000000", "secondary": "#333333" }
                }
            }
        ]
    }"##;

    #[test]
    fn test_builtin_theme_parses() {
        let theme = Theme::DEFAULT;
        let theme: &Theme = theme.as_ref();
        assert_eq!(theme.name, "Default");
        assert_eq!(theme.variants.all().len(), 2);
        assert_eq!(theme.variants.position(ThemeVariantKind::Dark), Some(0));
        assert_eq!(theme.variants.position(ThemeVariantKind::Light), Some(1));
    }

    #[test]
    fn test_from_json_reads_colors() {
        let theme = Theme::from_json(SINGLE_VARIANT).unwrap();
        let background = &theme.variants.all()[0].colors.background;

        assert_eq!(background.primary.r, 1.0);
        assert_eq!(background.primary.a, 1.0);
        assert_eq!(theme.variants.position(ThemeVariantKind::Dark), None);

        let accent = &theme.variants.all()[0].colors.accent;
        assert_eq!(accent.primary.b, 1.0);
        assert_eq!(accent.constructive.g, 1.0);
        assert_eq!(accent.destructive.r, 1.0);
    }

    #[test]
    fn test_from_json_rejects_empty_variants() {
        let result = Theme::from_json(r#"{ "name": "Empty", "variants": [] }"#);
        assert!(matches!(result, Err(ThemeError::Parse(_))));
    }

    #[test]
    fn test_variants_cannot_be_empty() {
        assert!(ThemeVariants::new(Vec::new()).is_none());

        let theme = Theme::from_json(SINGLE_VARIANT).unwrap();
        let variants = ThemeVariants::new(theme.variants.all().iter().cloned()).unwrap();
        assert_eq!(variants.all().len(), 1);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            Theme::from_json("{ not json"),
            Err(ThemeError::Parse(_))
        ));
    }

    #[test]
    fn test_from_path_reports_missing_file() {
        let path = std::env::temp_dir().join("gpui_scroll_gradient_missing_theme.json");
        let _ = std::fs::remove_file(&path);

        match Theme::from_path(&path) {
            Err(ThemeError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected an io error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_path_reads_theme_file() {
        let path = std::env::temp_dir().join("gpui_scroll_gradient_theme_from_path.json");
        std::fs::write(&path, SINGLE_VARIANT).unwrap();

        let theme = Theme::from_path(&path).unwrap();
        assert_eq!(theme.name, "Single");

        let _ = std::fs::remove_file(&path);
    }
}
