use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::render::CssColor;

pub const TEXT_PROPERTY: &str = "--color-text";
pub const TEXT_SECONDARY_PROPERTY: &str = "--color-text-secondary";
/// Root attribute selecting the theme explicitly.
pub const COLOR_SCHEME_ATTRIBUTE: &str = "data-color-scheme";

/// Computed-style lookup for CSS custom properties on the document root.
pub trait ThemeSource {
    fn custom_property(&self, name: &str) -> Option<String>;
}

/// The two theme colors charts draw their labels with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub text: CssColor,
    pub text_secondary: CssColor,
}

impl ThemeColors {
    #[must_use]
    pub fn new(text: impl AsRef<str>, text_secondary: impl AsRef<str>) -> Self {
        Self {
            text: CssColor::new(text),
            text_secondary: CssColor::new(text_secondary),
        }
    }

    /// Reads both properties at call time; missing or blank values fall back.
    #[must_use]
    pub fn resolve<S: ThemeSource + ?Sized>(source: &S, fallback: &ThemeColors) -> Self {
        let read = |name: &str, fallback: &CssColor| {
            match source.custom_property(name).map(CssColor::new) {
                Some(color) if !color.is_blank() => color,
                _ => {
                    debug!(property = name, "theme property unresolved; using fallback");
                    fallback.clone()
                }
            }
        };
        Self {
            text: read(TEXT_PROPERTY, &fallback.text),
            text_secondary: read(TEXT_SECONDARY_PROPERTY, &fallback.text_secondary),
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self::new("rgba(19, 52, 59, 1)", "rgba(98, 108, 113, 1)")
    }

    #[must_use]
    pub fn dark() -> Self {
        Self::new("rgba(245, 245, 245, 1)", "rgba(167, 169, 169, 0.7)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Light/dark stylesheet stand-in.
///
/// An explicit `data-color-scheme` attribute wins; without one the OS
/// `prefers-color-scheme: dark` signal decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemePalette {
    light: ThemeColors,
    dark: ThemeColors,
    scheme_attribute: Option<ColorScheme>,
    os_prefers_dark: bool,
}

impl Default for SchemePalette {
    fn default() -> Self {
        Self::new(ThemeColors::light(), ThemeColors::dark())
    }
}

impl SchemePalette {
    #[must_use]
    pub fn new(light: ThemeColors, dark: ThemeColors) -> Self {
        Self {
            light,
            dark,
            scheme_attribute: None,
            os_prefers_dark: false,
        }
    }

    /// Sets or clears the root attribute. Unrecognized values act as absent.
    pub fn set_scheme_attribute(&mut self, value: Option<&str>) {
        self.scheme_attribute = value.and_then(ColorScheme::parse);
    }

    pub fn set_os_prefers_dark(&mut self, prefers_dark: bool) {
        self.os_prefers_dark = prefers_dark;
    }

    #[must_use]
    pub fn effective_scheme(&self) -> ColorScheme {
        match self.scheme_attribute {
            Some(scheme) => scheme,
            None if self.os_prefers_dark => ColorScheme::Dark,
            None => ColorScheme::Light,
        }
    }

    #[must_use]
    pub fn colors(&self) -> &ThemeColors {
        match self.effective_scheme() {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}

impl ThemeSource for SchemePalette {
    fn custom_property(&self, name: &str) -> Option<String> {
        let colors = self.colors();
        match name {
            TEXT_PROPERTY => Some(colors.text.to_string()),
            TEXT_SECONDARY_PROPERTY => Some(colors.text_secondary.to_string()),
            _ => None,
        }
    }
}
