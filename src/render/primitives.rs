use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ShowcaseError, ShowcaseResult};

/// RGBA color with 8-bit channels and a normalized alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#RRGGBB` (case-insensitive).
    pub fn from_hex(input: &str) -> ShowcaseResult<Self> {
        let digits = input
            .strip_prefix('#')
            .filter(|digits| digits.len() == 6 && digits.is_ascii())
            .ok_or_else(|| ShowcaseError::InvalidData(format!("`{input}` is not a #RRGGBB color")))?;
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| {
                ShowcaseError::InvalidData(format!("`{input}` is not a #RRGGBB color"))
            })
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> ShowcaseResult<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(ShowcaseError::InvalidData(
                "color alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }

    /// CSS form: `#RRGGBB` when opaque, `rgba(r, g, b, a)` otherwise.
    #[must_use]
    pub fn to_css(self) -> CssColor {
        if self.alpha >= 1.0 {
            CssColor(format!(
                "#{:02X}{:02X}{:02X}",
                self.red, self.green, self.blue
            ))
        } else {
            CssColor(format!(
                "rgba({}, {}, {}, {})",
                self.red, self.green, self.blue, self.alpha
            ))
        }
    }
}

/// Color value as handed to the charting library: any CSS color string.
///
/// Theme colors come from computed custom properties, so they are kept as
/// opaque strings rather than parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CssColor(String);

impl CssColor {
    /// Trims surrounding whitespace, as computed style values often carry a
    /// leading space.
    #[must_use]
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_owned())
    }

    #[must_use]
    pub fn transparent() -> Self {
        Self("transparent".to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    pub fn validate(&self) -> ShowcaseResult<()> {
        if self.0.is_empty() {
            return Err(ShowcaseError::InvalidData(
                "css color must not be empty".to_owned(),
            ));
        }
        if self.0.chars().any(|c| c.is_control() || c == ';') {
            return Err(ShowcaseError::InvalidData(format!(
                "css color `{}` contains forbidden characters",
                self.0
            )));
        }
        Ok(())
    }
}

impl From<Color> for CssColor {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
