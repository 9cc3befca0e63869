use serde::{Deserialize, Serialize};

use crate::error::{ShowcaseError, ShowcaseResult};
use crate::render::CssColor;

use super::ThemeColors;

/// Upper bound accepted for any timer delay.
const MAX_DELAY_MS: u64 = 10_000;

/// When charts of a newly shown section get built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ChartBuildTrigger {
    /// Build as soon as the host confirms the section became visible.
    OnVisible,
    /// Build after a fixed settle delay, independent of layout.
    AfterSettleDelay { delay_ms: u64 },
}

impl ChartBuildTrigger {
    /// The 150 ms settle delay the page historically used.
    pub const DEFAULT_SETTLE_DELAY_MS: u64 = 150;

    #[must_use]
    pub const fn settle_delay() -> Self {
        Self::AfterSettleDelay {
            delay_ms: Self::DEFAULT_SETTLE_DELAY_MS,
        }
    }
}

/// Timing and theming knobs of a `Showcase`.
///
/// Serializable so hosts can ship it next to the page markup; every field has
/// a default, so a partial JSON object is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    #[serde(default = "default_build_trigger")]
    pub build_trigger: ChartBuildTrigger,
    #[serde(default = "default_cleanup_delay_ms")]
    pub cleanup_delay_ms: u64,
    #[serde(default = "default_theme_debounce_ms")]
    pub theme_debounce_ms: u64,
    #[serde(default = "default_card_stagger_ms")]
    pub card_stagger_ms: u64,
    #[serde(default = "default_initial_animation_delay_ms")]
    pub initial_animation_delay_ms: u64,
    #[serde(default = "default_fallback_theme")]
    pub fallback_theme: ThemeColors,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            build_trigger: default_build_trigger(),
            cleanup_delay_ms: default_cleanup_delay_ms(),
            theme_debounce_ms: default_theme_debounce_ms(),
            card_stagger_ms: default_card_stagger_ms(),
            initial_animation_delay_ms: default_initial_animation_delay_ms(),
            fallback_theme: default_fallback_theme(),
        }
    }
}

impl ShowcaseConfig {
    #[must_use]
    pub fn with_build_trigger(mut self, trigger: ChartBuildTrigger) -> Self {
        self.build_trigger = trigger;
        self
    }

    #[must_use]
    pub fn with_cleanup_delay_ms(mut self, delay_ms: u64) -> Self {
        self.cleanup_delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_theme_debounce_ms(mut self, delay_ms: u64) -> Self {
        self.theme_debounce_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_card_stagger_ms(mut self, stagger_ms: u64) -> Self {
        self.card_stagger_ms = stagger_ms;
        self
    }

    #[must_use]
    pub fn with_initial_animation_delay_ms(mut self, delay_ms: u64) -> Self {
        self.initial_animation_delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_fallback_theme(mut self, theme: ThemeColors) -> Self {
        self.fallback_theme = theme;
        self
    }

    pub fn validate(&self) -> ShowcaseResult<()> {
        let settle = match self.build_trigger {
            ChartBuildTrigger::OnVisible => 0,
            ChartBuildTrigger::AfterSettleDelay { delay_ms } => delay_ms,
        };
        for (name, value) in [
            ("settle delay", settle),
            ("cleanup delay", self.cleanup_delay_ms),
            ("theme debounce", self.theme_debounce_ms),
            ("card stagger", self.card_stagger_ms),
            ("initial animation delay", self.initial_animation_delay_ms),
        ] {
            if value > MAX_DELAY_MS {
                return Err(ShowcaseError::InvalidConfig(format!(
                    "{name} must be <= {MAX_DELAY_MS} ms, got {value}"
                )));
            }
        }

        let fallback_colors: [&CssColor; 2] = [
            &self.fallback_theme.text,
            &self.fallback_theme.text_secondary,
        ];
        for color in fallback_colors {
            color
                .validate()
                .map_err(|e| ShowcaseError::InvalidConfig(format!("fallback theme: {e}")))?;
        }

        Ok(())
    }

    pub fn from_json_str(input: &str) -> ShowcaseResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ShowcaseError::InvalidConfig(format!("failed to parse config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ShowcaseResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ShowcaseError::InvalidConfig(format!("failed to serialize config json: {e}"))
        })
    }
}

fn default_build_trigger() -> ChartBuildTrigger {
    ChartBuildTrigger::OnVisible
}

fn default_cleanup_delay_ms() -> u64 {
    100
}

fn default_theme_debounce_ms() -> u64 {
    100
}

fn default_card_stagger_ms() -> u64 {
    50
}

fn default_initial_animation_delay_ms() -> u64 {
    300
}

fn default_fallback_theme() -> ThemeColors {
    ThemeColors::light()
}
