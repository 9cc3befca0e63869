use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ShowcaseError, ShowcaseResult};

use super::CssColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Doughnut,
    Bar,
    Radar,
}

/// Construction payload handed to the charting library.
///
/// Serializes to the `{type, data, options}` object a JS charting library
/// expects, with camelCase option keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Fill paint of a dataset: one color, or one color per data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Paint {
    Single(CssColor),
    PerPoint(Vec<CssColor>),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<CssColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Paint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub border_dash: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<CssColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<CssColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_hover_background_color: Option<CssColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_hover_border_color: Option<CssColor>,
}

impl Dataset {
    #[must_use]
    pub fn new(data: impl Into<Vec<f64>>) -> Self {
        Self {
            data: data.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_border(mut self, color: impl Into<CssColor>, width: f64) -> Self {
        self.border_color = Some(color.into());
        self.border_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_background(mut self, color: impl Into<CssColor>) -> Self {
        self.background_color = Some(Paint::Single(color.into()));
        self
    }

    #[must_use]
    pub fn with_point_backgrounds(mut self, colors: Vec<CssColor>) -> Self {
        self.background_color = Some(Paint::PerPoint(colors));
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = Some(tension);
        self
    }

    #[must_use]
    pub fn with_border_dash(mut self, dash: impl Into<Vec<f64>>) -> Self {
        self.border_dash = dash.into();
        self
    }

    /// Point marker colors; hover swaps fill and stroke.
    #[must_use]
    pub fn with_point_colors(mut self, fill: impl Into<CssColor>, stroke: impl Into<CssColor>) -> Self {
        let fill = fill.into();
        let stroke = stroke.into();
        self.point_background_color = Some(fill.clone());
        self.point_border_color = Some(stroke.clone());
        self.point_hover_background_color = Some(stroke);
        self.point_hover_border_color = Some(fill);
        self
    }

    fn colors(&self) -> impl Iterator<Item = &CssColor> {
        let paint: &[CssColor] = match &self.background_color {
            Some(Paint::Single(color)) => std::slice::from_ref(color),
            Some(Paint::PerPoint(colors)) => colors,
            None => &[],
        };
        self.border_color
            .iter()
            .chain(paint)
            .chain(self.point_background_color.iter())
            .chain(self.point_border_color.iter())
            .chain(self.point_hover_background_color.iter())
            .chain(self.point_hover_border_color.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: PluginOptions,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub scales: IndexMap<String, ScaleOptions>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: PluginOptions::default(),
            scales: IndexMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PluginOptions {
    pub title: TitleOptions,
    pub legend: LegendOptions,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TitleOptions {
    pub display: bool,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<CssColor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LegendOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<LegendPosition>,
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LegendLabels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<CssColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticks: Option<TickOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<LineOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle_lines: Option<LineOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_labels: Option<PointLabelOptions>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<CssColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<TickFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_color: Option<CssColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rotation: Option<f64>,
}

/// Tick label formatter, serialized by name since callbacks cannot cross
/// the JSON boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TickFormat {
    /// Ratio rendered as a percentage, e.g. `0.015` → `1.5%`.
    Percent { decimals: u8 },
}

impl TickFormat {
    #[must_use]
    pub fn format_value(self, value: f64) -> String {
        match self {
            Self::Percent { decimals } => {
                format!("{:.*}%", usize::from(decimals), value * 100.0)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineOptions {
    pub color: CssColor,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointLabelOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<CssColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontOptions>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontOptions {
    pub size: f64,
}

/// Theme-dependent label colors currently carried by a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelColors {
    pub title: Option<CssColor>,
    pub legend: Option<CssColor>,
    /// Tick and point-label colors across all scales.
    pub scale_labels: Vec<Option<CssColor>>,
}

impl ChartConfig {
    #[must_use]
    pub fn new(kind: ChartKind, data: ChartData, options: ChartOptions) -> Self {
        Self {
            kind,
            data,
            options,
        }
    }

    /// Writes the primary text color into the title and legend and the
    /// secondary text color into every scale's ticks and point labels.
    pub fn apply_label_colors(&mut self, text: &CssColor, text_secondary: &CssColor) {
        self.options.plugins.title.color = Some(text.clone());
        self.options.plugins.legend.labels.color = Some(text.clone());
        for scale in self.options.scales.values_mut() {
            if let Some(ticks) = scale.ticks.as_mut() {
                ticks.color = Some(text_secondary.clone());
            }
            if let Some(point_labels) = scale.point_labels.as_mut() {
                point_labels.color = Some(text_secondary.clone());
            }
        }
    }

    #[must_use]
    pub fn label_colors(&self) -> LabelColors {
        let mut scale_labels = Vec::new();
        for scale in self.options.scales.values() {
            if let Some(ticks) = &scale.ticks {
                scale_labels.push(ticks.color.clone());
            }
            if let Some(point_labels) = &scale.point_labels {
                scale_labels.push(point_labels.color.clone());
            }
        }
        LabelColors {
            title: self.options.plugins.title.color.clone(),
            legend: self.options.plugins.legend.labels.color.clone(),
            scale_labels,
        }
    }

    pub fn validate(&self) -> ShowcaseResult<()> {
        if self.data.datasets.is_empty() {
            return Err(ShowcaseError::InvalidData(
                "chart needs at least one dataset".to_owned(),
            ));
        }

        let label_count = self.data.labels.len();
        for dataset in &self.data.datasets {
            let name = dataset.label.as_deref().unwrap_or("<unlabelled>");
            if dataset.data.len() != label_count {
                return Err(ShowcaseError::InvalidData(format!(
                    "dataset `{name}` has {} values for {label_count} labels",
                    dataset.data.len()
                )));
            }
            if dataset.data.iter().any(|value| !value.is_finite()) {
                return Err(ShowcaseError::InvalidData(format!(
                    "dataset `{name}` contains non-finite values"
                )));
            }
            if let Some(tension) = dataset.tension {
                if !(0.0..=1.0).contains(&tension) {
                    return Err(ShowcaseError::InvalidData(format!(
                        "dataset `{name}` tension must be in [0, 1]"
                    )));
                }
            }
            if let Some(Paint::PerPoint(colors)) = &dataset.background_color {
                if colors.len() != label_count {
                    return Err(ShowcaseError::InvalidData(format!(
                        "dataset `{name}` has {} point colors for {label_count} labels",
                        colors.len()
                    )));
                }
            }
            for color in dataset.colors() {
                color.validate()?;
            }
        }

        for (axis, scale) in &self.options.scales {
            if let Some(ticks) = &scale.ticks {
                if let (Some(min), Some(max)) = (ticks.min, ticks.max) {
                    if min >= max {
                        return Err(ShowcaseError::InvalidData(format!(
                            "scale `{axis}` tick range must be increasing"
                        )));
                    }
                }
                if ticks.step_size.is_some_and(|step| step <= 0.0) {
                    return Err(ShowcaseError::InvalidData(format!(
                        "scale `{axis}` tick step must be > 0"
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn to_json_value(&self) -> ShowcaseResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| {
            ShowcaseError::InvalidData(format!("failed to serialize chart config: {e}"))
        })
    }
}
