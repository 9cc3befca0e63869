mod chart_config;
mod null_backend;
mod primitives;

pub use chart_config::{
    ChartConfig, ChartData, ChartKind, ChartOptions, Dataset, FontOptions, LabelColors,
    LegendLabels, LegendOptions, LegendPosition, LineOptions, Paint, PluginOptions,
    PointLabelOptions, ScaleOptions, TickFormat, TickOptions, TitleOptions,
};
pub use null_backend::NullBackend;
pub use primitives::{Color, CssColor};

use serde::{Deserialize, Serialize};

use crate::core::SlotId;
use crate::error::ShowcaseResult;

/// Opaque handle of one live chart instance, issued by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartHandle(pub u64);

/// Contract implemented by any charting library binding.
///
/// Backends receive a fully resolved `ChartConfig` (theme colors already
/// applied), so lifecycle logic stays isolated from drawing.
pub trait ChartBackend {
    /// Constructs a chart on the canvas identified by `slot`.
    fn create(&mut self, slot: &SlotId, config: &ChartConfig) -> ShowcaseResult<ChartHandle>;

    /// Replaces the options of a live chart and requests a redraw.
    fn update(&mut self, handle: ChartHandle, config: &ChartConfig) -> ShowcaseResult<()>;

    /// Releases a live chart. Unknown handles are ignored.
    fn destroy(&mut self, handle: ChartHandle);
}
