//! Literal chart configurations of the showcase page.
//!
//! Values are sample data; nothing here is computed at runtime. Label colors
//! are left unset and filled from the theme when a chart is built.

use indexmap::IndexMap;

use crate::core::SlotId;
use crate::render::{
    ChartConfig, ChartData, ChartKind, ChartOptions, Color, CssColor, Dataset, FontOptions,
    LegendPosition, LineOptions, PointLabelOptions, ScaleOptions, TickFormat, TickOptions,
};

pub const BURN_RATE_CHART: &str = "burnRateChart";
pub const ERROR_BUDGET_CHART: &str = "errorBudgetChart";
pub const CHAOS_CHART: &str = "chaosChart";
pub const RESULTS_CHART: &str = "resultsChart";

const TEAL: Color = Color::rgb(31, 184, 205);
const BRICK: Color = Color::rgb(180, 65, 60);
const PEACH: Color = Color::rgb(255, 193, 133);
const WHITE: Color = Color::rgb(255, 255, 255);
const GRID: Color = Color::rgba(0, 0, 0, 0.1);

/// Every chart of the page keyed by canvas id.
#[must_use]
pub fn sre_chart_catalog() -> IndexMap<SlotId, ChartConfig> {
    IndexMap::from([
        (SlotId::from(BURN_RATE_CHART), burn_rate_chart()),
        (SlotId::from(ERROR_BUDGET_CHART), error_budget_chart()),
        (SlotId::from(CHAOS_CHART), chaos_chart()),
        (SlotId::from(RESULTS_CHART), results_chart()),
    ])
}

fn labels<const N: usize>(values: [&str; N]) -> Vec<String> {
    values.into_iter().map(str::to_owned).collect()
}

fn titled(text: &str) -> ChartOptions {
    let mut options = ChartOptions::default();
    options.plugins.title.display = true;
    options.plugins.title.text = text.to_owned();
    options
}

fn grid() -> Option<LineOptions> {
    Some(LineOptions {
        color: GRID.to_css(),
    })
}

/// Error-budget burn rate over the last day against the alert threshold.
#[must_use]
pub fn burn_rate_chart() -> ChartConfig {
    let data = ChartData {
        labels: labels(["00:00", "04:00", "08:00", "12:00", "16:00", "20:00", "24:00"]),
        datasets: vec![
            Dataset::new([0.02, 0.01, 0.03, 0.02, 0.01, 0.02, 0.01])
                .with_label("Error Budget Burn Rate")
                .with_border(TEAL, 2.0)
                .with_background(TEAL.with_alpha(0.1))
                .with_fill(true)
                .with_tension(0.4),
            Dataset::new([0.1; 7])
                .with_label("Alert Threshold")
                .with_border(BRICK, 2.0)
                .with_background(BRICK.with_alpha(0.1))
                .with_border_dash([5.0, 5.0])
                .with_fill(false),
        ],
    };

    let mut options = titled("SLO Burn Rate (24h)");
    options.scales.insert(
        "y".to_owned(),
        ScaleOptions {
            begin_at_zero: Some(true),
            max: Some(0.15),
            ticks: Some(TickOptions {
                format: Some(TickFormat::Percent { decimals: 1 }),
                ..TickOptions::default()
            }),
            grid: grid(),
            ..ScaleOptions::default()
        },
    );
    options.scales.insert(
        "x".to_owned(),
        ScaleOptions {
            ticks: Some(TickOptions::default()),
            grid: grid(),
            ..ScaleOptions::default()
        },
    );

    ChartConfig::new(ChartKind::Line, data, options)
}

/// Remaining versus consumed error budget over 30 days.
#[must_use]
pub fn error_budget_chart() -> ChartConfig {
    let data = ChartData {
        labels: labels(["Remaining Budget", "Used Budget"]),
        datasets: vec![
            Dataset::new([92.0, 8.0])
                .with_point_backgrounds(vec![TEAL.to_css(), PEACH.to_css()])
                .with_border_width(0.0),
        ],
    };

    let mut options = titled("Error Budget Status (30 days)");
    options.plugins.legend.position = Some(LegendPosition::Bottom);
    options.plugins.legend.labels.padding = Some(20.0);

    ChartConfig::new(ChartKind::Doughnut, data, options)
}

#[must_use]
pub fn chaos_chart() -> ChartConfig {
    let data = ChartData {
        labels: labels([
            "Pod Failures",
            "Network Latency",
            "Database Failover",
            "Service Mesh",
            "Load Testing",
            "Resource Exhaustion",
        ]),
        datasets: vec![
            Dataset::new([99.0, 98.0, 95.0, 97.0, 94.0, 96.0])
                .with_label("Resilience Score")
                .with_border(TEAL, 2.0)
                .with_background(TEAL.with_alpha(0.2))
                .with_point_colors(TEAL, WHITE),
        ],
    };

    let mut options = titled("Chaos Engineering Resilience Scores");
    options.scales.insert(
        "r".to_owned(),
        ScaleOptions {
            angle_lines: grid(),
            grid: grid(),
            point_labels: Some(PointLabelOptions {
                color: None,
                font: Some(FontOptions { size: 12.0 }),
            }),
            ticks: Some(TickOptions {
                backdrop_color: Some(CssColor::transparent()),
                min: Some(80.0),
                max: Some(100.0),
                step_size: Some(5.0),
                ..TickOptions::default()
            }),
            ..ScaleOptions::default()
        },
    );

    ChartConfig::new(ChartKind::Radar, data, options)
}

/// Key reliability metrics before and after the rollout.
#[must_use]
pub fn results_chart() -> ChartConfig {
    let data = ChartData {
        labels: labels([
            "Service Uptime",
            "MTTR",
            "Deployment Frequency",
            "Failed Deployments",
            "Alert Noise",
        ]),
        datasets: vec![
            Dataset::new([99.9, 45.0, 1.0, 12.0, 500.0])
                .with_label("Before Implementation")
                .with_background(BRICK),
            Dataset::new([99.99, 8.0, 7.0, 2.0, 50.0])
                .with_label("After Implementation")
                .with_background(TEAL),
        ],
    };

    let mut options = titled("Before vs After: Key Metrics Improvement");
    options.scales.insert(
        "y".to_owned(),
        ScaleOptions {
            begin_at_zero: Some(true),
            ticks: Some(TickOptions::default()),
            grid: grid(),
            ..ScaleOptions::default()
        },
    );
    options.scales.insert(
        "x".to_owned(),
        ScaleOptions {
            ticks: Some(TickOptions {
                max_rotation: Some(45.0),
                min_rotation: Some(45.0),
                ..TickOptions::default()
            }),
            grid: grid(),
            ..ScaleOptions::default()
        },
    );

    ChartConfig::new(ChartKind::Bar, data, options)
}
