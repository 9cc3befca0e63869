use sre_showcase::api::chart_catalog::{BURN_RATE_CHART, CHAOS_CHART, ERROR_BUDGET_CHART};
use sre_showcase::api::{ChartBuildTrigger, SchemePalette, Showcase, ShowcaseConfig, ThemeColors};
use sre_showcase::core::SlotId;
use sre_showcase::render::NullBackend;

fn showcase(config: ShowcaseConfig) -> Showcase<NullBackend, SchemePalette> {
    let mut showcase =
        Showcase::sre_showcase(NullBackend::default(), SchemePalette::default(), config)
            .expect("showcase init");
    showcase.start();
    showcase
}

fn settle_config(settle_ms: u64, cleanup_ms: u64) -> ShowcaseConfig {
    ShowcaseConfig::default()
        .with_build_trigger(ChartBuildTrigger::AfterSettleDelay {
            delay_ms: settle_ms,
        })
        .with_cleanup_delay_ms(cleanup_ms)
}

#[test]
fn monitoring_charts_built_after_settle_delay() {
    let mut showcase = showcase(settle_config(150, 100));
    assert_eq!(showcase.active_section().as_str(), "overview");
    assert_eq!(showcase.charts().live_count(), 0);

    assert!(showcase.click_nav("monitoring"));
    showcase.advance_by(149);
    assert!(!showcase.charts().is_live(BURN_RATE_CHART));

    showcase.advance_by(1);
    let backend = showcase.charts().backend();
    assert_eq!(backend.live_on(BURN_RATE_CHART), 1);
    assert_eq!(backend.live_on(ERROR_BUDGET_CHART), 1);
    assert_eq!(showcase.charts().live_count(), 2);
}

#[test]
fn default_trigger_waits_for_visibility_signal() {
    let mut showcase = showcase(ShowcaseConfig::default());

    assert!(showcase.click_nav("monitoring"));
    showcase.advance_by(1_000);
    assert_eq!(showcase.charts().live_count(), 0);

    showcase.section_visible("monitoring");
    assert_eq!(showcase.charts().live_count(), 2);
}

#[test]
fn visibility_signal_builds_without_timer() {
    let mut showcase = showcase(ShowcaseConfig::default());

    showcase.click_nav("monitoring");
    assert_eq!(showcase.charts().live_count(), 0);

    showcase.section_visible("monitoring");
    assert_eq!(
        showcase.charts().live_slots(),
        vec![SlotId::from(BURN_RATE_CHART), SlotId::from(ERROR_BUDGET_CHART)]
    );
}

#[test]
fn visibility_signal_for_hidden_section_is_ignored() {
    let mut showcase = showcase(ShowcaseConfig::default());
    showcase.click_nav("monitoring");
    showcase.click_nav("chaos");

    showcase.section_visible("monitoring");
    assert_eq!(showcase.charts().live_count(), 0);
}

#[test]
fn repeated_activation_never_duplicates_charts() {
    let mut showcase = showcase(settle_config(150, 100));
    for _ in 0..3 {
        showcase.click_nav("monitoring");
        showcase.section_visible("monitoring");
    }
    showcase.advance_by(1_000);

    let backend = showcase.charts().backend();
    assert_eq!(backend.created_count, 2);
    assert_eq!(backend.live_on(BURN_RATE_CHART), 1);
    assert_eq!(backend.live_on(ERROR_BUDGET_CHART), 1);
}

#[test]
fn switching_away_destroys_charts_on_next_cleanup() {
    let mut showcase = showcase(ShowcaseConfig::default());
    showcase.click_nav("monitoring");
    showcase.section_visible("monitoring");
    showcase.advance_by(100);

    showcase.click_nav("overview");
    assert_eq!(showcase.charts().live_count(), 2, "cleanup is deferred");

    showcase.advance_by(100);
    assert_eq!(showcase.charts().live_count(), 0);
    assert_eq!(showcase.charts().backend().live_count(), 0);
    assert_eq!(showcase.charts().backend().destroyed_count, 2);
}

fn switch_monitoring_to_chaos(config: ShowcaseConfig) -> Showcase<NullBackend, SchemePalette> {
    let mut showcase = showcase(config);
    showcase.click_nav("monitoring");
    showcase.advance_by(1_000);
    assert_eq!(showcase.charts().live_count(), 2);

    showcase.click_nav("chaos");
    showcase.advance_by(1_000);
    showcase
}

#[test]
fn build_before_cleanup_reaches_same_state() {
    let showcase = switch_monitoring_to_chaos(settle_config(150, 200));
    assert_eq!(showcase.charts().live_slots(), vec![SlotId::from(CHAOS_CHART)]);
    assert_eq!(showcase.charts().backend().live_count(), 1);
}

#[test]
fn cleanup_before_build_reaches_same_state() {
    let showcase = switch_monitoring_to_chaos(settle_config(150, 100));
    assert_eq!(showcase.charts().live_slots(), vec![SlotId::from(CHAOS_CHART)]);
    assert_eq!(showcase.charts().backend().live_count(), 1);
}

#[test]
fn superseded_build_is_skipped() {
    let mut showcase = showcase(settle_config(150, 100));
    showcase.click_nav("monitoring");
    showcase.advance_by(10);
    showcase.click_nav("chaos");
    showcase.advance_by(1_000);

    let backend = showcase.charts().backend();
    assert_eq!(backend.created_count, 1);
    assert_eq!(backend.live_on(CHAOS_CHART), 1);
}

#[test]
fn failed_chart_is_retried_on_next_activation() {
    let mut showcase = showcase(ShowcaseConfig::default());
    showcase.backend_mut().fail_on(BURN_RATE_CHART);

    showcase.click_nav("monitoring");
    showcase.section_visible("monitoring");
    assert!(!showcase.charts().is_live(BURN_RATE_CHART));
    assert!(showcase.charts().is_live(ERROR_BUDGET_CHART));
    assert_eq!(showcase.active_section().as_str(), "monitoring");

    showcase.backend_mut().recover(BURN_RATE_CHART);
    showcase.click_nav("monitoring");
    showcase.section_visible("monitoring");
    assert!(showcase.charts().is_live(BURN_RATE_CHART));
    assert_eq!(showcase.charts().backend().created_count, 2);
}

#[test]
fn charts_use_resolved_theme_colors() {
    let mut showcase = showcase(ShowcaseConfig::default());
    showcase.click_nav("chaos");
    showcase.section_visible("chaos");

    let config = showcase
        .charts()
        .instance_config(CHAOS_CHART)
        .expect("live chaos chart");
    let colors = config.label_colors();
    assert_eq!(colors.title, Some(ThemeColors::light().text));
    assert!(
        colors
            .scale_labels
            .iter()
            .all(|color| color.as_ref() == Some(&ThemeColors::light().text_secondary))
    );
}

#[test]
fn initially_active_chart_section_builds_on_start() {
    let mut layout = sre_showcase::core::PageLayout::sre_showcase();
    for section in &mut layout.sections {
        section.active = section.id.as_str() == "results";
    }
    let mut showcase = Showcase::new(
        NullBackend::default(),
        SchemePalette::default(),
        &layout,
        &sre_showcase::api::chart_catalog::sre_chart_catalog(),
        ShowcaseConfig::default(),
    )
    .expect("showcase init");

    showcase.start();
    assert!(showcase.charts().is_live("resultsChart"));
}
