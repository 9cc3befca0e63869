use sre_showcase::api::{
    COLOR_SCHEME_ATTRIBUTE, ChartBuildTrigger, SchemePalette, Showcase, ShowcaseConfig,
    ThemeColors,
};
use sre_showcase::core::TechToggle;
use sre_showcase::render::NullBackend;

#[test]
fn showcase_smoke_flow() {
    let config = ShowcaseConfig::default().with_build_trigger(ChartBuildTrigger::settle_delay());
    let mut showcase =
        Showcase::sre_showcase(NullBackend::default(), SchemePalette::default(), config)
            .expect("showcase init");
    showcase.start();
    assert_eq!(showcase.active_section().as_str(), "overview");
    assert_eq!(showcase.charts().live_count(), 0);

    assert!(showcase.click_nav("monitoring"));
    showcase.advance_by(150);
    assert!(showcase.charts().is_live("burnRateChart"));
    assert!(showcase.charts().is_live("errorBudgetChart"));

    assert!(showcase.key_down("ArrowRight"));
    assert_eq!(showcase.active_section().as_str(), "chaos");
    showcase.advance_by(150);
    assert_eq!(showcase.charts().live_slots().len(), 1);
    assert!(showcase.charts().is_live("chaosChart"));

    showcase.theme_mut().set_scheme_attribute(Some("dark"));
    assert!(showcase.theme_attribute_changed(COLOR_SCHEME_ATTRIBUTE));
    showcase.advance_by(100);
    assert_eq!(showcase.theme_colors(), ThemeColors::dark());
    assert_eq!(showcase.charts().backend().updated_count, 1);

    assert!(showcase.key_down("End"));
    assert_eq!(showcase.active_section().as_str(), "results");
    showcase.flush();
    assert!(showcase.charts().is_live("resultsChart"));
    assert_eq!(showcase.charts().backend().live_count(), 1);
    assert_eq!(showcase.pending_task_count(), 0);

    assert_eq!(showcase.click_tech_card("argocd"), TechToggle::Opened);
    assert_eq!(showcase.scroll_requests(), 3);
}
