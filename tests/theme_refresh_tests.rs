use std::cell::RefCell;
use std::rc::Rc;

use sre_showcase::api::chart_catalog::{BURN_RATE_CHART, ERROR_BUDGET_CHART};
use sre_showcase::api::{
    COLOR_SCHEME_ATTRIBUTE, DeferredTask, SchemePalette, Showcase, ShowcaseConfig, ThemeColors,
};
use sre_showcase::extensions::{ObserverContext, ShowcaseEvent, ShowcaseObserver};
use sre_showcase::render::{LabelColors, NullBackend};

struct EventLog(Rc<RefCell<Vec<ShowcaseEvent>>>);

impl ShowcaseObserver for EventLog {
    fn id(&self) -> &str {
        "event-log"
    }

    fn on_event(&mut self, event: &ShowcaseEvent, _context: &ObserverContext) {
        self.0.borrow_mut().push(event.clone());
    }
}

fn monitoring_showcase() -> Showcase<NullBackend, SchemePalette> {
    let mut showcase = Showcase::sre_showcase(
        NullBackend::default(),
        SchemePalette::default(),
        ShowcaseConfig::default(),
    )
    .expect("showcase init");
    showcase.start();
    showcase.click_nav("monitoring");
    showcase.section_visible("monitoring");
    showcase.advance_by(500);
    showcase
}

fn label_colors(showcase: &Showcase<NullBackend, SchemePalette>, slot: &str) -> LabelColors {
    showcase
        .charts()
        .instance_config(slot)
        .expect("live chart")
        .label_colors()
}

fn assert_themed(colors: &LabelColors, theme: &ThemeColors) {
    assert_eq!(colors.title.as_ref(), Some(&theme.text));
    assert_eq!(colors.legend.as_ref(), Some(&theme.text));
    for color in &colors.scale_labels {
        assert_eq!(color.as_ref(), Some(&theme.text_secondary));
    }
}

#[test]
fn scheme_attribute_change_recolors_live_charts() {
    let mut showcase = monitoring_showcase();
    let live_before = showcase.charts().live_slots();

    showcase.theme_mut().set_scheme_attribute(Some("dark"));
    assert!(showcase.theme_attribute_changed(COLOR_SCHEME_ATTRIBUTE));

    showcase.advance_by(99);
    assert_themed(&label_colors(&showcase, BURN_RATE_CHART), &ThemeColors::light());

    showcase.advance_by(1);
    assert_themed(&label_colors(&showcase, BURN_RATE_CHART), &ThemeColors::dark());
    assert_themed(&label_colors(&showcase, ERROR_BUDGET_CHART), &ThemeColors::dark());
    assert_eq!(showcase.charts().live_slots(), live_before);
    assert_eq!(showcase.charts().backend().updated_count, 2);
    assert_eq!(showcase.charts().backend().created_count, 2);
}

#[test]
fn backend_receives_recolored_config() {
    let mut showcase = monitoring_showcase();
    showcase.theme_mut().set_scheme_attribute(Some("dark"));
    showcase.theme_attribute_changed(COLOR_SCHEME_ATTRIBUTE);
    showcase.advance_by(100);

    let handle = showcase
        .charts()
        .slot(BURN_RATE_CHART)
        .and_then(|slot| slot.handle())
        .expect("live handle");
    let rendered = showcase
        .charts()
        .backend()
        .config(handle)
        .expect("backend config")
        .label_colors();
    assert_themed(&rendered, &ThemeColors::dark());
}

#[test]
fn unrelated_attribute_is_ignored() {
    let mut showcase = monitoring_showcase();
    assert!(!showcase.theme_attribute_changed("class"));
    assert!(!showcase.is_task_pending(&DeferredTask::RefreshColors));
}

#[test]
fn os_preference_change_is_debounced() {
    let mut showcase = monitoring_showcase();
    showcase.theme_mut().set_os_prefers_dark(true);
    showcase.os_color_scheme_changed();
    showcase.advance_by(50);
    showcase.os_color_scheme_changed();
    showcase.advance_by(99);
    assert_eq!(showcase.charts().backend().updated_count, 0);

    showcase.advance_by(1);
    assert_eq!(showcase.charts().backend().updated_count, 2);
    assert_themed(&label_colors(&showcase, ERROR_BUDGET_CHART), &ThemeColors::dark());
}

#[test]
fn refresh_without_live_charts_changes_nothing() {
    let mut showcase = Showcase::sre_showcase(
        NullBackend::default(),
        SchemePalette::default(),
        ShowcaseConfig::default(),
    )
    .expect("showcase init");
    showcase.os_color_scheme_changed();
    showcase.advance_by(100);
    assert_eq!(showcase.charts().live_count(), 0);
    assert_eq!(showcase.charts().backend().updated_count, 0);
}

#[test]
fn charts_built_after_theme_change_use_new_colors() {
    let mut showcase = monitoring_showcase();
    showcase.theme_mut().set_scheme_attribute(Some("dark"));
    showcase.click_nav("results");
    showcase.section_visible("results");
    assert_themed(&label_colors(&showcase, "resultsChart"), &ThemeColors::dark());
}

#[test]
fn failed_redraw_keeps_chart_live_with_previous_colors() {
    let mut showcase = monitoring_showcase();
    let events = Rc::new(RefCell::new(Vec::new()));
    showcase
        .register_observer(Box::new(EventLog(events.clone())))
        .expect("register observer");
    showcase.backend_mut().fail_updates_on(BURN_RATE_CHART);

    showcase.theme_mut().set_scheme_attribute(Some("dark"));
    showcase.theme_attribute_changed(COLOR_SCHEME_ATTRIBUTE);
    showcase.advance_by(100);

    assert!(showcase.charts().is_live(BURN_RATE_CHART));
    assert_themed(&label_colors(&showcase, BURN_RATE_CHART), &ThemeColors::light());
    assert_themed(&label_colors(&showcase, ERROR_BUDGET_CHART), &ThemeColors::dark());
    assert_eq!(showcase.charts().backend().updated_count, 1);
    assert_eq!(
        events.borrow().last(),
        Some(&ShowcaseEvent::ColorsRefreshed { updated: 1 })
    );

    showcase.backend_mut().recover(BURN_RATE_CHART);
    showcase.os_color_scheme_changed();
    showcase.advance_by(100);
    assert_themed(&label_colors(&showcase, BURN_RATE_CHART), &ThemeColors::dark());
}
