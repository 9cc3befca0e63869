use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use sre_showcase::api::{SchemePalette, Showcase, ShowcaseConfig};
use sre_showcase::core::{PageLayout, SectionMarkup};
use sre_showcase::extensions::{ObserverContext, ShowcaseEvent, ShowcaseObserver};
use sre_showcase::render::NullBackend;

struct FocusLog(Rc<RefCell<Vec<String>>>);

impl ShowcaseObserver for FocusLog {
    fn id(&self) -> &str {
        "focus-log"
    }

    fn on_event(&mut self, event: &ShowcaseEvent, _context: &ObserverContext) {
        if let ShowcaseEvent::FocusRequested { section } = event {
            self.0.borrow_mut().push(section.to_string());
        }
    }
}

fn abc_showcase() -> Showcase<NullBackend, SchemePalette> {
    let layout = PageLayout {
        sections: vec![
            SectionMarkup::new("a").with_cards(1),
            SectionMarkup::new("b").active().with_cards(2),
            SectionMarkup::new("c").with_cards(3),
        ],
        nav_items: vec!["a".into(), "b".into(), "c".into()],
        tech_cards: Vec::new(),
    };
    Showcase::new(
        NullBackend::default(),
        SchemePalette::default(),
        &layout,
        &IndexMap::new(),
        ShowcaseConfig::default(),
    )
    .expect("showcase init")
}

fn active_nav(showcase: &Showcase<NullBackend, SchemePalette>) -> Vec<bool> {
    showcase.router().nav_items().iter().map(|nav| nav.active).collect()
}

#[test]
fn arrow_keys_wrap_around() {
    let mut showcase = abc_showcase();

    assert!(showcase.key_down("ArrowRight"));
    assert_eq!(showcase.active_section().as_str(), "c");
    assert!(showcase.key_down("ArrowRight"));
    assert_eq!(showcase.active_section().as_str(), "a");
    assert!(showcase.key_down("ArrowLeft"));
    assert_eq!(showcase.active_section().as_str(), "c");
    assert_eq!(active_nav(&showcase), vec![false, false, true]);
}

#[test]
fn home_and_end_jump() {
    let mut showcase = abc_showcase();
    assert!(showcase.key_down("End"));
    assert_eq!(showcase.active_section().as_str(), "c");
    assert!(showcase.key_down("Home"));
    assert_eq!(showcase.active_section().as_str(), "a");
}

#[test]
fn unrelated_keys_are_not_consumed() {
    let mut showcase = abc_showcase();
    assert!(!showcase.key_down("Tab"));
    assert!(!showcase.key_down("Enter"));
    assert_eq!(showcase.active_section().as_str(), "b");
    assert_eq!(showcase.scroll_requests(), 0);
}

#[test]
fn enter_and_space_activate_focused_item() {
    let mut showcase = abc_showcase();
    assert!(showcase.nav_key_down("a", "Enter"));
    assert_eq!(showcase.active_section().as_str(), "a");
    assert!(showcase.nav_key_down("c", " "));
    assert_eq!(showcase.active_section().as_str(), "c");
    assert!(!showcase.nav_key_down("c", "ArrowRight"));
    assert_eq!(showcase.active_section().as_str(), "c");
}

#[test]
fn arrow_on_focused_item_moves_one_step_after_bubbling() {
    let mut showcase = abc_showcase();

    let item_consumed = showcase.nav_key_down("b", "ArrowRight");
    let document_consumed = showcase.key_down("ArrowRight");

    assert!(!item_consumed);
    assert!(document_consumed);
    assert_eq!(showcase.active_section().as_str(), "c");
    assert_eq!(showcase.scroll_requests(), 1);
}

#[test]
fn keyboard_navigation_requests_focus_but_clicks_do_not() {
    let mut showcase = abc_showcase();
    let events = Rc::new(RefCell::new(Vec::new()));
    showcase
        .register_observer(Box::new(FocusLog(events.clone())))
        .expect("register observer");

    showcase.key_down("End");
    showcase.click_nav("a");
    showcase.key_down("ArrowLeft");
    showcase.key_down("Tab");

    let focused: Vec<String> = events.borrow().clone();
    assert_eq!(focused, vec!["c".to_owned(), "c".to_owned()]);
}

#[test]
fn unknown_target_leaves_state_unchanged() {
    let mut showcase = abc_showcase();
    let before = showcase.snapshot();

    assert!(!showcase.click_nav("missing"));

    assert_eq!(showcase.snapshot(), before);
    assert_eq!(showcase.pending_task_count(), 0);
}

#[test]
fn navigation_requests_scroll_and_card_animation() {
    let mut showcase = abc_showcase();
    showcase.click_nav("c");
    assert_eq!(showcase.scroll_requests(), 1);

    showcase.advance_by(100);
    let animation = showcase.last_card_animation().expect("cards animated");
    assert_eq!(animation.section.as_str(), "c");
    assert_eq!(animation.delays_ms, vec![0, 50, 100]);
}

#[test]
fn start_schedules_initial_animation() {
    let mut showcase = abc_showcase();
    showcase.start();
    showcase.advance_by(299);
    assert!(showcase.last_card_animation().is_none());
    showcase.advance_by(1);
    assert_eq!(
        showcase.last_card_animation().map(|a| a.delays_ms.clone()),
        Some(vec![0, 50])
    );
}

#[test]
fn tab_stop_follows_active_item() {
    let mut showcase = abc_showcase();
    showcase.click_nav("a");
    let stops: Vec<i32> = showcase
        .router()
        .nav_items()
        .iter()
        .map(|nav| nav.tab_index())
        .collect();
    assert_eq!(stops, vec![0, -1, -1]);
}

#[test]
fn tech_cards_toggle_exclusively() {
    let mut showcase = Showcase::sre_showcase(
        NullBackend::default(),
        SchemePalette::default(),
        ShowcaseConfig::default(),
    )
    .expect("showcase init");

    showcase.click_tech_card("kubernetes");
    showcase.click_tech_card("grafana");
    assert_eq!(showcase.tech_details().open_panel(), Some("grafana"));
    showcase.click_tech_card("grafana");
    assert_eq!(showcase.tech_details().open_panel(), None);
    assert_eq!(showcase.active_section().as_str(), "overview");
}
