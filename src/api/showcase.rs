use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::core::{PageLayout, SectionId, SlotId, TechDetails, TechToggle};
use crate::error::ShowcaseResult;
use crate::extensions::{ShowcaseEvent, ShowcaseObserver};
use crate::interaction::NavKey;
use crate::render::{ChartBackend, ChartConfig};

use super::chart_catalog::sre_chart_catalog;
use super::{
    COLOR_SCHEME_ATTRIBUTE, CardAnimation, ChartBuildTrigger, ChartLifecycleManager,
    DeferredQueue, DeferredTask, SectionRouter, ShowcaseConfig, ThemeColors, ThemeSource,
};

/// Main orchestration facade consumed by host applications.
///
/// `Showcase` owns the section router, the chart lifecycle manager and the
/// deferred task queue. Hosts feed it input events and advance its clock;
/// visual side effects are reported to observers.
pub struct Showcase<B: ChartBackend, T: ThemeSource> {
    pub(super) config: ShowcaseConfig,
    pub(super) router: SectionRouter,
    pub(super) charts: ChartLifecycleManager<B>,
    pub(super) theme: T,
    pub(super) tech_details: TechDetails,
    pub(super) queue: DeferredQueue,
    pub(super) observers: IndexMap<String, Box<dyn ShowcaseObserver>>,
    pub(super) scroll_requests: u64,
    pub(super) last_animation: Option<CardAnimation>,
}

impl<B: ChartBackend, T: ThemeSource> Showcase<B, T> {
    pub fn new(
        backend: B,
        theme: T,
        layout: &PageLayout,
        catalog: &IndexMap<SlotId, ChartConfig>,
        config: ShowcaseConfig,
    ) -> ShowcaseResult<Self> {
        config.validate()?;
        let router = SectionRouter::from_layout(layout)?;
        let charts = ChartLifecycleManager::from_layout(backend, layout, catalog)?;

        Ok(Self {
            config,
            router,
            charts,
            theme,
            tech_details: TechDetails::from_cards(&layout.tech_cards),
            queue: DeferredQueue::default(),
            observers: IndexMap::new(),
            scroll_requests: 0,
            last_animation: None,
        })
    }

    /// The SRE showcase page with its built-in chart catalog.
    pub fn sre_showcase(backend: B, theme: T, config: ShowcaseConfig) -> ShowcaseResult<Self> {
        Self::new(
            backend,
            theme,
            &PageLayout::sre_showcase(),
            &sre_chart_catalog(),
            config,
        )
    }

    /// Page-load work: the initial card animation and the charts of the
    /// section that is visible from the start.
    pub fn start(&mut self) {
        self.queue.schedule_coalesced(
            self.config.initial_animation_delay_ms,
            DeferredTask::AnimateCards,
        );
        let initial = self.router.active_section().clone();
        match self.config.build_trigger {
            ChartBuildTrigger::OnVisible => self.build_charts(&initial),
            ChartBuildTrigger::AfterSettleDelay { delay_ms } => {
                if self.charts.owns_charts(initial.as_str()) {
                    self.queue
                        .schedule(delay_ms, DeferredTask::BuildCharts(initial));
                }
            }
        }
    }

    /// Pointer activation of a nav item. Returns `false` for an unknown target.
    ///
    /// With the default [`ChartBuildTrigger::OnVisible`] no chart is built
    /// here or by a later timer: the host must follow up with
    /// [`Showcase::section_visible`] once the section is laid out. Only
    /// [`ChartBuildTrigger::AfterSettleDelay`] schedules the build itself.
    pub fn click_nav(&mut self, section_id: &str) -> bool {
        let activation = match self.router.activate(section_id) {
            Ok(activation) => activation,
            Err(err) => {
                warn!(error = %err, "navigation aborted");
                self.emit(ShowcaseEvent::ActivationRejected {
                    requested: section_id.to_owned(),
                });
                return false;
            }
        };

        info!(section = %activation.current, changed = activation.changed(), "navigating to section");
        self.emit(ShowcaseEvent::SectionActivated {
            previous: activation.previous.clone(),
            current: activation.current.clone(),
        });
        self.scroll_requests += 1;
        self.emit(ShowcaseEvent::ScrollToTopRequested);

        if let ChartBuildTrigger::AfterSettleDelay { delay_ms } = self.config.build_trigger {
            if self.charts.owns_charts(activation.current.as_str()) {
                self.queue
                    .schedule(delay_ms, DeferredTask::BuildCharts(activation.current));
            }
        }
        self.queue
            .schedule_coalesced(self.config.cleanup_delay_ms, DeferredTask::Cleanup);
        self.queue
            .schedule_coalesced(self.config.cleanup_delay_ms, DeferredTask::AnimateCards);
        true
    }

    /// Host confirmation that `section_id` is laid out and visible.
    ///
    /// Builds its charts immediately when it is still the active section.
    pub fn section_visible(&mut self, section_id: &str) {
        if !self.router.is_active(section_id) {
            debug!(section = section_id, "visibility signal for inactive section ignored");
            return;
        }
        let section = self.router.active_section().clone();
        self.build_charts(&section);
    }

    /// Document-level key handling: arrows cycle tabs, Home/End jump.
    ///
    /// Keyboard navigation also asks the host to move focus to the new nav
    /// item. Returns `true` when the key was consumed.
    pub fn key_down(&mut self, key: &str) -> bool {
        let Some(key) = NavKey::from_dom_key(key) else {
            return false;
        };
        let Some(target) = self.router.key_target(key).cloned() else {
            return false;
        };
        if !self.click_nav(target.as_str()) {
            return false;
        }
        self.emit(ShowcaseEvent::FocusRequested { section: target });
        true
    }

    /// Key press on a focused nav item. Only Enter/Space are handled here;
    /// anything else is left unconsumed so it can bubble to `key_down`.
    pub fn nav_key_down(&mut self, focused: &str, key: &str) -> bool {
        match NavKey::from_dom_key(key) {
            Some(nav_key) if nav_key.is_activation() => self.click_nav(focused),
            _ => false,
        }
    }

    pub fn click_tech_card(&mut self, tech: &str) -> TechToggle {
        let toggle = self.tech_details.toggle(tech);
        match toggle {
            TechToggle::Opened | TechToggle::Closed => self.emit(ShowcaseEvent::TechDetailsToggled {
                tech: tech.to_owned(),
                open: toggle == TechToggle::Opened,
            }),
            TechToggle::Ignored => {}
        }
        toggle
    }

    /// Root attribute mutation. Only the color-scheme attribute schedules a
    /// (debounced) color refresh.
    pub fn theme_attribute_changed(&mut self, attribute: &str) -> bool {
        if attribute != COLOR_SCHEME_ATTRIBUTE {
            return false;
        }
        self.schedule_color_refresh();
        true
    }

    /// OS light/dark preference change.
    pub fn os_color_scheme_changed(&mut self) {
        self.schedule_color_refresh();
    }

    /// Advances the virtual clock, running every task that falls due.
    pub fn advance_by(&mut self, elapsed_ms: u64) {
        let until = self.queue.now_ms().saturating_add(elapsed_ms);
        while let Some(task) = self.queue.pop_due(until) {
            self.run_task(task);
        }
        self.queue.advance_to(until);
    }

    /// Runs everything pending regardless of due time.
    pub fn flush(&mut self) {
        while let Some(task) = self.queue.pop_due(u64::MAX) {
            self.run_task(task);
        }
    }

    fn schedule_color_refresh(&mut self) {
        self.queue
            .schedule_coalesced(self.config.theme_debounce_ms, DeferredTask::RefreshColors);
    }

    fn run_task(&mut self, task: DeferredTask) {
        match task {
            DeferredTask::BuildCharts(section) => {
                if self.router.is_active(section.as_str()) {
                    self.build_charts(&section);
                } else {
                    debug!(section = %section, "skipping chart build for hidden section");
                }
            }
            DeferredTask::Cleanup => self.cleanup_hidden_charts(),
            DeferredTask::RefreshColors => {
                let colors = self.theme_colors();
                let updated = self.charts.refresh_colors(&colors);
                debug!(updated, "chart colors refreshed");
                self.emit(ShowcaseEvent::ColorsRefreshed { updated });
            }
            DeferredTask::AnimateCards => {
                let section = self.router.active_section().clone();
                let cards = self.router.section(section.as_str()).map_or(0, |s| s.cards);
                let plan = CardAnimation::staggered(section, cards, self.config.card_stagger_ms);
                self.emit(ShowcaseEvent::CardsAnimated {
                    section: plan.section.clone(),
                    delays_ms: plan.delays_ms.clone(),
                });
                self.last_animation = Some(plan);
            }
        }
    }

    /// Destroys the charts of every hidden section right away.
    pub fn cleanup_hidden_charts(&mut self) {
        let active = self.router.active_section().clone();
        let slots = self.charts.cleanup(&active);
        if !slots.is_empty() {
            self.emit(ShowcaseEvent::ChartsDestroyed { slots });
        }
    }

    fn build_charts(&mut self, section: &SectionId) {
        if !self.charts.owns_charts(section.as_str()) {
            return;
        }
        let colors = self.theme_colors();
        let report = self.charts.build_charts_for(section, &colors);
        for (slot, reason) in &report.failed {
            self.emit(ShowcaseEvent::ChartBuildFailed {
                slot: slot.clone(),
                reason: reason.clone(),
            });
        }
        if !report.created.is_empty() {
            self.emit(ShowcaseEvent::ChartsBuilt {
                section: section.clone(),
                created: report.created.into_vec(),
            });
        }
    }

    /// Theme colors resolved from the current computed style.
    #[must_use]
    pub fn theme_colors(&self) -> ThemeColors {
        ThemeColors::resolve(&self.theme, &self.config.fallback_theme)
    }

    #[must_use]
    pub fn active_section(&self) -> &SectionId {
        self.router.active_section()
    }

    #[must_use]
    pub fn router(&self) -> &SectionRouter {
        &self.router
    }

    #[must_use]
    pub fn charts(&self) -> &ChartLifecycleManager<B> {
        &self.charts
    }

    pub fn backend_mut(&mut self) -> &mut B {
        self.charts.backend_mut()
    }

    #[must_use]
    pub fn theme(&self) -> &T {
        &self.theme
    }

    /// Mutable access for hosts that update the computed style in place;
    /// follow up with `theme_attribute_changed` or `os_color_scheme_changed`.
    pub fn theme_mut(&mut self) -> &mut T {
        &mut self.theme
    }

    #[must_use]
    pub fn tech_details(&self) -> &TechDetails {
        &self.tech_details
    }

    #[must_use]
    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.queue.now_ms()
    }

    #[must_use]
    pub fn pending_task_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_task_pending(&self, task: &DeferredTask) -> bool {
        self.queue.is_pending(task)
    }

    #[must_use]
    pub fn scroll_requests(&self) -> u64 {
        self.scroll_requests
    }

    #[must_use]
    pub fn last_card_animation(&self) -> Option<&CardAnimation> {
        self.last_animation.as_ref()
    }
}
