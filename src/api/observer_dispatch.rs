use crate::extensions::{ObserverContext, ShowcaseEvent};
use crate::render::ChartBackend;

use super::{Showcase, ThemeSource};

impl<B: ChartBackend, T: ThemeSource> Showcase<B, T> {
    pub(super) fn observer_context(&self) -> ObserverContext {
        ObserverContext {
            now_ms: self.queue.now_ms(),
            active_section: self.router.active_section().clone(),
            live_charts: self.charts.live_count(),
            pending_tasks: self.queue.len(),
        }
    }

    pub(super) fn emit(&mut self, event: ShowcaseEvent) {
        if self.observers.is_empty() {
            return;
        }
        let context = self.observer_context();
        for observer in self.observers.values_mut() {
            observer.on_event(&event, &context);
        }
    }
}
