use crate::error::{ShowcaseError, ShowcaseResult};
use crate::extensions::{ShowcaseEvent, ShowcaseObserver};
use crate::render::ChartBackend;

use super::{Showcase, ThemeSource};

impl<B: ChartBackend, T: ThemeSource> Showcase<B, T> {
    /// Registers an observer under its unique id.
    ///
    /// The new observer immediately receives `ObserverAttached` describing the
    /// active section and live charts, so hosts attaching late can sync their
    /// DOM without replaying history. Other observers are not notified.
    pub fn register_observer(
        &mut self,
        mut observer: Box<dyn ShowcaseObserver>,
    ) -> ShowcaseResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(ShowcaseError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.observers.contains_key(observer_id.as_str()) {
            return Err(ShowcaseError::InvalidData(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }

        let attached = ShowcaseEvent::ObserverAttached {
            active_section: self.router.active_section().clone(),
            live_charts: self.charts.live_slots(),
        };
        observer.on_event(&attached, &self.observer_context());
        self.observers.insert(observer_id, observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        self.observers.shift_remove(observer_id).is_some()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers.contains_key(observer_id)
    }
}
