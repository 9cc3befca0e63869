use indexmap::{IndexMap, IndexSet};

use crate::core::SlotId;
use crate::error::{ShowcaseError, ShowcaseResult};
use crate::render::{ChartBackend, ChartConfig, ChartHandle};

/// Headless backend used by tests and non-browser hosts.
///
/// It still validates every configuration so tests catch malformed literal
/// data before a real charting library is involved. Failures can be injected
/// per slot.
#[derive(Debug, Default)]
pub struct NullBackend {
    next_handle: u64,
    live: IndexMap<ChartHandle, (SlotId, ChartConfig)>,
    failing_slots: IndexSet<SlotId>,
    failing_updates: IndexSet<SlotId>,
    pub created_count: usize,
    pub updated_count: usize,
    pub destroyed_count: usize,
}

impl NullBackend {
    /// Makes every subsequent `create` for `slot` fail.
    pub fn fail_on(&mut self, slot: impl Into<SlotId>) {
        self.failing_slots.insert(slot.into());
    }

    /// Makes every subsequent `update` of a live chart on `slot` fail.
    pub fn fail_updates_on(&mut self, slot: impl Into<SlotId>) {
        self.failing_updates.insert(slot.into());
    }

    /// Clears create and update failures injected for `slot`.
    pub fn recover(&mut self, slot: &str) {
        self.failing_slots.shift_remove(slot);
        self.failing_updates.shift_remove(slot);
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn live_on(&self, slot: &str) -> usize {
        self.live
            .values()
            .filter(|(live_slot, _)| live_slot.as_str() == slot)
            .count()
    }

    #[must_use]
    pub fn config(&self, handle: ChartHandle) -> Option<&ChartConfig> {
        self.live.get(&handle).map(|(_, config)| config)
    }
}

impl ChartBackend for NullBackend {
    fn create(&mut self, slot: &SlotId, config: &ChartConfig) -> ShowcaseResult<ChartHandle> {
        if self.failing_slots.contains(slot) {
            return Err(ShowcaseError::ChartBackend {
                slot: slot.to_string(),
                reason: "canvas context unavailable".to_owned(),
            });
        }
        config.validate().map_err(|e| ShowcaseError::ChartBackend {
            slot: slot.to_string(),
            reason: e.to_string(),
        })?;

        self.next_handle += 1;
        let handle = ChartHandle(self.next_handle);
        self.live.insert(handle, (slot.clone(), config.clone()));
        self.created_count += 1;
        Ok(handle)
    }

    fn update(&mut self, handle: ChartHandle, config: &ChartConfig) -> ShowcaseResult<()> {
        let Some((slot, current)) = self.live.get_mut(&handle) else {
            return Err(ShowcaseError::InvalidData(format!(
                "chart handle {} is not live",
                handle.0
            )));
        };
        if self.failing_updates.contains(slot) {
            return Err(ShowcaseError::ChartBackend {
                slot: slot.to_string(),
                reason: "redraw rejected".to_owned(),
            });
        }
        config.validate().map_err(|e| ShowcaseError::ChartBackend {
            slot: slot.to_string(),
            reason: e.to_string(),
        })?;
        *current = config.clone();
        self.updated_count += 1;
        Ok(())
    }

    fn destroy(&mut self, handle: ChartHandle) {
        if self.live.shift_remove(&handle).is_some() {
            self.destroyed_count += 1;
        }
    }
}
