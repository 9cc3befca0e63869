use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::core::{PageLayout, SectionId, SlotId};
use crate::error::{ShowcaseError, ShowcaseResult};
use crate::render::{ChartBackend, ChartConfig, ChartHandle, ChartKind};

use super::ThemeColors;

#[derive(Debug, Clone)]
struct LiveChart {
    handle: ChartHandle,
    /// Configuration as last handed to the backend (theme colors applied).
    config: ChartConfig,
}

/// A canvas that may host one chart.
#[derive(Debug, Clone)]
pub struct ChartSlot {
    owner: SectionId,
    config: ChartConfig,
    live: Option<LiveChart>,
}

impl ChartSlot {
    #[must_use]
    pub fn owner(&self) -> &SectionId {
        &self.owner
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.config.kind
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    #[must_use]
    pub fn handle(&self) -> Option<ChartHandle> {
        self.live.as_ref().map(|live| live.handle)
    }
}

/// Outcome of one `build_charts_for` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub created: SmallVec<[SlotId; 4]>,
    pub already_live: SmallVec<[SlotId; 4]>,
    pub failed: SmallVec<[(SlotId, String); 2]>,
}

impl BuildReport {
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.created.is_empty() && self.failed.is_empty()
    }
}

/// Owns the slot → live chart side table and the charting backend.
///
/// Charts are created lazily when their section is shown and torn down by
/// `cleanup` once it is hidden. Every operation is idempotent.
pub struct ChartLifecycleManager<B: ChartBackend> {
    backend: B,
    slots: IndexMap<SlotId, ChartSlot>,
}

impl<B: ChartBackend> ChartLifecycleManager<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            slots: IndexMap::new(),
        }
    }

    /// Registers every canvas of `layout` with its literal configuration.
    pub fn from_layout(
        backend: B,
        layout: &PageLayout,
        catalog: &IndexMap<SlotId, ChartConfig>,
    ) -> ShowcaseResult<Self> {
        let mut manager = Self::new(backend);
        for section in &layout.sections {
            for canvas in &section.canvases {
                let config = catalog
                    .get(canvas)
                    .ok_or_else(|| ShowcaseError::MissingChartConfig(canvas.to_string()))?;
                manager.register_slot(canvas.clone(), section.id.clone(), config.clone())?;
            }
        }
        for unused in catalog.keys().filter(|slot| !manager.slots.contains_key(*slot)) {
            debug!(slot = %unused, "chart configuration has no canvas in layout");
        }
        Ok(manager)
    }

    pub fn register_slot(
        &mut self,
        slot: SlotId,
        owner: SectionId,
        config: ChartConfig,
    ) -> ShowcaseResult<()> {
        if self.slots.contains_key(&slot) {
            return Err(ShowcaseError::DuplicateSlot(slot.to_string()));
        }
        self.slots.insert(
            slot,
            ChartSlot {
                owner,
                config,
                live: None,
            },
        );
        Ok(())
    }

    /// Creates the missing charts of `section`. Live slots are left alone.
    ///
    /// A failing slot is logged and stays empty so the next activation
    /// retries it; sibling slots are still built.
    pub fn build_charts_for(&mut self, section: &SectionId, theme: &ThemeColors) -> BuildReport {
        let mut report = BuildReport::default();
        for (slot_id, slot) in self.slots.iter_mut().filter(|(_, s)| &s.owner == section) {
            if slot.live.is_some() {
                report.already_live.push(slot_id.clone());
                continue;
            }

            let mut config = slot.config.clone();
            config.apply_label_colors(&theme.text, &theme.text_secondary);
            match self.backend.create(slot_id, &config) {
                Ok(handle) => {
                    debug!(slot = %slot_id, handle = handle.0, "chart created");
                    slot.live = Some(LiveChart { handle, config });
                    report.created.push(slot_id.clone());
                }
                Err(err) => {
                    warn!(slot = %slot_id, section = %section, error = %err, "chart initialization failed");
                    report.failed.push((slot_id.clone(), err.to_string()));
                }
            }
        }
        report
    }

    /// Destroys every live chart owned by a section other than `active`.
    pub fn cleanup(&mut self, active: &SectionId) -> Vec<SlotId> {
        let mut destroyed = Vec::new();
        for (slot_id, slot) in self.slots.iter_mut().filter(|(_, s)| &s.owner != active) {
            if let Some(live) = slot.live.take() {
                self.backend.destroy(live.handle);
                destroyed.push(slot_id.clone());
            }
        }
        if !destroyed.is_empty() {
            info!(count = destroyed.len(), active = %active, "destroyed hidden charts");
        }
        destroyed
    }

    /// Rewrites label colors of every live chart and asks for a redraw.
    ///
    /// Returns how many charts accepted the update. Liveness never changes.
    pub fn refresh_colors(&mut self, theme: &ThemeColors) -> usize {
        let mut updated = 0;
        for (slot_id, slot) in &mut self.slots {
            let Some(live) = slot.live.as_mut() else {
                continue;
            };
            let mut config = live.config.clone();
            config.apply_label_colors(&theme.text, &theme.text_secondary);
            match self.backend.update(live.handle, &config) {
                Ok(()) => {
                    live.config = config;
                    updated += 1;
                }
                Err(err) => {
                    warn!(slot = %slot_id, error = %err, "chart color refresh failed");
                }
            }
        }
        updated
    }

    #[must_use]
    pub fn owns_charts(&self, section: &str) -> bool {
        self.slots.values().any(|slot| slot.owner.as_str() == section)
    }

    #[must_use]
    pub fn slot(&self, slot: &str) -> Option<&ChartSlot> {
        self.slots.get(slot)
    }

    pub fn slots(&self) -> impl Iterator<Item = (&SlotId, &ChartSlot)> {
        self.slots.iter()
    }

    #[must_use]
    pub fn is_live(&self, slot: &str) -> bool {
        self.slots.get(slot).is_some_and(ChartSlot::is_live)
    }

    #[must_use]
    pub fn live_slots(&self) -> Vec<SlotId> {
        self.slots
            .iter()
            .filter(|(_, slot)| slot.is_live())
            .map(|(id, _)| id.clone())
            .collect()
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.slots.values().filter(|slot| slot.is_live()).count()
    }

    /// Configuration the live chart on `slot` currently renders with.
    #[must_use]
    pub fn instance_config(&self, slot: &str) -> Option<&ChartConfig> {
        self.slots
            .get(slot)
            .and_then(|slot| slot.live.as_ref())
            .map(|live| &live.config)
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }
}
