use serde::{Deserialize, Serialize};

use crate::core::{SectionId, SlotId};

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObserverContext {
    pub now_ms: u64,
    pub active_section: SectionId,
    pub live_charts: usize,
    pub pending_tasks: usize,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShowcaseEvent {
    SectionActivated {
        previous: SectionId,
        current: SectionId,
    },
    ActivationRejected {
        requested: String,
    },
    ScrollToTopRequested,
    /// Keyboard navigation moved the active tab; focus should follow.
    FocusRequested {
        section: SectionId,
    },
    ChartsBuilt {
        section: SectionId,
        created: Vec<SlotId>,
    },
    ChartBuildFailed {
        slot: SlotId,
        reason: String,
    },
    ChartsDestroyed {
        slots: Vec<SlotId>,
    },
    ColorsRefreshed {
        updated: usize,
    },
    CardsAnimated {
        section: SectionId,
        delays_ms: Vec<u64>,
    },
    TechDetailsToggled {
        tech: String,
        open: bool,
    },
    /// Sent only to a newly registered observer so it can sync with the
    /// current page state.
    ObserverAttached {
        active_section: SectionId,
        live_charts: Vec<SlotId>,
    },
}

/// Extension hook interface for host-side reactions (DOM class toggling,
/// scrolling, analytics).
///
/// Observers see events and read context without mutating showcase state.
pub trait ShowcaseObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &ShowcaseEvent, context: &ObserverContext);
}
