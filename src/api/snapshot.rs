use serde::{Deserialize, Serialize};

use crate::core::{SectionId, SlotId};
use crate::error::{ShowcaseError, ShowcaseResult};
use crate::render::ChartBackend;

use super::{PendingTask, Showcase, ThemeColors, ThemeSource};

pub const SHOWCASE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Tab state as rendered into the nav bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItemSnapshot {
    pub target: SectionId,
    pub active: bool,
    pub tab_index: i32,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseSnapshot {
    pub now_ms: u64,
    pub active_section: SectionId,
    pub nav_items: Vec<NavItemSnapshot>,
    pub live_charts: Vec<SlotId>,
    pub open_tech_details: Option<String>,
    pub theme: ThemeColors,
    pub pending_tasks: Vec<PendingTask>,
    pub scroll_requests: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ShowcaseSnapshot,
}

impl<B: ChartBackend, T: ThemeSource> Showcase<B, T> {
    #[must_use]
    pub fn snapshot(&self) -> ShowcaseSnapshot {
        ShowcaseSnapshot {
            now_ms: self.queue.now_ms(),
            active_section: self.router.active_section().clone(),
            nav_items: self
                .router
                .nav_items()
                .iter()
                .map(|nav| NavItemSnapshot {
                    target: nav.target.clone(),
                    active: nav.active,
                    tab_index: nav.tab_index(),
                })
                .collect(),
            live_charts: self.charts.live_slots(),
            open_tech_details: self.tech_details.open_panel().map(str::to_owned),
            theme: self.theme_colors(),
            pending_tasks: self.queue.pending(),
            scroll_requests: self.scroll_requests,
        }
    }
}

impl ShowcaseSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ShowcaseResult<String> {
        let payload = ShowcaseSnapshotJsonContractV1 {
            schema_version: SHOWCASE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ShowcaseError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts both a bare snapshot and a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ShowcaseResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ShowcaseSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ShowcaseSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ShowcaseError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != SHOWCASE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ShowcaseError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
