use serde::{Deserialize, Serialize};

use crate::core::SectionId;

/// Staggered entrance of the cards in one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardAnimation {
    pub section: SectionId,
    /// Start delay of each card, in document order.
    pub delays_ms: Vec<u64>,
}

impl CardAnimation {
    #[must_use]
    pub fn staggered(section: SectionId, cards: usize, stagger_ms: u64) -> Self {
        let delays_ms = (0..cards as u64)
            .map(|index| index.saturating_mul(stagger_ms))
            .collect();
        Self { section, delays_ms }
    }

    /// Time until the last card starts moving.
    #[must_use]
    pub fn span_ms(&self) -> u64 {
        self.delays_ms.last().copied().unwrap_or(0)
    }
}
