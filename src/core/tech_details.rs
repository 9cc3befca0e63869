use indexmap::IndexMap;
use tracing::debug;

use super::TechCardMarkup;

/// Outcome of a tech-card click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechToggle {
    Opened,
    Closed,
    /// The card has no details panel; nothing changed.
    Ignored,
}

/// Detail panels of the tech-stack cards. At most one panel is open.
#[derive(Debug, Clone, Default)]
pub struct TechDetails {
    panels: IndexMap<String, bool>,
}

impl TechDetails {
    #[must_use]
    pub fn from_cards(cards: &[TechCardMarkup]) -> Self {
        let panels = cards
            .iter()
            .filter(|card| card.has_details)
            .map(|card| (card.tech.clone(), false))
            .collect();
        Self { panels }
    }

    pub fn toggle(&mut self, tech: &str) -> TechToggle {
        let Some(open) = self.panels.get(tech).copied() else {
            debug!(tech, "tech card has no details panel");
            return TechToggle::Ignored;
        };

        if open {
            self.panels.insert(tech.to_owned(), false);
            return TechToggle::Closed;
        }

        for state in self.panels.values_mut() {
            *state = false;
        }
        self.panels.insert(tech.to_owned(), true);
        TechToggle::Opened
    }

    #[must_use]
    pub fn open_panel(&self) -> Option<&str> {
        self.panels
            .iter()
            .find_map(|(tech, open)| open.then_some(tech.as_str()))
    }

    #[must_use]
    pub fn is_open(&self, tech: &str) -> bool {
        self.panels.get(tech).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }
}
