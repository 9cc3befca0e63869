use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{ShowcaseError, ShowcaseResult};

use super::{SectionId, SlotId};

/// Markup for one section container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionMarkup {
    pub id: SectionId,
    /// Carries the `section--active` marker class in the initial markup.
    #[serde(default)]
    pub active: bool,
    /// Chart canvases located inside this section.
    #[serde(default)]
    pub canvases: Vec<SlotId>,
    /// Number of cards that take part in the entrance animation.
    #[serde(default)]
    pub cards: usize,
}

impl SectionMarkup {
    #[must_use]
    pub fn new(id: impl Into<SectionId>) -> Self {
        Self {
            id: id.into(),
            active: false,
            canvases: Vec::new(),
            cards: 0,
        }
    }

    #[must_use]
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    #[must_use]
    pub fn with_canvas(mut self, canvas: impl Into<SlotId>) -> Self {
        self.canvases.push(canvas.into());
        self
    }

    #[must_use]
    pub fn with_cards(mut self, cards: usize) -> Self {
        self.cards = cards;
        self
    }
}

/// Markup for one tech-stack card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechCardMarkup {
    /// Value of the card's `data-tech` attribute.
    pub tech: String,
    /// Whether a `{tech}-details` panel exists for the card.
    #[serde(default = "default_has_details")]
    pub has_details: bool,
}

fn default_has_details() -> bool {
    true
}

/// Static page markup consumed at load time.
///
/// Sections are kept in document order; navigation items follow the order of
/// the nav bar, which drives keyboard cycling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLayout {
    pub sections: Vec<SectionMarkup>,
    /// Target section of each nav item (`data-section`), in nav-bar order.
    pub nav_items: Vec<SectionId>,
    #[serde(default)]
    pub tech_cards: Vec<TechCardMarkup>,
}

impl PageLayout {
    /// The SRE project showcase page.
    #[must_use]
    pub fn sre_showcase() -> Self {
        let sections = vec![
            SectionMarkup::new("overview").active().with_cards(4),
            SectionMarkup::new("architecture").with_cards(3),
            SectionMarkup::new("tech-stack").with_cards(6),
            SectionMarkup::new("monitoring")
                .with_canvas("burnRateChart")
                .with_canvas("errorBudgetChart")
                .with_cards(4),
            SectionMarkup::new("chaos").with_canvas("chaosChart").with_cards(6),
            SectionMarkup::new("practices").with_cards(4),
            SectionMarkup::new("results").with_canvas("resultsChart").with_cards(4),
        ];
        let nav_items = sections.iter().map(|section| section.id.clone()).collect();
        let tech_cards = ["kubernetes", "prometheus", "grafana", "terraform", "istio", "argocd"]
            .into_iter()
            .map(|tech| TechCardMarkup {
                tech: tech.to_owned(),
                has_details: true,
            })
            .collect();

        Self {
            sections,
            nav_items,
            tech_cards,
        }
    }

    pub fn from_json_str(input: &str) -> ShowcaseResult<Self> {
        let layout: Self = serde_json::from_str(input).map_err(|e| {
            ShowcaseError::InvalidLayout(format!("failed to parse layout json: {e}"))
        })?;
        layout.validate()?;
        Ok(layout)
    }

    /// Checks the markup contract: unique ids, exactly one active section and
    /// a one-to-one mapping between nav items and sections.
    pub fn validate(&self) -> ShowcaseResult<()> {
        if self.sections.is_empty() {
            return Err(ShowcaseError::InvalidLayout(
                "layout must contain at least one section".to_owned(),
            ));
        }

        let mut section_ids = IndexSet::with_capacity(self.sections.len());
        for section in &self.sections {
            if section.id.as_str().is_empty() {
                return Err(ShowcaseError::InvalidLayout(
                    "section id must not be empty".to_owned(),
                ));
            }
            if !section_ids.insert(&section.id) {
                return Err(ShowcaseError::InvalidLayout(format!(
                    "duplicate section id `{}`",
                    section.id
                )));
            }
        }

        let active = self.sections.iter().filter(|s| s.active).count();
        if active != 1 {
            return Err(ShowcaseError::InvalidLayout(format!(
                "exactly one section must be marked active, found {active}"
            )));
        }

        let mut canvas_ids = IndexSet::new();
        for canvas in self.sections.iter().flat_map(|s| &s.canvases) {
            if canvas.as_str().is_empty() {
                return Err(ShowcaseError::InvalidLayout(
                    "canvas id must not be empty".to_owned(),
                ));
            }
            if !canvas_ids.insert(canvas) {
                return Err(ShowcaseError::InvalidLayout(format!(
                    "duplicate canvas id `{canvas}`"
                )));
            }
        }

        let mut nav_targets = IndexSet::with_capacity(self.nav_items.len());
        for target in &self.nav_items {
            if !section_ids.contains(target) {
                return Err(ShowcaseError::InvalidLayout(format!(
                    "nav item targets unknown section `{target}`"
                )));
            }
            if !nav_targets.insert(target) {
                return Err(ShowcaseError::InvalidLayout(format!(
                    "more than one nav item targets section `{target}`"
                )));
            }
        }
        if nav_targets.len() != section_ids.len() {
            return Err(ShowcaseError::InvalidLayout(
                "every section needs exactly one nav item".to_owned(),
            ));
        }

        let mut techs = IndexSet::with_capacity(self.tech_cards.len());
        for card in &self.tech_cards {
            if !techs.insert(card.tech.as_str()) {
                return Err(ShowcaseError::InvalidLayout(format!(
                    "duplicate tech card `{}`",
                    card.tech
                )));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn initially_active(&self) -> Option<&SectionId> {
        self.sections.iter().find(|s| s.active).map(|s| &s.id)
    }

    #[must_use]
    pub fn section(&self, id: &str) -> Option<&SectionMarkup> {
        self.sections.iter().find(|s| s.id.as_str() == id)
    }
}
