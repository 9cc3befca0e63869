use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{PageLayout, SectionId};
use crate::error::{ShowcaseError, ShowcaseResult};
use crate::interaction::NavKey;

/// One top-level content panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub active: bool,
    pub cards: usize,
}

/// Tab control selecting one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub target: SectionId,
    pub active: bool,
}

impl NavItem {
    /// Roving tab stop: only the active tab is reachable with Tab.
    #[must_use]
    pub fn tab_index(&self) -> i32 {
        if self.active { 0 } else { -1 }
    }
}

/// Result of a successful activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub previous: SectionId,
    pub current: SectionId,
}

impl Activation {
    /// `false` for a self-transition (clicking the tab that is already active).
    #[must_use]
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Keeps exactly one section and its nav item active.
#[derive(Debug, Clone)]
pub struct SectionRouter {
    sections: IndexMap<SectionId, Section>,
    nav_items: Vec<NavItem>,
    active: usize,
}

impl SectionRouter {
    pub fn from_layout(layout: &PageLayout) -> ShowcaseResult<Self> {
        layout.validate()?;

        let sections = layout
            .sections
            .iter()
            .map(|markup| {
                let section = Section {
                    id: markup.id.clone(),
                    active: markup.active,
                    cards: markup.cards,
                };
                (markup.id.clone(), section)
            })
            .collect::<IndexMap<_, _>>();
        let nav_items = layout
            .nav_items
            .iter()
            .map(|target| NavItem {
                target: target.clone(),
                active: sections.get(target).is_some_and(|s| s.active),
            })
            .collect();
        let active = sections
            .values()
            .position(|section| section.active)
            .ok_or_else(|| ShowcaseError::InvalidLayout("no active section".to_owned()))?;

        Ok(Self {
            sections,
            nav_items,
            active,
        })
    }

    /// Makes `section_id` the single active section.
    ///
    /// An unknown id leaves every flag untouched.
    pub fn activate(&mut self, section_id: &str) -> ShowcaseResult<Activation> {
        let Some(index) = self.sections.get_index_of(section_id) else {
            warn!(section = section_id, "target section not found");
            return Err(ShowcaseError::UnknownSection(section_id.to_owned()));
        };

        let previous = self.active_section().clone();
        for nav in &mut self.nav_items {
            nav.active = nav.target.as_str() == section_id;
        }
        for section in self.sections.values_mut() {
            section.active = section.id.as_str() == section_id;
        }
        self.active = index;

        let current = self.active_section().clone();
        debug!(from = %previous, to = %current, "section activated");
        Ok(Activation { previous, current })
    }

    #[must_use]
    pub fn active_section(&self) -> &SectionId {
        &self.sections[self.active].id
    }

    #[must_use]
    pub fn is_active(&self, section_id: &str) -> bool {
        self.sections.get(section_id).is_some_and(|s| s.active)
    }

    #[must_use]
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.get(section_id)
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    #[must_use]
    pub fn nav_items(&self) -> &[NavItem] {
        &self.nav_items
    }

    #[must_use]
    pub fn active_nav_index(&self) -> usize {
        self.nav_items
            .iter()
            .position(|nav| nav.active)
            .unwrap_or(0)
    }

    /// Section reached from the active tab by a movement key.
    #[must_use]
    pub fn key_target(&self, key: NavKey) -> Option<&SectionId> {
        key.target_index(self.active_nav_index(), self.nav_items.len())
            .map(|index| &self.nav_items[index].target)
    }
}
