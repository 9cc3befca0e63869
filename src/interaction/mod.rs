use serde::{Deserialize, Serialize};

/// Keys with a meaning for tab navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Enter,
    Space,
}

impl NavKey {
    /// Maps a DOM `KeyboardEvent.key` value. Returns `None` for keys the
    /// navigation does not consume.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            "Enter" => Some(Self::Enter),
            " " | "Spacebar" => Some(Self::Space),
            _ => None,
        }
    }

    /// `true` for the keys that activate the focused tab.
    #[must_use]
    pub fn is_activation(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }

    /// Resolves the tab index reached from `current` among `len` tabs.
    ///
    /// Arrows wrap around at both ends. Activation keys carry no movement and
    /// resolve to `None`, as does an empty tab list.
    #[must_use]
    pub fn target_index(self, current: usize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let current = current.min(len - 1);
        match self {
            Self::ArrowLeft => Some(if current == 0 { len - 1 } else { current - 1 }),
            Self::ArrowRight => Some(if current + 1 == len { 0 } else { current + 1 }),
            Self::Home => Some(0),
            Self::End => Some(len - 1),
            Self::Enter | Self::Space => None,
        }
    }
}
