//! Side panel visibility bookkeeping.
//!
//! [`PanelLayout`] is the whole state: two flags. Hidden panels are mirrored
//! into the key-value store as the literal `"true"`; a shown panel has no key.

use crate::shared::storage::KeyValueStore;

pub const LEFT_PANEL_KEY: &str = "leftPanelHidden";
pub const RIGHT_PANEL_KEY: &str = "rightPanelHidden";

/// Width of a visible side panel in row mode
pub const SIDE_PANEL_WIDTH: &str = "25%";

/// Show transition class is cleared after this long
pub const SHOW_TRANSITION_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelSide {
    Left,
    Right,
}

impl PanelSide {
    pub fn storage_key(&self) -> &'static str {
        match self {
            PanelSide::Left => LEFT_PANEL_KEY,
            PanelSide::Right => RIGHT_PANEL_KEY,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelSide::Left => "left",
            PanelSide::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CenterWidth {
    Full,
    ThreeQuarters,
    Half,
}

impl CenterWidth {
    pub fn as_css(&self) -> &'static str {
        match self {
            CenterWidth::Full => "100%",
            CenterWidth::ThreeQuarters => "75%",
            CenterWidth::Half => "50%",
        }
    }
}

/// Animation phase of a side panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelTransition {
    #[default]
    None,
    Hiding,
    Showing,
}

impl PanelTransition {
    pub fn class(&self) -> &'static str {
        match self {
            PanelTransition::None => "",
            PanelTransition::Hiding => "panel--hiding",
            PanelTransition::Showing => "panel--showing",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelLayout {
    pub left_hidden: bool,
    pub right_hidden: bool,
}

impl PanelLayout {
    /// Restore persisted flags; anything but `"true"` means shown
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let flag = |side: PanelSide| store.get(side.storage_key()).as_deref() == Some("true");
        Self {
            left_hidden: flag(PanelSide::Left),
            right_hidden: flag(PanelSide::Right),
        }
    }

    pub fn is_hidden(&self, side: PanelSide) -> bool {
        match side {
            PanelSide::Left => self.left_hidden,
            PanelSide::Right => self.right_hidden,
        }
    }

    fn set_hidden(&mut self, side: PanelSide, hidden: bool) {
        match side {
            PanelSide::Left => self.left_hidden = hidden,
            PanelSide::Right => self.right_hidden = hidden,
        }
    }

    pub fn hide(&mut self, side: PanelSide, store: &dyn KeyValueStore) {
        self.set_hidden(side, true);
        store.set(side.storage_key(), "true");
    }

    pub fn show(&mut self, side: PanelSide, store: &dyn KeyValueStore) {
        self.set_hidden(side, false);
        store.remove(side.storage_key());
    }

    /// Flip one panel; returns the new hidden flag
    pub fn toggle(&mut self, side: PanelSide, store: &dyn KeyValueStore) -> bool {
        if self.is_hidden(side) {
            self.show(side, store);
            false
        } else {
            self.hide(side, store);
            true
        }
    }

    pub fn hidden_count(&self) -> usize {
        usize::from(self.left_hidden) + usize::from(self.right_hidden)
    }

    pub fn center_width(&self) -> CenterWidth {
        match self.hidden_count() {
            2 => CenterWidth::Full,
            1 => CenterWidth::ThreeQuarters,
            _ => CenterWidth::Half,
        }
    }
}

/// Icon and tooltip of a panel's toggle button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleGlyph {
    pub icon: &'static str,
    pub tooltip: &'static str,
}

/// A hidden panel offers a "reveal" arrow pointing back into the page
pub fn toggle_glyph(side: PanelSide, hidden: bool) -> ToggleGlyph {
    match (side, hidden) {
        (PanelSide::Left, true) => ToggleGlyph {
            icon: "chevron-right",
            tooltip: "Show left panel",
        },
        (PanelSide::Left, false) => ToggleGlyph {
            icon: "chevron-left",
            tooltip: "Hide left panel",
        },
        (PanelSide::Right, true) => ToggleGlyph {
            icon: "chevron-left",
            tooltip: "Show right panel",
        },
        (PanelSide::Right, false) => ToggleGlyph {
            icon: "chevron-right",
            tooltip: "Hide right panel",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::memory::MemoryStore;

    #[test]
    fn test_center_width_tracks_hidden_count() {
        let store = MemoryStore::default();
        let mut layout = PanelLayout::default();
        assert_eq!(layout.center_width(), CenterWidth::Half);

        let steps = [
            (PanelSide::Left, true),
            (PanelSide::Right, true),
            (PanelSide::Left, false),
            (PanelSide::Left, true),
            (PanelSide::Right, false),
            (PanelSide::Left, false),
        ];
        for (side, hide) in steps {
            if hide {
                layout.hide(side, &store);
            } else {
                layout.show(side, &store);
            }
            let expected = match layout.hidden_count() {
                2 => "100%",
                1 => "75%",
                _ => "50%",
            };
            assert_eq!(layout.center_width().as_css(), expected);
        }
    }

    #[test]
    fn test_state_survives_reload() {
        let store = MemoryStore::default();
        let mut layout = PanelLayout::load(&store);
        layout.hide(PanelSide::Left, &store);
        assert_eq!(store.get(LEFT_PANEL_KEY).as_deref(), Some("true"));

        let reloaded = PanelLayout::load(&store);
        assert!(reloaded.left_hidden);
        assert!(!reloaded.right_hidden);

        layout.show(PanelSide::Left, &store);
        assert_eq!(store.get(LEFT_PANEL_KEY), None);
        assert_eq!(store.len(), 0);
        assert_eq!(PanelLayout::load(&store), PanelLayout::default());
    }

    #[test]
    fn test_only_literal_true_hides() {
        let store = MemoryStore::default();
        store.set(RIGHT_PANEL_KEY, "false");
        store.set(LEFT_PANEL_KEY, "1");
        assert_eq!(PanelLayout::load(&store), PanelLayout::default());
    }

    #[test]
    fn test_toggle_flips() {
        let store = MemoryStore::default();
        let mut layout = PanelLayout::default();
        assert!(layout.toggle(PanelSide::Right, &store));
        assert!(layout.right_hidden);
        assert!(!layout.toggle(PanelSide::Right, &store));
        assert!(!layout.right_hidden);
        assert_eq!(store.get(RIGHT_PANEL_KEY), None);
    }

    #[test]
    fn test_reveal_glyphs_point_inward() {
        assert_eq!(toggle_glyph(PanelSide::Left, true).icon, "chevron-right");
        assert_eq!(toggle_glyph(PanelSide::Right, true).icon, "chevron-left");
        assert_eq!(toggle_glyph(PanelSide::Left, false).icon, "chevron-left");
        assert_eq!(toggle_glyph(PanelSide::Right, false).tooltip, "Hide right panel");
    }
}
