//! Global keyboard shortcuts.
//!
//! | keys   | action                         |
//! |--------|--------------------------------|
//! | Ctrl+1 | toggle left panel              |
//! | Ctrl+2 | show both panels               |
//! | Ctrl+3 | toggle right panel             |
//! | Escape | close settings dialog, if open |

use super::global_context::AppGlobalContext;
use super::panels::PanelSide;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    ToggleLeft,
    ShowBoth,
    ToggleRight,
    CloseDialog,
}

impl Shortcut {
    pub fn from_key(key: &str, ctrl: bool) -> Option<Self> {
        match (key, ctrl) {
            ("1", true) => Some(Shortcut::ToggleLeft),
            ("2", true) => Some(Shortcut::ShowBoth),
            ("3", true) => Some(Shortcut::ToggleRight),
            ("Escape", _) => Some(Shortcut::CloseDialog),
            _ => None,
        }
    }

    /// Panel shortcuts shadow browser tab switching
    pub fn suppresses_default(&self) -> bool {
        !matches!(self, Shortcut::CloseDialog)
    }
}

pub fn install(ctx: AppGlobalContext) {
    let _ = window_event_listener(leptos::ev::keydown, move |ev: web_sys::KeyboardEvent| {
        let Some(shortcut) = Shortcut::from_key(&ev.key(), ev.ctrl_key()) else {
            return;
        };
        if shortcut.suppresses_default() {
            ev.prevent_default();
        }
        match shortcut {
            Shortcut::ToggleLeft => ctx.toggle_panel(PanelSide::Left),
            Shortcut::ToggleRight => ctx.toggle_panel(PanelSide::Right),
            Shortcut::ShowBoth => ctx.show_all_panels(),
            Shortcut::CloseDialog => {
                if ctx.settings_open.get_untracked() {
                    ctx.close_settings();
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_shortcuts_need_ctrl() {
        assert_eq!(Shortcut::from_key("1", true), Some(Shortcut::ToggleLeft));
        assert_eq!(Shortcut::from_key("2", true), Some(Shortcut::ShowBoth));
        assert_eq!(Shortcut::from_key("3", true), Some(Shortcut::ToggleRight));
        assert_eq!(Shortcut::from_key("1", false), None);
        assert_eq!(Shortcut::from_key("4", true), None);
    }

    #[test]
    fn test_escape_and_default_handling() {
        let esc = Shortcut::from_key("Escape", false).unwrap();
        assert_eq!(esc, Shortcut::CloseDialog);
        assert!(!esc.suppresses_default());
        assert!(Shortcut::ToggleLeft.suppresses_default());
        assert!(Shortcut::ShowBoth.suppresses_default());
    }
}
