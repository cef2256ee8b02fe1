//! Row vs. stacked layout.
//!
//! Narrow viewports stack the three zones vertically and always show all of
//! them. Persisted panel flags are left alone so the row layout comes back
//! exactly as it was once the viewport widens again.

use super::panels::{PanelLayout, PanelSide, SIDE_PANEL_WIDTH};

pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Row,
    Stacked,
}

impl LayoutMode {
    /// The breakpoint itself is already stacked
    pub fn for_viewport(width: f64, breakpoint: f64) -> Self {
        if width <= breakpoint {
            LayoutMode::Stacked
        } else {
            LayoutMode::Row
        }
    }

    pub fn flex_direction(&self) -> &'static str {
        match self {
            LayoutMode::Row => "row",
            LayoutMode::Stacked => "column",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    Left,
    Center,
    Right,
}

impl Zone {
    fn side(&self) -> Option<PanelSide> {
        match self {
            Zone::Left => Some(PanelSide::Left),
            Zone::Right => Some(PanelSide::Right),
            Zone::Center => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneGeometry {
    pub width: &'static str,
    pub height: &'static str,
    pub hidden: bool,
}

impl ZoneGeometry {
    pub fn style(&self) -> String {
        let mut style = format!("width: {}; height: {};", self.width, self.height);
        if self.hidden {
            style.push_str(" overflow: hidden;");
        } else {
            style.push_str(" overflow: auto;");
        }
        style
    }
}

pub fn zone_geometry(mode: LayoutMode, layout: PanelLayout, zone: Zone) -> ZoneGeometry {
    match mode {
        LayoutMode::Stacked => ZoneGeometry {
            width: "100%",
            height: "33.33%",
            hidden: false,
        },
        LayoutMode::Row => match zone.side() {
            None => ZoneGeometry {
                width: layout.center_width().as_css(),
                height: "100%",
                hidden: false,
            },
            Some(side) => {
                let hidden = layout.is_hidden(side);
                ZoneGeometry {
                    width: if hidden { "0" } else { SIDE_PANEL_WIDTH },
                    height: "100%",
                    hidden,
                }
            }
        },
    }
}

/// Current `window.innerWidth`
pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZONES: [Zone; 3] = [Zone::Left, Zone::Center, Zone::Right];

    #[test]
    fn test_breakpoint_is_inclusive() {
        assert_eq!(LayoutMode::for_viewport(768.0, 768.0), LayoutMode::Stacked);
        assert_eq!(LayoutMode::for_viewport(769.0, 768.0), LayoutMode::Row);
        assert_eq!(LayoutMode::for_viewport(500.0, 768.0).flex_direction(), "column");
    }

    #[test]
    fn test_stacked_ignores_hidden_flags() {
        let layout = PanelLayout {
            left_hidden: true,
            right_hidden: true,
        };
        let mode = LayoutMode::for_viewport(500.0, DEFAULT_MOBILE_BREAKPOINT);
        for zone in ZONES {
            let geometry = zone_geometry(mode, layout, zone);
            assert_eq!(geometry.width, "100%");
            assert_eq!(geometry.height, "33.33%");
            assert!(!geometry.hidden);
        }
    }

    #[test]
    fn test_row_honours_persisted_state() {
        let layout = PanelLayout {
            left_hidden: true,
            right_hidden: false,
        };
        let left = zone_geometry(LayoutMode::Row, layout, Zone::Left);
        let center = zone_geometry(LayoutMode::Row, layout, Zone::Center);
        let right = zone_geometry(LayoutMode::Row, layout, Zone::Right);
        assert!(left.hidden);
        assert_eq!(left.width, "0");
        assert_eq!(center.width, "75%");
        assert_eq!(right.width, "25%");
        assert_eq!(center.style(), "width: 75%; height: 100%; overflow: auto;");
    }
}
