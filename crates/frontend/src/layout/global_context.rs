use super::panels::{PanelLayout, PanelSide, PanelTransition, SHOW_TRANSITION_MS};
use super::responsive::{viewport_width, zone_geometry, LayoutMode, Zone, ZoneGeometry};
use crate::shared::storage::LocalStorage;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

/// Document whose evidence is shown in the right panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidenceTarget {
    pub document_id: Uuid,
    pub name: String,
}

/// Page-wide state shared by the layout zones, the header and the shortcuts.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub panels: RwSignal<PanelLayout>,
    pub left_transition: RwSignal<PanelTransition>,
    pub right_transition: RwSignal<PanelTransition>,
    pub viewport_width: RwSignal<f64>,
    pub mobile_breakpoint: f64,
    pub evidence: RwSignal<Option<EvidenceTarget>>,
    pub settings_open: RwSignal<bool>,
    /// Bumped after every successful settings save
    pub settings_revision: RwSignal<u32>,
}

impl AppGlobalContext {
    /// Reads persisted panel flags; hidden panels start hidden without animation.
    pub fn new(mobile_breakpoint: f64) -> Self {
        let panels = PanelLayout::load(&LocalStorage);
        log::debug!(
            "panels restored: left_hidden={}, right_hidden={}",
            panels.left_hidden,
            panels.right_hidden
        );
        Self {
            panels: RwSignal::new(panels),
            left_transition: RwSignal::new(PanelTransition::None),
            right_transition: RwSignal::new(PanelTransition::None),
            viewport_width: RwSignal::new(viewport_width().unwrap_or(f64::MAX)),
            mobile_breakpoint,
            evidence: RwSignal::new(None),
            settings_open: RwSignal::new(false),
            settings_revision: RwSignal::new(0),
        }
    }

    /// Re-evaluate the layout mode on every resize, no debouncing
    pub fn init_viewport_tracking(&self) {
        let width = self.viewport_width;
        let _ = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(w) = viewport_width() {
                width.set(w);
            }
        });
    }

    pub fn layout_mode(&self) -> LayoutMode {
        LayoutMode::for_viewport(self.viewport_width.get(), self.mobile_breakpoint)
    }

    pub fn geometry(&self, zone: Zone) -> ZoneGeometry {
        zone_geometry(self.layout_mode(), self.panels.get(), zone)
    }

    /// Stacked mode drops both the hidden and the transition classes
    pub fn side_panel_class(&self, side: PanelSide) -> String {
        let mut class = format!("{}-panel", side.as_str());
        if self.layout_mode() == LayoutMode::Stacked {
            return class;
        }
        if self.is_hidden(side) {
            class.push_str(" hidden");
        }
        let transition = self.transition(side).get().class();
        if !transition.is_empty() {
            class.push(' ');
            class.push_str(transition);
        }
        class
    }

    pub fn transition(&self, side: PanelSide) -> RwSignal<PanelTransition> {
        match side {
            PanelSide::Left => self.left_transition,
            PanelSide::Right => self.right_transition,
        }
    }

    pub fn is_hidden(&self, side: PanelSide) -> bool {
        self.panels.with(|p| p.is_hidden(side))
    }

    pub fn hide_panel(&self, side: PanelSide) {
        log::debug!("hide {} panel", side.as_str());
        self.panels.update(|p| p.hide(side, &LocalStorage));
        self.transition(side).set(PanelTransition::Hiding);
    }

    pub fn show_panel(&self, side: PanelSide) {
        log::debug!("show {} panel", side.as_str());
        self.panels.update(|p| p.show(side, &LocalStorage));
        let transition = self.transition(side);
        transition.set(PanelTransition::Showing);
        spawn_local(async move {
            TimeoutFuture::new(SHOW_TRANSITION_MS).await;
            // a hide issued meanwhile owns the class now
            if transition.get_untracked() == PanelTransition::Showing {
                transition.set(PanelTransition::None);
            }
        });
    }

    pub fn toggle_panel(&self, side: PanelSide) {
        if self.panels.with_untracked(|p| p.is_hidden(side)) {
            self.show_panel(side);
        } else {
            self.hide_panel(side);
        }
    }

    /// Reveal whichever side panels are hidden
    pub fn show_all_panels(&self) {
        for side in [PanelSide::Left, PanelSide::Right] {
            if self.panels.with_untracked(|p| p.is_hidden(side)) {
                self.show_panel(side);
            }
        }
    }

    pub fn open_settings(&self) {
        self.settings_open.set(true);
    }

    pub fn close_settings(&self) {
        self.settings_open.set(false);
    }

    pub fn settings_saved(&self) {
        self.settings_revision.update(|r| *r = r.wrapping_add(1));
    }

    pub fn focus_document(&self, document_id: Uuid, name: String) {
        self.evidence.set(Some(EvidenceTarget { document_id, name }));
    }

    pub fn clear_evidence_for(&self, document_id: Uuid) {
        if self
            .evidence
            .with_untracked(|e| e.as_ref().map(|t| t.document_id) == Some(document_id))
        {
            self.evidence.set(None);
        }
    }
}

pub fn use_global_context() -> AppGlobalContext {
    leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
