//! TopHeader component - application top bar.
//!
//! Contains:
//! - Toggle buttons for the left and right panels
//! - Application title and the current model
//! - Settings button

use crate::domain::a001_llm_model::ui::current::CurrentLlmBadge;
use crate::layout::global_context::use_global_context;
use crate::layout::panels::{toggle_glyph, PanelSide};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapse/reveal button for one side panel
#[component]
fn PanelToggle(side: PanelSide) -> impl IntoView {
    let ctx = use_global_context();
    let glyph = move || toggle_glyph(side, ctx.is_hidden(side));

    view! {
        <button
            class=format!("top-header__icon-btn top-header__toggle--{}", side.as_str())
            on:click=move |_| ctx.toggle_panel(side)
            title=move || glyph().tooltip
            aria-label=move || glyph().tooltip
        >
            {move || icon(glyph().icon)}
        </button>
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="top-header" style="display: flex; align-items: center; justify-content: space-between; padding: 8px 12px;">
            <div class="top-header__brand" style="display: flex; align-items: center; gap: 8px;">
                <PanelToggle side=PanelSide::Left />
                <span class="top-header__title" style="font-weight: bold;">"Document Assistant"</span>
                <CurrentLlmBadge />
            </div>

            <div class="top-header__actions" style="display: flex; align-items: center; gap: 8px;">
                <button
                    class="top-header__icon-btn"
                    title="Upload settings"
                    on:click=move |_| ctx.open_settings()
                >
                    {icon("settings")}
                </button>
                <PanelToggle side=PanelSide::Right />
            </div>
        </div>
    }
}
