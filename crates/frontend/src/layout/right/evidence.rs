//! Evidence panel - excerpts of the active document
//!
//! Only the focused document's header is known client-side; excerpts come
//! from the retrieval backend once it is wired in.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn EvidencePanel() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="evidence" style="padding: 12px;">
            <h3 style="font-size: 15px; font-weight: bold; margin-bottom: 8px;">"Evidence"</h3>
            {move || match ctx.evidence.get() {
                Some(target) => view! {
                    <div class="evidence__document" data-document-id=target.document_id.to_string()>
                        <div style="display: flex; align-items: center; gap: 6px; font-weight: 500;">
                            {icon("document")}
                            <span>{target.name}</span>
                        </div>
                        <p class="evidence__empty" style="margin-top: 8px; color: var(--colorNeutralForeground3, #666);">
                            "No excerpts for this document yet."
                        </p>
                    </div>
                }.into_any(),
                None => view! {
                    <p class="evidence__hint" style="color: var(--colorNeutralForeground3, #666);">
                        "Select a document to see its source excerpts."
                    </p>
                }.into_any(),
            }}
        </div>
    }
}
