use crate::layout::global_context::use_global_context;
use crate::layout::panels::PanelSide;
use crate::layout::responsive::Zone;
use leptos::prelude::*;

#[component]
pub fn Right(children: Children) -> impl IntoView {
    let ctx = use_global_context();
    let geometry = move || ctx.geometry(Zone::Right);

    view! {
        <aside
            data-zone="right"
            class=move || ctx.side_panel_class(PanelSide::Right)
            style=move || geometry().style()
        >
            <div class="panel__content" style:display=move || if geometry().hidden { "none" } else { "block" }>
                {children()}
            </div>
        </aside>
    }
}
