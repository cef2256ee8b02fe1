use crate::layout::global_context::use_global_context;
use crate::layout::panels::PanelSide;
use crate::layout::responsive::Zone;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_global_context();
    let geometry = move || ctx.geometry(Zone::Left);

    view! {
        <aside
            data-zone="left"
            class=move || ctx.side_panel_class(PanelSide::Left)
            style=move || geometry().style()
        >
            <div class="panel__content" style:display=move || if geometry().hidden { "none" } else { "block" }>
                {children()}
            </div>
        </aside>
    }
}
