use crate::layout::global_context::use_global_context;
use crate::layout::responsive::Zone;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <main data-zone="center" class="center-panel" style=move || ctx.geometry(Zone::Center).style()>
            {children()}
        </main>
    }
}
