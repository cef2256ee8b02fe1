use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Overlay dialog. Clicking the backdrop or the close button calls `on_close`.
/// Escape is handled by the global shortcut listener.
#[component]
pub fn Modal(
    /// Title of the modal
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Only a click that lands on the backdrop itself closes the dialog
    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let direct = match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        };
        if direct {
            on_close.run(());
        }
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    view! {
        <div
            class="modal-overlay"
            style="position: fixed; inset: 0; background: rgba(0,0,0,0.4); display: flex; align-items: center; justify-content: center; z-index: 1000;"
            on:click=handle_overlay_click
        >
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                style="background: var(--colorNeutralBackground1, #fff); border-radius: 8px; min-width: 420px; max-width: 90vw; padding: 20px;"
            >
                <div class="modal-header" style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;">
                    <h2 class="modal-title" style="font-size: 18px; font-weight: bold;">{title}</h2>
                    <button class="button button--icon modal__close" on:click=handle_close>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
