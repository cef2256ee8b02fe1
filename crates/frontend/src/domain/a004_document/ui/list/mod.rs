mod model;
pub mod state;

use crate::layout::global_context::use_global_context;
use crate::shared::components::select_all_checkbox::SelectAllCheckbox;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifier;
use leptos::prelude::*;
use model::uploader;
use state::{check_pending, create_state, FileListEntry};
use thaw::{Button, ButtonAppearance};
use uuid::Uuid;

/// Files currently picked in the input
fn picked_files(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

#[component]
#[allow(non_snake_case)]
pub fn DocumentList() -> impl IntoView {
    let state = create_state();
    let ctx = use_global_context();
    let notifier = use_notifier();
    let uploader = uploader(&use_config());
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let handle_file_selection = move |_| {
        let Some(input) = file_input_ref.get() else {
            return;
        };
        let names: Vec<String> = picked_files(&input).iter().map(|f| f.name()).collect();
        let added = state.try_update(|s| s.add_files(names)).unwrap_or(0);
        log::debug!("{} file(s) added to the list", added);
    };

    let upload_files = move |_| {
        let Some(input) = file_input_ref.get() else {
            return;
        };
        let files = picked_files(&input);
        if let Err(message) = check_pending(files.len()) {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&message);
            }
            return;
        }

        state.update(|s| s.is_uploading = true);
        let batch: Vec<String> = files.iter().map(|f| f.name()).collect();
        let upload = uploader.upload(files);
        wasm_bindgen_futures::spawn_local(async move {
            let result = upload.await;
            state.update(|s| s.mark_batch(&batch, result.is_ok()));
            match result {
                Ok(count) => {
                    log::info!("uploaded {} file(s)", count);
                    notifier.success(format!("Uploaded {} file(s).", count));
                }
                Err(e) => {
                    log::error!("upload failed: {}", e);
                    notifier.error(format!("Upload failed: {}", e));
                }
            }
            state.update(|s| s.is_uploading = false);
            if let Some(input) = file_input_ref.get_untracked() {
                input.set_value("");
            }
        });
    };

    let focus_row = move |id: Uuid| {
        if let Some(name) = state.try_update(|s| s.focus(id)).flatten() {
            ctx.focus_document(id, name);
        }
    };

    let remove_row = move |id: Uuid| {
        if state.try_update(|s| s.remove(id)).unwrap_or(false) {
            ctx.clear_evidence_for(id);
        }
    };

    view! {
        <div class="documents" style="display: flex; flex-direction: column; gap: 12px; padding: 12px;">
            <h3 style="font-size: 15px; font-weight: bold;">"Documents"</h3>

            <div class="documents__upload" style="display: flex; flex-direction: column; gap: 8px;">
                <input
                    node_ref=file_input_ref
                    type="file"
                    multiple=true
                    class="documents__file-input"
                    on:change=handle_file_selection
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || state.with(|s| s.is_uploading))
                    on_click=upload_files
                >
                    {move || if state.with(|s| s.is_uploading) {
                        view! { {icon("loader")} " Uploading..." }.into_any()
                    } else {
                        view! { {icon("upload")} " Upload" }.into_any()
                    }}
                </Button>
            </div>

            <SelectAllCheckbox
                state=Signal::derive(move || state.with(|s| s.selection_state()))
                on_change=Callback::new(move |checked: bool| state.update(|s| s.select_all(checked)))
                label="Select all"
            />

            <ul class="documents__list" style="list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 4px;">
                <For
                    each=move || state.with(|s| s.items.clone())
                    key=|entry: &FileListEntry| entry.id
                    let:entry
                >
                    {{
                        let id = entry.id;
                        let is_focused = move || state.with(|s| s.focused == Some(id));
                        let is_checked = move || {
                            state.with(|s| s.items.iter().any(|e| e.id == id && e.selected))
                        };
                        view! {
                            <li
                                class="documents__row"
                                class:active=is_focused
                                data-status=entry.status.as_str()
                                style="display: flex; align-items: center; gap: 8px; padding: 6px 8px; border-radius: 6px; cursor: pointer;"
                                on:click=move |_| focus_row(id)
                            >
                                <input
                                    type="checkbox"
                                    class="documents__checkbox"
                                    prop:checked=is_checked
                                    on:click=|ev| ev.stop_propagation()
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        state.update(|s| s.set_selected(id, checked));
                                    }
                                />
                                <span
                                    class=format!("documents__status documents__status--{}", entry.status.as_str())
                                    style=format!(
                                        "width: 8px; height: 8px; border-radius: 50%; background: {};",
                                        entry.status.color(),
                                    )
                                ></span>
                                {icon("document")}
                                <span class="documents__name" style="flex: 1;">{entry.name.clone()}</span>
                                <button
                                    class="documents__remove"
                                    title="Remove from list"
                                    style="background: none; border: none; cursor: pointer;"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        remove_row(id);
                                    }
                                >
                                    {icon("trash")}
                                </button>
                            </li>
                        }
                    }}
                </For>
            </ul>
        </div>
    }
}
