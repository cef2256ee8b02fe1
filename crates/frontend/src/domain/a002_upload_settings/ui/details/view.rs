//! Upload Settings - View

use super::model::{fetch_settings, save_settings};
use super::view_model::{SaveFeedback, UploadSettingsVm};
use crate::layout::global_context::use_global_context;
use crate::shared::config::use_config;
use crate::shared::modal::Modal;
use crate::shared::notifications::use_notifier;
use contracts::domain::a002_upload_settings::aggregate::{
    SettingsField, CHUNK_OVERLAP_MAX, CHUNK_OVERLAP_MIN, CHUNK_SIZE_MAX, CHUNK_SIZE_MIN,
};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};
use wasm_bindgen_futures::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn UploadSettingsDialog() -> impl IntoView {
    let ctx = use_global_context();
    let notifier = use_notifier();
    let config = use_config();
    let vm = UploadSettingsVm::new();

    let model_ref = NodeRef::<leptos::html::Select>::new();
    let prompt_ref = NodeRef::<leptos::html::Textarea>::new();
    let chunk_size_ref = NodeRef::<leptos::html::Input>::new();
    let chunk_overlap_ref = NodeRef::<leptos::html::Input>::new();

    // Every open starts from defaults, then overlays whatever the server has
    let get_url = config.settings_get_url();
    Effect::new(move |_| {
        if !ctx.settings_open.get() {
            return;
        }
        let generation = vm.begin_load();
        let url = get_url.clone();
        spawn_local(async move {
            match fetch_settings(&url).await {
                Ok(patch) => {
                    if !vm.finish_load(generation, &patch) {
                        log::debug!("dropped upload settings from an earlier open");
                    }
                }
                Err(e) => log::warn!("could not load upload settings: {}", e),
            }
        });
    });

    let focus_field = move |field: SettingsField| {
        let focused = match field {
            SettingsField::Model => model_ref.get_untracked().map(|el| el.focus()),
            SettingsField::PromptText => prompt_ref.get_untracked().map(|el| el.focus()),
            SettingsField::ChunkSize => chunk_size_ref.get_untracked().map(|el| el.focus()),
            SettingsField::ChunkOverlap => chunk_overlap_ref.get_untracked().map(|el| el.focus()),
        };
        if focused.is_none() {
            log::debug!("field {} is not mounted", field.as_str());
        }
    };

    let save_url = config.settings_save_url();
    // Saves are not deduplicated; the last response to arrive wins
    let handle_save = Callback::new(move |_: ()| {
        let settings = match vm.snapshot().validate() {
            Ok(settings) => settings,
            Err(err) => {
                notifier.error(err.to_string());
                focus_field(err.field());
                return;
            }
        };

        vm.is_saving.set(true);
        let url = save_url.clone();
        spawn_local(async move {
            let outcome = save_settings(&url, &settings).await;
            if let Err(e) = &outcome {
                log::error!("saving upload settings failed: {}", e);
            }
            let feedback = SaveFeedback::from_outcome(outcome);
            notifier.notify(feedback.message, feedback.severity);
            if feedback.close_dialog {
                ctx.close_settings();
                ctx.settings_saved();
            }
            vm.is_saving.set(false);
        });
    });

    let models = StoredValue::new(config.llm_models.clone());
    let on_close = Callback::new(move |_| ctx.close_settings());

    view! {
        <Show when=move || ctx.settings_open.get()>
            <Modal
                title="Upload Settings".to_string()
                on_close=on_close
            >
                <div class="settings-form" style="display: flex; flex-direction: column; gap: 14px;">
                    <label class="settings-form__field" style="display: flex; flex-direction: column; gap: 4px;">
                        <span>"Language model"</span>
                        <select
                            node_ref=model_ref
                            name="selected_llm"
                            prop:value=move || vm.selected_llm.get()
                            on:change=move |ev| vm.selected_llm.set(event_target_value(&ev))
                        >
                            <option value="">"Select a model"</option>
                            {models.with_value(|models| {
                                models
                                    .iter()
                                    .map(|m| view! { <option value=m.id.clone()>{m.label()}</option> })
                                    .collect_view()
                            })}
                        </select>
                    </label>

                    <label class="settings-form__field" style="display: flex; flex-direction: column; gap: 4px;">
                        <span>"Prompt"</span>
                        <textarea
                            node_ref=prompt_ref
                            name="prompt_text"
                            rows="4"
                            placeholder="Instructions applied to every chunk"
                            prop:value=move || vm.prompt_text.get()
                            on:input=move |ev| vm.prompt_text.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <div style="display: flex; gap: 12px;">
                        <label class="settings-form__field" style="display: flex; flex-direction: column; gap: 4px; flex: 1;">
                            <span>{format!("Chunk size ({}-{})", CHUNK_SIZE_MIN, CHUNK_SIZE_MAX)}</span>
                            <input
                                node_ref=chunk_size_ref
                                type="number"
                                name="chunk_size"
                                min=CHUNK_SIZE_MIN.to_string()
                                max=CHUNK_SIZE_MAX.to_string()
                                prop:value=move || vm.chunk_size.get()
                                on:input=move |ev| vm.chunk_size.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="settings-form__field" style="display: flex; flex-direction: column; gap: 4px; flex: 1;">
                            <span>{format!("Chunk overlap ({}-{})", CHUNK_OVERLAP_MIN, CHUNK_OVERLAP_MAX)}</span>
                            <input
                                node_ref=chunk_overlap_ref
                                type="number"
                                name="chunk_overlap"
                                min=CHUNK_OVERLAP_MIN.to_string()
                                max=CHUNK_OVERLAP_MAX.to_string()
                                prop:value=move || vm.chunk_overlap.get()
                                on:input=move |ev| vm.chunk_overlap.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                </div>
                <div class="modal-footer" style="display: flex; justify-content: flex-end; gap: 8px; margin-top: 16px;">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| handle_save.run(())
                    >
                        {move || if vm.is_saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </Modal>
        </Show>
    }
}
