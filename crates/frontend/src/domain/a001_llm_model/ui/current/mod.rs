mod model;

use crate::layout::global_context::use_global_context;
use crate::shared::config::use_config;
use contracts::domain::a001_llm_model::aggregate::LlmModel;
use leptos::prelude::*;
use model::fetch_current_llm;

/// Header text for the current model
pub fn badge_text(model: Option<&LlmModel>) -> String {
    match model {
        Some(model) => model.label(),
        None => "No model selected".to_string(),
    }
}

/// Current LLM indicator. Renders nothing unless an endpoint is configured;
/// refetched after every successful settings save.
#[component]
#[allow(non_snake_case)]
pub fn CurrentLlmBadge() -> impl IntoView {
    let ctx = use_global_context();
    let Some(url) = use_config().current_llm_url() else {
        return ().into_any();
    };
    let current = RwSignal::new(None::<LlmModel>);
    let loaded = RwSignal::new(false);

    Effect::new(move |_| {
        ctx.settings_revision.track();
        let url = url.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_current_llm(&url).await {
                Ok(model) => {
                    current.set(model);
                    loaded.set(true);
                }
                Err(e) => log::warn!("could not load current model: {}", e),
            }
        });
    });

    view! {
        <Show when=move || loaded.get()>
            <span
                class="top-header__model"
                title="Model used for document processing"
                style="font-size: 12px; padding: 2px 8px; border-radius: 10px; background: var(--colorNeutralBackground3, #eee);"
            >
                {move || current.with(|m| badge_text(m.as_ref()))}
            </span>
        </Show>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_llm_model::aggregate::LlmModelType;

    #[test]
    fn test_badge_text() {
        let model = LlmModel {
            id: "1".to_string(),
            name: "llama3".to_string(),
            model_type: LlmModelType::Local,
            model_provider: None,
        };
        assert_eq!(badge_text(Some(&model)), "llama3 (Local)");
        assert_eq!(badge_text(None), "No model selected");
    }
}
