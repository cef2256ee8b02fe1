//! Chat - View Component

use super::model::{fetch_history, reply_source};
use super::view_model::ChatVm;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifier;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ChatPanel() -> impl IntoView {
    let vm = ChatVm::new();
    let notifier = use_notifier();
    let config = use_config();
    let source = reply_source(&config);
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest entry in view after every append
    Effect::new(move |_| {
        vm.log.track();
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    if let Some(url) = config.chat_history_url() {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_history(&url).await {
                Ok(history) => {
                    vm.log.update(|log| log.preload(history));
                    log::debug!(
                        "chat history restored, {} message(s) in the log",
                        vm.log.with_untracked(|log| log.len())
                    );
                }
                Err(e) => log::warn!("could not load chat history: {}", e),
            }
        });
    }

    let handle_send = Callback::new(move |_| {
        let input = vm.new_message.get_untracked();
        let Some(text) = vm.log.try_update(|log| log.push_user(&input)).flatten() else {
            return;
        };
        vm.new_message.set(String::new());
        vm.pending.update(|n| *n += 1);

        let reply = source.reply(text);
        wasm_bindgen_futures::spawn_local(async move {
            let answer = reply.await;
            let recorded = vm
                .log
                .try_update(|log| log.record_reply(answer))
                .unwrap_or(Ok(()));
            if let Err(e) = recorded {
                log::error!("chat reply failed: {}", e);
                notifier.error(format!("Could not get a reply: {}", e));
            }
            vm.pending.update(|n| *n = n.saturating_sub(1));
        });
    });

    view! {
        <div class="chat" style="height: 100%; display: flex; flex-direction: column; padding: 16px;">
            <div
                node_ref=messages_container_ref
                class="chat__messages"
                style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 12px; margin-bottom: 12px;"
            >
                <For
                    each=move || vm.log.with(|log| log.messages().to_vec())
                    key=|msg| msg.id
                    let:msg
                >
                    {{
                        let is_user = msg.is_user();
                        view! {
                            <div
                                class=if is_user { "chat__message chat__message--user" } else { "chat__message chat__message--assistant" }
                                data-role=msg.role.as_str().to_string()
                                style=if is_user {
                                    "align-self: flex-end; max-width: 70%; background: var(--colorBrandBackground2, #e0ecff); padding: 10px 14px; border-radius: 12px;"
                                } else {
                                    "align-self: flex-start; max-width: 70%; background: var(--colorNeutralBackground2, #f3f3f3); padding: 10px 14px; border-radius: 12px;"
                                }
                            >
                                <div style="white-space: pre-wrap;">{msg.content.clone()}</div>
                                <div style="font-size: 11px; opacity: 0.6; margin-top: 4px;">
                                    {msg.created_at.with_timezone(&chrono::Local).format("%H:%M").to_string()}
                                </div>
                            </div>
                        }
                    }}
                </For>
                {move || vm.log.with(|log| log.is_empty()).then(|| view! {
                    <p class="chat__empty" style="margin: auto; opacity: 0.6;">
                        "Ask a question about your documents."
                    </p>
                })}
                {move || (vm.pending.get() > 0).then(|| view! {
                    <div class="chat__typing" style="align-self: flex-start; opacity: 0.6; font-size: 13px;">
                        "Assistant is typing..."
                    </div>
                })}
            </div>

            <Flex style="gap: 8px; align-items: flex-end;">
                <div style="flex: 1;">
                    <Textarea
                        value=vm.new_message
                        placeholder="Ask about your documents... (Enter to send, Shift+Enter for a new line)"
                        attr:style="width: 100%; min-height: 48px; max-height: 160px; resize: vertical;"
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                handle_send.run(());
                            }
                        }
                    />
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| handle_send.run(())
                >
                    {icon("send")}
                    " Send"
                </Button>
            </Flex>
        </div>
    }
}
