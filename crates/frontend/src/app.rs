use crate::domain::a002_upload_settings::ui::details::UploadSettingsDialog;
use crate::domain::a003_chat_message::ui::details::ChatPanel;
use crate::domain::a004_document::ui::list::DocumentList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::right::evidence::EvidencePanel;
use crate::layout::{shortcuts, Shell};
use crate::shared::config::AppConfig;
use crate::shared::notifications::{NotificationHost, Notifier};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!(
        "starting with api_base='{}', chat={}, uploads={}",
        config.api_base,
        if config.chat_url().is_some() { "remote" } else { "canned" },
        if config.upload_url().is_some() { "remote" } else { "simulated" },
    );

    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new(config.mobile_breakpoint);
    ctx.init_viewport_tracking();
    provide_context(ctx);

    provide_context(Notifier::new(config.notification_ms));
    provide_context(config);

    shortcuts::install(ctx);

    view! {
        <Shell
            left=|| view! { <DocumentList /> }.into_any()
            center=|| view! { <ChatPanel /> }.into_any()
            right=|| view! { <EvidencePanel /> }.into_any()
        />
        <UploadSettingsDialog />
        <NotificationHost />
    }
}
