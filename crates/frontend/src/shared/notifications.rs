//! Transient status notifications.
//!
//! At most one notification is on screen. A new one replaces the current one;
//! each notification owns its own dismissal timer, and a timer only acts if
//! its notification is still the current one.

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Duration of the slide-out before the element is removed
pub const SLIDE_OUT_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn modifier(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Severity::Info => "#2563eb",
            Severity::Success => "#16a34a",
            Severity::Error => "#dc2626",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub leaving: bool,
}

/// The single notification slot
#[derive(Clone, Debug, Default)]
pub struct NotificationSlot {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationSlot {
    /// Replace whatever is shown; returns the id of the new notification
    pub fn push(&mut self, message: String, severity: Severity) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Notification {
            id,
            message,
            severity,
            leaving: false,
        });
        id
    }

    /// Start the slide-out. False when `id` was already replaced.
    pub fn begin_leave(&mut self, id: u64) -> bool {
        match self.current.as_mut() {
            Some(n) if n.id == id => {
                n.leaving = true;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> bool {
        if self.current.as_ref().map(|n| n.id) == Some(id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[derive(Clone, Copy)]
pub struct Notifier {
    slot: RwSignal<NotificationSlot>,
    display_ms: u32,
}

impl Notifier {
    pub fn new(display_ms: u32) -> Self {
        Self {
            slot: RwSignal::new(NotificationSlot::default()),
            display_ms,
        }
    }

    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        log::debug!("notify [{}]: {}", severity.modifier(), message);
        let Some(id) = self.slot.try_update(|slot| slot.push(message, severity)) else {
            return;
        };

        let slot = self.slot;
        let display_ms = self.display_ms;
        spawn_local(async move {
            TimeoutFuture::new(display_ms).await;
            if slot.try_update(|s| s.begin_leave(id)).unwrap_or(false) {
                TimeoutFuture::new(SLIDE_OUT_MS).await;
                slot.update(|s| {
                    s.remove(id);
                });
            }
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(message, Severity::Info);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, Severity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, Severity::Error);
    }

    fn dismiss(&self, id: u64) {
        self.slot.update(|s| {
            s.remove(id);
        });
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier context not found")
}

/// Renders the current notification, top-right
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifier = use_notifier();

    move || {
        notifier.slot.with(|slot| slot.current().cloned()).map(|n| {
            let id = n.id;
            let style = format!(
                "position: fixed; top: 16px; right: 16px; z-index: 2000; padding: 12px 16px; \
                 border-radius: 8px; color: #fff; background: {}; display: flex; gap: 12px; \
                 align-items: center; box-shadow: 0 4px 12px rgba(0,0,0,0.15);",
                n.severity.color()
            );
            view! {
                <div
                    class=format!(
                        "notification notification--{}{}",
                        n.severity.modifier(),
                        if n.leaving { " notification--leaving" } else { "" },
                    )
                    role="status"
                    style=style
                >
                    <span>{n.message}</span>
                    <button
                        class="notification__close"
                        style="background: none; border: none; color: inherit; cursor: pointer;"
                        on:click=move |_| notifier.dismiss(id)
                    >
                        {icon("x")}
                    </button>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_notification_replaces_first() {
        let mut slot = NotificationSlot::default();
        let first = slot.push("Saving".into(), Severity::Info);
        let second = slot.push("Saved".into(), Severity::Success);

        let current = slot.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.message, "Saved");
        assert_ne!(first, second);
    }

    #[test]
    fn test_stale_timer_does_not_touch_successor() {
        let mut slot = NotificationSlot::default();
        let first = slot.push("a".into(), Severity::Info);
        let second = slot.push("b".into(), Severity::Error);

        assert!(!slot.begin_leave(first));
        assert!(!slot.remove(first));
        assert_eq!(slot.current().map(|n| n.leaving), Some(false));

        assert!(slot.begin_leave(second));
        assert_eq!(slot.current().map(|n| n.leaving), Some(true));
        assert!(slot.remove(second));
        assert!(slot.current().is_none());
    }
}
