use dioxus::prelude::*;
use dioxus::core::spawn_forever;
use portal_core::Clock;
use portal_core::model::Notification;
use tracing::debug;

use crate::vm::ToastVm;

/// Queue of visible toasts, shared through context.
///
/// Expiry timers run at the root scope: the component that raised a notice
/// is often unmounted by the navigation that follows it.
#[derive(Clone, Copy, PartialEq)]
pub struct ToastQueue {
    items: Signal<Vec<ToastVm>>,
    next_id: Signal<u64>,
}

impl ToastQueue {
    /// Show `notification` until it expires. Returns `None` when it has
    /// already expired.
    pub fn push(&self, notification: &Notification, clock: Clock) -> Option<u64> {
        let now = clock.now();
        if notification.is_expired(now) {
            debug!(title = notification.title(), "dropping expired notification");
            return None;
        }

        let mut next_id = self.next_id;
        let mut items = self.items;
        // Peek so callers inside effects do not subscribe to the counter.
        let id = *next_id.peek();
        *next_id.write() += 1;
        items.write().push(ToastVm::from_notification(id, notification));

        let delay = notification.remaining(now).to_std().unwrap_or_default();
        let queue = *self;
        spawn_forever(async move {
            tokio::time::sleep(delay).await;
            queue.dismiss(id);
        });
        Some(id)
    }

    pub fn dismiss(&self, id: u64) {
        let mut items = self.items;
        items.write().retain(|toast| toast.id != id);
    }

    #[must_use]
    pub fn items(&self) -> Vec<ToastVm> {
        self.items.read().clone()
    }
}

/// Create the queue for this subtree.
pub fn use_toast_queue_provider() -> ToastQueue {
    use_context_provider(|| ToastQueue {
        items: Signal::new(Vec::new()),
        next_id: Signal::new(0),
    })
}

#[component]
pub fn Toaster() -> Element {
    let queue = use_context::<ToastQueue>();
    let toasts = queue.items();

    rsx! {
        div { class: "toaster",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: "toast",
                    onclick: move |_| queue.dismiss(toast.id),
                    p { class: "toast-title", "{toast.title}" }
                    p { class: "toast-description", "{toast.description}" }
                }
            }
        }
    }
}
