use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use portal_core::model::Step;
use services::{ConfirmationToken, ResetFlow};
use tracing::warn;

use crate::context::AppContext;
use crate::effects::UiFlowEffects;
use crate::views::ToastQueue;
use crate::vm::{BreadcrumbItemVm, StepIndicator, map_breadcrumb};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn Breadcrumb(steps: Vec<Step>, current_step: u32) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let toasts = use_context::<ToastQueue>();
    let reset_flow = ctx.reset_flow();

    // A request left open by an earlier render of the sidebar stays open.
    let pending = use_signal({
        let reset_flow = Arc::clone(&reset_flow);
        move || reset_flow.pending()
    });

    let effects = UiFlowEffects::new(navigator, toasts, ctx.clock());
    let on_request = build_request_reset_action(Arc::clone(&reset_flow), pending);
    let on_cancel = build_cancel_reset_action(Arc::clone(&reset_flow), pending);
    let on_confirm = build_confirm_reset_action(reset_flow, pending, effects);

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !*registered.peek() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<BreadcrumbTestHandles>() {
                handles.register(on_request, on_cancel, on_confirm);
            }
        }
    }

    let vm = map_breadcrumb(&steps, current_step);
    let show_modal = pending.read().is_some();

    rsx! {
        nav { class: "breadcrumb",
            div { class: "breadcrumb-body",
                div { class: "breadcrumb-steps",
                    h2 { class: "breadcrumb-heading", "ONBOARDING PROGRESS" }
                    ol { class: "breadcrumb-list",
                        for item in vm.items {
                            BreadcrumbItem { key: "{item.id}", item }
                        }
                    }
                }
                div { class: "breadcrumb-footer",
                    button {
                        class: "breadcrumb-reset",
                        r#type: "button",
                        onclick: move |_| on_request.call(()),
                        span { class: "breadcrumb-reset-icon", "↺" }
                        "Clear progress"
                    }
                }
            }
            if show_modal {
                ResetConfirmModal { on_cancel, on_confirm }
            }
        }
    }
}

#[component]
fn BreadcrumbItem(item: BreadcrumbItemVm) -> Element {
    let indicator = match item.indicator {
        StepIndicator::Check => rsx! {
            span { class: "step-check", "✓" }
        },
        StepIndicator::Numeral(number) => rsx! {
            span { class: "step-number", "{number}" }
        },
    };
    let separator = match item.separator_class() {
        Some(class) => rsx! {
            div { class: class }
        },
        None => rsx! {},
    };

    rsx! {
        li {
            class: item.item_class(),
            "data-status": item.status.label(),
            style: "animation-delay: {item.animation_delay_ms}ms",
            div { class: "breadcrumb-row",
                div { class: item.indicator_class(), {indicator} }
                div { class: "breadcrumb-text",
                    h3 { class: item.title_class(), "{item.title}" }
                    p { class: "breadcrumb-description", "{item.description}" }
                }
            }
            {separator}
        }
    }
}

#[component]
fn ResetConfirmModal(on_cancel: Callback<()>, on_confirm: Callback<()>) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "Clear progress?" }
                p { class: "modal-body",
                    "Are you sure you want to clear all progress and start over?"
                }
                div { class: "modal-actions",
                    button {
                        class: "btn modal-cancel",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn modal-confirm",
                        r#type: "button",
                        onclick: move |_| on_confirm.call(()),
                        "Clear progress"
                    }
                }
            }
        }
    }
}

fn build_request_reset_action(
    reset_flow: Arc<ResetFlow>,
    pending: Signal<Option<ConfirmationToken>>,
) -> Callback<()> {
    use_callback(move |()| {
        let mut pending = pending;
        pending.set(Some(reset_flow.request_reset()));
    })
}

fn build_cancel_reset_action(
    reset_flow: Arc<ResetFlow>,
    pending: Signal<Option<ConfirmationToken>>,
) -> Callback<()> {
    use_callback(move |()| {
        let mut pending = pending;
        let token = *pending.read();
        pending.set(None);
        if let Some(token) = token {
            if let Err(err) = reset_flow.cancel_reset(token) {
                warn!(error = %err, "reset cancellation rejected");
            }
        }
    })
}

fn build_confirm_reset_action(
    reset_flow: Arc<ResetFlow>,
    pending: Signal<Option<ConfirmationToken>>,
    effects: UiFlowEffects,
) -> Callback<()> {
    use_callback(move |()| {
        let mut pending = pending;
        let token = *pending.read();
        pending.set(None);
        if let Some(token) = token {
            if let Err(err) = reset_flow.confirm_reset(token, &effects) {
                warn!(error = %err, "reset confirmation rejected");
            }
        }
    })
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct BreadcrumbTestHandles {
    actions: Rc<RefCell<Option<[Callback<()>; 3]>>>,
}

#[cfg(test)]
impl BreadcrumbTestHandles {
    fn register(&self, request: Callback<()>, cancel: Callback<()>, confirm: Callback<()>) {
        *self.actions.borrow_mut() = Some([request, cancel, confirm]);
    }

    fn action(&self, index: usize) -> Callback<()> {
        (*self.actions.borrow()).expect("breadcrumb actions registered")[index]
    }

    pub(crate) fn request_reset(&self) -> Callback<()> {
        self.action(0)
    }

    pub(crate) fn cancel_reset(&self) -> Callback<()> {
        self.action(1)
    }

    pub(crate) fn confirm_reset(&self) -> Callback<()> {
        self.action(2)
    }
}
