use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use portal_core::model::StepId;
use tracing::warn;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{Breadcrumb, ViewError};
use crate::vm::{StepPageMode, StepPageVm, map_step_page};

#[component]
pub fn StepView(step_id: u32) -> Element {
    let ctx = use_context::<AppContext>();
    let store = ctx.progress_store();
    let catalog = store.catalog();
    let progress = store.progress();

    let step = StepId::new(step_id);
    let saved = store.answer(step);
    let page = map_step_page(&catalog, progress, step, saved.as_ref());
    let resume = Route::from(progress.resume_route()).to_string();

    let body = match page {
        None => rsx! {
            div { class: "step-missing",
                h2 { "Step not found" }
                p { "There is no onboarding step {step_id}." }
                Link { class: "btn btn-outline", to: resume, "Go to your current step" }
            }
        },
        Some(page) => match page.mode {
            StepPageMode::Active => rsx! {
                ActiveStep { key: "{step_id}", page }
            },
            StepPageMode::Review => rsx! {
                ReviewStep { page, resume }
            },
            StepPageMode::Locked => rsx! {
                LockedStep { page, resume }
            },
        },
    };

    rsx! {
        div { class: "flow",
            Breadcrumb {
                steps: catalog.steps().to_vec(),
                current_step: progress.current_step(),
            }
            main { class: "flow-content", {body} }
        }
    }
}

#[component]
fn StepHeading(page: StepPageVm) -> Element {
    rsx! {
        p { class: "step-position", "{page.position_label}" }
        h2 { class: "step-heading", "{page.title}" }
        p { class: "step-description", "{page.description}" }
    }
}

#[component]
fn ActiveStep(page: StepPageVm) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let store = ctx.progress_store();
    let step = page.id;

    let mut response = use_signal(|| page.saved_response.clone().unwrap_or_default());
    let error = use_signal(|| None::<ViewError>);

    let on_continue = use_callback(move |()| {
        let mut error = error;
        let text = response.read().trim().to_owned();
        if !text.is_empty() {
            if let Err(err) = store.record_answer(step, &text) {
                warn!(step = step.value(), error = %err, "answer rejected");
                error.set(Some(ViewError::from(&err)));
                return;
            }
        }
        match store.complete_step(step) {
            Ok(next) => {
                error.set(None);
                navigator.push(Route::from(next.resume_route()));
            }
            Err(err) => {
                warn!(step = step.value(), error = %err, "step completion rejected");
                error.set(Some(ViewError::from(&err)));
            }
        }
    });

    rsx! {
        section { class: "step step--active",
            StepHeading { page: page.clone() }
            label { class: "field",
                span { class: "field-label", "Your response (optional)" }
                textarea {
                    class: "input",
                    rows: "4",
                    value: "{response}",
                    oninput: move |evt| response.set(evt.value()),
                }
            }
            if let Some(err) = *error.read() {
                p { class: "field-error", "{err.message()}" }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| on_continue.call(()),
                "{page.continue_label}"
            }
        }
    }
}

#[component]
fn ReviewStep(page: StepPageVm, resume: String) -> Element {
    rsx! {
        section { class: "step step--review",
            StepHeading { page: page.clone() }
            p { class: "step-badge", "Completed" }
            match page.saved_response.clone() {
                Some(response) => rsx! {
                    blockquote { class: "step-answer", "{response}" }
                },
                None => rsx! {
                    p { class: "step-answer step-answer--empty", "No response recorded." }
                },
            }
            Link { class: "btn btn-outline", to: resume, "Back to your current step" }
        }
    }
}

#[component]
fn LockedStep(page: StepPageVm, resume: String) -> Element {
    rsx! {
        section { class: "step step--locked",
            StepHeading { page }
            p { class: "step-locked", "This step is not available yet." }
            Link { class: "btn btn-outline", to: resume, "Go to your current step" }
        }
    }
}
