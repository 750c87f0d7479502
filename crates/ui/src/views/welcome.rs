use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::debug;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::map_welcome;

#[component]
pub fn WelcomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let store = ctx.progress_store();

    let participant = store.participant_id();
    let vm = map_welcome(participant.as_ref(), store.progress());

    let mut draft = use_signal(|| {
        participant
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    });
    let error = use_signal(|| None::<ViewError>);

    let on_start = use_callback(move |()| {
        let mut error = error;
        let raw = draft.read().clone();
        match store.set_participant_id(&raw) {
            Ok(id) => {
                error.set(None);
                let target = store.progress().resume_route();
                debug!(participant = %id, route = %target.path(), "starting onboarding");
                navigator.push(Route::from(target));
            }
            Err(err) => error.set(Some(ViewError::from(&err))),
        }
    });

    rsx! {
        div { class: "page welcome",
            h1 { class: "welcome-heading", "Welcome to the workshop" }
            p { class: "welcome-intro", "{vm.intro}" }

            if let Some(label) = vm.progress_label {
                p { class: "welcome-progress", "{label}" }
            }

            label { class: "field",
                span { class: "field-label", "Participant ID" }
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "e.g. P-042",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
            }

            if let Some(err) = *error.read() {
                p { class: "field-error", "{err.message()}" }
            }

            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| on_start.call(()),
                "{vm.cta_label}"
            }
        }
    }
}
