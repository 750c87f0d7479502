use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::map_dashboard;

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    // Read once per render; a missing id renders empty.
    let participant = ctx.progress_store().participant_id();
    let vm = map_dashboard(participant.as_ref(), &ctx.dashboard());

    rsx! {
        div { class: "page dashboard",
            div { class: "dashboard-icon", "✓" }
            h1 { class: "dashboard-heading", "{vm.heading}" }
            p { class: "dashboard-greeting", "{vm.greeting}" }

            div { class: "card",
                h2 { class: "card-title", "{vm.next_steps_title}" }
                ul { class: "next-steps",
                    for item in vm.next_steps {
                        li { class: "next-step",
                            span { class: "next-step-icon", "✓" }
                            span { "{item}" }
                        }
                    }
                }
            }

            Link { class: "btn btn-outline", to: Route::Welcome {}.to_string(), "Return to Welcome" }
        }
    }
}
