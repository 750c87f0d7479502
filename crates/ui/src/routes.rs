use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};
use portal_core::model::FlowRoute;

use crate::context::AppContext;
use crate::views::{DashboardView, Header, StepView, Toaster, WelcomeView, use_toast_queue_provider};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/", WelcomeView)] Welcome {},
        #[route("/step/:step_id", StepView)] Step { step_id: u32 },
        #[route("/dashboard", DashboardView)] Dashboard {},
}

impl From<FlowRoute> for Route {
    fn from(route: FlowRoute) -> Self {
        match route {
            FlowRoute::Entry => Route::Welcome {},
            FlowRoute::Step(id) => Route::Step {
                step_id: id.value(),
            },
            FlowRoute::Dashboard => Route::Dashboard {},
        }
    }
}

#[component]
fn Shell() -> Element {
    let ctx = use_context::<AppContext>();
    let branding = ctx.branding();
    use_toast_queue_provider();

    rsx! {
        div { class: "app",
            Header { title: branding.title.clone(), subtitle: branding.subtitle.clone() }
            Outlet::<Route> {}
            Toaster {}
        }
    }
}
