use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use portal_core::time::fixed_clock;
use services::{AppServices, PortalConfig};
use storage::InMemorySessionStorage;

use crate::context::{AppContext, UiApp, build_app_context};
use crate::effects::NavigationLog;
use crate::views::breadcrumb::BreadcrumbTestHandles;
use crate::views::{
    Breadcrumb, DashboardView, StepView, Toaster, WelcomeView, use_toast_queue_provider,
};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Welcome,
    Step(u32),
    Dashboard,
    Breadcrumb(u32),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    view: ViewKind,
    breadcrumb_handles: BreadcrumbTestHandles,
    navigations: NavigationLog,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.breadcrumb_handles.clone());
    use_context_provider(|| props.navigations.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    use_toast_queue_provider();
    let view = use_context::<ViewKind>();
    let ctx = use_context::<AppContext>();
    let body = match view {
        ViewKind::Welcome => rsx! { WelcomeView {} },
        ViewKind::Step(step_id) => rsx! { StepView { step_id } },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Breadcrumb(current_step) => {
            let steps = ctx.progress_store().catalog().steps().to_vec();
            rsx! { Breadcrumb { steps, current_step } }
        }
    };
    rsx! {
        {body}
        Toaster {}
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
    pub storage: InMemorySessionStorage,
    pub breadcrumb: BreadcrumbTestHandles,
    pub navigations: NavigationLog,
}

impl ViewHarness {
    /// Invoke a registered UI action and settle the resulting renders.
    pub fn fire(&mut self, action: Callback<()>) {
        self.dom.in_runtime(|| action.call(()));
        drive_dom(&mut self.dom);
    }

    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Services over fresh in-memory storage, using the shipped configuration.
pub fn test_services() -> (AppServices, InMemorySessionStorage) {
    let storage = InMemorySessionStorage::new();
    let config = PortalConfig::builtin().expect("builtin config");
    let services = AppServices::new(&config, fixed_clock(), Arc::new(storage.clone()));
    (services, storage)
}

/// Build a harness for `view`. `prepare` seeds session state before the
/// first render.
pub fn setup_view_harness(view: ViewKind, prepare: impl FnOnce(&AppServices)) -> ViewHarness {
    let (services, storage) = test_services();
    prepare(&services);

    let breadcrumb = BreadcrumbTestHandles::default();
    let navigations = NavigationLog::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::new(services.clone()),
            view,
            breadcrumb_handles: breadcrumb.clone(),
            navigations: navigations.clone(),
        },
    );

    let mut harness = ViewHarness {
        dom,
        services,
        storage,
        breadcrumb,
        navigations,
    };
    harness.rebuild();
    harness
}
