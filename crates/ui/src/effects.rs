use dioxus_router::Navigator;
use portal_core::Clock;
use portal_core::model::{FlowRoute, Notification};
use services::FlowEffects;

use crate::routes::Route;
use crate::views::ToastQueue;

#[cfg(test)]
use dioxus::prelude::try_consume_context;
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Runs flow side effects through the router and the toast queue.
#[derive(Clone)]
pub struct UiFlowEffects {
    navigator: Navigator,
    toasts: ToastQueue,
    clock: Clock,
    #[cfg(test)]
    navigations: Option<NavigationLog>,
}

impl UiFlowEffects {
    /// Must be called while rendering.
    #[must_use]
    pub fn new(navigator: Navigator, toasts: ToastQueue, clock: Clock) -> Self {
        Self {
            navigator,
            toasts,
            clock,
            #[cfg(test)]
            navigations: try_consume_context::<NavigationLog>(),
        }
    }
}

impl FlowEffects for UiFlowEffects {
    fn notify(&self, notification: Notification) {
        self.toasts.push(&notification, self.clock);
    }

    fn navigate(&self, route: FlowRoute) {
        #[cfg(test)]
        {
            if let Some(log) = &self.navigations {
                log.record(route);
            }
        }
        // Path form, so any router whose routes parse the path can follow it.
        self.navigator.push(Route::from(route).to_string());
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct NavigationLog {
    routes: Rc<RefCell<Vec<FlowRoute>>>,
}

#[cfg(test)]
impl NavigationLog {
    pub(crate) fn record(&self, route: FlowRoute) {
        self.routes.borrow_mut().push(route);
    }

    pub(crate) fn routes(&self) -> Vec<FlowRoute> {
        self.routes.borrow().clone()
    }
}
