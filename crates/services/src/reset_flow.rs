use std::sync::{Arc, Mutex, PoisonError};

use chrono::Duration;
use portal_core::Clock;
use portal_core::model::{FlowRoute, Notification};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::ResetError;
use crate::progress_store::ProgressStore;

/// Side effects a confirmed reset asks the shell to perform.
///
/// The UI implements this with its toast queue and router; tests record the
/// calls.
pub trait FlowEffects {
    fn notify(&self, notification: Notification);
    fn navigate(&self, route: FlowRoute);
}

/// Proof that a reset was requested and is waiting for an answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConfirmationToken(Uuid);

impl ConfirmationToken {
    fn issue() -> Self {
        Self(Uuid::new_v4())
    }
}

/// What a confirmed reset did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResetOutcome {
    pub notification: Notification,
    pub navigated_to: FlowRoute,
}

/// Two-phase "clear progress": request, then confirm or cancel.
pub struct ResetFlow {
    store: Arc<ProgressStore>,
    clock: Clock,
    notice_ttl: Duration,
    pending: Mutex<Option<ConfirmationToken>>,
}

impl ResetFlow {
    #[must_use]
    pub fn new(store: Arc<ProgressStore>, clock: Clock, notice_ttl: Duration) -> Self {
        Self {
            store,
            clock,
            notice_ttl,
            pending: Mutex::new(None),
        }
    }

    /// Start a reset. Any earlier unanswered request is superseded.
    pub fn request_reset(&self) -> ConfirmationToken {
        let token = ConfirmationToken::issue();
        let previous = self.lock_pending().replace(token);
        if previous.is_some() {
            debug!("superseding unanswered reset request");
        }
        debug!("reset requested");
        token
    }

    #[must_use]
    pub fn pending(&self) -> Option<ConfirmationToken> {
        *self.lock_pending()
    }

    /// Clear all progress, then notify and navigate to the entry route.
    ///
    /// # Errors
    ///
    /// Returns `ResetError` if `token` is not the pending request; nothing
    /// changes in that case.
    pub fn confirm_reset(
        &self,
        token: ConfirmationToken,
        effects: &dyn FlowEffects,
    ) -> Result<ResetOutcome, ResetError> {
        self.take_pending(token)?;

        self.store.reset_progress();

        let notification = Notification::progress_cleared(self.clock.now(), self.notice_ttl);
        effects.notify(notification.clone());
        effects.navigate(FlowRoute::Entry);
        info!("reset confirmed");

        Ok(ResetOutcome {
            notification,
            navigated_to: FlowRoute::Entry,
        })
    }

    /// Drop the pending request without touching any state.
    ///
    /// # Errors
    ///
    /// Returns `ResetError` if `token` is not the pending request.
    pub fn cancel_reset(&self, token: ConfirmationToken) -> Result<(), ResetError> {
        self.take_pending(token)?;
        info!("reset cancelled");
        Ok(())
    }

    fn take_pending(&self, token: ConfirmationToken) -> Result<(), ResetError> {
        let mut pending = self.lock_pending();
        match *pending {
            None => Err(ResetError::NoPendingRequest),
            Some(current) if current != token => {
                warn!("ignoring stale reset confirmation token");
                Err(ResetError::StaleToken)
            }
            Some(_) => {
                *pending = None;
                Ok(())
            }
        }
    }

    fn lock_pending(&self) -> std::sync::MutexGuard<'_, Option<ConfirmationToken>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
