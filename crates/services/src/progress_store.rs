use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use portal_core::Clock;
use portal_core::model::{
    ParticipantId, ParticipantIdError, ProgressError, ProgressState, SessionKey, StepAnswer,
    StepCatalog, StepId, StepStatus,
};
use storage::{InMemorySessionStorage, SessionStorage};
use tracing::{debug, info, warn};

/// Single owner of the onboarding session state.
///
/// Every read and write of session storage goes through this type. Writes
/// land in an in-memory mirror as well. The first failed storage operation
/// marks the store degraded: from then on the mirror is the only source of
/// truth, so a failed write can never be shadowed by a stale stored value.
pub struct ProgressStore {
    clock: Clock,
    catalog: Arc<StepCatalog>,
    storage: Arc<dyn SessionStorage>,
    mirror: InMemorySessionStorage,
    degraded: AtomicBool,
}

impl ProgressStore {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<StepCatalog>, storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            clock,
            catalog,
            storage,
            mirror: InMemorySessionStorage::new(),
            degraded: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<StepCatalog> {
        Arc::clone(&self.catalog)
    }

    //
    // ─── PROGRESS ──────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn progress(&self) -> ProgressState {
        let total = self.catalog.total_steps();
        let Some(raw) = self.read(&SessionKey::CurrentStep) else {
            return ProgressState::initial(total);
        };

        match raw.trim().parse::<u32>() {
            Ok(value) => {
                let state = ProgressState::from_persisted(value, total);
                if state.current_step() != value {
                    warn!(stored = value, clamped = state.current_step(), "current step out of range");
                }
                state
            }
            Err(_) => {
                warn!(stored = %raw, "ignoring malformed current step");
                ProgressState::initial(total)
            }
        }
    }

    /// Current step, defaulting to the first step.
    #[must_use]
    pub fn current_step(&self) -> u32 {
        self.progress().current_step()
    }

    #[must_use]
    pub fn status_of(&self, step: StepId) -> StepStatus {
        self.progress().status_of(step)
    }

    /// Move forward one step, saturating once every step is complete.
    pub fn advance_step(&self) -> ProgressState {
        let before = self.progress();
        let next = before.advance_clamped();
        if next != before {
            self.write_progress(next);
        }
        next
    }

    /// Complete the current step.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if `step` is unknown, is not the current step,
    /// or the flow is already complete.
    pub fn complete_step(&self, step: StepId) -> Result<ProgressState, ProgressError> {
        let next = self.progress().complete(step)?;
        self.write_progress(next);
        info!(step = step.value(), next = next.current_step(), "step completed");
        Ok(next)
    }

    /// Clear every session-scoped key and return to the first step.
    pub fn reset_progress(&self) {
        if !self.is_degraded() {
            if let Err(err) = self.storage.clear() {
                warn!(error = %err, "session storage clear failed");
                self.degrade();
            }
        }
        if let Err(err) = self.mirror.clear() {
            warn!(error = %err, "session mirror clear failed");
        }
        info!("progress reset");
    }

    //
    // ─── PARTICIPANT ───────────────────────────────────────────────────────────
    //

    /// Participant id for this session, if one was recorded and is valid.
    #[must_use]
    pub fn participant_id(&self) -> Option<ParticipantId> {
        let raw = self.read(&SessionKey::ParticipantId)?;
        match ParticipantId::new(raw) {
            Ok(id) => Some(id),
            Err(err) => {
                warn!(error = %err, "ignoring stored participant id");
                None
            }
        }
    }

    /// # Errors
    ///
    /// Returns `ParticipantIdError` if the value is not a valid id.
    pub fn set_participant_id(&self, raw: &str) -> Result<ParticipantId, ParticipantIdError> {
        let id = ParticipantId::new(raw)?;
        self.write(&SessionKey::ParticipantId, id.as_str());
        debug!(participant = %id, "participant recorded");
        Ok(id)
    }

    //
    // ─── ANSWERS ───────────────────────────────────────────────────────────────
    //

    /// Store a response for a step the participant has reached.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownStep` for steps outside the catalog and
    /// `ProgressError::NotReached` for upcoming steps.
    pub fn record_answer(&self, step: StepId, response: &str) -> Result<StepAnswer, ProgressError> {
        if !self.catalog.contains(step) {
            return Err(ProgressError::UnknownStep(step));
        }
        if self.status_of(step) == StepStatus::Upcoming {
            return Err(ProgressError::NotReached(step));
        }

        let answer = StepAnswer::new(step, response, self.clock.now());
        match serde_json::to_string(&answer) {
            Ok(encoded) => self.write(&SessionKey::StepAnswer(step), &encoded),
            Err(err) => warn!(step = step.value(), error = %err, "failed to encode answer"),
        }
        Ok(answer)
    }

    #[must_use]
    pub fn answer(&self, step: StepId) -> Option<StepAnswer> {
        let raw = self.read(&SessionKey::StepAnswer(step))?;
        match serde_json::from_str::<StepAnswer>(&raw) {
            Ok(answer) if answer.step_id == step => Some(answer),
            Ok(_) => {
                warn!(step = step.value(), "stored answer belongs to another step");
                None
            }
            Err(err) => {
                warn!(step = step.value(), error = %err, "ignoring malformed answer");
                None
            }
        }
    }

    //
    // ─── STORAGE ACCESS ────────────────────────────────────────────────────────
    //

    fn write_progress(&self, state: ProgressState) {
        self.write(&SessionKey::CurrentStep, &state.current_step().to_string());
    }

    /// Whether reads are served from the in-memory mirror only.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::Acquire)
    }

    fn read(&self, key: &SessionKey) -> Option<String> {
        if self.is_degraded() {
            return self.mirror.get_item(key).ok().flatten();
        }
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(%key, error = %err, "session storage read failed");
                self.degrade();
                self.mirror.get_item(key).ok().flatten()
            }
        }
    }

    fn write(&self, key: &SessionKey, value: &str) {
        if let Err(err) = self.mirror.set_item(key, value) {
            warn!(%key, error = %err, "session mirror write failed");
        }
        if self.is_degraded() {
            return;
        }
        if let Err(err) = self.storage.set_item(key, value) {
            warn!(%key, error = %err, "session storage write failed");
            self.degrade();
        }
    }

    fn degrade(&self) {
        if self.degraded.swap(true, Ordering::AcqRel) {
            return;
        }
        warn!("session storage unreliable; serving in-memory state from now on");
        self.adopt_stored_keys();
    }

    // The mirror already holds everything written through this store. Pull
    // in the flow keys it has not seen, as long as storage can still list them.
    fn adopt_stored_keys(&self) {
        let keys = match self.storage.keys() {
            Ok(keys) => keys,
            Err(err) => {
                debug!(error = %err, "stored keys unavailable");
                return;
            }
        };
        for key in keys.iter().filter_map(|raw| SessionKey::parse(raw)) {
            if matches!(self.mirror.get_item(&key), Ok(Some(_))) {
                continue;
            }
            if let Ok(Some(value)) = self.storage.get_item(&key) {
                if let Err(err) = self.mirror.set_item(&key, &value) {
                    warn!(%key, error = %err, "session mirror write failed");
                }
            }
        }
    }
}
