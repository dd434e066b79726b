//! Single-writer state container with pluggable persistence.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::{
    state::{reduce, WizardAction, WizardState},
    CoreError,
};

/// Port used by [`WizardStore`] to keep state across sessions.
pub trait StatePersistence: Send + Sync {
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<WizardState>, CoreError>;
    fn save(&self, state: &WizardState) -> Result<(), CoreError>;
}

/// Discards every write. Useful when persistence is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPersistence;

impl StatePersistence for NoopPersistence {
    fn load(&self) -> Result<Option<WizardState>, CoreError> {
        Ok(None)
    }

    fn save(&self, _state: &WizardState) -> Result<(), CoreError> {
        Ok(())
    }
}

/// In-memory persistence; clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    inner: Arc<Mutex<MemorySlot>>,
}

#[derive(Debug, Default)]
struct MemorySlot {
    state: Option<WizardState>,
    writes: usize,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: WizardState) -> Self {
        let persistence = Self::default();
        persistence.lock().state = Some(state);
        persistence
    }

    /// Last state written, if any.
    pub fn stored(&self) -> Option<WizardState> {
        self.lock().state.clone()
    }

    /// Number of successful `save` calls.
    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemorySlot> {
        // A poisoned slot still holds a consistent value; keep using it.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StatePersistence for MemoryPersistence {
    fn load(&self) -> Result<Option<WizardState>, CoreError> {
        Ok(self.lock().state.clone())
    }

    fn save(&self, state: &WizardState) -> Result<(), CoreError> {
        let mut slot = self.lock();
        slot.state = Some(state.clone());
        slot.writes += 1;
        Ok(())
    }
}

/// Holds the current [`WizardState`] and applies actions through [`reduce`].
pub struct WizardStore {
    state: WizardState,
    persistence: Box<dyn StatePersistence>,
}

impl WizardStore {
    /// Creates a store at the initial state without touching persistence.
    pub fn new(persistence: Box<dyn StatePersistence>) -> Self {
        Self {
            state: WizardState::default(),
            persistence,
        }
    }

    /// Creates a store and hydrates it from persistence. Missing or unreadable
    /// data leaves the store at its initial state.
    pub fn hydrate(persistence: Box<dyn StatePersistence>) -> Self {
        let mut store = Self::new(persistence);
        match store.persistence.load() {
            Ok(Some(saved)) => {
                store.dispatch(WizardAction::LoadState(saved));
            }
            Ok(None) => debug!("no persisted wizard state; starting fresh"),
            Err(err) => warn!(error = %err, "failed to load wizard state; using defaults"),
        }
        store
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Applies `action` and persists the result unless the action is a hydration.
    pub fn dispatch(&mut self, action: WizardAction) -> &WizardState {
        let name = action.name();
        let persists = action.persists();
        self.state = reduce(&self.state, action);
        debug!(action = name, "wizard action applied");

        if persists {
            if let Err(err) = self.persistence.save(&self.state) {
                warn!(action = name, error = %err, "failed to persist wizard state");
            }
        }
        &self.state
    }
}
