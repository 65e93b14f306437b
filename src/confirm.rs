use std::sync::RwLock;

use crate::errors::ExplorerError;

/// Persistence seam for the year-confirmation flag.
///
/// The flag distinguishes "the year control still holds its default" from
/// "the user explicitly interacted with it", and is the only state that
/// outlives a single update cycle. Where it lives is the implementation's
/// concern; there is a single logical writer per session.
pub trait ConfirmationStore: Send + Sync {
    /// Load the current flag value.
    fn load(&self) -> Result<bool, ExplorerError>;
    /// Persist a new flag value.
    fn store(&self, confirmed: bool) -> Result<(), ExplorerError>;
}

/// Process-local confirmation store.
#[derive(Debug, Default)]
pub struct InMemoryConfirmationStore {
    confirmed: RwLock<bool>,
}

impl InMemoryConfirmationStore {
    /// Create a store with the flag initially cleared.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfirmationStore for InMemoryConfirmationStore {
    fn load(&self) -> Result<bool, ExplorerError> {
        self.confirmed
            .read()
            .map(|guard| *guard)
            .map_err(|_| ExplorerError::ConfirmationStore("lock poisoned".to_string()))
    }

    fn store(&self, confirmed: bool) -> Result<(), ExplorerError> {
        let mut guard = self
            .confirmed
            .write()
            .map_err(|_| ExplorerError::ConfirmationStore("lock poisoned".to_string()))?;
        *guard = confirmed;
        Ok(())
    }
}
