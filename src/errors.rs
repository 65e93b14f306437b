use std::io;

use thiserror::Error;

/// Error type for explorer state-persistence failures.
///
/// Every resolver in this crate is a total function over in-memory data; the
/// only fallible surface is the externally persisted year-confirmation flag.
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("confirmation store failure: {0}")]
    ConfirmationStore(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}
