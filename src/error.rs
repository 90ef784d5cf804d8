use std::io;

use thiserror::Error;

/// Errors surfaced by the persistence and terminal layers.
///
/// The simulation core has no recoverable errors by design: invalid input is
/// absorbed by policy (dropped turns, no-op ticks) rather than reported.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("records file is corrupt: {0}")]
    CorruptRecords(#[from] serde_json::Error),
}
