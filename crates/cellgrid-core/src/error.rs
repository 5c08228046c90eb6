//! Error types for Cellgrid core.

use cellgrid_engine::EngineError;
use thiserror::Error;

/// Errors surfaced to the document's callers.
///
/// Formula failures never show up here; they become `#ERROR` cell values.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Command error at line {line}: {message}")]
    Command { line: usize, message: String },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
