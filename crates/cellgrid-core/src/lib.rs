//! cellgrid-core - UI-agnostic document API over the formula engine.

pub mod document;
pub mod error;

pub use document::{Command, Document};
pub use error::{CoreError, Result};

pub use cellgrid_engine::engine::{Address, COLS, ROWS, Value};
