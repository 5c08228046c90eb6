//! Formula engine API.
//!
//! - [`Address`], [`to_address`], [`to_text`] - A1 notation ↔ row/col indices
//! - [`expand_range`] - Range text to row-major address lists
//! - [`Value`], [`Cell`], [`CellStore`] - Cell values and sparse storage
//! - [`substitute_references`], [`evaluate_expression`] - Arithmetic formulas
//! - [`Engine`] - Formula dispatch, cell writes and recalculation
//! - [`format_number`] - Number display

mod address;
mod cell;
mod eval;
mod expr;
mod format;
mod preprocess;
mod range;
mod recalc;
mod store;

pub use address::{Address, COLS, ROWS, to_address, to_text};
pub use cell::{Cell, ERROR_MARKER, Value, parse_leading_number, parse_number};
pub use eval::Engine;
pub use expr::evaluate_expression;
pub use format::{format_number, round_to_display};
pub use preprocess::substitute_references;
pub use range::{expand_range, parse_range};
pub use recalc::MAX_RECALC_DEPTH;
pub use store::{CellStore, Grid};
