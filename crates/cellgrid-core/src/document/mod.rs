//! Document state and logic (UI-agnostic).

mod ops;
mod script;
mod state;

pub use script::Command;
pub use state::Document;
