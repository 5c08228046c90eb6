use cellgrid_engine::engine::Engine;

/// UI-agnostic document state for the grid.
///
/// Owns the formula engine; every operation runs synchronously to completion.
#[derive(Debug, Default)]
pub struct Document {
    pub(super) engine: Engine,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }
}
