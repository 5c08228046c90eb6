//! Sparse cell storage.

use dashmap::DashMap;

use super::address::Address;
use super::cell::{Cell, Value};

/// Sparse grid storage.
pub type Grid = DashMap<Address, Cell>;

/// The ground truth for every cell value.
///
/// Writes always replace the display value and formula together; nothing
/// here triggers recalculation.
#[derive(Debug, Default)]
pub struct CellStore {
    grid: Grid,
}

impl CellStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, address: &Address) -> Option<Cell> {
        self.grid.get(address).map(|entry| entry.value().clone())
    }

    /// Display value of a cell; absent cells read as empty text.
    pub fn value(&self, address: &Address) -> Value {
        self.grid
            .get(address)
            .map(|entry| entry.display_value.clone())
            .unwrap_or_else(Value::empty)
    }

    /// Overwrite a cell. An empty or missing formula marks the cell as plain.
    pub fn set(&self, address: Address, display_value: Value, raw_formula: Option<String>) {
        self.grid
            .insert(address, Cell::new(display_value, raw_formula));
    }

    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Occupied addresses in row-major order.
    pub fn addresses(&self) -> Vec<Address> {
        let mut addresses: Vec<Address> = self.grid.iter().map(|entry| *entry.key()).collect();
        addresses.sort();
        addresses
    }

    /// Formula cells whose formula text contains `needle`, in row-major order.
    ///
    /// The match is plain substring search over the formula text.
    pub fn formula_cells_referencing(&self, needle: &str) -> Vec<(Address, String)> {
        let mut hits: Vec<(Address, String)> = self
            .grid
            .iter()
            .filter_map(|entry| {
                let formula = entry.raw_formula.as_ref()?;
                formula
                    .contains(needle)
                    .then(|| (*entry.key(), formula.clone()))
            })
            .collect();
        hits.sort_by_key(|(address, _)| *address);
        hits
    }
}
