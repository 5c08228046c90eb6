//! Recalculation after a write.
//!
//! One pass, no transitivity: every formula whose text contains the changed
//! address as a substring is re-evaluated once. `A1` therefore also matches
//! formulas mentioning `A10`..`A19`, and a cell depending on a recalculated
//! cell is not itself revisited. Cells are visited in row-major order.

use super::address::Address;
use super::eval::Engine;

/// Deepest nesting of recalculation passes (only bulk builtins nest them).
pub const MAX_RECALC_DEPTH: usize = 64;

impl Engine {
    /// Re-evaluate formulas that textually reference `address`.
    pub fn notify_changed(&mut self, address: Address) {
        if self.in_flight.len() >= MAX_RECALC_DEPTH {
            log::warn!(
                "recalculation for {} skipped: nesting limit {} reached",
                address,
                MAX_RECALC_DEPTH
            );
            return;
        }

        let needle = address.to_string();
        let dependents = self.store.formula_cells_referencing(&needle);
        if dependents.is_empty() {
            return;
        }
        log::debug!("recalculating {} cell(s) referencing {}", dependents.len(), needle);

        for (dependent, _) in dependents {
            if self.in_flight.contains(&dependent) {
                log::warn!("{} is already being evaluated; not re-entering it", dependent);
                continue;
            }
            // An earlier dependent's bulk builtin may have rewritten this cell.
            let Some(formula) = self
                .store
                .get(&dependent)
                .and_then(|cell| cell.raw_formula)
                .filter(|formula| formula.contains(&needle))
            else {
                continue;
            };

            self.in_flight.push(dependent);
            let value = self.evaluate_formula(&formula);
            self.in_flight.pop();

            // Keep a plain value the formula's own side effects wrote here.
            let unchanged = self
                .store
                .get(&dependent)
                .is_some_and(|cell| cell.raw_formula.as_deref() == Some(formula.as_str()));
            if unchanged {
                self.store.set(dependent, value, Some(formula));
            }
        }
    }
}
