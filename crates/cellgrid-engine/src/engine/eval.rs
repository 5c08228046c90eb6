//! Formula evaluation entry point.
//!
//! [`Engine`] owns the cell store. A formula body is first matched against
//! the builtin table; anything else goes through reference substitution and
//! the arithmetic evaluator. Every failure becomes [`Value::Error`] here, so
//! callers only ever see a value.

use super::address::Address;
use super::cell::Value;
use super::expr::evaluate_expression;
use super::format::round_to_display;
use super::preprocess::substitute_references;
use super::store::CellStore;
use crate::builtins::match_builtin;
use crate::error::Result;

/// The formula engine: cell store plus evaluation and recalculation.
#[derive(Debug, Default)]
pub struct Engine {
    pub(super) store: CellStore,
    /// Cells whose formulas are being evaluated, innermost last.
    pub(super) in_flight: Vec<Address>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &CellStore {
        &self.store
    }

    /// Evaluate formula text without storing the result.
    ///
    /// Text without a leading `=` is returned unchanged. Failures of any
    /// kind yield [`Value::Error`].
    pub fn evaluate_formula(&mut self, text: &str) -> Value {
        match self.try_evaluate_formula(text) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("formula {:?} failed: {}", text, err);
                Value::Error
            }
        }
    }

    /// Like [`Engine::evaluate_formula`] but reports which stage failed.
    pub fn try_evaluate_formula(&mut self, text: &str) -> Result<Value> {
        let Some(expression) = text.strip_prefix('=') else {
            return Ok(Value::from(text));
        };

        if let Some(builtin) = match_builtin(expression) {
            return builtin.call(self, expression);
        }

        // Arithmetic results are stored at display precision.
        let substituted = substitute_references(expression, &self.store)?;
        Ok(match evaluate_expression(&substituted)? {
            Value::Number(n) => Value::Number(round_to_display(n)),
            other => other,
        })
    }

    /// Store user input in a cell and recalculate cells that reference it.
    ///
    /// Input starting with `=` is evaluated and kept as the cell's formula;
    /// anything else is stored verbatim as plain text.
    pub fn write_cell(&mut self, address: Address, input: &str) {
        if input.starts_with('=') {
            self.in_flight.push(address);
            let value = self.evaluate_formula(input);
            self.in_flight.pop();
            self.store.set(address, value, Some(input.to_string()));
        } else {
            self.store.set(address, Value::from(input), None);
        }
        self.notify_changed(address);
    }

    /// Plain write used by bulk builtins: clears any formula, then recalculates.
    pub(crate) fn write_plain_and_notify(&mut self, address: Address, text: String) {
        self.store.set(address, Value::Text(text), None);
        self.notify_changed(address);
    }
}
