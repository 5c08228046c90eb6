//! cellgrid_engine - Spreadsheet formula engine.

pub mod builtins;
pub mod engine;
pub mod error;

pub use error::{EngineError, Result};

#[cfg(test)]
mod tests {
    use crate::engine::*;

    fn addr(s: &str) -> Address {
        to_address(s).unwrap()
    }

    fn seeded() -> Engine {
        let mut engine = Engine::new();
        for (name, input) in [
            ("A1", "10"),
            ("A2", "20"),
            ("A3", "30"),
            ("A4", "40"),
            ("A5", "50"),
            ("A6", "=SUM(A1:A5)"),
            ("C1", "  Hello World  "),
            ("C2", "=TRIM(C1)"),
            ("C3", "lowercase text"),
            ("C4", "=UPPER(C3)"),
        ] {
            engine.write_cell(addr(name), input);
        }
        engine
    }

    #[test]
    fn test_seeded_sheet() {
        let engine = seeded();
        let shown = |name: &str| engine.store().value(&addr(name)).to_string();
        assert_eq!(shown("A6"), "150");
        assert_eq!(shown("C2"), "Hello World");
        assert_eq!(shown("C4"), "LOWERCASE TEXT");
    }

    #[test]
    fn test_edits_flow_to_direct_dependents() {
        let mut engine = seeded();
        engine.write_cell(addr("C1"), "  bye  ");
        engine.write_cell(addr("C3"), "Mixed");
        engine.write_cell(addr("A5"), "0");
        let shown = |name: &str| engine.store().value(&addr(name)).to_string();
        assert_eq!(shown("C2"), "bye");
        assert_eq!(shown("C4"), "MIXED");
        assert_eq!(shown("A6"), "100");
    }

    #[test]
    fn test_average_with_text_in_range() {
        let mut engine = seeded();
        engine.write_cell(addr("A3"), "n/a");
        assert_eq!(engine.evaluate_formula("=AVERAGE(A1:A5)").to_string(), "24");
    }

    #[test]
    fn test_evaluate_formula_does_not_store() {
        let mut engine = Engine::new();
        assert_eq!(engine.evaluate_formula("=4/2").to_string(), "2");
        assert!(engine.store().is_empty());
    }
}
