use super::Document;
use crate::error::Result;
use cellgrid_engine::engine::{self, Address, Cell, Value};

impl Document {
    /// Write user input into a cell and recalculate cells that reference it.
    pub fn write_cell(&mut self, address: Address, input: &str) {
        self.engine.write_cell(address, input);
    }

    /// The cell's display value; empty text if the cell was never written.
    pub fn get_display_value(&self, address: &Address) -> Value {
        self.engine.store().value(address)
    }

    /// The cell's formula text, or an empty string.
    pub fn get_formula(&self, address: &Address) -> String {
        self.engine
            .store()
            .get(address)
            .map(|cell| cell.formula().to_string())
            .unwrap_or_default()
    }

    /// Evaluate formula text without storing it (bulk builtins still write
    /// their target cells).
    pub fn evaluate_formula(&mut self, text: &str) -> Value {
        self.engine.evaluate_formula(text)
    }

    pub fn to_address(&self, text: &str) -> Result<Address> {
        Ok(engine::to_address(text)?)
    }

    pub fn to_text(&self, address: &Address) -> String {
        engine::to_text(address)
    }

    /// Every written cell in row-major order.
    pub fn cells(&self) -> Vec<(Address, Cell)> {
        let store = self.engine.store();
        store
            .addresses()
            .into_iter()
            .filter_map(|address| store.get(&address).map(|cell| (address, cell)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use pretty_assertions::assert_eq;

    fn addr(doc: &Document, s: &str) -> Address {
        doc.to_address(s).unwrap()
    }

    #[test]
    fn test_absent_cell_reads_empty() {
        let doc = Document::new();
        let a1 = addr(&doc, "A1");
        assert_eq!(doc.get_display_value(&a1), Value::from(""));
        assert_eq!(doc.get_formula(&a1), "");
    }

    #[test]
    fn test_write_then_read() {
        let mut doc = Document::new();
        let a1 = addr(&doc, "A1");
        let a2 = addr(&doc, "A2");
        doc.write_cell(a1, "21");
        doc.write_cell(a2, "=A1*2");
        assert_eq!(doc.get_display_value(&a2).to_string(), "42");
        assert_eq!(doc.get_formula(&a2), "=A1*2");
        assert_eq!(doc.get_formula(&a1), "");

        doc.write_cell(a1, "1");
        assert_eq!(doc.get_display_value(&a2).to_string(), "2");
    }

    #[test]
    fn test_clearing_a_cell_keeps_it_present() {
        let mut doc = Document::new();
        let b1 = addr(&doc, "B1");
        doc.write_cell(b1, "=1+1");
        doc.write_cell(b1, "");
        assert_eq!(doc.get_display_value(&b1), Value::from(""));
        assert_eq!(doc.get_formula(&b1), "");
        assert_eq!(doc.cells().len(), 1);
    }

    #[test]
    fn test_malformed_formula_is_a_value_not_an_error() {
        let mut doc = Document::new();
        let a1 = addr(&doc, "A1");
        doc.write_cell(a1, "=SUM(");
        assert_eq!(doc.get_display_value(&a1).to_string(), "#ERROR");
        assert_eq!(doc.evaluate_formula("=SUM(").to_string(), "#ERROR");
    }

    #[test]
    fn test_address_conversion_errors() {
        let doc = Document::new();
        assert!(matches!(doc.to_address("AA1"), Err(CoreError::Engine(_))));
        let z100 = addr(&doc, "Z100");
        assert_eq!(doc.to_text(&z100), "Z100");
    }

    #[test]
    fn test_cells_listing_order() {
        let mut doc = Document::new();
        for name in ["B2", "A1", "A2"] {
            let a = addr(&doc, name);
            doc.write_cell(a, name);
        }
        let names: Vec<String> = doc.cells().iter().map(|(a, _)| a.to_string()).collect();
        assert_eq!(names, vec!["A1", "A2", "B2"]);
    }
}
