//! Range expansion.
//!
//! A range is `Start:End` (or a lone address) naming an inclusive rectangle.
//! Expansion is row-major and walks from start to end without normalizing:
//! a range whose end lies above or left of its start is empty.

use super::address::Address;
use crate::error::{EngineError, Result};

/// Parse a range like "A1:B5" into its two corners.
///
/// A lone address yields the same address as both corners.
pub fn parse_range(range: &str) -> Result<(Address, Address)> {
    let invalid = || EngineError::Range(range.to_string());

    let parts: Vec<&str> = range.trim().split(':').map(str::trim).collect();
    match parts.as_slice() {
        [single] => {
            let addr = Address::parse(single).map_err(|_| invalid())?;
            Ok((addr, addr))
        }
        [start, end] => {
            let start = Address::parse(start).map_err(|_| invalid())?;
            let end = Address::parse(end).map_err(|_| invalid())?;
            Ok((start, end))
        }
        _ => Err(invalid()),
    }
}

/// Expand range text into its addresses in row-major order.
pub fn expand_range(range: &str) -> Result<Vec<Address>> {
    let (start, end) = parse_range(range)?;

    let mut cells = Vec::new();
    for row in start.row..=end.row {
        for col in start.col..=end.col {
            cells.push(Address { row, col });
        }
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn addrs(names: &[&str]) -> Vec<Address> {
        names.iter().map(|n| Address::parse(n).unwrap()).collect()
    }

    #[test]
    fn test_expand_column() {
        assert_eq!(
            expand_range("A1:A5").unwrap(),
            addrs(&["A1", "A2", "A3", "A4", "A5"])
        );
    }

    #[test]
    fn test_expand_is_row_major() {
        assert_eq!(
            expand_range("A1:B2").unwrap(),
            addrs(&["A1", "B1", "A2", "B2"])
        );
    }

    #[test]
    fn test_single_address() {
        assert_eq!(expand_range("C7").unwrap(), addrs(&["C7"]));
        assert_eq!(expand_range(" C7 ").unwrap(), addrs(&["C7"]));
    }

    #[test]
    fn test_whitespace_around_corners() {
        assert_eq!(expand_range("A1 : A2").unwrap(), addrs(&["A1", "A2"]));
    }

    #[test]
    fn test_reversed_range_is_empty() {
        assert!(expand_range("A5:A1").unwrap().is_empty());
        assert!(expand_range("B1:A1").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_ranges() {
        for bad in ["", ":", "A1:", ":A1", "A1:B2:C3", "A1-B2", "a1:a2", "A1:A101"] {
            assert!(
                matches!(expand_range(bad), Err(EngineError::Range(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
