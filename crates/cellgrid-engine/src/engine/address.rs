//! Cell address parsing and formatting.
//!
//! Provides bidirectional conversion between spreadsheet-style addresses
//! (e.g., "A1", "Z100") and zero-indexed row/column coordinates. Only the
//! fixed 26x100 grid is addressable: one column letter, rows 1 through 100.
//!
//! # Examples
//!
//! ```
//! use cellgrid_engine::engine::Address;
//!
//! let addr: Address = "B3".parse().unwrap();
//! assert_eq!(addr.col, 1);
//! assert_eq!(addr.row, 2);
//! assert_eq!(addr.to_string(), "B3");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EngineError, Result};

/// Number of addressable columns (A through Z).
pub const COLS: usize = 26;
/// Number of addressable rows (1 through 100).
pub const ROWS: usize = 100;

/// A cell position (0-indexed) inside the fixed grid.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Address {
    // Field order gives the derived `Ord` row-major ordering.
    pub row: usize,
    pub col: usize,
}

impl Address {
    /// Build an address from coordinates, rejecting anything outside the grid.
    pub fn new(col: usize, row: usize) -> Result<Address> {
        if col >= COLS || row >= ROWS {
            return Err(EngineError::Address(format!(
                "column {} / row {} is outside the {}x{} grid",
                col, row, COLS, ROWS
            )));
        }
        Ok(Address { row, col })
    }

    /// Parse canonical address text such as `A1` or `Z100`.
    ///
    /// The first character is the column letter; the rest must be a positive
    /// row number within the grid.
    pub fn parse(text: &str) -> Result<Address> {
        let invalid = || EngineError::Address(text.to_string());

        let mut chars = text.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        if !letter.is_ascii_uppercase() {
            return Err(invalid());
        }
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let row = digits
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(invalid)?;
        let col = (letter as u8 - b'A') as usize;

        Address::new(col, row).map_err(|_| invalid())
    }

    /// Column index to its letter (0 -> A, 25 -> Z).
    pub fn col_to_letter(col: usize) -> char {
        debug_assert!(col < COLS);
        (b'A' + col as u8) as char
    }
}

impl std::str::FromStr for Address {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Address::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Address::col_to_letter(self.col), self.row + 1)
    }
}

/// Convert address text to an [`Address`].
pub fn to_address(text: &str) -> Result<Address> {
    Address::parse(text)
}

/// Convert an [`Address`] back to its canonical text.
pub fn to_text(address: &Address) -> String {
    address.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_corners() {
        let a1 = Address::parse("A1").unwrap();
        assert_eq!((a1.col, a1.row), (0, 0));

        let z100 = Address::parse("Z100").unwrap();
        assert_eq!((z100.col, z100.row), (25, 99));
    }

    #[test]
    fn test_parse_rejects_out_of_grid() {
        assert!(Address::parse("A0").is_err());
        assert!(Address::parse("A101").is_err());
        assert!(Address::parse("AA1").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "1", "A", "a1", "A-1", "A+1", "A 1", " A1", "1A", "A1.5"] {
            assert!(
                matches!(Address::parse(bad), Err(EngineError::Address(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_round_trip_whole_grid() {
        for row in 0..ROWS {
            for col in 0..COLS {
                let addr = Address::new(col, row).unwrap();
                let text = to_text(&addr);
                assert_eq!(to_address(&text).unwrap(), addr);
                assert_eq!(to_text(&to_address(&text).unwrap()), text);
            }
        }
    }

    #[test]
    fn test_leading_zero_row_is_not_canonical() {
        // "A01" names A1 but does not round-trip to the same text.
        let addr = Address::parse("A01").unwrap();
        assert_eq!(addr.to_string(), "A1");
    }

    #[test]
    fn test_ordering_is_row_major() {
        let b1 = Address::parse("B1").unwrap();
        let a2 = Address::parse("A2").unwrap();
        assert!(b1 < a2);
    }
}
