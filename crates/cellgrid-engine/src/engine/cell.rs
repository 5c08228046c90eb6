//! Cell data structures for the grid.
//!
//! - [`Value`] - What a cell displays: a number, text, or the `#ERROR` marker
//! - [`Cell`] - A display value paired with the formula that produced it

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use super::format::format_number;

/// Reserved display text for a failed evaluation.
pub const ERROR_MARKER: &str = "#ERROR";

/// A displayed cell value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Number(f64),
    Text(String),
    Error,
}

impl Value {
    pub fn empty() -> Value {
        Value::Text(String::new())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Text(s) if s.is_empty())
    }

    /// Numeric reading of the value, if it has one.
    ///
    /// Numbers are returned as-is; text counts only when the whole (trimmed)
    /// string is a finite number. Blank text and `#ERROR` are not numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(s) => parse_number(s),
            Value::Error => None,
        }
    }

    /// Numeric reading used by the aggregates: text counts when it starts
    /// with a number, so `"3 apples"` reads as 3.
    pub fn leading_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(s) => parse_leading_number(s),
            Value::Error => None,
        }
    }

    /// Aggregate coercion: anything without a leading number counts as 0.
    pub fn to_number_or_zero(&self) -> f64 {
        self.leading_number().unwrap_or(0.0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Text(s) => f.write_str(s),
            Value::Error => f.write_str(ERROR_MARKER),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

/// Parse text as a finite number, ignoring surrounding whitespace.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn leading_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
            .expect("leading number regex must compile")
    })
}

/// Parse the longest numeric prefix of text, ignoring leading whitespace.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let prefix = leading_number_re().find(text.trim_start())?;
    prefix.as_str().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// A stored cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub display_value: Value,
    /// Formula text (including the leading `=`) when the last write was a formula.
    pub raw_formula: Option<String>,
}

impl Cell {
    pub fn new(display_value: Value, raw_formula: Option<String>) -> Cell {
        Cell {
            display_value,
            raw_formula: raw_formula.filter(|f| !f.is_empty()),
        }
    }

    pub fn new_plain(text: &str) -> Cell {
        Cell::new(Value::from(text), None)
    }

    /// The formula text, or an empty string for plain cells.
    pub fn formula(&self) -> &str {
        self.raw_formula.as_deref().unwrap_or("")
    }
}
