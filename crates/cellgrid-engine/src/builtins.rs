//! Built-in spreadsheet functions and their metadata.
//!
//! Conventions:
//! - A call is recognized by its case-insensitive name immediately followed
//!   by `(`; the argument text runs to the formula's final `)`.
//! - [`BUILTINS`] is ordered: the first matching entry wins.
//! - Aggregates and text functions are pure. FIND_AND_REPLACE and
//!   REMOVE_DUPLICATES write plain values back into the store, and every such
//!   write runs a recalculation pass for its own address before returning.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::engine::{Address, Engine, Value, expand_range};
use crate::error::{EngineError, Result};

pub struct Builtin {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
    apply: fn(&mut Engine, &str) -> Result<Value>,
}

impl Builtin {
    /// Run the builtin on a formula body (the text after `=`) that starts
    /// with this builtin's name.
    pub(crate) fn call(&self, engine: &mut Engine, expression: &str) -> Result<Value> {
        let args = call_arguments(self.name, expression)?;
        (self.apply)(engine, args)
    }

    fn matches(&self, expression: &str) -> bool {
        let n = self.name.len();
        expression
            .get(..n)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(self.name))
            && expression[n..].starts_with('(')
    }
}

pub const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "SUM",
        usage: "SUM(A1:A5)",
        description: "Sum of the range; non-numeric cells count as 0",
        apply: sum,
    },
    Builtin {
        name: "AVERAGE",
        usage: "AVERAGE(A1:A5)",
        description: "Sum of the range divided by the number of cells in it",
        apply: average,
    },
    Builtin {
        name: "MAX",
        usage: "MAX(A1:A5)",
        description: "Largest value in the range; non-numeric cells count as 0",
        apply: max,
    },
    Builtin {
        name: "MIN",
        usage: "MIN(A1:A5)",
        description: "Smallest value in the range; non-numeric cells count as 0",
        apply: min,
    },
    Builtin {
        name: "COUNT",
        usage: "COUNT(A1:A5)",
        description: "Number of cells in the range starting with a number",
        apply: count,
    },
    Builtin {
        name: "TRIM",
        usage: "TRIM(A1)",
        description: "Cell text without leading and trailing whitespace",
        apply: trim,
    },
    Builtin {
        name: "UPPER",
        usage: "UPPER(A1)",
        description: "Cell text in upper case",
        apply: upper,
    },
    Builtin {
        name: "LOWER",
        usage: "LOWER(A1)",
        description: "Cell text in lower case",
        apply: lower,
    },
    Builtin {
        name: "FIND_AND_REPLACE",
        usage: "FIND_AND_REPLACE(A1:A5, \"find\", \"replace\")",
        description: "Replace every match of a pattern in the range, in place",
        apply: find_and_replace,
    },
    Builtin {
        name: "REMOVE_DUPLICATES",
        usage: "REMOVE_DUPLICATES(A1:A5)",
        description: "Keep the first copy of each value in the range and clear the rest",
        apply: remove_duplicates,
    },
];

/// First builtin whose call prefix starts `expression`.
pub fn match_builtin(expression: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|b| b.matches(expression))
}

/// Text between `NAME(` and the closing `)` that ends the formula.
fn call_arguments<'a>(name: &str, expression: &'a str) -> Result<&'a str> {
    expression[name.len() + 1..]
        .trim_end()
        .strip_suffix(')')
        .ok_or_else(|| EngineError::argument(name, "missing closing parenthesis"))
}

fn range_values(engine: &Engine, range: &str) -> Result<Vec<Value>> {
    let store = engine.store();
    Ok(expand_range(range)?
        .iter()
        .map(|addr| store.value(addr))
        .collect())
}

fn range_numbers(engine: &Engine, range: &str) -> Result<Vec<f64>> {
    Ok(range_values(engine, range)?
        .iter()
        .map(Value::to_number_or_zero)
        .collect())
}

fn sum(engine: &mut Engine, args: &str) -> Result<Value> {
    Ok(Value::Number(range_numbers(engine, args)?.iter().sum()))
}

fn average(engine: &mut Engine, args: &str) -> Result<Value> {
    let values = range_numbers(engine, args)?;
    if values.is_empty() {
        return Ok(Value::Number(0.0));
    }
    let total: f64 = values.iter().sum();
    Ok(Value::Number(total / values.len() as f64))
}

fn max(engine: &mut Engine, args: &str) -> Result<Value> {
    let values = range_numbers(engine, args)?;
    Ok(Value::Number(
        values.into_iter().reduce(f64::max).unwrap_or(0.0),
    ))
}

fn min(engine: &mut Engine, args: &str) -> Result<Value> {
    let values = range_numbers(engine, args)?;
    Ok(Value::Number(
        values.into_iter().reduce(f64::min).unwrap_or(0.0),
    ))
}

fn count(engine: &mut Engine, args: &str) -> Result<Value> {
    let numeric = range_values(engine, args)?
        .iter()
        .filter(|v| v.leading_number().is_some())
        .count();
    Ok(Value::Number(numeric as f64))
}

fn single_cell_text(engine: &Engine, args: &str) -> Result<String> {
    let address = Address::parse(args.trim())?;
    Ok(engine.store().value(&address).to_string())
}

fn trim(engine: &mut Engine, args: &str) -> Result<Value> {
    Ok(Value::Text(single_cell_text(engine, args)?.trim().to_string()))
}

fn upper(engine: &mut Engine, args: &str) -> Result<Value> {
    Ok(Value::Text(single_cell_text(engine, args)?.to_uppercase()))
}

fn lower(engine: &mut Engine, args: &str) -> Result<Value> {
    Ok(Value::Text(single_cell_text(engine, args)?.to_lowercase()))
}

/// `range, "find", "replace"` argument shape.
fn find_and_replace_args_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^\s*([^,]+?)\s*,\s*"([^"]*)"\s*,\s*"([^"]*)"\s*$"#)
            .expect("FIND_AND_REPLACE argument regex must compile")
    })
}

fn find_and_replace(engine: &mut Engine, args: &str) -> Result<Value> {
    const NAME: &str = "FIND_AND_REPLACE";

    let caps = find_and_replace_args_re()
        .captures(args)
        .ok_or_else(|| EngineError::argument(NAME, "expected (range, \"find\", \"replace\")"))?;
    let (range, find, replace) = (&caps[1], &caps[2], &caps[3]);
    if find.is_empty() {
        return Err(EngineError::argument(NAME, "search pattern is empty"));
    }
    let pattern = Regex::new(find)
        .map_err(|e| EngineError::argument(NAME, format!("bad pattern {:?}: {}", find, e)))?;

    let cells = expand_range(range)?;
    for address in &cells {
        let current = engine.store().value(address).to_string();
        let replaced = pattern.replace_all(&current, replace).into_owned();
        engine.write_plain_and_notify(*address, replaced);
    }
    log::debug!("{} rewrote {} cell(s) in {}", NAME, cells.len(), range);

    Ok(Value::Text(format!(
        "Replaced all \"{}\" with \"{}\"",
        find, replace
    )))
}

fn remove_duplicates(engine: &mut Engine, args: &str) -> Result<Value> {
    let cells = expand_range(args)?;

    let mut seen = HashSet::new();
    let distinct: Vec<String> = cells
        .iter()
        .map(|addr| engine.store().value(addr).to_string())
        .filter(|value| seen.insert(value.clone()))
        .collect();

    for (i, address) in cells.iter().enumerate() {
        let value = distinct.get(i).cloned().unwrap_or_default();
        engine.write_plain_and_notify(*address, value);
    }

    let removed = cells.len() - distinct.len();
    log::debug!("REMOVE_DUPLICATES cleared {} cell(s) in {}", removed, args.trim());
    Ok(Value::Text(format!("Removed {} duplicates", removed)))
}
