//! Reference substitution.
//!
//! Before an arithmetic formula is parsed, every address-shaped token
//! (`[A-Z][0-9]+`, matched anywhere in the text) is replaced by the
//! referenced cell's current value:
//!
//! - numeric values become numeric literals (`A1` -> `10`, negatives as `(-5)`)
//! - empty or absent cells become `0`
//! - anything else becomes a quoted string literal (`A1` -> `"hello"`)

use regex::Regex;
use std::sync::OnceLock;

use super::address::Address;
use super::cell::Value;
use super::store::CellStore;
use crate::error::Result;

fn address_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Z][0-9]+").expect("address token regex must compile"))
}

/// Replace address tokens in `expression` with literals for their values.
pub fn substitute_references(expression: &str, store: &CellStore) -> Result<String> {
    let re = address_token_re();
    let mut out = String::with_capacity(expression.len());
    let mut last = 0;

    for token in re.find_iter(expression) {
        let address = Address::parse(token.as_str())?;
        out.push_str(&expression[last..token.start()]);
        out.push_str(&literal_for(&store.value(&address)));
        last = token.end();
    }
    out.push_str(&expression[last..]);

    if last > 0 {
        log::trace!("substituted {:?} -> {:?}", expression, out);
    }
    Ok(out)
}

fn literal_for(value: &Value) -> String {
    if value.is_empty() {
        return "0".to_string();
    }
    match value.as_number() {
        Some(n) if n < 0.0 => format!("({})", n),
        Some(n) => n.to_string(),
        None => quote(&value.to_string()),
    }
}

fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}
