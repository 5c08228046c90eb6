//! Line-oriented command scripts.
//!
//! One command per line; blank lines and `#` comments are skipped:
//!
//! ```text
//! set A1 10          # write input (rest of line, verbatim)
//! get A1             # print display value
//! formula A6         # print formula text
//! eval =SUM(A1:A5)   # evaluate without storing
//! dump               # print every written cell
//! functions          # list builtins
//! ```

use super::Document;
use crate::error::{CoreError, Result};
use cellgrid_engine::builtins::BUILTINS;
use cellgrid_engine::engine::{Address, to_address};

/// A parsed script command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set { address: Address, input: String },
    Get(Address),
    Formula(Address),
    Eval(String),
    Dump,
    Functions,
}

impl Command {
    /// Parse one script line. Returns `Ok(None)` for blank and comment lines.
    pub fn parse(line: &str) -> std::result::Result<Option<Command>, String> {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();
        if line.trim().is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        let address_arg = |rest: &str| {
            let text = rest.trim();
            to_address(text).map_err(|e| e.to_string())
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "set" => {
                let rest = rest.trim_start();
                let (addr, input) = rest
                    .split_once(char::is_whitespace)
                    .unwrap_or((rest, ""));
                Command::Set {
                    address: address_arg(addr)?,
                    input: input.to_string(),
                }
            }
            "get" => Command::Get(address_arg(rest)?),
            "formula" => Command::Formula(address_arg(rest)?),
            "eval" => Command::Eval(rest.to_string()),
            "dump" => Command::Dump,
            "functions" => Command::Functions,
            other => return Err(format!("Unknown command: {}", other)),
        };
        Ok(Some(command))
    }
}

impl Document {
    /// Execute a parsed command, returning the lines it prints.
    pub fn execute(&mut self, command: Command) -> Vec<String> {
        match command {
            Command::Set { address, input } => {
                log::debug!("set {} <- {:?}", address, input);
                self.write_cell(address, &input);
                Vec::new()
            }
            Command::Get(address) => vec![self.get_display_value(&address).to_string()],
            Command::Formula(address) => vec![self.get_formula(&address)],
            Command::Eval(text) => vec![self.evaluate_formula(&text).to_string()],
            Command::Dump => self
                .cells()
                .into_iter()
                .map(|(address, cell)| match cell.raw_formula {
                    Some(formula) => format!("{}\t{}\t{}", address, cell.display_value, formula),
                    None => format!("{}\t{}", address, cell.display_value),
                })
                .collect(),
            Command::Functions => BUILTINS
                .iter()
                .map(|b| format!("{}\t{}", b.usage, b.description))
                .collect(),
        }
    }

    /// Parse and execute one script line (`line_no` is 1-indexed, for errors).
    pub fn run_command(&mut self, line_no: usize, line: &str) -> Result<Vec<String>> {
        let command = Command::parse(line).map_err(|message| CoreError::Command {
            line: line_no,
            message,
        })?;
        Ok(command.map(|c| self.execute(c)).unwrap_or_default())
    }

    /// Run every line of a script, stopping at the first bad command.
    pub fn run_script(&mut self, script: &str) -> Result<Vec<String>> {
        let mut output = Vec::new();
        for (i, line) in script.lines().enumerate() {
            output.extend(self.run_command(i + 1, line)?);
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn addr(s: &str) -> Address {
        to_address(s).unwrap()
    }

    #[test]
    fn test_parse_set_keeps_input_verbatim() {
        assert_eq!(
            Command::parse("set C1   Hello World  ").unwrap(),
            Some(Command::Set {
                address: addr("C1"),
                input: "  Hello World  ".to_string()
            })
        );
        assert_eq!(
            Command::parse("SET A1").unwrap(),
            Some(Command::Set {
                address: addr("A1"),
                input: String::new()
            })
        );
    }

    #[test]
    fn test_parse_splits_on_any_whitespace() {
        assert_eq!(
            Command::parse("set\tA1 5").unwrap(),
            Some(Command::Set {
                address: addr("A1"),
                input: "5".to_string()
            })
        );
        assert_eq!(
            Command::parse("set A2\t=A1*2").unwrap(),
            Some(Command::Set {
                address: addr("A2"),
                input: "=A1*2".to_string()
            })
        );
        assert_eq!(Command::parse("get\tA1").unwrap(), Some(Command::Get(addr("A1"))));
    }

    #[test]
    fn test_parse_skips_blank_and_comments() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   \r").unwrap(), None);
        assert_eq!(Command::parse("  # note").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("frobnicate A1").is_err());
        assert!(Command::parse("get").is_err());
        assert!(Command::parse("get A0").is_err());
        assert!(Command::parse("set AA1 5").is_err());
    }

    #[test]
    fn test_run_script_end_to_end() {
        let mut doc = Document::new();
        let out = doc
            .run_script(
                "# totals\n\
                 set A1 10\n\
                 set A2 20\n\
                 set A3 =SUM(A1:A2)\n\
                 get A3\n\
                 set A1 5\n\
                 get A3\n\
                 formula A3\n\
                 eval =A3/2\n",
            )
            .unwrap();
        assert_eq!(out, vec!["30", "25", "=SUM(A1:A2)", "12.5"]);
    }

    #[test]
    fn test_dump_lists_cells() {
        let mut doc = Document::new();
        doc.run_script("set B1 =2*3\nset A1 x\n").unwrap();
        assert_eq!(doc.run_command(1, "dump").unwrap(), vec!["A1\tx", "B1\t6\t=2*3"]);
    }

    #[test]
    fn test_functions_lists_builtins() {
        let mut doc = Document::new();
        let out = doc.run_command(1, "functions").unwrap();
        assert_eq!(out.len(), BUILTINS.len());
        assert!(out[0].starts_with("SUM(A1:A5)\t"));
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let mut doc = Document::new();
        let err = doc.run_script("set A1 1\n\nbogus\n").unwrap_err();
        match err {
            CoreError::Command { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
