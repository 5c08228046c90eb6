//! Cellgrid - run cell commands against an in-memory grid.

mod config;
mod logging;

use anyhow::{Context, Result};
use cellgrid_core::{COLS, Document, ROWS};
use log::LevelFilter;
use std::env;
use std::io::Read;
use std::path::PathBuf;

fn print_usage() {
    eprintln!("Usage: cellgrid [OPTIONS] [SCRIPT]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [SCRIPT]                  File of commands (default: read stdin)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --command <CMD>       Run a single command (can be repeated)");
    eprintln!("  --config <FILE>           Load settings from this TOML file");
    eprintln!("  -v, --verbose             Log debug output to stderr");
    eprintln!("  -h, --help                Print help");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  set <CELL> <input>        Write a value or =formula");
    eprintln!("  get <CELL>                Print a cell's value");
    eprintln!("  formula <CELL>            Print a cell's formula");
    eprintln!("  eval <text>               Evaluate without storing");
    eprintln!("  dump                      Print every written cell");
    eprintln!("  functions                 List built-in functions");
    eprintln!();
    eprintln!(
        "Cells run from A1 to {}{}.",
        (b'A' + (COLS - 1) as u8) as char,
        ROWS
    );
}

struct Args {
    script: Option<PathBuf>,
    commands: Vec<String>,
    config: Option<PathBuf>,
    verbose: bool,
}

fn parse_args() -> Args {
    let args: Vec<String> = env::args().collect();
    let mut parsed = Args {
        script: None,
        commands: Vec::new(),
        config: None,
        verbose: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            "-c" | "--command" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --command requires a value");
                    std::process::exit(1);
                }
                parsed.commands.push(args[i].clone());
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                }
                parsed.config = Some(PathBuf::from(&args[i]));
            }
            "-v" | "--verbose" => parsed.verbose = true,
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if parsed.script.is_none() {
                    parsed.script = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }
    parsed
}

fn run(args: Args) -> Result<()> {
    let (config, warnings) = config::load_config(args.config.as_deref());
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        config.log_level
    };
    logging::init(level);
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }

    let script = if !args.commands.is_empty() {
        args.commands.join("\n")
    } else if let Some(path) = &args.script {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?
    } else {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read commands from stdin")?;
        input
    };

    let mut doc = Document::new();
    for (i, line) in script.lines().enumerate() {
        if config.echo_commands && !line.trim().is_empty() {
            println!("> {}", line);
        }
        for out in doc.run_command(i + 1, line)? {
            println!("{}", out);
        }
    }
    log::debug!("finished with {} cell(s) written", doc.cells().len());
    Ok(())
}

fn main() {
    if let Err(e) = run(parse_args()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
