//! CLI configuration (`config.toml`).
//!
//! ```toml
//! log_level = "info"     # off | error | warn | info | debug | trace
//! echo_commands = true   # print each command before its output
//! ```
//!
//! Problems reading the file become warnings; the defaults apply.

use directories::ProjectDirs;
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 65_536;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_level: LevelFilter,
    pub echo_commands: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LevelFilter::Warn,
            echo_commands: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    log_level: Option<String>,
    echo_commands: Option<bool>,
}

/// Load the config from `explicit` or the user config dir.
/// Returns the config and any warnings to show the user.
pub fn load_config(explicit: Option<&Path>) -> (Config, Vec<String>) {
    let mut warnings = Vec::new();
    let mut config = Config::default();

    let Some(path) = explicit.map(Path::to_path_buf).or_else(user_config_path) else {
        return (config, warnings);
    };
    if !path.exists() {
        if explicit.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (config, warnings);
    }

    let file = match read_config_file(&path) {
        Ok(file) => file,
        Err(warning) => {
            warnings.push(warning);
            return (config, warnings);
        }
    };

    if let Some(level) = file.log_level {
        match level.parse::<LevelFilter>() {
            Ok(level) => config.log_level = level,
            Err(_) => warnings.push(format!(
                "Unknown log_level '{}' in {}; using '{}'",
                level,
                path.display(),
                config.log_level
            )),
        }
    }
    if let Some(echo) = file.echo_commands {
        config.echo_commands = echo;
    }

    (config, warnings)
}

fn read_config_file(path: &Path) -> Result<ConfigFile, String> {
    let meta = std::fs::metadata(path)
        .map_err(|err| format!("Failed to read metadata for {}: {}", path.display(), err))?;
    if meta.len() > MAX_CONFIG_FILE_BYTES {
        return Err(format!(
            "Refusing to read {}: file too large ({} bytes, max {})",
            path.display(),
            meta.len(),
            MAX_CONFIG_FILE_BYTES
        ));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {}", path.display(), err))?;
    toml::from_str::<ConfigFile>(&content)
        .map_err(|err| format!("Failed to parse {}: {}", path.display(), err))
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "cellgrid")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}
