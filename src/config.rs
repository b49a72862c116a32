use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, ErrorKind, Result};

const CONFIG_PATH_ENV_VAR: &str = "MONTHGRID_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("monthgrid").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".monthgrid.toml"));
    }

    locations
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Print the leading and trailing days of the neighbouring months.
    pub show_adjacent: bool,
    pub selected_marker: char,
    pub today_marker: char,
    /// Print a "<Month> <Year>" title above the table.
    pub header: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            show_adjacent: true,
            selected_marker: '*',
            today_marker: '+',
            header: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub view: ViewConfig,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Config::from_str(&content).map_err(|err| {
            let msg = match err.message.as_deref() {
                Some(inner) => format!("'{}': {}", path.display(), inner),
                None => format!("'{}'", path.display()),
            };
            err.with_msg(&msg)
        })
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Loads `path` if given, otherwise the first config file found in the
/// default locations. Falls back to `Config::default()` when none exists.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        if !path.exists() {
            return Err(Error::new(
                ErrorKind::IOError(std::io::ErrorKind::NotFound.into()),
                &format!("config file '{}' does not exist", path.display()),
            ));
        }
        return Config::from_file(path);
    }

    match find_configfile_locations()
        .into_iter()
        .find(|location| location.is_file())
    {
        Some(location) => {
            log::info!("Using config file '{}'", location.display());
            Config::from_file(&location)
        }
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}
