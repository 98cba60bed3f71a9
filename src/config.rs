use std::fs::read_to_string;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

fn default_bind() -> String {
    "0.0.0.0:5000".into()
}

fn default_workers() -> usize {
    4
}

fn default_connection_rate() -> usize {
    256
}

#[derive(Deserialize, Debug)]
pub(crate) struct Config {
    #[serde(default = "default_bind")]
    pub(crate) bind: String,
    #[serde(default = "default_workers")]
    pub(crate) workers: usize,
    #[serde(default = "default_connection_rate")]
    pub(crate) max_connection_rate: usize,
}

/// Reads the config file at `path`. A missing file is not an error: the
/// service must come up on 0.0.0.0:5000 with nothing but the binary deployed.
pub(crate) fn load_from(path: &Path) -> Result<Config> {
    let raw = match read_to_string(path) {
        Ok(v) => v,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(e).with_context(|| format!("Couldn't read config file '{}'", path.display()))
        }
    };
    toml::from_str(&raw).with_context(|| format!("Couldn't parse config file '{}'", path.display()))
}

pub(crate) fn load() -> Result<Config> {
    let settings_file = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "settings.toml".to_owned());
    load_from(Path::new(&settings_file))
}
