use std::fs;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cmd_prefix: String
}

impl Default for Config {
    fn default() -> Self {
        Config { cmd_prefix: "!".to_string() }
    }
}

impl Config {
    /// Reads config.json if present; a missing file falls back to defaults,
    /// a malformed one is fatal.
    pub fn load() -> Self {
        match fs::read_to_string("config.json") {
            Ok(raw) => serde_json::from_str(&raw).expect("config.json is malformed"),
            Err(_) => Config::default()
        }
    }
}
