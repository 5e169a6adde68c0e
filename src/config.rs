use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_VERSION: u64 = 1;

/// Checked for the suggestion API key when the configured variable is unset.
pub const FALLBACK_API_KEY_ENV: &str = "GEMINI_API_KEY";

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join("taskpad")
}

fn default_model() -> String {
    "gemini-2.5-flash".into()
}

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com/v1beta".into()
}

fn default_api_key_env() -> String {
    "API_KEY".into()
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct TaskpadConfig {
    pub version: u64,
    pub data_directory: PathBuf,
    pub debug_logging: bool,
    pub model: String,
    pub api_base: String,
    pub api_key_env: String,
}

impl Default for TaskpadConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            data_directory: default_data_dir(),
            debug_logging: false,
            model: default_model(),
            api_base: default_api_base(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl TaskpadConfig {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("taskpad")
            .join("config.json")
    }

    /// Read the config at `path`. Missing or malformed files give defaults.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Resolve the suggestion API key from the environment, if any.
    pub fn api_key(&self) -> Option<String> {
        [self.api_key_env.as_str(), FALLBACK_API_KEY_ENV]
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
    }
}
