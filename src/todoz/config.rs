use crate::error::{Result, TodoError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "todoz.json";
const DEFAULT_DATA_FILE: &str = "data.json";

/// Configuration for todoz, read from `todoz.json` in the working directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoConfig {
    /// Location of the todo document, relative to the working directory
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Pretty-print the document on save
    #[serde(default)]
    pub pretty: bool,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            pretty: false,
        }
    }
}

impl TodoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodoError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| TodoError::Config(format!("{}: {}", config_path.display(), e)))
    }

    /// Data file resolved against `base` when relative.
    pub fn data_path<P: AsRef<Path>>(&self, base: P) -> PathBuf {
        base.as_ref().join(&self.data_file)
    }

    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }
}
