use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::keyboard::LayoutMode;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub keyboard: LayoutMode,
    /// Preferred width of each label column, in cells.
    #[serde(default = "default_label_width")]
    pub label_width: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_script: Option<PathBuf>,
    /// Load `last_script` at startup when no script is given on the command line.
    #[serde(default)]
    pub reopen_last: bool,
}

fn default_theme() -> String {
    "default".to_string()
}
fn default_label_width() -> u16 {
    24
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            keyboard: LayoutMode::default(),
            label_width: default_label_width(),
            last_script: None,
            reopen_last: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ahkmap")
            .join("config.toml")
    }

    /// Script to open at startup when none was given explicitly.
    pub fn startup_script(&self) -> Option<&Path> {
        if self.reopen_last {
            self.last_script.as_deref()
        } else {
            None
        }
    }
}
