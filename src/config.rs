//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/quill/config.yaml`

use serde::{Deserialize, Serialize};

use crate::model::DEFAULT_TAB_STOP;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Tab stop width used when expanding tabs for display
    #[serde(default = "default_tabstop")]
    pub tabstop: usize,
    /// Whether the line-number gutter is drawn
    #[serde(default)]
    pub numberline: bool,
}

fn default_tabstop() -> usize {
    DEFAULT_TAB_STOP
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tabstop: default_tabstop(),
            numberline: false,
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// A zero tab stop would make render expansion loop forever
    fn sanitized(mut self) -> Self {
        if self.tabstop == 0 {
            tracing::warn!("tabstop 0 is invalid, using {}", DEFAULT_TAB_STOP);
            self.tabstop = DEFAULT_TAB_STOP;
        }
        self
    }
}
