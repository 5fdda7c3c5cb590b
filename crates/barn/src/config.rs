use farmhand_types::Language;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted interface preferences.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BarnConfig {
    pub language: Language,
}

impl BarnConfig {
    /// Get the config file path (~/.farmhand/barn/settings.json)
    fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".farmhand").join("barn").join("settings.json"))
    }

    /// Load config from disk, returning default if not found
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| std::fs::read_to_string(&path).ok())
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    /// Save config to disk
    pub fn save(&self) -> Result<(), String> {
        let path =
            Self::config_path().ok_or_else(|| "Could not determine home directory".to_string())?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, contents).map_err(|e| format!("Failed to write config: {}", e))
    }
}
