use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tessera_renderer::PaletteStyle;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Palette settings file. Every field may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub name: String,
    pub style: PaletteStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: "Untitled Palette".to_string(),
            style: PaletteStyle::default(),
        }
    }
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings '{}' from {}", settings.name, path.display());
        Ok(settings)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_settings_are_default() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_style_override() {
        let settings = Settings::from_json(
            r#"{"name": "compact", "style": {"cell_size": 12.0, "selected_background": {"r": 1, "g": 2, "b": 3}}}"#,
        )
        .unwrap();
        assert_eq!(settings.name, "compact");
        assert_eq!(settings.style.cell_size, 12.0);
        assert_eq!(settings.style.selected_background.g, 2);
        assert_eq!(settings.style.preview_padding, 8.0);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = Settings::default();
        settings.style.container_width = 600.0;
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_invalid_settings() {
        assert!(matches!(
            Settings::load("/nonexistent/tessera/settings.json"),
            Err(SettingsError::Io(_))
        ));
        assert!(Settings::from_json(r#"{"style": {"cell_size": "big"}}"#).is_err());
    }
}
