//! Configuration handling for the pixel editor
//!
//! Settings live in `<config dir>/pixel-editor/config.toml`. A missing file is
//! created with defaults; any field left out of the file takes its default.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::core::canvas::CanvasSettings;
use crate::core::color::{Rgba, PRESET_COLORS};
use crate::core::constants::*;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Grid size at startup; snapped to the nearest supported size
    pub default_grid_size: usize,
    pub max_canvas_px: f32,
    pub min_cell_px: f32,
    /// Width reserved for the side panel when fitting the canvas
    pub panel_width: f32,
    pub background: Rgba,
    pub gridline: Rgba,
    /// Where exports are written; the download directory when unset
    pub export_dir: Option<PathBuf>,
    pub presets: Vec<Rgba>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_grid_size: DEFAULT_GRID_SIZE,
            max_canvas_px: MAX_CANVAS_PX,
            min_cell_px: MIN_CELL_PX,
            panel_width: 400.0,
            background: BACKGROUND,
            gridline: GRIDLINE,
            export_dir: None,
            presets: PRESET_COLORS.to_vec(),
        }
    }
}

impl EditorConfig {
    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        let config_dir = if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("pixel-editor")
        } else {
            PathBuf::from(".config/pixel-editor")
        };

        config_dir.join("config.toml")
    }

    /// Load configuration from the default location, creating it if absent
    pub fn load_from_file() -> Result<Self, ConfigError> {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let default_config = Self::default();
                default_config.save_to(path)?;
                Ok(default_config)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        Ok(())
    }

    pub fn canvas_settings(&self) -> CanvasSettings {
        CanvasSettings {
            background: self.background,
            gridline: self.gridline,
            max_canvas_px: self.max_canvas_px,
            min_cell_px: self.min_cell_px,
        }
    }

    /// Closest supported grid size to the configured one
    pub fn initial_grid_size(&self) -> usize {
        GRID_SIZES
            .iter()
            .copied()
            .min_by_key(|size| size.abs_diff(self.default_grid_size))
            .unwrap_or(DEFAULT_GRID_SIZE)
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: EditorConfig = toml::from_str(
            r##"
            default_grid_size = 32
            background = "#FFEEDD"
            "##,
        )
        .unwrap();

        assert_eq!(config.default_grid_size, 32);
        assert_eq!(config.background, Rgba::rgb(0xff, 0xee, 0xdd));
        assert_eq!(config.gridline, GRIDLINE);
        assert_eq!(config.presets.len(), PRESET_COLORS.len());
    }

    #[test]
    fn bad_color_is_a_parse_error() {
        let parsed = toml::from_str::<EditorConfig>(r##"gridline = "#12""##);
        assert!(parsed.is_err());
    }

    #[test]
    fn grid_size_snaps_to_supported() {
        let mut config = EditorConfig::default();
        config.default_grid_size = 20;
        assert_eq!(config.initial_grid_size(), 16);
        config.default_grid_size = 1000;
        assert_eq!(config.initial_grid_size(), 64);
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel-editor").join("config.toml");

        let config = EditorConfig::load_from(&path).unwrap();
        assert_eq!(config, EditorConfig::default());
        assert!(path.exists());

        let reloaded = EditorConfig::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
    }
}
