//! src/config.rs

use crate::error::AppResult;
use directories::ProjectDirs;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Colors used by the renderer.
///
/// Loaded from the optional `[theme]` table in `config.toml`; fields left
/// out keep their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Theme {
    /// Cursor row, list title and other highlighted text.
    pub emphasis: Color,
    /// Unselected list rows.
    pub normal: Color,
    /// Author/date line and the help footer.
    pub info: Color,
    /// The failure view.
    pub error: Color,
    /// The confirmation view.
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            emphasis: Color::Magenta,
            normal: Color::Gray,
            info: Color::DarkGray,
            error: Color::Red,
            success: Color::Green,
        }
    }
}

/// The application's configuration, read from the platform config dir.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
}

/// Locates the configuration file in the system-specific config directory.
fn config_path() -> Option<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "gitfixup", "git-fixup")?;
    Some(proj_dirs.config_dir().join("config.toml"))
}

impl Config {
    /// Loads the configuration, falling back to defaults when no config
    /// file exists or no home directory can be determined.
    pub fn load() -> AppResult<Self> {
        match config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(path)?;
                Ok(toml::from_str(&content)?)
            }
            _ => Ok(Config::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_colors() {
        let theme = Theme::default();
        assert_eq!(theme.emphasis, Color::Magenta);
        assert_eq!(theme.normal, Color::Gray);
        assert_eq!(theme.info, Color::DarkGray);
        assert_eq!(theme.error, Color::Red);
        assert_eq!(theme.success, Color::Green);
    }

    #[test]
    fn partial_theme_table_keeps_other_defaults() {
        let config: Config = toml::from_str("[theme]\nemphasis = \"LightCyan\"\n").unwrap();
        assert_eq!(config.theme.emphasis, Color::LightCyan);
        assert_eq!(config.theme.normal, Color::Gray);
        assert_eq!(config.theme.success, Color::Green);
    }

    #[test]
    fn empty_file_is_the_default_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, Theme::default());
    }

    #[test]
    fn unknown_color_name_is_rejected() {
        let result = toml::from_str::<Config>("[theme]\nerror = \"NotAColor\"\n");
        assert!(result.is_err());
    }
}
