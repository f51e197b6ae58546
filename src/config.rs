//! Configuration loading and management

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::host::Theme;
use crate::keys::Translations;
use crate::render::KeyStyle;

/// Page timeout used when neither config nor caller sets one
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Errors raised while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HOME is not set and KEYDOC_CONFIG was not given")]
    NoHome,

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Color overrides; unset entries come from the host theme
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Key label color, theme `fg_focus` by default
    pub key: Option<String>,
    /// Help text color, theme `fg_normal` by default
    pub help: Option<String>,
    /// Notification background, theme `bg_focus` by default
    pub bg: Option<String>,
}

/// Overlay configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overrides for the label translation table
    pub translate: HashMap<String, String>,

    pub color: ColorConfig,

    /// Key column font, theme font by default
    pub font: Option<String>,

    /// Notification border width override
    pub border_width: Option<u32>,

    /// Notification padding override
    pub padding: Option<u32>,

    pub timeout_secs: u64,

    /// Bindings file shown by the `keydoc` binary
    pub bindings_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translate: HashMap::new(),
            color: ColorConfig::default(),
            font: None,
            border_width: None,
            padding: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            bindings_path: None,
        }
    }
}

impl Config {
    /// Load configuration from `$KEYDOC_CONFIG` or
    /// `$HOME/.config/keydoc/config.json`
    pub fn load() -> Result<Self, ConfigError> {
        let path = match std::env::var_os("KEYDOC_CONFIG") {
            Some(path) => PathBuf::from(path),
            None => {
                let home = std::env::var_os("HOME").ok_or(ConfigError::NoHome)?;
                PathBuf::from(home)
                    .join(".config")
                    .join("keydoc")
                    .join("config.json")
            }
        };
        Self::from_path(&path)
    }

    /// Load from a file. A missing file yields the defaults.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(?path, "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    pub fn translations(&self) -> Translations {
        Translations::with_overrides(&self.translate)
    }

    pub fn key_style(&self, theme: &Theme) -> KeyStyle {
        KeyStyle {
            key_color: self.color.key.clone().unwrap_or_else(|| theme.fg_focus.clone()),
            help_color: self.color.help.clone().unwrap_or_else(|| theme.fg_normal.clone()),
            font: self.font.clone().unwrap_or_else(|| theme.font.clone()),
        }
    }

    pub fn background(&self, theme: &Theme) -> String {
        self.color.bg.clone().unwrap_or_else(|| theme.bg_focus.clone())
    }

    pub fn border_width(&self, theme: &Theme) -> u32 {
        self.border_width.unwrap_or(theme.border_width)
    }

    pub fn padding(&self, theme: &Theme) -> u32 {
        self.padding.unwrap_or(theme.padding)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("keydoc-config-does-not-exist.json");
        let config = Config::from_path(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_partial_config() {
        let json = r##"{
            "translate": { "Mod1": "Alt" },
            "color": { "key": "#ff0000" },
            "font": "Iosevka 10"
        }"##;
        let config: Config = serde_json::from_str(json).unwrap();
        let theme = Theme::default();

        let style = config.key_style(&theme);
        assert_eq!(style.key_color, "#ff0000");
        assert_eq!(style.help_color, theme.fg_normal);
        assert_eq!(style.font, "Iosevka 10");
        assert_eq!(config.background(&theme), theme.bg_focus);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.translations().translate("Mod1"), "Alt");
    }

    #[test]
    fn test_presentation_overrides() {
        let config: Config = serde_json::from_str(r#"{"border_width": 0, "padding": 12}"#).unwrap();
        let theme = Theme::default();
        assert_eq!(config.border_width(&theme), 0);
        assert_eq!(config.padding(&theme), 12);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let path = std::env::temp_dir().join(format!("keydoc-bad-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let result = Config::from_path(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
