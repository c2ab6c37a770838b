use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Simulated latency of the mock search service, in milliseconds
    pub delay_ms: u64,
    /// JSON file replacing the bundled mock results
    pub mock_data: Option<PathBuf>,
}

impl SearchConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 640.0,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1500,
            mock_data: None,
        }
    }
}

/// Load from the default location, falling back to defaults.
pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => {
            tracing::warn!("Could not determine home directory, using default config");
            Config::default()
        }
    }
}

/// Load from `path`, falling back to defaults when it is missing or invalid.
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }
    match try_load_from(path) {
        Ok(config) => {
            tracing::info!("Loaded config from {:?}", path);
            config
        }
        Err(e) => {
            tracing::warn!("{}, using defaults", e);
            Config::default()
        }
    }
}

pub fn try_load_from(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&contents)?)
}

fn config_path() -> Option<PathBuf> {
    // ~/.config/ on every platform, not the OS-specific config dir
    dirs::home_dir().map(|home| home.join(".config").join("platter").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.search.delay(), Duration::from_millis(1500));
        assert!(config.search.mock_data.is_none());
        assert_eq!(config.window.width, 720.0);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [search]
            delay_ms = 200
            mock_data = "/tmp/results.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.search.delay_ms, 200);
        assert_eq!(config.search.mock_data, Some(PathBuf::from("/tmp/results.json")));
        assert_eq!(config.window.height, 640.0);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_from(Path::new("/nonexistent/platter/config.toml"));
        assert_eq!(config.search.delay_ms, 1500);
    }

    #[test]
    fn missing_file_is_a_read_error_when_strict() {
        let err = try_load_from(Path::new("/nonexistent/platter/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
