//! Application configuration loaded from TOML.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use topscreen_input::InputConfig;
use topscreen_mirror::MirrorConfig;
use tracing::info;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub mirror: MirrorConfig,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load configuration from the given path, or the default location.
///
/// A missing file is not an error: defaults apply. A malformed file is.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let config_path = match path {
        Some(p) => PathBuf::from(p),
        None => default_config_path(),
    };

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
            path: config_path.clone(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: config_path.clone(),
            source,
        })?;
        info!(path = %config_path.display(), "loaded config");
        Ok(config)
    } else {
        info!("no config file found, using defaults");
        Ok(Config::default())
    }
}

/// Get the default config file path.
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("topscreen")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use topscreen_input::Point;

    #[test]
    fn default_config_serializes() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("swipe_duration_ms = 200"));
        assert!(toml_str.contains("enabled = true"));
    }

    #[test]
    fn parse_example_config() {
        let toml_str = r#"
[input]
tap_point = { x = 540, y = 1200 }
swipe_start = { x = 540, y = 1600 }
swipe_end = { x = 540, y = 400 }
swipe_duration_ms = 300
adb_path = "/opt/android/platform-tools/adb"

[mirror]
enabled = true
command = "scrcpy"
args = ["--always-on-top", "--max-fps", "30"]
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.input.tap_point, Point::new(540, 1200));
        assert_eq!(config.input.swipe_duration_ms, 300);
        assert_eq!(
            config.input.adb_path.as_deref(),
            Some("/opt/android/platform-tools/adb")
        );
        assert_eq!(config.mirror.command.as_deref(), Some("scrcpy"));
        assert_eq!(config.mirror.args.len(), 3);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.input.tap_point, Point::new(100, 100));
        assert!(config.mirror.enabled);
    }
}
