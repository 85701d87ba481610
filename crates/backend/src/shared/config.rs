use contracts::shared::settings::{TrackerSettings, DEFAULT_BRAND, DEFAULT_DAILY_GOAL};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub tracker: TrackerConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory with the built frontend (trunk `dist/`)
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            static_dir: "dist".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TrackerConfig {
    pub default_daily_goal: u64,
    pub brand: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            default_daily_goal: DEFAULT_DAILY_GOAL,
            brand: DEFAULT_BRAND.to_string(),
        }
    }
}

impl TrackerConfig {
    pub fn to_settings(&self) -> TrackerSettings {
        TrackerSettings {
            default_daily_goal: self.default_daily_goal,
            brand: self.brand.clone(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[tracker]
default_daily_goal = 6000
brand = "FOXMIX"
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (copied there by build.rs)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Stores the loaded config for handlers. Later calls keep the first value.
pub fn init(config: Config) -> &'static Config {
    CONFIG.get_or_init(|| config)
}

/// Config stored by [`init`], or the built-in defaults
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

/// Resolves the static directory.
/// Relative paths are resolved against the executable directory first,
/// then against the current directory.
pub fn resolve_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);
    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let candidate = exe_dir.join(dir);
            if candidate.exists() {
                return candidate;
            }
        }
    }

    dir.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.tracker.default_daily_goal, 6000);
        assert_eq!(config.tracker.brand, "FOXMIX");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [tracker]
            default_daily_goal = 4500
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.tracker.default_daily_goal, 4500);
        assert_eq!(config.tracker.brand, "FOXMIX");
    }

    #[test]
    fn test_tracker_settings_from_config() {
        let config = Config {
            tracker: TrackerConfig {
                default_daily_goal: 7000,
                brand: "ACME".to_string(),
            },
            ..Config::default()
        };
        let settings = config.tracker.to_settings();
        assert_eq!(settings.default_daily_goal, 7000);
        assert_eq!(settings.brand, "ACME");
    }

    #[test]
    fn test_absolute_static_dir_is_kept() {
        let mut config = Config::default();
        let dir = std::env::temp_dir();
        config.server.static_dir = dir.display().to_string();
        assert_eq!(resolve_static_dir(&config), dir);
    }
}
