//! Configuration management

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use serde::Deserialize;

use crate::locale::Locale;
use crate::runtime::RefreshIntervals;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub locale: Locale,

    #[serde(default)]
    pub refresh: RefreshConfig,
}

fn default_port() -> u16 {
    8090
}

#[derive(Debug, Deserialize)]
pub struct RefreshConfig {
    #[serde(default = "default_clock_interval_ms")]
    pub clock_interval_ms: u64,
    #[serde(default = "default_analytics_interval_ms")]
    pub analytics_interval_ms: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            clock_interval_ms: default_clock_interval_ms(),
            analytics_interval_ms: default_analytics_interval_ms(),
        }
    }
}

fn default_clock_interval_ms() -> u64 {
    1000
}

fn default_analytics_interval_ms() -> u64 {
    5000
}

impl RefreshConfig {
    pub fn intervals(&self) -> RefreshIntervals {
        RefreshIntervals {
            clock: Duration::from_millis(self.clock_interval_ms),
            analytics: Duration::from_millis(self.analytics_interval_ms),
        }
    }
}

/// Get config directory (SHD_CONFIG_DIR, XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SHD_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/smart-home-dashboard");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("smart-home-dashboard");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config/smart-home-dashboard");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("smart-home-dashboard");
        }
    }

    // Fallback to current directory
    PathBuf::from(".")
}

/// Load configuration: defaults, then `config.*` in the config dir, then
/// `SHD_*` environment variables (`SHD_REFRESH__CLOCK_INTERVAL_MS`, ...).
pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("port", default_port() as i64)?
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        .add_source(
            ::config::Environment::with_prefix("SHD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Precedence: SHD_PORT > PORT > config > default
    if std::env::var("SHD_PORT").is_err() {
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                builder = builder.set_override("port", port_num as i64)?;
            }
        }
    }

    let config: Config = builder.build()?.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

impl Config {
    fn validate(&self) -> Result<()> {
        if self.refresh.clock_interval_ms == 0 {
            bail!("refresh.clock_interval_ms must be greater than zero");
        }
        if self.refresh.analytics_interval_ms == 0 {
            bail!("refresh.analytics_interval_ms must be greater than zero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "SHD_CONFIG_DIR",
            "SHD_PORT",
            "SHD_LOCALE",
            "SHD_REFRESH__CLOCK_INTERVAL_MS",
            "SHD_REFRESH__ANALYTICS_INTERVAL_MS",
            "PORT",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("SHD_CONFIG_DIR", dir.path());

        let config = load_config().unwrap();
        assert_eq!(config.port, 8090);
        assert_eq!(config.locale, Locale::ZhTw);
        assert_eq!(config.refresh.intervals(), RefreshIntervals::default());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_file_then_env_override() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "port = 9100\nlocale = \"en\"\n\n[refresh]\nanalytics_interval_ms = 2500\n",
        )
        .unwrap();
        std::env::set_var("SHD_CONFIG_DIR", dir.path());
        std::env::set_var("SHD_PORT", "9200");

        let config = load_config().unwrap();
        assert_eq!(config.port, 9200);
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.refresh.clock_interval_ms, 1000);
        assert_eq!(config.refresh.analytics_interval_ms, 2500);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_single_underscore_prefix_env() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("SHD_CONFIG_DIR", dir.path());
        std::env::set_var("SHD_LOCALE", "en");
        std::env::set_var("SHD_REFRESH__ANALYTICS_INTERVAL_MS", "750");
        std::env::set_var("SHD_PORT", "9300");
        std::env::set_var("PORT", "7000");

        let config = load_config().unwrap();
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.refresh.analytics_interval_ms, 750);
        assert_eq!(config.port, 9300);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_legacy_port_fallback() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("SHD_CONFIG_DIR", dir.path());
        std::env::set_var("PORT", "7000");

        assert_eq!(load_config().unwrap().port, 7000);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_zero_interval_rejected() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("SHD_CONFIG_DIR", dir.path());
        std::env::set_var("SHD_REFRESH__CLOCK_INTERVAL_MS", "0");

        assert!(load_config().is_err());
        clear_env();
    }
}
