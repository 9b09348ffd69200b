use std::path::PathBuf;
use std::time::Duration;

use config::{Case, Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Base URL of the real API, used when composing the mocked requests
    #[serde(default = "default_api_root")]
    pub api_root: String,

    /// Delay before the firewall listing resolves
    #[serde(default = "default_firewalls_delay_ms")]
    pub firewalls_delay_ms: u64,

    /// Delay before the firewall device listing resolves
    #[serde(default)]
    pub devices_delay_ms: u64,

    /// JSON fixture file (optional - built-in samples are used if not set)
    #[serde(default)]
    pub fixtures_path: Option<PathBuf>,

    /// Firewall whose devices are listed
    #[serde(default = "default_firewall_id")]
    pub firewall_id: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_root: default_api_root(),
            firewalls_delay_ms: default_firewalls_delay_ms(),
            devices_delay_ms: 0,
            fixtures_path: None,
            firewall_id: default_firewall_id(),
        }
    }
}

fn default_api_root() -> String {
    "https://api.linode.com/v4".to_string()
}

fn default_firewalls_delay_ms() -> u64 {
    1000
}

fn default_firewall_id() -> u64 {
    1
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            .set_default("api_root", default_api_root())?
            .set_default("firewalls_delay_ms", default_firewalls_delay_ms())?
            .set_default("devices_delay_ms", 0)?
            .set_default("firewall_id", default_firewall_id())?
            // Load from config file if present
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name("config.local").required(false))
            // Override with environment variables (prefixed with FIREWALL_MOCK_)
            .add_source(
                Environment::with_prefix("FIREWALL_MOCK")
                    .prefix_separator("_")
                    .separator("__")
                    .convert_case(Case::Snake)
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    pub fn firewalls_delay(&self) -> Duration {
        Duration::from_millis(self.firewalls_delay_ms)
    }

    pub fn devices_delay(&self) -> Duration {
        Duration::from_millis(self.devices_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_root, "https://api.linode.com/v4");
        assert_eq!(config.firewalls_delay(), Duration::from_millis(1000));
        assert_eq!(config.devices_delay(), Duration::ZERO);
        assert!(config.fixtures_path.is_none());
    }

    #[test]
    fn test_deserialize_fills_missing_keys() {
        let config: AppConfig = Config::builder()
            .set_override("devices_delay_ms", 250)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.devices_delay(), Duration::from_millis(250));
        assert_eq!(config.firewalls_delay_ms, 1000);
        assert_eq!(config.firewall_id, 1);
    }
}
