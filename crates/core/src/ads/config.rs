//! Ad configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the ad surfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdConfig {
    /// Ad unit id for the interstitial surface.
    #[serde(default)]
    pub interstitial_unit_id: String,

    /// Ad unit id for the banner surface. The banner is render-side and
    /// has no lifecycle here; the id is carried for the embedding UI.
    #[serde(default)]
    pub banner_unit_id: String,

    /// Delay before retrying a failed interstitial load (milliseconds).
    #[serde(default = "default_retry_delay")]
    pub retry_delay_ms: u64,

    /// Start loading the interstitial as soon as the manager starts.
    #[serde(default = "default_preload")]
    pub preload_on_start: bool,
}

fn default_retry_delay() -> u64 {
    10_000 // 10 seconds
}

fn default_preload() -> bool {
    true
}

impl Default for AdConfig {
    fn default() -> Self {
        Self {
            interstitial_unit_id: String::new(),
            banner_unit_id: String::new(),
            retry_delay_ms: default_retry_delay(),
            preload_on_start: default_preload(),
        }
    }
}

impl AdConfig {
    /// Retry delay as a [`Duration`].
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AdConfig::default();
        assert_eq!(config.retry_delay_ms, 10_000);
        assert!(config.preload_on_start);
        assert!(config.interstitial_unit_id.is_empty());
    }

    #[test]
    fn test_deserialize_minimal() {
        let toml = r#"
            interstitial_unit_id = "ca-app-pub-0000000000000000/1111111111"
        "#;
        let config: AdConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            config.interstitial_unit_id,
            "ca-app-pub-0000000000000000/1111111111"
        );
        assert_eq!(config.retry_delay_ms, 10_000);
        assert!(config.preload_on_start);
    }

    #[test]
    fn test_deserialize_full() {
        let toml = r#"
            interstitial_unit_id = "unit-a"
            banner_unit_id = "unit-b"
            retry_delay_ms = 5000
            preload_on_start = false
        "#;
        let config: AdConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.banner_unit_id, "unit-b");
        assert_eq!(config.retry_delay(), Duration::from_millis(5000));
        assert!(!config.preload_on_start);
    }
}
