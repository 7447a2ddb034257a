use std::fs;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::BookingId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the booking service, e.g. `http://localhost:8081/api`.
    pub base_url: String,
    /// Candidate paths for the booking collection, tried in order until one
    /// answers. Deployments differ on `/bookings` vs the legacy `/booking`.
    #[serde(default = "default_booking_paths")]
    pub booking_paths: Vec<String>,
}

fn default_booking_paths() -> Vec<String> {
    vec!["/bookings".to_string(), "/booking".to_string()]
}

impl Config {
    pub fn load(filename: &str) -> Result<Self> {
        let config = fs::read_to_string(filename)
            .with_context(|| format!("failed to read config file {}", filename))?;
        serde_yaml::from_str(&config)
            .with_context(|| format!("failed to parse config file {}", filename))
    }
}

impl ApiConfig {
    pub fn facilities_url(&self) -> String {
        format!("{}/facilities", self.base_url.trim_end_matches('/'))
    }

    /// Collection URLs, one per configured candidate path.
    pub fn booking_urls(&self) -> Vec<String> {
        let base = self.base_url.trim_end_matches('/');
        self.booking_paths
            .iter()
            .map(|p| format!("{}{}", base, p))
            .collect()
    }

    /// Item URLs for one booking, one per configured candidate path.
    pub fn booking_item_urls(&self, id: BookingId) -> Vec<String> {
        self.booking_urls()
            .into_iter()
            .map(|url| format!("{}/{}", url, id))
            .collect()
    }

    /// Cancel URLs for one booking, one per configured candidate path.
    pub fn booking_cancel_urls(&self, id: BookingId) -> Vec<String> {
        self.booking_item_urls(id)
            .into_iter()
            .map(|url| format!("{}/cancel", url))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_should_work() {
        let config = Config::load("../cli/fixtures/config.yml").unwrap();
        assert_eq!(
            config,
            Config {
                api: ApiConfig {
                    base_url: "http://localhost:8081/api".to_string(),
                    booking_paths: vec!["/bookings".to_string(), "/booking".to_string()],
                },
            }
        )
    }

    #[test]
    fn booking_paths_default_to_legacy_fallback() {
        let config: Config = serde_yaml::from_str("api:\n  base_url: http://host/api\n").unwrap();
        assert_eq!(
            config.api.booking_urls(),
            vec!["http://host/api/bookings", "http://host/api/booking"]
        );
    }

    #[test]
    fn item_and_cancel_urls() {
        let api = ApiConfig {
            base_url: "http://host/api/".to_string(),
            booking_paths: vec!["/bookings".to_string()],
        };
        assert_eq!(api.facilities_url(), "http://host/api/facilities");
        assert_eq!(api.booking_item_urls(7), vec!["http://host/api/bookings/7"]);
        assert_eq!(api.booking_cancel_urls(7), vec!["http://host/api/bookings/7/cancel"]);
    }
}
