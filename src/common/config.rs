use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub static CONFIG: Lazy<Arc<Config>> = Lazy::new(|| Arc::new(Config::load()));

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// How long conversations are kept, as shown in the privacy notice.
    /// Left unset the notice keeps its "X days" placeholder.
    #[serde(default)]
    pub retention_days: Option<u32>,
    /// Whether dismissing the dialog (escape key) counts as accepting it.
    #[serde(default = "default_dismiss_accepts")]
    pub dismiss_accepts: bool,
    #[serde(default = "default_min_width_px")]
    pub min_width_px: u32,
}

impl Config {
    /// Loads the config file.
    ///
    /// The frontend has no file system to read from, so the config is packaged into the
    /// binary with include_str. The build script creates an empty `config.toml` if there
    /// isn't one, in which case every field falls back to its default.
    pub fn load() -> Self {
        let config_str = include_str!("../../config.toml");

        match Self::parse(config_str) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("invalid config.toml, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn retention_period(&self) -> String {
        match self.retention_days {
            Some(1) => "1 day".to_string(),
            Some(days) => format!("{} days", days),
            None => "X days".to_string(),
        }
    }
}

fn default_dismiss_accepts() -> bool {
    true
}

fn default_min_width_px() -> u32 {
    600
}

impl Default for Config {
    fn default() -> Self {
        Config {
            retention_days: None,
            dismiss_accepts: default_dismiss_accepts(),
            min_width_px: default_min_width_px(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.dismiss_accepts);
        assert_eq!(config.min_width_px, 600);
        assert_eq!(config.retention_days, None);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::parse("retention_days = 30").unwrap();
        assert_eq!(config.retention_days, Some(30));
        assert!(config.dismiss_accepts);
        assert_eq!(config.min_width_px, 600);
    }

    #[test]
    fn dismiss_can_be_switched_off() {
        let config = Config::parse("dismiss_accepts = false").unwrap();
        assert!(!config.dismiss_accepts);
        assert_eq!(config.min_width_px, 600);
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(Config::parse("dismiss_accepts = \"sometimes\"").is_err());
    }

    #[test]
    fn retention_period_text() {
        let mut config = Config::default();
        assert_eq!(config.retention_period(), "X days");

        config.retention_days = Some(1);
        assert_eq!(config.retention_period(), "1 day");

        config.retention_days = Some(90);
        assert_eq!(config.retention_period(), "90 days");
    }

    #[test]
    fn bundled_config_loads() {
        assert!(CONFIG.min_width_px > 0);
    }
}
