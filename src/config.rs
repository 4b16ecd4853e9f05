//! Application configuration
//!
//! Settings are read from `config.toml` in the user's config directory (a
//! missing file means defaults), then overridden by the `KINOLOGUE_ENDPOINT`
//! environment variable and finally by command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::model::ComposePolicy;

pub const ENDPOINT_ENV_VAR: &str = "KINOLOGUE_ENDPOINT";

const DEFAULT_ENDPOINT: &str =
    "https://vclugsqwoot7iizxkcrp6247k40pumqg.lambda-url.eu-north-1.on.aws/";
const DEFAULT_RAW_LISTINGS_PATH: &str = "raw_listings_v1.json";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

const DEFAULT_CINEMAS: [&str; 10] = [
    "Barbican",
    "BFI Southbank",
    "Castle",
    "Nickel",
    "Close-Up",
    "Ciné Lumière",
    "The Cinema Museum",
    "Garden Cinema",
    "Rio",
    "ICA",
];

const DEFAULT_DATE_PRESETS: [&str; 5] = [
    "today",
    "tomorrow",
    "this week",
    "over next 2 weeks",
    "in next 5 days",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// URL the query is POSTed to.
    pub endpoint_url: String,
    /// Dataset snapshot the endpoint should answer from.
    pub raw_listings_path: String,
    pub request_timeout_secs: u64,
    /// Cinemas offered in the picker, in display order.
    pub cinemas: Vec<String>,
    /// Relative-date phrases offered in the picker.
    pub date_presets: Vec<String>,
    pub compose_policy: ComposePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT.to_string(),
            raw_listings_path: DEFAULT_RAW_LISTINGS_PATH.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            cinemas: DEFAULT_CINEMAS.iter().map(|c| c.to_string()).collect(),
            date_presets: DEFAULT_DATE_PRESETS.iter().map(|d| d.to_string()).collect(),
            compose_policy: ComposePolicy::default(),
        }
    }
}

impl AppConfig {
    /// Default config file location, e.g. `~/.config/kinologue/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("uk.co", "Kinologue", "kinologue")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from `path`, or the default location when `None`.
    ///
    /// A missing file yields defaults. A file that exists but does not parse is
    /// an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("No config directory available, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content)?;
        dedup_in_order(&mut config.cinemas);
        dedup_in_order(&mut config.date_presets);
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Apply the environment override, if set and non-empty.
    pub fn apply_env(&mut self) {
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV_VAR) {
            self.override_endpoint(Some(endpoint));
        }
    }

    pub fn override_endpoint(&mut self, endpoint: Option<String>) {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint_url = endpoint.trim().to_string();
        }
    }

    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.endpoint_url)
            .with_context(|| format!("Invalid endpoint URL '{}'", self.endpoint_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("Endpoint URL must use http or https, got '{}'", url.scheme());
        }
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be greater than zero");
        }
        Ok(())
    }
}

fn dedup_in_order(values: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    values.retain(|v| seen.insert(v.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_catalogs() {
        let config = AppConfig::default();
        assert_eq!(config.cinemas.len(), 10);
        assert_eq!(config.cinemas[0], "Barbican");
        assert_eq!(config.date_presets[2], "this week");
        assert_eq!(config.raw_listings_path, "raw_listings_v1.json");
        assert_eq!(config.compose_policy, ComposePolicy::LastChangeWins);
        config.validate().unwrap();
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            endpoint_url = "http://localhost:9000/"
            compose_policy = "keep_manual_edits"
            cinemas = ["Rio", "ICA", "Rio"]
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoint_url, "http://localhost:9000/");
        assert_eq!(config.compose_policy, ComposePolicy::KeepManualEdits);
        assert_eq!(config.cinemas, ["Rio", "ICA"]);
        assert_eq!(config.date_presets, AppConfig::default().date_presets);
    }

    #[test]
    fn toml_round_trip_preserves_config() {
        let config = AppConfig::default();
        let parsed = AppConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("kinologue-no-such-config.toml");
        let config = AppConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("kinologue-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "endpoint_url = [").unwrap();
        let result = AppConfig::load(Some(path.as_path()));
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn blank_override_is_ignored() {
        let mut config = AppConfig::default();
        config.override_endpoint(Some("   ".to_string()));
        assert_eq!(config.endpoint_url, DEFAULT_ENDPOINT);

        config.override_endpoint(Some(" http://127.0.0.1:8080/ ".to_string()));
        assert_eq!(config.endpoint_url, "http://127.0.0.1:8080/");
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let mut config = AppConfig::default();
        config.endpoint_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.endpoint_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }
}
