/// Application configuration
use crate::error::{CliError, Result};
use moodtune_discovery::{
    DEFAULT_COUNTRY, DEFAULT_GEMINI_MODEL, DEFAULT_GEMINI_URL, DEFAULT_ITUNES_URL,
    DEFAULT_YOUTUBE_URL,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = "moodtune.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_gemini")]
    pub gemini: GeminiSettings,

    #[serde(default = "default_youtube")]
    pub youtube: YouTubeSettings,

    #[serde(default = "default_itunes")]
    pub itunes: ItunesSettings,

    #[serde(default = "default_feed")]
    pub feed: FeedSettings,

    #[serde(default = "default_preview")]
    pub preview: PreviewSettings,

    #[serde(default)]
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiSettings {
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_gemini_model")]
    pub model: String,

    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct YouTubeSettings {
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_youtube_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItunesSettings {
    #[serde(default = "default_itunes_base_url")]
    pub base_url: String,

    #[serde(default = "default_country")]
    pub country: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedSettings {
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl FeedSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PreviewSettings {
    #[serde(default = "default_player_command")]
    pub player_command: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthSettings {
    /// Pre-issued identity token; absent means signed out
    #[serde(default)]
    pub identity_token: Option<String>,
}

impl AppConfig {
    /// Load configuration from file and environment.
    ///
    /// An explicit `path` must exist; otherwise `moodtune.toml` in the working
    /// directory is used if present. `MOODTUNE_`-prefixed variables override
    /// both, with `__` between section and key (`MOODTUNE_GEMINI__API_KEY`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("MOODTUNE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = self.api.base_url.trim();
        if url.is_empty() {
            return Err(CliError::Config(
                "Backend URL is required (set MOODTUNE_API__BASE_URL)".to_string(),
            ));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CliError::Config(format!(
                "Backend URL must start with http:// or https://: {}",
                url
            )));
        }

        if self.feed.page_size == 0 {
            return Err(CliError::Config(
                "Feed page size must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Keys needed to analyze a mood.
    pub fn require_discovery_keys(&self) -> Result<()> {
        if self.gemini.api_key.is_empty() {
            return Err(CliError::MissingSetting("gemini.api_key"));
        }
        if self.youtube.api_key.is_empty() {
            return Err(CliError::MissingSetting("youtube.api_key"));
        }
        Ok(())
    }
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        base_url: default_api_base_url(),
    }
}

fn default_api_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_gemini() -> GeminiSettings {
    GeminiSettings {
        api_key: String::new(),
        model: default_gemini_model(),
        base_url: default_gemini_base_url(),
    }
}

fn default_gemini_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_gemini_base_url() -> String {
    DEFAULT_GEMINI_URL.to_string()
}

fn default_youtube() -> YouTubeSettings {
    YouTubeSettings {
        api_key: String::new(),
        base_url: default_youtube_base_url(),
    }
}

fn default_youtube_base_url() -> String {
    DEFAULT_YOUTUBE_URL.to_string()
}

fn default_itunes() -> ItunesSettings {
    ItunesSettings {
        base_url: default_itunes_base_url(),
        country: default_country(),
    }
}

fn default_itunes_base_url() -> String {
    DEFAULT_ITUNES_URL.to_string()
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

fn default_feed() -> FeedSettings {
    FeedSettings {
        page_size: default_page_size(),
        debounce_ms: default_debounce_ms(),
    }
}

fn default_page_size() -> u32 {
    moodtune_feed::DEFAULT_PAGE_SIZE
}

fn default_debounce_ms() -> u64 {
    moodtune_feed::DEFAULT_DEBOUNCE.as_millis() as u64
}

fn default_preview() -> PreviewSettings {
    PreviewSettings {
        player_command: default_player_command(),
    }
}

fn default_player_command() -> String {
    "ffplay -nodisp -autoexit -loglevel quiet".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            gemini: default_gemini(),
            youtube: default_youtube(),
            itunes: default_itunes(),
            feed: default_feed(),
            preview: default_preview(),
            auth: AuthSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.feed.page_size, 12);
        assert_eq!(config.feed.debounce(), Duration::from_millis(300));
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.itunes.country, "KR");
        assert!(config.auth.identity_token.is_none());
    }

    #[test]
    fn loads_partial_file_with_defaults() {
        let file = write_config(
            r#"
[api]
base_url = "https://api.moodtune.test"

[gemini]
api_key = "gm-key"

[feed]
page_size = 20
"#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.api.base_url, "https://api.moodtune.test");
        assert_eq!(config.gemini.api_key, "gm-key");
        assert_eq!(config.gemini.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.feed.page_size, 20);
        assert_eq!(config.feed.debounce_ms, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn rejects_invalid_backend_url() {
        let mut config = AppConfig::default();
        config.api.base_url = "localhost:3000".to_string();
        assert!(config.validate().is_err());

        config.api.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_page_size() {
        let mut config = AppConfig::default();
        config.feed.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn discovery_keys_are_required_for_recommendations() {
        let mut config = AppConfig::default();
        assert!(matches!(
            config.require_discovery_keys(),
            Err(CliError::MissingSetting("gemini.api_key"))
        ));

        config.gemini.api_key = "g".to_string();
        config.youtube.api_key = "y".to_string();
        assert!(config.require_discovery_keys().is_ok());
    }
}
