use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub urls: UrlConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// URL settings threaded into every absolute-URL builder. The base URL is an
/// explicit value here, never an ambient global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlConfig {
    pub base_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            urls: UrlConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3010,
        }
    }
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self { base_url: None }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Add default configuration
        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        // Add config file if it exists
        config = config.add_source(config::File::with_name("config").required(false));

        // Add environment variables with prefix "QNAV_"
        config = config.add_source(
            config::Environment::with_prefix("QNAV")
                .separator("_")
                .prefix_separator("_"),
        );

        let config = config.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// Base URL for absolute links, from config or environment. Empty string
    /// means same-origin relative links. A configured value must be an
    /// absolute http(s) URL; a trailing slash is trimmed so builders can
    /// always append a `/`-prefixed pathname.
    pub fn base_url(&self) -> anyhow::Result<String> {
        let raw = match &self.urls.base_url {
            Some(base_url) => base_url.clone(),
            None => std::env::var("QUALITYBOARD_BASE_URL").unwrap_or_default(),
        };

        let trimmed = raw.trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parsed =
            url::Url::parse(trimmed).with_context(|| format!("invalid base URL '{}'", trimmed))?;
        anyhow::ensure!(
            parsed.scheme() == "http" || parsed.scheme() == "https",
            "base URL '{}' must use http or https",
            trimmed
        );

        Ok(trimmed.to_string())
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
