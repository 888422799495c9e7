//! File-based configuration loading
//!
//! Loads upstream URLs and the listen address from a JSON file

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable that overrides the configuration file location
pub const CONFIG_PATH_ENV: &str = "GATEWAY_CONFIG";

/// Upstream service URLs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlsConfig {
    /// Chuck Norris style joke service
    #[serde(rename = "ChackNoris", alias = "chackNoris", alias = "chack_noris")]
    pub chack_noris: String,

    /// Evil insult service (query parameters are appended per request)
    #[serde(rename = "Insult", alias = "insult")]
    pub insult: String,

    /// Bad joke service
    #[serde(rename = "BadJoke", alias = "badJoke", alias = "bad_joke")]
    pub bad_joke: String,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen host (default: "127.0.0.1" - localhost only)
    #[serde(rename = "Host", alias = "host", default = "default_host")]
    pub host: String,

    /// Listen port, either a JSON string or number (default: "8080")
    #[serde(
        rename = "Port",
        alias = "port",
        default = "default_port",
        deserialize_with = "port_as_string"
    )]
    pub port: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> String {
    "8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn port_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Text(String),
        Number(u64),
    }

    Ok(match Port::deserialize(deserializer)? {
        Port::Text(s) => s,
        Port::Number(n) => n.to_string(),
    })
}

/// Application configuration loaded from JSON file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Upstream URLs
    #[serde(rename = "Urls", alias = "urls")]
    pub urls: UrlsConfig,

    /// Server configuration (optional, defaults to 127.0.0.1:8080)
    #[serde(rename = "Server", alias = "server", default)]
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading configuration from: {:?}", path);

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(content)
            .with_context(|| "Failed to parse config JSON")?;

        config.validate()?;

        debug!("Upstreams: bad joke = {}, chuck norris = {}, insult = {}",
            config.urls.bad_joke, config.urls.chack_noris, config.urls.insult);
        Ok(config)
    }

    /// Load configuration from default locations
    /// Searches in order:
    /// 1. $GATEWAY_CONFIG
    /// 2. ./conf.json
    /// 3. ~/.config/joke-gateway/conf.json
    ///
    /// Returns error if no configuration file is found.
    pub fn load_default() -> Result<Self> {
        for path in Self::candidate_paths() {
            if path.exists() {
                return Self::load(&path);
            }
        }

        anyhow::bail!(
            "Configuration file not found. Please create one at:\n\
             - $GATEWAY_CONFIG\n\
             - ./conf.json (current directory)\n\
             - ~/.config/joke-gateway/conf.json"
        )
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(explicit) = std::env::var(CONFIG_PATH_ENV) {
            if !explicit.is_empty() {
                paths.push(PathBuf::from(explicit));
            }
        }

        paths.push(PathBuf::from("conf.json"));

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("joke-gateway").join("conf.json"));
        }

        paths
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        let urls = [
            ("ChackNoris", &self.urls.chack_noris),
            ("Insult", &self.urls.insult),
            ("BadJoke", &self.urls.bad_joke),
        ];

        for (name, url) in urls {
            if !url.starts_with("http") {
                anyhow::bail!("Invalid URL for upstream '{}': {}", name, url);
            }
        }

        if self.server.host.is_empty() {
            anyhow::bail!("Server host cannot be empty");
        }

        let port: u16 = self.server.port.parse()
            .with_context(|| format!("Invalid port number: {}", self.server.port))?;
        if port == 0 {
            anyhow::bail!("Port number cannot be 0");
        }

        Ok(())
    }

    /// Address the listener binds to
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_config() -> String {
        r#"{
            "Urls": {
                "ChackNoris": "http://api.icndb.com/jokes/random",
                "Insult": "https://evilinsult.com/generate_insult.php",
                "BadJoke": "https://icanhazdadjoke.com/"
            },
            "Server": {
                "Host": "localhost",
                "Port": "8080"
            }
        }"#.to_string()
    }

    #[test]
    fn test_load_config() {
        let config_str = create_test_config();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(config_str.as_bytes()).unwrap();

        let config = AppConfig::load(file.path()).unwrap();

        assert_eq!(config.urls.chack_noris, "http://api.icndb.com/jokes/random");
        assert_eq!(config.urls.insult, "https://evilinsult.com/generate_insult.php");
        assert_eq!(config.urls.bad_joke, "https://icanhazdadjoke.com/");
        assert_eq!(config.listen_addr(), "localhost:8080");
    }

    #[test]
    fn test_numeric_port_and_lowercase_keys() {
        let config = AppConfig::from_json(r#"{
            "urls": {
                "chackNoris": "http://a.example",
                "insult": "http://b.example",
                "badJoke": "http://c.example"
            },
            "server": {"host": "0.0.0.0", "port": 9000}
        }"#).unwrap();

        assert_eq!(config.server.port, "9000");
        assert_eq!(config.listen_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_server_section_optional() {
        let config = AppConfig::from_json(r#"{
            "Urls": {"ChackNoris": "http://a", "Insult": "http://b", "BadJoke": "http://c"}
        }"#).unwrap();

        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_validation_invalid_url() {
        let result = AppConfig::from_json(r#"{
            "Urls": {"ChackNoris": "ftp://a", "Insult": "http://b", "BadJoke": "http://c"}
        }"#);

        assert!(result.unwrap_err().to_string().contains("ChackNoris"));
    }

    #[test]
    fn test_validation_invalid_port() {
        let result = AppConfig::from_json(r#"{
            "Urls": {"ChackNoris": "http://a", "Insult": "http://b", "BadJoke": "http://c"},
            "Server": {"Host": "localhost", "Port": "eighty"}
        }"#);
        assert!(result.is_err());

        let result = AppConfig::from_json(r#"{
            "Urls": {"ChackNoris": "http://a", "Insult": "http://b", "BadJoke": "http://c"},
            "Server": {"Host": "localhost", "Port": "0"}
        }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_urls_section() {
        assert!(AppConfig::from_json(r#"{"Server": {"Host": "h", "Port": "1"}}"#).is_err());
    }
}
