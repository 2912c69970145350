//! Environment configuration
//!
//! Read once at startup. Unset or unparseable values fall back to defaults.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3002;
pub const DEFAULT_LOG_FILE: &str = "questions.txt";
pub const DEFAULT_ANSWER_SERVICE_URL: &str = "http://localhost:8000";
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3002";

/// Settings for the `tigris-server` binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Question log, relative paths resolve against the working directory
    pub log_path: PathBuf,
    /// Base URL of the answer service; `/chat` is appended per request
    pub answer_service_url: String,
    /// CORS allow-list. `None` allows any origin.
    pub allowed_origins: Option<Vec<String>>,
}

impl ServerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("TIGRIS_PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let log_path = lookup("TIGRIS_LOG_FILE")
            .filter(|p| !p.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from);

        let answer_service_url = lookup("AI_BACKEND_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_ANSWER_SERVICE_URL.to_string());

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty());

        Self {
            port,
            log_path,
            answer_service_url,
            allowed_origins,
        }
    }
}

/// Settings for the `tigris-chat` terminal client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub server_url: String,
}

impl ClientConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let server_url = lookup("TIGRIS_SERVER_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        Self { server_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_server_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.log_path, PathBuf::from("questions.txt"));
        assert_eq!(config.answer_service_url, "http://localhost:8000");
        assert_eq!(config.allowed_origins, None);
    }

    #[test]
    fn test_server_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("TIGRIS_PORT", "4100"),
            ("TIGRIS_LOG_FILE", "/var/log/tigris/questions.txt"),
            ("AI_BACKEND_URL", "http://10.0.0.5:9000/"),
            ("ALLOWED_ORIGINS", "http://a.example, http://b.example,,"),
        ]));
        assert_eq!(config.port, 4100);
        assert_eq!(
            config.log_path,
            PathBuf::from("/var/log/tigris/questions.txt")
        );
        assert_eq!(config.answer_service_url, "http://10.0.0.5:9000");
        assert_eq!(
            config.allowed_origins,
            Some(vec![
                "http://a.example".to_string(),
                "http://b.example".to_string()
            ])
        );
    }

    #[test]
    fn test_bad_port_falls_back() {
        let config = ServerConfig::from_lookup(lookup_from(&[("TIGRIS_PORT", "eighty")]));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_blank_origins_mean_any() {
        let config = ServerConfig::from_lookup(lookup_from(&[("ALLOWED_ORIGINS", " , ")]));
        assert_eq!(config.allowed_origins, None);
    }

    #[test]
    fn test_client_server_url() {
        assert_eq!(
            ClientConfig::from_lookup(lookup_from(&[])).server_url,
            DEFAULT_SERVER_URL
        );
        assert_eq!(
            ClientConfig::from_lookup(lookup_from(&[("TIGRIS_SERVER_URL", "https://tigris.example/")]))
                .server_url,
            "https://tigris.example"
        );
    }
}
