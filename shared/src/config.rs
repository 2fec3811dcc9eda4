//! Where the todo backend lives.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_SCHEME: &str = "http";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 3000;
pub const COLLECTION_PATH: &str = "todos";

/// Backend endpoint, supplied by the shell.
///
/// Missing fields fall back to `http://localhost:3000`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub scheme: String,
    pub host: String,
    pub port: u16,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl BackendConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort(self.port));
        }

        let host = self.host.trim();
        if host.is_empty()
            || host.contains(['/', '@', '?', '#'])
            || host.contains(char::is_whitespace)
        {
            return Err(ConfigError::InvalidHost(self.host.clone()));
        }

        self.collection_url().map(|_| ())
    }

    /// `<scheme>://<host>:<port>/todos`
    pub fn collection_url(&self) -> Result<Url, ConfigError> {
        let raw = format!("{}://{}:{}/{}", self.scheme, self.host, self.port, COLLECTION_PATH);
        let url = Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidUrl {
                url: raw,
                reason: format!(
                    "invalid scheme '{}', only 'http' and 'https' are allowed",
                    url.scheme()
                ),
            });
        }

        Ok(url)
    }

    /// `<collection>/<id>`, with `id` escaped as a single path segment.
    pub fn item_url(&self, id: &str) -> Result<Url, ConfigError> {
        let mut url = self.collection_url()?;
        let base = url.to_string();
        url.path_segments_mut()
            .map_err(|()| ConfigError::InvalidUrl {
                url: base,
                reason: "URL cannot be a base".to_string(),
            })?
            .push(id);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = BackendConfig::default();
        assert_eq!(
            config.collection_url().unwrap().as_str(),
            "http://localhost:3000/todos"
        );
        assert_eq!(
            config.item_url("00001").unwrap().as_str(),
            "http://localhost:3000/todos/00001"
        );
    }

    #[test]
    fn test_item_id_is_escaped() {
        let config = BackendConfig::default();
        assert_eq!(
            config.item_url("a/b c").unwrap().as_str(),
            "http://localhost:3000/todos/a%2Fb%20c"
        );
    }

    #[test]
    fn test_from_json_partial() {
        let config = BackendConfig::from_json(r#"{ "host": "10.0.0.5" }"#).unwrap();
        assert_eq!(config.host, "10.0.0.5");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.scheme, DEFAULT_SCHEME);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            BackendConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            BackendConfig::new("example.com", 0).validate(),
            Err(ConfigError::InvalidPort(0))
        );
        assert!(matches!(
            BackendConfig::new("", 3000).validate(),
            Err(ConfigError::InvalidHost(_))
        ));
        assert!(matches!(
            BackendConfig::new("evil.com/x", 3000).validate(),
            Err(ConfigError::InvalidHost(_))
        ));

        let ftp = BackendConfig {
            scheme: "ftp".into(),
            ..Default::default()
        };
        assert!(matches!(ftp.validate(), Err(ConfigError::InvalidUrl { .. })));

        assert!(BackendConfig::new("api.example.com", 8080).validate().is_ok());
    }
}
