pub mod corpus;

use crate::error::{Error, Result};
use crate::ranker::DEFAULT_TOP_K;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub recommender: RecommenderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommenderConfig {
    pub top_k: usize,
    /// YAML corpus file; the built-in dataset is used when unset
    pub corpus_path: Option<PathBuf>,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid PORT value".to_string()))?;

        let max_request_body_size = std::env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| "65536".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid MAX_REQUEST_BODY_SIZE value".to_string()))?;

        let top_k = std::env::var("TOP_K")
            .unwrap_or_else(|_| DEFAULT_TOP_K.to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid TOP_K value".to_string()))?;

        let corpus_path = std::env::var("CORPUS_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Settings {
            server: ServerConfig {
                host,
                port,
                max_request_body_size,
            },
            recommender: RecommenderConfig { top_k, corpus_path },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        if self.recommender.top_k == 0 {
            return Err(Error::Config("TOP_K must be at least 1".to_string()));
        }

        if self.server.max_request_body_size == 0 {
            return Err(Error::Config(
                "MAX_REQUEST_BODY_SIZE must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> Settings {
        Settings {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                max_request_body_size: 65536,
            },
            recommender: RecommenderConfig {
                top_k: 3,
                corpus_path: None,
            },
        }
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = test_settings();
        assert!(settings.validate().is_ok());

        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_top_k_rejected() {
        let mut settings = test_settings();
        settings.recommender.top_k = 0;
        assert!(matches!(settings.validate(), Err(Error::Config(_))));
    }
}
