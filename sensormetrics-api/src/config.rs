use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Configuration for the API service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Address to bind the HTTP server to
    pub bind_address: String,

    /// Request handling settings
    pub request: RequestConfig,
}

/// Request handling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Maximum accepted request body size in bytes
    pub max_body_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request: RequestConfig::default(),
        }
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 1024 * 1024, // 1MB
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables and defaults
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(bind_addr) = env::var("SENSORMETRICS_BIND_ADDRESS") {
            config.bind_address = bind_addr;
        }

        if let Ok(max_body) = env::var("SENSORMETRICS_MAX_BODY_BYTES") {
            config.request.max_body_bytes = max_body.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.bind_address.is_empty() {
            return Err(anyhow::anyhow!("Bind address cannot be empty"));
        }

        if self.request.max_body_bytes == 0 {
            return Err(anyhow::anyhow!("Max body size must be greater than 0"));
        }

        Ok(())
    }
}
