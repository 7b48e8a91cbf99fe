use std::time::Duration;

use harvest_core::ScanError;
use harvest_vision::VisionProvider;
use serde::Deserialize;

/// Harvest gateway configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Which vision provider to call: "openai" or "gemini"
    pub provider: String,
    /// OpenAI API key
    pub openai_api_key: Option<String>,
    /// OpenAI vision model
    pub openai_model: String,
    /// Gemini API key
    pub gemini_api_key: Option<String>,
    /// Bounded wait on the outbound vision call, in seconds
    pub request_timeout_secs: u64,
    /// Log level
    pub log_level: String,
    /// Directory for rolling NDJSON logs; unset means console only
    pub log_dir: Option<String>,
    /// Deployment environment label reported by /health
    pub environment: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 10000,
            provider: "openai".to_string(),
            openai_api_key: None,
            openai_model: "gpt-4o-mini".to_string(),
            gemini_api_key: None,
            request_timeout_secs: 60,
            log_level: "info".to_string(),
            log_dir: None,
            environment: "development".to_string(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_address: std::env::var("HARVEST_BIND").unwrap_or(defaults.bind_address),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            provider: std::env::var("HARVEST_PROVIDER").unwrap_or(defaults.provider),
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            openai_model: std::env::var("HARVEST_OPENAI_MODEL").unwrap_or(defaults.openai_model),
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            request_timeout_secs: std::env::var("HARVEST_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_dir: std::env::var("HARVEST_LOG_DIR").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Build the configured vision provider, failing when its key is absent.
    pub fn vision_provider(&self) -> Result<VisionProvider, ScanError> {
        match self.provider.as_str() {
            "openai" => {
                let key = self.openai_api_key.clone().ok_or_else(|| {
                    ScanError::Config("OPENAI_API_KEY not set".into())
                })?;
                Ok(VisionProvider::openai(key, self.openai_model.clone()))
            }
            "gemini" => {
                let key = self.gemini_api_key.clone().ok_or_else(|| {
                    ScanError::Config("GEMINI_API_KEY not set".into())
                })?;
                Ok(VisionProvider::gemini(key))
            }
            other => Err(ScanError::Config(format!("unknown vision provider {other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_requires_its_key() {
        let config = GatewayConfig { provider: "openai".into(), ..Default::default() };
        assert!(matches!(config.vision_provider(), Err(ScanError::Config(_))));
    }

    #[test]
    fn unknown_provider_is_a_config_error() {
        let config = GatewayConfig { provider: "anthropic".into(), ..Default::default() };
        assert!(matches!(config.vision_provider(), Err(ScanError::Config(_))));
    }

    #[test]
    fn openai_provider_builds_with_a_key() {
        let config = GatewayConfig {
            openai_api_key: Some("sk-test".into()),
            ..Default::default()
        };
        assert_eq!(config.vision_provider().unwrap().name(), "openai");
    }
}
