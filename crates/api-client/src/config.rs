//! Configuration for the Dayliz API client
//!
//! Supports environment-based configuration with sensible defaults.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default production PostgREST root
const DEFAULT_REST_URL: &str = "https://api.dayliz.in/rest/v1";

/// Environment types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (typically localhost Supabase)
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    Production,
}

impl Default for Environment {
    fn default() -> Self {
        Self::Production
    }
}

impl Environment {
    /// Parse from environment variable
    #[must_use]
    pub fn from_env() -> Self {
        match env::var("DAYLIZ_ENV")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "development" | "dev" | "local" => Self::Development,
            "staging" | "stage" => Self::Staging,
            _ => Self::Production,
        }
    }
}

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the PostgREST root (`{SUPABASE_URL}/rest/v1`)
    pub base_url: String,
    /// Supabase anonymous key (for public reads)
    pub anon_key: Option<String>,
    /// Supabase service role key (for privileged writes)
    pub service_role_key: Option<String>,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    /// Current environment
    pub environment: Environment,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REST_URL.to_string(),
            anon_key: None,
            service_role_key: None,
            timeout: Duration::from_secs(30),
            environment: Environment::default(),
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `DAYLIZ_API_URL` or `SUPABASE_URL`: backend base URL
    /// - `SUPABASE_ANON_KEY`: anonymous key for public reads
    /// - `SUPABASE_SERVICE_ROLE_KEY`: service role key for privileged writes
    /// - `DAYLIZ_ENV`: environment (development/staging/production)
    /// - `DAYLIZ_TIMEOUT_SECS`: request timeout in seconds
    ///
    /// # Errors
    /// Currently infallible; kept fallible for parity with the other
    /// constructors so call sites can stay uniform.
    pub fn from_env() -> ApiResult<Self> {
        let environment = Environment::from_env();

        // Try DAYLIZ_API_URL first, then SUPABASE_URL, then default
        let base_url = env::var("DAYLIZ_API_URL")
            .or_else(|_| env::var("SUPABASE_URL").map(|url| format!("{url}/rest/v1")))
            .unwrap_or_else(|_| DEFAULT_REST_URL.to_string());

        let anon_key = env::var("SUPABASE_ANON_KEY").ok();
        let service_role_key = env::var("SUPABASE_SERVICE_ROLE_KEY").ok();

        let timeout = env::var("DAYLIZ_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map_or(Duration::from_secs(30), Duration::from_secs);

        Ok(Self {
            base_url,
            anon_key,
            service_role_key,
            timeout,
            environment,
        })
    }

    /// Create development configuration (local Supabase)
    #[must_use]
    pub fn development() -> Self {
        Self {
            base_url: "http://localhost:54321/rest/v1".to_string(),
            anon_key: env::var("SUPABASE_ANON_KEY").ok(),
            service_role_key: env::var("SUPABASE_SERVICE_ROLE_KEY").ok(),
            timeout: Duration::from_secs(10),
            environment: Environment::Development,
        }
    }

    /// Create staging configuration
    #[must_use]
    pub fn staging() -> Self {
        Self {
            base_url: env::var("STAGING_SUPABASE_URL")
                .map(|url| format!("{url}/rest/v1"))
                .unwrap_or_else(|_| DEFAULT_REST_URL.to_string()),
            anon_key: env::var("STAGING_SUPABASE_ANON_KEY")
                .or_else(|_| env::var("SUPABASE_ANON_KEY"))
                .ok(),
            service_role_key: env::var("STAGING_SUPABASE_SERVICE_ROLE_KEY")
                .or_else(|_| env::var("SUPABASE_SERVICE_ROLE_KEY"))
                .ok(),
            timeout: Duration::from_secs(30),
            environment: Environment::Staging,
        }
    }

    /// Create production configuration
    #[must_use]
    pub fn production() -> Self {
        Self {
            base_url: DEFAULT_REST_URL.to_string(),
            anon_key: env::var("SUPABASE_ANON_KEY").ok(),
            service_role_key: env::var("SUPABASE_SERVICE_ROLE_KEY").ok(),
            timeout: Duration::from_secs(30),
            environment: Environment::Production,
        }
    }

    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set anon key
    #[must_use]
    pub fn with_anon_key(mut self, key: impl Into<String>) -> Self {
        self.anon_key = Some(key.into());
        self
    }

    /// Builder-style method to set service role key
    #[must_use]
    pub fn with_service_role_key(mut self, key: impl Into<String>) -> Self {
        self.service_role_key = Some(key.into());
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] for an empty or non-HTTP base URL or a
    /// zero timeout.
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config("base_url must start with http:// or https://"));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}
