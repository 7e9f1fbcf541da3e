//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{LocationsApi, TownsApi, ZonesApi};
use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// API key header for Supabase
const APIKEY_HEADER: &str = "apikey";

/// PostgREST preference header, set on inserts so the created row is returned
const PREFER_HEADER: &str = "Prefer";

/// Dayliz backend client.
///
/// A thin wrapper over `reqwest` that adds request correlation IDs, Supabase
/// auth headers, and uniform error mapping. Each call is a single-shot
/// request; retry policy is the caller's (see [`ApiError::is_retryable`]).
#[derive(Clone)]
pub struct DaylizClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl DaylizClient {
    /// Create a new client with default configuration from environment
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] when the resulting configuration is
    /// invalid.
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] for an invalid configuration and
    /// [`ApiError::Request`] when the underlying HTTP client cannot be built.
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_static("dayliz-api-client/0.3"),
        );

        // Add API key header if available
        if let Some(ref key) = config.anon_key {
            if let Ok(value) = HeaderValue::from_str(key) {
                default_headers.insert(APIKEY_HEADER, value);
            }
        }

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access town rows
    #[must_use]
    pub fn towns(&self) -> TownsApi {
        TownsApi::new(self.clone())
    }

    /// Access delivery-zone rows
    #[must_use]
    pub fn zones(&self) -> ZonesApi {
        ZonesApi::new(self.clone())
    }

    /// Access user location rows
    #[must_use]
    pub fn user_locations(&self) -> LocationsApi {
        LocationsApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods
    // -------------------------------------------------------------------------

    /// Perform a GET request and deserialize the JSON response
    ///
    /// # Errors
    /// Returns [`ApiError::Request`] for transport failures and
    /// [`ApiError::ApiResponse`] for non-2xx responses.
    #[instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send(Method::GET, path, Option::<&()>::None, false).await?;
        Self::parse_json(response).await
    }

    /// Perform a POST request (PostgREST insert), returning the created rows
    ///
    /// # Errors
    /// Returns [`ApiError::Request`] for transport failures and
    /// [`ApiError::ApiResponse`] for non-2xx responses.
    #[instrument(skip(self, body))]
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.send(Method::POST, path, Some(body), true).await?;
        Self::parse_json(response).await
    }

    /// Perform a PATCH request, discarding the (empty) response body
    ///
    /// # Errors
    /// Returns [`ApiError::Request`] for transport failures and
    /// [`ApiError::ApiResponse`] for non-2xx responses.
    #[instrument(skip(self, body))]
    pub async fn patch<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.send(Method::PATCH, path, Some(body), false).await?;
        Ok(())
    }

    /// Perform a DELETE request, discarding the (empty) response body
    ///
    /// # Errors
    /// Returns [`ApiError::Request`] for transport failures and
    /// [`ApiError::ApiResponse`] for non-2xx responses.
    #[instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.send(Method::DELETE, path, Option::<&()>::None, false).await?;
        Ok(())
    }

    /// Execute a single request and map non-2xx responses to errors
    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        return_representation: bool,
    ) -> ApiResult<Response> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);
        let request_id = Uuid::new_v4().to_string();

        let mut request = self
            .inner
            .request(method.clone(), &url)
            .header(X_REQUEST_ID, &request_id);

        // Privileged writes authenticate with the service role key
        if let Some(ref key) = self.config.service_role_key {
            request = request.header(AUTHORIZATION, format!("Bearer {key}"));
        }

        if return_representation {
            request = request.header(PREFER_HEADER, "return=representation");
        }

        if let Some(b) = body {
            request = request.json(b);
        }

        let start = Instant::now();
        let response = request.send().await?;
        let status = response.status();

        debug!(
            request_id = %request_id,
            method = %method,
            url = %url,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis(),
            "request completed"
        );

        if status.is_success() {
            Ok(response)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::api_response(status.as_u16(), message))
        }
    }

    /// Deserialize a successful response body
    async fn parse_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        response.json().await.map_err(ApiError::Request)
    }
}
