//! Tencent Cloud CDN API HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header};
use tracing::{debug, warn};

use super::dto::{
    ApiEnvelope, PurgePathCacheRequest, PurgeUrlsCacheRequest, PushUrlsCacheRequest,
};
use super::signing;
use crate::domain::entities::{Credentials, ZoneId};
use crate::domain::errors::{CdnError, ConfigError};
use crate::domain::ports::CdnApiPort;
use crate::infrastructure::config::CdnSettings;

const CDN_ENDPOINT: &str = "https://cdn.tencentcloudapi.com";
const CDN_HOST: &str = "cdn.tencentcloudapi.com";
const SERVICE: &str = "cdn";
const API_VERSION: &str = "2018-06-06";
const FLUSH_TYPE_DELETE: &str = "delete";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated client for the CDN control API.
///
/// Immutable once built; configuration reloads construct a replacement
/// instead of mutating a live instance.
pub struct TencentCdnClient {
    client: Client,
    endpoint: String,
    credentials: Credentials,
    region: String,
    zone_id: Option<ZoneId>,
}

impl TencentCdnClient {
    /// Creates a client for the production endpoint.
    ///
    /// # Errors
    /// Returns `ClientBuild` if HTTP client creation fails.
    pub fn new(settings: &CdnSettings) -> Result<Self, ConfigError> {
        Self::with_endpoint(settings, CDN_ENDPOINT)
    }

    /// Creates a client against a custom endpoint.
    ///
    /// # Errors
    /// Returns `ClientBuild` if HTTP client creation fails.
    pub fn with_endpoint(
        settings: &CdnSettings,
        endpoint: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ConfigError::client_build(e.to_string()))?;

        debug!(
            secret_id = %settings.credentials.masked_id(),
            region = %settings.region,
            "CDN client initialized"
        );

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            credentials: settings.credentials.clone(),
            region: settings.region.clone(),
            zone_id: settings.zone_id.clone(),
        })
    }

    fn zone_id_str(&self) -> Option<&str> {
        self.zone_id.as_ref().map(ZoneId::as_str)
    }

    fn encode<T: serde::Serialize>(request: &T) -> Result<String, CdnError> {
        serde_json::to_string(request)
            .map_err(|e| CdnError::unexpected(format!("failed to encode request: {e}")))
    }

    async fn call(&self, action: &str, body: String) -> Result<String, CdnError> {
        let timestamp = chrono::Utc::now().timestamp();
        let authorization =
            signing::authorization(&self.credentials, CDN_HOST, SERVICE, &body, timestamp)?;

        debug!(action, "Calling CDN API");

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, signing::CONTENT_TYPE)
            .header(header::AUTHORIZATION, authorization)
            .header("X-TC-Action", action)
            .header("X-TC-Version", API_VERSION)
            .header("X-TC-Timestamp", timestamp.to_string())
            .header("X-TC-Region", &self.region)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, action, "Failed to reach CDN API");
                if e.is_timeout() {
                    CdnError::network("request timed out")
                } else if e.is_connect() {
                    CdnError::network("failed to connect to the CDN API")
                } else {
                    CdnError::network(e.to_string())
                }
            })?;

        let status = response.status();
        let envelope: ApiEnvelope = response.json().await.map_err(|e| {
            warn!(error = %e, action, "Failed to parse CDN API response");
            if status.is_success() {
                CdnError::unexpected(format!("failed to parse response: {e}"))
            } else {
                CdnError::upstream(format!("HTTP {status}"))
            }
        })?;

        if let Some(api_error) = envelope.response.error {
            warn!(
                code = %api_error.code,
                request_id = %envelope.response.request_id,
                action,
                "CDN API rejected the request"
            );
            return Err(CdnError::upstream(format!(
                "{}: {}",
                api_error.code, api_error.message
            )));
        }

        debug!(
            request_id = %envelope.response.request_id,
            action,
            "CDN API call succeeded"
        );

        Ok(envelope.response.request_id)
    }
}

#[async_trait]
impl CdnApiPort for TencentCdnClient {
    async fn purge_urls(&self, urls: &[String]) -> Result<String, CdnError> {
        let body = Self::encode(&PurgeUrlsCacheRequest {
            urls,
            zone_id: self.zone_id_str(),
        })?;
        self.call("PurgeUrlsCache", body).await
    }

    async fn purge_paths(&self, paths: &[String]) -> Result<String, CdnError> {
        let body = Self::encode(&PurgePathCacheRequest {
            paths,
            flush_type: FLUSH_TYPE_DELETE,
            zone_id: self.zone_id_str(),
        })?;
        self.call("PurgePathCache", body).await
    }

    async fn push_urls(&self, urls: &[String]) -> Result<String, CdnError> {
        let body = Self::encode(&PushUrlsCacheRequest {
            urls,
            zone_id: self.zone_id_str(),
        })?;
        self.call("PushUrlsCache", body).await
    }
}
