//! Tencent Cloud CDN API wire types.

use serde::{Deserialize, Serialize};

/// `PurgeUrlsCache` request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PurgeUrlsCacheRequest<'a> {
    /// File URLs to purge.
    pub urls: &'a [String],
    /// Zone id for the zone-scoped variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<&'a str>,
}

/// `PurgePathCache` request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PurgePathCacheRequest<'a> {
    /// Path prefixes to purge.
    pub paths: &'a [String],
    /// Purge mode; always `delete` here.
    pub flush_type: &'a str,
    /// Zone id for the zone-scoped variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<&'a str>,
}

/// `PushUrlsCache` request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PushUrlsCacheRequest<'a> {
    /// URLs to push into the edge cache.
    pub urls: &'a [String],
    /// Zone id for the zone-scoped variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<&'a str>,
}

/// Top-level response envelope.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    /// The single response object every action returns.
    #[serde(rename = "Response")]
    pub response: ApiResponse,
}

/// Response payload shared by all three actions.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiResponse {
    /// Vendor correlation token, present on success and on error.
    pub request_id: String,
    /// Vendor error body; absent on success.
    pub error: Option<ApiErrorBody>,
}

/// Vendor error body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiErrorBody {
    /// Vendor error code, e.g. `AuthFailure.SignatureFailure`.
    pub code: String,
    /// Human-readable vendor message.
    pub message: String,
}
