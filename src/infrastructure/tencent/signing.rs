//! TC3-HMAC-SHA256 request signing.
//!
//! Implements the vendor's signature v3 scheme: a canonical request is
//! hashed into a string-to-sign, which is signed with a key derived from
//! the secret through a date/service HMAC chain.

use chrono::DateTime;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::domain::entities::Credentials;
use crate::domain::errors::CdnError;

type HmacSha256 = Hmac<Sha256>;

/// Signature algorithm identifier.
pub const ALGORITHM: &str = "TC3-HMAC-SHA256";

/// Content type every signed request carries.
pub const CONTENT_TYPE: &str = "application/json; charset=utf-8";

const SIGNED_HEADERS: &str = "content-type;host";

/// Builds the `Authorization` header value for one POST request.
///
/// `timestamp` is the same Unix timestamp sent in `X-TC-Timestamp`; the
/// credential scope date is derived from it in UTC.
///
/// # Errors
/// Returns `Unexpected` if HMAC key setup fails.
pub fn authorization(
    credentials: &Credentials,
    host: &str,
    service: &str,
    payload: &str,
    timestamp: i64,
) -> Result<String, CdnError> {
    let date = DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "1970-01-01".to_string());

    let canonical_request = format!(
        "POST\n/\n\ncontent-type:{CONTENT_TYPE}\nhost:{host}\n\n{SIGNED_HEADERS}\n{}",
        sha256_hex(payload)
    );

    let credential_scope = format!("{date}/{service}/tc3_request");
    let string_to_sign = format!(
        "{ALGORITHM}\n{timestamp}\n{credential_scope}\n{}",
        sha256_hex(&canonical_request)
    );

    let secret_date = hmac_bytes(
        format!("TC3{}", credentials.secret_key()).as_bytes(),
        date.as_bytes(),
    )?;
    let secret_service = hmac_bytes(&secret_date, service.as_bytes())?;
    let secret_signing = hmac_bytes(&secret_service, b"tc3_request")?;
    let signature = hex::encode(hmac_bytes(&secret_signing, string_to_sign.as_bytes())?);

    Ok(format!(
        "{ALGORITHM} Credential={}/{credential_scope}, SignedHeaders={SIGNED_HEADERS}, Signature={signature}",
        credentials.secret_id()
    ))
}

fn sha256_hex(data: &str) -> String {
    hex::encode(Sha256::digest(data.as_bytes()))
}

fn hmac_bytes(key: &[u8], data: &[u8]) -> Result<Vec<u8>, CdnError> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| CdnError::unexpected(format!("HMAC error: {e}")))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}
