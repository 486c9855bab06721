//! Request signing for the payment history API.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{EngineError, EngineResult};

type HmacSha256 = Hmac<Sha256>;

/// Signs a request path with the shared application secret.
///
/// The signature is the lowercase hex HMAC-SHA256 of the path, including
/// its query string, keyed by the secret.
///
/// # Examples
///
/// ```
/// use settlement_engine::payments::sign_request_path;
///
/// let signature = sign_request_path("secret", "/v1/api/payments/history").unwrap();
/// assert_eq!(signature.len(), 64);
/// ```
pub fn sign_request_path(secret: &str, request_path: &str) -> EngineResult<String> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|e| EngineError::PaymentsRequest {
            message: format!("cannot initialise request signer: {}", e),
        })?;
    mac.update(request_path.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}
