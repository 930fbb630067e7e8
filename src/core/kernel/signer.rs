use crate::core::errors::ExchangeError;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, Secret};
use sha2::Sha512;
use std::time::{SystemTime, UNIX_EPOCH};

type HmacSha512 = Hmac<Sha512>;

/// Signer trait for request authentication
///
/// The signature is computed over the exact serialized body bytes and sent
/// as a header alongside the API key; it never appears in the body itself.
pub trait Signer: Send + Sync {
    /// API key to attach as the identifying header
    fn api_key(&self) -> &str;

    /// Hex-encoded signature over the body bytes
    fn sign(&self, body: &[u8]) -> Result<String, ExchangeError>;
}

/// HMAC-SHA512 signer for the trading API
pub struct HmacSha512Signer {
    api_key: String,
    secret_key: Secret<String>,
}

impl HmacSha512Signer {
    /// Create a new signer from an API key and its secret
    pub fn new(api_key: String, secret_key: String) -> Self {
        Self {
            api_key,
            secret_key: Secret::new(secret_key),
        }
    }
}

impl std::fmt::Debug for HmacSha512Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSha512Signer")
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

impl Signer for HmacSha512Signer {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn sign(&self, body: &[u8]) -> Result<String, ExchangeError> {
        let mut mac = HmacSha512::new_from_slice(self.secret_key.expose_secret().as_bytes())
            .map_err(|e| ExchangeError::Auth(format!("invalid secret key: {e}")))?;
        mac.update(body);
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

/// Monotonic nonce source for authenticated requests.
///
/// The nonce is the wall clock at microsecond resolution: whole seconds
/// concatenated with the six-digit fractional microseconds. The exchange
/// rejects any nonce that does not exceed the last accepted value for the
/// key, so when the clock fails to advance between calls the value is
/// bumped past the previous one instead of reused.
#[derive(Debug, Default)]
pub struct NonceSource {
    last: u64,
}

impl NonceSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Next nonce; strictly greater than every value returned before it
    pub fn next(&mut self) -> Result<u64, ExchangeError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| ExchangeError::Other(format!("system time error: {e}")))?;
        self.last = (now.as_micros() as u64).max(self.last + 1);
        Ok(self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_matches_reference_vector() {
        let signer = HmacSha512Signer::new("key".to_string(), "abc".to_string());
        let sign = signer.sign(b"command=returnBalances&nonce=123456").unwrap();
        assert_eq!(
            sign,
            "9227e3d782ce614f4b9104afa8ad0f6cf3f98b578696a90a5f24b1aec10f3d9206ec11c8ee14ca3bc6948eb25217508f8a57a661388046f2575b959dcd4e6ecf"
        );
    }

    #[test]
    fn signature_is_deterministic() {
        let signer = HmacSha512Signer::new("key".to_string(), "secret".to_string());
        let a = signer.sign(b"command=returnBalances&nonce=1").unwrap();
        let b = signer.sign(b"command=returnBalances&nonce=1").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn debug_redacts_secret() {
        let signer = HmacSha512Signer::new("key".to_string(), "hunter2".to_string());
        let rendered = format!("{:?}", signer);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn nonces_strictly_increase() {
        let mut source = NonceSource::new();
        let mut last = 0;
        for _ in 0..1000 {
            let nonce = source.next().unwrap();
            assert!(nonce > last);
            last = nonce;
        }
    }

    #[test]
    fn nonce_tracks_microsecond_wall_clock() {
        let mut source = NonceSource::new();
        let nonce = source.next().unwrap();
        let now_micros = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_micros() as u64;
        // Within a generous window of the current clock reading.
        assert!(nonce <= now_micros + 1_000_000);
        assert!(nonce >= now_micros - 60_000_000);
    }
}
