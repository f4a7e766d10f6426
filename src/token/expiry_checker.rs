use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
struct ExpiryClaims {
    // NumericDate, which may carry a fraction of a second
    exp: Option<f64>,
}

/// Inspects the `exp` claim of a JWT.
///
/// The signature is **not** verified, the `alg` header is not interpreted, and
/// `nbf`, `iss` and `aud` are ignored. Use this to decide whether a token is
/// worth presenting or refreshing, never to decide whether it can be trusted.
#[derive(Debug, Clone, Default)]
pub struct ExpiryChecker {
    leeway: u64,
}

impl ExpiryChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds a token is still accepted after its `exp` instant. Defaults to `0`.
    pub fn leeway(mut self, leeway: u64) -> Self {
        self.leeway = leeway;
        self
    }

    fn decode_segment(segment: &str) -> Result<Vec<u8>, ExpiryError> {
        URL_SAFE_NO_PAD
            .decode(segment.trim_end_matches('='))
            .map_err(ExpiryError::Base64)
    }

    fn claims(token: &str) -> Result<ExpiryClaims, ExpiryError> {
        let segments: Vec<&str> = token.split('.').collect();
        let [header, payload, _signature] = segments.as_slice() else {
            return Err(ExpiryError::Segments {
                count: segments.len(),
            });
        };

        serde_json::from_slice::<Map<String, Value>>(&Self::decode_segment(header)?)
            .map_err(ExpiryError::Json)?;

        serde_json::from_slice(&Self::decode_segment(payload)?).map_err(ExpiryError::Json)
    }

    fn to_instant(exp: f64) -> Result<DateTime<Utc>, ExpiryError> {
        let secs = exp.floor();

        if !secs.is_finite() || secs < i64::MIN as f64 || secs >= i64::MAX as f64 {
            return Err(ExpiryError::OutOfRange { exp });
        }

        let nanos = (((exp - secs) * 1e9) as u32).min(999_999_999);

        DateTime::from_timestamp(secs as i64, nanos).ok_or(ExpiryError::OutOfRange { exp })
    }

    /// Decodes the expiry instant of `token`.
    pub fn expires_at(&self, token: &str) -> Result<DateTime<Utc>, ExpiryError> {
        let exp = Self::claims(token)?.exp.ok_or(ExpiryError::MissingExp)?;

        Self::to_instant(exp)
    }

    /// Whether `token` expired before `now`, allowing for the leeway.
    ///
    /// A token that cannot be decoded counts as expired.
    pub fn is_expired_at(&self, token: &str, now: DateTime<Utc>) -> bool {
        let expires_at = match self.expires_at(token) {
            Ok(expires_at) => expires_at,
            Err(err) => {
                tracing::debug!(%err, "Treating undecodable token as expired");

                return true;
            }
        };

        let deadline = i64::try_from(self.leeway)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .and_then(|leeway| expires_at.checked_add_signed(leeway));

        // A leeway too large to represent never expires
        match deadline {
            Some(deadline) => deadline < now,
            None => false,
        }
    }

    #[tracing::instrument(skip_all)]
    pub fn is_expired(&self, token: &str) -> bool {
        self.is_expired_at(token, Utc::now())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExpiryError {
    #[error("Token has {count} segments, expected 3")]
    Segments { count: usize },
    #[error("Token segment base64 decode error: {0}")]
    Base64(#[source] base64::DecodeError),
    #[error("Token segment json error: {0}")]
    Json(#[source] serde_json::Error),
    #[error("Token has no exp claim")]
    MissingExp,
    #[error("Expiry claim out of range: {exp}")]
    OutOfRange { exp: f64 },
}
