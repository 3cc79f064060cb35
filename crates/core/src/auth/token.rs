//! JWT issuing and verification
//!
//! Tokens are stateless: identity and expiry live in the signed claims and
//! nothing is persisted or revoked server-side.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Claims embedded in an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id, stringified
    pub sub: String,
    pub email: String,
    pub exp: usize,
}

/// HS256 token signer with a fixed time-to-live
#[derive(Clone)]
pub struct TokenSigner {
    secret: String,
    ttl_seconds: i64,
}

impl TokenSigner {
    pub fn new(secret: impl Into<String>, ttl_seconds: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_seconds,
        }
    }

    /// Issue a token for the given user, returning it with its expiry timestamp
    pub fn issue(&self, user_id: i64, email: &str) -> Result<(String, usize)> {
        let exp = (Utc::now() + Duration::seconds(self.ttl_seconds)).timestamp();
        let exp = usize::try_from(exp)
            .map_err(|_| Error::Storage("failed to encode token expiration".to_string()))?;
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            exp,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map(|token| (token, exp))
        .map_err(|err| Error::Storage(format!("failed to sign token: {err}")))
    }

    /// Decode a token, validating signature and expiry.
    ///
    /// Any failure collapses to the authentication error so callers cannot
    /// distinguish a bad signature from an expired token.
    pub fn decode(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map(|decoded| decoded.claims)
        .map_err(|_| Error::Authentication)
    }
}
