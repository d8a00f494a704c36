//! Signed session tokens (HS256).

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contract::error::MembershipError;
use crate::contract::model::Member;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Member id.
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies session tokens for the auth endpoints.
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
    validation: Validation,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
            validation: Validation::default(),
        }
    }

    pub fn issue(&self, member: &Member) -> Result<String, MembershipError> {
        let now = Utc::now();
        let claims = Claims {
            sub: member.id,
            email: member.email.clone(),
            role: member.role.as_str().to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding).map_err(|e| {
            tracing::error!(error = %e, "token encoding failed");
            MembershipError::Internal
        })
    }

    /// Decode and validate a token. Expired or tampered tokens map to
    /// `InvalidCredentials`.
    pub fn verify(&self, token: &str) -> Result<Claims, MembershipError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| MembershipError::InvalidCredentials)
    }
}
