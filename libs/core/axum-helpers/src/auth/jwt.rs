use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Claims carried by every access token. `sub` is the user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

/// Issues and verifies HS256 access tokens.
///
/// Cheap to clone; keys are shared.
#[derive(Clone)]
pub struct JwtAuth {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
    ttl_secs: i64,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        tracing::info!(ttl_secs = config.ttl_secs, "JWT auth initialized");
        Self {
            encoding: Arc::new(EncodingKey::from_secret(config.secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(config.secret.as_bytes())),
            ttl_secs: config.ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    pub fn create_token(&self, user_id: &str, email: &str, name: &str) -> eyre::Result<String> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            exp: (now + Duration::seconds(self.ttl_secs)).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Check signature and expiry, returning the decoded claims.
    pub fn verify_token(&self, token: &str) -> eyre::Result<JwtClaims> {
        let data = decode::<JwtClaims>(token, &self.decoding, &Validation::new(Algorithm::HS256))?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(secret: &str, ttl_secs: i64) -> JwtAuth {
        JwtAuth::new(&JwtConfig {
            secret: secret.to_string(),
            ttl_secs,
        })
    }

    #[test]
    fn test_create_and_verify_token() {
        let auth = auth("this-is-a-valid-secret-with-32-chars!", 3600);
        let token = auth
            .create_token("0192f0c1-5b7e-7cc3-a1de-5d3f4e6a7b8c", "ana@example.com", "Ana")
            .unwrap();

        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "0192f0c1-5b7e-7cc3-a1de-5d3f4e6a7b8c");
        assert_eq!(claims.email, "ana@example.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let issuer = auth("this-is-a-valid-secret-with-32-chars!", 3600);
        let verifier = auth("a-completely-different-secret-of-32+", 3600);

        let token = issuer.create_token("u1", "ana@example.com", "Ana").unwrap();
        assert!(verifier.verify_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Past the default 60s leeway.
        let auth = auth("this-is-a-valid-secret-with-32-chars!", -120);
        let token = auth.create_token("u1", "ana@example.com", "Ana").unwrap();
        assert!(auth.verify_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let auth = auth("this-is-a-valid-secret-with-32-chars!", 3600);
        assert!(auth.verify_token("not.a.jwt").is_err());
    }
}
