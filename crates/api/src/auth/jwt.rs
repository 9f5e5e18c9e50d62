//! JWT access-token issuance and validation.
//!
//! Access tokens are HS256-signed JWTs containing a [`Claims`] payload.
//! Validation never panics or bubbles a library error: every failure is
//! reported as a [`TokenError`] for the auth extractor to turn into a
//! user-facing rejection.

use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use payroll_core::types::DbId;
use serde::{Deserialize, Serialize};

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// The user's internal database id.
    pub user_id: DbId,
    /// The user's login name at issuance time.
    pub username: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Why a token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,
    #[error("token signature is invalid")]
    BadSignature,
    #[error("token has expired")]
    Expired,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Access token lifetime in minutes (default: 60).
    pub access_token_expiry_mins: i64,
}

/// Default access token expiry in minutes.
pub const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 60;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `JWT_SECRET`               | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS`   | no       | `60`    |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64");

        Self {
            secret,
            access_token_expiry_mins,
        }
    }

    /// Configured access-token lifetime.
    pub fn access_token_ttl(&self) -> Duration {
        Duration::minutes(self.access_token_expiry_mins)
    }
}

/// Issue an HS256 token for the given identity, expiring `ttl` after now.
pub fn issue_token(
    user_id: DbId,
    username: &str,
    ttl: Duration,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        user_id,
        username: username.to_string(),
        exp: now + ttl.num_seconds(),
        iat: now,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Issue an access token using the configured lifetime.
pub fn generate_access_token(
    user_id: DbId,
    username: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    issue_token(user_id, username, config.access_token_ttl(), config)
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Checks the signature and rejects any token whose `exp` is not strictly in
/// the future. No clock leeway is granted.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp"]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature => TokenError::BadSignature,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed,
    })?;

    if token_data.claims.exp <= chrono::Utc::now().timestamp() {
        return Err(TokenError::Expired);
    }

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    /// Helper to build a test config with a known secret.
    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: DEFAULT_ACCESS_EXPIRY_MINS,
        }
    }

    #[test]
    fn test_generate_and_validate_access_token() {
        let config = test_config();
        let token =
            generate_access_token(42, "alice", &config).expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.exp - claims.iat, 60 * 60);
    }

    #[test]
    fn test_zero_ttl_token_is_rejected() {
        let config = test_config();
        let token = issue_token(1, "alice", Duration::zero(), &config)
            .expect("token generation should succeed");

        assert_matches!(validate_token(&token, &config), Err(TokenError::Expired));
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();
        let token = issue_token(1, "alice", Duration::minutes(-5), &config)
            .expect("token generation should succeed");

        assert_matches!(validate_token(&token, &config), Err(TokenError::Expired));
    }

    #[test]
    fn test_different_secrets_fail() {
        let config_a = JwtConfig {
            secret: "secret-alpha".to_string(),
            access_token_expiry_mins: 60,
        };
        let config_b = JwtConfig {
            secret: "secret-bravo".to_string(),
            access_token_expiry_mins: 60,
        };

        let token =
            generate_access_token(1, "user", &config_a).expect("token generation should succeed");

        assert_matches!(
            validate_token(&token, &config_b),
            Err(TokenError::BadSignature)
        );
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let config = test_config();
        assert_matches!(
            validate_token("not.a.jwt", &config),
            Err(TokenError::Malformed)
        );
        assert_matches!(validate_token("", &config), Err(TokenError::Malformed));
    }

    #[test]
    fn test_token_without_identity_claims_is_malformed() {
        let config = test_config();
        let exp = chrono::Utc::now().timestamp() + 600;
        let token = encode(
            &Header::new(Algorithm::HS256),
            &serde_json::json!({ "sub": "someone", "exp": exp }),
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        assert_matches!(validate_token(&token, &config), Err(TokenError::Malformed));
    }
}
