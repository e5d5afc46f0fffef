//! Session token issuance and verification.
//!
//! Tokens are HS256-signed JWTs carrying the user id, username, and an
//! absolute expiration instant. They are never stored server-side;
//! validity is determined solely by signature and expiry. Issuance and
//! verification share one type so secret, algorithm, and claim names
//! cannot drift apart.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use stockroom_core::UserId;

use super::AuthError;
use crate::config::AuthConfig;

/// JWT claims embedded in session tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - user ID (standard JWT `sub` claim).
    pub sub: String,
    /// Username at issuance time.
    pub username: String,
    /// Expiry (unix timestamp).
    pub exp: i64,
    /// Issued at (unix timestamp).
    pub iat: i64,
}

/// Issues and verifies session tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    secret: Option<SecretString>,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create a token issuer from the auth configuration.
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            ttl: config.token_ttl,
        }
    }

    /// Issue a signed token for a user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingSecret`] if no signing secret is
    /// configured, or [`AuthError::TokenSigning`] if encoding fails.
    pub fn issue(&self, user_id: UserId, username: &str) -> Result<String, AuthError> {
        let secret = self.secret.as_ref().ok_or(AuthError::MissingSecret)?;

        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_owned(),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
        };

        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
        )
        .map_err(AuthError::TokenSigning)
    }

    /// Decode and verify a token, checking signature and expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingSecret`] if no signing secret is
    /// configured, or [`AuthError::InvalidToken`] for any malformed,
    /// tampered, or expired token. The failure reason is deliberately
    /// not distinguished.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let secret = self.secret.as_ref().ok_or(AuthError::MissingSecret)?;

        jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn issuer(secret: Option<&str>, ttl: Duration) -> TokenIssuer {
        TokenIssuer::new(&AuthConfig {
            jwt_secret: secret.map(SecretString::from),
            token_ttl: ttl,
        })
    }

    #[test]
    fn test_issue_and_decode_roundtrip() {
        let issuer = issuer(Some("test-signing-secret"), Duration::hours(24));

        let token = issuer.issue(UserId::new(42), "alice").unwrap();
        let claims = issuer.decode(&token).unwrap();

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.username, "alice");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_issue_without_secret_fails() {
        let issuer = issuer(None, Duration::hours(24));

        let result = issuer.issue(UserId::new(1), "alice");
        assert!(matches!(result, Err(AuthError::MissingSecret)));
    }

    #[test]
    fn test_decode_with_wrong_secret_fails() {
        let signer = issuer(Some("secret-one"), Duration::hours(24));
        let verifier = issuer(Some("secret-two"), Duration::hours(24));

        let token = signer.issue(UserId::new(1), "alice").unwrap();
        assert!(matches!(
            verifier.decode(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_decode_expired_token_fails() {
        // Issue a token that expired two hours ago, past any leeway.
        let issuer = issuer(Some("test-signing-secret"), Duration::hours(-2));

        let token = issuer.issue(UserId::new(1), "alice").unwrap();
        assert!(matches!(issuer.decode(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let issuer = issuer(Some("test-signing-secret"), Duration::hours(24));

        assert!(matches!(
            issuer.decode("not-a-token"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_expiry_honors_ttl() {
        let issuer = issuer(Some("test-signing-secret"), Duration::hours(36));

        let token = issuer.issue(UserId::new(1), "alice").unwrap();
        let claims = issuer.decode(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 36 * 60 * 60);
    }
}
