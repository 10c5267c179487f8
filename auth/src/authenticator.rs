use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Token lifetime used when none is configured: 72000 seconds (20 hours).
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 72_000;

/// Authentication coordinator combining password verification and JWT generation.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl: Duration,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create an authenticator issuing tokens with the default lifetime.
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self::with_ttl(jwt_secret, Duration::seconds(DEFAULT_TOKEN_TTL_SECONDS))
    }

    /// Create an authenticator issuing tokens valid for `token_ttl`.
    pub fn with_ttl(jwt_secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            token_ttl,
        }
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Hash a password for storage.
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored hash. Malformed hashes never match.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue a token for the user.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: impl ToString,
        username: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.verify_password(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.issue_token(user_id, username)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a token with the configured lifetime.
    pub fn issue_token(&self, user_id: impl ToString, username: &str) -> Result<String, JwtError> {
        self.issue_token_with_ttl(user_id, username, self.token_ttl)
    }

    /// Issue a token valid for `ttl`. A negative `ttl` yields an expired token.
    pub fn issue_token_with_ttl(
        &self,
        user_id: impl ToString,
        username: &str,
        ttl: Duration,
    ) -> Result<String, JwtError> {
        self.jwt_handler
            .encode(&Claims::for_user(user_id, username, ttl))
    }

    /// Validate and decode a token.
    ///
    /// # Errors
    /// * `Expired` - Token lifetime has passed
    /// * `Invalid` - Token is malformed or its signature does not verify
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}
