use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an access token.
///
/// The payload is a fixed record: `sub` is the username, `id` the user
/// identifier and `exp` the expiry as a Unix timestamp. Decoding fails if any
/// of them is missing, so callers never probe for optional keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// User identifier
    pub id: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user that expire `ttl` from now.
    ///
    /// A negative `ttl` yields claims that are already expired.
    pub fn for_user(user_id: impl ToString, username: impl Into<String>, ttl: Duration) -> Self {
        Self::for_user_at(user_id, username, ttl, Utc::now())
    }

    /// Same as [`for_user`](Self::for_user) with an explicit issue time.
    pub fn for_user_at(
        user_id: impl ToString,
        username: impl Into<String>,
        ttl: Duration,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sub: username.into(),
            id: user_id.to_string(),
            exp: (issued_at + ttl).timestamp(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.sub
    }

    pub fn user_id(&self) -> &str {
        &self.id
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Check if the claims are expired at `current_timestamp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
