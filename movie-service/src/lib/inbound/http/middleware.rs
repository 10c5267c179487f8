use auth::Authenticator;
use auth::JwtError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use thiserror::Error;

use crate::domain::user::models::Identity;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// The only message a client ever sees for a rejected token.
pub const INVALID_AUTHENTICATION_DETAIL: &str = "Invalid authentication credentials";

/// Why a request could not be authenticated. Logged, never returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("missing Authorization header")]
    MissingHeader,

    #[error("Authorization header is not a bearer credential")]
    MalformedHeader,

    #[error("token rejected: {0}")]
    Token(#[from] JwtError),

    #[error("token carries an invalid user id: {0}")]
    InvalidUserId(String),
}

/// Resolve the caller from the `Authorization: Bearer <token>` header.
///
/// Every protected route goes through this one path; handlers only ever see
/// the resulting [`Identity`].
pub fn resolve_identity(
    headers: &HeaderMap,
    authenticator: &Authenticator,
) -> Result<Identity, IdentityError> {
    let token = bearer_token(headers)?;
    let claims = authenticator.validate_token(token)?;

    let user_id = UserId::from_string(claims.user_id())
        .map_err(|_| IdentityError::InvalidUserId(claims.user_id().to_string()))?;

    Ok(Identity {
        user_id,
        username: claims.subject().to_string(),
    })
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, IdentityError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(IdentityError::MissingHeader)?
        .to_str()
        .map_err(|_| IdentityError::MalformedHeader)?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
            Ok(token.trim())
        }
        _ => Err(IdentityError::MalformedHeader),
    }
}

/// Middleware that rejects unauthenticated requests and adds the caller's
/// [`Identity`] to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = resolve_identity(req.headers(), &state.authenticator).map_err(|e| {
        tracing::warn!(
            method = %req.method(),
            uri = %req.uri(),
            reason = %e,
            "Rejected unauthenticated request"
        );
        ApiError::Unauthorized(INVALID_AUTHENTICATION_DETAIL.to_string())
    })?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
