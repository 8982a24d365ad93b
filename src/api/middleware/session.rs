//! Session token extraction

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::api::types::ApiError;

/// Extractor carrying the session token from the `Authorization` header.
///
/// The header value may be the raw token or `Bearer <token>`; it is handed
/// to the account service untouched, which strips the prefix itself. The
/// extractor cannot resolve the account on its own because the account id
/// arrives separately in the path or query.
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_session_token(&parts.headers)?;
        Ok(SessionToken(token))
    }
}

/// Extract the session token value from the Authorization header
pub fn extract_session_token(headers: &axum::http::HeaderMap) -> Result<String, ApiError> {
    let Some(auth_header) = headers.get(header::AUTHORIZATION) else {
        return Err(ApiError::unauthorized(
            "Authentication required. Provide the session token via the 'Authorization' header",
        ));
    };

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::bad_request("Invalid Authorization header encoding"))?;

    if auth_str.trim().is_empty() {
        return Err(ApiError::unauthorized(
            "Authentication required. The 'Authorization' header is empty",
        ));
    }

    Ok(auth_str.to_string())
}
