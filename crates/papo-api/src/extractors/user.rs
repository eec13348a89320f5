//! Requesting user extractor
//!
//! Reads the participant name from the `user` header. The name is trusted
//! as given; there is no authentication.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::response::ApiError;

/// Header carrying the requesting participant's name
pub const USER_HEADER: &str = "user";

/// Participant name taken from the `user` header, trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestingUser(pub String);

impl RequestingUser {
    pub fn name(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestingUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let name = parts
            .headers
            .get(USER_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(ApiError::MissingUser)?;

        Ok(RequestingUser(name.to_string()))
    }
}
