//! Message limit extractor
//!
//! Extracts the optional `limit` query parameter for `GET /messages`.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw query parameters
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    #[serde(default)]
    pub limit: Option<String>,
}

/// Validated limit: absent, or a positive integer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageLimit(pub Option<usize>);

impl TryFrom<LimitParams> for MessageLimit {
    type Error = ApiError;

    fn try_from(params: LimitParams) -> Result<Self, Self::Error> {
        let Some(raw) = params.limit else {
            return Ok(MessageLimit(None));
        };

        match raw.trim().parse::<usize>() {
            Ok(limit) if limit > 0 => Ok(MessageLimit(Some(limit))),
            _ => Err(ApiError::invalid_query(format!(
                "'limit' must be a positive integer, got '{raw}'"
            ))),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for MessageLimit
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<LimitParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        MessageLimit::try_from(params)
    }
}
