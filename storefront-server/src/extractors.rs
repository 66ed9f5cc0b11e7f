//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::ApiError;

pub const INVALID_ID_MESSAGE: &str = "please ensure that :id is an integer";

/// Integer `{id}` path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdParam(pub i64);

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::BadRequest(INVALID_ID_MESSAGE.into()))?;

        let id = raw
            .parse::<i64>()
            .map_err(|_| ApiError::BadRequest(INVALID_ID_MESSAGE.into()))?;

        Ok(Self(id))
    }
}
