//! Error types for storefront-server
//!
//! `StoreError` covers the persistence layer. `ApiError` is the closed set of
//! failures a handler can surface; its status code is chosen here and nowhere
//! else. Bodies are bare JSON strings, e.g. `"user does not exist"`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed path parameter or create body (400)
    #[error("{0}")]
    BadRequest(String),

    /// Lookup miss (400)
    #[error("{0}")]
    NotFound(String),

    /// Malformed update body (500)
    #[error("{0}")]
    Deserialization(String),

    /// Store failure (500, logged)
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::NotFound(_) => StatusCode::BAD_REQUEST,
            ApiError::Deserialization(_) | ApiError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ApiError::Store(e) => tracing::error!("Store error: {}", e),
            ApiError::Deserialization(msg) => tracing::warn!("Unreadable update body: {}", msg),
            _ => tracing::debug!(%status, "Request rejected: {}", self),
        }

        (status, Json(self.to_string())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn not_found_is_400_with_string_body() {
        let response = ApiError::NotFound("user does not exist".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#""user does not exist""#);
    }

    #[test]
    fn deserialization_is_500() {
        let err = ApiError::Deserialization("expected value".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn store_errors_map_to_500() {
        let err = ApiError::from(StoreError::from(sqlx::Error::PoolClosed));
        assert!(matches!(err, ApiError::Store(StoreError::Sqlx(_))));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
