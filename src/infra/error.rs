//! Types for reporting errors that happened during a request.
//!
//! Handlers and middleware that can fail return an [`ApiResult`].

use super::extract::Json;
use axum::{extract::rejection::QueryRejection, http::HeaderValue, response::IntoResponse};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tower_http::catch_panic::ResponseForPanic;
use utoipa::ToSchema;

/// A standard error response body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// A description of the error.
    message: String,
    /// When the error happened.
    #[serde(with = "time::serde::rfc3339")]
    timestamp: OffsetDateTime,
}

impl ErrorBody {
    pub(crate) fn new(message: String) -> Self {
        Self {
            message,
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    /// The error message.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// When the error happened.
    pub fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }
}

/// An error from our API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// An error caused by the client.
    #[error("{0}")]
    ClientError(#[from] ClientError),
    /// An internal error.
    #[error("{0}")]
    InternalError(#[from] InternalError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::ClientError(e) => e.into_response(),
            ApiError::InternalError(e) => e.into_response(),
        }
    }
}

/// The result of calling API-related functions.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors caused by the client.
/// The client can do something to fix these.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Some illegal input was given.
    #[error("{0}")]
    BadRequest(String),
    /// The resource was not found.
    #[error("not found")]
    NotFound,
    /// Custom error.
    #[error("{1}")]
    Custom(StatusCode, String),
}

impl From<QueryRejection> for ClientError {
    fn from(value: QueryRejection) -> Self {
        ClientError::Custom(value.status(), value.body_text())
    }
}

impl IntoResponse for ClientError {
    fn into_response(self) -> axum::response::Response {
        let msg = self.to_string();
        let status = match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Custom(status, _) => status,
        };
        (status, Json(ErrorBody::new(msg))).into_response()
    }
}

/// An internal error.
/// The client cannot do anything about this.
#[derive(Debug, thiserror::Error)]
pub enum InternalError {
    /// Other miscellaneous errors.
    #[error("{0}")]
    Other(String),
}

impl IntoResponse for InternalError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("internal error: {}", self);
        let mut response = (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new("internal error".to_string())),
        )
            .into_response();
        response
            .headers_mut()
            .insert("Retry-After", HeaderValue::from_static("5"));
        response
    }
}

/// A handler for converting panics into proper responses for the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanicHandler;

impl ResponseForPanic for PanicHandler {
    type ResponseBody = axum::body::Body;

    fn response_for_panic(
        &mut self,
        _: Box<dyn std::any::Any + Send + 'static>,
    ) -> http::Response<Self::ResponseBody> {
        ApiError::InternalError(InternalError::Other("Panic".to_string())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::{ClientError, ErrorBody, InternalError, PanicHandler};
    use axum::response::IntoResponse;
    use http::StatusCode;
    use http_body_util::BodyExt;
    use time::OffsetDateTime;
    use tower_http::catch_panic::ResponseForPanic;

    async fn body(response: axum::response::Response) -> ErrorBody {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_gives_404() {
        let before = OffsetDateTime::now_utc();
        let response = ClientError::NotFound.into_response();
        let after = OffsetDateTime::now_utc();
        assert_eq!(StatusCode::NOT_FOUND, response.status());
        let body = body(response).await;
        assert_eq!("not found", body.message());
        assert!(before <= body.timestamp() && body.timestamp() <= after);
    }

    #[tokio::test]
    async fn custom_error_keeps_status_and_message() {
        let response =
            ClientError::Custom(StatusCode::IM_A_TEAPOT, "short and stout".to_string())
                .into_response();
        assert_eq!(StatusCode::IM_A_TEAPOT, response.status());
        assert_eq!("short and stout", body(response).await.message());
    }

    #[tokio::test]
    async fn internal_error_hides_details() {
        let response = InternalError::Other("secret".to_string()).into_response();
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status());
        assert_eq!("5", response.headers()["Retry-After"]);
        assert_eq!("internal error", body(response).await.message());
    }

    #[tokio::test]
    async fn panic_gives_500() {
        let response = PanicHandler.response_for_panic(Box::new("boom"));
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status());
    }
}
