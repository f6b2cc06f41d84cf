//! Custom axum extractors.

use super::error::ClientError;
use axum::{async_trait, extract::FromRequestParts, response::IntoResponse};
use http::request::Parts;
use serde::{de::DeserializeOwned, Serialize};

/// A custom JSON response type, the counterpart of [`Query`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> axum::response::Response {
        axum::extract::Json(self.0).into_response()
    }
}

/// A custom Query extractor since axum's does not let us customize the response.
#[derive(Debug, Clone, Copy, Default)]
pub struct Query<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ClientError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let res = axum::extract::Query::from_request_parts(parts, state).await?;
        Ok(Query(res.0))
    }
}
