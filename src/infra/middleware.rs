//! Middleware for modifying requests and responses.

use super::error::{ApiResult, ClientError, InternalError};
use axum::{
    body::{Body, HttpBody as _},
    middleware::Next,
    response::IntoResponse,
};
use bytes::Bytes;
use http::{Request, Response};
use http_body_util::BodyExt;
use std::time::Instant;
use tower_http::trace::MakeSpan;

static X_REQUEST_ID: &str = "x-request-id";

/// Creates a span per request, tagged with the request id.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MakeRequestIdSpan;

impl<B> MakeSpan<B> for MakeRequestIdSpan {
    fn make_span(&mut self, request: &Request<B>) -> tracing::Span {
        let request_id = request
            .headers()
            .get(X_REQUEST_ID)
            .and_then(|id| id.to_str().ok())
            .unwrap_or("unknown");
        tracing::info_span!(
            "request",
            request_id = request_id,
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
        )
    }
}

/// The maximum size of a body to log.
const MAX_BODY_SIZE: u64 = 8192;

/// Log the request and response, including small bodies.
pub(crate) async fn log_request_response(
    req: Request<Body>,
    next: Next,
) -> ApiResult<impl IntoResponse> {
    let start = Instant::now();

    let (parts, body) = req.into_parts();
    let req = if is_small(&body) {
        let body_bytes = buffer_and_print("Request", body)
            .await
            .map_err(|e| ClientError::BadRequest(format!("failed to read request body: {e}")))?;
        Request::from_parts(parts, Body::from(body_bytes))
    } else {
        Request::from_parts(parts, body)
    };
    let method = req.method().clone();
    let uri = req.uri().clone();

    let res = next.run(req).await;

    let (parts, body) = res.into_parts();
    let res = if is_small(&body) {
        let body_bytes = buffer_and_print("Response", body)
            .await
            .map_err(|e| InternalError::Other(format!("failed to read response body: {e}")))?;
        Response::from_parts(parts, Body::from(body_bytes))
    } else {
        Response::from_parts(parts, body)
    };

    tracing::debug!(
        %method,
        %uri,
        status = res.status().as_u16(),
        elapsed = ?start.elapsed(),
        "handled request"
    );

    Ok(res)
}

fn is_small(body: &Body) -> bool {
    match body.size_hint().upper() {
        Some(n) => n <= MAX_BODY_SIZE,
        _ => false,
    }
}

/// Read the entire body stream and store it in memory.
async fn buffer_and_print(direction: &str, body: Body) -> Result<Bytes, axum::Error> {
    let body = body.collect().await?.to_bytes();

    if let Ok(body) = std::str::from_utf8(&body) {
        tracing::trace!("{} body = {:?}", direction, body);
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::log_request_response;
    use axum::{
        body::{Body, HttpBody},
        routing::get,
        Router,
    };
    use bytes::Bytes;
    use http::{Request, StatusCode};
    use http_body::{Frame, SizeHint};
    use std::{
        pin::Pin,
        task::{Context, Poll},
    };
    use tower::ServiceExt;

    /// A small body that fails as soon as it is read.
    struct BrokenBody;

    impl HttpBody for BrokenBody {
        type Data = Bytes;
        type Error = std::io::Error;

        fn poll_frame(
            self: Pin<&mut Self>,
            _: &mut Context<'_>,
        ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
            Poll::Ready(Some(Err(std::io::Error::other("broken"))))
        }

        fn size_hint(&self) -> SizeHint {
            SizeHint::with_exact(4)
        }
    }

    fn app() -> Router {
        Router::new()
            .route("/ok", get(|| async { "ok" }))
            .route("/broken", get(|| async { Body::new(BrokenBody) }))
            .layer(axum::middleware::from_fn(log_request_response))
    }

    #[tokio::test]
    async fn small_bodies_pass_through() {
        let req = Request::get("/ok").body(Body::empty()).unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(StatusCode::OK, res.status());
    }

    #[tokio::test]
    async fn unreadable_response_body_gives_500() {
        let req = Request::get("/broken").body(Body::empty()).unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, res.status());
    }
}
