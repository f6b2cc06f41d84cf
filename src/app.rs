//! The axum application.
//!
//! # Examples
//!
//! Hello API.
//!
//! ```rust
//! # use axum_hello::core::greeting::greeting_service::Greeting;
//! # tokio_test::block_on(async {
//! # let url = axum_hello::app::spawn_app().await.unwrap();
//! let response = reqwest::get(format!("{}/hello", url)).await.unwrap();
//! assert_eq!(200, response.status());
//! assert_eq!(Greeting::new("World".to_string()), response.json::<Greeting>().await.unwrap());
//! # });
//! ```
//!
//! Hello API with name.
//!
//! ```rust
//! # use axum_hello::core::greeting::greeting_service::Greeting;
//! # tokio_test::block_on(async {
//! # let url = axum_hello::app::spawn_app().await.unwrap();
//! let response = reqwest::get(format!("{}/hello?name=Foo", url)).await.unwrap();
//! assert_eq!(200, response.status());
//! assert_eq!(r#"{"content":"Foo"}"#, response.text().await.unwrap());
//! # });
//! ```

use std::iter;

use crate::infra::error::{ClientError, InternalError, PanicHandler};
use crate::infra::middleware::{log_request_response, MakeRequestIdSpan};
use crate::infra::openapi::ApiDoc;
use crate::infra::shutdown::shutdown_signal;
use crate::infra::{config::Config, state::AppState};
use axum::error_handling::HandleErrorLayer;
use axum::response::IntoResponse;
use axum::Router;
use http::header::AUTHORIZATION;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

/// Constructs the full axum application.
pub fn app(state: AppState) -> Router {
    let server = &state.config().server;

    // Fallible middleware from tower, mapped to infallible response with [`HandleErrorLayer`].
    let tower_middleware = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(|e| async move {
            InternalError::Other(format!("Tower middleware failed: {e}")).into_response()
        }))
        .concurrency_limit(server.concurrency_limit);

    // The full application with docs and a REST API.
    Router::new()
        .merge(SwaggerUi::new("/api/swagger-ui").url("/api/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/api/redoc", ApiDoc::openapi()))
        .merge(RapiDoc::new("/api/openapi.json").path("/api/rapidoc"))
        .nest("/api", crate::api::api(state.clone()))
        .fallback(|| async { ClientError::NotFound })
        // Layers
        .layer(TimeoutLayer::new(server.request_timeout))
        .layer(axum::middleware::from_fn(log_request_response))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(MakeRequestIdSpan)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(()),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(SetSensitiveRequestHeadersLayer::new(iter::once(
            AUTHORIZATION,
        )))
        .layer(tower_middleware)
        .layer(CatchPanicLayer::custom(PanicHandler))
}

/// Starts the axum server, running until a shutdown signal is received.
pub async fn run_app(listener: TcpListener, config: Config) -> std::io::Result<()> {
    let state = AppState::new(config);
    let app = app(state).into_make_service();

    tracing::info!("Starting axum on {}", listener.local_addr()?);
    let exit_result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    match &exit_result {
        Ok(_) => tracing::info!("Successfully shut down"),
        Err(e) => tracing::error!("Shutdown failed: {}", e),
    }

    exit_result
}

/// Spawn a server on a random port, returning the base url of the API.
pub async fn spawn_app() -> color_eyre::Result<String> {
    let config = crate::infra::config::load_config()?;
    let address = "127.0.0.1";
    let listener = TcpListener::bind(format!("{address}:0")).await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(run_app(listener, config));
    Ok(format!("http://{address}:{port}/api"))
}
