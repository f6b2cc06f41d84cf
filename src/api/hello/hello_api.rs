//! Implementation of the hello API. An API that returns a greeting based on a query parameter.

use crate::core::greeting::greeting_service::Greeting;
use crate::core::person::Person;
use crate::infra::{
    extract::{Json, Query},
    state::AppState,
};
use axum::{extract::State, routing::get, Router};
use serde::Deserialize;
use std::fmt::Debug;
use tracing::instrument;
use utoipa::IntoParams;

/// The hello API endpoints.
pub fn routes() -> Router<AppState> {
    Router::new().route("/hello", get(hello))
}

/// A name query parameter.
#[derive(Deserialize, IntoParams)]
pub struct Name {
    /// Who to greet. Defaults to the configured default name.
    name: Option<String>,
}

impl Debug for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.name.fmt(f)
    }
}

/// A handler for requests to the hello endpoint.
#[utoipa::path(
    get,
    path = "/api/hello",
    params(Name),
    responses(
        (status = 200, description = "Success", body = Greeting),
        (status = 400, description = "Malformed query", body = crate::infra::error::ErrorBody),
    )
)]
#[instrument(skip(state))]
pub async fn hello(State(state): State<AppState>, Query(name): Query<Name>) -> Json<Greeting> {
    let name = name
        .name
        .unwrap_or_else(|| state.config().greeting.default_name.clone());
    Json(state.greeting().greet(Person::new(name)))
}
