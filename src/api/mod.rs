use axum::Router;

use crate::infra::state::AppState;

pub mod hello;
pub mod info;

/// Constructs the full REST API.
pub fn api(state: AppState) -> Router {
    Router::new()
        .merge(info::info_api::routes())
        .merge(hello::hello_api::routes())
        .with_state(state)
}
