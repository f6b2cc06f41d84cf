//! A greeting service with axum.

pub mod api;
pub mod app;
pub mod core;
pub mod infra;
