//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;

use imperihome_app::ports::DeviceDirectory;

use crate::error::ApiError;
use crate::state::AppState;

/// The router wrapped in path normalization.
pub type App = NormalizePath<Router>;

/// Build the top-level axum [`Router`], wrapped so that leading and trailing
/// slashes are trimmed before routing (`//devices/` is served as `/devices`).
///
/// Merges the protocol routes with a health probe and a plain-text `404`
/// fallback. Includes a [`TraceLayer`] that logs each HTTP request/response
/// at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<D>(state: AppState<D>) -> App
where
    D: DeviceDirectory + 'static,
{
    let router = Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes::<D>())
        .fallback(path_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state);
    NormalizePath::trim_trailing_slash(router)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn path_not_found() -> ApiError {
    ApiError::PathNotFound
}
