//! ImperiHome protocol handler modules.

pub mod devices;
pub mod rooms;
pub mod system;

use axum::Router;
use axum::routing::any;

use imperihome_app::ports::DeviceDirectory;

use crate::state::AppState;

/// Build the protocol sub-router.
///
/// The client ignores the request method, and trailing segments on `/system`
/// and `/rooms`, so every method is routed and those two also answer below
/// their own path.
pub fn routes<D>() -> Router<AppState<D>>
where
    D: DeviceDirectory + 'static,
{
    Router::new()
        .route("/system", any(system::get::<D>))
        .route("/system/{*rest}", any(system::get::<D>))
        .route("/rooms", any(rooms::list::<D>))
        .route("/rooms/{*rest}", any(rooms::list::<D>))
        .route("/devices", any(devices::list::<D>))
        .route("/devices/{*rest}", any(devices::dispatch::<D>))
}
