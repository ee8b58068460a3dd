//! `GET /system`

use axum::Json;
use axum::extract::State;

use imperihome_app::ports::DeviceDirectory;
use imperihome_domain::system::SystemInfo;

use crate::state::AppState;

/// `GET /system`
pub async fn get<D>(State(state): State<AppState<D>>) -> Json<SystemInfo>
where
    D: DeviceDirectory + 'static,
{
    Json(state.bridge.system_info())
}
