//! `GET /rooms`

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use imperihome_app::ports::DeviceDirectory;
use imperihome_domain::room::Room;

use crate::state::AppState;

/// Body of the room listing.
#[derive(Debug, Serialize)]
pub struct RoomList {
    pub rooms: Vec<Room>,
}

/// `GET /rooms`
pub async fn list<D>(State(state): State<AppState<D>>) -> Json<RoomList>
where
    D: DeviceDirectory + 'static,
{
    Json(RoomList {
        rooms: state.bridge.list_rooms(),
    })
}
