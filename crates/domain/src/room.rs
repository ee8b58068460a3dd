//! Room: a location label the client groups devices by.

use serde::{Deserialize, Serialize};

use crate::id::RoomId;

/// Name shown for devices without room or floor.
pub const UNSET_ROOM_NAME: &str = "(not set)";

/// A room as listed by `GET /rooms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
}

/// The raw room and floor labels of a device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Location {
    pub room: Option<String>,
    pub floor: Option<String>,
}

impl Location {
    #[must_use]
    pub fn new(room: Option<&str>, floor: Option<&str>) -> Self {
        Self {
            room: room.map(str::to_string),
            floor: floor.map(str::to_string),
        }
    }

    /// Display name: `"<floor> <room>"`, either part alone, or `None` when
    /// both labels are empty.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        let floor = self.floor.as_deref().unwrap_or_default();
        let room = self.room.as_deref().unwrap_or_default();
        match (floor.is_empty(), room.is_empty()) {
            (true, true) => None,
            (false, true) => Some(floor.to_string()),
            (true, false) => Some(room.to_string()),
            (false, false) => Some(format!("{floor} {room}")),
        }
    }

    /// Identifier of this location.
    #[must_use]
    pub fn id(&self) -> RoomId {
        RoomId::for_location(self.room.as_deref(), self.floor.as_deref())
    }
}
