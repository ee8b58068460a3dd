//! Room registry: process-wide cache of room identifiers.
//!
//! Room ids are content hashes of the room and floor labels. The registry
//! memoises them so each location is hashed once. It lives for the whole
//! process and is shared between requests through an `Arc`.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use imperihome_domain::id::RoomId;
use imperihome_domain::room::Location;

/// Memoised `(room, floor)` to [`RoomId`] mapping.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    ids: Mutex<HashMap<Location, RoomId>>,
}

impl RoomRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier of `location`, hashing it on first use.
    pub fn id_for(&self, location: &Location) -> RoomId {
        self.lock()
            .entry(location.clone())
            .or_insert_with(|| location.id())
            .clone()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Location, RoomId>> {
        self.ids.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_same_id_for_same_location() {
        let registry = RoomRegistry::new();
        let kitchen = Location::new(Some("Kitchen"), Some("Ground"));
        assert_eq!(registry.id_for(&kitchen), registry.id_for(&kitchen));
    }

    #[test]
    fn should_match_content_hash() {
        let registry = RoomRegistry::new();
        let id = registry.id_for(&Location::new(Some("Office"), None));
        assert_eq!(id, RoomId::for_location(Some("Office"), None));
    }

    #[test]
    fn should_return_distinct_ids_for_distinct_floors() {
        let registry = RoomRegistry::new();
        let ground = registry.id_for(&Location::new(Some("Hall"), Some("Ground")));
        let first = registry.id_for(&Location::new(Some("Hall"), Some("First")));
        assert_ne!(ground, first);
    }
}
