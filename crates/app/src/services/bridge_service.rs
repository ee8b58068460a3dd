//! Bridge service: the use-cases the client transport calls.

use std::sync::Arc;

use imperihome_domain::device::ClientDevice;
use imperihome_domain::error::{BridgeError, NotFoundError, UnsupportedError};
use imperihome_domain::id::DeviceId;
use imperihome_domain::room::{Location, Room, UNSET_ROOM_NAME};
use imperihome_domain::system::SystemInfo;

use crate::ports::{DeviceDirectory, HomeDevice};
use crate::projector::Projector;
use crate::room_registry::RoomRegistry;

/// Translates between a [`DeviceDirectory`] and the client's device model.
pub struct BridgeService<D> {
    directory: D,
    rooms: Arc<RoomRegistry>,
    system: SystemInfo,
}

impl<D: DeviceDirectory> BridgeService<D> {
    /// Create a new service over `directory`, sharing the given room registry.
    pub fn new(directory: D, rooms: Arc<RoomRegistry>) -> Self {
        Self {
            directory,
            rooms,
            system: SystemInfo::default(),
        }
    }

    /// The underlying device directory.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Every device the client can represent, with its current parameters.
    ///
    /// Devices whose kind has no client type are skipped. A device that
    /// cannot be read is listed with an empty parameter list.
    #[tracing::instrument(skip(self))]
    pub fn list_devices(&self) -> Vec<ClientDevice> {
        self.directory
            .devices()
            .into_iter()
            .filter_map(|device| {
                let client_type = device.kind().client_type()?;
                let params = Projector::for_type(client_type).get(device);
                Some(ClientDevice {
                    id: device.id().clone(),
                    name: device.name().to_string(),
                    room: self.rooms.id_for(&device.location()),
                    client_type,
                    params,
                })
            })
            .collect()
    }

    /// Apply the client action `action` with argument `raw` to device `id`.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::NotFound`] for an unknown id,
    /// [`BridgeError::Unsupported`] when the device kind has no client type
    /// or its type is read-only, and the projector's error when the command
    /// could not be applied.
    #[tracing::instrument(skip(self))]
    pub fn set_device_parameter(
        &self,
        id: &DeviceId,
        action: &str,
        raw: &str,
    ) -> Result<(), BridgeError> {
        let device = self.directory.find(id).ok_or_else(|| NotFoundError {
            entity: "Device",
            id: id.to_string(),
        })?;
        let client_type = device
            .kind()
            .client_type()
            .ok_or_else(|| UnsupportedError::UnmappedKind(device.kind().to_string()))?;
        let projector = Projector::for_type(client_type);
        if !projector.accepts_commands() {
            return Err(UnsupportedError::ReadOnly(client_type.as_str()).into());
        }
        projector
            .try_set(device, action, raw)
            .inspect(|_| tracing::debug!(device_id = %id, action, raw, "command applied"))
            .inspect_err(|err| {
                tracing::warn!(device_id = %id, action, raw, error = %err, "command rejected");
            })
    }

    /// Boolean form of [`set_device_parameter`](Self::set_device_parameter).
    pub fn command_applied(&self, id: &DeviceId, action: &str, raw: &str) -> bool {
        self.set_device_parameter(id, action, raw).is_ok()
    }

    /// Rooms of the listed devices, in order of first appearance.
    ///
    /// Devices without room and floor share the `"(not set)"` room.
    #[tracing::instrument(skip(self))]
    pub fn list_rooms(&self) -> Vec<Room> {
        let mut named: Vec<(String, Location)> = Vec::new();
        for device in self.directory.devices() {
            if device.kind().client_type().is_none() {
                continue;
            }
            let location = device.location();
            let (name, location) = match location.display_name() {
                Some(name) => (name, location),
                None => (UNSET_ROOM_NAME.to_string(), Location::default()),
            };
            match named.iter_mut().find(|(existing, _)| *existing == name) {
                Some(entry) => entry.1 = location,
                None => named.push((name, location)),
            }
        }
        named
            .into_iter()
            .map(|(name, location)| Room {
                id: self.rooms.id_for(&location),
                name,
            })
            .collect()
    }

    /// Fixed identity of the bridge.
    pub fn system_info(&self) -> SystemInfo {
        self.system.clone()
    }
}
