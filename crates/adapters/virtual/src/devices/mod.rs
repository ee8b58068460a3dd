//! Virtual device: a named bag of values with metadata.
//!
//! Values live behind a mutex so commands can update them through a shared
//! reference, the way a host application would.

pub(crate) mod demo;

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use imperihome_app::ports::HomeDevice;
use imperihome_domain::device::DeviceKind;
use imperihome_domain::error::{BridgeError, ValueError};
use imperihome_domain::id::DeviceId;
use imperihome_domain::value::{Value, ValueMeta};

#[derive(Debug, Clone)]
struct Slot {
    value: Value,
    meta: ValueMeta,
}

/// An in-memory device.
#[derive(Debug)]
pub struct VirtualDevice {
    id: DeviceId,
    name: String,
    kind: DeviceKind,
    room: Option<String>,
    floor: Option<String>,
    slots: Mutex<HashMap<String, Slot>>,
}

impl VirtualDevice {
    /// Create a builder for a device of the given generic kind.
    #[must_use]
    pub fn builder(
        id: impl Into<DeviceId>,
        name: impl Into<String>,
        kind: &str,
    ) -> VirtualDeviceBuilder {
        VirtualDeviceBuilder {
            id: id.into(),
            name: name.into(),
            kind: DeviceKind::from(kind),
            room: None,
            floor: None,
            slots: HashMap::new(),
        }
    }

    fn lock_slots(&self) -> MutexGuard<'_, HashMap<String, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HomeDevice for VirtualDevice {
    fn id(&self) -> &DeviceId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &DeviceKind {
        &self.kind
    }

    fn room(&self) -> Option<&str> {
        self.room.as_deref()
    }

    fn floor(&self) -> Option<&str> {
        self.floor.as_deref()
    }

    fn standard_get(&self, key: &str) -> Result<Value, BridgeError> {
        self.lock_slots()
            .get(key)
            .map(|slot| slot.value.clone())
            .ok_or_else(|| ValueError::Missing(key.to_string()).into())
    }

    fn standard_set(&self, key: &str, value: Value) -> Result<(), BridgeError> {
        tracing::debug!(device_id = %self.id, key, %value, "writing virtual value");
        let mut slots = self.lock_slots();
        match slots.get_mut(key) {
            // A plain number written over a measurement keeps its units.
            Some(slot) => {
                slot.value = match (&slot.value, value) {
                    (Value::Measured { units, .. }, plain @ (Value::Int(_) | Value::Float(_))) => {
                        Value::measured(plain, units.clone())
                    }
                    (_, value) => value,
                };
            }
            None => {
                slots.insert(
                    key.to_string(),
                    Slot {
                        value,
                        meta: ValueMeta::default(),
                    },
                );
            }
        }
        Ok(())
    }

    fn standard_meta(&self, key: &str) -> Result<ValueMeta, BridgeError> {
        Ok(self
            .lock_slots()
            .get(key)
            .map(|slot| slot.meta.clone())
            .unwrap_or_default())
    }
}

/// Step-by-step builder for [`VirtualDevice`].
#[derive(Debug)]
pub struct VirtualDeviceBuilder {
    id: DeviceId,
    name: String,
    kind: DeviceKind,
    room: Option<String>,
    floor: Option<String>,
    slots: HashMap<String, Slot>,
}

impl VirtualDeviceBuilder {
    #[must_use]
    pub fn room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    #[must_use]
    pub fn floor(mut self, floor: impl Into<String>) -> Self {
        self.floor = Some(floor.into());
        self
    }

    /// Add a value without metadata.
    #[must_use]
    pub fn value(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.value_with_meta(key, value, ValueMeta::default())
    }

    /// Add a value with its range and units.
    #[must_use]
    pub fn value_with_meta(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
        meta: ValueMeta,
    ) -> Self {
        self.slots.insert(
            key.into(),
            Slot {
                value: value.into(),
                meta,
            },
        );
        self
    }

    #[must_use]
    pub fn build(self) -> VirtualDevice {
        VirtualDevice {
            id: self.id,
            name: self.name,
            kind: self.kind,
            room: self.room,
            floor: self.floor,
            slots: Mutex::new(self.slots),
        }
    }
}
