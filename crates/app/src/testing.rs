//! In-memory doubles of the directory port for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use imperihome_domain::device::DeviceKind;
use imperihome_domain::error::{BridgeError, ValueError};
use imperihome_domain::id::DeviceId;
use imperihome_domain::value::{Value, ValueMeta};

use crate::ports::{DeviceDirectory, HomeDevice};

pub(crate) struct FakeDevice {
    id: DeviceId,
    name: String,
    kind: DeviceKind,
    room: Option<String>,
    floor: Option<String>,
    values: Mutex<HashMap<String, Value>>,
    metas: HashMap<String, ValueMeta>,
    offline: bool,
}

impl FakeDevice {
    pub(crate) fn new(id: &str, kind: &str) -> Self {
        Self {
            id: DeviceId::new(id),
            name: format!("{kind} {id}"),
            kind: DeviceKind::from(kind),
            room: None,
            floor: None,
            values: Mutex::new(HashMap::new()),
            metas: HashMap::new(),
            offline: false,
        }
    }

    pub(crate) fn with_value(self, key: &str, value: impl Into<Value>) -> Self {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.into());
        self
    }

    pub(crate) fn with_meta(mut self, key: &str, meta: ValueMeta) -> Self {
        self.metas.insert(key.to_string(), meta);
        self
    }

    pub(crate) fn located(mut self, room: Option<&str>, floor: Option<&str>) -> Self {
        self.room = room.map(str::to_string);
        self.floor = floor.map(str::to_string);
        self
    }

    /// Every read and write fails.
    pub(crate) fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    pub(crate) fn value(&self, key: &str) -> Option<Value> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn check_online(&self) -> Result<(), BridgeError> {
        if self.offline {
            return Err(BridgeError::Directory("device offline".into()));
        }
        Ok(())
    }
}

impl HomeDevice for FakeDevice {
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
        self.check_online()?;
        self.value(key)
            .ok_or_else(|| ValueError::Missing(key.to_string()).into())
    }

    fn standard_set(&self, key: &str, value: Value) -> Result<(), BridgeError> {
        self.check_online()?;
        self.values.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    fn standard_meta(&self, key: &str) -> Result<ValueMeta, BridgeError> {
        self.check_online()?;
        Ok(self.metas.get(key).cloned().unwrap_or_default())
    }
}

pub(crate) struct FakeDirectory(pub(crate) Vec<FakeDevice>);

impl DeviceDirectory for FakeDirectory {
    type Device = FakeDevice;

    fn devices(&self) -> Vec<&FakeDevice> {
        self.0.iter().collect()
    }
}
