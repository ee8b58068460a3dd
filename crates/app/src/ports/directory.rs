//! Device directory port: the host application's devices and their values.
//!
//! The bridge never owns devices. It reads and writes named values through
//! [`HomeDevice`] and enumerates devices through [`DeviceDirectory`]. Calls
//! are synchronous: each request re-reads live state.

use imperihome_domain::device::DeviceKind;
use imperihome_domain::error::BridgeError;
use imperihome_domain::id::DeviceId;
use imperihome_domain::room::Location;
use imperihome_domain::value::{Value, ValueMeta};

/// A device exposed by the host application.
pub trait HomeDevice {
    /// Stable identifier.
    fn id(&self) -> &DeviceId;

    /// Display name.
    fn name(&self) -> &str;

    /// Generic kind, used to pick the client device type.
    fn kind(&self) -> &DeviceKind;

    fn room(&self) -> Option<&str>;

    fn floor(&self) -> Option<&str>;

    /// Read the current value named `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the value is missing or the device cannot be read.
    fn standard_get(&self, key: &str) -> Result<Value, BridgeError>;

    /// Write the value named `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the device rejects the write.
    fn standard_set(&self, key: &str, value: Value) -> Result<(), BridgeError>;

    /// Range and units of the value named `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the device cannot be read.
    fn standard_meta(&self, key: &str) -> Result<ValueMeta, BridgeError>;

    /// Room and floor labels of the device.
    fn location(&self) -> Location {
        Location::new(self.room(), self.floor())
    }
}

/// The set of devices known to the host application.
pub trait DeviceDirectory: Send + Sync {
    type Device: HomeDevice;

    /// All devices, in the directory's own order.
    fn devices(&self) -> Vec<&Self::Device>;

    /// Look a device up by identifier.
    fn find(&self, id: &DeviceId) -> Option<&Self::Device> {
        self.devices().into_iter().find(|device| device.id() == id)
    }
}
