//! # imperihome-adapter-virtual
//!
//! In-memory device directory with a demo set of devices, so the bridge can
//! run without a host application.
//!
//! ## Provided devices
//!
//! | Id | Kind | Values |
//! |----|------|--------|
//! | `virtual-dimmer` | Dimmer | `level` in `[0, 100]` |
//! | `virtual-light` | Light | `value` |
//! | `virtual-fan` | Fan | `value` |
//! | `virtual-door` | Door | `value` |
//! | `virtual-motion` | Sensor | `Motion` |
//! | `virtual-rgbw` | RGBWLed | `color` laid out as `#RRGGBBWW` |
//! | `virtual-thermostat` | Thermostat | `mode`, `fan`, `temperature`, `setpoint` in `[10, 30]` |
//! | `virtual-camera` | Camera | `value` (not exposed to the client) |
//!
//! ## Dependency rule
//!
//! Depends on `imperihome-app` (port traits) and `imperihome-domain` only.

mod devices;

pub use devices::{VirtualDevice, VirtualDeviceBuilder};

use imperihome_app::ports::DeviceDirectory;

/// Directory holding [`VirtualDevice`]s in insertion order.
pub struct VirtualDirectory {
    devices: Vec<VirtualDevice>,
}

impl Default for VirtualDirectory {
    fn default() -> Self {
        Self {
            devices: devices::demo::all(),
        }
    }
}

impl VirtualDirectory {
    /// A directory without any device.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            devices: Vec::new(),
        }
    }

    /// Append a device.
    #[must_use]
    pub fn with_device(mut self, device: VirtualDevice) -> Self {
        self.devices.push(device);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl DeviceDirectory for VirtualDirectory {
    type Device = VirtualDevice;

    fn devices(&self) -> Vec<&VirtualDevice> {
        self.devices.iter().collect()
    }
}
