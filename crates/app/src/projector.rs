//! Parameter projectors: one per client device type.
//!
//! A projector reads a generic device and produces the ordered parameter list
//! the client expects for its type, and (for controllable types) interprets a
//! client command and writes it back to the device.
//!
//! Failures never leave this module: [`Projector::get`] returns an empty list
//! and [`Projector::set`] returns `false`, both after logging.

mod dimmer;
mod door;
mod motion;
mod rgb_light;
mod switch;
mod thermostat;

pub use dimmer::DimmerProjector;
pub use door::DoorProjector;
pub use motion::MotionProjector;
pub use rgb_light::RgbLightProjector;
pub use switch::SwitchProjector;
pub use thermostat::ThermostatProjector;

use imperihome_domain::device::ClientDeviceType;
use imperihome_domain::error::{BridgeError, CommandError, UnsupportedError, ValueError};
use imperihome_domain::parameter::Parameter;
use imperihome_domain::value::{Value, ValueRange};

use crate::ports::HomeDevice;

/// Read side of a projector.
pub trait ReadParameters {
    /// Build the parameter list of `device`.
    ///
    /// # Errors
    ///
    /// Returns the first read failure.
    fn read<D: HomeDevice + ?Sized>(&self, device: &D) -> Result<Vec<Parameter>, BridgeError>;
}

/// Command side of a projector.
pub trait ApplyCommand {
    /// Apply the client action `action` with its raw wire argument.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] for unknown actions or unusable arguments and
    /// propagates directory failures.
    fn apply<D: HomeDevice + ?Sized>(
        &self,
        device: &D,
        action: &str,
        raw: &str,
    ) -> Result<(), BridgeError>;
}

/// Projector selected from a [`ClientDeviceType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projector {
    Dimmer(DimmerProjector),
    Switch(SwitchProjector),
    Door(DoorProjector),
    Motion(MotionProjector),
    RgbLight(RgbLightProjector),
    Thermostat(ThermostatProjector),
}

impl Projector {
    #[must_use]
    pub fn for_type(client_type: ClientDeviceType) -> Self {
        match client_type {
            ClientDeviceType::Dimmer => Self::Dimmer(DimmerProjector),
            ClientDeviceType::Switch => Self::Switch(SwitchProjector),
            ClientDeviceType::Door => Self::Door(DoorProjector),
            ClientDeviceType::Motion => Self::Motion(MotionProjector),
            ClientDeviceType::RgbLight => Self::RgbLight(RgbLightProjector),
            ClientDeviceType::Thermostat => Self::Thermostat(ThermostatProjector),
        }
    }

    #[must_use]
    pub fn client_type(&self) -> ClientDeviceType {
        match self {
            Self::Dimmer(_) => ClientDeviceType::Dimmer,
            Self::Switch(_) => ClientDeviceType::Switch,
            Self::Door(_) => ClientDeviceType::Door,
            Self::Motion(_) => ClientDeviceType::Motion,
            Self::RgbLight(_) => ClientDeviceType::RgbLight,
            Self::Thermostat(_) => ClientDeviceType::Thermostat,
        }
    }

    /// Whether this projector has a command side.
    #[must_use]
    pub fn accepts_commands(&self) -> bool {
        self.client_type().accepts_commands()
    }

    /// Parameter list of `device`, empty when any read fails.
    pub fn get<D: HomeDevice + ?Sized>(&self, device: &D) -> Vec<Parameter> {
        self.read(device).unwrap_or_else(|err| {
            tracing::warn!(
                device_id = %device.id(),
                client_type = %self.client_type(),
                error = %err,
                "failed to read device parameters"
            );
            Vec::new()
        })
    }

    /// Apply a command, returning whether it took effect.
    pub fn set<D: HomeDevice + ?Sized>(&self, device: &D, action: &str, raw: &str) -> bool {
        match self.try_set(device, action, raw) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(
                    device_id = %device.id(),
                    action,
                    raw,
                    error = %err,
                    "failed to apply command"
                );
                false
            }
        }
    }

    /// Fallible form of [`set`](Self::set).
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedError::ReadOnly`] for types without a command
    /// side, and any error raised while applying the command.
    pub fn try_set<D: HomeDevice + ?Sized>(
        &self,
        device: &D,
        action: &str,
        raw: &str,
    ) -> Result<(), BridgeError> {
        match self {
            Self::Dimmer(p) => p.apply(device, action, raw),
            Self::Switch(p) => p.apply(device, action, raw),
            Self::RgbLight(p) => p.apply(device, action, raw),
            Self::Thermostat(p) => p.apply(device, action, raw),
            Self::Door(_) | Self::Motion(_) => {
                Err(UnsupportedError::ReadOnly(self.client_type().as_str()).into())
            }
        }
    }
}

impl ReadParameters for Projector {
    fn read<D: HomeDevice + ?Sized>(&self, device: &D) -> Result<Vec<Parameter>, BridgeError> {
        match self {
            Self::Dimmer(p) => p.read(device),
            Self::Switch(p) => p.read(device),
            Self::Door(p) => p.read(device),
            Self::Motion(p) => p.read(device),
            Self::RgbLight(p) => p.read(device),
            Self::Thermostat(p) => p.read(device),
        }
    }
}

/// Wire contract for boolean-like command arguments: only `"1"` means on.
fn is_on(raw: &str) -> bool {
    raw == "1"
}

fn numeric(key: &str, value: &Value) -> Result<f64, BridgeError> {
    value.as_f64().ok_or_else(|| {
        ValueError::WrongShape {
            key: key.to_string(),
            expected: "a number",
        }
        .into()
    })
}

fn required_range<D: HomeDevice + ?Sized>(device: &D, key: &str) -> Result<ValueRange, BridgeError> {
    device
        .standard_meta(key)?
        .range
        .ok_or_else(|| CommandError::MissingRange(key.to_string()).into())
}

fn unknown_action(action: &str) -> BridgeError {
    CommandError::UnknownAction(action.to_string()).into()
}
