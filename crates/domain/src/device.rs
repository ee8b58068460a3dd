//! Device kinds and the client device types they map to.
//!
//! The host directory classifies devices with its own generic taxonomy
//! ([`DeviceKind`]). The ImperiHome client only understands a closed
//! vocabulary ([`ClientDeviceType`]); [`map_type`] is the fixed table between
//! the two. Devices whose kind has no client type are invisible to the client.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::id::{DeviceId, RoomId};
use crate::parameter::Parameter;

/// Generic device kind as reported by the host device directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Dimmer,
    Light,
    Fan,
    Door,
    Sensor,
    RgbwLed,
    Thermostat,
    Virtual,
    /// Any kind the bridge does not know about (e.g. `Camera`).
    Other(String),
}

impl DeviceKind {
    /// Name of the kind in the host taxonomy.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Dimmer => "Dimmer",
            Self::Light => "Light",
            Self::Fan => "Fan",
            Self::Door => "Door",
            Self::Sensor => "Sensor",
            Self::RgbwLed => "RGBWLed",
            Self::Thermostat => "Thermostat",
            Self::Virtual => "Virtual",
            Self::Other(name) => name,
        }
    }

    /// The client device type this kind is exposed as, if any.
    #[must_use]
    pub fn client_type(&self) -> Option<ClientDeviceType> {
        match self {
            Self::Dimmer => Some(ClientDeviceType::Dimmer),
            Self::Light | Self::Fan | Self::Virtual => Some(ClientDeviceType::Switch),
            Self::Door => Some(ClientDeviceType::Door),
            Self::Sensor => Some(ClientDeviceType::Motion),
            Self::RgbwLed => Some(ClientDeviceType::RgbLight),
            Self::Thermostat => Some(ClientDeviceType::Thermostat),
            Self::Other(_) => None,
        }
    }
}

impl From<&str> for DeviceKind {
    fn from(value: &str) -> Self {
        match value {
            "Dimmer" => Self::Dimmer,
            "Light" => Self::Light,
            "Fan" => Self::Fan,
            "Door" => Self::Door,
            "Sensor" => Self::Sensor,
            "RGBWLed" => Self::RgbwLed,
            "Thermostat" => Self::Thermostat,
            "Virtual" => Self::Virtual,
            other => Self::Other(other.to_string()),
        }
    }
}

impl FromStr for DeviceKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Device type vocabulary of the ImperiHome client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientDeviceType {
    #[serde(rename = "DevDimmer")]
    Dimmer,
    #[serde(rename = "DevSwitch")]
    Switch,
    #[serde(rename = "DevDoor")]
    Door,
    #[serde(rename = "DevMotion")]
    Motion,
    #[serde(rename = "DevRGBLight")]
    RgbLight,
    #[serde(rename = "DevThermostat")]
    Thermostat,
}

impl ClientDeviceType {
    /// Wire name of the type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dimmer => "DevDimmer",
            Self::Switch => "DevSwitch",
            Self::Door => "DevDoor",
            Self::Motion => "DevMotion",
            Self::RgbLight => "DevRGBLight",
            Self::Thermostat => "DevThermostat",
        }
    }

    /// Whether the client may send commands to devices of this type.
    #[must_use]
    pub fn accepts_commands(self) -> bool {
        !matches!(self, Self::Door | Self::Motion)
    }
}

impl fmt::Display for ClientDeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A device as listed to the client by `GET /devices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientDevice {
    pub id: DeviceId,
    pub name: String,
    pub room: RoomId,
    #[serde(rename = "type")]
    pub client_type: ClientDeviceType,
    pub params: Vec<Parameter>,
}

/// Map a generic kind name to its client device type.
#[must_use]
pub fn map_type(kind: &str) -> Option<ClientDeviceType> {
    DeviceKind::from(kind).client_type()
}
