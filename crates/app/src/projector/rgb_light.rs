//! `DevRGBLight`: a color light whose channels are packed in one hex string.

use imperihome_domain::color;
use imperihome_domain::error::{BridgeError, ValueError};
use imperihome_domain::parameter::Parameter;
use imperihome_domain::value::Value;

use super::{ApplyCommand, ReadParameters, unknown_action};
use crate::ports::HomeDevice;

const COLOR: &str = "color";

/// Projects a device's `color` value, converting between its channel layout
/// and the client's `WWRRGGBB`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RgbLightProjector;

impl ReadParameters for RgbLightProjector {
    fn read<D: HomeDevice + ?Sized>(&self, device: &D) -> Result<Vec<Parameter>, BridgeError> {
        let value = device.standard_get(COLOR)?;
        let native = value.as_str().ok_or_else(|| ValueError::WrongShape {
            key: COLOR.to_string(),
            expected: "a color string",
        })?;
        let layout = layout(device)?;
        let client = color::encode(native, &layout).map_err(ValueError::from)?;

        Ok(vec![
            Parameter::flag("Status", !color::is_black(native)),
            Parameter::flag("dimmable", false),
            Parameter::flag("whitechannel", layout.contains("WW")),
            Parameter::new("color", client),
        ])
    }
}

impl ApplyCommand for RgbLightProjector {
    fn apply<D: HomeDevice + ?Sized>(
        &self,
        device: &D,
        action: &str,
        raw: &str,
    ) -> Result<(), BridgeError> {
        match action {
            "setColor" => {
                let layout = layout(device)?;
                let native = color::decode(raw, &layout).map_err(ValueError::from)?;
                device.standard_set(COLOR, Value::String(native))
            }
            _ => Err(unknown_action(action)),
        }
    }
}

fn layout<D: HomeDevice + ?Sized>(device: &D) -> Result<String, BridgeError> {
    device
        .standard_meta(COLOR)?
        .units
        .ok_or_else(|| ValueError::MissingUnits(COLOR.to_string()).into())
}
