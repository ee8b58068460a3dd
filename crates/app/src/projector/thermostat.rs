//! `DevThermostat`: mode, fan mode, current temperature and setpoint.

use imperihome_domain::error::{BridgeError, CommandError, ValueError};
use imperihome_domain::parameter::Parameter;
use imperihome_domain::value::Value;

use super::{ApplyCommand, ReadParameters, unknown_action};
use crate::ports::HomeDevice;

const MODE: &str = "mode";
const FAN: &str = "fan";
const TEMPERATURE: &str = "temperature";
const SETPOINT: &str = "setpoint";

// Not derived from the device metadata.
const AVAILABLE_MODES: &str = "cool,heat,off";
const AVAILABLE_FAN_MODES: &str = "auto,off";
const STEP: &str = "1";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThermostatProjector;

impl ReadParameters for ThermostatProjector {
    fn read<D: HomeDevice + ?Sized>(&self, device: &D) -> Result<Vec<Parameter>, BridgeError> {
        let mode = device.standard_get(MODE)?;
        let fan = device.standard_get(FAN)?;
        let (temperature, temperature_units) = measurement(device, TEMPERATURE)?;
        let (setpoint, setpoint_units) = measurement(device, SETPOINT)?;

        Ok(vec![
            Parameter::new("curmode", mode),
            Parameter::new("curfanmode", fan),
            Parameter::new("curtemp", temperature).with_unit(format!("\u{b0}{temperature_units}")),
            Parameter::new("cursetpoint", setpoint).with_unit(format!("\u{b0}{setpoint_units}")),
            Parameter::new("step", STEP),
            Parameter::new("availablemodes", AVAILABLE_MODES),
            Parameter::new("availablefanmodes", AVAILABLE_FAN_MODES),
        ])
    }
}

impl ApplyCommand for ThermostatProjector {
    fn apply<D: HomeDevice + ?Sized>(
        &self,
        device: &D,
        action: &str,
        raw: &str,
    ) -> Result<(), BridgeError> {
        match action {
            "setMode" => device.standard_set(MODE, Value::from(raw)),
            "setFanMode" => device.standard_set(FAN, Value::from(raw)),
            "setSetPoint" => {
                let requested = raw
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| CommandError::InvalidArgument {
                        raw: raw.to_string(),
                        expected: "a number",
                    })?;
                let setpoint = match device.standard_meta(SETPOINT)?.range {
                    Some(range) => range.clamp(requested),
                    None => requested,
                };
                device.standard_set(SETPOINT, Value::Float(setpoint))
            }
            _ => Err(unknown_action(action)),
        }
    }
}

/// Reading and units of `key`, from a `{value, units}` reading or else from
/// the value's metadata.
fn measurement<D: HomeDevice + ?Sized>(device: &D, key: &str) -> Result<(Value, String), BridgeError> {
    match device.standard_get(key)? {
        Value::Measured { value, units } => Ok((*value, units)),
        plain => {
            let units = device
                .standard_meta(key)?
                .units
                .ok_or_else(|| ValueError::MissingUnits(key.to_string()))?;
            Ok((plain, units))
        }
    }
}
