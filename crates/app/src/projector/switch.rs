//! `DevSwitch`: anything that is simply on or off.

use imperihome_domain::error::BridgeError;
use imperihome_domain::parameter::Parameter;
use imperihome_domain::value::Value;

use super::{ApplyCommand, ReadParameters, is_on, numeric, unknown_action};
use crate::ports::HomeDevice;

const VALUE: &str = "value";

/// Projects a device's `value` as `Status`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwitchProjector;

impl ReadParameters for SwitchProjector {
    fn read<D: HomeDevice + ?Sized>(&self, device: &D) -> Result<Vec<Parameter>, BridgeError> {
        let value = device.standard_get(VALUE)?;
        Ok(vec![Parameter::flag("Status", numeric(VALUE, &value)? > 0.0)])
    }
}

impl ApplyCommand for SwitchProjector {
    fn apply<D: HomeDevice + ?Sized>(
        &self,
        device: &D,
        action: &str,
        raw: &str,
    ) -> Result<(), BridgeError> {
        match action {
            "setStatus" => device.standard_set(VALUE, Value::Int(i64::from(is_on(raw)))),
            _ => Err(unknown_action(action)),
        }
    }
}
