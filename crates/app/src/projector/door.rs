//! `DevDoor`: read-only open/closed contact.

use imperihome_domain::error::BridgeError;
use imperihome_domain::parameter::Parameter;

use super::ReadParameters;
use crate::ports::HomeDevice;

const VALUE: &str = "value";

/// Projects a door's `value` as `Tripped`; arming is not supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoorProjector;

impl ReadParameters for DoorProjector {
    fn read<D: HomeDevice + ?Sized>(&self, device: &D) -> Result<Vec<Parameter>, BridgeError> {
        let open = device.standard_get(VALUE)?.is_truthy();
        Ok(vec![
            Parameter::flag("armable", false),
            Parameter::flag("ackable", false),
            Parameter::flag("Tripped", open),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeDevice;

    #[test]
    fn should_report_tripped_when_open() {
        let device = FakeDevice::new("door", "Door").with_value(VALUE, 1);
        let params = DoorProjector.read(&device).unwrap();
        assert_eq!(
            params,
            vec![
                Parameter::flag("armable", false),
                Parameter::flag("ackable", false),
                Parameter::flag("Tripped", true),
            ]
        );
    }

    #[test]
    fn should_report_not_tripped_when_closed() {
        let device = FakeDevice::new("door", "Door").with_value(VALUE, false);
        let params = DoorProjector.read(&device).unwrap();
        assert_eq!(params[2], Parameter::flag("Tripped", false));
    }
}
