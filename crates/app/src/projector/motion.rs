//! `DevMotion`: read-only presence sensor.

use imperihome_domain::error::BridgeError;
use imperihome_domain::parameter::Parameter;

use super::ReadParameters;
use crate::ports::HomeDevice;

const MOTION: &str = "Motion";

/// Projects a sensor's `Motion` value as `Tripped`; arming is not supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionProjector;

impl ReadParameters for MotionProjector {
    fn read<D: HomeDevice + ?Sized>(&self, device: &D) -> Result<Vec<Parameter>, BridgeError> {
        let motion = device.standard_get(MOTION)?.is_truthy();
        Ok(vec![
            Parameter::flag("armable", false),
            Parameter::flag("ackable", false),
            Parameter::flag("Tripped", motion),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeDevice;

    #[test]
    fn should_report_constant_flags_before_tripped() {
        let device = FakeDevice::new("pir", "Sensor").with_value(MOTION, true);
        let params = MotionProjector.read(&device).unwrap();
        let keys: Vec<&str> = params.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, ["armable", "ackable", "Tripped"]);
        assert_eq!(params[2], Parameter::flag("Tripped", true));
    }

    #[test]
    fn should_not_trip_without_motion() {
        let device = FakeDevice::new("pir", "Sensor").with_value(MOTION, 0);
        let params = MotionProjector.read(&device).unwrap();
        assert_eq!(params[2], Parameter::flag("Tripped", false));
    }

    #[test]
    fn should_fail_when_motion_value_is_missing() {
        let device = FakeDevice::new("pir", "Sensor");
        assert!(MotionProjector.read(&device).is_err());
    }
}
