//! `DevDimmer`: a light with a level.

use imperihome_domain::error::{BridgeError, CommandError};
use imperihome_domain::parameter::Parameter;
use imperihome_domain::value::Value;

use super::{ApplyCommand, ReadParameters, is_on, numeric, required_range, unknown_action};
use crate::ports::HomeDevice;

const LEVEL: &str = "level";

/// Projects a device's `level` value as `Status` and `Level`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DimmerProjector;

impl ReadParameters for DimmerProjector {
    fn read<D: HomeDevice + ?Sized>(&self, device: &D) -> Result<Vec<Parameter>, BridgeError> {
        let level = device.standard_get(LEVEL)?;
        let on = numeric(LEVEL, &level)? > 0.0;
        Ok(vec![Parameter::flag("Status", on), Parameter::new("Level", level)])
    }
}

impl ApplyCommand for DimmerProjector {
    fn apply<D: HomeDevice + ?Sized>(
        &self,
        device: &D,
        action: &str,
        raw: &str,
    ) -> Result<(), BridgeError> {
        match action {
            "setStatus" => {
                let range = required_range(device, LEVEL)?;
                let level = if is_on(raw) { range.max() } else { range.min() };
                device.standard_set(LEVEL, Value::number(level))
            }
            "setLevel" => {
                let range = required_range(device, LEVEL)?;
                let level = parse_level(raw)?;
                device.standard_set(LEVEL, Value::number(range.clamp(level)))
            }
            _ => Err(unknown_action(action)),
        }
    }
}

/// Integer level from the wire; decimals are truncated toward zero.
#[allow(clippy::cast_precision_loss)]
fn parse_level(raw: &str) -> Result<f64, CommandError> {
    let raw = raw.trim();
    if let Ok(level) = raw.parse::<i64>() {
        return Ok(level as f64);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|level| level.is_finite())
        .map(f64::trunc)
        .ok_or_else(|| CommandError::InvalidArgument {
            raw: raw.to_string(),
            expected: "an integer",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeDevice;
    use imperihome_domain::value::ValueMeta;

    fn dimmer(level: i64) -> FakeDevice {
        FakeDevice::new("dim", "Dimmer")
            .with_value(LEVEL, level)
            .with_meta(LEVEL, ValueMeta::ranged(10.0, 90.0))
    }

    #[test]
    fn should_report_off_when_level_is_zero() {
        let params = DimmerProjector.read(&dimmer(0)).unwrap();
        assert_eq!(
            params,
            vec![Parameter::flag("Status", false), Parameter::new("Level", 0)]
        );
    }

    #[test]
    fn should_report_on_with_raw_level() {
        let params = DimmerProjector.read(&dimmer(42)).unwrap();
        assert_eq!(
            params,
            vec![Parameter::flag("Status", true), Parameter::new("Level", 42)]
        );
    }

    #[test]
    fn should_accept_numeric_string_level() {
        let device = FakeDevice::new("dim", "Dimmer").with_value(LEVEL, "35");
        let params = DimmerProjector.read(&device).unwrap();
        assert_eq!(params[0], Parameter::flag("Status", true));
        assert_eq!(params[1], Parameter::new("Level", "35"));
    }

    #[test]
    fn should_fail_to_read_non_numeric_level() {
        let device = FakeDevice::new("dim", "Dimmer").with_value(LEVEL, "bright");
        assert!(DimmerProjector.read(&device).is_err());
    }

    #[test]
    fn should_set_max_level_when_status_is_one() {
        let device = dimmer(0);
        DimmerProjector.apply(&device, "setStatus", "1").unwrap();
        assert_eq!(device.value(LEVEL), Some(Value::Int(90)));
    }

    #[test]
    fn should_set_min_level_when_status_is_not_one() {
        let device = dimmer(50);
        DimmerProjector.apply(&device, "setStatus", "0").unwrap();
        assert_eq!(device.value(LEVEL), Some(Value::Int(10)));
    }

    #[test]
    fn should_clamp_level_below_range() {
        let device = dimmer(50);
        DimmerProjector.apply(&device, "setLevel", "5").unwrap();
        assert_eq!(device.value(LEVEL), Some(Value::Int(10)));
    }

    #[test]
    fn should_clamp_level_above_range() {
        let device = dimmer(50);
        DimmerProjector.apply(&device, "setLevel", "150").unwrap();
        assert_eq!(device.value(LEVEL), Some(Value::Int(90)));
    }

    #[test]
    fn should_truncate_decimal_level() {
        let device = dimmer(50);
        DimmerProjector.apply(&device, "setLevel", "55.7").unwrap();
        assert_eq!(device.value(LEVEL), Some(Value::Int(55)));
    }

    #[test]
    fn should_reject_level_without_range() {
        let device = FakeDevice::new("dim", "Dimmer").with_value(LEVEL, 50);
        let result = DimmerProjector.apply(&device, "setLevel", "20");
        assert!(matches!(
            result,
            Err(BridgeError::Command(CommandError::MissingRange(_)))
        ));
        assert_eq!(device.value(LEVEL), Some(Value::Int(50)));
    }

    #[test]
    fn should_reject_status_without_range() {
        let device = FakeDevice::new("dim", "Dimmer").with_value(LEVEL, 50);
        assert!(DimmerProjector.apply(&device, "setStatus", "1").is_err());
    }

    #[test]
    fn should_reject_unparsable_level() {
        let device = dimmer(50);
        let result = DimmerProjector.apply(&device, "setLevel", "loud");
        assert!(matches!(
            result,
            Err(BridgeError::Command(CommandError::InvalidArgument { .. }))
        ));
        assert_eq!(device.value(LEVEL), Some(Value::Int(50)));
    }

    #[test]
    fn should_reject_unknown_action() {
        let device = dimmer(50);
        assert!(matches!(
            DimmerProjector.apply(&device, "setColor", "ff000000"),
            Err(BridgeError::Command(CommandError::UnknownAction(_)))
        ));
    }
}
