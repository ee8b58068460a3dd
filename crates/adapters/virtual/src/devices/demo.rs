//! The demo device set of the default directory.

use imperihome_domain::value::{Value, ValueMeta};

use super::VirtualDevice;

const GROUND: &str = "Ground";
const FIRST: &str = "First";

pub(crate) fn all() -> Vec<VirtualDevice> {
    vec![
        dimmer(),
        light(),
        fan(),
        door(),
        motion(),
        rgbw_strip(),
        thermostat(),
        camera(),
    ]
}

fn dimmer() -> VirtualDevice {
    VirtualDevice::builder("virtual-dimmer", "Living Room Dimmer", "Dimmer")
        .room("Living Room")
        .floor(GROUND)
        .value_with_meta("level", 0, ValueMeta::ranged(0.0, 100.0))
        .build()
}

fn light() -> VirtualDevice {
    VirtualDevice::builder("virtual-light", "Kitchen Light", "Light")
        .room("Kitchen")
        .floor(GROUND)
        .value("value", 0)
        .build()
}

fn fan() -> VirtualDevice {
    VirtualDevice::builder("virtual-fan", "Bedroom Fan", "Fan")
        .room("Bedroom")
        .floor(FIRST)
        .value("value", 0)
        .build()
}

fn door() -> VirtualDevice {
    VirtualDevice::builder("virtual-door", "Front Door", "Door")
        .room("Hall")
        .floor(GROUND)
        .value("value", false)
        .build()
}

fn motion() -> VirtualDevice {
    VirtualDevice::builder("virtual-motion", "Hall Motion", "Sensor")
        .room("Hall")
        .floor(GROUND)
        .value("Motion", false)
        .build()
}

fn rgbw_strip() -> VirtualDevice {
    VirtualDevice::builder("virtual-rgbw", "Living Room Strip", "RGBWLed")
        .room("Living Room")
        .floor(GROUND)
        .value_with_meta("color", "#00000000", ValueMeta::with_units("#RRGGBBWW"))
        .build()
}

fn thermostat() -> VirtualDevice {
    VirtualDevice::builder("virtual-thermostat", "Hall Thermostat", "Thermostat")
        .room("Hall")
        .floor(GROUND)
        .value("mode", "heat")
        .value("fan", "auto")
        .value_with_meta(
            "temperature",
            Value::measured(20.5, "C"),
            ValueMeta::with_units("C"),
        )
        .value_with_meta(
            "setpoint",
            Value::measured(21, "C"),
            ValueMeta {
                units: Some("C".to_string()),
                ..ValueMeta::ranged(10.0, 30.0)
            },
        )
        .build()
}

fn camera() -> VirtualDevice {
    VirtualDevice::builder("virtual-camera", "Garage Camera", "Camera")
        .room("Garage")
        .value("value", 1)
        .build()
}
