//! Parameter: one facet of device state as the client sees it.

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A single `key`/`value` pair, optionally tagged with a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub key: String,
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Parameter {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            unit: None,
        }
    }

    /// A `0`/`1` flag parameter.
    #[must_use]
    pub fn flag(key: impl Into<String>, on: bool) -> Self {
        Self::new(key, i64::from(on))
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_omit_unit_when_absent() {
        let json = serde_json::to_string(&Parameter::flag("Status", true)).unwrap();
        assert_eq!(json, r#"{"key":"Status","value":1}"#);
    }

    #[test]
    fn should_serialize_unit_when_present() {
        let param = Parameter::new("curtemp", 21.5).with_unit("\u{b0}C");
        let json = serde_json::to_value(&param).unwrap();
        assert_eq!(json["unit"], "\u{b0}C");
        assert_eq!(json["value"], 21.5);
    }
}
