//! System descriptor reported to the client.

use serde::{Deserialize, Serialize};

/// Identity of the bridge as returned by `GET /system`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub id: String,
    #[serde(rename = "apiversion")]
    pub api_version: u32,
}

impl Default for SystemInfo {
    fn default() -> Self {
        Self {
            id: "homework".to_string(),
            api_version: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_with_client_field_names() {
        let json = serde_json::to_value(SystemInfo::default()).unwrap();
        assert_eq!(json, serde_json::json!({"id": "homework", "apiversion": 0}));
    }
}
