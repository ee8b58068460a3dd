//! Typed identifier newtypes backed by opaque strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Access the inner string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

define_id!(
    /// Stable identifier of a device, owned by the host device directory.
    DeviceId
);

define_id!(
    /// Opaque room identifier derived from a room and floor label.
    RoomId
);

impl RoomId {
    /// Derive the identifier of a `(room, floor)` pair.
    ///
    /// Absent labels hash as empty strings, so a device with neither label
    /// shares the id of the `"(not set)"` room.
    #[must_use]
    pub fn for_location(room: Option<&str>, floor: Option<&str>) -> Self {
        let key = format!("{}:{}", room.unwrap_or_default(), floor.unwrap_or_default());
        Self(hex::encode(Sha256::digest(key.as_bytes())))
    }
}
