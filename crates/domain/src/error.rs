//! Common error types used across the workspace.
//!
//! Each failure family has its own typed error; [`BridgeError`] gathers them
//! through `#[from]` conversions so the `?` operator works across layers.

use crate::color::ColorError;

/// Top-level error for every bridge operation.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("unsupported")]
    Unsupported(#[from] UnsupportedError),

    #[error("unusable value")]
    Value(#[from] ValueError),

    #[error("command rejected")]
    Command(#[from] CommandError),

    /// A read or write failure reported by the device directory.
    #[error("device directory error")]
    Directory(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Lookup of an unknown identifier.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A device the client cannot represent or control.
#[derive(Debug, thiserror::Error)]
pub enum UnsupportedError {
    #[error("device kind {0} has no client device type")]
    UnmappedKind(String),

    #[error("client device type {0} does not accept commands")]
    ReadOnly(&'static str),
}

/// A named value that is missing or has an unusable shape.
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    #[error("value {0} is missing")]
    Missing(String),

    #[error("value {key} is not {expected}")]
    WrongShape {
        key: String,
        expected: &'static str,
    },

    #[error("value {0} has no units")]
    MissingUnits(String),

    #[error("invalid color")]
    Color(#[from] ColorError),
}

/// A client command that could not be applied.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("unknown action {0}")]
    UnknownAction(String),

    #[error("value {0} has no usable range")]
    MissingRange(String),

    #[error("cannot parse {raw:?} as {expected}")]
    InvalidArgument { raw: String, expected: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Device",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Device abc not found");
    }

    #[test]
    fn should_convert_command_error_into_bridge_error() {
        let err: BridgeError = CommandError::UnknownAction("setFoo".to_string()).into();
        assert!(matches!(err, BridgeError::Command(_)));
    }

    #[test]
    fn should_convert_color_error_through_value_error() {
        let err: ValueError = ColorError::InvalidDigits("zz".to_string()).into();
        assert!(matches!(err, ValueError::Color(_)));
    }

    #[test]
    fn should_display_invalid_argument_with_raw_value() {
        let err = CommandError::InvalidArgument {
            raw: "abc".to_string(),
            expected: "an integer",
        };
        assert_eq!(err.to_string(), "cannot parse \"abc\" as an integer");
    }
}
