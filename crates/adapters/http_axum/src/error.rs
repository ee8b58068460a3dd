//! HTTP error response mapping.
//!
//! The client reads failure bodies as plain text, so every error here turns
//! into a `404` with a short human readable message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use imperihome_domain::error::BridgeError;

/// Failure of an ImperiHome request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The device id of an action is unknown.
    DeviceNotFound,
    /// The device exists but the command was not applied.
    CommandRejected {
        id: String,
        action: String,
        value: String,
    },
    /// A `/devices/...` path with the wrong shape.
    InvalidPath,
    /// Any path outside the protocol.
    PathNotFound,
}

impl ApiError {
    /// Map the outcome of a failed command to the message the client shows.
    #[must_use]
    pub fn from_command(err: &BridgeError, id: &str, action: &str, value: &str) -> Self {
        match err {
            BridgeError::NotFound(_) => Self::DeviceNotFound,
            _ => Self::CommandRejected {
                id: id.to_string(),
                action: action.to_string(),
                value: value.to_string(),
            },
        }
    }

    fn message(&self) -> String {
        match self {
            Self::DeviceNotFound => "Couldn't find device".to_string(),
            Self::CommandRejected { id, action, value } => {
                format!("Couldn't set {action} for {id} to {value}")
            }
            Self::InvalidPath => "Invalid path".to_string(),
            Self::PathNotFound => "404 Path not found".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, self.message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imperihome_domain::error::{CommandError, NotFoundError};

    #[test]
    fn should_report_unknown_device() {
        let err = BridgeError::from(NotFoundError {
            entity: "Device",
            id: "lamp".to_string(),
        });
        assert_eq!(
            ApiError::from_command(&err, "lamp", "setStatus", "1"),
            ApiError::DeviceNotFound
        );
    }

    #[test]
    fn should_report_rejected_command_with_its_arguments() {
        let err = BridgeError::from(CommandError::UnknownAction("setFoo".to_string()));
        let api = ApiError::from_command(&err, "lamp", "setFoo", "1");
        assert_eq!(api.message(), "Couldn't set setFoo for lamp to 1");
    }

    #[test]
    fn should_answer_not_found_status() {
        let response = ApiError::InvalidPath.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
