//! Device listing and device commands.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use imperihome_app::ports::DeviceDirectory;
use imperihome_domain::device::ClientDevice;
use imperihome_domain::id::DeviceId;

use crate::error::ApiError;
use crate::state::AppState;

/// Body of the device listing.
#[derive(Debug, Serialize)]
pub struct DeviceList {
    pub devices: Vec<ClientDevice>,
}

/// Body of a successful command.
#[derive(Debug, Serialize)]
pub struct ActionResult {
    pub success: bool,
}

/// Possible responses below `/devices/`.
pub enum DeviceResponse {
    List(Json<DeviceList>),
    Applied(Json<ActionResult>),
}

impl IntoResponse for DeviceResponse {
    fn into_response(self) -> Response {
        match self {
            Self::List(json) => json.into_response(),
            Self::Applied(json) => json.into_response(),
        }
    }
}

/// Shape of a path below `/devices/`, empty segments ignored.
#[derive(Debug, PartialEq, Eq)]
enum DevicePath<'a> {
    List,
    Action {
        id: &'a str,
        action: &'a str,
        value: &'a str,
    },
    Invalid,
}

impl<'a> DevicePath<'a> {
    fn parse(rest: &'a str) -> Self {
        let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::List,
            [id, "action", action, value] => Self::Action {
                id: *id,
                action: *action,
                value: *value,
            },
            _ => Self::Invalid,
        }
    }
}

/// `GET /devices`
pub async fn list<D>(State(state): State<AppState<D>>) -> DeviceResponse
where
    D: DeviceDirectory + 'static,
{
    DeviceResponse::List(Json(DeviceList {
        devices: state.bridge.list_devices(),
    }))
}

/// `GET /devices/{*rest}`, routing to the listing or to a command.
pub async fn dispatch<D>(
    State(state): State<AppState<D>>,
    Path(rest): Path<String>,
) -> Result<DeviceResponse, ApiError>
where
    D: DeviceDirectory + 'static,
{
    match DevicePath::parse(&rest) {
        DevicePath::List => Ok(list(State(state)).await),
        DevicePath::Action { id, action, value } => state
            .bridge
            .set_device_parameter(&DeviceId::new(id), action, value)
            .map(|()| DeviceResponse::Applied(Json(ActionResult { success: true })))
            .map_err(|err| ApiError::from_command(&err, id, action, value)),
        DevicePath::Invalid => {
            tracing::debug!(path = %rest, "invalid device path");
            Err(ApiError::InvalidPath)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_action_path() {
        assert_eq!(
            DevicePath::parse("lamp/action/setStatus/1"),
            DevicePath::Action {
                id: "lamp",
                action: "setStatus",
                value: "1",
            }
        );
    }

    #[test]
    fn should_ignore_empty_segments() {
        assert_eq!(
            DevicePath::parse("lamp//action/setLevel/40/"),
            DevicePath::Action {
                id: "lamp",
                action: "setLevel",
                value: "40",
            }
        );
        assert_eq!(DevicePath::parse("/"), DevicePath::List);
    }

    #[test]
    fn should_reject_other_shapes() {
        assert_eq!(DevicePath::parse("lamp"), DevicePath::Invalid);
        assert_eq!(DevicePath::parse("lamp/action/setStatus"), DevicePath::Invalid);
        assert_eq!(DevicePath::parse("lamp/command/setStatus/1"), DevicePath::Invalid);
        assert_eq!(
            DevicePath::parse("lamp/action/setStatus/1/extra"),
            DevicePath::Invalid
        );
    }
}
