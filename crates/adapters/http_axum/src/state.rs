//! Shared application state for axum handlers.

use std::sync::Arc;

use imperihome_app::ports::DeviceDirectory;
use imperihome_app::services::bridge_service::BridgeService;

/// Application state shared across all axum handlers.
///
/// `Clone` is implemented manually so the directory type does not need to be
/// `Clone`; only the `Arc` is cloned.
pub struct AppState<D> {
    /// The bridge use-cases.
    pub bridge: Arc<BridgeService<D>>,
}

impl<D> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            bridge: Arc::clone(&self.bridge),
        }
    }
}

impl<D> AppState<D>
where
    D: DeviceDirectory + 'static,
{
    /// Create a new application state owning the bridge service.
    pub fn new(bridge: BridgeService<D>) -> Self {
        Self {
            bridge: Arc::new(bridge),
        }
    }
}
