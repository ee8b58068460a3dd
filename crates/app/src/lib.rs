//! # imperihome-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **device directory port** (`HomeDevice`, `DeviceDirectory`)
//!   that the host application implements
//! - Project generic device state into the client's per-type parameter lists
//!   and apply client commands back (`Projector`)
//! - Keep the process-wide **room registry**
//! - Expose the bridge use-cases (`BridgeService`): list devices, list rooms,
//!   apply a command, describe the system
//!
//! ## Dependency rule
//! Depends on `imperihome-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod projector;
pub mod room_registry;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;
