//! # imperihome-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum), speaking the
//! ImperiHome client protocol.
//!
//! ## Routes
//! - `GET /system`: bridge identity
//! - `GET /rooms`: room listing
//! - `GET /devices`: device listing with parameters
//! - `GET /devices/{id}/action/{action}/{value}`: apply a command
//! - `GET /health`: liveness probe
//!
//! Successful calls answer with JSON. Every failure is a `404` with a
//! plain-text body, which is what the client expects.
//!
//! ## Dependency rule
//! Depends on `imperihome-app` (for the bridge service and port traits) and
//! `imperihome-domain` (for the payload types). Never leaks axum types into
//! the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
