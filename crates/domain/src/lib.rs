//! # imperihome-domain
//!
//! Pure domain model for the ImperiHome bridge.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define the **generic device kinds** owned by the host device directory
//! - Define the **client device types** understood by the ImperiHome client
//!   and the fixed mapping between the two
//! - Define **values** (`get`/`set` payloads with range and unit metadata)
//! - Define **parameters** (the client-facing state snapshot)
//! - Encode and decode packed **color strings** between channel layouts
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod color;
pub mod device;
pub mod parameter;
pub mod room;
pub mod system;
pub mod value;
