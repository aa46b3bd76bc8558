//! sim_core: frame-driven fluid-transfer logic.
//!
//! One `Session::tick` per rendered frame; all mutation is synchronous
//! within the tick. The host drains `HostEvent`s afterwards and applies
//! them to meshes, particles, and tweens on its side.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod carrier;
pub mod session;
pub mod systems;
pub mod vessel;

pub use carrier::Carrier;
pub use session::Session;
pub use vessel::{Vessel, VesselRegistry};
