//! sim_types: component types shared across the injection-sim crates.
//!
//! These are plain data with small methods; the per-tick systems that
//! mutate them live in `sim_core`. Nothing here touches the host engine.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod boundary;
pub mod components;
pub mod fill;
pub mod timer;

pub use boundary::{BoundaryError, BoundaryRegion, ColliderExtent};
pub use components::{
    FillDirection, HostEvent, LiquidColor, PointerFrame, PointerHit, VesselId, VesselKind,
    VisualTarget,
};
pub use fill::{Fill, FillError};
pub use timer::TransferTimer;
