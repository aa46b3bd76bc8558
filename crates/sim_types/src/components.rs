//! Shared ids, colors, per-tick pointer input, and the host-event seam.
//!
//! The host engine feeds one `PointerFrame` per tick (raycast already
//! resolved and tag-filtered on its side) and drains `HostEvent`s after
//! the tick. The sim never calls back into the host.

use glam::Vec3;

/// Opaque id for a registered vessel. Stable for the session's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VesselId(pub u32);

/// Which tag set a vessel belongs to on the host side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VesselKind {
    /// A vial the carrier can draw from.
    Source,
    /// A container the carrier can inject into.
    Destination,
}

/// Linear-space liquid color, carried from a source vial through the
/// carrier into a destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl LiquidColor {
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Which side (±X) fluid visually enters a destination from. Rolled per
/// vessel when the sequence presents it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillDirection {
    #[default]
    NegativeX,
    PositiveX,
}

impl FillDirection {
    /// Sign the host writes into the fill shader's direction param.
    #[must_use]
    pub fn shader_sign(self) -> f32 {
        match self {
            FillDirection::NegativeX => -1.0,
            FillDirection::PositiveX => 1.0,
        }
    }

    /// Facing for the injection particle effect: it points back across
    /// the vessel, opposite the fill side.
    #[must_use]
    pub fn effect_facing(self) -> Vec3 {
        match self {
            FillDirection::NegativeX => Vec3::X,
            FillDirection::PositiveX => Vec3::NEG_X,
        }
    }
}

/// The host's raycast result for this tick, already filtered to tagged
/// vessels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerHit {
    pub vessel: VesselId,
    pub kind: VesselKind,
    /// World-space contact point.
    pub point: Vec3,
}

/// One tick of pointer/touch input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerFrame {
    /// World-space point under the pointer, if the ray hit anything at all.
    pub world_point: Option<Vec3>,
    /// Mouse-button-held or single stationary touch.
    pub engaged: bool,
    /// Nearest tagged vessel under the pointer, if any.
    pub hit: Option<PointerHit>,
}

/// What a visual command applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualTarget {
    Carrier,
    Vessel(VesselId),
}

/// Commands for the host's visual/placement collaborators, drained after
/// each tick. All are fire-and-forget; nothing signals back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Fill shader param for a liquid mesh.
    SetFill { target: VisualTarget, fraction: f32 },
    /// Liquid color for a mesh (and its particle effect, if playing).
    SetLiquidColor {
        target: VisualTarget,
        color: LiquidColor,
    },
    /// Normalized plunger travel for the carrier: 0 = fully drawn out
    /// (full syringe), 1 = pushed to the end stop (empty syringe).
    SetPlunger { t: f32 },
    /// Wobble shader params for the carrier's liquid mesh.
    SetWobble { x: f32, z: f32 },
    /// Fill-side roll for a destination, applied once when presented.
    SetFillDirection {
        vessel: VesselId,
        dir: FillDirection,
    },
    /// Start the injection particle effect on a destination.
    EffectPlay {
        vessel: VesselId,
        color: LiquidColor,
    },
    /// Stop the injection particle effect on a destination.
    EffectStop { vessel: VesselId },
    /// Activate/unhide a queued vessel.
    VesselShown { vessel: VesselId },
    /// Fire-and-forget placement tween.
    MoveTo {
        vessel: VesselId,
        target: Vec3,
        duration_s: f32,
    },
}
