//! Vessel records and the session's registry.

use glam::Vec3;
use sim_types::{BoundaryRegion, Fill, FillDirection, LiquidColor, VesselId, VesselKind};

/// One fluid container known to the session. Sources carry their fluid
/// color from construction; destinations get a color when filled.
#[derive(Debug, Clone)]
pub struct Vessel {
    pub id: VesselId,
    pub kind: VesselKind,
    pub fill: Fill,
    pub color: Option<LiquidColor>,
    /// Pin-clamping region; destinations only.
    pub boundary: Option<BoundaryRegion>,
    pub pos: Vec3,
    /// Height of the penetration/effect point above the container base.
    pub effect_height: f32,
    pub fill_direction: FillDirection,
}

/// All vessels registered for a session. Ids index into the backing list;
/// vessels are never removed in-scope (the host owns disposal).
#[derive(Debug, Clone, Default)]
pub struct VesselRegistry {
    vessels: Vec<Vessel>,
}

impl VesselRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source vial holding fluid of `color`.
    pub fn register_source(&mut self, pos: Vec3, color: LiquidColor) -> VesselId {
        let id = self.next_id();
        self.vessels.push(Vessel {
            id,
            kind: VesselKind::Source,
            fill: Fill::Full,
            color: Some(color),
            boundary: None,
            pos,
            effect_height: pos.y,
            fill_direction: FillDirection::default(),
        });
        id
    }

    /// Register a destination container with its pin boundary.
    pub fn register_destination(
        &mut self,
        pos: Vec3,
        boundary: BoundaryRegion,
        effect_height: f32,
    ) -> VesselId {
        let id = self.next_id();
        self.vessels.push(Vessel {
            id,
            kind: VesselKind::Destination,
            fill: Fill::Empty,
            color: None,
            boundary: Some(boundary),
            pos,
            effect_height,
            fill_direction: FillDirection::default(),
        });
        id
    }

    #[must_use]
    pub fn get(&self, id: VesselId) -> Option<&Vessel> {
        self.vessels.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: VesselId) -> Option<&mut Vessel> {
        self.vessels.get_mut(id.0 as usize)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vessels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vessels.is_empty()
    }

    fn next_id(&self) -> VesselId {
        VesselId(u32::try_from(self.vessels.len()).unwrap_or(u32::MAX))
    }
}
