//! Ordered presentation of destination vessels.
//!
//! Advancing past the end is a silent no-op: a short or empty list halts
//! progression rather than surfacing a fault.

use crate::vessel::VesselRegistry;
use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sim_types::{FillDirection, HostEvent, VesselId};

/// One queued destination and where its placement tween should land it.
#[derive(Debug, Clone, Copy)]
pub struct SequenceEntry {
    pub vessel: VesselId,
    pub target: Vec3,
}

#[derive(Debug, Clone)]
pub struct VesselSequence {
    entries: Vec<SequenceEntry>,
    cursor: usize,
    fall_duration_s: f32,
    rng: ChaCha8Rng,
}

impl VesselSequence {
    #[must_use]
    pub fn new(entries: Vec<SequenceEntry>, fall_duration_s: f32, seed: u64) -> Self {
        Self {
            entries,
            cursor: 0,
            fall_duration_s,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.cursor >= self.entries.len()
    }

    /// The most recently presented vessel, i.e. the active injection
    /// target. `None` until the first `advance`.
    #[must_use]
    pub fn current(&self) -> Option<VesselId> {
        self.cursor
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .map(|e| e.vessel)
    }

    /// Present the next vessel: unhide it, roll its fill side, and kick
    /// off the fire-and-forget placement tween. Returns the presented id,
    /// or `None` once the list is exhausted.
    pub fn advance(
        &mut self,
        vessels: &mut VesselRegistry,
        out: &mut Vec<HostEvent>,
    ) -> Option<VesselId> {
        let Some(entry) = self.entries.get(self.cursor) else {
            tracing::debug!(target: "sequence", "advance past end; sequence exhausted");
            return None;
        };
        let dir = if self.rng.gen_bool(0.5) {
            FillDirection::PositiveX
        } else {
            FillDirection::NegativeX
        };
        if let Some(v) = vessels.get_mut(entry.vessel) {
            v.fill_direction = dir;
        }
        out.push(HostEvent::VesselShown {
            vessel: entry.vessel,
        });
        out.push(HostEvent::SetFillDirection {
            vessel: entry.vessel,
            dir,
        });
        out.push(HostEvent::MoveTo {
            vessel: entry.vessel,
            target: entry.target,
            duration_s: self.fall_duration_s,
        });
        tracing::info!(
            target: "sequence",
            vessel = entry.vessel.0,
            index = self.cursor,
            "presented next container"
        );
        self.cursor += 1;
        Some(entry.vessel)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use sim_types::{BoundaryRegion, ColliderExtent, LiquidColor};

    #[allow(clippy::cast_precision_loss)]
    fn registry_with(n: usize) -> (VesselRegistry, Vec<SequenceEntry>) {
        let mut reg = VesselRegistry::new();
        reg.register_source(Vec3::ZERO, LiquidColor::new(1.0, 0.0, 0.0));
        let bounds = BoundaryRegion::from_extents(&[ColliderExtent {
            center_x: 0.0,
            center_z: 0.0,
            size_x: 1.0,
            size_z: 1.0,
        }])
        .unwrap();
        let entries = (0..n)
            .map(|i| SequenceEntry {
                vessel: reg.register_destination(Vec3::new(0.0, 4.0, 0.0), bounds, 0.4),
                target: Vec3::new(i as f32, 0.0, 0.0),
            })
            .collect();
        (reg, entries)
    }

    #[test]
    fn extra_advance_on_exhausted_list_is_a_silent_noop() {
        let (mut reg, entries) = registry_with(3);
        let mut seq = VesselSequence::new(entries, 1.5, 7);
        let mut out = Vec::new();
        for _ in 0..3 {
            assert!(seq.advance(&mut reg, &mut out).is_some());
        }
        let last = seq.current();
        out.clear();
        assert!(seq.advance(&mut reg, &mut out).is_none());
        assert!(out.is_empty());
        // The active target stays on the final vessel.
        assert_eq!(seq.current(), last);
    }

    #[test]
    fn presentation_emits_show_roll_and_move() {
        let (mut reg, entries) = registry_with(1);
        let target = entries[0].target;
        let mut seq = VesselSequence::new(entries, 1.5, 7);
        let mut out = Vec::new();
        let id = seq.advance(&mut reg, &mut out).unwrap();
        assert!(matches!(out[0], HostEvent::VesselShown { vessel } if vessel == id));
        assert!(matches!(out[1], HostEvent::SetFillDirection { vessel, dir }
            if vessel == id && reg.get(id).unwrap().fill_direction == dir));
        assert!(matches!(out[2], HostEvent::MoveTo { vessel, target: t, duration_s }
            if vessel == id && t == target && (duration_s - 1.5).abs() < f32::EPSILON));
    }

    #[test]
    fn fill_direction_rolls_are_deterministic_under_a_seed() {
        let roll_all = |seed: u64| {
            let (mut reg, entries) = registry_with(8);
            let ids: Vec<_> = entries.iter().map(|e| e.vessel).collect();
            let mut seq = VesselSequence::new(entries, 1.5, seed);
            let mut out = Vec::new();
            while seq.advance(&mut reg, &mut out).is_some() {}
            ids.iter()
                .map(|id| reg.get(*id).unwrap().fill_direction)
                .collect::<Vec<_>>()
        };
        assert_eq!(roll_all(42), roll_all(42));
    }
}
