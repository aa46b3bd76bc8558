//! Per-tick orchestration: pointer follow plus the draw/inject split.
//!
//! Exactly one of the two transfers runs in a tick, selected solely by
//! whether the carrier is full. All state the transfers touch is owned
//! here; nothing is global.

use crate::carrier::Carrier;
use crate::systems::draw::DrawSystem;
use crate::systems::inject::InjectSystem;
use crate::systems::sequence::{SequenceEntry, VesselSequence};
use crate::systems::wobble::WobbleState;
use crate::vessel::VesselRegistry;
use glam::Vec3;
use sim_config::SimTuning;
use sim_types::{HostEvent, PointerFrame, VesselKind, VisualTarget};

pub struct Session {
    tuning: SimTuning,
    vessels: VesselRegistry,
    carrier: Carrier,
    draw: DrawSystem,
    inject: InjectSystem,
    sequence: VesselSequence,
    wobble: WobbleState,
}

impl Session {
    /// Build a session and present the first destination. Initial carrier
    /// visuals (empty syringe, plunger at the end stop) are emitted into
    /// `out` for the host to apply before the first tick.
    pub fn new(
        tuning: SimTuning,
        vessels: VesselRegistry,
        entries: Vec<SequenceEntry>,
        carrier_start: Vec3,
        seed: u64,
        out: &mut Vec<HostEvent>,
    ) -> Self {
        let mut session = Self {
            draw: DrawSystem::new(tuning.draw_sample_time_s),
            inject: InjectSystem::new(tuning.inject_time_s),
            sequence: VesselSequence::new(entries, tuning.fall_duration_s, seed),
            carrier: Carrier::new(carrier_start),
            vessels,
            wobble: WobbleState::new(),
            tuning,
        };
        out.push(HostEvent::SetFill {
            target: VisualTarget::Carrier,
            fraction: 0.0,
        });
        out.push(HostEvent::SetPlunger { t: 1.0 });
        session.sequence.advance(&mut session.vessels, out);
        session
    }

    /// One simulated frame. The host resolves the pointer ray before
    /// calling and applies the drained events after.
    pub fn tick(&mut self, frame: &PointerFrame, dt: f32, out: &mut Vec<HostEvent>) {
        let Some(world) = frame.world_point else {
            return;
        };
        self.carrier.follow_pointer(world);
        // Wobble only while the carrier holds fluid; a draw never
        // overlaps (the carrier is not full during one).
        self.wobble.set_enabled(self.carrier.fill.is_full());

        if self.carrier.fill.is_full() {
            if let Some(dest_id) = self.sequence.current() {
                let engaged = frame.engaged
                    && frame
                        .hit
                        .is_some_and(|h| h.kind == VesselKind::Destination && h.vessel == dest_id);
                if let Some(dest) = self.vessels.get_mut(dest_id) {
                    let done = self
                        .inject
                        .step(world, engaged, dest, &mut self.carrier, dt, out);
                    if done {
                        self.sequence.advance(&mut self.vessels, out);
                    }
                }
            }
        } else {
            let engaged_source = if frame.engaged {
                frame
                    .hit
                    .filter(|h| h.kind == VesselKind::Source)
                    .and_then(|h| self.vessels.get(h.vessel))
            } else {
                None
            };
            self.draw.step(engaged_source, &mut self.carrier, dt, out);
        }

        self.wobble.step(self.carrier.pos, dt, &self.tuning.wobble, out);
    }

    #[must_use]
    pub fn carrier(&self) -> &Carrier {
        &self.carrier
    }

    #[must_use]
    pub fn vessels(&self) -> &VesselRegistry {
        &self.vessels
    }

    #[must_use]
    pub fn sequence(&self) -> &VesselSequence {
        &self.sequence
    }

    #[must_use]
    pub fn tuning(&self) -> &SimTuning {
        &self.tuning
    }
}
