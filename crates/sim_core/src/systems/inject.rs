//! Inject transfer: push the carrier's fluid into the active destination.
//!
//! The pin point is the boundary-clamped pointer position; it freezes
//! while fluid is actively flowing and tracks the pointer again whenever
//! the transfer is paused. Disengaging pauses (progress retained), unlike
//! draw which discards.

use crate::carrier::Carrier;
use crate::vessel::Vessel;
use glam::Vec3;
use sim_types::{HostEvent, TransferTimer, VisualTarget};

#[derive(Debug, Clone)]
pub struct InjectSystem {
    timer: TransferTimer,
    pin: Option<Vec3>,
}

impl InjectSystem {
    #[must_use]
    pub fn new(inject_time_s: f32) -> Self {
        Self {
            timer: TransferTimer::new(inject_time_s),
            pin: None,
        }
    }

    /// Partial progress of the in-flight injection.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    /// One tick against the active destination. `world` is the pointer's
    /// world point; `engaged` means the pointer is held down on this
    /// destination. Returns true on the tick the destination becomes full.
    pub fn step(
        &mut self,
        world: Vec3,
        engaged: bool,
        dest: &mut Vessel,
        carrier: &mut Carrier,
        dt: f32,
        out: &mut Vec<HostEvent>,
    ) -> bool {
        // Once full, nothing happens until the sequence presents the next
        // vessel.
        if dest.fill.is_full() {
            return false;
        }
        // Hold the pin while fluid is flowing; otherwise track the
        // clamped pointer at the penetration height.
        if !dest.fill.is_filling() {
            let clamped = dest.boundary.map_or(world, |b| b.clamp(world));
            self.pin = Some(Vec3::new(clamped.x, dest.effect_height, clamped.z));
        }
        let Some(pin) = self.pin else {
            return false;
        };

        if !engaged {
            dest.fill.pause();
            out.push(HostEvent::EffectStop { vessel: dest.id });
            return false;
        }
        let Some(color) = carrier.held_color else {
            return false;
        };

        carrier.pin_to(pin);
        if !dest.fill.is_filling() {
            if dest.fill.begin().is_err() {
                return false;
            }
            out.push(HostEvent::SetLiquidColor {
                target: VisualTarget::Vessel(dest.id),
                color,
            });
            out.push(HostEvent::EffectPlay {
                vessel: dest.id,
                color,
            });
            tracing::debug!(target: "transfer", vessel = dest.id.0, "inject flowing");
        }

        self.timer.advance(dt);
        let progress = self.timer.progress();
        let Ok(done) = dest.fill.advance(progress) else {
            return false;
        };
        out.push(HostEvent::SetFill {
            target: VisualTarget::Vessel(dest.id),
            fraction: dest.fill.fraction(),
        });
        // The carrier drains in mirror with the same progress, regardless
        // of what the destination reports.
        out.push(HostEvent::SetFill {
            target: VisualTarget::Carrier,
            fraction: 1.0 - progress,
        });
        out.push(HostEvent::SetPlunger { t: progress });
        if progress >= 1.0 {
            carrier.drain();
        }

        if done {
            dest.color = Some(color);
            self.timer.reset();
            self.pin = None;
            out.push(HostEvent::EffectStop { vessel: dest.id });
            tracing::info!(target: "transfer", vessel = dest.id.0, "inject complete");
        }
        done
    }
}
