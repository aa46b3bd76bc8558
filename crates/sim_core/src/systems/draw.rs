//! Draw transfer: extract fluid from a source vial into the carrier.
//!
//! Interruption policy: any tick the pointer is not engaging the source
//! discards the partial draw (timer back to zero). Injection pauses
//! instead of discarding; see `inject`.

use crate::carrier::Carrier;
use crate::vessel::Vessel;
use sim_types::{HostEvent, TransferTimer, VisualTarget};

#[derive(Debug, Clone)]
pub struct DrawSystem {
    timer: TransferTimer,
}

impl DrawSystem {
    #[must_use]
    pub fn new(draw_sample_time_s: f32) -> Self {
        Self {
            timer: TransferTimer::new(draw_sample_time_s),
        }
    }

    /// Partial progress of the in-flight draw (tests and HUDs).
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    /// One tick. `engaged_source` is the vial under an engaged pointer,
    /// or `None` when the pointer is off it or released. Returns true on
    /// the tick the carrier becomes full.
    pub fn step(
        &mut self,
        engaged_source: Option<&Vessel>,
        carrier: &mut Carrier,
        dt: f32,
        out: &mut Vec<HostEvent>,
    ) -> bool {
        if carrier.fill.is_full() {
            return false;
        }
        let Some(source) = engaged_source else {
            // Partial draws are abandoned, not paused.
            self.timer.reset();
            return false;
        };

        self.timer.advance(dt);
        let progress = self.timer.progress();
        if progress < 1.0 {
            // Needle stays in the vial until the draw finishes.
            carrier.pin_to(source.pos);
        }

        let Ok(done) = carrier.fill.advance(progress) else {
            return false;
        };
        out.push(HostEvent::SetFill {
            target: VisualTarget::Carrier,
            fraction: progress,
        });
        out.push(HostEvent::SetPlunger { t: 1.0 - progress });
        if let Some(color) = source.color {
            out.push(HostEvent::SetLiquidColor {
                target: VisualTarget::Carrier,
                color,
            });
        }

        if done {
            carrier.held_color = source.color;
            self.timer.reset();
            tracing::info!(
                target: "transfer",
                vessel = source.id.0,
                "draw complete; carrier full"
            );
        }
        done
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use glam::Vec3;
    use sim_types::{Fill, LiquidColor, VesselId, VesselKind};

    fn vial() -> Vessel {
        Vessel {
            id: VesselId(0),
            kind: VesselKind::Source,
            fill: Fill::Full,
            color: Some(LiquidColor::new(0.9, 0.1, 0.1)),
            boundary: None,
            pos: Vec3::new(2.0, 0.5, 1.0),
            effect_height: 0.5,
            fill_direction: sim_types::FillDirection::default(),
        }
    }

    #[test]
    fn carrier_is_pinned_to_vial_until_completion() {
        let mut draw = DrawSystem::new(1.0);
        let mut carrier = Carrier::new(Vec3::new(0.0, 2.0, 0.0));
        let v = vial();
        let mut out = Vec::new();

        draw.step(Some(&v), &mut carrier, 0.5, &mut out);
        assert_eq!(carrier.pos, v.pos);
        assert!(!carrier.fill.is_full());

        // Completion tick: no pin, carrier full, color captured.
        carrier.follow_pointer(Vec3::new(5.0, 0.0, 5.0));
        let done = draw.step(Some(&v), &mut carrier, 0.5, &mut out);
        assert!(done);
        assert!(carrier.fill.is_full());
        assert_eq!(carrier.held_color, v.color);
        assert_eq!(carrier.pos, Vec3::new(5.0, 2.0, 5.0));
    }

    #[test]
    fn disengaging_discards_partial_progress() {
        let mut draw = DrawSystem::new(2.0);
        let mut carrier = Carrier::new(Vec3::ZERO);
        let v = vial();
        let mut out = Vec::new();

        draw.step(Some(&v), &mut carrier, 0.8, &mut out);
        assert_eq!(draw.progress(), 0.4);

        // Pointer released for one tick: progress is gone.
        draw.step(None, &mut carrier, 0.5, &mut out);
        assert_eq!(draw.progress(), 0.0);

        // Re-engaging starts over from zero.
        draw.step(Some(&v), &mut carrier, 0.5, &mut out);
        assert_eq!(draw.progress(), 0.25);
        assert_eq!(carrier.fill.fraction(), 0.25);
    }

    #[test]
    fn full_carrier_is_never_drawn_into() {
        let mut draw = DrawSystem::new(1.0);
        let mut carrier = Carrier::new(Vec3::ZERO);
        carrier.fill = Fill::Full;
        let v = vial();
        let mut out = Vec::new();
        assert!(!draw.step(Some(&v), &mut carrier, 1.0, &mut out));
        assert!(out.is_empty());
    }
}
