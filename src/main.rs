//! Headless demo host: drives a scripted injection session at 60 Hz.
//!
//! Stands in for the engine host. Pointer frames are scripted instead of
//! polled, raycasts are pre-resolved, and drained `HostEvent`s are logged
//! instead of applied to meshes/particles/tweens.

#![deny(warnings, clippy::all, clippy::pedantic)]

mod telemetry;

use anyhow::Result;
use glam::Vec3;
use sim_core::systems::sequence::SequenceEntry;
use sim_core::{Session, VesselRegistry};
use sim_types::{
    BoundaryRegion, ColliderExtent, HostEvent, LiquidColor, PointerFrame, PointerHit, VesselId,
    VesselKind,
};

const TICK_S: f32 = 1.0 / 60.0;

fn frame(vessel: VesselId, kind: VesselKind, point: Vec3, engaged: bool) -> PointerFrame {
    PointerFrame {
        world_point: Some(point),
        engaged,
        hit: Some(PointerHit {
            vessel,
            kind,
            point,
        }),
    }
}

fn drain(out: &mut Vec<HostEvent>) {
    for ev in out.drain(..) {
        tracing::debug!(target: "host", event = ?ev);
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ticks(seconds: f32) -> u32 {
    (seconds / TICK_S).round() as u32
}

fn run_phase(
    session: &mut Session,
    label: &str,
    pf: &PointerFrame,
    seconds: f32,
    out: &mut Vec<HostEvent>,
) {
    tracing::info!(target: "host", phase = label, seconds, "phase start");
    for _ in 0..ticks(seconds) {
        session.tick(pf, TICK_S, out);
        drain(out);
    }
}

fn main() -> Result<()> {
    telemetry::init(true);
    let tuning = sim_config::load_default()?;
    tracing::info!(target: "host", ?tuning, "config loaded");

    let mut reg = VesselRegistry::new();
    let vial_pos = Vec3::new(2.0, 0.5, 0.0);
    let vial = reg.register_source(vial_pos, LiquidColor::new(0.86, 0.12, 0.14));
    let bounds = BoundaryRegion::from_extents(&[
        ColliderExtent {
            center_x: 0.0,
            center_z: 0.0,
            size_x: 1.2,
            size_z: 1.2,
        },
        ColliderExtent {
            center_x: 0.4,
            center_z: 0.0,
            size_x: 1.2,
            size_z: 0.8,
        },
    ])?;
    let first = reg.register_destination(Vec3::new(0.0, 4.0, 0.0), bounds, 0.45);
    let second = reg.register_destination(Vec3::new(0.0, 4.0, 3.0), bounds, 0.45);

    let entries = vec![
        SequenceEntry {
            vessel: first,
            target: Vec3::new(0.0, 0.0, 0.0),
        },
        SequenceEntry {
            vessel: second,
            target: Vec3::new(0.0, 0.0, 3.0),
        },
    ];

    let mut out = Vec::new();
    let mut session = Session::new(tuning, reg, entries, Vec3::new(0.0, 2.0, 0.0), 7, &mut out);
    drain(&mut out);

    let cup_point = Vec3::new(0.3, 0.45, 0.1);
    for cup in [first, second] {
        // Hold over the vial until the syringe is full, with margin.
        run_phase(
            &mut session,
            "draw",
            &frame(vial, VesselKind::Source, vial_pos, true),
            tuning.draw_sample_time_s + 0.2,
            &mut out,
        );
        // Inject in two holds with a release in between; the pause keeps
        // the partial fill.
        run_phase(
            &mut session,
            "inject (first hold)",
            &frame(cup, VesselKind::Destination, cup_point, true),
            tuning.inject_time_s * 0.6,
            &mut out,
        );
        run_phase(
            &mut session,
            "inject (released)",
            &frame(cup, VesselKind::Destination, cup_point, false),
            0.5,
            &mut out,
        );
        run_phase(
            &mut session,
            "inject (second hold)",
            &frame(cup, VesselKind::Destination, cup_point, true),
            tuning.inject_time_s * 0.5,
            &mut out,
        );
    }

    let filled = [first, second]
        .into_iter()
        .filter(|id| session.vessels().get(*id).is_some_and(|v| v.fill.is_full()))
        .count();
    tracing::info!(
        target: "host",
        filled,
        terminal = session.sequence().is_terminal(),
        "script finished"
    );
    Ok(())
}
