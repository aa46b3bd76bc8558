#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use glam::Vec3;
use sim_config::SimTuning;
use sim_core::systems::sequence::SequenceEntry;
use sim_core::{Session, VesselRegistry};
use sim_types::{
    BoundaryRegion, ColliderExtent, HostEvent, LiquidColor, PointerFrame, PointerHit, VesselId,
    VesselKind,
};

fn over(vessel: VesselId, kind: VesselKind, point: Vec3) -> PointerFrame {
    PointerFrame {
        world_point: Some(point),
        engaged: true,
        hit: Some(PointerHit {
            vessel,
            kind,
            point,
        }),
    }
}

/// With a single-container list, filling it exhausts the sequence:
/// progression silently halts and the filled container stays inert even
/// under further engaged pointer ticks.
#[test]
fn filled_final_container_leaves_the_session_inert() {
    let mut reg = VesselRegistry::new();
    let vial_pos = Vec3::new(2.0, 0.5, 0.0);
    let vial = reg.register_source(vial_pos, LiquidColor::new(0.2, 0.3, 0.9));
    let bounds = BoundaryRegion::from_extents(&[ColliderExtent {
        center_x: 0.0,
        center_z: 0.0,
        size_x: 2.0,
        size_z: 2.0,
    }])
    .unwrap();
    let cup = reg.register_destination(Vec3::new(0.0, 4.0, 0.0), bounds, 0.4);

    let mut out = Vec::new();
    let mut session = Session::new(
        SimTuning {
            draw_sample_time_s: 1.0,
            inject_time_s: 1.0,
            ..SimTuning::default()
        },
        reg,
        vec![SequenceEntry {
            vessel: cup,
            target: Vec3::ZERO,
        }],
        Vec3::new(0.0, 2.0, 0.0),
        7,
        &mut out,
    );

    // Draw, then inject to completion.
    session.tick(&over(vial, VesselKind::Source, vial_pos), 1.0, &mut out);
    assert!(session.carrier().fill.is_full());
    let cup_point = Vec3::new(0.2, 0.4, 0.1);
    session.tick(&over(cup, VesselKind::Destination, cup_point), 1.0, &mut out);
    assert!(session.vessels().get(cup).unwrap().fill.is_full());
    assert!(session.sequence().is_terminal());

    // Refill the carrier, then keep injecting at the full container: the
    // no-op guard holds and nothing is emitted for it.
    session.tick(&over(vial, VesselKind::Source, vial_pos), 1.0, &mut out);
    assert!(session.carrier().fill.is_full());
    for _ in 0..5 {
        out.clear();
        session.tick(&over(cup, VesselKind::Destination, cup_point), 1.0, &mut out);
        assert!(session.carrier().fill.is_full(), "carrier never drains into a full container");
        assert!(
            !out.iter().any(|ev| matches!(
                ev,
                HostEvent::SetFill { .. } | HostEvent::EffectPlay { .. } | HostEvent::VesselShown { .. }
            )),
            "full container is inert"
        );
    }
}
