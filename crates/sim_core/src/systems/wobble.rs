//! Liquid wobble integrator for the carrier's mesh.
//!
//! Carrier motion feeds clamped impulses into two axis amounts which
//! decay exponentially and oscillate on a sine pulse; the host writes the
//! resulting pair into the wobble shader params. Runs while the carrier
//! holds fluid; suppressed during a draw (the needle sits in the vial).

use glam::Vec3;
use sim_config::WobbleCfg;
use sim_types::HostEvent;

#[derive(Debug, Clone)]
pub struct WobbleState {
    enabled: bool,
    time: f32,
    add_x: f32,
    add_z: f32,
    last_pos: Option<Vec3>,
}

impl Default for WobbleState {
    fn default() -> Self {
        Self {
            enabled: false,
            time: 0.5,
            add_x: 0.0,
            add_z: 0.0,
            last_pos: None,
        }
    }
}

impl WobbleState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current axis amplitudes (before the sine pulse).
    #[must_use]
    pub fn amounts(&self) -> (f32, f32) {
        (self.add_x, self.add_z)
    }

    pub fn step(&mut self, pos: Vec3, dt: f32, cfg: &WobbleCfg, out: &mut Vec<HostEvent>) {
        if !self.enabled || dt <= 0.0 {
            // Keep the reference position fresh so re-enabling does not
            // read a stale delta as a large velocity.
            self.last_pos = Some(pos);
            return;
        }
        self.time += dt;

        let recover = (dt * cfg.recovery).clamp(0.0, 1.0);
        self.add_x -= self.add_x * recover;
        self.add_z -= self.add_z * recover;

        let pulse = std::f32::consts::TAU * cfg.speed;
        let x = self.add_x * (pulse * self.time).sin();
        let z = self.add_z * (pulse * self.time).sin();

        let velocity = self
            .last_pos
            .map_or(Vec3::ZERO, |last| (last - pos) / dt);
        self.add_x += (velocity.x * cfg.max_wobble).clamp(-cfg.max_wobble, cfg.max_wobble);
        self.add_z += (velocity.z * cfg.max_wobble).clamp(-cfg.max_wobble, cfg.max_wobble);
        self.last_pos = Some(pos);

        out.push(HostEvent::SetWobble { x, z });
    }
}
