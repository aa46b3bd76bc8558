//! The carrier (syringe): fill, held color, and position anchoring.

use glam::Vec3;
use sim_types::{Fill, LiquidColor};

/// Exactly one carrier exists per session. Its position follows the
/// pointer at a fixed home height, except while a transfer pins it.
#[derive(Debug, Clone)]
pub struct Carrier {
    pub fill: Fill,
    /// Color captured from the last fully drawn source vial. Present iff
    /// the carrier holds fluid.
    pub held_color: Option<LiquidColor>,
    pub pos: Vec3,
    home_y: f32,
}

impl Carrier {
    #[must_use]
    pub fn new(start_pos: Vec3) -> Self {
        Self {
            fill: Fill::Empty,
            held_color: None,
            pos: start_pos,
            home_y: start_pos.y,
        }
    }

    /// Track the pointer's world point at the carrier's home height.
    pub fn follow_pointer(&mut self, world: Vec3) {
        self.pos = Vec3::new(world.x, self.home_y, world.z);
    }

    /// Anchor the carrier at a transfer point (vial or penetration pin).
    pub fn pin_to(&mut self, point: Vec3) {
        self.pos = point;
    }

    /// Empty the carrier and drop its held color.
    pub fn drain(&mut self) {
        self.fill.reset();
        self.held_color = None;
    }
}
