//! Axis-aligned X/Z boundary rectangle derived from collider footprints.
//!
//! Destinations carry one of these so the injection pin point can be
//! clamped onto the container's surface. Immutable after construction.

use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryError {
    /// A boundary needs at least one collider extent to be meaningful;
    /// sentinel infinities are not returned.
    #[error("boundary requires at least one collider extent")]
    NoExtents,
}

/// One box collider's footprint on the X/Z plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderExtent {
    pub center_x: f32,
    pub center_z: f32,
    pub size_x: f32,
    pub size_z: f32,
}

/// Union bounding rectangle of a set of collider extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryRegion {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl BoundaryRegion {
    pub fn from_extents(extents: &[ColliderExtent]) -> Result<Self, BoundaryError> {
        let first = extents.first().ok_or(BoundaryError::NoExtents)?;
        let mut region = Self {
            min_x: first.center_x - first.size_x / 2.0,
            max_x: first.center_x + first.size_x / 2.0,
            min_z: first.center_z - first.size_z / 2.0,
            max_z: first.center_z + first.size_z / 2.0,
        };
        for e in &extents[1..] {
            region.min_x = region.min_x.min(e.center_x - e.size_x / 2.0);
            region.max_x = region.max_x.max(e.center_x + e.size_x / 2.0);
            region.min_z = region.min_z.min(e.center_z - e.size_z / 2.0);
            region.max_z = region.max_z.max(e.center_z + e.size_z / 2.0);
        }
        Ok(region)
    }

    /// Clamp `p` into the rectangle on X/Z; Y passes through untouched.
    #[must_use]
    pub fn clamp(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            p.x.clamp(self.min_x, self.max_x),
            p.y,
            p.z.clamp(self.min_z, self.max_z),
        )
    }

    /// X/Z containment test.
    #[must_use]
    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.z >= self.min_z && p.z <= self.max_z
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn extent(cx: f32, cz: f32, sx: f32, sz: f32) -> ColliderExtent {
        ColliderExtent {
            center_x: cx,
            center_z: cz,
            size_x: sx,
            size_z: sz,
        }
    }

    #[test]
    fn empty_extents_is_an_error() {
        assert_eq!(
            BoundaryRegion::from_extents(&[]),
            Err(BoundaryError::NoExtents)
        );
    }

    #[test]
    fn union_spans_all_extents() {
        let r = BoundaryRegion::from_extents(&[
            extent(0.0, 0.0, 2.0, 2.0),
            extent(3.0, -1.0, 1.0, 4.0),
        ])
        .unwrap();
        assert_eq!(r.min_x, -1.0);
        assert_eq!(r.max_x, 3.5);
        assert_eq!(r.min_z, -3.0);
        assert_eq!(r.max_z, 1.0);
    }

    #[test]
    fn clamp_is_identity_inside_and_projects_outside() {
        let r = BoundaryRegion::from_extents(&[extent(0.0, 0.0, 2.0, 2.0)]).unwrap();
        let inside = Vec3::new(0.5, 3.0, -0.5);
        assert_eq!(r.clamp(inside), inside);
        let outside = Vec3::new(5.0, 3.0, -9.0);
        let clamped = r.clamp(outside);
        assert!(r.contains(clamped));
        // Y is never touched.
        assert_eq!(clamped.y, 3.0);
        assert_eq!(clamped, Vec3::new(1.0, 3.0, -1.0));
    }
}
