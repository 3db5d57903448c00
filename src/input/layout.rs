//! Pick rays and pit hit-testing.

use serde::{Deserialize, Serialize};

use crate::core::{PitId, PIT_COUNT};

/// A point or direction in presentation space.
pub type Vec3 = [f32; 3];

fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn length(a: Vec3) -> f32 {
    dot(a, a).sqrt()
}

/// A ray cast from the camera through the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray; `direction` is normalized here.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        let len = length(direction);
        let direction = if len > 0.0 {
            [direction[0] / len, direction[1] / len, direction[2] / len]
        } else {
            direction
        };
        Self { origin, direction }
    }

    /// Point at parameter `t`.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        [
            self.origin[0] + self.direction[0] * t,
            self.origin[1] + self.direction[1] * t,
            self.origin[2] + self.direction[2] * t,
        ]
    }
}

/// Hit-testing for pits.
///
/// Implemented by the presentation (or use [`SphereLayout`]).
pub trait PitLayout {
    /// Distance from the ray origin to `pit` if the ray hits it.
    ///
    /// Smaller is nearer; the mapper picks the smallest.
    fn hit_distance(&self, pit: PitId, ray: &Ray) -> Option<f32>;
}

/// Centre and inclusion radius of one slot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PitAnchor {
    pub position: Vec3,
    pub radius: f32,
}

/// One inclusion sphere per slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereLayout {
    anchors: [PitAnchor; PIT_COUNT],
}

impl SphereLayout {
    /// Build from explicit anchors (index = pit id).
    #[must_use]
    pub fn new(anchors: [PitAnchor; PIT_COUNT]) -> Self {
        Self { anchors }
    }

    /// The stock board: two rows of six pits 2.2 apart at z = +-1.8,
    /// stores at either end.
    #[must_use]
    pub fn standard() -> Self {
        let anchors = std::array::from_fn(|i| match i {
            0..=5 => PitAnchor {
                position: [(i as f32 - 2.5) * 2.2, 0.0, 1.8],
                radius: 0.8,
            },
            6 => PitAnchor {
                position: [7.5, 0.0, 0.0],
                radius: 1.3,
            },
            7..=12 => PitAnchor {
                position: [(2.5 - (i - 7) as f32) * 2.2, 0.0, -1.8],
                radius: 0.8,
            },
            _ => PitAnchor {
                position: [-7.5, 0.0, 0.0],
                radius: 1.3,
            },
        });
        Self { anchors }
    }

    /// Anchor for a slot.
    #[must_use]
    pub fn anchor(&self, pit: PitId) -> &PitAnchor {
        &self.anchors[pit.index()]
    }

    /// All anchors, index = pit id.
    #[must_use]
    pub fn anchors(&self) -> &[PitAnchor; PIT_COUNT] {
        &self.anchors
    }
}

impl Default for SphereLayout {
    fn default() -> Self {
        Self::standard()
    }
}

impl PitLayout for SphereLayout {
    fn hit_distance(&self, pit: PitId, ray: &Ray) -> Option<f32> {
        let anchor = self.anchor(pit);
        let to_centre = sub(anchor.position, ray.origin);
        let t = dot(to_centre, ray.direction);
        if t < 0.0 {
            return None;
        }

        let closest = ray.at(t);
        if length(sub(anchor.position, closest)) < anchor.radius {
            Some(length(to_centre))
        } else {
            None
        }
    }
}
