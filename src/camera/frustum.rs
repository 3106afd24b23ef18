//! Frame containment tests in normalized device coordinates.
//!
//! Points are pushed through a view-projection matrix and divided by `w`;
//! a point is inside when its NDC lies within the margin-shrunk frame on
//! X/Y and within the clip range on Z.

use glam::{Mat4, Vec3};

/// Homogeneous `w` below which a projection is treated as degenerate.
pub const W_EPSILON: f32 = 1e-6;

/// Outcome of testing a point set against the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    /// Every point is inside the margin-shrunk frame.
    Inside,
    /// The point at this index falls outside.
    Outside(usize),
    /// The point at this index projects with near-zero `w`.
    Degenerate(usize),
}

impl Containment {
    /// Whether every point was inside.
    #[inline]
    pub fn is_inside(self) -> bool {
        self == Self::Inside
    }
}

/// NDC bounds of the usable frame for a given margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameBounds {
    /// Maximum |NDC x| and |NDC y|.
    pub xy_limit: f32,
    /// Maximum |NDC z|.
    pub z_limit: f32,
}

impl FrameBounds {
    /// Bounds reserving `margin` of the half-frame on every side.
    pub fn with_margin(margin: f32) -> Self {
        Self {
            xy_limit: 1.0 - margin,
            z_limit: 1.0,
        }
    }

    /// Test one NDC point.
    #[inline]
    pub fn contains_ndc(&self, ndc: Vec3) -> bool {
        ndc.x.abs() <= self.xy_limit
            && ndc.y.abs() <= self.xy_limit
            && ndc.z.abs() <= self.z_limit
    }

    /// Test every world-space point against a view-projection matrix.
    ///
    /// Stops at the first point that is outside or degenerate. An empty
    /// point set is trivially inside.
    pub fn check(&self, view_proj: Mat4, points: &[Vec3]) -> Containment {
        for (i, point) in points.iter().enumerate() {
            let clip = view_proj * point.extend(1.0);
            if clip.w.abs() < W_EPSILON {
                return Containment::Degenerate(i);
            }
            if !self.contains_ndc(clip.truncate() / clip.w) {
                return Containment::Outside(i);
            }
        }
        Containment::Inside
    }
}
