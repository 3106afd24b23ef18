//! Axis-aligned bounding volume of a point set.

use glam::Vec3;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Componentwise minimum.
    pub min: Vec3,
    /// Componentwise maximum.
    pub max: Vec3,
    /// Midpoint of `min` and `max`.
    pub center: Vec3,
}

impl Aabb {
    /// Extent along each axis.
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Length of the min-to-max diagonal.
    #[inline]
    pub fn diagonal(&self) -> f32 {
        self.size().length()
    }
}

/// Bounding box of `points` in a single pass, or `None` when empty.
pub fn compute_aabb(points: &[Vec3]) -> Option<Aabb> {
    let (first, rest) = points.split_first()?;
    let (min, max) = rest
        .iter()
        .fold((*first, *first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
    Some(Aabb {
        min,
        max,
        center: (min + max) / 2.0,
    })
}

/// Arithmetic mean of `points`, or `None` when empty.
pub fn centroid(points: &[Vec3]) -> Option<Vec3> {
    if points.is_empty() {
        return None;
    }
    Some(points.iter().copied().sum::<Vec3>() / points.len() as f32)
}

/// Relative divergence at which the centroid pull saturates.
const FULL_BLEND_DIVERGENCE: f32 = 0.3;
/// Maximum pull toward the centroid.
const MAX_CENTROID_BLEND: f32 = 0.5;

/// Framing target for `points`: the box center, pulled toward the vertex
/// centroid when the two diverge relative to the box diagonal.
///
/// Lopsided shapes (corner units, L-brackets) read as centered when the
/// target sits between the box center and the mass of the geometry.
pub fn visual_center(aabb: &Aabb, points: &[Vec3]) -> Vec3 {
    let Some(centroid) = centroid(points) else {
        return aabb.center;
    };
    let diagonal = aabb.diagonal();
    if diagonal <= 0.0 {
        return aabb.center;
    }
    let divergence = (aabb.center - centroid).length() / diagonal;
    let blend = (divergence / FULL_BLEND_DIVERGENCE).min(1.0)
        * MAX_CENTROID_BLEND;
    aabb.center.lerp(centroid, blend)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_point_set_has_no_box() {
        assert!(compute_aabb(&[]).is_none());
        assert!(centroid(&[]).is_none());
    }

    #[test]
    fn single_point_box_is_degenerate() {
        let p = Vec3::new(1.0, -2.0, 3.0);
        let aabb = compute_aabb(&[p]).unwrap();
        assert_eq!(aabb.min, p);
        assert_eq!(aabb.max, p);
        assert_eq!(aabb.center, p);
        assert_eq!(aabb.diagonal(), 0.0);
    }

    #[test]
    fn min_never_exceeds_max() {
        let points = [
            Vec3::new(3.0, -1.0, 0.5),
            Vec3::new(-2.0, 4.0, -0.5),
            Vec3::new(0.0, 0.0, 9.0),
            Vec3::new(1.0, -7.0, 2.0),
        ];
        let aabb = compute_aabb(&points).unwrap();
        assert!(aabb.min.cmple(aabb.max).all());
        assert_eq!(aabb.min, Vec3::new(-2.0, -7.0, -0.5));
        assert_eq!(aabb.max, Vec3::new(3.0, 4.0, 9.0));
        assert_eq!(aabb.center, Vec3::new(0.5, -1.5, 4.25));
    }

    #[test]
    fn symmetric_shape_centers_on_box() {
        let points = [Vec3::splat(-1.0), Vec3::splat(1.0)];
        let aabb = compute_aabb(&points).unwrap();
        assert_eq!(visual_center(&aabb, &points), Vec3::ZERO);
    }

    #[test]
    fn lopsided_shape_pulls_toward_centroid() {
        // Many vertices clustered at one end of a long box.
        let mut points = vec![Vec3::new(10.0, 0.0, 0.0)];
        points.extend(std::iter::repeat(Vec3::ZERO).take(9));
        let aabb = compute_aabb(&points).unwrap();
        let center = visual_center(&aabb, &points);
        // Box center is 5, centroid is 1; divergence 0.4 saturates the blend.
        assert!((center.x - 3.0).abs() < 1e-5, "center = {center}");
    }
}
