//! Lens-shift recentering on the projected silhouette.
//!
//! The distance solve centers the 3D bounding box, which is not where the
//! geometry appears once perspective foreshortens the near side. These
//! helpers shift the lens so the visible extent is centered instead.

use glam::{Vec2, Vec3};

use crate::camera::{CameraRig, FrameBounds, ProjectionKind, StudioCamera};

/// Attempts to recapture clipped points after recentering.
const REVALIDATE_ATTEMPTS: u32 = 3;
/// Pull-back factor per recapture attempt.
const PULL_BACK: f32 = 1.05;
/// Ortho scale growth when a point leaves the frame.
const ORTHO_GROWTH: f32 = 1.1;

/// Min/max of the projected points in normalized frame coordinates, or
/// `None` when no point projects.
pub fn projected_extent(
    camera: &StudioCamera,
    points: &[Vec3],
    aspect: f32,
) -> Option<(Vec2, Vec2)> {
    points
        .iter()
        .filter_map(|p| camera.world_to_frame(*p, aspect))
        .map(|uv| uv.truncate())
        .fold(None, |acc, uv| match acc {
            None => Some((uv, uv)),
            Some((lo, hi)) => Some((lo.min(uv), hi.max(uv))),
        })
}

/// Shift the lens so the projected extent's midpoint lands on the frame
/// center. Returns the applied shift.
pub fn recenter(camera: &mut StudioCamera, points: &[Vec3], aspect: f32) -> Vec2 {
    if let Some((lo, hi)) = projected_extent(camera, points, aspect) {
        let offset = (lo + hi) / 2.0 - Vec2::splat(0.5);
        camera.shift -= offset;
    }
    camera.shift
}

/// Re-check containment after recentering and back off if the shift pushed
/// geometry out of frame.
///
/// Perspective cameras halve the shift and pull back 5% up to three times.
/// Orthographic cameras grow the scale by 10% once if any point leaves
/// the frame. Returns whether the final placement contains every point.
pub fn revalidate(
    rig: &mut CameraRig,
    points: &[Vec3],
    aspect: f32,
    margin: f32,
) -> bool {
    match rig.camera.projection {
        ProjectionKind::Perspective => {
            let bounds = FrameBounds::with_margin(margin);
            let contained = |rig: &CameraRig| {
                bounds
                    .check(rig.camera.view_projection(aspect), points)
                    .is_inside()
            };
            if contained(rig) {
                return true;
            }
            for attempt in 1..=REVALIDATE_ATTEMPTS {
                rig.camera.shift *= 0.5;
                let distance = rig.camera_distance() * PULL_BACK;
                rig.place_camera(distance);
                if contained(rig) {
                    log::debug!("recaptured clipped points after {attempt} attempt(s)");
                    return true;
                }
            }
            false
        }
        ProjectionKind::Orthographic => {
            let escaped = points.iter().any(|p| {
                rig.camera.world_to_frame(*p, aspect).is_none_or(|uv| {
                    uv.x < 0.0 || uv.x > 1.0 || uv.y < 0.0 || uv.y > 1.0
                })
            });
            if escaped {
                rig.camera.ortho_scale *= ORTHO_GROWTH;
            }
            !escaped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at(z: f32) -> StudioCamera {
        StudioCamera {
            position: Vec3::new(0.0, 0.0, z),
            fov: 60.0_f32.to_radians(),
            ..StudioCamera::default()
        }
    }

    #[test]
    fn off_center_geometry_is_shifted_to_center() {
        let mut camera = camera_at(10.0);
        let points = [Vec3::new(1.0, 0.5, 0.0), Vec3::new(3.0, 1.5, 0.0)];
        let shift = recenter(&mut camera, &points, 1.0);
        assert!(shift.x < 0.0 && shift.y < 0.0);

        let (lo, hi) = projected_extent(&camera, &points, 1.0).unwrap();
        let mid = (lo + hi) / 2.0;
        assert!((mid - Vec2::splat(0.5)).length() < 1e-5, "mid = {mid}");
    }

    #[test]
    fn centered_geometry_needs_no_shift() {
        let mut camera = camera_at(10.0);
        let points = [Vec3::new(-1.0, -1.0, 0.0), Vec3::new(1.0, 1.0, 0.0)];
        let shift = recenter(&mut camera, &points, 1.0);
        assert!(shift.length() < 1e-6);
    }

    #[test]
    fn nothing_projectable_leaves_shift_alone() {
        let mut camera = camera_at(0.0);
        camera.shift = Vec2::new(0.2, 0.0);
        // Point on the camera plane has w = 0.
        let shift = recenter(&mut camera, &[Vec3::new(1.0, 0.0, 0.0)], 1.0);
        assert_eq!(shift, Vec2::new(0.2, 0.0));
    }

    #[test]
    fn revalidate_pulls_back_clipped_perspective() {
        let mut rig = CameraRig::new(camera_at(0.0));
        rig.place_camera(2.0);
        rig.camera.shift = Vec2::new(0.4, 0.0);
        let points = [Vec3::new(-0.5, 0.0, 0.0), Vec3::new(0.5, 0.0, 0.0)];

        let before = rig.camera_distance();
        assert!(revalidate(&mut rig, &points, 1.0, 0.0));
        assert!(rig.camera.shift.x < 0.4);
        assert!(rig.camera_distance() > before);
    }

    #[test]
    fn revalidate_grows_clipped_orthographic() {
        let mut rig = CameraRig::new(StudioCamera {
            projection: ProjectionKind::Orthographic,
            ortho_scale: 1.0,
            ..camera_at(0.0)
        });
        rig.place_camera(5.0);
        let points = [Vec3::new(0.8, 0.0, 0.0)];
        assert!(!revalidate(&mut rig, &points, 1.0, 0.0));
        assert!((rig.camera.ortho_scale - 1.1).abs() < 1e-6);
    }
}
