//! Projective fit: camera distance (perspective) or ortho scale
//! (orthographic) that fits a point set inside the frame.

use glam::{Quat, Vec3};

use super::bounds::Aabb;
use crate::camera::{CameraRig, FrameBounds, RenderFrame};
use crate::error::FramingIssue;
use crate::options::FramingOptions;

/// Outcome of the distance/scale solve, before recentering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOutcome {
    /// Camera distance from the rig center.
    pub distance: f32,
    /// Containment checks performed.
    pub iterations: u32,
    /// Whether the final placement passed the containment check.
    pub converged: bool,
}

/// Width, height and depth of `points` in a camera oriented by
/// `orientation`. Independent of the camera position.
pub fn camera_space_extents(orientation: Quat, points: &[Vec3]) -> Vec3 {
    let inverse = orientation.inverse();
    let mut lo = Vec3::splat(f32::INFINITY);
    let mut hi = Vec3::splat(f32::NEG_INFINITY);
    for p in points {
        let local = inverse * *p;
        lo = lo.min(local);
        hi = hi.max(local);
    }
    if points.is_empty() {
        Vec3::ZERO
    } else {
        hi - lo
    }
}

/// Distance at which a box of `extents` fits both field-of-view axes,
/// scaled by `1 + margin`.
///
/// Returns `None` when the result is not a positive finite distance (a
/// single point, or an invalid field of view).
pub fn perspective_distance(
    extents: Vec3,
    fov_x: f32,
    fov_y: f32,
    margin: f32,
) -> Option<f32> {
    let tan_x = (fov_x / 2.0).tan();
    let tan_y = (fov_y / 2.0).tan();
    if !(tan_x > 0.0 && tan_y > 0.0) {
        return None;
    }
    let fit_width = (extents.x / 2.0) / tan_x;
    let fit_height = (extents.y / 2.0) / tan_y;
    let distance = (fit_width.max(fit_height) + extents.z / 2.0) * (1.0 + margin);
    (distance.is_finite() && distance > 0.0).then_some(distance)
}

/// Width-equivalent ortho scale that fits `extents`, scaled by
/// `1 + margin`.
pub fn ortho_scale(extents: Vec3, aspect: f32, margin: f32) -> f32 {
    let scale = extents.x.max(extents.y * aspect) * (1.0 + margin);
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        (1.0 + margin).max(f32::EPSILON)
    }
}

/// Iterative distance/scale solver for one camera rig.
pub struct FitSolver<'a> {
    options: &'a FramingOptions,
    frame: RenderFrame,
}

impl<'a> FitSolver<'a> {
    /// Solver using `options` for iteration limits and fallbacks.
    pub fn new(options: &'a FramingOptions, frame: RenderFrame) -> Self {
        Self { options, frame }
    }

    /// Place a perspective camera so every point lies inside the frame with
    /// `margin` reserved on each side.
    ///
    /// On containment failure the working margin grows by a fixed step (up
    /// to the cap) and the distance is recomputed. The last placement is
    /// kept when the iteration budget runs out.
    pub fn fit_perspective(
        &self,
        rig: &mut CameraRig,
        points: &[Vec3],
        margin: f32,
    ) -> FitOutcome {
        let aspect = self.frame.aspect();
        let fallback = self.options.fallback_distance;
        let Some((fov_x, fov_y)) = rig.camera.fov_axes(aspect) else {
            log::warn!(
                "{}",
                FramingIssue::DegenerateProjection {
                    fallback_distance: fallback,
                }
            );
            rig.place_camera(fallback);
            return FitOutcome {
                distance: fallback,
                iterations: 0,
                converged: false,
            };
        };

        let extents = camera_space_extents(rig.camera.orientation, points);
        let bounds = FrameBounds::with_margin(margin);
        let max_iterations = self.options.max_iterations.max(1);
        let mut working_margin = margin;
        let mut distance = fallback;

        for iteration in 1..=max_iterations {
            distance = perspective_distance(extents, fov_x, fov_y, working_margin)
                .unwrap_or(fallback);
            rig.place_camera(distance);

            let containment =
                bounds.check(rig.camera.view_projection(aspect), points);
            if containment.is_inside() {
                return FitOutcome {
                    distance,
                    iterations: iteration,
                    converged: true,
                };
            }
            log::debug!(
                "framing iteration {iteration}: {containment:?} at distance \
                 {distance:.4} (working margin {working_margin:.3})"
            );
            working_margin = (working_margin + self.options.margin_step)
                .min(self.options.margin_cap)
                .max(working_margin);
        }

        log::warn!(
            "{}",
            FramingIssue::NonConvergent {
                iterations: max_iterations,
            }
        );
        FitOutcome {
            distance,
            iterations: max_iterations,
            converged: false,
        }
    }

    /// Place an orthographic camera and size its ortho scale to the points.
    ///
    /// Orthographic framing does not depend on distance, so the camera is
    /// parked at a multiple of the box diagonal and no iteration is needed.
    pub fn fit_orthographic(
        &self,
        rig: &mut CameraRig,
        points: &[Vec3],
        aabb: &Aabb,
        margin: f32,
    ) -> FitOutcome {
        let diagonal = aabb.diagonal();
        let diagonal = if diagonal > 0.0 { diagonal } else { 1.0 };
        let distance = diagonal * self.options.ortho_distance_factor;
        rig.place_camera(distance);

        let extents = camera_space_extents(rig.camera.orientation, points);
        rig.camera.ortho_scale = ortho_scale(extents, self.frame.aspect(), margin);
        FitOutcome {
            distance,
            iterations: 1,
            converged: true,
        }
    }
}
