//! Camera auto-framing.
//!
//! A framing pass reduces a point snapshot to its bounding box, centers the
//! rig on it, solves the camera distance (perspective) or ortho scale
//! (orthographic), then shifts the lens so the projected silhouette is
//! centered. Each pass starts from a zero lens shift and derives the
//! camera placement only from the geometry, the rig orientation and the
//! margin, so repeating a pass reproduces the same result.

pub mod bounds;
mod fine_tune;
mod lock;
pub mod recenter;
pub mod solver;

pub use bounds::{compute_aabb, Aabb};
pub use fine_tune::FineTune;
use glam::{Vec2, Vec3};
pub use lock::{FramingLock, FramingPass};
use serde::{Deserialize, Serialize};
pub use solver::{FitOutcome, FitSolver};

use crate::camera::{CameraRig, ProjectionKind, RenderFrame};
use crate::error::FramingIssue;
use crate::options::{FramingOptions, ViewPreset};

/// Camera placement produced by one framing pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FramingResult {
    /// World-space camera position.
    pub camera_position: Vec3,
    /// Rig controller location the camera was placed around.
    pub rig_center: Vec3,
    /// Projection the placement was solved for.
    pub projection: ProjectionKind,
    /// Camera distance (perspective) or ortho scale (orthographic).
    pub projection_param: f32,
    /// Horizontal lens shift in frame widths.
    pub shift_x: f32,
    /// Vertical lens shift in frame heights.
    pub shift_y: f32,
    /// Containment checks spent by the solver.
    pub iterations_used: u32,
    /// Whether the solver found a placement containing every point.
    pub converged: bool,
}

impl FramingResult {
    /// Snapshot of the rig's current camera placement.
    pub fn from_rig(rig: &CameraRig, iterations_used: u32, converged: bool) -> Self {
        let projection_param = match rig.camera.projection {
            ProjectionKind::Perspective => rig.camera_distance(),
            ProjectionKind::Orthographic => rig.camera.ortho_scale,
        };
        Self {
            camera_position: rig.camera.position,
            rig_center: rig.center,
            projection: rig.camera.projection,
            projection_param,
            shift_x: rig.camera.shift.x,
            shift_y: rig.camera.shift.y,
            iterations_used,
            converged,
        }
    }

    /// Lens shift as a vector.
    pub fn shift(&self) -> Vec2 {
        Vec2::new(self.shift_x, self.shift_y)
    }

    /// Write this placement back onto a rig.
    pub fn apply_to(&self, rig: &mut CameraRig) {
        rig.center = self.rig_center;
        rig.camera.position = self.camera_position;
        rig.camera.projection = self.projection;
        if self.projection == ProjectionKind::Orthographic {
            rig.camera.ortho_scale = self.projection_param;
        }
        rig.camera.shift = self.shift();
    }
}

/// Projection for a view: orthographic only when enabled and the view is
/// orthographic-eligible.
pub fn choose_projection(use_orthographic: bool, view: &ViewPreset) -> ProjectionKind {
    if use_orthographic && view.orthographic {
        ProjectionKind::Orthographic
    } else {
        ProjectionKind::Perspective
    }
}

/// Runs framing passes with a fixed set of options and output frame.
pub struct Framer<'a> {
    options: &'a FramingOptions,
    frame: RenderFrame,
}

impl<'a> Framer<'a> {
    /// Framer for the given options and render frame.
    pub fn new(options: &'a FramingOptions, frame: RenderFrame) -> Self {
        Self { options, frame }
    }

    /// Frame `points` with the rig's current rotation.
    ///
    /// Returns `None` and leaves the rig untouched when `points` is empty.
    /// `collection` only labels diagnostics.
    pub fn frame(
        &self,
        rig: &mut CameraRig,
        points: &[Vec3],
        projection: ProjectionKind,
        collection: &str,
    ) -> Option<FramingResult> {
        let Some(aabb) = compute_aabb(points) else {
            log::warn!(
                "{}",
                FramingIssue::EmptyGeometry {
                    collection: collection.to_owned(),
                }
            );
            return None;
        };
        let margin = self.options.clamped_margin();
        let aspect = self.frame.aspect();

        rig.center = if self.options.centroid_blend {
            bounds::visual_center(&aabb, points)
        } else {
            aabb.center
        };
        rig.sync_orientation();
        rig.camera.shift = Vec2::ZERO;
        rig.camera.projection = projection;

        let solver = FitSolver::new(self.options, self.frame);
        let outcome = match projection {
            ProjectionKind::Perspective => {
                solver.fit_perspective(rig, points, margin)
            }
            ProjectionKind::Orthographic => {
                solver.fit_orthographic(rig, points, &aabb, margin)
            }
        };

        let _ = recenter::recenter(&mut rig.camera, points, aspect);
        if self.options.revalidate_after_shift
            && !recenter::revalidate(rig, points, aspect, margin)
        {
            log::debug!("'{collection}' still clips after recentering");
        }

        let result =
            FramingResult::from_rig(rig, outcome.iterations, outcome.converged);
        log::debug!(
            "framed '{collection}': {:?} param {:.4}, shift ({:.4}, {:.4}), \
             {} iteration(s)",
            result.projection,
            result.projection_param,
            result.shift_x,
            result.shift_y,
            result.iterations_used
        );
        Some(result)
    }
}
