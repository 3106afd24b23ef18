//! Capabilities the host application provides to the framing and motion
//! core.

use glam::Vec3;

use super::exclusion::ExclusionRules;
use crate::framing::FramingResult;
use crate::motion::{MotionCurve, TargetProperty};

/// Supplies world-space points of the geometry to frame.
pub trait GeometrySource {
    /// Points of every visible, non-excluded mesh object in `collection`,
    /// evaluated at `frame`.
    fn get_snapshot(
        &self,
        collection: &str,
        rules: &ExclusionRules,
        frame: i32,
    ) -> Vec<Vec3>;
}

/// Receives computed camera placements.
pub trait CameraSink {
    /// Apply position, projection parameter and lens shift to the camera.
    fn apply_camera_placement(&mut self, placement: &FramingResult);
}

/// Receives synthesized rotation curves.
pub trait MotionSink {
    /// Insert or overwrite `curve`'s keys on `target`, with per-key
    /// interpolation.
    fn apply_motion_curve(&mut self, curve: &MotionCurve, target: &TargetProperty);

    /// Remove any animation previously applied to `target`.
    fn clear_motion_curve(&mut self, _target: &TargetProperty) {}
}
