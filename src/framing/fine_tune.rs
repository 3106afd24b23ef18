use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{CameraRig, ProjectionKind};

/// Smallest accepted fine-tune zoom.
pub const MIN_SCALE: f32 = 0.1;
/// Largest accepted fine-tune zoom.
pub const MAX_SCALE: f32 = 10.0;

/// Manual adjustment applied on top of a fresh framing pass.
///
/// Non-cumulative: every pass starts from the solver's placement, so
/// applying the same fine-tune twice across two passes yields the same
/// camera.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct FineTune {
    /// Zoom factor; greater than 1 moves closer (or narrows ortho scale).
    #[schemars(range(min = 0.1, max = 10.0))]
    pub scale: f32,
    /// Offset in the camera's local axes.
    pub position_offset: [f32; 3],
}

impl Default for FineTune {
    fn default() -> Self {
        Self {
            scale: 1.0,
            position_offset: [0.0; 3],
        }
    }
}

impl FineTune {
    /// Whether applying this fine-tune changes nothing.
    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.position_offset == [0.0; 3]
    }

    /// Zoom, then offset the camera in its own local space.
    pub fn apply(&self, rig: &mut CameraRig) {
        let scale = self.scale.clamp(MIN_SCALE, MAX_SCALE);
        match rig.camera.projection {
            ProjectionKind::Orthographic => rig.camera.ortho_scale /= scale,
            ProjectionKind::Perspective => {
                let distance = rig.camera_distance() / scale;
                let direction =
                    (rig.camera.position - rig.center).normalize_or_zero();
                rig.camera.position = rig.center + direction * distance;
            }
        }
        let offset = Vec3::from_array(self.position_offset);
        rig.camera.position += rig.camera.orientation * offset;
    }
}
