use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Perspective or orthographic projection.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    /// Pinhole projection parameterized by field of view.
    #[default]
    Perspective,
    /// Parallel projection parameterized by ortho scale.
    Orthographic,
}

/// Which frame dimension the field of view is measured along.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SensorFit {
    /// Horizontal when the frame is landscape, vertical otherwise.
    #[default]
    Auto,
    /// Field of view spans the frame width.
    Horizontal,
    /// Field of view spans the frame height.
    Vertical,
}

/// Output frame dimensions, read from host render settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderFrame {
    /// Width in pixels before percentage scaling.
    pub resolution_x: u32,
    /// Height in pixels before percentage scaling.
    pub resolution_y: u32,
    /// Resolution scale in percent.
    pub resolution_percentage: u32,
}

impl RenderFrame {
    /// Frame with 100% resolution scaling.
    pub fn new(resolution_x: u32, resolution_y: u32) -> Self {
        Self {
            resolution_x,
            resolution_y,
            resolution_percentage: 100,
        }
    }

    /// Width / height, or 1.0 when the height is zero.
    pub fn aspect(&self) -> f32 {
        let scale = self.resolution_percentage as f32 / 100.0;
        let width = self.resolution_x as f32 * scale;
        let height = self.resolution_y as f32 * scale;
        if height > 0.0 {
            width / height
        } else {
            1.0
        }
    }
}

impl Default for RenderFrame {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

/// Studio camera: world placement, projection and lens shift.
///
/// The camera looks down its local -Z axis with +Y up. Lens shift is
/// measured in frame widths (x) and frame heights (y); a positive shift
/// moves projected geometry toward +x/+y in the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioCamera {
    /// World-space position.
    pub position: Vec3,
    /// World-space orientation, shared with the rig controller.
    pub orientation: Quat,
    /// Projection type.
    pub projection: ProjectionKind,
    /// Field of view in radians along the sensor-fit axis.
    pub fov: f32,
    /// Visible width for orthographic projection.
    pub ortho_scale: f32,
    /// Axis the field of view is measured along.
    pub sensor_fit: SensorFit,
    /// Horizontal and vertical lens shift.
    pub shift: Vec2,
    /// Near clipping distance.
    pub clip_start: f32,
    /// Far clipping distance.
    pub clip_end: f32,
}

impl Default for StudioCamera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            projection: ProjectionKind::Perspective,
            fov: 39.6_f32.to_radians(),
            ortho_scale: 6.0,
            sensor_fit: SensorFit::Auto,
            shift: Vec2::ZERO,
            clip_start: 0.1,
            clip_end: 1000.0,
        }
    }
}

impl StudioCamera {
    /// Unit view direction in world space.
    pub fn forward(&self) -> Vec3 {
        (self.orientation * Vec3::NEG_Z).normalize()
    }

    /// Horizontal and vertical field of view for the given aspect ratio.
    ///
    /// Returns `None` when either angle is not a positive finite value.
    pub fn fov_axes(&self, aspect: f32) -> Option<(f32, f32)> {
        let fit = match self.sensor_fit {
            SensorFit::Auto if aspect >= 1.0 => SensorFit::Horizontal,
            SensorFit::Auto => SensorFit::Vertical,
            fit => fit,
        };
        let (fov_x, fov_y) = match fit {
            SensorFit::Vertical => {
                let fov_y = self.fov;
                (2.0 * ((fov_y / 2.0).tan() * aspect).atan(), fov_y)
            }
            _ => {
                let fov_x = self.fov;
                let fov_y = if aspect > 0.0 {
                    2.0 * ((fov_x / 2.0).tan() / aspect).atan()
                } else {
                    0.0
                };
                (fov_x, fov_y)
            }
        };
        let valid = |a: f32| a.is_finite() && a > 0.0;
        (valid(fov_x) && valid(fov_y)).then_some((fov_x, fov_y))
    }

    /// Transform a world-space point into camera space.
    #[inline]
    pub fn world_to_camera(&self, point: Vec3) -> Vec3 {
        self.orientation.inverse() * (point - self.position)
    }

    /// World-to-camera matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
            .inverse()
    }

    /// Projection matrix with a [-1, 1] depth range, including lens shift.
    ///
    /// A degenerate perspective field of view yields a zero matrix, which
    /// every containment test rejects.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        let near = self.clip_start;
        let far = self.clip_end;
        let depth = far - near;
        let shift_x = -2.0 * self.shift.x;
        let shift_y = -2.0 * self.shift.y;
        match self.projection {
            ProjectionKind::Perspective => {
                let Some((fov_x, fov_y)) = self.fov_axes(aspect) else {
                    return Mat4::ZERO;
                };
                let sx = 1.0 / (fov_x / 2.0).tan();
                let sy = 1.0 / (fov_y / 2.0).tan();
                Mat4::from_cols(
                    Vec4::new(sx, 0.0, 0.0, 0.0),
                    Vec4::new(0.0, sy, 0.0, 0.0),
                    Vec4::new(shift_x, shift_y, -(far + near) / depth, -1.0),
                    Vec4::new(0.0, 0.0, -2.0 * far * near / depth, 0.0),
                )
            }
            ProjectionKind::Orthographic => {
                let half_w = self.ortho_scale / 2.0;
                let half_h = half_w / aspect.max(f32::EPSILON);
                Mat4::from_cols(
                    Vec4::new(1.0 / half_w, 0.0, 0.0, 0.0),
                    Vec4::new(0.0, 1.0 / half_h, 0.0, 0.0),
                    Vec4::new(0.0, 0.0, -2.0 / depth, 0.0),
                    Vec4::new(
                        -shift_x,
                        -shift_y,
                        -(far + near) / depth,
                        1.0,
                    ),
                )
            }
        }
    }

    /// Combined view-projection matrix.
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Project a world-space point into normalized frame coordinates.
    ///
    /// (0, 0) is the bottom-left and (1, 1) the top-right of the frame; `z`
    /// holds the distance in front of the camera. Returns `None` when the
    /// point sits on the camera plane of a perspective camera.
    pub fn world_to_frame(&self, point: Vec3, aspect: f32) -> Option<Vec3> {
        let clip = self.view_projection(aspect) * point.extend(1.0);
        if clip.w.abs() < super::frustum::W_EPSILON {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let depth = -self.world_to_camera(point).z;
        Some(Vec3::new((ndc.x + 1.0) / 2.0, (ndc.y + 1.0) / 2.0, depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_handles_zero_height() {
        assert_eq!(RenderFrame::new(1920, 0).aspect(), 1.0);
        assert!((RenderFrame::new(1920, 1080).aspect() - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn auto_fit_uses_horizontal_for_landscape() {
        let camera = StudioCamera {
            fov: 60.0_f32.to_radians(),
            ..StudioCamera::default()
        };
        let (fov_x, fov_y) = camera.fov_axes(2.0).unwrap();
        assert!((fov_x - 60.0_f32.to_radians()).abs() < 1e-6);
        let expected_y = 2.0 * ((30.0_f32.to_radians()).tan() / 2.0).atan();
        assert!((fov_y - expected_y).abs() < 1e-6);
    }

    #[test]
    fn auto_fit_uses_vertical_for_portrait() {
        let camera = StudioCamera {
            fov: 60.0_f32.to_radians(),
            ..StudioCamera::default()
        };
        let (fov_x, fov_y) = camera.fov_axes(0.5).unwrap();
        assert!((fov_y - 60.0_f32.to_radians()).abs() < 1e-6);
        assert!(fov_x < fov_y);
    }

    #[test]
    fn zero_fov_is_degenerate() {
        let camera = StudioCamera {
            fov: 0.0,
            ..StudioCamera::default()
        };
        assert!(camera.fov_axes(1.0).is_none());
        assert_eq!(camera.projection_matrix(1.0), Mat4::ZERO);
    }

    #[test]
    fn point_ahead_projects_to_frame_center() {
        let camera = StudioCamera {
            position: Vec3::new(0.0, 0.0, 5.0),
            ..StudioCamera::default()
        };
        let uv = camera.world_to_frame(Vec3::ZERO, 1.0).unwrap();
        assert!((uv.x - 0.5).abs() < 1e-6);
        assert!((uv.y - 0.5).abs() < 1e-6);
        assert!((uv.z - 5.0).abs() < 1e-5);
    }

    #[test]
    fn positive_shift_moves_geometry_right() {
        let mut camera = StudioCamera {
            position: Vec3::new(0.0, 0.0, 5.0),
            ..StudioCamera::default()
        };
        camera.shift = Vec2::new(0.1, -0.2);
        let uv = camera.world_to_frame(Vec3::ZERO, 1.0).unwrap();
        assert!((uv.x - 0.6).abs() < 1e-5);
        assert!((uv.y - 0.3).abs() < 1e-5);

        camera.projection = ProjectionKind::Orthographic;
        let uv = camera.world_to_frame(Vec3::ZERO, 1.0).unwrap();
        assert!((uv.x - 0.6).abs() < 1e-5);
        assert!((uv.y - 0.3).abs() < 1e-5);
    }

    #[test]
    fn orthographic_width_matches_scale() {
        let camera = StudioCamera {
            position: Vec3::new(0.0, 0.0, 5.0),
            projection: ProjectionKind::Orthographic,
            ortho_scale: 4.0,
            ..StudioCamera::default()
        };
        let right_edge = camera.world_to_frame(Vec3::new(2.0, 0.0, 0.0), 2.0);
        assert!((right_edge.unwrap().x - 1.0).abs() < 1e-6);
        // Height is width / aspect = 2, so y = 1 is the top edge.
        let top_edge = camera.world_to_frame(Vec3::new(0.0, 1.0, 0.0), 2.0);
        assert!((top_edge.unwrap().y - 1.0).abs() < 1e-6);
    }
}
