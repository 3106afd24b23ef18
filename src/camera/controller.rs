use glam::{EulerRot, Quat, Vec3};

use crate::camera::core::StudioCamera;

/// Convert XYZ Euler angles (radians) to a quaternion, applying X first,
/// then Y, then Z.
#[inline]
pub fn euler_xyz_to_quat(euler: Vec3) -> Quat {
    Quat::from_euler(EulerRot::ZYX, euler.z, euler.y, euler.x)
}

/// Camera rig: a rotation-owning controller with the camera parented to it.
///
/// The controller's rotation is the single source of the camera's
/// orientation. The controller sits at the framed geometry's center and the
/// camera is placed along the rotated view axis, so orbiting the rig only
/// touches `rotation` while framing only touches the camera's position,
/// projection parameter and shift.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    /// Controller rotation as XYZ Euler angles in radians.
    pub rotation: Vec3,
    /// Controller location (framing target).
    pub center: Vec3,
    /// The camera driven by this rig.
    pub camera: StudioCamera,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(StudioCamera::default())
    }
}

impl CameraRig {
    /// Rig at the origin with no rotation.
    pub fn new(camera: StudioCamera) -> Self {
        let mut rig = Self {
            rotation: Vec3::ZERO,
            center: Vec3::ZERO,
            camera,
        };
        rig.sync_orientation();
        rig
    }

    /// Controller orientation as a quaternion.
    pub fn orientation(&self) -> Quat {
        euler_xyz_to_quat(self.rotation)
    }

    /// Set the controller rotation (radians) and propagate it to the camera.
    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
        self.sync_orientation();
    }

    /// Set the controller rotation from degrees.
    pub fn set_rotation_degrees(&mut self, degrees: [f32; 3]) {
        self.set_rotation(Vec3::from_array(degrees.map(f32::to_radians)));
    }

    /// Copy the controller orientation onto the camera.
    pub fn sync_orientation(&mut self) {
        self.camera.orientation = self.orientation();
    }

    /// Place the camera `distance` units behind the center along its view
    /// axis.
    pub fn place_camera(&mut self, distance: f32) {
        let forward = self.camera.forward();
        self.camera.position = self.center - forward * distance;
    }

    /// Current distance between camera and controller.
    pub fn camera_distance(&self) -> f32 {
        (self.camera.position - self.center).length()
    }
}
