//! Studio camera model.
//!
//! Provides the camera with its projection and lens shift, NDC frame
//! containment tests, and the rotation-owning rig the camera is parented to.

/// Rig controller that owns rotation and places the camera.
pub mod controller;
/// Core camera struct, projection kinds and render frame settings.
pub mod core;
/// NDC frame containment tests.
pub mod frustum;

pub use self::controller::{euler_xyz_to_quat, CameraRig};
pub use self::core::{ProjectionKind, RenderFrame, SensorFit, StudioCamera};
pub use self::frustum::{Containment, FrameBounds};
