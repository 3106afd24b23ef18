//! Host scene collaborators.
//!
//! The framing and motion core never walks a scene graph. It asks a
//! [`GeometrySource`] for points and hands results to a [`CameraSink`] and
//! a [`MotionSink`]. [`SceneSnapshot`] is a small in-memory implementation
//! of the geometry side, filtered by [`ExclusionRules`].

mod exclusion;
mod host;
mod snapshot;

pub use exclusion::ExclusionRules;
pub use host::{CameraSink, GeometrySource, MotionSink};
pub use snapshot::{KeyedTransform, ObjectKind, SceneObject, SceneSnapshot};
