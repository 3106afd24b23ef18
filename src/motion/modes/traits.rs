//! Core trait for main-rotation strategies.

use serde::Serialize;

use crate::motion::keyframe::Keyframe;

/// The main-rotation window a strategy fills.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sweep {
    /// Frame of the first key.
    pub start_frame: i32,
    /// Frames available for travel (pauses come on top).
    pub frame_budget: i32,
    /// Angle at `start_frame`, radians.
    pub start_angle: f64,
    /// Signed angle to cover, radians.
    pub span: f64,
}

impl Sweep {
    /// Angle the sweep must end on.
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.span
    }

    /// Frame the sweep ends on when nothing is added to its budget.
    pub fn end_frame(&self) -> i32 {
        self.start_frame + self.frame_budget
    }

    /// Two linear keys from start to end.
    pub fn linear_keys(&self) -> Vec<Keyframe> {
        vec![
            Keyframe::linear(self.start_frame, self.start_angle),
            Keyframe::linear(self.end_frame(), self.end_angle()),
        ]
    }
}

/// Generates the angle-over-time keys of the main rotation.
///
/// Implementations never fail: malformed parameters degrade to a simpler
/// curve. See [`EasingSweep`](super::EasingSweep),
/// [`SegmentSweep`](super::SegmentSweep), [`RandomSweep`](super::RandomSweep)
/// and [`HoldSweep`](super::HoldSweep).
pub trait RotationMode {
    /// Frames the generated keys span, from the first key to the last.
    ///
    /// Must agree with [`Self::generate`] without building any keys.
    /// Default: exactly the frame budget.
    fn frames_used(&self, sweep: &Sweep) -> i32 {
        sweep.frame_budget
    }

    /// Keys for `sweep`, in frame order, starting at `sweep.start_frame`
    /// and ending on `sweep.end_angle()`.
    fn generate(&self, sweep: &Sweep) -> Vec<Keyframe>;

    /// Name for debugging/logging.
    fn name(&self) -> &'static str {
        "unnamed"
    }
}
