use super::traits::{RotationMode, Sweep};
use crate::motion::keyframe::Keyframe;
use crate::util::easing::{EasingDirection, Interpolation};

/// Start and end keys only; the curve shape lives in the interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EasingSweep {
    /// Curve family.
    pub interpolation: Interpolation,
    /// Eased end of the sweep.
    pub direction: EasingDirection,
}

impl RotationMode for EasingSweep {
    fn generate(&self, sweep: &Sweep) -> Vec<Keyframe> {
        let key = |frame, angle| {
            Keyframe::eased(frame, angle, self.interpolation, self.direction)
        };
        vec![
            key(sweep.start_frame, sweep.start_angle),
            key(sweep.end_frame(), sweep.end_angle()),
        ]
    }

    fn name(&self) -> &'static str {
        "easing"
    }
}
