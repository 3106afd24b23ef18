use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::{EasingDirection, Interpolation};

/// Turntable spin direction, seen from above.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RotationDirection {
    /// Clockwise (negative Z rotation).
    Cw,
    /// Counter-clockwise (positive Z rotation).
    #[default]
    Ccw,
}

impl RotationDirection {
    /// Multiplier applied to every angle of the motion.
    pub fn sign(self) -> f64 {
        match self {
            Self::Cw => -1.0,
            Self::Ccw => 1.0,
        }
    }
}

/// A pause at a fixed angle of the rotation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct HoldPoint {
    /// Angle into the rotation, in degrees.
    #[schemars(range(min = 0.0, max = 360.0))]
    pub angle: f64,
    /// Frames the rotation rests at `angle`.
    pub hold_frames: i32,
}

impl HoldPoint {
    /// Hold of `hold_frames` frames at `angle` degrees.
    pub fn new(angle: f64, hold_frames: i32) -> Self {
        Self { angle, hold_frames }
    }
}

/// How the main rotation distributes angle over time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ScrubMode {
    /// Two keys shaped by an interpolation curve.
    Easing {
        /// Curve family.
        #[serde(default)]
        interpolation: Interpolation,
        /// Which end of the sweep is eased.
        #[serde(default)]
        direction: EasingDirection,
    },
    /// Equal angular slices, each traversed at its own speed.
    MultiSegment {
        /// Speed multiplier per slice; higher is faster.
        #[serde(default)]
        segments: Vec<f64>,
    },
    /// Seeded jittered timing with optional brief reversals.
    Random {
        /// Generator seed.
        #[serde(default)]
        seed: u64,
        /// Jitter amount in [0, 1].
        #[serde(default)]
        intensity: f64,
        /// Number of steps between the first and last key.
        #[serde(default)]
        point_count: u32,
        /// Allow short backward steps.
        #[serde(default)]
        allow_reverse: bool,
    },
    /// Constant speed with pauses at given angles.
    HoldPoints {
        /// Pauses, in any order.
        #[serde(default)]
        holds: Vec<HoldPoint>,
    },
}

impl Default for ScrubMode {
    fn default() -> Self {
        Self::Easing {
            interpolation: Interpolation::Linear,
            direction: EasingDirection::InOut,
        }
    }
}

impl ScrubMode {
    /// Short mode name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Easing { .. } => "easing",
            Self::MultiSegment { .. } => "multi_segment",
            Self::Random { .. } => "random",
            Self::HoldPoints { .. } => "hold_points",
        }
    }
}

/// Declarative turntable motion.
///
/// Angles are in degrees and frame counts are non-negative; negative counts
/// are treated as zero and a zero duration as one frame.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct MotionSpec {
    /// Frames of one full sweep, eases included.
    #[schemars(range(min = 1))]
    pub duration: i32,
    /// Spin direction.
    pub direction: RotationDirection,
    /// Angle the sweep starts from.
    #[schemars(range(min = 0.0, max = 360.0))]
    pub start_angle: f64,
    /// Degrees covered by one sweep.
    #[schemars(range(min = 1.0, max = 360.0))]
    pub total_rotation: f64,
    /// Sweep back to the start angle after the forward sweep.
    pub ping_pong: bool,
    /// Static frames before the sweep.
    pub hold_start: i32,
    /// Static frames after the sweep.
    pub hold_end: i32,
    /// Frames of slow start, taken from the sweep duration.
    pub ease_in_frames: i32,
    /// Frames of slow end, taken from the sweep duration.
    pub ease_out_frames: i32,
    /// Main rotation shape.
    pub scrub: ScrubMode,
}

impl Default for MotionSpec {
    fn default() -> Self {
        Self {
            duration: 120,
            direction: RotationDirection::Ccw,
            start_angle: 0.0,
            total_rotation: 360.0,
            ping_pong: false,
            hold_start: 0,
            hold_end: 0,
            ease_in_frames: 0,
            ease_out_frames: 0,
            scrub: ScrubMode::default(),
        }
    }
}

impl MotionSpec {
    /// Sweep duration, at least one frame.
    pub fn sweep_frames(&self) -> i32 {
        self.duration.max(1)
    }

    /// Signed start angle in radians.
    pub fn start_radians(&self) -> f64 {
        self.start_angle.to_radians() * self.direction.sign()
    }

    /// Signed sweep span in radians.
    pub fn span_radians(&self) -> f64 {
        self.total_rotation.to_radians() * self.direction.sign()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clockwise_negates_angles() {
        let spec = MotionSpec {
            direction: RotationDirection::Cw,
            start_angle: 90.0,
            ..MotionSpec::default()
        };
        assert!((spec.start_radians() + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!(spec.span_radians() < 0.0);
    }

    #[test]
    fn toml_with_tagged_scrub_mode() {
        let spec: MotionSpec = toml::from_str(
            r#"
duration = 60
ping_pong = true

[scrub]
mode = "hold_points"
holds = [{ angle = 90.0, hold_frames = 12 }]
"#,
        )
        .unwrap();
        assert_eq!(spec.duration, 60);
        assert!(spec.ping_pong);
        assert_eq!(
            spec.scrub,
            ScrubMode::HoldPoints {
                holds: vec![HoldPoint::new(90.0, 12)],
            }
        );
        assert_eq!(spec.total_rotation, 360.0);
    }

    #[test]
    fn zero_duration_is_one_frame() {
        let spec = MotionSpec {
            duration: 0,
            ..MotionSpec::default()
        };
        assert_eq!(spec.sweep_frames(), 1);
    }
}
