use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::params::{HoldPoint, MotionSpec, ScrubMode};
use crate::util::easing::{EasingDirection, Interpolation};

/// Speed profile of the dramatic-reveal preset: slow, fast, slow.
const DRAMATIC_REVEAL_SPEEDS: [f64; 9] =
    [0.3, 0.5, 1.0, 1.5, 2.0, 1.5, 1.0, 0.5, 0.3];

/// Named scrub configurations.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ScrubPreset {
    /// Linear constant-speed rotation with no holds, eases or return.
    #[default]
    Constant,
    /// Bezier ease in/out over the whole sweep.
    SmoothShowcase,
    /// Pauses at twelve evenly spaced angles.
    StopMotion,
    /// Slow start, accelerates through the middle, slows again.
    DramaticReveal,
    /// Jerky random speed with pauses and reversals.
    BrokenMicrowave,
}

impl ScrubPreset {
    /// All presets in display order.
    pub const ALL: [Self; 5] = [
        Self::Constant,
        Self::SmoothShowcase,
        Self::StopMotion,
        Self::DramaticReveal,
        Self::BrokenMicrowave,
    ];

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Constant => "Constant",
            Self::SmoothShowcase => "Smooth Showcase",
            Self::StopMotion => "Stop Motion",
            Self::DramaticReveal => "Dramatic Reveal",
            Self::BrokenMicrowave => "Broken Microwave",
        }
    }

    /// Overwrite the parts of `spec` this preset controls.
    pub fn apply(self, spec: &mut MotionSpec) {
        match self {
            Self::Constant => {
                spec.scrub = ScrubMode::Easing {
                    interpolation: Interpolation::Linear,
                    direction: EasingDirection::InOut,
                };
                spec.ease_in_frames = 0;
                spec.ease_out_frames = 0;
                spec.hold_start = 0;
                spec.hold_end = 0;
                spec.ping_pong = false;
            }
            Self::SmoothShowcase => {
                spec.scrub = ScrubMode::Easing {
                    interpolation: Interpolation::Bezier,
                    direction: EasingDirection::InOut,
                };
                spec.ease_in_frames = 0;
                spec.ease_out_frames = 0;
            }
            Self::StopMotion => {
                spec.scrub = ScrubMode::HoldPoints {
                    holds: (0..12)
                        .map(|i| HoldPoint::new(f64::from(i) * 30.0, 4))
                        .collect(),
                };
            }
            Self::DramaticReveal => {
                spec.scrub = ScrubMode::MultiSegment {
                    segments: DRAMATIC_REVEAL_SPEEDS.to_vec(),
                };
            }
            Self::BrokenMicrowave => {
                spec.scrub = ScrubMode::Random {
                    seed: 42,
                    intensity: 0.85,
                    point_count: 16,
                    allow_reverse: true,
                };
            }
        }
    }

    /// Default spec with this preset applied.
    pub fn spec(self) -> MotionSpec {
        let mut spec = MotionSpec::default();
        self.apply(&mut spec);
        spec
    }
}
