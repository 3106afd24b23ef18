use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Random Scrub", inline)]
#[serde(default)]
/// Jitter constants for the random scrub mode, scaled by intensity.
pub struct RandomTuning {
    /// Frame-step jitter half-range per unit intensity.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub time_jitter: f64,
    /// Angle-step jitter half-range per unit intensity.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub angle_jitter: f64,
    /// Chance per unit intensity that a step reverses.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub reverse_probability: f64,
    /// Size of a reversal as a fraction of the nominal angle step.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub reverse_step: f64,
}

impl Default for RandomTuning {
    fn default() -> Self {
        Self {
            time_jitter: 0.5,
            angle_jitter: 0.3,
            reverse_probability: 0.15,
            reverse_step: 0.15,
        }
    }
}

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Turntable", inline)]
#[serde(default)]
/// Turntable synthesis settings that are not part of a motion spec.
pub struct TurntableOptions {
    /// Random scrub jitter constants.
    pub random: RandomTuning,
}
