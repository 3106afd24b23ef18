//! Easing curves for keyframe interpolation.
//!
//! Each named family is defined by its ease-in shape; ease-out and
//! ease-in-out are derived by reflection. All evaluators take and return
//! normalized progress in [0, 1].

use std::f64::consts::{FRAC_PI_2, PI};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Interpolation applied from a keyframe to the next one.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    /// Hold the keyframe value until the next key.
    Constant,
    /// Straight line (constant velocity).
    #[default]
    Linear,
    /// Smooth S-curve from auto-clamped handles.
    Bezier,
    /// Sinusoidal easing.
    Sine,
    /// Quadratic easing.
    Quad,
    /// Cubic easing.
    Cubic,
    /// Quartic easing.
    Quart,
    /// Quintic easing.
    Quint,
    /// Exponential easing.
    Expo,
    /// Circular easing.
    Circ,
    /// Overshooting easing.
    Back,
    /// Bouncing easing.
    Bounce,
    /// Spring-like easing.
    Elastic,
}

/// Which end of a segment an easing curve acts on.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingDirection {
    /// Per-family default: ease-out for back/bounce/elastic, ease-in
    /// otherwise.
    #[default]
    Auto,
    /// Slow start.
    In,
    /// Slow end.
    Out,
    /// Slow start and end.
    InOut,
}

const BACK_C1: f64 = 1.701_58;
const BACK_C3: f64 = BACK_C1 + 1.0;
const ELASTIC_C4: f64 = 2.0 * PI / 3.0;

impl Interpolation {
    /// All named easing families, i.e. everything except constant, linear
    /// and bezier.
    pub const EASING_FAMILIES: [Self; 10] = [
        Self::Sine,
        Self::Quad,
        Self::Cubic,
        Self::Quart,
        Self::Quint,
        Self::Expo,
        Self::Circ,
        Self::Back,
        Self::Bounce,
        Self::Elastic,
    ];

    /// Whether the easing direction changes the curve shape.
    #[inline]
    pub fn uses_direction(self) -> bool {
        !matches!(self, Self::Constant | Self::Linear | Self::Bezier)
    }

    /// Direction used when `Auto` is requested.
    #[inline]
    pub fn resolve(self, direction: EasingDirection) -> EasingDirection {
        match direction {
            EasingDirection::Auto => match self {
                Self::Back | Self::Bounce | Self::Elastic => {
                    EasingDirection::Out
                }
                _ => EasingDirection::In,
            },
            d => d,
        }
    }

    /// Evaluate eased progress at `t`.
    ///
    /// Input t is clamped to [0.0, 1.0]. Back and elastic curves may leave
    /// [0, 1] in between but always hit both endpoints.
    pub fn evaluate(self, direction: EasingDirection, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Constant => {
                if t >= 1.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Linear => t,
            Self::Bezier => t * t * (3.0 - 2.0 * t),
            family => match family.resolve(direction) {
                EasingDirection::Out => 1.0 - family.ease_in(1.0 - t),
                EasingDirection::InOut => {
                    if t < 0.5 {
                        family.ease_in(2.0 * t) / 2.0
                    } else {
                        1.0 - family.ease_in(2.0 - 2.0 * t) / 2.0
                    }
                }
                _ => family.ease_in(t),
            },
        }
    }

    fn ease_in(self, t: f64) -> f64 {
        match self {
            Self::Sine => 1.0 - (t * FRAC_PI_2).cos(),
            Self::Quad => t * t,
            Self::Cubic => t * t * t,
            Self::Quart => t.powi(4),
            Self::Quint => t.powi(5),
            Self::Expo => {
                if t <= 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * t - 10.0)
                }
            }
            Self::Circ => 1.0 - (1.0 - t * t).max(0.0).sqrt(),
            Self::Back => BACK_C3 * t * t * t - BACK_C1 * t * t,
            Self::Elastic => {
                if t <= 0.0 || t >= 1.0 {
                    t
                } else {
                    -(2f64.powf(10.0 * t - 10.0))
                        * ((10.0 * t - 10.75) * ELASTIC_C4).sin()
                }
            }
            Self::Bounce => 1.0 - bounce_out(1.0 - t),
            Self::Constant | Self::Linear | Self::Bezier => t,
        }
    }
}

fn bounce_out(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984_375
    }
}
