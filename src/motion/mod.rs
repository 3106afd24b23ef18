//! Turntable motion synthesis.
//!
//! A [`MotionSpec`] declares a turntable (duration, direction, holds,
//! eases, ping-pong, scrub mode). [`PhasePlan`] lays its phases out on the
//! timeline and [`TurntableSynthesizer`] fills them with keys, delegating
//! the main rotation to a [`RotationMode`] strategy.

mod keyframe;
pub mod modes;
mod params;
mod plan;
mod presets;
mod synth;

pub use keyframe::{Keyframe, MotionCurve, TargetProperty};
pub use modes::{RotationMode, Sweep};
pub use params::{HoldPoint, MotionSpec, RotationDirection, ScrubMode};
pub use plan::{total_frames, Phase, PhasePlan, FIRST_FRAME};
pub use presets::ScrubPreset;
pub use synth::TurntableSynthesizer;
