//! Frame layout of a turntable, computed before any key is generated.
//!
//! Phases run in order: hold-start, ease-in, main rotation, ease-out,
//! ping-pong return, hold-end. Every phase but the main rotation is
//! optional. Hosts need the total length up front to set their frame
//! range, so the layout is a pure function of the [`MotionSpec`].

use serde::Serialize;

use super::modes::{RotationMode, Sweep};
use super::params::MotionSpec;
use crate::options::RandomTuning;

/// First frame of every turntable.
pub const FIRST_FRAME: i32 = 1;

/// A transition from one angle to another over a frame interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Phase {
    /// Frame the phase starts on.
    pub start_frame: i32,
    /// Frame the phase ends on.
    pub end_frame: i32,
    /// Angle at `start_frame`, radians.
    pub from_angle: f64,
    /// Angle at `end_frame`, radians.
    pub to_angle: f64,
}

impl Phase {
    fn plateau(start_frame: i32, frames: i32, angle: f64) -> Self {
        Self {
            start_frame,
            end_frame: start_frame + frames,
            from_angle: angle,
            to_angle: angle,
        }
    }
}

/// Frame and angle layout of every phase of a turntable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhasePlan {
    /// Static frames at the start angle.
    pub hold_start: Option<Phase>,
    /// Slow-start portion of the sweep.
    pub ease_in: Option<Phase>,
    /// Window handed to the scrub strategy.
    pub main: Sweep,
    /// Frame the main rotation ends on, pauses included.
    pub main_end_frame: i32,
    /// Slow-end portion of the sweep.
    pub ease_out: Option<Phase>,
    /// Return sweep to the start angle.
    pub ping_pong: Option<Phase>,
    /// Static frames at the final angle.
    pub hold_end: Option<Phase>,
    /// Frame of the last key.
    pub last_frame: i32,
}

impl PhasePlan {
    /// Lay out `spec` with `mode` filling the main rotation.
    ///
    /// Ease phases are active only when shorter than the sweep duration;
    /// an inactive ease takes neither frames nor angle from the main
    /// rotation. Ease-out is also inactive on a zero-angle sweep.
    pub fn new(spec: &MotionSpec, mode: &dyn RotationMode) -> Self {
        let duration = spec.sweep_frames();
        let start_angle = spec.start_radians();
        let span = spec.span_radians();
        let end_angle = start_angle + span;
        let mut frame = FIRST_FRAME;

        let hold_start = (spec.hold_start > 0)
            .then(|| Phase::plateau(frame, spec.hold_start, start_angle));
        frame += spec.hold_start.max(0);

        let ease_in_frames = active_ease(spec.ease_in_frames, duration);
        let ease_in_angle =
            span * f64::from(ease_in_frames) / f64::from(duration);
        let ease_in = (ease_in_frames > 0).then(|| Phase {
            start_frame: frame,
            end_frame: frame + ease_in_frames,
            from_angle: start_angle,
            to_angle: start_angle + ease_in_angle,
        });
        frame += ease_in_frames;

        let ease_out_frames = if span == 0.0 {
            0
        } else {
            active_ease(spec.ease_out_frames, duration)
        };
        let ease_out_angle =
            span * f64::from(ease_out_frames) / f64::from(duration);

        let main_start_angle = start_angle + ease_in_angle;
        let main_end_angle = end_angle - ease_out_angle;
        let main = Sweep {
            start_frame: frame,
            frame_budget: (duration - ease_in_frames - ease_out_frames).max(1),
            start_angle: main_start_angle,
            span: main_end_angle - main_start_angle,
        };
        let main_end_frame = frame + mode.frames_used(&main);
        frame = main_end_frame;

        let ease_out = (ease_out_frames > 0).then(|| Phase {
            start_frame: frame,
            end_frame: frame + ease_out_frames,
            from_angle: main_end_angle,
            to_angle: end_angle,
        });
        frame += ease_out_frames;

        let ping_pong = spec.ping_pong.then(|| Phase {
            start_frame: frame,
            end_frame: frame + duration,
            from_angle: end_angle,
            to_angle: start_angle,
        });
        if spec.ping_pong {
            frame += duration;
        }

        let final_angle = if spec.ping_pong { start_angle } else { end_angle };
        let hold_end = (spec.hold_end > 0)
            .then(|| Phase::plateau(frame, spec.hold_end, final_angle));
        frame += spec.hold_end.max(0);

        Self {
            hold_start,
            ease_in,
            main,
            main_end_frame,
            ease_out,
            ping_pong,
            hold_end,
            last_frame: frame,
        }
    }

    /// Lay out `spec` with its own scrub mode.
    pub fn for_spec(spec: &MotionSpec) -> Self {
        // Random tuning never changes frame counts.
        let mode = spec.scrub.strategy(RandomTuning::default());
        Self::new(spec, mode.as_ref())
    }

    /// Animation length in frames: the last key's frame minus one.
    pub fn total_frames(&self) -> i32 {
        self.last_frame - FIRST_FRAME
    }
}

/// Ease length if it fits inside the sweep, else zero.
fn active_ease(frames: i32, duration: i32) -> i32 {
    if frames > 0 && frames < duration {
        frames
    } else {
        0
    }
}

/// Total animation frames for `spec`, without generating keys.
pub fn total_frames(spec: &MotionSpec) -> i32 {
    PhasePlan::for_spec(spec).total_frames()
}
