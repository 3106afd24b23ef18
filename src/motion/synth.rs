use super::keyframe::{Keyframe, MotionCurve};
use super::modes::Sweep;
use super::params::MotionSpec;
use super::plan::{Phase, PhasePlan};
use crate::options::RandomTuning;
use crate::util::easing::{EasingDirection, Interpolation};

/// Builds turntable keyframe curves from motion specs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TurntableSynthesizer {
    tuning: RandomTuning,
}

impl TurntableSynthesizer {
    /// Synthesizer with the given random-mode tuning.
    pub fn new(tuning: RandomTuning) -> Self {
        Self { tuning }
    }

    /// Build the full curve for `spec`.
    ///
    /// The returned plan describes the same layout the curve was built
    /// from; its `last_frame` is the curve's last key.
    pub fn synthesize(&self, spec: &MotionSpec) -> (MotionCurve, PhasePlan) {
        let mode = spec.scrub.strategy(self.tuning);
        let plan = PhasePlan::new(spec, mode.as_ref());
        let mut curve = MotionCurve::new();

        if let Some(hold) = plan.hold_start {
            insert_linear(&mut curve, &hold);
        }
        if let Some(ease) = plan.ease_in {
            insert_eased(&mut curve, &ease, EasingDirection::In);
        }
        for key in mode.generate(&plan.main) {
            curve.insert(key);
        }
        if let Some(ease) = plan.ease_out {
            // The main rotation's last key starts the ease-out segment.
            let _ = curve.set_interpolation(
                ease.start_frame,
                Interpolation::Sine,
                EasingDirection::Out,
            );
            curve.insert(Keyframe::eased(
                ease.end_frame,
                ease.to_angle,
                Interpolation::Sine,
                EasingDirection::Out,
            ));
        }
        if let Some(ret) = plan.ping_pong {
            insert_linear(&mut curve, &ret);
        }
        if let Some(hold) = plan.hold_end {
            insert_linear(&mut curve, &hold);
        }

        log::debug!(
            "synthesized {} turntable: {} keys over frames {}..={}",
            mode.name(),
            curve.len(),
            curve.first().map_or(0, |k| k.frame),
            plan.last_frame
        );
        (curve, plan)
    }

    /// Build only the curve.
    pub fn curve(&self, spec: &MotionSpec) -> MotionCurve {
        self.synthesize(spec).0
    }

    /// Keys the scrub strategy alone produces for `sweep`.
    pub fn main_keys(&self, spec: &MotionSpec, sweep: &Sweep) -> Vec<Keyframe> {
        spec.scrub.strategy(self.tuning).generate(sweep)
    }
}

fn insert_linear(curve: &mut MotionCurve, phase: &Phase) {
    curve.insert(Keyframe::linear(phase.start_frame, phase.from_angle));
    curve.insert(Keyframe::linear(phase.end_frame, phase.to_angle));
}

fn insert_eased(curve: &mut MotionCurve, phase: &Phase, easing: EasingDirection) {
    for (frame, angle) in [
        (phase.start_frame, phase.from_angle),
        (phase.end_frame, phase.to_angle),
    ] {
        curve.insert(Keyframe::eased(frame, angle, Interpolation::Sine, easing));
    }
}
