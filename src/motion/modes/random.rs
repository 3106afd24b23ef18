use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::traits::{RotationMode, Sweep};
use crate::error::MotionIssue;
use crate::motion::keyframe::Keyframe;
use crate::options::RandomTuning;
use crate::util::easing::{EasingDirection, Interpolation};

/// Seeded jittery rotation with optional momentary reversals.
///
/// The same seed and parameters always produce the same keys. Whatever the
/// drift, the last key lands exactly on the sweep's end frame and angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomSweep {
    /// Generator seed.
    pub seed: u64,
    /// Jitter amount, clamped to [0, 1].
    pub intensity: f64,
    /// Steps from the first key to the last.
    pub point_count: u32,
    /// Allow short backward steps.
    pub allow_reverse: bool,
    /// Jitter constants.
    pub tuning: RandomTuning,
}

/// Uniform sample in `[-half, half]`, or zero for an empty range.
fn jitter(rng: &mut StdRng, half: f64) -> f64 {
    if half > 0.0 {
        rng.random_range(-half..=half)
    } else {
        0.0
    }
}

fn organic(frame: i32, angle: f64) -> Keyframe {
    Keyframe::eased(frame, angle, Interpolation::Bezier, EasingDirection::Auto)
}

impl RotationMode for RandomSweep {
    #[allow(clippy::cast_possible_truncation)]
    fn generate(&self, sweep: &Sweep) -> Vec<Keyframe> {
        if self.point_count == 0 {
            log::warn!("{}", MotionIssue::NoRandomPoints);
            return sweep.linear_keys();
        }
        let intensity = self.intensity.clamp(0.0, 1.0);
        let steps = f64::from(self.point_count);
        let frame_step = f64::from(sweep.frame_budget) / steps;
        let angle_step = sweep.span / steps;
        let end_frame = sweep.end_frame();

        let mut rng = StdRng::seed_from_u64(self.seed);
        // Frames strictly increase, so the budget bounds the key count.
        let budget = u32::try_from(sweep.frame_budget).unwrap_or(0).max(1);
        let key_count = self.point_count.min(budget);
        let mut keys = Vec::with_capacity(key_count as usize + 1);
        keys.push(organic(sweep.start_frame, sweep.start_angle));

        let mut frame = f64::from(sweep.start_frame);
        let mut previous = sweep.start_frame;
        let mut travelled = 0.0;
        for _ in 1..self.point_count {
            let time_var = jitter(&mut rng, intensity * self.tuning.time_jitter);
            frame += (frame_step * (1.0 + time_var)).max(1.0);

            let angle_var = jitter(&mut rng, intensity * self.tuning.angle_jitter);
            let mut step = angle_step * (1.0 + angle_var);
            if self.allow_reverse
                && rng.random::<f64>()
                    < self.tuning.reverse_probability * intensity
            {
                step = -angle_step * self.tuning.reverse_step;
            }
            travelled += step;

            let key_frame = (frame as i32).max(previous + 1);
            if key_frame >= end_frame {
                break;
            }
            keys.push(organic(key_frame, sweep.start_angle + travelled));
            previous = key_frame;
        }

        keys.push(organic(end_frame, sweep.end_angle()));
        keys
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode(seed: u64, intensity: f64, allow_reverse: bool) -> RandomSweep {
        RandomSweep {
            seed,
            intensity,
            point_count: 16,
            allow_reverse,
            tuning: RandomTuning::default(),
        }
    }

    fn sweep() -> Sweep {
        Sweep {
            start_frame: 1,
            frame_budget: 120,
            start_angle: 0.25,
            span: std::f64::consts::TAU,
        }
    }

    #[test]
    fn endpoint_is_exact_for_every_seed() {
        let sweep = sweep();
        for seed in 0..64 {
            for intensity in [0.0, 0.3, 0.85, 1.0] {
                let keys = mode(seed, intensity, true).generate(&sweep);
                let last = keys.last().unwrap();
                assert_eq!(last.angle, sweep.start_angle + sweep.span);
                assert_eq!(last.frame, sweep.start_frame + sweep.frame_budget);
                assert_eq!(keys[0].frame, sweep.start_frame);
                assert!(keys.windows(2).all(|w| w[0].frame < w[1].frame));
            }
        }
    }

    #[test]
    fn same_seed_same_curve() {
        let a = mode(42, 0.85, true).generate(&sweep());
        let b = mode(42, 0.85, true).generate(&sweep());
        let c = mode(43, 0.85, true).generate(&sweep());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn zero_intensity_is_evenly_spaced() {
        let keys = mode(7, 0.0, true).generate(&sweep());
        assert_eq!(keys.len(), 17);
        assert!(keys.windows(2).all(|w| w[1].frame - w[0].frame == 7
            || w[1].frame - w[0].frame == 8));
        assert!(keys.windows(2).all(|w| w[1].angle > w[0].angle));
    }

    #[test]
    fn reversals_only_when_allowed() {
        // The snap onto the end angle may step back after drift; only the
        // jittered steps before it are checked.
        let forward_only = |keys: &[Keyframe]| {
            keys[..keys.len() - 1]
                .windows(2)
                .all(|w| w[1].angle >= w[0].angle)
        };
        for seed in 0..32 {
            assert!(forward_only(&mode(seed, 1.0, false).generate(&sweep())));
        }
        let reversed = (0..32)
            .any(|seed| !forward_only(&mode(seed, 1.0, true).generate(&sweep())));
        assert!(reversed);
    }

    #[test]
    fn keys_use_smooth_interpolation() {
        let keys = mode(1, 0.5, false).generate(&sweep());
        assert!(keys.iter().all(|k| k.interpolation == Interpolation::Bezier));
    }

    #[test]
    fn zero_points_falls_back_to_linear() {
        let mut zero = mode(1, 0.5, false);
        zero.point_count = 0;
        let keys = zero.generate(&sweep());
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[1].frame, 121);
        assert_eq!(keys[1].interpolation, Interpolation::Linear);
    }

    #[test]
    fn huge_point_count_is_bounded_by_frames() {
        let mut dense = mode(3, 0.5, true);
        dense.point_count = u32::MAX;
        let sweep = sweep();
        let keys = dense.generate(&sweep);
        assert!(keys.len() <= sweep.frame_budget as usize + 1);
        assert!(keys.windows(2).all(|w| w[0].frame < w[1].frame));
        let last = keys.last().unwrap();
        assert_eq!(last.frame, sweep.end_frame());
        assert_eq!(last.angle, sweep.end_angle());
    }
}
