use super::traits::{RotationMode, Sweep};
use crate::error::MotionIssue;
use crate::motion::keyframe::Keyframe;
use crate::motion::params::HoldPoint;

/// Constant-speed rotation that pauses at given angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoldSweep<'a> {
    /// Pauses, in any order.
    pub holds: &'a [HoldPoint],
}

impl HoldSweep<'_> {
    /// Holds that take effect for `sweep`, sorted by angle, and how many
    /// were dropped.
    ///
    /// A hold is dropped when its angle is not past the previous kept
    /// hold (the start counts as 0°) or lies beyond the sweep's span, so a
    /// zero-angle sweep keeps none.
    pub fn effective_holds(&self, sweep: &Sweep) -> (Vec<HoldPoint>, usize) {
        let span = sweep.span.abs().to_degrees();
        let mut sorted = self.holds.to_vec();
        sorted.sort_by(|a, b| a.angle.total_cmp(&b.angle));

        let mut kept: Vec<HoldPoint> = Vec::with_capacity(sorted.len());
        let mut last_angle = 0.0;
        for hold in sorted {
            if !hold.angle.is_finite()
                || hold.angle <= last_angle
                || hold.angle > span
            {
                continue;
            }
            last_angle = hold.angle;
            kept.push(hold);
        }
        let skipped = self.holds.len() - kept.len();
        (kept, skipped)
    }

    /// Keys for `kept` holds over `sweep`.
    ///
    /// Travel between holds runs at a constant frames-per-degree rate. An
    /// arrival that would round onto the previous key is pushed one frame
    /// past it, delaying everything after it by the same amount.
    #[allow(clippy::cast_possible_truncation)]
    fn layout(sweep: &Sweep, kept: &[HoldPoint]) -> Vec<Keyframe> {
        let mut keys = Vec::with_capacity(kept.len() * 2 + 2);
        keys.push(Keyframe::linear(sweep.start_frame, sweep.start_angle));
        if kept.is_empty() {
            keys.push(Keyframe::linear(sweep.end_frame(), sweep.end_angle()));
            return keys;
        }

        let frames_per_degree =
            f64::from(sweep.frame_budget) / sweep.span.abs().to_degrees();
        let direction = if sweep.span >= 0.0 { 1.0 } else { -1.0 };
        let mut previous = sweep.start_frame;
        let mut delay = 0;
        for hold in kept {
            let travel = (hold.angle * frames_per_degree).round() as i32;
            let mut arrive = sweep.start_frame + travel + delay;
            if arrive <= previous {
                delay += previous + 1 - arrive;
                arrive = previous + 1;
            }
            let hold_frames = hold.hold_frames.max(0);
            let angle = sweep.start_angle + hold.angle.to_radians() * direction;
            keys.push(Keyframe::linear(arrive, angle));
            keys.push(Keyframe::linear(arrive + hold_frames, angle));
            delay += hold_frames;
            previous = arrive + hold_frames;
        }

        // A hold at the full span ends exactly where the sweep does.
        let end_frame = sweep.end_frame() + delay;
        if keys.last().is_some_and(|k| k.frame >= end_frame) {
            let _ = keys.pop();
        }
        keys.push(Keyframe::linear(end_frame.max(previous), sweep.end_angle()));
        keys
    }
}

impl RotationMode for HoldSweep<'_> {
    fn frames_used(&self, sweep: &Sweep) -> i32 {
        let (kept, _) = self.effective_holds(sweep);
        Self::layout(sweep, &kept)
            .last()
            .map_or(sweep.frame_budget, |k| k.frame - sweep.start_frame)
    }

    fn generate(&self, sweep: &Sweep) -> Vec<Keyframe> {
        if self.holds.is_empty() {
            log::warn!("{}", MotionIssue::NoHoldPoints);
            return sweep.linear_keys();
        }
        let (kept, skipped) = self.effective_holds(sweep);
        if skipped > 0 {
            log::debug!("{}", MotionIssue::SkippedHoldPoints { count: skipped });
        }
        Self::layout(sweep, &kept)
    }

    fn name(&self) -> &'static str {
        "hold_points"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_turn() -> Sweep {
        Sweep {
            start_frame: 1,
            frame_budget: 120,
            start_angle: 0.0,
            span: std::f64::consts::TAU,
        }
    }

    #[test]
    fn two_holds_make_two_plateaus() {
        let holds = [HoldPoint::new(270.0, 12), HoldPoint::new(90.0, 12)];
        let mode = HoldSweep { holds: &holds };
        let keys = mode.generate(&full_turn());

        let frames: Vec<i32> = keys.iter().map(|k| k.frame).collect();
        assert_eq!(frames, vec![1, 31, 43, 103, 115, 145]);
        assert_eq!(keys[1].angle, keys[2].angle);
        assert_eq!(keys[3].angle, keys[4].angle);
        assert!((keys[1].angle - 90.0_f64.to_radians()).abs() < 1e-12);
        assert_eq!(keys[5].angle, std::f64::consts::TAU);
        assert_eq!(mode.frames_used(&full_turn()), 144);
    }

    #[test]
    fn duplicate_and_out_of_range_holds_are_ignored() {
        let holds = [
            HoldPoint::new(90.0, 5),
            HoldPoint::new(90.0, 7),
            HoldPoint::new(0.0, 3),
            HoldPoint::new(200.0, 4),
        ];
        let half_turn = Sweep {
            span: std::f64::consts::PI,
            ..full_turn()
        };
        let mode = HoldSweep { holds: &holds };
        let (kept, skipped) = mode.effective_holds(&half_turn);
        assert_eq!(kept, vec![HoldPoint::new(90.0, 5)]);
        assert_eq!(skipped, 3);
        assert_eq!(mode.frames_used(&half_turn), 125);
        assert_eq!(mode.generate(&half_turn).len(), 4);
    }

    #[test]
    fn clockwise_holds_rotate_negative() {
        let holds = [HoldPoint::new(90.0, 10)];
        let sweep = Sweep {
            span: -std::f64::consts::TAU,
            ..full_turn()
        };
        let keys = HoldSweep { holds: &holds }.generate(&sweep);
        assert!((keys[1].angle + 90.0_f64.to_radians()).abs() < 1e-12);
        assert_eq!(keys.last().unwrap().angle, -std::f64::consts::TAU);
    }

    #[test]
    fn no_holds_is_linear_sweep() {
        let mode = HoldSweep { holds: &[] };
        let keys = mode.generate(&full_turn());
        assert_eq!(keys, full_turn().linear_keys());
        assert_eq!(mode.frames_used(&full_turn()), 120);
    }

    #[test]
    fn zero_rotation_keeps_no_holds() {
        let holds = [HoldPoint::new(90.0, 12)];
        let still = Sweep {
            span: 0.0,
            ..full_turn()
        };
        let mode = HoldSweep { holds: &holds };
        let (kept, skipped) = mode.effective_holds(&still);
        assert!(kept.is_empty());
        assert_eq!(skipped, 1);

        let keys = mode.generate(&still);
        assert_eq!(keys, still.linear_keys());
        assert!(keys.iter().all(|k| k.angle == 0.0));
        assert_eq!(mode.frames_used(&still), 120);
    }

    #[test]
    fn early_hold_does_not_replace_start_key() {
        let holds = [HoldPoint::new(1.0, 10)];
        let mode = HoldSweep { holds: &holds };
        let keys = mode.generate(&full_turn());

        let frames: Vec<i32> = keys.iter().map(|k| k.frame).collect();
        assert_eq!(frames, vec![1, 2, 12, 132]);
        assert_eq!(keys[0].angle, 0.0);
        assert_eq!(keys[1].angle, keys[2].angle);
        assert_eq!(mode.frames_used(&full_turn()), 131);
    }

    #[test]
    fn close_holds_keep_both_plateaus() {
        let holds = [HoldPoint::new(90.0, 12), HoldPoint::new(91.0, 12)];
        let mode = HoldSweep { holds: &holds };
        let keys = mode.generate(&full_turn());

        let frames: Vec<i32> = keys.iter().map(|k| k.frame).collect();
        assert_eq!(frames, vec![1, 31, 43, 44, 56, 146]);
        assert_eq!(keys[1].angle, keys[2].angle);
        assert_eq!(keys[3].angle, keys[4].angle);
        assert!(keys[3].angle > keys[2].angle);
        assert_eq!(mode.frames_used(&full_turn()), 145);
    }

    #[test]
    fn hold_at_full_span_ends_on_plateau() {
        let holds = [HoldPoint::new(360.0, 8)];
        let mode = HoldSweep { holds: &holds };
        let keys = mode.generate(&full_turn());

        let frames: Vec<i32> = keys.iter().map(|k| k.frame).collect();
        assert_eq!(frames, vec![1, 121, 129]);
        assert_eq!(keys[2].angle, std::f64::consts::TAU);
        assert_eq!(mode.frames_used(&full_turn()), 128);
    }
}
