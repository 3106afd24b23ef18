use super::traits::{RotationMode, Sweep};
use crate::error::MotionIssue;
use crate::motion::keyframe::Keyframe;

/// Slowest accepted segment speed.
pub const MIN_SPEED: f64 = 0.1;
/// Fastest accepted segment speed.
pub const MAX_SPEED: f64 = 5.0;

/// Equal angular slices, each given frames inversely proportional to its
/// speed multiplier. Constant velocity inside a slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSweep<'a> {
    /// Speed multiplier per slice, in rotation order.
    pub speeds: &'a [f64],
}

/// Frames per slice for `budget` frames.
///
/// Each slice gets its share of the budget by inverse speed, floored and
/// at least one frame. Frames lost to flooring go to the slices with the
/// largest remainders and frames added by the minimum come off the longest
/// slices, so the total equals the budget whenever the budget covers one
/// frame per slice.
#[allow(clippy::cast_possible_truncation)]
pub fn allocate_frames(speeds: &[f64], budget: i32) -> Vec<i32> {
    if speeds.is_empty() {
        return Vec::new();
    }
    let weights: Vec<f64> = speeds
        .iter()
        .map(|s| 1.0 / s.clamp(MIN_SPEED, MAX_SPEED))
        .collect();
    let total_weight: f64 = weights.iter().sum();
    let shares: Vec<f64> = weights
        .iter()
        .map(|w| f64::from(budget) * w / total_weight)
        .collect();

    let mut frames: Vec<i32> =
        shares.iter().map(|s| (s.floor() as i32).max(1)).collect();
    let deficit = budget - frames.iter().sum::<i32>();
    if deficit > 0 {
        let mut order: Vec<usize> = (0..shares.len()).collect();
        order.sort_by(|&a, &b| {
            let ra = shares[a] - shares[a].floor();
            let rb = shares[b] - shares[b].floor();
            rb.total_cmp(&ra).then(a.cmp(&b))
        });
        for &i in order.iter().cycle().take(deficit.unsigned_abs() as usize) {
            frames[i] += 1;
        }
    } else {
        // One-frame minimums can overshoot; take back from the longest.
        for _ in 0..deficit.unsigned_abs() {
            let Some(longest) = frames
                .iter_mut()
                .filter(|f| **f > 1)
                .max_by_key(|f| **f)
            else {
                break;
            };
            *longest -= 1;
        }
    }
    frames
}

impl RotationMode for SegmentSweep<'_> {
    fn frames_used(&self, sweep: &Sweep) -> i32 {
        if self.speeds.is_empty() {
            return sweep.frame_budget;
        }
        allocate_frames(self.speeds, sweep.frame_budget).iter().sum()
    }

    #[allow(clippy::cast_precision_loss)]
    fn generate(&self, sweep: &Sweep) -> Vec<Keyframe> {
        if self.speeds.is_empty() {
            log::warn!("{}", MotionIssue::NoSegments);
            return sweep.linear_keys();
        }
        let slice = sweep.span / self.speeds.len() as f64;
        let allocation = allocate_frames(self.speeds, sweep.frame_budget);
        let last = allocation.len() - 1;

        let mut keys = Vec::with_capacity(allocation.len() + 1);
        keys.push(Keyframe::linear(sweep.start_frame, sweep.start_angle));
        let mut frame = sweep.start_frame;
        for (i, frames) in allocation.iter().enumerate() {
            frame += frames;
            let angle = if i == last {
                sweep.end_angle()
            } else {
                sweep.start_angle + slice * (i + 1) as f64
            };
            keys.push(Keyframe::linear(frame, angle));
        }
        keys
    }

    fn name(&self) -> &'static str {
        "multi_segment"
    }
}
