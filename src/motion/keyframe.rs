use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::easing::{EasingDirection, Interpolation};

/// One rotation key on the rig's turntable track.
///
/// `interpolation` and `easing` shape the segment from this key to the
/// next one; they are ignored on the last key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Frame number.
    pub frame: i32,
    /// Rotation in radians.
    pub angle: f64,
    /// Interpolation toward the next key.
    pub interpolation: Interpolation,
    /// Easing direction for easing-family interpolations.
    pub easing: EasingDirection,
}

impl Keyframe {
    /// Linear key.
    pub fn linear(frame: i32, angle: f64) -> Self {
        Self::eased(frame, angle, Interpolation::Linear, EasingDirection::Auto)
    }

    /// Key with an explicit interpolation and easing direction.
    pub fn eased(
        frame: i32,
        angle: f64,
        interpolation: Interpolation,
        easing: EasingDirection,
    ) -> Self {
        Self {
            frame,
            angle,
            interpolation,
            easing,
        }
    }
}

/// Ordered keyframe track with strictly increasing frames.
///
/// Inserting at an existing frame overwrites that key, the way a host
/// keyframe insert replaces the key under the playhead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MotionCurve {
    keys: Vec<Keyframe>,
}

impl MotionCurve {
    /// Empty curve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key`, replacing any key already at its frame.
    pub fn insert(&mut self, key: Keyframe) {
        match self.keys.binary_search_by_key(&key.frame, |k| k.frame) {
            Ok(i) => self.keys[i] = key,
            Err(i) => self.keys.insert(i, key),
        }
    }

    /// Change the interpolation of the key at `frame`. Returns `false` when
    /// no key sits on that frame.
    pub fn set_interpolation(
        &mut self,
        frame: i32,
        interpolation: Interpolation,
        easing: EasingDirection,
    ) -> bool {
        let Ok(i) = self.keys.binary_search_by_key(&frame, |k| k.frame) else {
            return false;
        };
        self.keys[i].interpolation = interpolation;
        self.keys[i].easing = easing;
        true
    }

    /// Keys in frame order.
    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the curve has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// First key.
    pub fn first(&self) -> Option<&Keyframe> {
        self.keys.first()
    }

    /// Last key.
    pub fn last(&self) -> Option<&Keyframe> {
        self.keys.last()
    }

    /// Key at exactly `frame`.
    pub fn key_at(&self, frame: i32) -> Option<&Keyframe> {
        self.keys
            .binary_search_by_key(&frame, |k| k.frame)
            .ok()
            .map(|i| &self.keys[i])
    }

    /// Evaluate the angle at a (possibly fractional) frame.
    ///
    /// Frames before the first key or after the last one hold the nearest
    /// key's angle. Returns `None` on an empty curve.
    pub fn sample(&self, frame: f64) -> Option<f64> {
        let first = self.keys.first()?;
        let last = self.keys.last()?;
        if frame <= f64::from(first.frame) {
            return Some(first.angle);
        }
        if frame >= f64::from(last.frame) {
            return Some(last.angle);
        }
        let next = self.keys.partition_point(|k| f64::from(k.frame) <= frame);
        let (from, to) = (&self.keys[next - 1], &self.keys[next]);
        let span = f64::from(to.frame - from.frame);
        let t = (frame - f64::from(from.frame)) / span;
        let eased = from.interpolation.evaluate(from.easing, t);
        Some(from.angle + (to.angle - from.angle) * eased)
    }
}

/// Animated property a curve is written to on the host rig.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetProperty {
    /// Property path on the rig object.
    pub data_path: String,
    /// Array component of the property.
    pub index: u32,
}

impl Default for TargetProperty {
    fn default() -> Self {
        Self {
            data_path: "rotation_euler".to_owned(),
            index: 2,
        }
    }
}

impl fmt::Display for TargetProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.data_path, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_frames_sorted_and_unique() {
        let mut curve = MotionCurve::new();
        curve.insert(Keyframe::linear(10, 1.0));
        curve.insert(Keyframe::linear(1, 0.0));
        curve.insert(Keyframe::linear(5, 0.5));
        curve.insert(Keyframe::linear(5, 0.7));

        let frames: Vec<i32> = curve.keys().iter().map(|k| k.frame).collect();
        assert_eq!(frames, vec![1, 5, 10]);
        assert_eq!(curve.key_at(5).map(|k| k.angle), Some(0.7));
    }

    #[test]
    fn set_interpolation_requires_existing_key() {
        let mut curve = MotionCurve::new();
        curve.insert(Keyframe::linear(1, 0.0));
        assert!(curve.set_interpolation(
            1,
            Interpolation::Sine,
            EasingDirection::Out
        ));
        assert!(!curve.set_interpolation(
            2,
            Interpolation::Sine,
            EasingDirection::Out
        ));
        assert_eq!(curve.keys()[0].interpolation, Interpolation::Sine);
    }

    #[test]
    fn sample_linear_and_clamped() {
        let mut curve = MotionCurve::new();
        assert_eq!(curve.sample(3.0), None);
        curve.insert(Keyframe::linear(1, 0.0));
        curve.insert(Keyframe::linear(11, 1.0));

        assert_eq!(curve.sample(-5.0), Some(0.0));
        assert_eq!(curve.sample(50.0), Some(1.0));
        let mid = curve.sample(6.0).unwrap();
        assert!((mid - 0.5).abs() < 1e-12);
    }

    #[test]
    fn sample_follows_source_key_interpolation() {
        let mut curve = MotionCurve::new();
        curve.insert(Keyframe::eased(
            0,
            0.0,
            Interpolation::Constant,
            EasingDirection::Auto,
        ));
        curve.insert(Keyframe::linear(10, 2.0));
        curve.insert(Keyframe::linear(20, 4.0));

        assert_eq!(curve.sample(9.0), Some(0.0));
        let later = curve.sample(15.0).unwrap();
        assert!((later - 3.0).abs() < 1e-12);
    }

    #[test]
    fn default_target_is_z_rotation() {
        assert_eq!(TargetProperty::default().to_string(), "rotation_euler[2]");
    }
}
