//! Shared utilities.
//!
//! Easing curves used by keyframe interpolation.

pub mod easing;
