//! Main-rotation strategies.
//!
//! Each scrub mode is a [`RotationMode`] that fills the main-rotation
//! window of a turntable with keys. Strategies are interchangeable: the
//! synthesizer only sees the trait.

mod easing;
mod holds;
mod random;
mod segments;
mod traits;

pub use easing::EasingSweep;
pub use holds::HoldSweep;
pub use random::RandomSweep;
pub use segments::{allocate_frames, SegmentSweep, MAX_SPEED, MIN_SPEED};
pub use traits::{RotationMode, Sweep};

use super::params::ScrubMode;
use crate::options::RandomTuning;

impl ScrubMode {
    /// Strategy implementing this mode.
    pub fn strategy(&self, tuning: RandomTuning) -> Box<dyn RotationMode + '_> {
        match self {
            Self::Easing {
                interpolation,
                direction,
            } => Box::new(EasingSweep {
                interpolation: *interpolation,
                direction: *direction,
            }),
            Self::MultiSegment { segments } => {
                Box::new(SegmentSweep { speeds: segments })
            }
            Self::Random {
                seed,
                intensity,
                point_count,
                allow_reverse,
            } => Box::new(RandomSweep {
                seed: *seed,
                intensity: *intensity,
                point_count: *point_count,
                allow_reverse: *allow_reverse,
                tuning,
            }),
            Self::HoldPoints { holds } => Box::new(HoldSweep { holds }),
        }
    }
}
