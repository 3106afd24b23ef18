//! Studio job orchestration.
//!
//! Stills and turntables are thin sequences of host calls around the
//! framing and motion core: rotate the rig, snapshot, frame, apply,
//! render. The host is anything implementing [`StudioHost`];
//! [`MemoryHost`] records the calls in memory.

mod jobs;
mod memory;
mod preview;
mod run;

pub use jobs::{BackgroundSpec, JobFile, StillJob, TurntableJob};
pub use memory::{MemoryHost, RenderRecord};
pub use preview::LivePreview;
pub use run::{
    frame_view, run_still, run_turntable, StillOutcome, TurntableOutcome,
};

use crate::scene::{CameraSink, GeometrySource, MotionSink};

/// Everything a studio batch needs from the host application.
pub trait StudioHost: GeometrySource + CameraSink + MotionSink {
    /// Set the animation frame range, inclusive.
    fn set_frame_range(&mut self, start: i32, end: i32);

    /// Render the current scene to `output` over `background`.
    fn render_scene(&mut self, background: &BackgroundSpec, output: &str);
}
