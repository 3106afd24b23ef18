use glam::Vec3;
use serde::Serialize;

use super::jobs::BackgroundSpec;
use super::StudioHost;
use crate::framing::FramingResult;
use crate::motion::{MotionCurve, TargetProperty};
use crate::scene::{
    CameraSink, ExclusionRules, GeometrySource, MotionSink, SceneSnapshot,
};

/// A render the host was asked to produce.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderRecord {
    /// Output name (collection plus view suffix).
    pub output: String,
    /// Requested background.
    pub background: BackgroundSpec,
    /// Camera placement at render time, if any was applied.
    pub placement: Option<FramingResult>,
    /// Frame range at render time.
    pub frame_range: (i32, i32),
}

/// Host that keeps everything in memory and records every call.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    scene: SceneSnapshot,
    placement: Option<FramingResult>,
    curves: Vec<(TargetProperty, MotionCurve)>,
    frame_range: (i32, i32),
    renders: Vec<RenderRecord>,
}

impl MemoryHost {
    /// Host over `scene`, frame range 1..=1.
    pub fn new(scene: SceneSnapshot) -> Self {
        Self {
            scene,
            frame_range: (1, 1),
            ..Self::default()
        }
    }

    /// Last applied camera placement.
    pub fn placement(&self) -> Option<&FramingResult> {
        self.placement.as_ref()
    }

    /// Curve currently on `target`.
    pub fn curve(&self, target: &TargetProperty) -> Option<&MotionCurve> {
        self.curves
            .iter()
            .find(|(t, _)| t == target)
            .map(|(_, curve)| curve)
    }

    /// Current frame range.
    pub fn frame_range(&self) -> (i32, i32) {
        self.frame_range
    }

    /// Renders requested so far.
    pub fn renders(&self) -> &[RenderRecord] {
        &self.renders
    }
}

impl GeometrySource for MemoryHost {
    fn get_snapshot(
        &self,
        collection: &str,
        rules: &ExclusionRules,
        frame: i32,
    ) -> Vec<Vec3> {
        self.scene.get_snapshot(collection, rules, frame)
    }
}

impl CameraSink for MemoryHost {
    fn apply_camera_placement(&mut self, placement: &FramingResult) {
        self.placement = Some(*placement);
    }
}

impl MotionSink for MemoryHost {
    fn apply_motion_curve(&mut self, curve: &MotionCurve, target: &TargetProperty) {
        self.clear_motion_curve(target);
        self.curves.push((target.clone(), curve.clone()));
    }

    fn clear_motion_curve(&mut self, target: &TargetProperty) {
        self.curves.retain(|(t, _)| t != target);
    }
}

impl StudioHost for MemoryHost {
    fn set_frame_range(&mut self, start: i32, end: i32) {
        self.frame_range = (start, end);
    }

    fn render_scene(&mut self, background: &BackgroundSpec, output: &str) {
        log::info!("render '{output}'");
        self.renders.push(RenderRecord {
            output: output.to_owned(),
            background: *background,
            placement: self.placement,
            frame_range: self.frame_range,
        });
    }
}
