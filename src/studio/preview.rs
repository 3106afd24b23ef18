use std::sync::atomic::{AtomicBool, Ordering};

use super::jobs::StillJob;
use super::run::frame_view;
use crate::camera::CameraRig;
use crate::framing::{FramingLock, FramingResult};
use crate::options::Options;
use crate::scene::{CameraSink, GeometrySource};

/// Re-frames the camera while the user scrubs the timeline.
///
/// Timeline frame `n` previews still job `n - 1`. Passes are skipped while
/// live updates are disabled or another pass on the same camera is still
/// running.
#[derive(Debug, Default)]
pub struct LivePreview {
    lock: FramingLock,
    disabled: AtomicBool,
}

impl LivePreview {
    /// Enabled preview.
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn live updates off or back on.
    pub fn set_live_updates(&self, enabled: bool) {
        self.disabled.store(!enabled, Ordering::Relaxed);
    }

    /// Whether live updates are on.
    pub fn live_updates(&self) -> bool {
        !self.disabled.load(Ordering::Relaxed)
    }

    /// The framing lock guarding this camera.
    pub fn lock(&self) -> &FramingLock {
        &self.lock
    }

    /// Frame-change callback. Returns the applied placement, or `None` if
    /// nothing was previewed.
    pub fn on_frame_change<H: GeometrySource + CameraSink + ?Sized>(
        &self,
        host: &mut H,
        rig: &mut CameraRig,
        collection: &str,
        stills: &[StillJob],
        options: &Options,
        current_frame: i32,
    ) -> Option<FramingResult> {
        if !self.live_updates() {
            return None;
        }
        let index = usize::try_from(current_frame - 1).ok()?;
        let job = stills.get(index)?;
        let view = options.views.get(&job.view)?;
        let Some(_pass) = self.lock.try_begin() else {
            log::debug!("framing pass already running; skipping preview");
            return None;
        };

        let placement = frame_view(host, rig, collection, view, job, options)?;
        host.apply_camera_placement(&placement);
        Some(placement)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::scene::{SceneObject, SceneSnapshot};
    use crate::studio::MemoryHost;

    fn host() -> MemoryHost {
        MemoryHost::new(SceneSnapshot::new(vec![SceneObject::mesh(
            "Body",
            "Product",
            vec![Vec3::ZERO, Vec3::ONE, Vec3::new(1.0, 0.0, 0.5)],
        )]))
    }

    fn stills() -> Vec<StillJob> {
        vec![StillJob::new("Main"), StillJob::new("Front")]
    }

    #[test]
    fn frame_selects_still_job() {
        let preview = LivePreview::new();
        let mut host = host();
        let mut rig = CameraRig::default();
        let options = Options::default();

        let placement = preview
            .on_frame_change(&mut host, &mut rig, "Product", &stills(), &options, 2)
            .unwrap();
        assert_eq!(host.placement(), Some(&placement));
        assert_eq!(rig.rotation, Vec3::new(90.0_f32.to_radians(), 0.0, 0.0));
        assert!(!preview.lock().is_busy());

        for frame in [0, 3, -4] {
            assert!(preview
                .on_frame_change(&mut host, &mut rig, "Product", &stills(), &options, frame)
                .is_none());
        }
    }

    #[test]
    fn disabled_or_busy_preview_does_nothing() {
        let preview = LivePreview::new();
        let mut host = host();
        let mut rig = CameraRig::default();
        let options = Options::default();

        preview.set_live_updates(false);
        assert!(preview
            .on_frame_change(&mut host, &mut rig, "Product", &stills(), &options, 1)
            .is_none());
        preview.set_live_updates(true);

        let pass = preview.lock().try_begin();
        assert!(pass.is_some());
        assert!(preview
            .on_frame_change(&mut host, &mut rig, "Product", &stills(), &options, 1)
            .is_none());
        drop(pass);
        assert!(host.placement().is_none());
        assert!(preview
            .on_frame_change(&mut host, &mut rig, "Product", &stills(), &options, 1)
            .is_some());
    }
}
