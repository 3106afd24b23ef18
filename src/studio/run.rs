//! Still and turntable jobs over a [`StudioHost`].

use serde::Serialize;

use super::jobs::{BackgroundSpec, StillJob, TurntableJob};
use super::StudioHost;
use crate::camera::{CameraRig, ProjectionKind};
use crate::framing::{choose_projection, Framer, FramingResult};
use crate::motion::{MotionCurve, TurntableSynthesizer, FIRST_FRAME};
use crate::options::{Options, ViewPreset, MAIN_VIEW};
use crate::scene::{ExclusionRules, GeometrySource};

/// What a still job produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StillOutcome {
    /// View that was rendered.
    pub view: String,
    /// Output name handed to the host.
    pub output: String,
    /// Final placement; `None` when there was nothing to frame.
    pub placement: Option<FramingResult>,
}

/// What a turntable job produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurntableOutcome {
    /// Output name handed to the host.
    pub output: String,
    /// Placement at the main view; `None` when there was nothing to frame.
    pub placement: Option<FramingResult>,
    /// Animation length in frames.
    pub total_frames: i32,
    /// Rotation curve applied during the render.
    pub curve: MotionCurve,
}

/// Rotate the rig to `view`, frame the collection as it is at `job.frame`
/// and apply the job's fine-tune. Does not touch the host camera.
pub fn frame_view<H: GeometrySource + ?Sized>(
    host: &H,
    rig: &mut CameraRig,
    collection: &str,
    view: &ViewPreset,
    job: &StillJob,
    options: &Options,
) -> Option<FramingResult> {
    rig.set_rotation_degrees(view.rotation_degrees);
    let rules = ExclusionRules::from(&options.exclusion);
    let points = host.get_snapshot(collection, &rules, job.frame);
    let projection = choose_projection(options.framing.use_orthographic, view);
    let framer = Framer::new(&options.framing, options.render.frame());
    let framed = framer.frame(rig, &points, projection, collection)?;

    match job.fine_tune {
        Some(fine_tune) if !fine_tune.is_identity() => {
            fine_tune.apply(rig);
            Some(FramingResult::from_rig(
                rig,
                framed.iterations_used,
                framed.converged,
            ))
        }
        _ => Some(framed),
    }
}

/// Frame, place and render one still.
///
/// An unknown view is skipped with a warning. Empty geometry still
/// renders, with the camera left where it was.
pub fn run_still<H: StudioHost + ?Sized>(
    host: &mut H,
    rig: &mut CameraRig,
    collection: &str,
    job: &StillJob,
    options: &Options,
) -> Option<StillOutcome> {
    let Some(view) = options.views.get(&job.view) else {
        log::warn!("unknown view '{}'; skipping still", job.view);
        return None;
    };
    let placement = frame_view(host, rig, collection, view, job, options);
    if let Some(placement) = &placement {
        host.apply_camera_placement(placement);
    }

    let output = format!("{collection}{}", view.suffix);
    log::info!("rendering still '{output}'");
    host.render_scene(&job.background, &output);
    Some(StillOutcome {
        view: view.name.clone(),
        output,
        placement,
    })
}

/// Frame at the main view, synthesize the rotation, and render the
/// turntable. The curve is cleared from the host after the render.
pub fn run_turntable<H: StudioHost + ?Sized>(
    host: &mut H,
    rig: &mut CameraRig,
    collection: &str,
    job: &TurntableJob,
    options: &Options,
) -> TurntableOutcome {
    host.clear_motion_curve(&job.target);

    let rotation = options
        .views
        .get(MAIN_VIEW)
        .map_or([71.9, 0.0, 15.7], |v| v.rotation_degrees);
    rig.set_rotation_degrees(rotation);
    let rules = ExclusionRules::from(&options.exclusion);
    let points = host.get_snapshot(collection, &rules, FIRST_FRAME);
    let framer = Framer::new(&options.framing, options.render.frame());
    let placement =
        framer.frame(rig, &points, ProjectionKind::Perspective, collection);
    if let Some(placement) = &placement {
        host.apply_camera_placement(placement);
    }

    let synthesizer = TurntableSynthesizer::new(options.turntable.random);
    let (curve, plan) = synthesizer.synthesize(&job.motion);
    let total_frames = plan.total_frames();
    host.set_frame_range(FIRST_FRAME, total_frames.max(1));
    host.apply_motion_curve(&curve, &job.target);

    let output = format!("{collection}{}", job.suffix);
    log::info!(
        "rendering turntable '{output}': {total_frames} frames, {} keys on {}",
        curve.len(),
        job.target
    );
    host.render_scene(&BackgroundSpec::default(), &output);
    host.clear_motion_curve(&job.target);

    TurntableOutcome {
        output,
        placement,
        total_frames,
        curve,
    }
}
