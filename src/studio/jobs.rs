use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StudioError;
use crate::framing::FineTune;
use crate::motion::{MotionSpec, TargetProperty};
use crate::options::MAIN_VIEW;
use crate::scene::SceneObject;

/// Background of a rendered image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundSpec {
    /// Solid linear RGB color; `None` keeps the host's own background.
    pub color: Option<[f32; 3]>,
}

impl BackgroundSpec {
    /// Solid color background.
    pub fn solid(color: [f32; 3]) -> Self {
        Self { color: Some(color) }
    }
}

/// One still render from a named view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StillJob {
    /// View name in the view table.
    pub view: String,
    /// Animation frame the geometry is evaluated at.
    pub frame: i32,
    /// Adjustment applied after framing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fine_tune: Option<FineTune>,
    /// Render background.
    pub background: BackgroundSpec,
}

impl Default for StillJob {
    fn default() -> Self {
        Self {
            view: MAIN_VIEW.to_owned(),
            frame: 1,
            fine_tune: None,
            background: BackgroundSpec::default(),
        }
    }
}

impl StillJob {
    /// Still of `view` at frame 1.
    pub fn new(view: &str) -> Self {
        Self {
            view: view.to_owned(),
            ..Self::default()
        }
    }
}

/// One turntable render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurntableJob {
    /// Motion to synthesize.
    pub motion: MotionSpec,
    /// Rig property the curve drives.
    pub target: TargetProperty,
    /// File-name suffix of the frame sequence.
    pub suffix: String,
}

impl Default for TurntableJob {
    fn default() -> Self {
        Self {
            motion: MotionSpec::default(),
            target: TargetProperty::default(),
            suffix: "_Turntable".to_owned(),
        }
    }
}

/// A batch description: the scene, the collection to frame, and the
/// renders to produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobFile {
    /// Collection holding the product.
    pub collection: String,
    /// Scene contents.
    #[serde(default)]
    pub objects: Vec<SceneObject>,
    /// Still renders, in order.
    #[serde(default)]
    pub stills: Vec<StillJob>,
    /// Optional turntable render.
    #[serde(default)]
    pub turntable: Option<TurntableJob>,
}

impl JobFile {
    /// Parse a job description from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, StudioError> {
        toml::from_str(content).map_err(|e| StudioError::JobParse(e.to_string()))
    }

    /// Load a job description from a TOML file.
    pub fn load(path: &Path) -> Result<Self, StudioError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::ScrubMode;

    #[test]
    fn job_file_from_toml() {
        let job = JobFile::from_toml(
            r#"
collection = "Product"

[[objects]]
name = "Body"
collections = ["Product"]
vertices = [[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]

[[stills]]
view = "Front"
background = { color = [1.0, 1.0, 1.0] }

[[stills]]
view = "Main"
fine_tune = { scale = 1.2 }

[turntable.motion]
duration = 90
scrub = { mode = "random", seed = 7, intensity = 0.4, point_count = 8 }
"#,
        )
        .unwrap();
        assert_eq!(job.collection, "Product");
        assert_eq!(job.objects.len(), 1);
        assert_eq!(job.stills[0].background, BackgroundSpec::solid([1.0; 3]));
        assert_eq!(job.stills[1].frame, 1);
        let fine_tune = job.stills[1].fine_tune.unwrap();
        assert_eq!(fine_tune.scale, 1.2);
        assert_eq!(fine_tune.position_offset, [0.0; 3]);
        let turntable = job.turntable.unwrap();
        assert_eq!(turntable.suffix, "_Turntable");
        assert_eq!(turntable.motion.duration, 90);
        assert!(matches!(
            turntable.motion.scrub,
            ScrubMode::Random { point_count: 8, allow_reverse: false, .. }
        ));
    }

    #[test]
    fn missing_collection_is_a_parse_error() {
        let err = JobFile::from_toml("stills = []").unwrap_err();
        assert!(matches!(err, StudioError::JobParse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = JobFile::load(Path::new("/nonexistent/studioframe/job.toml"))
            .unwrap_err();
        assert!(matches!(err, StudioError::Io(_)));
    }
}
