use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::RenderFrame;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Render", inline)]
#[serde(default)]
/// Output resolution settings mirrored from the host.
pub struct RenderOptions {
    /// Output width in pixels.
    #[schemars(title = "Width", range(min = 1))]
    pub resolution_x: u32,
    /// Output height in pixels.
    #[schemars(title = "Height", range(min = 1))]
    pub resolution_y: u32,
    /// Resolution scale in percent.
    #[schemars(title = "Scale", range(min = 1, max = 100))]
    pub resolution_percentage: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            resolution_x: 1920,
            resolution_y: 1080,
            resolution_percentage: 100,
        }
    }
}

impl RenderOptions {
    /// Frame description consumed by the framing solver.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        RenderFrame {
            resolution_x: self.resolution_x,
            resolution_y: self.resolution_y,
            resolution_percentage: self.resolution_percentage,
        }
    }
}
