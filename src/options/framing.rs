use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Smallest margin accepted; negative margins zoom in past the frame edge.
pub const MIN_MARGIN: f32 = -0.5;
/// Largest margin accepted.
pub const MAX_MARGIN: f32 = 0.95;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Framing", inline)]
#[serde(default)]
/// Auto-framing solver parameters.
pub struct FramingOptions {
    /// Fraction of frame border reserved around the geometry.
    #[schemars(title = "Margin", range(min = -0.5, max = 0.95), extend("step" = 0.01))]
    pub margin: f32,
    /// Use orthographic projection for orthographic-eligible views.
    #[schemars(title = "Orthographic Standard Views")]
    pub use_orthographic: bool,
    /// Refinement iterations before giving up on containment.
    #[schemars(skip)]
    pub max_iterations: u32,
    /// Working-margin increase per failed containment check.
    #[schemars(skip)]
    pub margin_step: f32,
    /// Upper bound for the working margin.
    #[schemars(skip)]
    pub margin_cap: f32,
    /// Camera distance used when the field of view is degenerate.
    #[schemars(skip)]
    pub fallback_distance: f32,
    /// Orthographic camera distance as a multiple of the AABB diagonal.
    #[schemars(skip)]
    pub ortho_distance_factor: f32,
    /// Blend the rig center toward the vertex centroid for lopsided shapes.
    #[schemars(title = "Centroid Blend")]
    pub centroid_blend: bool,
    /// Re-check containment after the recentering shift is applied.
    #[schemars(skip)]
    pub revalidate_after_shift: bool,
}

impl Default for FramingOptions {
    fn default() -> Self {
        Self {
            margin: 0.1,
            use_orthographic: false,
            max_iterations: 5,
            margin_step: 0.02,
            margin_cap: 0.5,
            fallback_distance: 10.0,
            ortho_distance_factor: 2.5,
            centroid_blend: true,
            revalidate_after_shift: true,
        }
    }
}

impl FramingOptions {
    /// Margin clamped into the supported range.
    #[must_use]
    pub fn clamped_margin(&self) -> f32 {
        clamp_margin(self.margin)
    }
}

/// Clamp a margin into `[MIN_MARGIN, MAX_MARGIN]`; NaN becomes zero.
#[must_use]
pub fn clamp_margin(margin: f32) -> f32 {
    if margin.is_nan() {
        return 0.0;
    }
    margin.clamp(MIN_MARGIN, MAX_MARGIN)
}
