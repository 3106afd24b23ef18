use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Name of the view used to frame turntables.
pub const MAIN_VIEW: &str = "Main";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
/// A named studio viewpoint.
pub struct ViewPreset {
    /// View name (also the lookup key).
    pub name: String,
    /// Rig rotation as XYZ Euler angles in degrees.
    pub rotation_degrees: [f32; 3],
    /// File-name suffix for renders of this view.
    pub suffix: String,
    /// Whether this view switches to orthographic when enabled.
    pub orthographic: bool,
}

impl ViewPreset {
    fn new(name: &str, rotation_degrees: [f32; 3], orthographic: bool) -> Self {
        Self {
            name: name.to_owned(),
            rotation_degrees,
            suffix: format!("_{name}"),
            orthographic,
        }
    }
}

/// Immutable table of named viewpoints.
///
/// Serialized as a plain list so presets can replace or extend it; lookups
/// are by exact name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(transparent)]
pub struct ViewTable {
    views: Vec<ViewPreset>,
}

impl Default for ViewTable {
    fn default() -> Self {
        Self::new(vec![
            ViewPreset::new(MAIN_VIEW, [71.9, 0.0, 15.7], false),
            ViewPreset::new("Front", [90.0, 0.0, 0.0], true),
            ViewPreset::new("Back", [90.0, 0.0, 180.0], true),
            ViewPreset::new("Left", [90.0, 0.0, 90.0], true),
            ViewPreset::new("Right", [90.0, 0.0, -90.0], true),
            ViewPreset::new("Top", [0.0, 0.0, 0.0], true),
            ViewPreset::new("Bottom", [180.0, 0.0, 0.0], true),
            ViewPreset::new("PropISO", [71.9, 0.0, 15.7], false),
        ])
    }
}

impl ViewTable {
    /// Table from an explicit list of views.
    #[must_use]
    pub fn new(views: Vec<ViewPreset>) -> Self {
        Self { views }
    }

    /// Look up a view by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ViewPreset> {
        self.views.iter().find(|v| v.name == name)
    }

    /// All views in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ViewPreset> {
        self.views.iter()
    }

    /// Number of views.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Whether the table holds no views.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_studio_views() {
        let table = ViewTable::default();
        assert_eq!(table.len(), 8);
        let main = table.get(MAIN_VIEW).unwrap();
        assert_eq!(main.rotation_degrees, [71.9, 0.0, 15.7]);
        assert!(!main.orthographic);
        assert_eq!(table.get("Top").unwrap().suffix, "_Top");
        assert!(table.get("Front").unwrap().orthographic);
        assert!(table.get("Missing").is_none());
    }
}
